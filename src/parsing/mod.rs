//! Parsers for the JSON documents served by the EDGAR company-facts endpoints.
//!
//! Each submodule turns one document shape into typed records and flattens those
//! into a [`Table`](crate::Table).

mod fields;

pub mod facts;
pub mod frames;
pub mod submissions;
pub mod tickers;
