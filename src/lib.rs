//! # edgar-tables - SEC EDGAR company data as tables
//!
//! edgar-tables fetches the SEC's JSON company-data endpoints and flattens each
//! response into a [`Table`]: an ordered list of column names plus one row of
//! [`Cell`]s per record.
//!
//! ## Features
//!
//! - **Company information** - ticker list, company facts, company concept and frames
//! - **Filing history** - recent filings from the submissions document plus older pages
//! - **Strict flattening** - a missing field, a wrong JSON type or unequal parallel
//!   arrays is reported with the JSON path that caused it, never silently padded
//! - **CSV export** (`csv` feature) - write any table with its header row
//!
//! The client performs exactly one GET per operation. It does not rate limit or
//! retry; an HTTP 429 comes back as [`TransportError::RateLimited`].
//!
//! ## Requirements
//!
//! edgar-tables is async and requires an async runtime such as
//! [tokio](https://tokio.rs).
//!
//! ## Basic Usage
//!
//! ```ignore
//! use edgar_tables::{CompanyOperations, Edgar};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The SEC requires a contact email in the User-Agent header
//!     let edgar = Edgar::new("contact@example.com")?;
//!
//!     let assets = edgar
//!         .company_concept("CIK0000320193", "us-gaap", "Assets")
//!         .await?;
//!
//!     for row in assets.iter() {
//!         println!("{} {}", row.get("end").unwrap(), row.get("val").unwrap());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! Documents obtained some other way can be flattened without the client:
//!
//! ```
//! use edgar_tables::{DocumentKind, FlattenOptions, flatten_str};
//!
//! let json = r#"{"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}}"#;
//! let table = flatten_str(DocumentKind::CompanyTickers, json, FlattenOptions::default())?;
//!
//! assert_eq!(table.columns(), ["cik", "ticker", "title"]);
//! assert_eq!(table.get(0, "cik").and_then(|c| c.as_str()), Some("CIK0000320193"));
//! # Ok::<(), edgar_tables::EdgarError>(())
//! ```

mod cik;
mod config;
mod core;
mod document;
mod error;
pub mod parsing;
mod table;

#[cfg(any(feature = "company", feature = "filings"))]
mod traits;

#[cfg(feature = "company")]
mod company;
#[cfg(feature = "filings")]
mod filings;

// Core functionality (always available)
pub use cik::Cik;
pub use config::{EdgarConfig, EdgarUrls};
pub use self::core::Edgar;
pub use document::{Document, DocumentKind, FlattenOptions, flatten_str};
pub use error::{EdgarError, ErrorKind, Result, TransportError};
pub use table::{Cell, Row, Table};

pub use parsing::facts::{CompanyConcept, CompanyFacts, Concept, ConceptFact};
pub use parsing::frames::{Frame, FrameEntry};
pub use parsing::submissions::{
    EntityInfo, SubmissionFile, SubmissionHistory, SubmissionPage, SubmissionRecord,
};
pub use parsing::tickers::{CompanyTickers, TickerRecord};

#[cfg(feature = "company")]
pub use traits::CompanyOperations;
#[cfg(feature = "filings")]
pub use traits::FilingOperations;

/// Current crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
