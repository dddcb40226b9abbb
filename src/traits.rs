//! Trait definitions organizing EDGAR operations by feature area.
//!
//! Each feature has a trait that the `Edgar` client implements when the
//! feature is enabled. Users normally call the methods on `Edgar` directly;
//! the traits also let tests provide alternative implementations.

#[cfg(feature = "company")]
use super::cik::Cik;
use super::error::Result;
#[cfg(feature = "company")]
use super::parsing::tickers::CompanyTickers;
#[cfg(feature = "filings")]
use super::parsing::submissions::SubmissionHistory;
use super::table::Table;
use async_trait::async_trait;

/// Operations for company identifiers and XBRL financial data.
///
/// Every table-returning method fetches one document and flattens it into one
/// row per reported value. Company facts and company concept share a column set,
/// so their tables can be concatenated.
#[cfg(feature = "company")]
#[async_trait]
pub trait CompanyOperations {
    /// Retrieves the ticker list as a `cik, ticker, title` table.
    async fn company_tickers(&self, parse_cik: bool) -> Result<Table>;
    /// Retrieves the ticker list as typed records.
    async fn company_ticker_list(&self) -> Result<CompanyTickers>;
    /// Retrieves the Central Index Key (CIK) for a given company ticker symbol.
    async fn company_cik(&self, ticker: &str) -> Result<Cik>;
    /// Retrieves all XBRL facts for a company.
    async fn company_facts(&self, cik: &str) -> Result<Table>;
    /// Retrieves one concept's facts for a company using taxonomy and tag.
    async fn company_concept(&self, cik: &str, taxonomy: &str, tag: &str) -> Result<Table>;
    /// Retrieves a frame for a given taxonomy, concept, unit, and period.
    async fn frames(&self, taxonomy: &str, tag: &str, unit: &str, period: &str) -> Result<Table>;
}

/// Operations for a company's filing history.
#[cfg(feature = "filings")]
#[async_trait]
pub trait FilingOperations {
    /// Retrieves recent filings for a company as a table.
    async fn submissions(&self, cik: &str) -> Result<Table>;
    /// Retrieves the submissions document as typed records.
    async fn submission_history(&self, cik: &str) -> Result<SubmissionHistory>;
    /// Retrieves an older submissions page by file name.
    async fn submission_page(&self, name: &str) -> Result<Table>;
}
