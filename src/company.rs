//! Company identity and XBRL endpoints.
//!
//! This module covers two sets of SEC-provided data:
//! - The ticker ↔ CIK list used to find the identifier every other call needs.
//! - XBRL "company concept", "company facts" and cross-company "frames", each
//!   flattened into one row per reported value.
//!
//! Most users will start with `company_cik("AAPL")` to resolve a ticker, then call
//! `company_facts` or `company_concept` depending on whether they need every
//! concept a company reports or a single series.

use super::CompanyOperations;
use super::Edgar;
use super::cik::Cik;
use super::document::{DocumentKind, FlattenOptions};
use super::error::{EdgarError, Result};
use super::parsing::tickers::CompanyTickers;
use super::table::Table;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug)]
enum CompanyUrlType {
    CompanyTickers,
    CompanyFacts,
    CompanyConcept,
    Frames,
}

/// Builds EDGAR API URLs for company/XBRL endpoints.
///
/// Internal helper; CIK parameters must already be in canonical `CIK##########` form.
impl Edgar {
    fn build_company_url(&self, url_type: CompanyUrlType, params: &[&str]) -> String {
        match url_type {
            CompanyUrlType::CompanyTickers => {
                format!("{}/company_tickers.json", self.edgar_files_url)
            }
            CompanyUrlType::CompanyFacts => format!(
                "{}/api/xbrl/companyfacts/{}.json",
                self.edgar_data_url, params[0]
            ),
            CompanyUrlType::CompanyConcept => {
                let (cik, taxonomy, tag) = (params[0], params[1], params[2]);
                format!(
                    "{}/api/xbrl/companyconcept/{}/{}/{}.json",
                    self.edgar_data_url, cik, taxonomy, tag
                )
            }
            CompanyUrlType::Frames => {
                let (taxonomy, tag, unit, period) = (params[0], params[1], params[2], params[3]);
                format!(
                    "{}/api/xbrl/frames/{}/{}/{}/{}.json",
                    self.edgar_data_url, taxonomy, tag, unit, period
                )
            }
        }
    }

    async fn fetch_table(
        &self,
        kind: DocumentKind,
        url: &str,
        options: FlattenOptions,
    ) -> Result<Table> {
        Ok(self.get_document(kind, url).await?.flatten(options))
    }
}

/// Company operations for the `Edgar` client.
///
/// # Examples
///
/// ```ignore
/// # use edgar_tables::{CompanyOperations, Edgar};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let edgar = Edgar::new("jane.doe@example.com")?;
///
/// let cik = edgar.company_cik("AAPL").await?;
/// let assets = edgar
///     .company_concept(&cik.to_string(), "us-gaap", "Assets")
///     .await?;
/// println!("{} Assets facts", assets.len());
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Every method may fail with `EdgarError::Transport` for HTTP problems and with
/// `MalformedRecord`, `TypeMismatch` or `JsonError` when the response does not
/// match the expected document. Methods taking a CIK return
/// `EdgarError::InvalidCik` before any request is sent if it is not in
/// `CIK##########` form.
#[async_trait]
impl CompanyOperations for Edgar {
    /// Fetches `company_tickers.json` and flattens it into `cik, ticker, title` rows,
    /// ordered by the list's index.
    ///
    /// With `parse_cik` the `cik` column holds `CIK##########` strings, otherwise the
    /// bare integers.
    async fn company_tickers(&self, parse_cik: bool) -> Result<Table> {
        let url = self.build_company_url(CompanyUrlType::CompanyTickers, &[]);
        let options = FlattenOptions::new().with_parse_cik(parse_cik);
        self.fetch_table(DocumentKind::CompanyTickers, &url, options)
            .await
    }

    /// Fetches the ticker list as typed records.
    async fn company_ticker_list(&self) -> Result<CompanyTickers> {
        let url = self.build_company_url(CompanyUrlType::CompanyTickers, &[]);
        let response = self.get(&url).await?;
        let value: Value = serde_json::from_str(&response)?;
        CompanyTickers::from_value(&value)
    }

    /// Resolves a ticker symbol (case-insensitive) to its CIK.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::TickerNotFound` if the symbol is not listed.
    async fn company_cik(&self, ticker: &str) -> Result<Cik> {
        let tickers = self.company_ticker_list().await?;
        tickers
            .find(ticker)
            .map(|record| Cik::new(record.cik))
            .ok_or_else(|| EdgarError::TickerNotFound(ticker.to_string()))
    }

    /// Fetches every XBRL fact a company reported, one row per fact.
    ///
    /// Rows follow the document: taxonomy by taxonomy, tag by tag, unit by unit.
    async fn company_facts(&self, cik: &str) -> Result<Table> {
        let cik: Cik = cik.parse()?;
        let url = self.build_company_url(CompanyUrlType::CompanyFacts, &[&cik.to_string()]);
        self.fetch_table(DocumentKind::CompanyFacts, &url, FlattenOptions::default())
            .await
    }

    /// Fetches one concept's series for a company, one row per fact.
    ///
    /// # Parameters
    ///
    /// * `cik` - `CIK##########`
    /// * `taxonomy` - e.g. `"us-gaap"`, `"dei"`, `"ifrs-full"`
    /// * `tag` - e.g. `"Assets"`
    async fn company_concept(&self, cik: &str, taxonomy: &str, tag: &str) -> Result<Table> {
        let cik: Cik = cik.parse()?;
        let url = self.build_company_url(
            CompanyUrlType::CompanyConcept,
            &[&cik.to_string(), taxonomy, tag],
        );
        self.fetch_table(DocumentKind::CompanyConcept, &url, FlattenOptions::default())
            .await
    }

    /// Fetches a frame: each entity's latest value for a concept in one period.
    ///
    /// # Parameters
    ///
    /// * `taxonomy` - e.g. `"us-gaap"`
    /// * `tag` - e.g. `"AccountsPayableCurrent"`
    /// * `unit` - e.g. `"USD"` or `"USD-per-shares"`
    /// * `period` - `CY####` for annual, `CY####Q#` for quarterly and `CY####Q#I`
    ///   for instantaneous data
    async fn frames(&self, taxonomy: &str, tag: &str, unit: &str, period: &str) -> Result<Table> {
        let url = self.build_company_url(CompanyUrlType::Frames, &[taxonomy, tag, unit, period]);
        self.fetch_table(DocumentKind::Frame, &url, FlattenOptions::default())
            .await
    }
}
