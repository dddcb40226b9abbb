//! Filing history endpoints.
//!
//! `submissions/CIK##########.json` holds a company's identity and its most recent
//! filings; older filings live in numbered pages such as
//! `submissions/CIK##########-submissions-001.json`, listed under `filings.files`.

use super::Edgar;
use super::FilingOperations;
use super::cik::Cik;
use super::document::{DocumentKind, FlattenOptions};
use super::error::{EdgarError, Result};
use super::parsing::submissions::SubmissionHistory;
use super::table::Table;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug)]
enum UrlType {
    Submission,
    SubmissionPage,
}

impl Edgar {
    fn build_url(&self, url_type: UrlType, params: &[&str]) -> String {
        match url_type {
            UrlType::Submission => {
                format!("{}/submissions/{}.json", self.edgar_data_url, params[0])
            }
            UrlType::SubmissionPage => {
                format!("{}/submissions/{}", self.edgar_data_url, params[0])
            }
        }
    }
}

/// Checks a submission page name has the `CIK##########-submissions-NNN.json` form.
fn check_page_name(name: &str) -> Result<()> {
    let invalid = || EdgarError::InvalidSubmissionPage(name.to_string());
    let (cik, number) = name
        .strip_suffix(".json")
        .and_then(|stem| stem.split_once("-submissions-"))
        .ok_or_else(invalid)?;

    cik.parse::<Cik>().map_err(|_| invalid())?;
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    Ok(())
}

/// Filing history operations for the `Edgar` client.
///
/// The submissions document carries the company's identity plus its most recent
/// filings as parallel arrays, one array per attribute. Older filings are split
/// into additional pages listed under `filings.files`; each page holds the same
/// parallel arrays at its root and is fetched by name with `submission_page`.
///
/// # Examples
///
/// ```ignore
/// # use edgar_tables::{Edgar, FilingOperations};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let edgar = Edgar::new("jane.doe@example.com")?;
///
/// let history = edgar.submission_history("CIK0000320193").await?;
/// for file in &history.files {
///     let page = edgar.submission_page(&file.name).await?;
///     println!("{}: {} filings", file.name, page.len());
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// * `EdgarError::InvalidCik` - the CIK is not in `CIK##########` form
/// * `EdgarError::InvalidSubmissionPage` - the page name is not a listed page file
/// * `EdgarError::Transport` - the request failed or returned a non-success status
/// * `EdgarError::ShapeMismatch` - the parallel filing arrays differ in length
/// * `EdgarError::MalformedRecord` / `EdgarError::TypeMismatch` - the document
///   does not have the submissions shape
#[async_trait]
impl FilingOperations for Edgar {
    /// Fetches the submissions document and flattens its recent filings.
    ///
    /// One row per filing. The columns are `cik, name, sic, sicDescription`
    /// followed by every array under `filings.recent`, in document order.
    async fn submissions(&self, cik: &str) -> Result<Table> {
        let history = self.submission_history(cik).await?;
        let table = history.to_table();
        tracing::debug!("Flattened submissions for {} into {} rows", cik, table.len());
        Ok(table)
    }

    /// Fetches the submissions document as typed records, including the list of
    /// older submission pages.
    async fn submission_history(&self, cik: &str) -> Result<SubmissionHistory> {
        let cik: Cik = cik.parse()?;
        let url = self.build_url(UrlType::Submission, &[&cik.to_string()]);
        let response = self.get(&url).await?;
        let value: Value = serde_json::from_str(&response)?;
        SubmissionHistory::from_value(&value)
    }

    /// Fetches one older submissions page by the name listed in `filings.files`,
    /// e.g. `CIK0000320193-submissions-001.json`.
    ///
    /// The table has only the page's own columns; pages do not repeat the entity
    /// fields. Any other name is rejected with `EdgarError::InvalidSubmissionPage`
    /// before a request is sent.
    async fn submission_page(&self, name: &str) -> Result<Table> {
        check_page_name(name)?;
        let url = self.build_url(UrlType::SubmissionPage, &[name]);
        Ok(self
            .get_document(DocumentKind::SubmissionPage, &url)
            .await?
            .flatten(FlattenOptions::default()))
    }
}
