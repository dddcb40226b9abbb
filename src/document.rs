//! One tagged variant per endpoint document shape.
//!
//! [`Document`] is the explicit boundary between raw JSON and tables: parsing
//! checks every field the shape declares and fails on the first problem, and
//! flattening a parsed document cannot fail.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::error::Result;
use super::parsing::facts::{CompanyConcept, CompanyFacts};
use super::parsing::frames::Frame;
use super::parsing::submissions::{SubmissionHistory, SubmissionPage};
use super::parsing::tickers::CompanyTickers;
use super::table::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    CompanyTickers,
    Submissions,
    SubmissionPage,
    CompanyConcept,
    CompanyFacts,
    Frame,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DocumentKind::CompanyTickers => "company tickers",
            DocumentKind::Submissions => "submissions",
            DocumentKind::SubmissionPage => "submission page",
            DocumentKind::CompanyConcept => "company concept",
            DocumentKind::CompanyFacts => "company facts",
            DocumentKind::Frame => "frame",
        };
        f.write_str(name)
    }
}

/// Options applied when a document is flattened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Render ticker-list CIKs as `CIK##########` instead of bare integers.
    pub parse_cik: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self { parse_cik: true }
    }
}

impl FlattenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parse_cik(mut self, parse_cik: bool) -> Self {
        self.parse_cik = parse_cik;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Document {
    CompanyTickers(CompanyTickers),
    Submissions(SubmissionHistory),
    SubmissionPage(SubmissionPage),
    CompanyConcept(CompanyConcept),
    CompanyFacts(CompanyFacts),
    Frame(Frame),
}

impl Document {
    /// Parses raw response text as a document of the given kind.
    ///
    /// # Errors
    ///
    /// * `EdgarError::JsonError` - the text is not JSON at all
    /// * `EdgarError::MalformedRecord` - a required field is missing
    /// * `EdgarError::TypeMismatch` - a field has the wrong JSON type
    /// * `EdgarError::ShapeMismatch` - parallel submission arrays differ in length
    pub fn parse(kind: DocumentKind, content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(kind, &value)
    }

    pub fn from_value(kind: DocumentKind, value: &Value) -> Result<Self> {
        Ok(match kind {
            DocumentKind::CompanyTickers => Self::CompanyTickers(CompanyTickers::from_value(value)?),
            DocumentKind::Submissions => Self::Submissions(SubmissionHistory::from_value(value)?),
            DocumentKind::SubmissionPage => Self::SubmissionPage(SubmissionPage::from_value(value)?),
            DocumentKind::CompanyConcept => Self::CompanyConcept(CompanyConcept::from_value(value)?),
            DocumentKind::CompanyFacts => Self::CompanyFacts(CompanyFacts::from_value(value)?),
            DocumentKind::Frame => Self::Frame(Frame::from_value(value)?),
        })
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            Self::CompanyTickers(_) => DocumentKind::CompanyTickers,
            Self::Submissions(_) => DocumentKind::Submissions,
            Self::SubmissionPage(_) => DocumentKind::SubmissionPage,
            Self::CompanyConcept(_) => DocumentKind::CompanyConcept,
            Self::CompanyFacts(_) => DocumentKind::CompanyFacts,
            Self::Frame(_) => DocumentKind::Frame,
        }
    }

    pub fn flatten(&self, options: FlattenOptions) -> Table {
        let table = match self {
            Self::CompanyTickers(tickers) => tickers.to_table(options.parse_cik),
            Self::Submissions(history) => history.to_table(),
            Self::SubmissionPage(page) => page.to_table(),
            Self::CompanyConcept(concept) => concept.to_table(),
            Self::CompanyFacts(facts) => facts.to_table(),
            Self::Frame(frame) => frame.to_table(),
        };
        tracing::debug!(
            "Flattened {} document into {} rows x {} columns",
            self.kind(),
            table.len(),
            table.columns().len()
        );
        table
    }
}

/// Parses and flattens in one step.
pub fn flatten_str(kind: DocumentKind, content: &str, options: FlattenOptions) -> Result<Table> {
    Ok(Document::parse(kind, content)?.flatten(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EdgarError;

    const TICKERS: &str =
        r#"{"0": {"cik_str": 320193, "ticker": "AAPL", "title": "Apple Inc."}}"#;

    #[test]
    fn test_parse_dispatches_on_kind() {
        let document = Document::parse(DocumentKind::CompanyTickers, TICKERS).unwrap();
        assert_eq!(document.kind(), DocumentKind::CompanyTickers);

        // A ticker list is not a frame.
        let err = Document::parse(DocumentKind::Frame, TICKERS).unwrap_err();
        assert!(matches!(err, EdgarError::MalformedRecord { .. }));
    }

    #[test]
    fn test_not_json() {
        let err = Document::parse(DocumentKind::CompanyFacts, "<html></html>").unwrap_err();
        assert!(matches!(err, EdgarError::JsonError(_)));
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let options = FlattenOptions::default();
        let first = flatten_str(DocumentKind::CompanyTickers, TICKERS, options).unwrap();
        let second = flatten_str(DocumentKind::CompanyTickers, TICKERS, options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_cik_option() {
        let document = Document::parse(DocumentKind::CompanyTickers, TICKERS).unwrap();
        let padded = document.flatten(FlattenOptions::new());
        let raw = document.flatten(FlattenOptions::new().with_parse_cik(false));
        assert_eq!(padded.get(0, "cik").and_then(|c| c.as_str()), Some("CIK0000320193"));
        assert_eq!(raw.get(0, "cik").and_then(|c| c.as_u64()), Some(320193));
    }
}
