use std::time::Duration;
use thiserror::Error;

/// Failure talking to the SEC servers.
///
/// Every non-success status is surfaced as-is; nothing here is retried.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Resource not found: {url}")]
    NotFound { url: String },

    /// HTTP 429. `retry_after` is the server's `Retry-After` hint, when it sent one.
    #[error("Rate limited by SEC.gov for URL: {url}")]
    RateLimited {
        url: String,
        retry_after: Option<Duration>,
    },

    #[error("Unexpected status code: {status} for URL: {url}. Response preview: {preview}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        preview: String,
    },

    #[error(
        "Unexpected content type from URL {url}. Expected pattern {expected_pattern}, but got Content-Type: {got_content_type}. Content preview: {content_preview}..."
    )]
    UnexpectedContentType {
        url: String,
        expected_pattern: String,
        got_content_type: String,
        content_preview: String,
    },
}

#[derive(Error, Debug)]
pub enum EdgarError {
    #[error("Transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error("Malformed record: missing field `{path}`")]
    MalformedRecord { path: String },

    #[error(
        "Shape mismatch: `{path}` has {found} elements but `{reference}` has {expected}"
    )]
    ShapeMismatch {
        path: String,
        reference: String,
        expected: usize,
        found: usize,
    },

    #[error("Type mismatch at `{path}`: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Ticker not found: {0}")]
    TickerNotFound(String),

    #[error("Invalid CIK {0:?}: expected `CIK` followed by 10 digits")]
    InvalidCik(String),

    #[error("Invalid submission page {0:?}: expected `CIK##########-submissions-NNN.json`")]
    InvalidSubmissionPage(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[cfg(feature = "csv")]
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
}

/// Coarse category of an [`EdgarError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    MalformedRecord,
    ShapeMismatch,
    TypeMismatch,
    Other,
}

impl EdgarError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EdgarError::Transport(_) => ErrorKind::Transport,
            EdgarError::MalformedRecord { .. } => ErrorKind::MalformedRecord,
            EdgarError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            EdgarError::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            _ => ErrorKind::Other,
        }
    }
}

pub type Result<T> = std::result::Result<T, EdgarError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_variants() {
        let err = EdgarError::MalformedRecord {
            path: "0.ticker".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::MalformedRecord);

        let err = EdgarError::Transport(TransportError::RateLimited {
            url: "https://data.sec.gov".to_string(),
            retry_after: None,
        });
        assert_eq!(err.kind(), ErrorKind::Transport);

        assert_eq!(
            EdgarError::InvalidCik("320193".to_string()).kind(),
            ErrorKind::Other
        );
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = EdgarError::ShapeMismatch {
            path: "filings.recent.form".to_string(),
            reference: "filings.recent.accessionNumber".to_string(),
            expected: 2,
            found: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("filings.recent.form"));
        assert!(msg.contains("has 2"));

        let err = EdgarError::TypeMismatch {
            path: "units.USD[0].val".to_string(),
            expected: "number",
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "Type mismatch at `units.USD[0].val`: expected number, found string"
        );
    }
}
