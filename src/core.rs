use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, RETRY_AFTER, USER_AGENT};
use std::time::Duration;

use super::config::{EdgarConfig, EdgarUrls};
use super::document::{Document, DocumentKind};
use super::error::{EdgarError, Result, TransportError};

const PREVIEW_CHARS: usize = 200;

/// HTTP client for the SEC EDGAR company-facts endpoints.
///
/// `Edgar` holds a configured `reqwest::Client` and the base URLs of the two SEC
/// hosts the endpoints live on. It performs exactly one GET per operation: there
/// is no rate limiter, no retry loop and no backoff. A rate-limited response
/// (HTTP 429) is handed straight back to the caller as
/// [`TransportError::RateLimited`] together with the server's `Retry-After` hint,
/// so callers that want a retry policy can build one on top.
///
/// The value is cheap to clone and holds no mutable state, so it can be shared
/// freely between tasks; the library itself never spawns any.
///
/// # Examples
///
/// ```rust
/// # use edgar_tables::Edgar;
/// let edgar = Edgar::new("jane.doe@example.com")?;
/// # Ok::<(), edgar_tables::EdgarError>(())
/// ```
///
/// Pointing the client at another host:
///
/// ```rust
/// # use edgar_tables::{Edgar, EdgarConfig, EdgarUrls};
/// # use std::time::Duration;
/// let config = EdgarConfig {
///     user_agent: "jane.doe@example.com".to_string(),
///     timeout: Duration::from_secs(60),
///     base_urls: EdgarUrls::single("http://127.0.0.1:8080"),
/// };
/// let edgar = Edgar::with_config(config)?;
/// # Ok::<(), edgar_tables::EdgarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Edgar {
    /// HTTP client for making requests
    pub(crate) client: reqwest::Client,

    /// Base URL for EDGAR data API
    pub(crate) edgar_data_url: String,

    /// Base URL for EDGAR files
    pub(crate) edgar_files_url: String,
}

impl Edgar {
    /// Creates a new client that identifies itself with `header_email`.
    ///
    /// The SEC requires every automated request to carry a contactable identifier
    /// in the `User-Agent` header and may reject requests without one. The value is
    /// sent verbatim; the default timeout is 30 seconds.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::ConfigError` if the value cannot be used as an HTTP
    /// header or the HTTP client cannot be built.
    pub fn new(header_email: &str) -> Result<Self> {
        let config = EdgarConfig {
            user_agent: header_email.to_string(),
            timeout: Duration::from_secs(30),
            base_urls: EdgarUrls::default(),
        };
        Self::with_config(config)
    }

    /// Creates a client from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `EdgarError::ConfigError` if the user agent is not a valid header
    /// value or the HTTP client cannot be built.
    pub fn with_config(config: EdgarConfig) -> Result<Self> {
        if !config.user_agent.contains('@') {
            tracing::warn!(
                "User-Agent {:?} has no contact email; SEC.gov may reject these requests",
                config.user_agent
            );
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| EdgarError::ConfigError(format!("Invalid user agent: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| EdgarError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Edgar {
            client,
            edgar_data_url: trim_base(config.base_urls.data),
            edgar_files_url: trim_base(config.base_urls.files),
        })
    }

    /// Fetches text content from a URL with a single GET.
    ///
    /// # Content-Type Validation
    ///
    /// For URLs ending in `.json`, a `text/html` response is usually an SEC error
    /// page served with a 200. The SEC also sometimes labels real JSON as
    /// `text/html`, so the body is sniffed: if it starts like JSON it is accepted
    /// (with a warning), otherwise `TransportError::UnexpectedContentType` is
    /// returned with a preview of the body.
    ///
    /// # Errors
    ///
    /// * `TransportError::NotFound` - HTTP 404
    /// * `TransportError::RateLimited` - HTTP 429, with the `Retry-After` hint if sent
    /// * `TransportError::Status` - any other non-success status, with a body preview
    /// * `TransportError::Request` - network failure, timeout or unreadable body
    pub async fn get(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(TransportError::Request)?;

        let status = response.status();
        let headers = response.headers().clone();

        match status {
            reqwest::StatusCode::OK => {
                let body = response.text().await.map_err(TransportError::Request)?;
                if url.ends_with(".json") {
                    check_json_body(url, &headers, &body)?;
                }
                Ok(body)
            }
            reqwest::StatusCode::NOT_FOUND => Err(TransportError::NotFound {
                url: url.to_string(),
            }
            .into()),
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = headers
                    .get(RETRY_AFTER)
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok())
                    .map(Duration::from_secs);

                tracing::warn!(
                    "Rate limit hit (429) for {}. Retry-After: {:?}",
                    url,
                    retry_after
                );
                Err(TransportError::RateLimited {
                    url: url.to_string(),
                    retry_after,
                }
                .into())
            }
            other_status => {
                let error_body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Failed to read error body".to_string());

                Err(TransportError::Status {
                    url: url.to_string(),
                    status: other_status,
                    preview: error_body.chars().take(PREVIEW_CHARS).collect(),
                }
                .into())
            }
        }
    }

    /// Fetches `url` and parses the body as a document of the given kind.
    pub async fn get_document(&self, kind: DocumentKind, url: &str) -> Result<Document> {
        let response = self.get(url).await?;
        Document::parse(kind, &response)
    }

    /// Returns the base URL for EDGAR data.
    pub fn data_url(&self) -> &str {
        &self.edgar_data_url
    }

    /// Returns the base URL for EDGAR files.
    pub fn files_url(&self) -> &str {
        &self.edgar_files_url
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

/// Rejects an HTML error page served in place of a JSON document.
fn check_json_body(url: &str, headers: &HeaderMap, body: &str) -> Result<()> {
    let Some(ct) = headers.get(CONTENT_TYPE).and_then(|val| val.to_str().ok()) else {
        return Ok(());
    };
    if !ct.to_lowercase().contains("text/html") {
        return Ok(());
    }

    let trimmed = body.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        tracing::warn!(
            "Received text/html content-type for .json URL, but content appears to be JSON: {}",
            url
        );
        return Ok(());
    }

    Err(TransportError::UnexpectedContentType {
        url: url.to_string(),
        expected_pattern: "application/json".to_string(),
        got_content_type: ct.to_string(),
        content_preview: body.chars().take(PREVIEW_CHARS).collect(),
    }
    .into())
}
