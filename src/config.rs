use std::time::Duration;

/// Configuration for the Edgar client
#[derive(Debug, Clone)]
pub struct EdgarConfig {
    /// Value of the `User-Agent` header; the SEC expects a contact email here
    pub user_agent: String,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Base URLs for the EDGAR hosts
    pub base_urls: EdgarUrls,
}

/// Base URLs for the EDGAR hosts
#[derive(Debug, Clone)]
pub struct EdgarUrls {
    /// Base URL for the EDGAR data API (submissions, XBRL)
    pub data: String,
    /// Base URL for EDGAR files (ticker lists)
    pub files: String,
}

impl Default for EdgarConfig {
    fn default() -> Self {
        Self {
            user_agent: "edgar_tables/0.1.0".to_string(),
            timeout: Duration::from_secs(30),
            base_urls: EdgarUrls::default(),
        }
    }
}

impl EdgarConfig {
    /// Creates a new EdgarConfig with custom settings
    ///
    /// # Basic usage
    ///
    /// ```rust
    /// use edgar_tables::{Edgar, EdgarConfig};
    /// use std::time::Duration;
    /// let config = EdgarConfig::new("contact@example.com", Duration::from_secs(10), None);
    /// let edgar = Edgar::with_config(config)?;
    /// # Ok::<(), edgar_tables::EdgarError>(())
    /// ```
    pub fn new(
        user_agent: impl Into<String>,
        timeout: Duration,
        base_urls: Option<EdgarUrls>,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            timeout,
            base_urls: base_urls.unwrap_or_default(),
        }
    }
}

impl EdgarUrls {
    /// Points both hosts at the same base URL. Handy for a local mock server.
    pub fn single(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            data: base.clone(),
            files: base,
        }
    }
}

impl Default for EdgarUrls {
    fn default() -> Self {
        Self {
            data: "https://data.sec.gov".to_string(),
            files: "https://www.sec.gov/files".to_string(),
        }
    }
}
