//! HTTP client for IMDb
//!
//! A single GET per call. The response body is returned whatever the
//! status code; an unexpected body simply yields no matches downstream.
//! There is no retry, caching or rate limiting.

use std::time::Duration;

use crate::error::Result;

/// Base URL for IMDb
pub const IMDB_BASE_URL: &str = "https://www.imdb.com/";

/// Configuration for the IMDb HTTP client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Site root every request path is joined to (default: IMDb)
    pub base_url: String,
    /// Request timeout in seconds (default: none, a request may block forever)
    pub timeout_secs: Option<u64>,
    /// User-Agent header to send (default: none)
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: IMDB_BASE_URL.to_string(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another site root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Join a request path or link target onto the site root.
///
/// Absolute `http(s)://` references are returned untouched. Relative ones
/// are joined with exactly one `/` between root and path.
///
/// # Examples
/// ```
/// use imdb_core::client::resolve_url;
///
/// assert_eq!(
///     resolve_url("https://www.imdb.com/", "/name/nm0000129/"),
///     "https://www.imdb.com/name/nm0000129/"
/// );
/// assert_eq!(
///     resolve_url("http://localhost:8080", "find?q=Tom+Cruise&s=nm"),
///     "http://localhost:8080/find?q=Tom+Cruise&s=nm"
/// );
/// ```
pub fn resolve_url(base: &str, reference: &str) -> String {
    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        reference.trim_start_matches('/')
    )
}

/// HTTP client bound to one site root
pub struct ImdbClient {
    client: reqwest::Client,
    base_url: String,
}

impl ImdbClient {
    /// Create a new client with default configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.as_str());
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Site root this client resolves paths against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the body of `base_url + path` as text.
    ///
    /// Non-2xx responses are not treated as failures.
    ///
    /// # Errors
    /// - `ImdbError::HttpError` - DNS, connection or timeout failure
    pub async fn fetch(&self, path: &str) -> Result<String> {
        let url = resolve_url(&self.base_url, path);
        tracing::debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, %status, "non-success status, using body anyway");
        }

        Ok(response.text().await?)
    }
}
