//! HTTP access to the WebChnl API.
//!
//! [`ApiClient`] issues plain `GET {base_url}{path}` requests and hands back
//! the body text. No auth headers, no query parameters, no retries: a
//! failed request or non-2xx status is returned to the caller as-is.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{Result, WebchnlError};

/// Public API root used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://webchnl.live/api";

/// Default total request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Source of response bodies for the API wrappers.
///
/// [`ApiClient`] is the production implementation; tests swap in canned text.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Full URL that `path` resolves to, used in error messages.
    fn endpoint(&self, path: &str) -> String;

    /// Fetch `path` and return the body as text.
    async fn get_text(&self, path: &str) -> Result<String>;
}

/// Options for building an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("webchnl/{}", crate::VERSION),
        }
    }
}

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the public API with default options.
    pub fn new() -> Result<Self> {
        Self::with_options(ClientOptions::default())
    }

    /// Create a client for `base_url` with default timeout and user agent.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::with_options(ClientOptions {
            base_url: base_url.to_string(),
            ..ClientOptions::default()
        })
    }

    pub fn with_options(options: ClientOptions) -> Result<Self> {
        let base_url = normalize_base_url(&options.base_url)?;

        let client = Client::builder()
            .user_agent(options.user_agent)
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(options.timeout)
            .gzip(true)
            .brotli(true)
            .use_rustls_tls()
            .build()
            .map_err(WebchnlError::Client)?;

        debug!(%base_url, "API client ready");
        Ok(Self { client, base_url })
    }

    /// Base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for ApiClient {
    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    #[instrument(skip(self), fields(base = %self.base_url))]
    async fn get_text(&self, path: &str) -> Result<String> {
        let endpoint = self.endpoint(path);
        debug!(%endpoint, "Fetching");

        let response = self
            .client
            .get(&endpoint)
            .send()
            .await
            .map_err(|source| WebchnlError::Transport {
                endpoint: endpoint.clone(),
                source,
            })?;

        let status = response.status();
        info!(%status, version = ?response.version(), "Response received");

        if !status.is_success() {
            return Err(WebchnlError::Status { endpoint, status });
        }

        response
            .text()
            .await
            .map_err(|source| WebchnlError::Transport { endpoint, source })
    }
}

/// Validate `raw` as an http(s) URL and strip any trailing slash so paths can
/// be appended directly.
fn normalize_base_url(raw: &str) -> Result<String> {
    let invalid = |reason: String| WebchnlError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };

    let parsed = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme {other:?}"))),
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed".to_string()));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
