use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling an upstream API
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {}", error_chain(.0))]
    RequestError(reqwest::Error),

    #[error("Upstream request timed out after {0}s")]
    Timeout(u64),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Render an error with its full source chain, e.g.
/// `error sending request: client error (Connect): tcp connect error: Connection refused`
fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// Which third-party API a query is aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamTarget {
    NominatimSearch,
    PlacesTextSearch,
    PlacesDetails,
}

impl UpstreamTarget {
    pub fn name(&self) -> &'static str {
        match self {
            UpstreamTarget::NominatimSearch => "nominatim_search",
            UpstreamTarget::PlacesTextSearch => "places_textsearch",
            UpstreamTarget::PlacesDetails => "places_details",
        }
    }
}

impl std::fmt::Display for UpstreamTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single outbound GET: target, base URL, query parameters and headers
///
/// Parameters keep insertion order. Keys and values are percent-encoded
/// independently when the URL is rendered.
#[derive(Clone)]
pub struct UpstreamQuery {
    pub target: UpstreamTarget,
    pub base_url: String,
    pub params: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl UpstreamQuery {
    pub fn new(target: UpstreamTarget, base_url: impl Into<String>) -> Self {
        Self {
            target,
            base_url: base_url.into(),
            params: Vec::new(),
            headers: Vec::new(),
        }
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Render the outbound URL
    pub fn url(&self) -> String {
        if self.params.is_empty() {
            return self.base_url.clone();
        }

        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", self.base_url, query)
    }
}

// Only parameter names are shown; values may carry credentials
impl std::fmt::Debug for UpstreamQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamQuery")
            .field("target", &self.target)
            .field("base_url", &self.base_url)
            .field("params", &self.params.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>())
            .field("headers", &self.headers.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>())
            .finish()
    }
}

/// Thin async client that performs one upstream GET and decodes its JSON body
pub struct UpstreamClient {
    client: Client,
    timeout_secs: u64,
}

impl UpstreamClient {
    pub fn new(timeout_secs: u64) -> Result<Self, UpstreamError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| UpstreamError::RequestError(e.without_url()))?;

        Ok(Self { client, timeout_secs })
    }

    /// Issue the query and return the decoded JSON body verbatim
    pub async fn fetch(&self, query: &UpstreamQuery) -> Result<Value, UpstreamError> {
        let url = query.url();

        tracing::debug!("Calling upstream {} at {}", query.target, query.base_url);

        let mut request = self.client.get(&url);
        for (name, value) in &query.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let response = request.send().await.map_err(|e| self.request_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::warn!("Upstream {} returned {} - {}", query.target, status, body);
            return Err(UpstreamError::ApiError(format!(
                "{} responded with status {}",
                query.target, status
            )));
        }

        let body = response.bytes().await.map_err(|e| self.request_error(e))?;

        let json: Value = serde_json::from_slice(&body).map_err(|e| {
            UpstreamError::InvalidResponse(format!(
                "Failed to parse {} response as JSON: {}",
                query.target, e
            ))
        })?;

        tracing::debug!("Upstream {} responded with {} bytes", query.target, body.len());

        Ok(json)
    }

    // The URL is stripped because it may contain the API key
    fn request_error(&self, err: reqwest::Error) -> UpstreamError {
        if err.is_timeout() {
            UpstreamError::Timeout(self.timeout_secs)
        } else {
            UpstreamError::RequestError(err.without_url())
        }
    }
}
