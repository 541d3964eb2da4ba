//! HTTP transport shared by all provider adapters
//!
//! One execute path turns a declarative [`ApiRequest`] into parsed
//! JSON, classifying every failure into the canonical error taxonomy
//! along the way. Adapters never see a reqwest type.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::error::SearchError;
use crate::providers::{truncate_chars, ApiRequest};
use crate::DEFAULT_TIMEOUT;

/// HTTP client wrapper with gateway-specific error mapping.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    default_timeout: Duration,
}

impl HttpClient {
    /// Create a client with the default request budget.
    pub fn new() -> Result<Self, SearchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request budget in seconds.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(|e| SearchError::Network(e.to_string()))?;
        Ok(Self {
            client,
            default_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// POST the request and parse the response body as JSON.
    ///
    /// Non-success statuses, connection failures, blown time budgets
    /// and unparseable bodies all come back as the matching
    /// [`SearchError`] variant.
    pub async fn execute(&self, request: ApiRequest) -> Result<Value, SearchError> {
        let budget = request.timeout.unwrap_or(self.default_timeout.as_secs());
        debug!(url = %request.url, budget, "dispatching provider request");

        let mut builder = self
            .client
            .post(&request.url)
            .timeout(Duration::from_secs(budget));
        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        let response = builder
            .json(&request.body)
            .send()
            .await
            .map_err(|e| classify_send_error(e, budget))?;

        let status = response.status();
        if !status.is_success() {
            // Best effort: the body is only read for its error detail.
            let body = response.text().await.unwrap_or_default();
            return Err(provider_error(status.as_u16(), &body));
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout { budget }
            } else {
                SearchError::Provider {
                    status: status.as_u16(),
                    message: format!("API error: response was not valid JSON: {e}"),
                }
            }
        })
    }
}

fn classify_send_error(error: reqwest::Error, budget: u64) -> SearchError {
    if error.is_timeout() {
        SearchError::Timeout { budget }
    } else {
        SearchError::Network(error.to_string())
    }
}

/// Map a non-success status and raw error body onto the canonical
/// provider error.
fn provider_error(status: u16, body: &str) -> SearchError {
    SearchError::Provider {
        status,
        message: friendly_message(status, &extract_detail(body)),
    }
}

/// Well-known statuses get a fixed human-readable message; everything
/// else surfaces whatever detail the provider sent.
fn friendly_message(status: u16, detail: &str) -> String {
    match status {
        401 => "Invalid or expired API key. Please check your credentials.".to_string(),
        403 => "Access forbidden. Your API key may not have permission for this operation."
            .to_string(),
        429 => "Rate limit exceeded. Please wait a moment and try again.".to_string(),
        500 => "Server error. The search provider is experiencing issues.".to_string(),
        503 => "Service unavailable. The search provider may be down.".to_string(),
        _ => format!("API error: {detail}"),
    }
}

/// Pull a human-readable message out of an error body.
///
/// Providers disagree on the field name, so try `error`, then
/// `message`, then fall back to the truncated raw body.
fn extract_detail(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<Value>(body) {
        if let Some(detail) = json
            .get("error")
            .and_then(Value::as_str)
            .or_else(|| json.get("message").and_then(Value::as_str))
        {
            return detail.to_string();
        }
    }
    truncate_chars(body, 500)
}
