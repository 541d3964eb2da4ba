//! Adapter trait and shared request plumbing

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::SearchError;
use crate::network::HttpClient;
use crate::providers::Provider;
use crate::request::SearchRequest;
use crate::results::SearchResponse;

/// A JSON POST to one provider endpoint.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Full URL to post to
    pub url: String,
    /// Request headers
    pub headers: HashMap<String, String>,
    /// JSON body
    pub body: Value,
    /// Per-request timeout override in seconds
    pub timeout: Option<u64>,
}

impl ApiRequest {
    /// Create a POST request with an empty body.
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
            body: Value::Null,
            timeout: None,
        }
    }

    /// Add a header.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Override the transport's default timeout.
    pub fn timeout(mut self, seconds: u64) -> Self {
        self.timeout = Some(seconds);
        self
    }
}

/// One provider behind the canonical contract.
///
/// An adapter owns its wire format in both directions: it builds the
/// provider's native request from a canonical one and collapses the
/// native response back into the canonical document. Nothing outside
/// the adapter knows the provider's JSON shape.
#[async_trait]
pub trait SearchAdapter: Send + Sync {
    /// Which provider this adapter speaks for.
    fn provider(&self) -> Provider;

    /// Run one search against the provider.
    async fn search(
        &self,
        request: &SearchRequest,
        client: &HttpClient,
    ) -> Result<SearchResponse, SearchError>;
}

/// Round to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// String field of a JSON object, empty when absent or not a string.
pub(crate) fn str_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// String field of a JSON object, `None` when absent.
pub(crate) fn opt_str_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_string)
}

/// First `max` characters of a string, never splitting a code point.
pub(crate) fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
