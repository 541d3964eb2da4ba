//! Canonical result document
//!
//! Every provider response, whatever its native shape, collapses into
//! the structures defined here before anything is printed.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::providers::Provider;

/// A single normalized search result.
///
/// Fields a provider does not supply are omitted from the JSON output
/// entirely, never serialized as null.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ResultItem {
    /// Result title
    pub title: String,
    /// Result URL
    pub url: String,
    /// Content snippet
    pub snippet: String,
    /// Relevance score, descending with rank
    pub score: f64,
    /// Publication date (Serper, when the result carries one)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Publication date (Exa)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    /// Author (Exa)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Full page content (Tavily, only when explicitly requested)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl ResultItem {
    /// Create a result with the always-present fields.
    pub fn new(title: String, url: String, snippet: String, score: f64) -> Self {
        Self {
            title,
            url,
            snippet,
            score,
            ..Default::default()
        }
    }
}

/// The single JSON document printed for a successful search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    /// Provider that served the request
    pub provider: Provider,
    /// Query as the provider understood it
    pub query: String,
    /// Normalized results, at most `max_results` of them
    pub results: Vec<ResultItem>,
    /// Image URLs, empty unless images were requested and returned
    #[serde(default)]
    pub images: Vec<String>,
    /// Direct answer, empty string when the provider offered none
    pub answer: String,
    /// Knowledge graph panel (Serper), passed through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_graph: Option<Value>,
    /// Related search strings (Serper)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_searches: Option<Vec<String>>,
    /// Set when a requested image lookup failed while the search itself
    /// succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_fetch_error: Option<String>,
}

impl SearchResponse {
    /// Create an empty response shell for a provider and query.
    pub fn new(provider: Provider, query: impl Into<String>) -> Self {
        Self {
            provider,
            query: query.into(),
            results: Vec::new(),
            images: Vec::new(),
            answer: String::new(),
            knowledge_graph: None,
            related_searches: None,
            image_fetch_error: None,
        }
    }
}
