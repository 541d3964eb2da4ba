//! Exa adapter (neural search)
//!
//! Two endpoints behind one adapter: /search for queries and
//! /findSimilar when a reference URL replaces the query. Exa never
//! returns images, and the answer is synthesized from the top snippet.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::SearchError;
use crate::network::HttpClient;
use crate::providers::{
    opt_str_field, round_to, str_field, truncate_chars, ApiRequest, Provider, SearchAdapter,
};
use crate::request::SearchRequest;
use crate::results::{ResultItem, SearchResponse};

const BASE_URL: &str = "https://api.exa.ai";

/// Per-result text budget requested from the API.
const TEXT_MAX_CHARACTERS: usize = 1000;

/// Snippet budget when falling back to raw text.
const SNIPPET_MAX_CHARACTERS: usize = 500;

pub struct Exa {
    api_key: String,
    base_url: String,
}

impl Exa {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the adapter at a different host, for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn build_request(&self, request: &SearchRequest) -> ApiRequest {
        let opts = &request.exa;
        let contents = json!({
            "text": {"maxCharacters": TEXT_MAX_CHARACTERS},
            "highlights": true,
        });
        let (endpoint, mut body) = match opts.similar_url.as_deref() {
            Some(url) => (
                "findSimilar",
                json!({
                    "url": url,
                    "numResults": request.max_results,
                    "contents": contents,
                }),
            ),
            None => (
                "search",
                json!({
                    "query": request.query,
                    "numResults": request.max_results,
                    "type": opts.search_type.as_str(),
                    "contents": contents,
                }),
            ),
        };
        if let Some(category) = opts.category {
            body["category"] = json!(category.as_str());
        }
        if let Some(date) = opts.start_date.as_deref() {
            body["startPublishedDate"] = json!(date);
        }
        if let Some(date) = opts.end_date.as_deref() {
            body["endPublishedDate"] = json!(date);
        }
        if let Some(domains) = opts.include_domains.as_deref().filter(|d| !d.is_empty()) {
            body["includeDomains"] = json!(domains);
        }
        if let Some(domains) = opts.exclude_domains.as_deref().filter(|d| !d.is_empty()) {
            body["excludeDomains"] = json!(domains);
        }
        ApiRequest::post(format!("{}/{}", self.base_url, endpoint))
            .header("x-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(body)
    }

    fn parse_response(&self, data: &Value, request: &SearchRequest) -> SearchResponse {
        // Similarity searches echo the reference URL instead of a query.
        let query = match request.exa.similar_url.as_deref() {
            Some(url) => format!("Similar to: {url}"),
            None => request.query.clone(),
        };
        let mut response = SearchResponse::new(Provider::Exa, query);

        if let Some(items) = data.get("results").and_then(Value::as_array) {
            for item in items.iter().take(request.max_results) {
                let mut result = ResultItem::new(
                    str_field(item, "title"),
                    str_field(item, "url"),
                    extract_snippet(item),
                    round_to(item.get("score").and_then(Value::as_f64).unwrap_or(0.0), 3),
                );
                result.published_date = opt_str_field(item, "publishedDate");
                result.author = opt_str_field(item, "author");
                response.results.push(result);
            }
        }

        response.answer = response
            .results
            .first()
            .map(|r| r.snippet.clone())
            .unwrap_or_default();
        response
    }
}

/// First highlight when the API returned any, else the leading slice of
/// the full text.
fn extract_snippet(item: &Value) -> String {
    if let Some(highlight) = item
        .get("highlights")
        .and_then(Value::as_array)
        .and_then(|highlights| highlights.first())
        .and_then(Value::as_str)
    {
        return highlight.to_string();
    }
    truncate_chars(
        item.get("text").and_then(Value::as_str).unwrap_or_default(),
        SNIPPET_MAX_CHARACTERS,
    )
}

#[async_trait]
impl SearchAdapter for Exa {
    fn provider(&self) -> Provider {
        Provider::Exa
    }

    async fn search(
        &self,
        request: &SearchRequest,
        client: &HttpClient,
    ) -> Result<SearchResponse, SearchError> {
        debug!(
            query = %request.query,
            similar = request.exa.similar_url.is_some(),
            "exa search"
        );
        let data = client.execute(self.build_request(request)).await?;
        Ok(self.parse_response(&data, request))
    }
}
