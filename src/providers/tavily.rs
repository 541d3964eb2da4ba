//! Tavily adapter (AI research search)
//!
//! Single POST to api.tavily.com. Tavily is the only provider that
//! returns native relevance scores and a synthesized answer, and the
//! only one whose key travels in the request body instead of a header.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::SearchError;
use crate::network::HttpClient;
use crate::providers::{opt_str_field, round_to, str_field, ApiRequest, Provider, SearchAdapter};
use crate::request::SearchRequest;
use crate::results::{ResultItem, SearchResponse};

const BASE_URL: &str = "https://api.tavily.com";

pub struct Tavily {
    api_key: String,
    base_url: String,
}

impl Tavily {
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
        let opts = &request.tavily;
        let mut body = json!({
            "api_key": self.api_key,
            "query": request.query,
            "max_results": request.max_results,
            "search_depth": opts.depth.as_str(),
            "topic": opts.topic.as_str(),
            "include_images": opts.include_images,
            "include_answer": true,
            "include_raw_content": opts.include_raw_content,
        });
        if let Some(domains) = opts.include_domains.as_deref().filter(|d| !d.is_empty()) {
            body["include_domains"] = json!(domains);
        }
        if let Some(domains) = opts.exclude_domains.as_deref().filter(|d| !d.is_empty()) {
            body["exclude_domains"] = json!(domains);
        }
        ApiRequest::post(format!("{}/search", self.base_url))
            .header("Content-Type", "application/json")
            .json(body)
    }

    fn parse_response(&self, data: &Value, request: &SearchRequest) -> SearchResponse {
        let mut response = SearchResponse::new(Provider::Tavily, request.query.clone());

        if let Some(items) = data.get("results").and_then(Value::as_array) {
            for item in items.iter().take(request.max_results) {
                let mut result = ResultItem::new(
                    str_field(item, "title"),
                    str_field(item, "url"),
                    str_field(item, "content"),
                    round_to(item.get("score").and_then(Value::as_f64).unwrap_or(0.0), 3),
                );
                if request.tavily.include_raw_content {
                    result.raw_content =
                        opt_str_field(item, "raw_content").filter(|c| !c.is_empty());
                }
                response.results.push(result);
            }
        }

        response.images = data
            .get("images")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        response.answer = str_field(data, "answer");
        response
    }
}

#[async_trait]
impl SearchAdapter for Tavily {
    fn provider(&self) -> Provider {
        Provider::Tavily
    }

    async fn search(
        &self,
        request: &SearchRequest,
        client: &HttpClient,
    ) -> Result<SearchResponse, SearchError> {
        debug!(
            query = %request.query,
            depth = request.tavily.depth.as_str(),
            "tavily search"
        );
        let data = client.execute(self.build_request(request)).await?;
        Ok(self.parse_response(&data, request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::TavilyOptions;

    fn request(query: &str, max_results: usize) -> SearchRequest {
        SearchRequest {
            provider: Provider::Tavily,
            query: query.to_string(),
            max_results,
            serper: Default::default(),
            tavily: TavilyOptions::default(),
            exa: Default::default(),
        }
    }

    #[test]
    fn test_key_travels_in_body_not_headers() {
        let adapter = Tavily::new("tvly-key-12345");
        let api = adapter.build_request(&request("quantum computing", 5));
        assert_eq!(api.url, "https://api.tavily.com/search");
        assert_eq!(api.body["api_key"], "tvly-key-12345");
        assert!(api.headers.get("x-api-key").is_none());
        assert!(api.headers.get("X-API-KEY").is_none());
        assert_eq!(
            api.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
    }

    #[test]
    fn test_body_defaults() {
        let adapter = Tavily::new("tvly-key-12345");
        let api = adapter.build_request(&request("quantum computing", 5));
        assert_eq!(api.body["query"], "quantum computing");
        assert_eq!(api.body["max_results"], 5);
        assert_eq!(api.body["search_depth"], "basic");
        assert_eq!(api.body["topic"], "general");
        assert_eq!(api.body["include_images"], false);
        assert_eq!(api.body["include_answer"], true);
        assert_eq!(api.body["include_raw_content"], false);
        assert!(api.body.get("include_domains").is_none());
        assert!(api.body.get("exclude_domains").is_none());
    }

    #[test]
    fn test_domain_filters_only_when_non_empty() {
        let adapter = Tavily::new("tvly-key-12345");
        let mut req = request("rust", 5);
        req.tavily.include_domains = Some(vec!["docs.rs".to_string(), "rust-lang.org".to_string()]);
        req.tavily.exclude_domains = Some(Vec::new());

        let api = adapter.build_request(&req);
        assert_eq!(api.body["include_domains"], json!(["docs.rs", "rust-lang.org"]));
        assert!(api.body.get("exclude_domains").is_none());
    }

    #[test]
    fn test_native_scores_are_rounded_to_three_places() {
        let adapter = Tavily::new("tvly-key-12345");
        let data = json!({
            "results": [
                {"title": "A", "url": "https://a", "content": "first", "score": 0.987_654},
                {"title": "B", "url": "https://b", "content": "second", "score": 0.5},
                {"title": "C", "url": "https://c", "content": "unscored"},
            ]
        });
        let response = adapter.parse_response(&data, &request("rust", 5));
        assert_eq!(response.results[0].score, 0.988);
        assert_eq!(response.results[0].snippet, "first");
        assert_eq!(response.results[1].score, 0.5);
        assert_eq!(response.results[2].score, 0.0);
    }

    #[test]
    fn test_result_cap_applies() {
        let adapter = Tavily::new("tvly-key-12345");
        let items: Vec<Value> = (0..5)
            .map(|i| json!({"title": format!("{i}"), "url": "https://x", "content": "c"}))
            .collect();
        let response =
            adapter.parse_response(&json!({ "results": items }), &request("rust", 2));
        assert_eq!(response.results.len(), 2);
    }

    #[test]
    fn test_raw_content_requires_request_and_content() {
        let adapter = Tavily::new("tvly-key-12345");
        let data = json!({
            "results": [
                {"title": "A", "url": "https://a", "content": "c", "score": 0.9,
                 "raw_content": "full page text"},
                {"title": "B", "url": "https://b", "content": "c", "score": 0.8,
                 "raw_content": ""},
                {"title": "C", "url": "https://c", "content": "c", "score": 0.7},
            ]
        });

        // Not requested: supplied content is still dropped.
        let response = adapter.parse_response(&data, &request("rust", 5));
        assert!(response.results.iter().all(|r| r.raw_content.is_none()));

        let mut req = request("rust", 5);
        req.tavily.include_raw_content = true;
        let response = adapter.parse_response(&data, &req);
        assert_eq!(response.results[0].raw_content.as_deref(), Some("full page text"));
        assert!(response.results[1].raw_content.is_none());
        assert!(response.results[2].raw_content.is_none());
    }

    #[test]
    fn test_answer_is_always_a_string() {
        let adapter = Tavily::new("tvly-key-12345");
        let req = request("rust", 5);

        let with_answer = adapter.parse_response(&json!({"answer": "Rust is fast."}), &req);
        assert_eq!(with_answer.answer, "Rust is fast.");

        let null_answer = adapter.parse_response(&json!({"answer": null}), &req);
        assert_eq!(null_answer.answer, "");

        let no_answer = adapter.parse_response(&json!({}), &req);
        assert_eq!(no_answer.answer, "");
    }

    #[test]
    fn test_images_keep_only_url_strings() {
        let adapter = Tavily::new("tvly-key-12345");
        let data = json!({
            "images": ["https://img/1", {"url": "https://img/obj"}, "https://img/2"]
        });
        let response = adapter.parse_response(&data, &request("rust", 5));
        assert_eq!(response.images, vec!["https://img/1", "https://img/2"]);
    }
}
