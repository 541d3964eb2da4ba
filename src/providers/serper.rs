//! Serper adapter (Google Search API)
//!
//! POSTs to one of the google.serper.dev verticals and flattens the
//! organic results. Serper returns no scores, so ranks are converted
//! into a descending synthetic score. An optional second call fetches
//! an image strip; its failure never fails the search.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::SearchError;
use crate::network::HttpClient;
use crate::providers::{opt_str_field, round_to, str_field, ApiRequest, Provider, SearchAdapter};
use crate::request::SearchRequest;
use crate::results::{ResultItem, SearchResponse};

const BASE_URL: &str = "https://google.serper.dev";

/// How many image URLs the strip may carry.
const IMAGE_LIMIT: usize = 5;

pub struct Serper {
    api_key: String,
    base_url: String,
}

impl Serper {
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
        let opts = &request.serper;
        let mut body = json!({
            "q": request.query,
            "gl": opts.country,
            "hl": opts.language,
            "num": request.max_results,
            "autocorrect": true,
        });
        if let Some(code) = opts.time_range.as_deref().and_then(time_filter) {
            body["tbs"] = json!(code);
        }
        self.post(opts.endpoint.as_str()).json(body)
    }

    fn image_request(&self, request: &SearchRequest) -> ApiRequest {
        let opts = &request.serper;
        self.post("images").json(json!({
            "q": request.query,
            "gl": opts.country,
            "hl": opts.language,
            "num": IMAGE_LIMIT,
        }))
    }

    fn post(&self, endpoint: &str) -> ApiRequest {
        ApiRequest::post(format!("{}/{}", self.base_url, endpoint))
            .header("X-API-KEY", &self.api_key)
            .header("Content-Type", "application/json")
    }

    fn parse_response(&self, data: &Value, request: &SearchRequest) -> SearchResponse {
        let mut response = SearchResponse::new(Provider::Serper, request.query.clone());

        if let Some(organic) = data.get("organic").and_then(Value::as_array) {
            for (rank, item) in organic.iter().take(request.max_results).enumerate() {
                let mut result = ResultItem::new(
                    str_field(item, "title"),
                    str_field(item, "link"),
                    str_field(item, "snippet"),
                    round_to(1.0 - rank as f64 * 0.1, 2),
                );
                result.date = opt_str_field(item, "date");
                response.results.push(result);
            }
        }

        response.answer = extract_answer(data, &response.results);
        response.knowledge_graph = data
            .get("knowledgeGraph")
            .filter(|v| !v.is_null())
            .cloned();
        response.related_searches = data
            .get("relatedSearches")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| entry.get("query").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            });
        response
    }
}

/// Map a recognized recency token onto the Google `tbs` filter code.
/// Unrecognized tokens produce no filter at all.
fn time_filter(token: &str) -> Option<&'static str> {
    match token {
        "hour" => Some("qdr:h"),
        "day" => Some("qdr:d"),
        "week" => Some("qdr:w"),
        "month" => Some("qdr:m"),
        "year" => Some("qdr:y"),
        _ => None,
    }
}

/// Best available answer: answer box, then knowledge graph description,
/// then the top snippet.
fn extract_answer(data: &Value, results: &[ResultItem]) -> String {
    let answer_box = data.get("answerBox");
    for key in ["answer", "snippet"] {
        if let Some(text) = answer_box.and_then(|b| b.get(key)).and_then(Value::as_str) {
            if !text.is_empty() {
                return text.to_string();
            }
        }
    }
    if let Some(description) = data
        .get("knowledgeGraph")
        .and_then(|kg| kg.get("description"))
        .and_then(Value::as_str)
    {
        if !description.is_empty() {
            return description.to_string();
        }
    }
    results
        .first()
        .map(|r| r.snippet.clone())
        .unwrap_or_default()
}

/// Image URLs from the strip response, capped and stripped of blanks.
fn harvest_images(data: &Value) -> Vec<String> {
    data.get("images")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .take(IMAGE_LIMIT)
                .filter_map(|entry| entry.get("imageUrl").and_then(Value::as_str))
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[async_trait]
impl SearchAdapter for Serper {
    fn provider(&self) -> Provider {
        Provider::Serper
    }

    async fn search(
        &self,
        request: &SearchRequest,
        client: &HttpClient,
    ) -> Result<SearchResponse, SearchError> {
        debug!(
            query = %request.query,
            endpoint = request.serper.endpoint.as_str(),
            "serper search"
        );
        let data = client.execute(self.build_request(request)).await?;
        let mut response = self.parse_response(&data, request);

        if request.serper.include_images {
            match client.execute(self.image_request(request)).await {
                Ok(image_data) => response.images = harvest_images(&image_data),
                Err(e) => {
                    warn!(error = %e, "image lookup failed, continuing without images");
                    response.image_fetch_error = Some(e.to_string());
                }
            }
        }

        Ok(response)
    }
}
