//! Serper adapter contract tests against a mock HTTP server.
//!
//! Verify the exact wire format posted to the Google verticals and the
//! flattening of the response, including the optional image strip and
//! its failure handling.

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use websearch_rs::providers::serper::Serper;
use websearch_rs::request::{SearchRequest, SerperEndpoint, SerperOptions};
use websearch_rs::{HttpClient, Provider, SearchAdapter};

fn request(query: &str, max_results: usize) -> SearchRequest {
    SearchRequest {
        provider: Provider::Serper,
        query: query.to_string(),
        max_results,
        serper: SerperOptions::default(),
        tavily: Default::default(),
        exa: Default::default(),
    }
}

fn organic(count: usize) -> serde_json::Value {
    let items: Vec<_> = (1..=count)
        .map(|i| {
            json!({
                "title": format!("Result {i}"),
                "link": format!("https://example.com/{i}"),
                "snippet": format!("Snippet {i}"),
            })
        })
        .collect();
    json!({ "organic": items })
}

#[tokio::test]
async fn test_search_posts_expected_body_and_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("X-API-KEY", "serper-key-12345"))
        .and(body_partial_json(json!({
            "q": "rust async runtime",
            "gl": "us",
            "hl": "en",
            "num": 3,
            "autocorrect": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(organic(5)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = Serper::new("serper-key-12345").with_base_url(mock_server.uri());
    let client = HttpClient::new().unwrap();
    let response = adapter
        .search(&request("rust async runtime", 3), &client)
        .await
        .unwrap();

    assert_eq!(response.provider, Provider::Serper);
    assert_eq!(response.query, "rust async runtime");
    assert_eq!(response.results.len(), 3);
    let scores: Vec<f64> = response.results.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![1.0, 0.9, 0.8]);
    assert_eq!(response.results[0].url, "https://example.com/1");
    // No answer box or knowledge graph, so the top snippet stands in.
    assert_eq!(response.answer, "Snippet 1");
}

#[tokio::test]
async fn test_news_vertical_changes_the_path() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "organic": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = Serper::new("serper-key-12345").with_base_url(mock_server.uri());
    let client = HttpClient::new().unwrap();
    let mut req = request("headlines", 5);
    req.serper.endpoint = SerperEndpoint::News;

    let response = adapter.search(&req, &client).await.unwrap();
    assert!(response.results.is_empty());
}

#[tokio::test]
async fn test_time_range_travels_as_tbs() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(body_partial_json(json!({"tbs": "qdr:d"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(organic(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = Serper::new("serper-key-12345").with_base_url(mock_server.uri());
    let client = HttpClient::new().unwrap();
    let mut req = request("rust release", 5);
    req.serper.time_range = Some("day".to_string());

    adapter.search(&req, &client).await.unwrap();
}

#[tokio::test]
async fn test_image_strip_rides_along_when_requested() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(organic(2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/images"))
        .and(body_partial_json(json!({"q": "kittens", "num": 5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [
                {"imageUrl": "https://img.example.com/1"},
                {"imageUrl": "https://img.example.com/2"},
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = Serper::new("serper-key-12345").with_base_url(mock_server.uri());
    let client = HttpClient::new().unwrap();
    let mut req = request("kittens", 5);
    req.serper.include_images = true;

    let response = adapter.search(&req, &client).await.unwrap();
    assert_eq!(
        response.images,
        vec!["https://img.example.com/1", "https://img.example.com/2"]
    );
    assert!(response.image_fetch_error.is_none());
}

#[tokio::test]
async fn test_image_failure_never_fails_the_search() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(organic(2)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/images"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = Serper::new("serper-key-12345").with_base_url(mock_server.uri());
    let client = HttpClient::new().unwrap();
    let mut req = request("kittens", 5);
    req.serper.include_images = true;

    let response = adapter.search(&req, &client).await.unwrap();
    assert_eq!(response.results.len(), 2);
    assert!(response.images.is_empty());
    let diagnostic = response.image_fetch_error.unwrap();
    assert!(diagnostic.contains("HTTP 500"), "got: {diagnostic}");
}

#[tokio::test]
async fn test_no_image_call_without_the_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(organic(1)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/images"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "images": [] })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let adapter = Serper::new("serper-key-12345").with_base_url(mock_server.uri());
    let client = HttpClient::new().unwrap();

    let response = adapter.search(&request("kittens", 5), &client).await.unwrap();
    assert!(response.images.is_empty());
    assert!(response.image_fetch_error.is_none());
}

#[tokio::test]
async fn test_answer_box_and_knowledge_graph_survive_the_trip() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic": [
                {"title": "Rust", "link": "https://rust-lang.org", "snippet": "A language."}
            ],
            "answerBox": {"answer": "Rust is a systems language."},
            "knowledgeGraph": {"title": "Rust", "description": "Programming language"},
            "relatedSearches": [{"query": "rust book"}, {"query": "rust vs c++"}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let adapter = Serper::new("serper-key-12345").with_base_url(mock_server.uri());
    let client = HttpClient::new().unwrap();

    let response = adapter.search(&request("rust", 5), &client).await.unwrap();
    assert_eq!(response.answer, "Rust is a systems language.");
    assert_eq!(response.knowledge_graph.unwrap()["title"], "Rust");
    assert_eq!(
        response.related_searches,
        Some(vec!["rust book".to_string(), "rust vs c++".to_string()])
    );
}
