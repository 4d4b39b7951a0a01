//! Tests for the HTTP transport module

use super::*;
use crate::error::Error;
use crate::types::StringMap;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_config(config).unwrap()
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.base_url, API_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.accept, V2_MEDIA_TYPE);
    assert!(config.client_id.is_none());
    assert!(config.default_headers.is_empty());
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com")
        .timeout(Duration::from_secs(5))
        .accept("application/json")
        .client_id("abc123")
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.timeout, Duration::from_secs(5));
    assert_eq!(config.accept, "application/json");
    assert_eq!(config.client_id.as_deref(), Some("abc123"));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_build_url_joins_paths() {
    let config = HttpClientConfig::builder()
        .base_url("https://api.example.com/kraken/")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    assert_eq!(
        client.build_url("teams/staff").unwrap().as_str(),
        "https://api.example.com/kraken/teams/staff"
    );
    assert_eq!(
        client.build_url("/videos/a1%2Fb").unwrap().as_str(),
        "https://api.example.com/kraken/videos/a1%2Fb"
    );
}

#[test]
fn test_invalid_base_url() {
    let config = HttpClientConfig::builder().base_url("not a url").build();
    let err = HttpClient::with_config(config).unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}

// ============================================================================
// Fetched Tests
// ============================================================================

#[test]
fn test_fetched_into_entity() {
    let found = Fetched::Found(json!({"name": "staff"}));
    assert_eq!(found.into_entity(), Some(json!({"name": "staff"})));

    let envelope = Fetched::Found(json!({"status": 404, "error": "Not Found"}));
    assert_eq!(envelope.into_entity(), None);

    assert!(Fetched::NotFound.is_not_found());
    assert_eq!(Fetched::NotFound.into_entity(), None);
}

#[test]
fn test_not_found_envelope_ignores_other_statuses() {
    assert!(is_not_found_envelope(&json!({"status": 404})));
    assert!(!is_not_found_envelope(&json!({"status": 422})));
    assert!(!is_not_found_envelope(&json!({"status": "offline"})));
    assert!(!is_not_found_envelope(&json!([])));
}

// ============================================================================
// Request Tests
// ============================================================================

#[tokio::test]
async fn test_get_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/staff"))
        .and(header("Accept", V2_MEDIA_TYPE))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"name": "staff"})))
        .mount(&server)
        .await;

    let fetched = client_for(&server)
        .get("teams/staff", &StringMap::new())
        .await
        .unwrap();

    assert_eq!(fetched, Fetched::Found(json!({"name": "staff"})));
}

#[tokio::test]
async fn test_get_sends_query_params_and_client_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "20"))
        .and(header("Client-ID", "my-app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"teams": []})))
        .expect(1)
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .client_id("my-app")
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let mut params = StringMap::new();
    params.insert("limit".into(), "10".into());
    params.insert("offset".into(), "20".into());

    let fetched = client.get("/teams", &params).await.unwrap();
    assert_eq!(fetched, Fetched::Found(json!({"teams": []})));
}

#[tokio::test]
async fn test_get_404_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "error": "Not Found"
        })))
        .mount(&server)
        .await;

    let fetched = client_for(&server)
        .get("teams/nobody", &StringMap::new())
        .await
        .unwrap();

    assert!(fetched.is_not_found());
}

#[tokio::test]
async fn test_get_server_error_is_propagated_once() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get("teams", &StringMap::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_non_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/teams"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .get("teams", &StringMap::new())
        .await
        .unwrap_err();

    assert!(err.is_malformed_payload());
}

#[tokio::test]
async fn test_get_timeout() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = HttpClientConfig::builder()
        .base_url(server.uri())
        .timeout(Duration::from_millis(50))
        .build();
    let client = HttpClient::with_config(config).unwrap();

    let err = client.get("slow", &StringMap::new()).await.unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}

#[test]
fn test_http_client_debug() {
    let client = HttpClient::new().unwrap();
    let debug = format!("{client:?}");
    assert!(debug.contains("HttpClient"));
    assert!(debug.contains("kraken"));
}
