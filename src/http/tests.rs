//! Tests for the HTTP client module

use super::*;
use crate::auth::AuthConfig;
use crate::error::Error;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_json, body_string_contains, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = HttpClientConfig::builder().base_url(server.uri()).build();
    HttpClient::with_auth(config, AuthConfig::token("test-token")).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.api_prefix, "/api");
    assert_eq!(config.api_version, 5);
    assert!(config.base_url.is_none());
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .base_url("http://paperless.local:8000")
        .api_prefix("/paperless/api")
        .api_version(3)
        .timeout(Duration::from_secs(60))
        .header("X-Custom", "value")
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(
        config.base_url,
        Some("http://paperless.local:8000".to_string())
    );
    assert_eq!(config.api_prefix, "/paperless/api");
    assert_eq!(config.api_version, 3);
    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(
        config.default_headers.get("X-Custom"),
        Some(&"value".to_string())
    );
    assert_eq!(config.user_agent, "test-agent/1.0");
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("original", "true")
        .header("X-Request-Id", "abc123")
        .json(json!({"name": "invoices"}))
        .timeout(Duration::from_secs(10));

    assert_eq!(config.query.get("original"), Some(&"true".to_string()));
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(config.body.is_some());
    assert_eq!(config.timeout, Some(Duration::from_secs(10)));
}

#[test]
fn test_url_for() {
    let config = HttpClientConfig::builder()
        .base_url("http://paperless.local:8000/")
        .build();
    let client = HttpClient::new(config).unwrap();

    assert_eq!(
        client.url_for("/tags/"),
        "http://paperless.local:8000/api/tags/"
    );
    assert_eq!(
        client.url_for("tags/?page=2"),
        "http://paperless.local:8000/api/tags/?page=2"
    );
    assert_eq!(
        client.url_for("https://other.host/api/tags/?page=3"),
        "https://other.host/api/tags/?page=3"
    );
}

#[tokio::test]
async fn test_default_headers_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags/"))
        .and(header("Authorization", "Token test-token"))
        .and(header("Accept", "application/json; version=5"))
        .and(header_exists("Accept-Language"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.get("/tags/").await.unwrap();
    assert_eq!(response.status(), 200);

    // `header()` splits on commas, so compare the raw value instead
    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].headers.get("accept-language").unwrap(),
        "en-US,en;q=0.9"
    );
}

#[tokio::test]
async fn test_http_client_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "title": "Electricity bill"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let data: serde_json::Value = client.get_json("/documents/7/").await.unwrap();

    assert_eq!(data["title"], "Electricity bill");
}

#[tokio::test]
async fn test_http_client_post_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/tags/"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"name": "taxes"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 3, "name": "taxes"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let response = client.post("/tags/", json!({"name": "taxes"})).await.unwrap();

    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_http_client_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/12/download/"))
        .and(query_param("original", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7".to_vec()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let bytes = client
        .get_bytes(
            "/documents/12/download/",
            RequestConfig::new().query("original", "true"),
        )
        .await
        .unwrap();

    assert_eq!(&bytes[..], b"%PDF-1.7");
}

#[tokio::test]
async fn test_http_client_404_json_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/999/"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "No Document matches the given query."})))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/documents/999/").await.unwrap_err();

    match err {
        Error::RequestFailed { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(
                body.unwrap()["detail"],
                "No Document matches the given query."
            );
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_error_without_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tags/"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.get("/tags/").await.unwrap_err();

    assert!(matches!(
        err,
        Error::RequestFailed {
            status: 502,
            body: None
        }
    ));
}

#[tokio::test]
async fn test_no_content_decodes_as_null() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/tags/4/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let value: serde_json::Value = client
        .request_json(reqwest::Method::DELETE, "/tags/4/", RequestConfig::new())
        .await
        .unwrap();

    assert!(value.is_null());
}

#[tokio::test]
async fn test_transport_failure_is_not_wrapped() {
    let config = HttpClientConfig::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build();
    let client = HttpClient::new(config).unwrap();

    let err = client.get("/tags/").await.unwrap_err();
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_send_multipart() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/documents/post_document/"))
        .and(header("Authorization", "Token test-token"))
        .and(body_string_contains("name=\"document\""))
        .and(body_string_contains("scan contents"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("task-uuid")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let part = reqwest::multipart::Part::bytes(b"scan contents".to_vec()).file_name("scan.pdf");
    let form = reqwest::multipart::Form::new().part("document", part);

    let response = client
        .send_multipart("/documents/post_document/", form)
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[test]
fn test_http_client_debug_hides_token() {
    let client = HttpClient::with_auth(
        HttpClientConfig::default(),
        AuthConfig::token("very-secret"),
    )
    .unwrap();
    let debug_str = format!("{client:?}");
    assert!(debug_str.contains("HttpClient"));
    assert!(!debug_str.contains("very-secret"));
}
