//! Integration tests using mock HTTP server
//!
//! Tests the full flow: PaperlessClient → paginated HTTP requests → aggregated lists

use paperless_client::pagination::{paginated_path, PAGE_SIZE};
use paperless_client::{ClientSettings, Error, PaperlessClient};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mount a resource of `total` items split into pages of `PAGE_SIZE`
async fn mount_resource(server: &MockServer, resource: &str, total: u64) {
    let pages = total.div_ceil(u64::from(PAGE_SIZE)).max(1);

    for page in 1..=pages {
        let start = (page - 1) * u64::from(PAGE_SIZE);
        let end = (start + u64::from(PAGE_SIZE)).min(total);
        let results: Vec<Value> = (start..end)
            .map(|i| json!({"id": i + 1, "name": format!("{resource}-{}", i + 1)}))
            .collect();
        let next = (page < pages).then(|| {
            format!(
                "{}/api/{resource}/?page={}&page_size={PAGE_SIZE}",
                server.uri(),
                page + 1
            )
        });

        Mock::given(method("GET"))
            .and(path(format!("/api/{resource}/")))
            .and(query_param("page", page.to_string()))
            .and(query_param("page_size", PAGE_SIZE.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": total,
                "next": next,
                "previous": null,
                "results": results,
            })))
            .expect(1)
            .mount(server)
            .await;
    }
}

fn client_for(server: &MockServer) -> PaperlessClient {
    let settings = ClientSettings::new(server.uri(), "integration-token");
    PaperlessClient::from_settings(&settings).unwrap()
}

// ============================================================================
// Pagination
// ============================================================================

#[tokio::test]
async fn test_tags_250_items_three_requests() {
    let mock_server = MockServer::start().await;
    mount_resource(&mock_server, "tags", 250).await;

    let client = client_for(&mock_server);
    let tags = client.list_tags(&[]).await.unwrap();

    assert_eq!(tags.count, 250);
    assert_eq!(tags.results.first().unwrap()["id"], 1);
    assert_eq!(tags.results.last().unwrap()["id"], 250);

    // Order across page boundaries is preserved
    let ids: Vec<u64> = tags
        .results
        .iter()
        .map(|t| t["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, (1..=250).collect::<Vec<u64>>());
}

#[tokio::test]
async fn test_exact_multiple_of_page_size() {
    let mock_server = MockServer::start().await;
    mount_resource(&mock_server, "correspondents", 200).await;

    let client = client_for(&mock_server);
    let list = client.list_correspondents(&[]).await.unwrap();

    assert_eq!(list.count, 200);
}

#[tokio::test]
async fn test_empty_resource_single_request() {
    let mock_server = MockServer::start().await;
    mount_resource(&mock_server, "document_types", 0).await;

    let client = client_for(&mock_server);
    let list = client.list_document_types(&[]).await.unwrap();

    assert_eq!(list.count, 0);
    assert!(list.results.is_empty());
}

#[tokio::test]
async fn test_failure_mid_pagination_returns_no_partial_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 250,
            "next": format!("{}/api/documents/?page=2&page_size=100", mock_server.uri()),
            "results": (1..=100).map(|id| json!({"id": id})).collect::<Vec<_>>(),
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"detail": "Internal server error"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"next": null, "results": []})))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_documents("").await.unwrap_err();

    match err {
        Error::RequestFailed { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body.unwrap()["detail"], "Internal server error");
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_documents_filter_query_and_auth() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/documents/"))
        .and(query_param("title__icontains", "invoice"))
        .and(query_param("page", "1"))
        .and(query_param("page_size", "100"))
        .and(header("Authorization", "Token integration-token"))
        .and(header("Accept", "application/json; version=5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "next": null,
            "results": [{"id": 31, "title": "Invoice March"}],
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let documents = client
        .list_documents("?title__icontains=invoice")
        .await
        .unwrap();

    assert_eq!(documents.count, 1);
    assert_eq!(documents.results[0]["title"], "Invoice March");
}

#[test]
fn test_paginated_path_is_public() {
    assert_eq!(
        paginated_path("/documents/", "?status=active", 1),
        "/documents/?status=active&page=1&page_size=100"
    );
    assert_eq!(paginated_path("/tags/", "", 1), "/tags/?page=1&page_size=100");
}

// ============================================================================
// Field filtering
// ============================================================================

#[tokio::test]
async fn test_field_filtering_returns_same_count_smaller_payload() {
    let mock_server = MockServer::start().await;

    let full: Vec<Value> = (1..=3)
        .map(|id| {
            json!({
                "id": id,
                "slug": format!("tag-{id}"),
                "name": format!("Tag {id}"),
                "color": "#a6cee3",
                "text_color": "#000000",
                "match": "",
                "matching_algorithm": 1,
                "is_insensitive": true,
                "is_inbox_tag": false,
                "document_count": id * 2,
                "owner": 3,
                "user_can_change": true
            })
        })
        .collect();
    let filtered: Vec<Value> = (1..=3)
        .map(|id| json!({"id": id, "name": format!("Tag {id}"), "document_count": id * 2}))
        .collect();

    Mock::given(method("GET"))
        .and(path("/api/tags/"))
        .and(query_param("fields", "id,name,document_count"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"next": null, "results": filtered})),
        )
        .expect(1)
        .with_priority(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/tags/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"next": null, "results": full})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let all = client.list_tags(&[]).await.unwrap();
    let slim = client
        .list_tags(&["id", "name", "document_count"])
        .await
        .unwrap();

    assert_eq!(all.count, slim.count);
    let full_size = serde_json::to_string(&all).unwrap().len();
    let slim_size = serde_json::to_string(&slim).unwrap().len();
    assert!(slim_size < full_size);
    assert!(slim.results[0].get("color").is_none());
}

// ============================================================================
// Transport
// ============================================================================

#[tokio::test]
async fn test_transport_failure_propagates() {
    let settings = ClientSettings::new("http://127.0.0.1:1", "token");
    let client = PaperlessClient::from_settings(&settings).unwrap();

    let err = client.list_tags(&[]).await.unwrap_err();
    assert!(err.is_transport());
}
