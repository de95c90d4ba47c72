//! Integration tests for the default reqwest transport against a mock server.
//!
//! These tests run the full client (encoding, real HTTP, decoding) against
//! `wiremock` and verify what actually goes over the wire.

use std::time::Duration;

use psn_store_api::operations::{Catalog, ProductById};
use psn_store_api::{ApiErrorKind, BaseUri, Region, StoreClient, StoreConfig};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, region: Region) -> StoreClient {
    let config = StoreConfig::builder()
        .region(region)
        .base_uri(BaseUri::new(format!("{}/api/graphql/v1/", server.uri())).unwrap())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    StoreClient::new(&config).unwrap()
}

// ============================================================================
// Successful requests
// ============================================================================

#[tokio::test]
async fn test_product_request_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/graphql/v1/op"))
        .and(query_param("operationName", "metGetProductById"))
        .and(query_param("variables", r#"{"productId":"CUSA12345_00"}"#))
        .and(query_param(
            "extensions",
            r#"{"persistedQuery":{"version":1,"sha256Hash":"a128042177bd93dd831164103d53b73ef790d56f51dae647064cb8f9d9fc9d1a"}}"#,
        ))
        .and(header("x-psn-store-locale-override", "en-us"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"productRetrieve": {"id": "CUSA12345_00", "name": "Test Game"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Region::UnitedStates);
    let product = client
        .get_product_by_id(&ProductById::new("CUSA12345_00"))
        .await
        .unwrap();

    assert_eq!(product.name.as_deref(), Some("Test Game"));
}

#[tokio::test]
async fn test_override_hash_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param(
            "extensions",
            r#"{"persistedQuery":{"version":1,"sha256Hash":"custom_hash"}}"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"categoryGridRetrieve": {"id": "cat"}}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Region::TurkeyEnglish);
    client.override_hash("categoryGridRetrieve", "custom_hash");

    let grid = client.get_catalog(&Catalog::for_category("cat")).await.unwrap();
    assert_eq!(grid.id.as_deref(), Some("cat"));
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_not_found_over_http() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Not Found"})))
        .mount(&server)
        .await;

    let client = client_for(&server, Region::UnitedStates);
    let error = client
        .get_product_by_id(&ProductById::new("CUSA12345_00"))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::NotFound);
    assert_eq!(error.message(), "Not Found");
}

#[tokio::test]
async fn test_gateway_error_with_html_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server, Region::UnitedStates);
    let error = client
        .get_product_by_id(&ProductById::new("CUSA12345_00"))
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ApiErrorKind::ServerError);
    assert_eq!(error.http_status_code(), 503);
    assert_eq!(error.message(), "Service Unavailable");
    assert!(error.response_data().is_none());
}

#[tokio::test]
async fn test_timeout_is_request_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": null}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = StoreConfig::builder()
        .region(Region::UnitedStates)
        .base_uri(BaseUri::new(server.uri()).unwrap())
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();
    let client = StoreClient::new(&config).unwrap();

    let error = client
        .get_product_by_id(&ProductById::new("CUSA12345_00"))
        .await
        .unwrap_err();

    assert_eq!(error.http_status_code(), 500);
    assert!(error.message().starts_with("Request failed: "));
}
