//! Tests for the HTTP module

use super::*;
use crate::config::ClientConfig;
use crate::error::{ApiErrorKind, Error};
use crate::types::{Endpoint, QueryParams};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    let config = ClientConfig::builder()
        .base_url(format!("{}/youtube/v3/", server.uri()))
        .timeout(Duration::from_secs(5))
        .api_key("test-key")
        .build();
    HttpClient::new(config).unwrap()
}

// ============================================================================
// Classification
// ============================================================================

#[test_case(401, "Unauthorized", ApiErrorKind::Authentication ; "unauthorized")]
#[test_case(403, "The request cannot be completed because you have exceeded your quota.", ApiErrorKind::QuotaExceeded ; "quota")]
#[test_case(403, "QUOTA exceeded", ApiErrorKind::QuotaExceeded ; "quota any case")]
#[test_case(403, r#"{"error":{"errors":[{"reason":"rateLimitExceeded"}]}}"#, ApiErrorKind::RateLimit ; "rate limit reason")]
#[test_case(403, "user rate limit hit", ApiErrorKind::RateLimit ; "rate limit text")]
#[test_case(403, "forbidden", ApiErrorKind::Generic ; "plain forbidden")]
#[test_case(404, "Not Found", ApiErrorKind::NotFound ; "not found")]
#[test_case(400, "Bad Request", ApiErrorKind::InvalidRequest ; "bad request")]
#[test_case(500, "Backend Error", ApiErrorKind::Generic ; "server error")]
#[test_case(429, "Too Many Requests", ApiErrorKind::Generic ; "too many requests")]
fn test_classify_status(status: u16, body: &str, expected: ApiErrorKind) {
    let err = classify_response(status, body).unwrap_err();
    assert_eq!(err.kind(), Some(expected));
    assert_eq!(err.status(), Some(status));
    assert_eq!(err.body(), Some(body));
}

#[test]
fn test_quota_checked_before_rate_limit() {
    let err = classify_response(403, "quota and rateLimit").unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::QuotaExceeded));
}

#[test_case("commentsDisabled", ApiErrorKind::Comment)]
#[test_case("videoNotFound", ApiErrorKind::Video)]
#[test_case("channelNotFound", ApiErrorKind::Channel)]
#[test_case("playlistNotFound", ApiErrorKind::Playlist)]
#[test_case("searchNotAllowed", ApiErrorKind::Search)]
#[test_case("backendError", ApiErrorKind::Generic)]
fn test_classify_error_payload(reason: &str, expected: ApiErrorKind) {
    let body = json!({"error": {"errors": [{"reason": reason}]}}).to_string();
    let err = classify_response(200, &body).unwrap_err();

    assert_eq!(err.kind(), Some(expected));
    assert_eq!(err.status(), Some(200));
    match err {
        Error::Api { reason: r, .. } => assert_eq!(r.as_deref(), Some(reason)),
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[test]
fn test_classify_error_payload_without_reason() {
    let err = classify_response(200, r#"{"error": {"code": 500}}"#).unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::Generic));
}

#[test]
fn test_only_first_reason_is_used() {
    let body = json!({"error": {"errors": [
        {"reason": "backendError"},
        {"reason": "videoNotFound"}
    ]}})
    .to_string();
    let err = classify_response(200, &body).unwrap_err();
    assert_eq!(err.kind(), Some(ApiErrorKind::Generic));
}

#[test]
fn test_classify_success() {
    let value = classify_response(200, r#"{"items": [], "nextPageToken": "t"}"#).unwrap();
    assert_eq!(value["nextPageToken"], "t");
}

#[test]
fn test_classify_invalid_json() {
    let err = classify_response(200, "<html>").unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[test]
fn test_first_reason() {
    let error = json!({"errors": [{"reason": "quotaExceeded"}]});
    assert_eq!(first_reason(&error), Some("quotaExceeded"));
    assert_eq!(first_reason(&json!({"errors": []})), None);
    assert_eq!(first_reason(&json!({"errors": [{"reason": ""}]})), None);
}

// ============================================================================
// HttpClient
// ============================================================================

#[test]
fn test_client_requires_credential() {
    let err = HttpClient::new(ClientConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));
}

#[tokio::test]
async fn test_execute_attaches_key_and_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/videos"))
        .and(query_param("key", "test-key"))
        .and(query_param("id", "abc"))
        .and(query_param("part", "snippet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "abc"}],
            "nextPageToken": "NEXT"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = QueryParams::new().with("id", "abc").with("part", "snippet");
    let page = client.execute(Endpoint::Videos, &params).await.unwrap();

    assert_eq!(page.items, vec![json!({"id": "abc"})]);
    assert_eq!(page.next_page_token.as_deref(), Some("NEXT"));
}

#[tokio::test]
async fn test_execute_with_access_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/channels"))
        .and(header("Authorization", "Bearer ya29.token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/youtube/v3", mock_server.uri()))
        .access_token("ya29.token")
        .build();
    let client = HttpClient::new(config).unwrap();

    let page = client
        .execute(Endpoint::Channels, &QueryParams::new())
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn test_execute_401() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Login Required"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .execute(Endpoint::Search, &QueryParams::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ApiErrorKind::Authentication));
    assert_eq!(err.body(), Some("Login Required"));
}

#[tokio::test]
async fn test_execute_403_quota_keeps_reason() {
    let mock_server = MockServer::start().await;

    let body = json!({"error": {
        "code": 403,
        "message": "The request cannot be completed because you have exceeded your quota.",
        "errors": [{"reason": "quotaExceeded", "domain": "youtube.quota"}]
    }});
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .execute(Endpoint::Videos, &QueryParams::new())
        .await
        .unwrap_err();

    match err {
        Error::Api {
            kind,
            status,
            reason,
            ..
        } => {
            assert_eq!(kind, ApiErrorKind::QuotaExceeded);
            assert_eq!(status, 403);
            assert_eq!(reason.as_deref(), Some("quotaExceeded"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_execute_error_payload_on_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/youtube/v3/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": {"errors": [{"reason": "commentsDisabled"}]}
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .execute(Endpoint::CommentThreads, &QueryParams::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ApiErrorKind::Comment));
}

#[tokio::test]
async fn test_execute_does_not_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .execute(Endpoint::Playlists, &QueryParams::new())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), Some(ApiErrorKind::Generic));
    assert_eq!(err.status(), Some(503));
}

#[test]
fn test_debug_hides_key() {
    let client = HttpClient::with_api_key("AIzaSecret").unwrap();
    let rendered = format!("{client:?}");
    assert!(rendered.contains("googleapis.com"));
    assert!(!rendered.contains("AIzaSecret"));
}
