//! Tests for the auth module

use super::*;

#[test]
fn test_api_key_query() {
    let credential = Credential::api_key("secret123");

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/youtube/v3/videos?part=snippet");
    let built = credential.apply(req).build().unwrap();

    let query = built.url().query().unwrap();
    assert!(query.contains("part=snippet"));
    assert!(query.contains("key=secret123"));
    assert!(built.headers().get("Authorization").is_none());
}

#[test]
fn test_access_token_header() {
    let credential = Credential::access_token("ya29.token");

    let client = reqwest::Client::new();
    let req = client.get("https://example.com/youtube/v3/videos");
    let built = credential.apply(req).build().unwrap();

    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Bearer ya29.token"
    );
    assert!(built.url().query().is_none());
}

#[test]
fn test_debug_redacts_secret() {
    let rendered = format!("{:?}", Credential::api_key("AIzaSyExample"));
    assert_eq!(rendered, "ApiKey(***)");
    assert!(!rendered.contains("AIza"));

    let rendered = format!("{:?}", Credential::access_token("ya29.token"));
    assert_eq!(rendered, "AccessToken(***)");
}

#[test]
fn test_is_empty() {
    assert!(Credential::api_key("").is_empty());
    assert!(!Credential::access_token("t").is_empty());
}
