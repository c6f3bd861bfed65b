//! Power word cache against a mock word list server.

use std::time::Duration;

use serde_json::json;
use tubeseo_engine::{fetch_power_words, PowerWordCache, WordListConfig, WordListError};
use tubeseo_models::SourceStatus;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> WordListConfig {
    WordListConfig {
        url: Some(format!("{}/words.json", server.uri())),
        timeout: Duration::from_millis(200),
        ttl: Duration::from_secs(600),
        offline_retry: Duration::from_secs(60),
    }
}

async fn serve(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/words.json"))
        .respond_with(response)
        .mount(server)
        .await;
}

async fn assert_offline(response: ResponseTemplate) {
    let server = MockServer::start().await;
    serve(&server, response).await;

    let cache = PowerWordCache::new(config(&server)).unwrap();
    let words = cache.get().await;

    assert_eq!(words.status, SourceStatus::Offline);
    assert!(words.as_slice().contains(&"secret".to_string()));
}

#[tokio::test]
async fn test_online_list_is_normalized() {
    let server = MockServer::start().await;
    serve(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([" Ultimate ", "SHOCKING", ""])),
    )
    .await;

    let cache = PowerWordCache::new(config(&server)).unwrap();
    let words = cache.get().await;

    assert_eq!(words.status, SourceStatus::Online);
    assert_eq!(words.as_slice(), ["ultimate", "shocking"]);
}

#[tokio::test]
async fn test_online_list_is_cached_within_ttl() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["epic"])))
        .expect(1)
        .mount(&server)
        .await;

    let cache = PowerWordCache::new(config(&server)).unwrap();
    for _ in 0..5 {
        assert_eq!(cache.get().await.status, SourceStatus::Online);
    }
}

#[tokio::test]
async fn test_expired_entry_is_refreshed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["epic"])))
        .expect(2)
        .mount(&server)
        .await;

    let cache = PowerWordCache::new(WordListConfig {
        ttl: Duration::ZERO,
        ..config(&server)
    })
    .unwrap();
    cache.get().await;
    cache.get().await;
}

#[tokio::test]
async fn test_invalidate_forces_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["epic"])))
        .expect(2)
        .mount(&server)
        .await;

    let cache = PowerWordCache::new(config(&server)).unwrap();
    cache.get().await;
    cache.invalidate().await;
    cache.get().await;
}

#[tokio::test]
async fn test_timeout_falls_back() {
    assert_offline(
        ResponseTemplate::new(200)
            .set_body_json(json!(["epic"]))
            .set_delay(Duration::from_secs(2)),
    )
    .await;
}

#[tokio::test]
async fn test_malformed_json_falls_back() {
    assert_offline(ResponseTemplate::new(200).set_body_string("[\"epic\",")).await;
}

#[tokio::test]
async fn test_non_list_payload_falls_back() {
    assert_offline(ResponseTemplate::new(200).set_body_json(json!({"words": ["epic"]}))).await;
    assert_offline(ResponseTemplate::new(200).set_body_json(json!(["epic", 7]))).await;
}

#[tokio::test]
async fn test_non_200_falls_back() {
    assert_offline(ResponseTemplate::new(500).set_body_json(json!(["epic"]))).await;
    assert_offline(ResponseTemplate::new(404)).await;
}

#[tokio::test]
async fn test_empty_list_falls_back() {
    assert_offline(ResponseTemplate::new(200).set_body_json(json!([]))).await;
    assert_offline(ResponseTemplate::new(200).set_body_json(json!(["  "]))).await;
}

#[tokio::test]
async fn test_unreachable_server_falls_back() {
    let cache = PowerWordCache::new(WordListConfig {
        url: Some("http://127.0.0.1:9/words.json".to_string()),
        timeout: Duration::from_millis(200),
        ..WordListConfig::default()
    })
    .unwrap();
    assert_eq!(cache.get().await.status, SourceStatus::Offline);
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_online_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/words.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["epic"])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/words.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let cache = PowerWordCache::new(WordListConfig {
        ttl: Duration::ZERO,
        ..config(&server)
    })
    .unwrap();

    let first = cache.get().await;
    assert_eq!(first.status, SourceStatus::Online);
    let second = cache.get().await;
    assert_eq!(second.status, SourceStatus::Online);
    assert_eq!(second.as_slice(), ["epic"]);
}

#[tokio::test]
async fn test_fetch_reports_explicit_errors() {
    let server = MockServer::start().await;
    serve(&server, ResponseTemplate::new(502)).await;

    let http = reqwest::Client::new();
    let err = fetch_power_words(&http, &format!("{}/words.json", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, WordListError::Status(502)));
}
