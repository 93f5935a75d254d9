//! The production lookup against a mock Wolfram|Alpha server
//!
//! Every failure must surface as `NoAnswer`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use prime_time::{
    AppAction, AppConfig, AppEnvironment, AppReducer, AppState, CounterAction, NthPrimeClient,
    NthPrimeOutcome,
};
use futures::future::BoxFuture;
use prime_time_runtime::Store;
use prime_time_wolfram::WolframAlphaClient;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> AppConfig {
    AppConfig::new("test-app")
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(500))
}

fn client_for(server: &MockServer) -> WolframAlphaClient {
    WolframAlphaClient::new(config_for(server).wolfram()).unwrap()
}

fn lookup(client: &WolframAlphaClient, n: i64) -> BoxFuture<'static, NthPrimeOutcome> {
    NthPrimeClient::nth_prime(client, n)
}

#[tokio::test]
async fn test_primary_pod_is_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .and(query_param("input", "prime 6"))
        .and(query_param("format", "plaintext"))
        .and(query_param("output", "JSON"))
        .and(query_param("appid", "test-app"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "queryResult": {
                "pods": [{ "primary": true, "subPods": [{ "plainText": "13" }] }]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = lookup(&client_for(&server), 6).await;
    assert_eq!(outcome, NthPrimeOutcome::Found(13));
}

#[tokio::test]
async fn test_no_primary_pod_is_no_answer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "queryResult": {
                "pods": [{ "primary": false, "subPods": [{ "plainText": "13" }] }]
            }
        })))
        .mount(&server)
        .await;

    assert_eq!(lookup(&client_for(&server), 6).await, NthPrimeOutcome::NoAnswer);
}

#[tokio::test]
async fn test_server_error_is_no_answer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert_eq!(lookup(&client_for(&server), 6).await, NthPrimeOutcome::NoAnswer);
}

#[tokio::test]
async fn test_timeout_is_no_answer() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    assert_eq!(lookup(&client_for(&server), 6).await, NthPrimeOutcome::NoAnswer);
}

#[tokio::test]
async fn test_unreachable_host_is_no_answer() {
    let config = AppConfig::new("test-app")
        .with_base_url("http://127.0.0.1:9")
        .with_timeout(Duration::from_millis(500));
    let client = WolframAlphaClient::new(config.wolfram()).unwrap();

    assert_eq!(lookup(&client, 6).await, NthPrimeOutcome::NoAnswer);
}

#[tokio::test]
async fn test_live_environment_drives_alert() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/query"))
        .and(query_param("input", "prime 2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "queryresult": {
                "pods": [
                    { "title": "Input", "subpods": [{ "plaintext": "p_2" }] },
                    { "title": "Result", "primary": true, "subpods": [{ "plaintext": "3" }] }
                ]
            }
        })))
        .mount(&server)
        .await;

    let env = AppEnvironment::live(&config_for(&server)).unwrap();
    let store = Store::new(AppState::default(), AppReducer::new(), env);

    for _ in 0..2 {
        store
            .send(AppAction::Counter(CounterAction::Increment))
            .await
            .unwrap();
    }
    let mut handle = store
        .send(AppAction::Counter(CounterAction::NthPrimeButtonTapped))
        .await
        .unwrap();
    handle.wait_with_timeout(Duration::from_secs(2)).await.unwrap();

    let message = store
        .state(|s| s.nth_prime.alert.map(|alert| alert.message()))
        .await;
    assert_eq!(message.as_deref(), Some("The 2nd prime is 3"));
}
