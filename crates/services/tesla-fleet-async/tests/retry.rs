use serde_json::json;
use tesla_fleet_async::{Client, ErrorKind, TeslaConfig, TeslaError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";
const VIN: &str = "5YJ3E1EA7KF000001";

fn fast_backoff() -> backon::ExponentialBuilder {
    backon::ExponentialBuilder::default()
        .with_min_delay(std::time::Duration::from_millis(10))
        .with_max_delay(std::time::Duration::from_millis(50))
        .with_max_times(3)
}

fn test_client_fast_retry(base: &str) -> Client {
    let config = TeslaConfig::new().with_api_base(base).without_bypass();
    Client::with_config(config).unwrap().with_backoff(fast_backoff())
}

#[tokio::test]
async fn retry_429_then_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/products"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": "rate limited"
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/1/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_fast_retry(&server.uri());
    let resp = client.vehicles().products(TOKEN).await.unwrap();

    assert_eq!(resp.into_json().unwrap()["response"], json!([]));
}

#[tokio::test]
async fn post_commands_are_retried() {
    let server = MockServer::start().await;
    let cmd = format!("/api/1/vehicles/{VIN}/command/flash_lights");

    Mock::given(method("POST"))
        .and(path(cmd.as_str()))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path(cmd.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"result": true, "reason": ""}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_fast_retry(&server.uri());
    let resp = client.commands().flash_lights(VIN, TOKEN).await.unwrap();

    assert_eq!(resp.into_json().unwrap()["result"], true);
}

#[tokio::test]
async fn persistent_503_exhausts_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/users/me"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .expect(4)
        .mount(&server)
        .await;

    let client = test_client_fast_retry(&server.uri());
    let err = client.user().me(TOKEN).await.unwrap_err();

    let TeslaError::Api(api) = &err else {
        panic!("expected Api error, got {err:?}");
    };
    assert_eq!(api.status_code, Some(503));
    assert_eq!(api.kind(), ErrorKind::ServerError);
    assert_eq!(api.message, "HTTP 503 Service Unavailable");
}

#[tokio::test]
async fn delete_is_retried_on_504() {
    let server = MockServer::start().await;
    let p = format!("/api/1/vehicles/{VIN}/fleet_telemetry_config");

    Mock::given(method("DELETE"))
        .and(path(p.as_str()))
        .respond_with(ResponseTemplate::new(504))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(p.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_fast_retry(&server.uri());
    client
        .vehicles()
        .delete_fleet_telemetry_config(VIN, TOKEN)
        .await
        .unwrap();
}

#[tokio::test]
async fn no_retry_on_401() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/products"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "invalid bearer token"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_fast_retry(&server.uri());
    let err = client.vehicles().products(TOKEN).await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn no_retry_on_501() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/products"))
        .respond_with(ResponseTemplate::new(501))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_fast_retry(&server.uri());
    let err = client.vehicles().products(TOKEN).await.unwrap_err();

    assert_eq!(err.status_code(), Some(501));
}

#[tokio::test]
async fn unreachable_host_is_network_error() {
    // Port 9 (discard) is closed on test hosts, so connects are refused.
    let client = test_client_fast_retry("http://127.0.0.1:9");
    let err = client.vehicles().products(TOKEN).await.unwrap_err();

    let TeslaError::Api(api) = &err else {
        panic!("expected Api error, got {err:?}");
    };
    assert_eq!(api.status_code, None);
    assert_eq!(api.kind(), ErrorKind::Network);
    assert!(err.caller_message().starts_with("Tesla API error: "));
}

#[tokio::test]
async fn timed_out_attempts_exhaust_retries() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/products"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"response": []}))
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .expect(4)
        .mount(&server)
        .await;

    let config = TeslaConfig::new()
        .with_api_base(server.uri())
        .without_bypass()
        .with_timeout(std::time::Duration::from_millis(100));
    let client = Client::with_config(config)
        .unwrap()
        .with_backoff(fast_backoff());
    let err = client.vehicles().products(TOKEN).await.unwrap_err();

    let TeslaError::Api(api) = &err else {
        panic!("expected Api error, got {err:?}");
    };
    assert_eq!(api.status_code, None);
    assert_eq!(api.kind(), ErrorKind::Network);
    assert!(err.is_retryable());
}
