use serde_json::json;
use tesla_fleet_async::types::DateRangeQuery;
use tesla_fleet_async::{Client, ErrorKind, TeslaConfig, TeslaError};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";

fn test_client_with_bypass(server: &MockServer, bypass: &str) -> Client {
    let config = TeslaConfig::new()
        .with_api_base(server.uri())
        .with_bypass(bypass);
    Client::with_config(config).unwrap()
}

#[tokio::test]
async fn bypass_is_appended_to_every_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/products"))
        .and(query_param("bypass", "proxy-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_bypass(&server, "proxy-secret");
    client.vehicles().products(TOKEN).await.unwrap();
}

#[tokio::test]
async fn bypass_is_merged_with_operation_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/dx/warranty/details"))
        .and(query_param("bypass", "proxy-secret"))
        .and(query_param("vin", "VIN1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_bypass(&server, "proxy-secret");
    client
        .vehicles()
        .warranty_details("VIN1", TOKEN)
        .await
        .unwrap();
}

#[tokio::test]
async fn bypass_reaches_teslamate_too() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cars/1/charges"))
        .and(query_param("bypass", "proxy-secret"))
        .and(query_param("startDate", "2024-01-01T00:00:00Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_bypass(&server, "proxy-secret");
    let range = DateRangeQuery::default().with_start("2024-01-01T00:00:00Z");
    client
        .teslamate(&server.uri())
        .charges(1, &range, TOKEN)
        .await
        .unwrap();
}

#[tokio::test]
async fn no_bypass_when_unset() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/1/vehicles/VIN1/wake_up"))
        .and(query_param_is_missing("bypass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let config = TeslaConfig::new()
        .with_api_base(server.uri())
        .without_bypass();
    let client = Client::with_config(config).unwrap();
    client.vehicles().wake_up("VIN1", TOKEN).await.unwrap();
}

#[tokio::test]
async fn transport_errors_do_not_expose_bypass() {
    use std::error::Error as _;

    // Port 9 (discard) is closed on test hosts, so connects are refused.
    let config = TeslaConfig::new()
        .with_api_base("http://127.0.0.1:9")
        .with_bypass("super-secret-bypass");
    let client = Client::with_config(config).unwrap().with_backoff(
        backon::ExponentialBuilder::default()
            .with_min_delay(std::time::Duration::from_millis(10))
            .with_max_delay(std::time::Duration::from_millis(50))
            .with_max_times(1),
    );

    let err = client.vehicles().products(TOKEN).await.unwrap_err();

    let TeslaError::Api(api) = &err else {
        panic!("expected Api error, got {err:?}");
    };
    assert_eq!(api.kind(), ErrorKind::Network);

    let mut rendered = vec![err.to_string(), err.caller_message(), format!("{err:?}")];
    let mut source = api.source();
    while let Some(e) = source {
        rendered.push(e.to_string());
        source = e.source();
    }
    for text in rendered {
        assert!(
            !text.contains("super-secret-bypass"),
            "bypass value leaked: {text}"
        );
    }
}
