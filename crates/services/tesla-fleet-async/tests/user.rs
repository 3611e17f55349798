use serde_json::json;
use tesla_fleet_async::{Client, TeslaConfig};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client {
    let config = TeslaConfig::new()
        .with_api_base(server.uri())
        .without_bypass();
    Client::with_config(config).unwrap()
}

#[tokio::test]
async fn me_returns_account() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/1/users/me"))
        .and(header("authorization", "Bearer user-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "response": {"email": "driver@example.com", "full_name": "Test Driver"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.user().me("user-token").await.unwrap();

    assert_eq!(
        resp.as_json().unwrap()["response"]["email"],
        "driver@example.com"
    );
}

#[tokio::test]
async fn each_user_endpoint_hits_its_path() {
    let server = MockServer::start().await;

    for p in ["feature_config", "region", "orders"] {
        Mock::given(method("GET"))
            .and(path(format!("/api/1/users/{p}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": p})))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = test_client(&server);
    let user = client.user();

    let fc = user.feature_config("t").await.unwrap();
    let region = user.region("t").await.unwrap();
    let orders = user.orders("t").await.unwrap();

    assert_eq!(fc.as_json().unwrap()["response"], "feature_config");
    assert_eq!(region.as_json().unwrap()["response"], "region");
    assert_eq!(orders.as_json().unwrap()["response"], "orders");
}
