use serde_json::json;
use tesla_fleet_async::types::{ScheduleRequest, SetTempsRequest};
use tesla_fleet_async::{Client, Payload, TeslaConfig};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "test-token";
const VIN: &str = "5YJ3E1EA7KF000001";

fn test_client(server: &MockServer) -> Client {
    let config = TeslaConfig::new()
        .with_api_base(server.uri())
        .without_bypass();
    Client::with_config(config).unwrap()
}

fn command_path(command: &str) -> String {
    format!("/api/1/vehicles/{VIN}/command/{command}")
}

fn ok_result() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "response": {"result": true, "reason": ""}
    }))
}

#[tokio::test]
async fn door_lock_sends_empty_object_and_unwraps() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(command_path("door_lock")))
        .and(body_json(json!({})))
        .respond_with(ok_result())
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.commands().door_lock(VIN, TOKEN).await.unwrap();

    assert_eq!(resp, Payload::Json(json!({"result": true, "reason": ""})));
}

#[tokio::test]
async fn response_without_envelope_is_returned_whole() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(command_path("honk_horn")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": false})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.commands().honk_horn(VIN, TOKEN).await.unwrap();

    assert_eq!(resp, Payload::Json(json!({"result": false})));
}

#[tokio::test]
async fn set_charge_limit_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(command_path("set_charge_limit")))
        .and(body_json(json!({"percent": 80})))
        .respond_with(ok_result())
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .commands()
        .set_charge_limit(VIN, 80, TOKEN)
        .await
        .unwrap();
}

#[tokio::test]
async fn set_temps_omits_unset_passenger() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(command_path("set_temps")))
        .and(body_json(json!({"driver_temp": 21.5})))
        .respond_with(ok_result())
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let temps = SetTempsRequest {
        driver_temp: Some(21.5),
        passenger_temp: None,
    };
    client.commands().set_temps(VIN, temps, TOKEN).await.unwrap();
}

#[tokio::test]
async fn navigation_request_defaults_locale() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(command_path("navigation_request")))
        .and(body_json(json!({
            "type": "share_ext_content_raw",
            "value": {"android.intent.extra.TEXT": "1 Infinite Loop, Cupertino"},
            "locale": "en-US"
        })))
        .respond_with(ok_result())
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .commands()
        .navigation_request(VIN, "1 Infinite Loop, Cupertino", None, TOKEN)
        .await
        .unwrap();
}

#[tokio::test]
async fn add_charge_schedule_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(command_path("add_charge_schedule")))
        .and(body_json(json!({
            "time": "23:00",
            "latitude": 37.4,
            "longitude": -122.1,
            "name": "Home"
        })))
        .respond_with(ok_result())
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let schedule = ScheduleRequest::new("23:00", 37.4, -122.1).with_name("Home");
    client
        .commands()
        .add_charge_schedule(VIN, &schedule, TOKEN)
        .await
        .unwrap();
}

#[tokio::test]
async fn remove_precondition_schedule_sends_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(command_path("remove_precondition_schedule")))
        .and(body_json(json!({"id": 7})))
        .respond_with(ok_result())
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .commands()
        .remove_precondition_schedule(VIN, 7, TOKEN)
        .await
        .unwrap();
}

#[tokio::test]
async fn send_arbitrary_command() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(command_path("set_vehicle_name")))
        .and(body_json(json!({"vehicle_name": "Roadrunner"})))
        .respond_with(ok_result())
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .commands()
        .send(
            VIN,
            "set_vehicle_name",
            &json!({"vehicle_name": "Roadrunner"}),
            TOKEN,
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn schedule_with_empty_name_omits_it() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(command_path("add_precondition_schedule")))
        .and(body_json(json!({"time": "07:30", "latitude": 1.5, "longitude": 2.5})))
        .respond_with(ok_result())
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let schedule = ScheduleRequest::new("07:30", 1.5, 2.5).with_name("");
    client
        .commands()
        .add_precondition_schedule(VIN, &schedule, TOKEN)
        .await
        .unwrap();
}

#[tokio::test]
async fn navigation_request_empty_locale_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(command_path("navigation_request")))
        .and(body_json(json!({
            "type": "share_ext_content_raw",
            "value": {"android.intent.extra.TEXT": "Home"},
            "locale": "en-US"
        })))
        .respond_with(ok_result())
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .commands()
        .navigation_request(VIN, "Home", Some(""), TOKEN)
        .await
        .unwrap();
}
