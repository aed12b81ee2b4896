#![allow(clippy::unwrap_used)]
// Integration tests for the plant snapshot aggregation.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use higeco_api::{Credentials, Error, HigecoClient};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, HigecoClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = HigecoClient::with_client(
        reqwest::Client::new(),
        base_url,
        Credentials {
            username: "operator".into(),
            password: "hunter2".to_string().into(),
            fallback_token: None,
        },
    );
    (server, client)
}

/// Mount a two-device plant where both devices report "Battery voltage".
///
/// Traversal order: gwc (log 1) first, then inv1 (log 4), so the value
/// from inv1 should win for the duplicated name.
async fn mount_plant(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/v1/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-snap" })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/plants/7/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "gwc" },
            { "id": "inv1" },
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/plants/7/devices/gwc/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "status" },
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/plants/7/devices/inv1/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 4, "name": "power" },
        ])))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/getLastValue/7/gwc/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "name": "Battery voltage", "value": 47.9, "utc": 100 },
                { "name": "Output power", "value": 1500, "utc": 110 },
            ]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/getLastValue/7/inv1/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "name": "Battery voltage", "value": 48.4, "utc": 120 },
            ]
        })))
        .mount(server)
        .await;
}

// ── Snapshot tests ──────────────────────────────────────────────────

#[tokio::test]
async fn test_snapshot_collects_requested_parameters() {
    let (server, client) = setup().await;
    mount_plant(&server).await;

    let snap = client
        .snapshot(7, &["Battery voltage", "Output power"])
        .await
        .unwrap();

    // No explicit login -- the aggregator established the session itself.
    assert_eq!(client.token().as_deref(), Some("tok-snap"));

    assert_eq!(snap["Output power"], json!(1500));
    assert_eq!(snap["Timestamp"], json!(120));
    assert_eq!(snap.len(), 3);
}

#[tokio::test]
async fn test_snapshot_duplicate_name_last_write_wins() {
    let (server, client) = setup().await;
    mount_plant(&server).await;

    let snap = client.snapshot(7, &["Battery voltage"]).await.unwrap();

    // Both devices report "Battery voltage"; inv1 is traversed last.
    assert_eq!(snap["Battery voltage"], json!(48.4));
}

#[tokio::test]
async fn test_snapshot_missing_parameter_maps_to_empty_string() {
    let (server, client) = setup().await;
    mount_plant(&server).await;

    let snap = client
        .snapshot(7, &["Battery voltage", "Grid frequency"])
        .await
        .unwrap();

    assert_eq!(snap["Grid frequency"], json!(""));
}

#[tokio::test]
async fn test_snapshot_of_empty_plant() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-snap" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/plants/7/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let snap = client.snapshot(7, &["Battery voltage"]).await.unwrap();

    // Nothing was traversed: no Timestamp entry, parameters map to "".
    assert_eq!(snap.get("Timestamp"), None);
    assert_eq!(snap["Battery voltage"], json!(""));
    assert_eq!(snap.len(), 1);
}

#[tokio::test]
async fn test_snapshot_aborts_on_failed_fetch() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/authenticate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-snap" })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/plants/7/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "gwc" },
            { "id": "inv1" },
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/plants/7/devices/gwc/logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1 },
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/getLastValue/7/gwc/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/v1/plants/7/devices/inv1/logs"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = client.snapshot(7, &["Battery voltage"]).await;

    match result {
        Err(Error::Api { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected Api error, got: {other:?}"),
    }
}
