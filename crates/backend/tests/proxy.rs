//! End-to-end: a mock PHP backend and the proxy, both on ephemeral ports.

use axum::body::Bytes;
use axum::extract::RawQuery;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use backend::routes::{configure_routes, AppState};
use backend::shared::config::UpstreamConfig;
use backend::shared::upstream::HttpUpstream;
use contracts::shared::api::{parse_api_ack, parse_api_response, ApiAction, ApiError, SoRecordsPayload};
use std::net::SocketAddr;
use tokio::net::TcpListener;

const RECORDS: &str = r#"{"success":true,"data":{"records":[
    {"id":1,"so_number":"SO-1","date_so_approved":"2024-02-01","salesman":"X","client":"A","total_price":"100.00","status":"Delivered"},
    {"id":2,"so_number":"SO-2","date_so_approved":"2023-07-15","salesman":"Y","client":"B","total_price":null,"status":"Pending"}
]}}"#;

async fn mock_get(RawQuery(query): RawQuery) -> impl IntoResponse {
    match query.as_deref() {
        Some("action=get_so_records") => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            RECORDS.to_string(),
        ),
        Some("action=html") => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html")],
            "<html>maintenance</html>".to_string(),
        ),
        _ => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain")],
            "unknown action".to_string(),
        ),
    }
}

async fn mock_post(RawQuery(query): RawQuery, body: Bytes) -> impl IntoResponse {
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap_or_default();
    let reply = if query.as_deref() == Some("action=add_so") && body["client"] == "ACME" {
        r#"{"success":true}"#
    } else {
        r#"{"success":false,"error":"client is required"}"#
    };
    ([(header::CONTENT_TYPE, "application/json")], reply)
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn spawn_proxy(upstream_url: String) -> SocketAddr {
    let upstream = HttpUpstream::new(&UpstreamConfig {
        url: upstream_url,
        timeout_secs: 5,
    })
    .unwrap();
    let static_dir = std::env::temp_dir().join("salespro-test-dist");
    spawn(configure_routes(AppState::new(upstream), &static_dir)).await
}

async fn setup() -> String {
    let mock = spawn(Router::new().route("/salespro/api.php", get(mock_get).post(mock_post))).await;
    let proxy = spawn_proxy(format!("http://{}/salespro/api.php", mock)).await;
    format!("http://{}", proxy)
}

#[tokio::test]
async fn test_get_records_through_proxy() {
    let base = setup().await;
    let response = reqwest::Client::new()
        .get(format!("{}{}", base, ApiAction::GetSoRecords.url()))
        .header(header::ORIGIN, "http://localhost:8080")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.text().await.unwrap();

    let payload: SoRecordsPayload = parse_api_response(
        200,
        content_type.as_deref(),
        &body,
        ApiAction::GetSoRecords.fallback_message(),
    )
    .unwrap();
    let records = payload.normalize();
    assert_eq!(records.records.len(), 2);
    assert_eq!(records.options.years, vec!["2024", "2023"]);
}

#[tokio::test]
async fn test_post_body_is_forwarded() {
    let base = setup().await;
    let client = reqwest::Client::new();
    let url = format!("{}{}", base, ApiAction::AddSo.url());

    let ok = client
        .post(&url)
        .json(&serde_json::json!({"client": "ACME", "salesman": "X"}))
        .send()
        .await
        .unwrap();
    let ct = ok.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    let body = ok.text().await.unwrap();
    assert_eq!(parse_api_ack(200, Some(&ct), &body, "x"), Ok(()));

    let rejected = client
        .post(&url)
        .json(&serde_json::json!({"salesman": "X"}))
        .send()
        .await
        .unwrap();
    let body = rejected.text().await.unwrap();
    assert_eq!(
        parse_api_ack(200, Some("application/json"), &body, "x"),
        Err(ApiError::Backend("client is required".into()))
    );
}

#[tokio::test]
async fn test_upstream_status_and_content_type_are_relayed() {
    let base = setup().await;
    let client = reqwest::Client::new();

    let missing = client.get(format!("{}/api?action=nope", base)).send().await.unwrap();
    assert_eq!(missing.status(), 404);
    assert_eq!(missing.text().await.unwrap(), "unknown action");

    let html = client.get(format!("{}/api?action=html", base)).send().await.unwrap();
    let ct = html.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    let body = html.text().await.unwrap();
    let err = parse_api_response::<SoRecordsPayload>(200, Some(&ct), &body, "x").unwrap_err();
    assert!(matches!(err, ApiError::NotJson { .. }));
}

#[tokio::test]
async fn test_unreachable_upstream_is_bad_gateway() {
    // Bind and drop to get a port nobody listens on.
    let dead = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let proxy = spawn_proxy(format!("http://{}/api.php", dead)).await;

    let response = reqwest::get(format!("http://{}/api?action=get_so_records", proxy))
        .await
        .unwrap();
    assert_eq!(response.status(), 502);
    let json: serde_json::Value = response.json().await.unwrap();
    assert_eq!(json["success"], false);
    assert!(json["error"].as_str().unwrap().starts_with("Upstream request failed"));
}

#[tokio::test]
async fn test_health() {
    let base = setup().await;
    let body = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}
