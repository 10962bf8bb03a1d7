//! HTTP routes over the shared snapshot

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use pix_rail_monitor::{api, storage::StateStore, HostReport, RailStatus};
use serde_json::Value;
use tower::ServiceExt;

async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let (status, body) = get(app, uri).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn status_before_first_cycle() {
    let app = api::router(StateStore::new(50));

    let body = get_json(&app, "/status").await;
    assert_eq!(body["PIX"], "Desconhecido");
    assert_eq!(body["updated_at"], Value::Null);
    assert_eq!(get_json(&app, "/history").await, Value::Array(vec![]));
}

#[tokio::test]
async fn status_and_history_reflect_store() {
    let store = StateStore::new(50);
    let app = api::router(store.clone());

    store.record_cycle(RailStatus::Ok, Utc::now(), None, vec![]).await;
    store
        .record_cycle(RailStatus::Oscillating, Utc::now(), Some("Banco Central"), vec![])
        .await;

    let status = get_json(&app, "/status").await;
    assert_eq!(status["PIX"], "Oscilando");
    assert!(status["updated_at"].is_string());

    let history = get_json(&app, "/history").await;
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["service"], "Banco Central");
    assert_eq!(entries[0]["status"], "Oscilando");
    assert_eq!(entries[0]["timestamp"], status["updated_at"]);
}

#[tokio::test]
async fn hosts_lists_diagnostics() {
    let store = StateStore::new(50);
    let app = api::router(store.clone());
    let report = HostReport {
        label: "Mercado Pago".to_string(),
        hostname: "api.mercadopago.com".to_string(),
        port: 443,
        consecutive_failures: 2,
        samples: 0,
        mean_latency_ms: None,
        drives_status: false,
    };
    store.record_cycle(RailStatus::Ok, Utc::now(), None, vec![report]).await;

    let hosts = get_json(&app, "/hosts").await;
    assert_eq!(hosts[0]["label"], "Mercado Pago");
    assert_eq!(hosts[0]["consecutive_failures"], 2);
    assert_eq!(hosts[0]["mean_latency_ms"], Value::Null);
    assert_eq!(hosts[0]["drives_status"], false);
}

#[tokio::test]
async fn dashboard_and_liveness() {
    let app = api::router(StateStore::new(50));

    let (status, body) = get(&app, "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("/status"));
    assert!(html.contains("/history"));

    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");

    let (status, _) = get(&app, "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
