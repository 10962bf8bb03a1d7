//! Read-only HTTP views over the shared snapshot

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use crate::{
    storage::StateStore,
    types::{HostReport, StatusView, TransitionLogEntry},
};

const DASHBOARD_HTML: &str = include_str!("../../assets/index.html");

pub fn router(store: StateStore) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/status", get(status))
        .route("/history", get(history))
        .route("/hosts", get(hosts))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

async fn status(State(store): State<StateStore>) -> Json<StatusView> {
    Json(store.read().await.status_view())
}

async fn history(State(store): State<StateStore>) -> Json<Vec<TransitionLogEntry>> {
    Json(store.history().await)
}

async fn hosts(State(store): State<StateStore>) -> Json<Vec<HostReport>> {
    Json(store.hosts().await)
}

async fn health() -> &'static str {
    "ok"
}
