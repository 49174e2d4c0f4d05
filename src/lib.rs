pub mod config;
pub mod db;
pub mod error;
pub mod guides;
pub mod insurance;
pub mod middleware;
pub mod models;
pub mod pdf;
pub mod routes;
pub mod state;
pub mod webhook;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use sqlx::PgPool;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::guides::SheetClient;
use crate::insurance::InsuranceClient;
use crate::state::{AppState, SharedState};

pub fn build_app(pool: PgPool, config: Config) -> Router {
    let insurance = InsuranceClient::new(config.insurance.clone());

    let guide_sheet = config.guide_sheet_url.as_ref().map(|url| {
        tracing::info!("Guide sheet lookup configured");
        SheetClient::new(url.clone())
    });

    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        pool,
        config,
        insurance,
        guide_sheet,
    });

    Router::new()
        .merge(routes::api_routes())
        .merge(routes::board_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
