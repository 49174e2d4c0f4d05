pub mod auth;
pub mod boards;
pub mod guides;
pub mod pdf;
pub mod webhook;

use axum::routing::{get, post};
use axum::Router;

use crate::middleware::session::require_session;
use crate::state::SharedState;

/// Routes reachable without a session: the form-provider webhook, login,
/// guide verification, and PDF download.
pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/tally-to-supabase", post(webhook::ingest))
        .route("/api/auth/login", post(auth::login))
        .route("/api/check-ic", post(guides::check_ic))
        .route("/api/generate-pdf", post(pdf::generate))
}

/// Staff dashboard data, gated by the session cookie.
pub fn board_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/boards/activities", get(boards::activity_board))
        .route("/api/boards/groups", get(boards::group_board))
        .route("/api/submissions/{id}", get(boards::submission_detail))
        .layer(axum::middleware::from_fn(require_session))
}
