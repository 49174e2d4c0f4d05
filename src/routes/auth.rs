use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde_json::json;
use subtle::ConstantTimeEq;

use crate::middleware::session::{SESSION_COOKIE, SESSION_VALUE};
use crate::state::SharedState;

const SESSION_MAX_AGE_SECS: i64 = 60 * 60;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Staff login: a single shared password checked in constant time. Success
/// sets the session cookie that gates the board routes.
pub async fn login(
    State(state): State<SharedState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Response {
    let ok: bool = req
        .password
        .as_bytes()
        .ct_eq(state.config.admin_password.as_bytes())
        .into();

    if !ok {
        return (StatusCode::UNAUTHORIZED, Json(json!({"success": false}))).into_response();
    }

    let cookie = Cookie::build((SESSION_COOKIE, SESSION_VALUE))
        .path("/")
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::seconds(SESSION_MAX_AGE_SECS))
        .build();

    (jar.add(cookie), Json(json!({"success": true}))).into_response()
}
