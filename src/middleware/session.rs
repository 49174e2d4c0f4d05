use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::CookieJar;
use serde_json::json;

pub const SESSION_COOKIE: &str = "session";
pub const SESSION_VALUE: &str = "authenticated";

/// Gate for the staff-only routes: requires the session cookie set by login.
pub async fn require_session(jar: CookieJar, req: Request, next: Next) -> Response {
    let authenticated = jar
        .get(SESSION_COOKIE)
        .is_some_and(|c| c.value() == SESSION_VALUE);

    if !authenticated {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Not authenticated"})),
        )
            .into_response();
    }

    next.run(req).await
}
