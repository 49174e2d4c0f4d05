use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::guides::{self, SheetSource};
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct CheckIcRequest {
    #[serde(rename = "icNumber")]
    pub ic_number: String,
}

/// Look a guide up in the certification sheet by IC number.
pub async fn check_ic(
    State(state): State<SharedState>,
    Json(req): Json<CheckIcRequest>,
) -> Result<Response, AppError> {
    if guides::normalize_ic(&req.ic_number).is_empty() {
        return Err(AppError::BadRequest("IC number is required".to_string()));
    }

    let sheet = state
        .guide_sheet
        .as_ref()
        .ok_or_else(|| AppError::Internal("Guide sheet is not configured".to_string()))?;

    let rows = sheet.fetch_rows().await?;

    match guides::lookup(&rows, &req.ic_number) {
        Some(record) => Ok(Json(record).into_response()),
        None => Ok(Json(json!({"message": "Record not found. Please contact admin."}))
            .into_response()),
    }
}
