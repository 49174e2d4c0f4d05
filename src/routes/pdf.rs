use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;

use crate::db;
use crate::error::AppError;
use crate::pdf;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct GeneratePdfRequest {
    #[serde(rename = "submissionId")]
    pub submission_id: Option<uuid::Uuid>,
    pub group: Option<String>,
}

/// Download the indemnity form for one submission, or the first submission
/// of a group, as a PDF attachment.
pub async fn generate(
    State(state): State<SharedState>,
    Json(req): Json<GeneratePdfRequest>,
) -> Result<Response, AppError> {
    let (submission_id, filename_hint) = match (&req.submission_id, &req.group) {
        (Some(id), _) => (*id, None),
        (None, Some(group)) => {
            let id = db::submissions::find_first_id_by_group(&state.pool, group)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("No submissions found for group: {group}"))
                })?;
            (id, Some(format!("indemnity_group_{group}.pdf")))
        }
        (None, None) => {
            return Err(AppError::BadRequest(
                "No submissionId or group provided".to_string(),
            ));
        }
    };

    let bundle = db::fetch_bundle(&state.pool, submission_id).await?;
    let pdf_bytes = pdf::render_pdf(&state.config.pdf_renderer, &bundle).await?;

    let filename = filename_hint.unwrap_or_else(|| {
        format!(
            "indemnity_{}.pdf",
            bundle.participant.nric.as_deref().unwrap_or("unknown")
        )
    });

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf_bytes,
    )
        .into_response())
}
