use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::webhook::fields::{self, RawField};
use crate::webhook::mapper::{PersistOutcome, SubmissionPlan, persist};

#[derive(Deserialize)]
pub struct WebhookPayload {
    pub data: Option<WebhookData>,
}

#[derive(Deserialize)]
pub struct WebhookData {
    #[serde(rename = "submissionId")]
    pub submission_id: Option<String>,
    #[serde(rename = "respondentId")]
    pub respondent_id: Option<String>,
    pub fields: Option<Vec<RawField>>,
}

/// Inbound indemnity-form delivery from the form provider.
pub async fn ingest(
    State(state): State<SharedState>,
    Json(payload): Json<WebhookPayload>,
) -> Result<Response, AppError> {
    let data = payload
        .data
        .filter(|d| d.fields.is_some())
        .ok_or_else(|| AppError::BadRequest("Invalid payload, no fields".to_string()))?;

    let answers = fields::parse_answers(data.fields.as_deref().unwrap_or_default());
    tracing::debug!(?answers, "Mapped answers");

    let plan = SubmissionPlan::from_answers(&answers, data.submission_id, data.respondent_id);

    let bundle = match persist(&state.pool, &plan).await? {
        PersistOutcome::Created(bundle) => bundle,
        PersistOutcome::Duplicate => {
            tracing::info!(
                tally_submission_id = ?plan.submission.tally_submission_id,
                "Duplicate webhook delivery, nothing written"
            );
            return Ok((
                StatusCode::OK,
                Json(json!({"success": true, "duplicate": true})),
            )
                .into_response());
        }
    };

    tracing::info!(
        submission_id = %bundle.submission.id,
        participant_id = %bundle.participant.id,
        activities = bundle.activities.len(),
        "Stored submission"
    );

    // Insurance failure must not undo the stored submission; it is logged
    // and the webhook still answers success.
    match state.insurance.create_policy(&plan.insurance).await {
        Ok(response) => {
            tracing::info!(submission_id = %bundle.submission.id, ?response, "Insurance response");
        }
        Err(e) => {
            tracing::error!(submission_id = %bundle.submission.id, "Insurance request failed: {e}");
        }
    }

    Ok((StatusCode::OK, Json(json!({"success": true}))).into_response())
}
