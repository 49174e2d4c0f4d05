use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::db::submissions::{BoardCard, GroupSummary};
use crate::error::AppError;
use crate::models::SubmissionBundle;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct ActivityBoardQuery {
    pub branch: Option<String>,
    pub date: Option<String>,
}

/// Cards for the activity/date kanban view.
pub async fn activity_board(
    State(state): State<SharedState>,
    Query(query): Query<ActivityBoardQuery>,
) -> Result<Json<Vec<BoardCard>>, AppError> {
    let cards = db::submissions::list_cards(
        &state.pool,
        query.branch.as_deref(),
        query.date.as_deref(),
    )
    .await?;
    Ok(Json(cards))
}

/// Group labels with submission counts for the group kanban view.
pub async fn group_board(
    State(state): State<SharedState>,
) -> Result<Json<Vec<GroupSummary>>, AppError> {
    let groups = db::submissions::list_groups(&state.pool).await?;
    Ok(Json(groups))
}

/// Full record bundle for the client-info view.
pub async fn submission_detail(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SubmissionBundle>, AppError> {
    let bundle = db::fetch_bundle(&state.pool, id).await?;
    Ok(Json(bundle))
}
