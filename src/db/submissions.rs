use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::{NewSubmission, Submission};

pub async fn create(
    conn: &mut PgConnection,
    new: &NewSubmission,
    participant_id: Uuid,
    guardian_id: Option<Uuid>,
    emergency_id: Option<Uuid>,
) -> Result<Submission, sqlx::Error> {
    sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions
            (tally_submission_id, tally_respondent_id, branch, \"group\",
             booking_status, activity_amount, participant_id, guardian_id, emergency_id)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
         RETURNING *",
    )
    .bind(&new.tally_submission_id)
    .bind(&new.tally_respondent_id)
    .bind(&new.branch)
    .bind(&new.group)
    .bind(&new.booking_status)
    .bind(&new.activity_amount)
    .bind(participant_id)
    .bind(guardian_id)
    .bind(emergency_id)
    .fetch_one(conn)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Submission>, sqlx::Error> {
    sqlx::query_as::<_, Submission>("SELECT * FROM submissions WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn find_first_id_by_group(
    pool: &PgPool,
    group: &str,
) -> Result<Option<Uuid>, sqlx::Error> {
    let row: Option<(Uuid,)> = sqlx::query_as(
        "SELECT id FROM submissions WHERE \"group\" = $1 ORDER BY created_at LIMIT 1",
    )
    .bind(group)
    .fetch_optional(pool)
    .await?;
    Ok(row.map(|(id,)| id))
}

/// One card on a kanban board: the submission joined with the participant
/// fields staff scan for, including the medical-declaration flag.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct BoardCard {
    pub id: Uuid,
    pub branch: Option<String>,
    pub group: Option<String>,
    pub booking_status: Option<String>,
    pub fullname: Option<String>,
    pub nric: Option<String>,
    pub health_declaration: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub async fn list_cards(
    pool: &PgPool,
    branch: Option<&str>,
    activity_date: Option<&str>,
) -> Result<Vec<BoardCard>, sqlx::Error> {
    sqlx::query_as::<_, BoardCard>(
        "SELECT s.id, s.branch, s.\"group\", s.booking_status,
                p.fullname, p.nric, p.health_declaration, s.created_at
         FROM submissions s
         JOIN participants p ON p.id = s.participant_id
         WHERE ($1::text IS NULL OR s.branch = $1)
           AND ($2::text IS NULL OR EXISTS (
                SELECT 1 FROM activities a
                WHERE a.submission_id = s.id AND a.activity_date = $2))
         ORDER BY s.created_at DESC",
    )
    .bind(branch)
    .bind(activity_date)
    .fetch_all(pool)
    .await
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct GroupSummary {
    pub group: Option<String>,
    pub submissions: i64,
}

pub async fn list_groups(pool: &PgPool) -> Result<Vec<GroupSummary>, sqlx::Error> {
    sqlx::query_as::<_, GroupSummary>(
        "SELECT \"group\", COUNT(*) AS submissions
         FROM submissions
         GROUP BY \"group\"
         ORDER BY \"group\" NULLS LAST",
    )
    .fetch_all(pool)
    .await
}
