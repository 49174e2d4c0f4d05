use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::{Activity, NewActivity};

/// Insert the activity rows for one submission in a single batch statement.
/// Zero rows is valid; slot order is preserved.
pub async fn create_batch(
    conn: &mut PgConnection,
    participant_id: Uuid,
    submission_id: Uuid,
    slots: &[NewActivity],
) -> Result<Vec<Activity>, sqlx::Error> {
    if slots.is_empty() {
        return Ok(Vec::new());
    }

    let names: Vec<Option<String>> = slots.iter().map(|s| s.activity_name.clone()).collect();
    let dates: Vec<Option<String>> = slots.iter().map(|s| s.activity_date.clone()).collect();
    let times: Vec<Option<String>> = slots.iter().map(|s| s.activity_time.clone()).collect();

    sqlx::query_as::<_, Activity>(
        "INSERT INTO activities
            (participant_id, submission_id, activity_name, activity_date, activity_time)
         SELECT $1, $2, name, date, time
         FROM UNNEST($3::text[], $4::text[], $5::text[]) AS slot(name, date, time)
         RETURNING *",
    )
    .bind(participant_id)
    .bind(submission_id)
    .bind(&names)
    .bind(&dates)
    .bind(&times)
    .fetch_all(conn)
    .await
}

pub async fn list_by_submission(
    pool: &PgPool,
    submission_id: Uuid,
) -> Result<Vec<Activity>, sqlx::Error> {
    sqlx::query_as::<_, Activity>(
        "SELECT * FROM activities WHERE submission_id = $1 ORDER BY created_at",
    )
    .bind(submission_id)
    .fetch_all(pool)
    .await
}
