pub mod activities;
pub mod emergency_contacts;
pub mod guardians;
pub mod participants;
pub mod submissions;

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::SubmissionBundle;

/// Load a submission with everything it references. The dashboard detail
/// view and the PDF renderer both consume this shape.
pub async fn fetch_bundle(pool: &PgPool, id: Uuid) -> Result<SubmissionBundle, AppError> {
    let submission = submissions::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Submission {id} not found")))?;

    let participant = participants::find_by_id(pool, submission.participant_id)
        .await?
        .ok_or_else(|| {
            AppError::Internal(format!("Submission {id} references a missing participant"))
        })?;

    let guardian = match submission.guardian_id {
        Some(gid) => guardians::find_by_id(pool, gid).await?,
        None => None,
    };

    let emergency = match submission.emergency_id {
        Some(eid) => emergency_contacts::find_by_id(pool, eid).await?,
        None => None,
    };

    let activities = activities::list_by_submission(pool, id).await?;

    Ok(SubmissionBundle {
        submission,
        participant,
        guardian,
        emergency,
        activities,
    })
}
