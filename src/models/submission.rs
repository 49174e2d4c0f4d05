use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Activity, EmergencyContact, Guardian, Participant};

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub tally_submission_id: Option<String>,
    pub tally_respondent_id: Option<String>,
    pub branch: Option<String>,
    pub group: Option<String>,
    pub booking_status: Option<String>,
    pub activity_amount: Option<String>,
    pub participant_id: Uuid,
    pub guardian_id: Option<Uuid>,
    pub emergency_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewSubmission {
    pub tally_submission_id: Option<String>,
    pub tally_respondent_id: Option<String>,
    pub branch: Option<String>,
    pub group: Option<String>,
    pub booking_status: Option<String>,
    pub activity_amount: Option<String>,
}

/// A submission with every record it references, as the dashboard and the
/// PDF renderer consume it.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionBundle {
    pub submission: Submission,
    pub participant: Participant,
    pub guardian: Option<Guardian>,
    pub emergency: Option<EmergencyContact>,
    pub activities: Vec<Activity>,
}
