use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Participant {
    pub id: Uuid,
    pub fullname: Option<String>,
    pub dob: Option<String>,
    pub age: Option<String>,
    pub nric: Option<String>,
    pub nationality: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub race: Option<String>,
    pub health_declaration: Option<String>,
    pub participant_signature: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Column values for a participant insert, straight from the answer map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewParticipant {
    pub fullname: Option<String>,
    pub dob: Option<String>,
    pub age: Option<String>,
    pub nric: Option<String>,
    pub nationality: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub gender: Option<String>,
    pub race: Option<String>,
    pub health_declaration: Option<String>,
    pub participant_signature: Option<String>,
}
