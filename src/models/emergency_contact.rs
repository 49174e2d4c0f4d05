use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: Uuid,
    pub emergency_fullname: Option<String>,
    pub emergency_phone: Option<String>,
    pub emergency_relationship: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmergencyContact {
    pub emergency_fullname: String,
    pub emergency_phone: String,
    pub emergency_relationship: String,
}
