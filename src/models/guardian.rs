use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Guardian {
    pub id: Uuid,
    pub guardian_name: Option<String>,
    pub guardian_nric: Option<String>,
    pub guardian_email: Option<String>,
    pub guardian_phone: Option<String>,
    pub guardian_signature: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewGuardian {
    pub guardian_name: String,
    pub guardian_nric: String,
    pub guardian_email: String,
    pub guardian_phone: String,
    pub guardian_signature: String,
}
