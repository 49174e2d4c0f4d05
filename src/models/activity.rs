use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub participant_id: Uuid,
    pub submission_id: Uuid,
    pub activity_name: Option<String>,
    pub activity_date: Option<String>,
    pub activity_time: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One scheduled activity slot. A slot is kept as long as any of the three
/// fields was filled in on the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewActivity {
    pub activity_name: Option<String>,
    pub activity_date: Option<String>,
    pub activity_time: Option<String>,
}
