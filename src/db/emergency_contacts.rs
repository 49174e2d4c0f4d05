use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::{EmergencyContact, NewEmergencyContact};

pub async fn create(
    conn: &mut PgConnection,
    new: &NewEmergencyContact,
) -> Result<EmergencyContact, sqlx::Error> {
    sqlx::query_as::<_, EmergencyContact>(
        "INSERT INTO emergency_contacts
            (emergency_fullname, emergency_phone, emergency_relationship)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(&new.emergency_fullname)
    .bind(&new.emergency_phone)
    .bind(&new.emergency_relationship)
    .fetch_one(conn)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<EmergencyContact>, sqlx::Error> {
    sqlx::query_as::<_, EmergencyContact>("SELECT * FROM emergency_contacts WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
