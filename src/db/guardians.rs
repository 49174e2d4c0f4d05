use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::{Guardian, NewGuardian};

pub async fn create(conn: &mut PgConnection, new: &NewGuardian) -> Result<Guardian, sqlx::Error> {
    sqlx::query_as::<_, Guardian>(
        "INSERT INTO guardians
            (guardian_name, guardian_nric, guardian_email, guardian_phone, guardian_signature)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(&new.guardian_name)
    .bind(&new.guardian_nric)
    .bind(&new.guardian_email)
    .bind(&new.guardian_phone)
    .bind(&new.guardian_signature)
    .fetch_one(conn)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Guardian>, sqlx::Error> {
    sqlx::query_as::<_, Guardian>("SELECT * FROM guardians WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
