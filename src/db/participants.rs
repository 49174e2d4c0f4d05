use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::{NewParticipant, Participant};

pub async fn create(
    conn: &mut PgConnection,
    new: &NewParticipant,
) -> Result<Participant, sqlx::Error> {
    sqlx::query_as::<_, Participant>(
        "INSERT INTO participants
            (fullname, dob, age, nric, nationality, phone_number, email,
             address, gender, race, health_declaration, participant_signature)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
         RETURNING *",
    )
    .bind(&new.fullname)
    .bind(&new.dob)
    .bind(&new.age)
    .bind(&new.nric)
    .bind(&new.nationality)
    .bind(&new.phone_number)
    .bind(&new.email)
    .bind(&new.address)
    .bind(&new.gender)
    .bind(&new.race)
    .bind(&new.health_declaration)
    .bind(&new.participant_signature)
    .fetch_one(conn)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Participant>, sqlx::Error> {
    sqlx::query_as::<_, Participant>("SELECT * FROM participants WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
