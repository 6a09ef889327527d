//! Health profile storage. One optional profile per account.

use sqlx::SqlitePool;

use crate::account;
use crate::error::{DatabaseError, Result};
use crate::models::{Profile, ProfileUpdate};

/// Create or replace a user's health profile.
///
/// This is a full-replace upsert: every column is overwritten with the
/// caller-supplied value, and fields omitted from `update` become NULL.
/// One row per user is enforced by the UNIQUE constraint on `user_id`.
pub async fn upsert_profile(
    pool: &SqlitePool,
    username: &str,
    update: &ProfileUpdate,
) -> Result<()> {
    let Some(user_id) = account::user_id(pool, username).await? else {
        return Err(DatabaseError::UnknownUser {
            username: username.to_string(),
        });
    };

    sqlx::query(
        r#"
        INSERT INTO user_profiles
            (user_id, age, blood_type, allergies, chronic_conditions, emergency_contact)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(user_id) DO UPDATE SET
            age = excluded.age,
            blood_type = excluded.blood_type,
            allergies = excluded.allergies,
            chronic_conditions = excluded.chronic_conditions,
            emergency_contact = excluded.emergency_contact,
            updated_at = datetime('now')
        "#,
    )
    .bind(user_id)
    .bind(update.age)
    .bind(&update.blood_type)
    .bind(&update.allergies)
    .bind(&update.chronic_conditions)
    .bind(&update.emergency_contact)
    .execute(pool)
    .await
    .map_err(|e| {
        // The account can vanish between the lookup and the insert if a
        // cascading delete commits first; the foreign key catches it.
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_foreign_key_violation() {
                return DatabaseError::UnknownUser {
                    username: username.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Get a user's health profile.
///
/// Returns `None` both when no profile has been written yet and when the
/// username itself is unknown.
pub async fn get_profile(pool: &SqlitePool, username: &str) -> Result<Option<Profile>> {
    let record = sqlx::query_as::<_, Profile>(
        r#"
        SELECT up.age, up.blood_type, up.allergies, up.chronic_conditions,
               up.emergency_contact, up.updated_at
        FROM user_profiles up
        JOIN users u ON up.user_id = u.id
        WHERE u.username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}
