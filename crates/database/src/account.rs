//! Account creation and authentication.

use sqlx::{FromRow, SqlitePool};

use crate::error::{DatabaseError, Result};
use crate::models::User;
use crate::password;

/// Full account row, including the stored hash. Never leaves this module.
#[derive(FromRow)]
struct AccountRow {
    id: i64,
    username: String,
    password_hash: String,
    email: Option<String>,
    role: String,
    created_at: String,
}

impl AccountRow {
    fn into_user(self) -> User {
        User {
            id: self.id,
            username: self.username,
            email: self.email,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Create a new account.
///
/// The password is stored only as a salted PBKDF2 hash. Duplicate
/// usernames are detected by the storage-level UNIQUE constraint, so
/// exactly one of two concurrent creates for the same username succeeds.
pub async fn create_account(
    pool: &SqlitePool,
    username: &str,
    password: &str,
    email: Option<&str>,
    role: &str,
) -> Result<User> {
    let password_hash = password::hash_password(password);

    sqlx::query(
        r#"
        INSERT INTO users (username, password_hash, email, role)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(username)
    .bind(&password_hash)
    .bind(email)
    .bind(role)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::DuplicateUsername {
                    username: username.to_string(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    tracing::info!(username, role, "account created");
    get_user(pool, username).await
}

/// Authenticate an account.
///
/// Returns `InvalidCredentials` uniformly whether the username is absent
/// or the password is wrong.
pub async fn authenticate(pool: &SqlitePool, username: &str, password: &str) -> Result<User> {
    let row = sqlx::query_as::<_, AccountRow>(
        r#"
        SELECT id, username, password_hash, email, role, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) if password::verify_password(password, &row.password_hash) => {
            Ok(row.into_user())
        }
        _ => Err(DatabaseError::InvalidCredentials),
    }
}

/// Check whether a username is registered. Pure lookup, no side effects.
pub async fn exists(pool: &SqlitePool, username: &str) -> Result<bool> {
    Ok(user_id(pool, username).await?.is_some())
}

/// Get an account by username.
pub async fn get_user(pool: &SqlitePool, username: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, role, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::UnknownUser {
        username: username.to_string(),
    })
}

/// Resolve a username to its row ID, if the account exists.
pub(crate) async fn user_id(pool: &SqlitePool, username: &str) -> Result<Option<i64>> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT id FROM users WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(id)
}
