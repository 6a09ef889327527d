//! Database error types.

use thiserror::Error;

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// SQLx error (connection, query, etc.)
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Username already taken at account creation
    #[error("username already exists: {username}")]
    DuplicateUsername { username: String },

    /// Username could not be resolved to an account
    #[error("unknown user: {username}")]
    UnknownUser { username: String },

    /// Wrong password or nonexistent username. The two cases are
    /// deliberately indistinguishable.
    #[error("invalid username or password")]
    InvalidCredentials,
}

/// Result type for database operations.
pub type Result<T> = std::result::Result<T, DatabaseError>;
