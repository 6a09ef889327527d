//! SQLite persistence layer for Sehat.
//!
//! This crate provides async database operations for accounts, health
//! profiles, and symptom history using SQLx with SQLite, plus the admin
//! aggregation/export/delete surface built on top of them.
//!
//! # Example
//!
//! ```no_run
//! use database::{account, models::ROLE_PATIENT, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:sehat.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Register an account
//!     account::create_account(db.pool(), "alice", "p4ss", None, ROLE_PATIENT).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod admin;
pub mod error;
pub mod history;
pub mod models;
mod password;
pub mod profile;

pub use error::{DatabaseError, Result};
pub use history::DEFAULT_HISTORY_LIMIT;
pub use models::{
    DatabaseStats, HistoryEntry, Profile, ProfileUpdate, User, UserExport, UserInfo,
};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
///
/// Holds a connection pool handle; clone it and pass it into whatever
/// needs storage access. Every operation checks a connection out for one
/// transaction and releases it; there is no long-lived global handle.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    /// Sized for many concurrent request handlers sharing one store.
    const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/sehat.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
