//! Symptom history persistence. Append-only, newest-first reads.

use sqlx::SqlitePool;

use crate::account;
use crate::error::{DatabaseError, Result};
use crate::models::HistoryEntry;

/// Default cap for history reads.
pub const DEFAULT_HISTORY_LIMIT: i64 = 10;

/// Append a symptom analysis record.
///
/// Entries are immutable once written; the timestamp is assigned by the
/// store. The severity tier and suggested-conditions text are stored
/// opaquely, exactly as supplied.
pub async fn append_entry(
    pool: &SqlitePool,
    username: &str,
    symptoms: &str,
    severity: &str,
    suggested_conditions: &str,
    location: &str,
) -> Result<()> {
    let Some(user_id) = account::user_id(pool, username).await? else {
        return Err(DatabaseError::UnknownUser {
            username: username.to_string(),
        });
    };

    sqlx::query(
        r#"
        INSERT INTO symptom_history
            (user_id, symptoms, severity, suggested_conditions, location_searched)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(user_id)
    .bind(symptoms)
    .bind(severity)
    .bind(suggested_conditions)
    .bind(location)
    .execute(pool)
    .await
    .map_err(|e| {
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

/// Get a user's most recent history entries, newest first.
///
/// Ties on `created_at` are broken by insertion order. Returns an empty
/// Vec (never an error) for a user with no entries or an unknown user.
pub async fn list_entries(
    pool: &SqlitePool,
    username: &str,
    limit: i64,
) -> Result<Vec<HistoryEntry>> {
    let rows = sqlx::query_as::<_, HistoryEntry>(
        r#"
        SELECT sh.id, sh.symptoms, sh.severity, sh.suggested_conditions,
               sh.location_searched, sh.created_at
        FROM symptom_history sh
        JOIN users u ON sh.user_id = u.id
        WHERE u.username = ?
        ORDER BY sh.created_at DESC, sh.id DESC
        LIMIT ?
        "#,
    )
    .bind(username)
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ROLE_PATIENT;
    use crate::Database;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    async fn with_user(db: &Database, username: &str) {
        crate::account::create_account(db.pool(), username, "p4ss", None, ROLE_PATIENT)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_append_then_list() {
        let db = test_db().await;
        with_user(&db, "alice").await;

        append_entry(db.pool(), "alice", "fever", "MEDIUM", "flu-like illness", "Delhi")
            .await
            .unwrap();

        let entries = list_entries(db.pool(), "alice", 1).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].symptoms, "fever");
        assert_eq!(entries[0].severity, "MEDIUM");
        assert_eq!(entries[0].suggested_conditions, "flu-like illness");
        assert_eq!(entries[0].location_searched, "Delhi");
    }

    #[tokio::test]
    async fn test_append_unknown_user() {
        let db = test_db().await;

        let result = append_entry(db.pool(), "nobody", "fever", "LOW", "", "Delhi").await;
        assert!(matches!(result, Err(DatabaseError::UnknownUser { .. })));
    }

    #[tokio::test]
    async fn test_list_unknown_user_is_empty() {
        let db = test_db().await;

        let entries = list_entries(db.pool(), "nobody", DEFAULT_HISTORY_LIMIT)
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_list_newest_first_with_insertion_order_ties() {
        let db = test_db().await;
        with_user(&db, "alice").await;

        // All rows land within the same datetime('now') second, so the
        // ordering must fall back to insertion order.
        for i in 0..5 {
            append_entry(
                db.pool(),
                "alice",
                &format!("symptom {i}"),
                "LOW",
                "",
                "Delhi",
            )
            .await
            .unwrap();
        }

        let entries = list_entries(db.pool(), "alice", DEFAULT_HISTORY_LIMIT)
            .await
            .unwrap();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0].symptoms, "symptom 4");
        assert_eq!(entries[4].symptoms, "symptom 0");
    }

    #[tokio::test]
    async fn test_list_respects_limit() {
        let db = test_db().await;
        with_user(&db, "alice").await;

        for i in 0..15 {
            append_entry(db.pool(), "alice", &format!("symptom {i}"), "LOW", "", "Delhi")
                .await
                .unwrap();
        }

        let entries = list_entries(db.pool(), "alice", DEFAULT_HISTORY_LIMIT)
            .await
            .unwrap();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].symptoms, "symptom 14");
    }

    #[tokio::test]
    async fn test_history_is_scoped_per_user() {
        let db = test_db().await;
        with_user(&db, "alice").await;
        with_user(&db, "bob").await;

        append_entry(db.pool(), "alice", "fever", "LOW", "", "Delhi")
            .await
            .unwrap();
        append_entry(db.pool(), "bob", "cough", "LOW", "", "Mumbai")
            .await
            .unwrap();

        let entries = list_entries(db.pool(), "alice", DEFAULT_HISTORY_LIMIT)
            .await
            .unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].symptoms, "fever");
    }
}
