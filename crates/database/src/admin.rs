//! Admin aggregation, export, and deletion.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{DatabaseStats, HistoryEntry, Profile, UserExport, UserInfo};

/// List all accounts. No pagination; callers may page client-side.
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<UserInfo>> {
    let users = sqlx::query_as::<_, UserInfo>(
        r#"
        SELECT username, email, created_at
        FROM users
        ORDER BY username
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Get usage statistics.
///
/// Counts are taken one query at a time; each is accurate at its own read
/// time but the set is not a single consistent snapshot.
pub async fn stats(pool: &SqlitePool) -> Result<DatabaseStats> {
    let users_count = count(pool, "SELECT COUNT(*) FROM users").await?;
    let history_count = count(pool, "SELECT COUNT(*) FROM symptom_history").await?;
    let profiles_count = count(pool, "SELECT COUNT(*) FROM user_profiles").await?;

    let recent_searches = count(
        pool,
        r#"
        SELECT COUNT(*) FROM symptom_history
        WHERE datetime(created_at) >= datetime('now', '-1 day')
        "#,
    )
    .await?;

    let recent_users = count(
        pool,
        r#"
        SELECT COUNT(*) FROM users
        WHERE datetime(created_at) >= datetime('now', '-7 days')
        "#,
    )
    .await?;

    Ok(DatabaseStats {
        users_count,
        history_count,
        profiles_count,
        recent_searches,
        recent_users,
    })
}

async fn count(pool: &SqlitePool, query: &str) -> Result<i64> {
    Ok(sqlx::query_scalar::<_, i64>(query).fetch_one(pool).await?)
}

/// Export all of a user's data as one structured snapshot.
///
/// Returns `None` for an unknown username. The three entity reads run in
/// a single transaction so the snapshot is internally consistent.
pub async fn export_user(pool: &SqlitePool, username: &str) -> Result<Option<UserExport>> {
    let mut tx = pool.begin().await?;

    let user_info = sqlx::query_as::<_, UserInfo>(
        r#"
        SELECT username, email, created_at
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(user_info) = user_info else {
        return Ok(None);
    };

    let symptom_history = sqlx::query_as::<_, HistoryEntry>(
        r#"
        SELECT sh.id, sh.symptoms, sh.severity, sh.suggested_conditions,
               sh.location_searched, sh.created_at
        FROM symptom_history sh
        JOIN users u ON sh.user_id = u.id
        WHERE u.username = ?
        ORDER BY sh.created_at DESC, sh.id DESC
        "#,
    )
    .bind(username)
    .fetch_all(&mut *tx)
    .await?;

    let user_profile = sqlx::query_as::<_, Profile>(
        r#"
        SELECT up.age, up.blood_type, up.allergies, up.chronic_conditions,
               up.emergency_contact, up.updated_at
        FROM user_profiles up
        JOIN users u ON up.user_id = u.id
        WHERE u.username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Some(UserExport {
        user_info,
        symptom_history,
        user_profile,
    }))
}

/// Delete a user and everything they own.
///
/// History rows, the profile row, and the user row are removed in that
/// dependency order inside one transaction; a failure at any step rolls
/// the whole delete back.
pub async fn delete_user(pool: &SqlitePool, username: &str) -> Result<()> {
    let mut tx = pool.begin().await?;

    let user_id = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT id FROM users WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(user_id) = user_id else {
        return Err(DatabaseError::UnknownUser {
            username: username.to_string(),
        });
    };

    sqlx::query("DELETE FROM symptom_history WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM user_profiles WHERE user_id = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    tracing::info!(username, "user data deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProfileUpdate, ROLE_PATIENT};
    use crate::{account, history, profile, Database};

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    async fn seed_user(db: &Database, username: &str) {
        account::create_account(db.pool(), username, "p4ss", None, ROLE_PATIENT)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_users() {
        let db = test_db().await;
        seed_user(&db, "bob").await;
        seed_user(&db, "alice").await;

        let users = list_users(db.pool()).await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].username, "alice");
        assert_eq!(users[1].username, "bob");
    }

    #[tokio::test]
    async fn test_stats_counts() {
        let db = test_db().await;
        seed_user(&db, "alice").await;
        seed_user(&db, "bob").await;

        history::append_entry(db.pool(), "alice", "fever", "LOW", "", "Delhi")
            .await
            .unwrap();
        profile::upsert_profile(db.pool(), "alice", &ProfileUpdate::default())
            .await
            .unwrap();

        let stats = stats(db.pool()).await.unwrap();
        assert_eq!(stats.users_count, 2);
        assert_eq!(stats.history_count, 1);
        assert_eq!(stats.profiles_count, 1);
        // Both writes just happened, so they land in the trailing windows.
        assert_eq!(stats.recent_searches, 1);
        assert_eq!(stats.recent_users, 2);
    }

    #[tokio::test]
    async fn test_export_unknown_user() {
        let db = test_db().await;
        assert!(export_user(db.pool(), "nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_export_user_snapshot() {
        let db = test_db().await;
        seed_user(&db, "alice").await;

        history::append_entry(db.pool(), "alice", "fever", "MEDIUM", "flu-like illness", "Delhi")
            .await
            .unwrap();
        history::append_entry(db.pool(), "alice", "cough", "LOW", "common cold", "Delhi")
            .await
            .unwrap();
        profile::upsert_profile(
            db.pool(),
            "alice",
            &ProfileUpdate {
                age: Some(30),
                blood_type: Some("O+".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let export = export_user(db.pool(), "alice").await.unwrap().unwrap();
        assert_eq!(export.user_info.username, "alice");
        assert_eq!(export.symptom_history.len(), 2);
        // Newest first.
        assert_eq!(export.symptom_history[0].symptoms, "cough");
        let profile = export.user_profile.unwrap();
        assert_eq!(profile.age, Some(30));

        // The export serializes with the documented key names.
        let json = serde_json::to_value(export_user(db.pool(), "alice").await.unwrap()).unwrap();
        assert!(json.get("user_info").is_some());
        assert!(json.get("symptom_history").is_some());
        assert!(json.get("user_profile").is_some());
    }

    #[tokio::test]
    async fn test_delete_user_cascades() {
        let db = test_db().await;
        seed_user(&db, "alice").await;

        history::append_entry(db.pool(), "alice", "fever", "LOW", "", "Delhi")
            .await
            .unwrap();
        profile::upsert_profile(db.pool(), "alice", &ProfileUpdate::default())
            .await
            .unwrap();

        delete_user(db.pool(), "alice").await.unwrap();

        assert!(!account::exists(db.pool(), "alice").await.unwrap());
        assert!(profile::get_profile(db.pool(), "alice").await.unwrap().is_none());
        assert!(history::list_entries(db.pool(), "alice", 10)
            .await
            .unwrap()
            .is_empty());

        // No orphaned rows left behind.
        let orphans = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM symptom_history")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(orphans, 0);
    }

    #[tokio::test]
    async fn test_delete_user_twice() {
        let db = test_db().await;
        seed_user(&db, "alice").await;

        delete_user(db.pool(), "alice").await.unwrap();
        let result = delete_user(db.pool(), "alice").await;
        assert!(matches!(result, Err(DatabaseError::UnknownUser { .. })));
    }

    #[tokio::test]
    async fn test_writes_after_delete_fail_with_unknown_user() {
        let db = test_db().await;
        seed_user(&db, "alice").await;
        delete_user(db.pool(), "alice").await.unwrap();

        let append = history::append_entry(db.pool(), "alice", "fever", "LOW", "", "Delhi").await;
        assert!(matches!(append, Err(DatabaseError::UnknownUser { .. })));

        let upsert =
            profile::upsert_profile(db.pool(), "alice", &ProfileUpdate::default()).await;
        assert!(matches!(upsert, Err(DatabaseError::UnknownUser { .. })));
    }
}
