//! End-to-end walk through a patient's lifecycle against one store:
//! register, authenticate, profile, history, export, delete.

use database::models::{ProfileUpdate, ROLE_PATIENT};
use database::{account, admin, history, profile, Database, DatabaseError};

async fn test_db() -> Database {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    db.migrate().await.unwrap();
    db
}

#[tokio::test]
async fn full_patient_lifecycle() {
    let db = test_db().await;
    let pool = db.pool();

    // Register and authenticate.
    account::create_account(pool, "alice", "p4ss", None, ROLE_PATIENT)
        .await
        .unwrap();
    account::authenticate(pool, "alice", "p4ss").await.unwrap();
    assert!(matches!(
        account::authenticate(pool, "alice", "wrong").await,
        Err(DatabaseError::InvalidCredentials)
    ));

    // Write and read back a profile.
    profile::upsert_profile(
        pool,
        "alice",
        &ProfileUpdate {
            age: Some(30),
            blood_type: Some("O+".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let p = profile::get_profile(pool, "alice").await.unwrap().unwrap();
    assert_eq!(p.age, Some(30));
    assert_eq!(p.blood_type.as_deref(), Some("O+"));
    assert!(p.allergies.is_none());

    // Record one analysis.
    history::append_entry(pool, "alice", "fever", "MEDIUM", "flu-like illness", "Delhi")
        .await
        .unwrap();

    let entries = history::list_entries(pool, "alice", 10).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].symptoms, "fever");
    assert_eq!(entries[0].severity, "MEDIUM");

    // Export carries the same data.
    let export = admin::export_user(pool, "alice").await.unwrap().unwrap();
    assert_eq!(export.user_info.username, "alice");
    assert_eq!(export.symptom_history.len(), 1);
    assert_eq!(export.symptom_history[0].suggested_conditions, "flu-like illness");
    assert_eq!(export.user_profile.unwrap().age, Some(30));

    // Delete removes everything.
    admin::delete_user(pool, "alice").await.unwrap();
    assert!(history::list_entries(pool, "alice", 10)
        .await
        .unwrap()
        .is_empty());
    assert!(profile::get_profile(pool, "alice").await.unwrap().is_none());
    assert!(!account::exists(pool, "alice").await.unwrap());
}
