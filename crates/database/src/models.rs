//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role for regular patient accounts.
pub const ROLE_PATIENT: &str = "patient";

/// Role for admin accounts. Admins go through the same credential path
/// as patients; the role only widens what the caller may do upstream.
pub const ROLE_ADMIN: &str = "admin";

/// A registered account. The password hash never leaves the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Unique username, case-sensitive, immutable after creation.
    pub username: String,
    /// Optional email, stored as entered.
    pub email: Option<String>,
    /// Account role: `patient` or `admin`.
    pub role: String,
    /// Creation timestamp.
    pub created_at: String,
}

impl User {
    /// Whether this account carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// Public account info, as listed to admins and embedded in exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserInfo {
    /// Unique username.
    pub username: String,
    /// Optional email.
    pub email: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
}

/// A user's health profile. At most one row per user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Profile {
    /// Age in years, if supplied.
    pub age: Option<i64>,
    /// Blood type from a small closed set, or "Unknown".
    pub blood_type: Option<String>,
    /// Free-text allergies.
    pub allergies: Option<String>,
    /// Free-text chronic conditions.
    pub chronic_conditions: Option<String>,
    /// Free-text emergency contact.
    pub emergency_contact: Option<String>,
    /// Last update timestamp.
    pub updated_at: String,
}

/// Caller-supplied profile fields for an upsert.
///
/// Upserts are full replacements: a field left `None` here is stored as
/// NULL, not preserved from the previous row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Age in years.
    pub age: Option<i64>,
    /// Blood type.
    pub blood_type: Option<String>,
    /// Free-text allergies.
    pub allergies: Option<String>,
    /// Free-text chronic conditions.
    pub chronic_conditions: Option<String>,
    /// Free-text emergency contact.
    pub emergency_contact: Option<String>,
}

/// A symptom analysis record. Immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct HistoryEntry {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Raw symptom text as entered.
    pub symptoms: String,
    /// Severity tier label produced by triage (HIGH/MEDIUM/LOW), stored
    /// opaquely.
    pub severity: String,
    /// Suggested conditions text from the AI provider, stored verbatim.
    pub suggested_conditions: String,
    /// Location string as entered.
    pub location_searched: String,
    /// Creation timestamp.
    pub created_at: String,
}

/// Snapshot counters for the admin dashboard.
///
/// Each count is independently accurate at read time; the set does not
/// represent a single consistent instant under concurrent writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseStats {
    /// Total registered accounts.
    pub users_count: i64,
    /// Total symptom history entries.
    pub history_count: i64,
    /// Total health profiles.
    pub profiles_count: i64,
    /// History entries created within the trailing 24 hours.
    pub recent_searches: i64,
    /// Accounts created within the trailing 7 days.
    pub recent_users: i64,
}

/// Full per-user data snapshot for disclosure/portability requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserExport {
    /// Account info.
    pub user_info: UserInfo,
    /// All history entries, newest first.
    pub symptom_history: Vec<HistoryEntry>,
    /// Health profile, if one was created.
    pub user_profile: Option<Profile>,
}
