//! Application state shared across handlers.

use std::sync::Arc;

use advisor_core::Advisor;
use database::Database;
use hospital_locator::HospitalLocator;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection.
    pub db: Database,
    /// Condition-suggestion provider.
    pub advisor: Arc<dyn Advisor>,
    /// Hospital search client.
    pub locator: HospitalLocator,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, advisor: Arc<dyn Advisor>, locator: HospitalLocator) -> Self {
        Self {
            db,
            advisor,
            locator,
        }
    }
}
