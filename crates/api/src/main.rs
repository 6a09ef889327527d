//! JSON API server for the Sehat symptom checker.
//!
//! Wires the persistence layer, triage classifier, AI advisor, and
//! hospital locator behind one axum router.

mod config;
mod error;
mod routes;
mod state;
mod validation;

use std::sync::Arc;

use advisor_core::Advisor;
use database::Database;
use gemini_advisor::GeminiAdvisor;
use hospital_locator::{HospitalLocator, LocatorConfig};
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting sehat API server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Set up the suggestion provider
    let advisor: Arc<dyn Advisor> = Arc::new(GeminiAdvisor::from_env()?);

    // Set up the hospital locator
    let locator = HospitalLocator::new(LocatorConfig {
        base_url: config.nominatim_url.clone(),
        user_agent: config.nominatim_user_agent.clone(),
        ..Default::default()
    })?;

    // Build application state
    let state = AppState::new(db, advisor, locator);

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "sehat API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
