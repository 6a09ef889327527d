//! Core trait and types for condition-suggestion providers.
//!
//! This crate defines the shared interface every suggestion backend
//! implements:
//!
//! - [`Advisor`] - The trait all providers implement
//! - [`SuggestionRequest`] / [`Suggestion`] - Input/output types
//! - [`Language`] - The supported response languages
//! - [`AdvisorError`] - Error types for provider operations
//!
//! # Example
//!
//! ```rust
//! use advisor_core::{Advisor, AdvisorError, Suggestion, SuggestionRequest};
//! use async_trait::async_trait;
//!
//! struct MyAdvisor;
//!
//! #[async_trait]
//! impl Advisor for MyAdvisor {
//!     async fn suggest(&self, request: SuggestionRequest) -> Result<Suggestion, AdvisorError> {
//!         Ok(Suggestion::new(request.language, "Possible common cold."))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "MyAdvisor"
//!     }
//! }
//! ```

mod error;
mod language;
mod request;
mod trait_def;

pub use error::AdvisorError;
pub use language::Language;
pub use request::{Suggestion, SuggestionRequest};
pub use trait_def::Advisor;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
