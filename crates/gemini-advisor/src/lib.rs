//! Gemini-backed implementation of the [`Advisor`] trait.
//!
//! Talks to the Google Generative Language API (`generateContent`) over
//! HTTPS and returns the model's free-form text unchanged.
//!
//! [`Advisor`]: advisor_core::Advisor

mod advisor;
mod api_types;
mod config;

pub use advisor::GeminiAdvisor;
pub use config::GeminiConfig;
