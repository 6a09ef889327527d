//! Mock advisor implementations for tests and offline development.

mod canned;
mod failing;

pub use canned::CannedAdvisor;
pub use failing::FailingAdvisor;
