//! Read-only HTTP API serving a fixed catalog of flashcards.

pub mod card;
pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod router;
pub mod state;
pub mod tracing;

pub use card::{Card, CardCatalog};
pub use config::ApiConfig;
pub use state::ApiState;
