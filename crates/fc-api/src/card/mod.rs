//! Flashcard model and routes.

pub mod model;
pub mod routes;

pub use model::{Card, CardCatalog};
pub use routes::routes;
