//! Shared router state.

use crate::card::CardCatalog;

/// State shared by every request handler
#[derive(Clone, Debug)]
pub struct ApiState {
    /// Cards served by the API
    pub catalog: CardCatalog,
}

impl ApiState {
    /// Build the state around the built-in card catalog
    pub fn new() -> Self {
        let catalog = CardCatalog::builtin();
        tracing::info!(cards = catalog.len(), "Card catalog loaded");

        Self { catalog }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new()
    }
}
