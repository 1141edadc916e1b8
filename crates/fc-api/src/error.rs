//! Errors returned by request handlers.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Errors returned from request handlers
#[derive(Error, Debug)]
pub enum ApiError {
    /// No card has the requested ID
    #[error("Card not found: {0}")]
    CardNotFound(u32),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::CardNotFound(id) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Card not found",
                    "id": id
                })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_not_found_maps_to_404() {
        let response = ApiError::CardNotFound(42).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ApiError::CardNotFound(42).to_string(), "Card not found: 42");
    }
}
