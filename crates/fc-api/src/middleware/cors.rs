//! Cross-origin policy for the frontend.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Creates a CORS layer for the given origins.
///
/// # Arguments
/// * `allowed_origins` - List of allowed origin URLs as strings
///
/// # Returns
/// A configured `CorsLayer` with:
/// - Allowed origins parsed from the provided list
/// - Any method and any request header, echoed back from the preflight request
/// - Credentials enabled
///
/// Browsers reject `*` together with credentials, so methods and headers are
/// mirrored instead and a wildcard origin entry is ignored.
pub fn create_cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let origins = allowed_origins
        .into_iter()
        .filter(|s| {
            if s == "*" {
                tracing::warn!("Ignoring wildcard CORS origin, credentials are enabled");
                return false;
            }
            true
        })
        .filter_map(|s| match s.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %s, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
