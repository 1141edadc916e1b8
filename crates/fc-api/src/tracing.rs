//! Log subscriber setup for the card service.
//!
//! Filtering: a valid `RUST_LOG` replaces the defaults entirely, otherwise
//! [`default_directives`] picks a level from `ENV`. An unparsable `RUST_LOG`
//! is reported once and ignored instead of silencing the service.
//!
//! Format: `LOG_FORMAT` (`pretty`/`json`), defaulting to pretty in development
//! and JSON in production. JSON lines carry the span list, so every event
//! inside a request has the `request_id` recorded by the request id middleware.

use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ApiConfig, Environment, LogFormat};

/// Default filter directives per environment
pub const fn default_directives(env: &Environment) -> &'static str {
    match env {
        Environment::Development => "info,fc_api=debug,serv=debug,tower_http=debug",
        Environment::Production => "warn,fc_api=info,serv=info,tower_http=info",
    }
}

/// Pick the filter directives from `RUST_LOG` (if usable) or the environment defaults.
///
/// Returns the directives and, when `RUST_LOG` was rejected, the reason.
pub fn filter_directives(env: &Environment, rust_log: Option<&str>) -> (String, Option<String>) {
    match rust_log.map(str::trim).filter(|s| !s.is_empty()) {
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(_) => (directives.to_string(), None),
            Err(e) => (default_directives(env).to_string(), Some(e.to_string())),
        },
        None => (default_directives(env).to_string(), None),
    }
}

/// Install the global subscriber for this process
pub fn init_tracing(config: &ApiConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (directives, rejected) = filter_directives(&config.env, rust_log.as_deref());
    let env_filter = EnvFilter::new(&directives);

    let format = config.effective_log_format();
    match format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .pretty()
                    .with_filter(env_filter),
            )
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_filter(env_filter),
            )
            .init(),
    }

    if let Some(reason) = rejected {
        tracing::warn!(%reason, "Ignoring invalid RUST_LOG, using defaults");
    }
    tracing::info!(env = ?config.env, ?format, %directives, "Tracing initialized");
}
