//! Environment configuration.

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading the configuration at startup
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable is present but cannot be parsed
    #[error("Invalid environment configuration: {0}")]
    Env(#[from] envy::Error),
}

/// Deployment environment, read from `ENV`
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local run, readable logs
    #[default]
    Development,
    /// Deployed, JSON logs and HSTS
    Production,
}

impl Environment {
    /// Whether this is a local development run
    pub const fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Whether this is a production deployment
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

/// Service configuration, loaded from environment variables.
///
/// Every field has a default so the server starts with an empty environment.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiConfig {
    /// Listener address, read from `HOST`
    #[serde(default = "default_host")]
    pub host: String,
    /// Listener port, read from `PORT`
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma-separated list of origins allowed by CORS
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: String,
    /// Deployment environment, read from `ENV`
    #[serde(default)]
    pub env: Environment,
    /// Log output format, read from `LOG_FORMAT`; follows `env` when unset
    #[serde(default)]
    pub log_format: Option<LogFormat>,
}

/// Shape of the log lines written to stdout
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    /// One JSON object per line
    Json,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> String {
    "http://localhost:3000".to_string()
}

impl ApiConfig {
    /// Load the configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let config: Self = envy::from_env()?;
        Ok(config)
    }

    /// Build the configuration from explicit key/value pairs instead of the process environment
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: Self = envy::from_iter(vars)?;
        Ok(config)
    }

    /// Address the listener binds to, as `host:port`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Allowed CORS origins, trimmed, empty entries dropped
    pub fn parsed_allowed_origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

impl ApiConfig {
    /// Log format to use: `LOG_FORMAT` when set, otherwise pretty in development and JSON in production
    pub fn effective_log_format(&self) -> LogFormat {
        self.log_format.unwrap_or(if self.env.is_production() {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
            env: Environment::default(),
            log_format: None,
        }
    }
}
