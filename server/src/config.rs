//! Server configuration parsed from environment variables.

use std::time::Duration;

use ops::{Environment, OpsError, Service};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FEED_INTERVAL_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid DEPLOY_FEED_INTERVAL_SECS: {0} (expected whole seconds >= 1)")]
    InvalidFeedInterval(String),
    #[error("DEPLOY_FEED_SERVICE / DEPLOY_FEED_ENVIRONMENT: {0}")]
    FeedTarget(#[from] OpsError),
}

/// What the deployment feed reports on, and how often.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedConfig {
    pub interval: Duration,
    pub service: Service,
    pub environment: Environment,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_FEED_INTERVAL_SECS),
            service: Service::AuthService,
            environment: Environment::Prod,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub feed: FeedConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DEPLOY_FEED_INTERVAL_SECS`: default 5, minimum 1
    /// - `DEPLOY_FEED_SERVICE`: default `auth-service`
    /// - `DEPLOY_FEED_ENVIRONMENT`: default `prod`
    ///
    /// Values are trimmed before parsing.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first variable that is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let interval_secs = match std::env::var("DEPLOY_FEED_INTERVAL_SECS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs >= 1 => secs,
                _ => return Err(ConfigError::InvalidFeedInterval(raw)),
            },
            Err(_) => DEFAULT_FEED_INTERVAL_SECS,
        };

        let service = env_parse_or("DEPLOY_FEED_SERVICE", Service::AuthService)?;
        let environment = env_parse_or("DEPLOY_FEED_ENVIRONMENT", Environment::Prod)?;

        Ok(Self { port, feed: FeedConfig { interval: Duration::from_secs(interval_secs), service, environment } })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, feed: FeedConfig::default() }
    }
}

fn env_parse_or<T>(key: &str, default: T) -> Result<T, OpsError>
where
    T: std::str::FromStr<Err = OpsError>,
{
    std::env::var(key).map_or(Ok(default), |raw| raw.trim().parse())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
