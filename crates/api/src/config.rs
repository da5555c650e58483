//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Server configuration.
///
/// Collaborator credentials (tenant, client, drive, oracle key) are read
/// separately by the crates that need them; a missing credential is a
/// per-request server error, not a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `ANALYZE_ADDR` | Server bind address | `127.0.0.1:8790` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("ANALYZE_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8790".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        Ok(Self { addr })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid ANALYZE_ADDR format")]
    InvalidAddr,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment-based tests are combined into a single test to avoid
    // race conditions when tests run in parallel (env vars are process-global).
    #[test]
    fn test_from_env_scenarios() {
        // Scenario 1: default address
        std::env::remove_var("ANALYZE_ADDR");
        let config = Config::from_env().unwrap();
        assert_eq!(config.addr.to_string(), "127.0.0.1:8790");

        // Scenario 2: explicit address
        std::env::set_var("ANALYZE_ADDR", "0.0.0.0:9000");
        let config = Config::from_env().unwrap();
        assert_eq!(config.addr.to_string(), "0.0.0.0:9000");

        // Scenario 3: unparseable address
        std::env::set_var("ANALYZE_ADDR", "not an address");
        assert!(Config::from_env().is_err());

        // Cleanup
        std::env::remove_var("ANALYZE_ADDR");
    }
}
