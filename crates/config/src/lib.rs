// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod error;
mod log;
mod metrics;
mod release;
mod server;

pub use args::Args;
pub use error::ConfigError;
pub use log::{LogConfig, LogError};
pub use metrics::{MetricsConfig, MetricsError};
pub use release::{ReleaseConfig, ReleaseError};
pub use server::{ServerConfig, ServerError};

use serde::Deserialize;

/// Top-level service configuration, assembled from the environment.
///
/// Each section is read from its own `VRA_`-prefixed namespace
/// (`VRA_SERVER_*`, `VRA_LOG_*`, `VRA_METRICS_*`, `VRA_RELEASE_*`), with
/// defaults applied for anything unset.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub metrics: MetricsConfig,

    #[serde(default)]
    pub release: ReleaseConfig,
}

impl ServiceConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            server: envy::prefixed("VRA_SERVER_").from_env::<ServerConfig>()?,
            log: envy::prefixed("VRA_LOG_").from_env::<LogConfig>()?,
            metrics: envy::prefixed("VRA_METRICS_").from_env::<MetricsConfig>()?,
            release: envy::prefixed("VRA_RELEASE_").from_env::<ReleaseConfig>()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load a `.env` file (missing files are ignored), then read the
    /// environment.
    pub fn load(env_file: &str) -> Result<Self, ConfigError> {
        dotenv::from_filename(env_file).ok();
        Self::from_env()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.log.validate()?;
        self.metrics.validate()?;
        self.release.validate()?;
        Ok(())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log: LogConfig::default(),
            metrics: MetricsConfig::default(),
            release: ReleaseConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_vra_env() {
        for (key, _) in std::env::vars() {
            if key.starts_with("VRA_") {
                unsafe { std::env::remove_var(&key) };
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_config() {
        clear_vra_env();
        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.log.level, "info");
        assert!(!config.metrics.enabled);
        assert_eq!(config.release.version_id, "1");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_vra_env();
        unsafe {
            std::env::set_var("VRA_SERVER_PORT", "8081");
            std::env::set_var("VRA_LOG_LEVEL", "debug");
            std::env::set_var("VRA_RELEASE_VERSION_ID", "42");
            std::env::set_var("VRA_RELEASE_VERSION", "4.2.0");
            std::env::set_var("VRA_RELEASE_RELEASE_DATE", "2026-01-30");
            std::env::set_var(
                "VRA_RELEASE_DOWNLOAD_URL",
                "https://example.com/downloads/4.2.0/app.zip",
            );
        }

        let config = ServiceConfig::from_env().unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.release.version_id, "42");
        assert_eq!(config.release.version, "4.2.0");
        assert_eq!(config.release.release_date, "2026-01-30");
        assert_eq!(
            config.release.download_url,
            "https://example.com/downloads/4.2.0/app.zip"
        );

        clear_vra_env();
    }

    #[test]
    #[serial]
    fn test_invalid_log_level_rejected() {
        clear_vra_env();
        unsafe { std::env::set_var("VRA_LOG_LEVEL", "loud") };

        let result = ServiceConfig::from_env();
        assert!(result.is_err());

        clear_vra_env();
    }

    #[test]
    #[serial]
    fn test_invalid_release_url_rejected() {
        clear_vra_env();
        unsafe { std::env::set_var("VRA_RELEASE_DOWNLOAD_URL", "nonsense") };

        let result = ServiceConfig::from_env();
        assert!(result.is_err());

        clear_vra_env();
    }
}
