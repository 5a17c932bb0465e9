// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error(
        "Invalid Prometheus prefix '{0}': must start with [a-zA-Z_:] and contain only [a-zA-Z0-9_:]"
    )]
    InvalidPrometheusPrefix(String),

    #[error("Invalid Loki URL '{url}': {source}")]
    InvalidLokiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Configuration for Prometheus metrics and Loki log shipping.
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    /// Enable or disable metrics collection
    ///
    /// Env: VRA_METRICS_ENABLED
    /// Default: false
    #[serde(default)]
    pub enabled: bool,

    /// Prometheus metric name prefix
    ///
    /// Env: VRA_METRICS_PROMETHEUS_PREFIX
    /// Default: "version_rest_api"
    #[serde(default = "default_prometheus_prefix")]
    pub prometheus_prefix: String,

    /// Include query parameters in route labels
    ///
    /// Env: VRA_METRICS_INCLUDE_QUERYPARAMS
    /// Default: false
    #[serde(default)]
    pub include_queryparams: bool,

    /// Loki server URL for log aggregation (e.g. http://localhost:3100)
    ///
    /// Env: VRA_METRICS_LOKI_URL
    /// Default: unset (Loki shipping disabled)
    #[serde(default)]
    pub loki_url: Option<String>,
}

fn default_prometheus_prefix() -> String {
    "version_rest_api".to_string()
}

impl MetricsConfig {
    pub(crate) fn validate(&self) -> Result<(), MetricsError> {
        // Prefix must follow Prometheus naming conventions
        // ([a-zA-Z_:][a-zA-Z0-9_:]*), otherwise metrics are silently rejected.
        if !self.prometheus_prefix.is_empty() {
            let mut chars = self.prometheus_prefix.chars();
            let first = chars.next().unwrap();
            if !first.is_ascii_alphabetic() && first != '_' && first != ':' {
                return Err(MetricsError::InvalidPrometheusPrefix(
                    self.prometheus_prefix.clone(),
                ));
            }
            for ch in chars {
                if !ch.is_ascii_alphanumeric() && ch != '_' && ch != ':' {
                    return Err(MetricsError::InvalidPrometheusPrefix(
                        self.prometheus_prefix.clone(),
                    ));
                }
            }
        }

        if let Some(url) = &self.loki_url {
            url::Url::parse(url).map_err(|source| MetricsError::InvalidLokiUrl {
                url: url.clone(),
                source,
            })?;
        }

        Ok(())
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prometheus_prefix: default_prometheus_prefix(),
            include_queryparams: false,
            loki_url: None,
        }
    }
}
