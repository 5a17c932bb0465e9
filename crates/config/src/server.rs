// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Server port cannot be 0")]
    InvalidPort,

    #[error("Server bind host cannot be empty")]
    EmptyBindHost,
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Port to bind the HTTP server to
    ///
    /// Env: VRA_SERVER_PORT
    /// Default: 3000
    #[serde(default = "default_port")]
    pub port: u16,

    /// Host address to bind the HTTP server to
    ///
    /// Env: VRA_SERVER_BIND_HOST
    /// Default: 127.0.0.1
    #[serde(default = "default_bind_host")]
    pub bind_host: String,
}

fn default_port() -> u16 {
    3000
}

fn default_bind_host() -> String {
    "127.0.0.1".to_string()
}

impl ServerConfig {
    pub(crate) fn validate(&self) -> Result<(), ServerError> {
        if self.port == 0 {
            return Err(ServerError::InvalidPort);
        }

        if self.bind_host.is_empty() {
            return Err(ServerError::EmptyBindHost);
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            bind_host: default_bind_host(),
        }
    }
}
