// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("Invalid log level '{0}'. Must be one of: trace, debug, info, warn, error, http")]
    InvalidLevel(String),

    #[error("Log write path cannot be empty when file logging is enabled")]
    EmptyWritePath,

    #[error("Log rotation must keep at least one file")]
    InvalidMaxFiles,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    ///
    /// Env: VRA_LOG_LEVEL
    /// Valid values: trace, debug, info, warn, error, http
    /// Default: info
    #[serde(default = "default_level")]
    pub level: String,

    /// Output logs in JSON format
    ///
    /// Env: VRA_LOG_JSON
    /// Default: false
    #[serde(default)]
    pub json: bool,

    /// Strip ANSI color codes from logs
    ///
    /// Env: VRA_LOG_STRIP_ANSI
    /// Default: false
    #[serde(default)]
    pub strip_ansi: bool,

    /// Also write logs to a file with size-based rotation
    ///
    /// Env: VRA_LOG_WRITE
    /// Default: false
    #[serde(default)]
    pub write: bool,

    /// Directory to write log files to
    ///
    /// Env: VRA_LOG_WRITE_PATH
    /// Default: ./logs
    #[serde(default = "default_write_path")]
    pub write_path: String,

    /// Maximum log file size in bytes before rotation
    ///
    /// Env: VRA_LOG_WRITE_MAX_FILE_SIZE
    /// Default: 5242880 (5 MiB)
    #[serde(default = "default_write_max_file_size")]
    pub write_max_file_size: u64,

    /// Maximum number of log files to keep, including the current one
    ///
    /// Env: VRA_LOG_WRITE_MAX_FILES
    /// Default: 5
    #[serde(default = "default_write_max_files")]
    pub write_max_files: usize,
}

fn default_level() -> String {
    "info".to_string()
}

fn default_write_path() -> String {
    "./logs".to_string()
}

fn default_write_max_file_size() -> u64 {
    5_242_880
}

fn default_write_max_files() -> usize {
    5
}

impl LogConfig {
    pub(crate) fn validate(&self) -> Result<(), LogError> {
        // "http" enables request logging at debug under the `http` target
        let valid_levels = ["trace", "debug", "info", "warn", "error", "http"];

        if !valid_levels.contains(&self.level.as_str()) {
            return Err(LogError::InvalidLevel(self.level.clone()));
        }

        if self.write {
            if self.write_path.is_empty() {
                return Err(LogError::EmptyWritePath);
            }
            if self.write_max_files == 0 {
                return Err(LogError::InvalidMaxFiles);
            }
        }

        Ok(())
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            strip_ansi: false,
            write: false,
            write_path: default_write_path(),
            write_max_file_size: default_write_max_file_size(),
            write_max_files: default_write_max_files(),
        }
    }
}
