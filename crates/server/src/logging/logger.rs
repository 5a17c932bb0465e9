use rolling_file::*;
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log level '{level}': {source}")]
    InvalidLogLevel {
        level: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to create log directory or file appender: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse Loki URL '{url}': {source}")]
    InvalidLokiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to configure Loki integration: {0}")]
    LokiError(#[from] tracing_loki::Error),
}

/// Configuration for logging initialization
pub struct LoggingConfig<'a> {
    pub level: &'a str,
    pub json_format: bool,
    pub strip_ansi: bool,
    pub write_to_file: bool,
    pub write_path: &'a str,
    pub write_max_file_size: u64,
    pub write_max_files: usize,
    pub loki_url: Option<&'a str>,
}

/// Initialize tracing/logging with the specified configuration
///
/// The "http" level resolves to `info,http=debug` so that request logging
/// (target: http) is visible without enabling debug everywhere.
///
/// # Loki Integration
/// When a Loki URL is provided, logs are sent asynchronously to the Loki
/// server, labeled `service=version-rest-api` with the process id attached.
///
/// # Log Rotation
/// When a log file reaches `write_max_file_size`, it is rotated:
/// - Current: logs.log
/// - After rotation: logs.log.1, logs.log.2, etc.
/// - Keeps up to `write_max_files` files in total
pub fn init_with_config(config: LoggingConfig) -> Result<(), LoggingError> {
    let level = config.level;

    // Resolve "http" log level to a targeted filter
    let filter_level = if level == "http" {
        "info,http=debug"
    } else {
        level
    };

    let filter =
        EnvFilter::try_new(filter_level).map_err(|source| LoggingError::InvalidLogLevel {
            level: level.to_string(),
            source,
        })?;

    let registry = tracing_subscriber::registry();

    // Create Loki layer if URL is provided
    let loki_layer = if let Some(url) = config.loki_url {
        let parsed_url = url::Url::parse(url).map_err(|source| LoggingError::InvalidLokiUrl {
            url: url.to_string(),
            source,
        })?;

        let (loki_layer, task) = tracing_loki::builder()
            .label("service", "version-rest-api")?
            .extra_field("pid", format!("{}", std::process::id()))?
            .build_url(parsed_url)?;

        // Spawn the Loki task to send logs in the background
        tokio::spawn(task);

        Some(loki_layer)
    } else {
        None
    };

    if config.write_to_file {
        // Ensure log directory exists
        std::fs::create_dir_all(config.write_path)?;

        // Create size-based rolling file appender.
        // write_max_files includes the current file, so subtract 1 for the
        // rotated files count.
        let log_file_path = PathBuf::from(config.write_path).join("logs.log");
        let rotated_files_count = config.write_max_files.saturating_sub(1);
        let file_appender = BasicRollingFileAppender::new(
            log_file_path,
            RollingConditionBasic::new().max_size(config.write_max_file_size),
            rotated_files_count,
        )?;

        let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

        // The guard must stay alive for the lifetime of the program
        std::mem::forget(_guard);

        if config.json_format {
            let console_layer = fmt::layer().json();
            let file_layer = fmt::layer().json().with_writer(non_blocking);

            if let Some(loki) = loki_layer {
                registry
                    .with(filter)
                    .with(console_layer)
                    .with(file_layer)
                    .with(loki)
                    .init();
            } else {
                registry
                    .with(filter)
                    .with(console_layer)
                    .with(file_layer)
                    .init();
            }
        } else {
            let console_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(!config.strip_ansi);

            let file_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false) // Never use ANSI in files
                .with_writer(non_blocking);

            if let Some(loki) = loki_layer {
                registry
                    .with(filter)
                    .with(console_layer)
                    .with(file_layer)
                    .with(loki)
                    .init();
            } else {
                registry
                    .with(filter)
                    .with(console_layer)
                    .with(file_layer)
                    .init();
            }
        }
    } else {
        // Console output only
        if config.json_format {
            let fmt_layer = fmt::layer().json();
            if let Some(loki) = loki_layer {
                registry.with(filter).with(fmt_layer).with(loki).init();
            } else {
                registry.with(filter).with(fmt_layer).init();
            }
        } else {
            let fmt_layer = fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(!config.strip_ansi);

            if let Some(loki) = loki_layer {
                registry.with(filter).with(fmt_layer).with(loki).init();
            } else {
                registry.with(filter).with(fmt_layer).init();
            }
        }
    }

    Ok(())
}
