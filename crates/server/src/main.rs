// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use version_rest_api::logging::{self, LoggingConfig};
use version_rest_api::{app, metrics, state::AppState};
use version_rest_api_config::{Args, ServiceConfig};

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = ServiceConfig::load(&args.env_file)?;

    logging::init_with_config(LoggingConfig {
        level: &config.log.level,
        json_format: config.log.json,
        strip_ansi: config.log.strip_ansi,
        write_to_file: config.log.write,
        write_path: &config.log.write_path,
        write_max_file_size: config.log.write_max_file_size,
        write_max_files: config.log.write_max_files,
        loki_url: config.metrics.loki_url.as_deref(),
    })?;

    if config.metrics.enabled {
        metrics::init(&config.metrics.prometheus_prefix);
    }

    let state = AppState::with_config(config);
    let bind_host = state.config.server.bind_host.clone();
    let port = state.config.server.port;
    let release = state.release.clone();

    let app = app::create_app(state);

    tracing::info!("Starting server on {}:{}", bind_host, port);
    tracing::info!(
        "Serving release {} (id {}) from {}",
        release.version,
        release.version_id,
        release.download_url
    );

    let listener = tokio::net::TcpListener::bind((bind_host.as_str(), port)).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
