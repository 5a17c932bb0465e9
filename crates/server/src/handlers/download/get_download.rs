// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
};
use serde_json::json;
use thiserror::Error;

use crate::metrics::registry::{DOWNLOAD_NOT_FOUND, DOWNLOAD_REDIRECTS};
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("Requested version not found")]
    VersionNotFound,
}

impl IntoResponse for DownloadError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            DownloadError::VersionNotFound => StatusCode::NOT_FOUND,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

/// Handler for GET /download/{versionId}
///
/// Redirects to the artifact URL when the path parameter equals the served
/// release's version id. The comparison is exact string equality, no
/// trimming or case folding.
#[utoipa::path(
    get,
    path = "/download/{versionId}",
    tag = "download",
    summary = "Download redirect",
    description = "Redirects to the downloadable artifact of the requested release.",
    params(
        ("versionId" = String, Path, description = "Identifier of the release to download")
    ),
    responses(
        (status = 307, description = "Temporary redirect to the artifact URL"),
        (status = 404, description = "Requested version not found")
    )
)]
pub async fn get_download(
    State(state): State<AppState>,
    Path(version_id): Path<String>,
) -> Result<Redirect, DownloadError> {
    if version_id != state.release.version_id {
        tracing::debug!(requested = %version_id, "download request for unknown version");
        DOWNLOAD_NOT_FOUND.inc();
        return Err(DownloadError::VersionNotFound);
    }

    DOWNLOAD_REDIRECTS.inc();
    Ok(Redirect::temporary(&state.release.download_url))
}
