// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use axum::{Json, extract::State};

use crate::handlers::common::ReleaseRecord;
use crate::state::AppState;

/// Handler for GET /version
///
/// Returns the current release record. Always succeeds.
#[utoipa::path(
    get,
    path = "/version",
    tag = "version",
    summary = "Current release",
    description = "Returns the metadata of the release currently served by this process.",
    responses(
        (status = 200, description = "Current release metadata", body = Object)
    )
)]
pub async fn get_version(State(state): State<AppState>) -> Json<ReleaseRecord> {
    Json(state.release.as_ref().clone())
}
