use serde::Serialize;
use version_rest_api_config::ReleaseConfig;

/// The release record served by `/version` and matched by `/download`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    pub version_id: String,
    pub version: String,
    pub release_date: String,
    pub download_url: String,
}

impl From<&ReleaseConfig> for ReleaseRecord {
    fn from(config: &ReleaseConfig) -> Self {
        Self {
            version_id: config.version_id.clone(),
            version: config.version.clone(),
            release_date: config.release_date.clone(),
            download_url: config.download_url.clone(),
        }
    }
}
