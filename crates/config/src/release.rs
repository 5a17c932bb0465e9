// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("Release version id cannot be empty")]
    EmptyVersionId,

    #[error("Release version cannot be empty")]
    EmptyVersion,

    #[error("Invalid release date '{0}': expected YYYY-MM-DD")]
    InvalidReleaseDate(String),

    #[error("Invalid download URL '{url}': {source}")]
    InvalidDownloadUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Download URL '{0}' must use the http or https scheme")]
    UnsupportedDownloadScheme(String),
}

/// The release record served by the API.
///
/// The service holds exactly one record, fixed at process start. Download
/// requests are matched against `version_id` by exact string equality.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseConfig {
    /// Opaque identifier of the release
    ///
    /// Env: VRA_RELEASE_VERSION_ID
    /// Default: "1"
    #[serde(default = "default_version_id")]
    pub version_id: String,

    /// Human-readable semantic version
    ///
    /// Env: VRA_RELEASE_VERSION
    /// Default: "1.2.3"
    #[serde(default = "default_version")]
    pub version: String,

    /// Release date (YYYY-MM-DD)
    ///
    /// Env: VRA_RELEASE_RELEASE_DATE
    /// Default: "2023-07-15"
    #[serde(default = "default_release_date")]
    pub release_date: String,

    /// Absolute URL of the downloadable artifact
    ///
    /// Env: VRA_RELEASE_DOWNLOAD_URL
    /// Default: "https://example.com/downloads/1.2.3/app.zip"
    #[serde(default = "default_download_url")]
    pub download_url: String,
}

fn default_version_id() -> String {
    "1".to_string()
}

fn default_version() -> String {
    "1.2.3".to_string()
}

fn default_release_date() -> String {
    "2023-07-15".to_string()
}

fn default_download_url() -> String {
    "https://example.com/downloads/1.2.3/app.zip".to_string()
}

/// Checks that a date string is shaped YYYY-MM-DD with plausible components.
fn is_valid_date(date: &str) -> bool {
    let parts: Vec<&str> = date.split('-').collect();
    if parts.len() != 3 {
        return false;
    }

    let (year, month, day) = (parts[0], parts[1], parts[2]);
    if year.len() != 4 || month.len() != 2 || day.len() != 2 {
        return false;
    }

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(year) || !all_digits(month) || !all_digits(day) {
        return false;
    }

    let month: u8 = month.parse().unwrap_or(0);
    let day: u8 = day.parse().unwrap_or(0);
    (1..=12).contains(&month) && (1..=31).contains(&day)
}

impl ReleaseConfig {
    pub(crate) fn validate(&self) -> Result<(), ReleaseError> {
        if self.version_id.is_empty() {
            return Err(ReleaseError::EmptyVersionId);
        }

        if self.version.is_empty() {
            return Err(ReleaseError::EmptyVersion);
        }

        if !is_valid_date(&self.release_date) {
            return Err(ReleaseError::InvalidReleaseDate(self.release_date.clone()));
        }

        let parsed = url::Url::parse(&self.download_url).map_err(|source| {
            ReleaseError::InvalidDownloadUrl {
                url: self.download_url.clone(),
                source,
            }
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ReleaseError::UnsupportedDownloadScheme(
                self.download_url.clone(),
            ));
        }

        Ok(())
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            version_id: default_version_id(),
            version: default_version(),
            release_date: default_release_date(),
            download_url: default_download_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_release_config() {
        let config = ReleaseConfig::default();
        assert_eq!(config.version_id, "1");
        assert_eq!(config.version, "1.2.3");
        assert_eq!(config.release_date, "2023-07-15");
        assert_eq!(
            config.download_url,
            "https://example.com/downloads/1.2.3/app.zip"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_version_id() {
        let config = ReleaseConfig {
            version_id: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_empty_version() {
        let config = ReleaseConfig {
            version: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_dates() {
        for date in ["2023/07/15", "15-07-2023", "2023-13-01", "2023-00-10", "today"] {
            let config = ReleaseConfig {
                release_date: date.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "Date {} should be rejected", date);
        }
    }

    #[test]
    fn test_validate_bad_download_url() {
        let config = ReleaseConfig {
            download_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let config = ReleaseConfig {
            download_url: "ftp://example.com/app.zip".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_http_scheme() {
        let config = ReleaseConfig {
            download_url: "http://example.com/app.zip".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
