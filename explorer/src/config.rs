//! Explorer configuration loaded via OrthoConfig.
//!
//! Values come from CLI-style arguments, `EXPLORER_*` environment variables
//! and configuration files, in OrthoConfig's usual precedence order.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::{Coordinates, GeoValidationError, MapDefaults};
use crate::outbound::search_service::{HttpLandmarkSearchService, HttpSearchServiceBuildError};

const DEFAULT_SERVICE_URL: &str = "http://localhost:8080/api/v1/";
const DEFAULT_LAT: f64 = 22.7196;
const DEFAULT_LNG: f64 = 75.8577;
const DEFAULT_OVERVIEW_ZOOM: f64 = 13.0;
const DEFAULT_CLOSE_ZOOM: f64 = 15.0;

/// Errors raised while turning settings into runtime values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The service URL did not parse.
    #[error("invalid search service URL {url:?}: {source}")]
    InvalidServiceUrl {
        /// Rejected input.
        url: String,
        /// Parser failure.
        source: url::ParseError,
    },
    /// The default map centre was not a valid coordinate pair.
    #[error("invalid default map centre: {0}")]
    InvalidCenter(#[from] GeoValidationError),
    /// The search adapter could not be built.
    #[error(transparent)]
    SearchService(#[from] HttpSearchServiceBuildError),
}

/// Configuration values for one explorer host.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "EXPLORER")]
pub struct ExplorerSettings {
    /// Base URL of the landmark search service.
    pub service_url: Option<String>,
    /// Per-request timeout in seconds; unset keeps the transport default.
    pub request_timeout_secs: Option<u64>,
    /// Latitude of the initial and reset map centre.
    pub default_lat: Option<f64>,
    /// Longitude of the initial and reset map centre.
    pub default_lng: Option<f64>,
    /// Zoom level for the campus overview.
    pub overview_zoom: Option<f64>,
    /// Zoom level used when focusing one landmark.
    pub close_zoom: Option<f64>,
}

impl ExplorerSettings {
    /// Return the configured service URL, falling back to the default.
    pub fn service_url(&self) -> Result<Url, ConfigError> {
        let raw = self.service_url.as_deref().unwrap_or(DEFAULT_SERVICE_URL);
        Url::parse(raw).map_err(|source| ConfigError::InvalidServiceUrl {
            url: raw.to_owned(),
            source,
        })
    }

    /// Return the configured request timeout, if any.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Build the map framing used by the session.
    pub fn map_defaults(&self) -> Result<MapDefaults, ConfigError> {
        let center = Coordinates::new(
            self.default_lat.unwrap_or(DEFAULT_LAT),
            self.default_lng.unwrap_or(DEFAULT_LNG),
        )?;
        Ok(MapDefaults {
            center,
            overview_zoom: self.overview_zoom.unwrap_or(DEFAULT_OVERVIEW_ZOOM),
            close_zoom: self.close_zoom.unwrap_or(DEFAULT_CLOSE_ZOOM),
        })
    }

    /// Build the HTTP search adapter described by these settings.
    pub fn search_service(&self) -> Result<HttpLandmarkSearchService, ConfigError> {
        Ok(HttpLandmarkSearchService::new(
            self.service_url()?,
            self.request_timeout(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for explorer configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "EXPLORER_SERVICE_URL",
        "EXPLORER_REQUEST_TIMEOUT_SECS",
        "EXPLORER_DEFAULT_LAT",
        "EXPLORER_DEFAULT_LNG",
        "EXPLORER_OVERVIEW_ZOOM",
        "EXPLORER_CLOSE_ZOOM",
    ];

    fn load_from_empty_args() -> ExplorerSettings {
        ExplorerSettings::load_from_iter([OsString::from("explorer")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.service_url().expect("default url parses").as_str(),
            DEFAULT_SERVICE_URL
        );
        assert_eq!(settings.request_timeout(), None);
        let defaults = settings.map_defaults().expect("default centre is valid");
        assert_eq!(defaults.center.lat(), DEFAULT_LAT);
        assert_eq!(defaults.center.lng(), DEFAULT_LNG);
        assert_eq!(defaults.overview_zoom, 13.0);
        assert_eq!(defaults.close_zoom, 15.0);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            (
                "EXPLORER_SERVICE_URL",
                Some("https://landmarks.campus.example/".to_owned()),
            ),
            ("EXPLORER_REQUEST_TIMEOUT_SECS", Some("5".to_owned())),
            ("EXPLORER_DEFAULT_LAT", Some("51.7548".to_owned())),
            ("EXPLORER_DEFAULT_LNG", Some("-1.2544".to_owned())),
            ("EXPLORER_OVERVIEW_ZOOM", Some("14".to_owned())),
            ("EXPLORER_CLOSE_ZOOM", Some("19".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.service_url().expect("url parses").as_str(),
            "https://landmarks.campus.example/"
        );
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(5)));
        let defaults = settings.map_defaults().expect("centre is valid");
        assert_eq!(defaults.center.lat(), 51.7548);
        assert_eq!(defaults.center.lng(), -1.2544);
        assert_eq!(defaults.overview_zoom, 14.0);
        assert_eq!(defaults.close_zoom, 19.0);
    }

    #[rstest]
    fn malformed_service_url_is_reported() {
        let settings = ExplorerSettings {
            service_url: Some("not a url".to_owned()),
            request_timeout_secs: None,
            default_lat: None,
            default_lng: None,
            overview_zoom: None,
            close_zoom: None,
        };

        let error = settings.search_service().expect_err("url must fail");
        assert!(matches!(error, ConfigError::InvalidServiceUrl { .. }));
    }
}
