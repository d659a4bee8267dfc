use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::GeoPoint;
use crate::error::{GolfGeoError, Result};
use crate::geometry::DistanceUnit;
use crate::qa::QaThresholds;

fn default_verbose() -> bool {
    false
}

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub unit: DistanceUnit,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub qa: QaThresholds,
    #[serde(default)]
    pub location: LocationConfig,
}

fn default_timeout_secs() -> u64 {
    8
}

/// Position source settings
///
/// With `lat`/`lng` set, position requests resolve to that point; without
/// them the device is treated as having no positioning.
#[derive(Debug, Deserialize, Clone)]
pub struct LocationConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            lat: None,
            lng: None,
        }
    }
}

impl LocationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn fixed_point(&self) -> Option<GeoPoint> {
        Some(GeoPoint::new(self.lat?, self.lng?))
    }
}

impl FileConfig {
    /// Read and check one config file
    ///
    /// A file that exists but does not parse, or whose QA bounds are
    /// inverted, is an error rather than a silent fallback to defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| GolfGeoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| GolfGeoError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.qa.validate()?;
        Ok(config)
    }

    /// Load the first config file found on the standard search path
    pub fn discover() -> Result<Option<(PathBuf, Self)>> {
        first_existing(&search_paths())
    }
}

/// The first candidate that exists wins; later candidates are never consulted
fn first_existing(candidates: &[PathBuf]) -> Result<Option<(PathBuf, FileConfig)>> {
    match candidates.iter().find(|path| path.is_file()) {
        Some(path) => FileConfig::from_path(path).map(|config| Some((path.clone(), config))),
        None => Ok(None),
    }
}

/// Working directory first, then the user config directory, then home
fn search_paths() -> Vec<PathBuf> {
    let local = ["golfgeo.toml", ".golfgeo.toml"].map(PathBuf::from);
    let user = dirs::config_dir()
        .into_iter()
        .flat_map(|dir| [dir.join("golfgeo").join("config.toml"), dir.join("golfgeo.toml")]);
    let home = dirs::home_dir().map(|dir| dir.join(".golfgeo.toml"));

    local.into_iter().chain(user).chain(home).collect()
}
