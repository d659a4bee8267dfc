use std::path::PathBuf;

/// Failures reading data and config files; the geometry core itself never errors
#[derive(Debug, thiserror::Error)]
pub enum GolfGeoError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("tee-to-green minimum ({min}m) is greater than the maximum ({max}m)")]
    InvalidThresholds { min: f64, max: f64 },
    #[error("unknown course: {0}")]
    UnknownCourse(String),
    #[error("course {course} has no hole {hole}")]
    UnknownHole { course: String, hole: u32 },
}

pub type Result<T> = std::result::Result<T, GolfGeoError>;
