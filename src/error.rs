use std::path::{Path, PathBuf};

/// Error type for sysfs-thermal operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Sensor unavailable at {}: {reason}", .path.display())]
    SensorUnavailable { path: PathBuf, reason: String },

    #[error("Malformed value in {}: {content:?}", .path.display())]
    MalformedValue { path: PathBuf, content: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn sensor_unavailable<P: AsRef<Path>, S: Into<String>>(path: P, reason: S) -> Self {
        Error::SensorUnavailable { path: path.as_ref().to_path_buf(), reason: reason.into() }
    }

    pub(crate) fn malformed_value<P: AsRef<Path>, S: Into<String>>(path: P, content: S) -> Self {
        Error::MalformedValue { path: path.as_ref().to_path_buf(), content: content.into() }
    }

    pub(crate) fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Error::InvalidConfig(msg.into())
    }

    /// Returns true when the poll failed because a sensor could not be read.
    ///
    /// Malformed values count as unavailable: in both cases the poll yields no readings.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Error::SensorUnavailable { .. } | Error::MalformedValue { .. })
    }
}

/// Result type for sysfs-thermal operations
pub type Result<T> = std::result::Result<T, Error>;
