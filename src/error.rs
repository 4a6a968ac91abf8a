//! Error types for iss-tracker

use std::fmt;
use std::io;

use crate::geodesy::Coordinate;

/// Result type for iss-tracker operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while tracking the station
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(io::Error),

    /// HTTP transport or status error
    Http(reqwest::Error),

    /// JSON decoding error
    Json(serde_json::Error),

    /// CSV reading or writing error
    Csv(csv::Error),

    /// A numeric field could not be parsed
    Parse(String),

    /// An upstream API answered with something unusable
    Upstream(String),

    /// Coordinate outside latitude [-90, 90] or longitude [-180, 180]
    InvalidCoordinate(Coordinate),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::Http(e) => write!(f, "HTTP error: {}", e),
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Csv(e) => write!(f, "CSV error: {}", e),
            Error::Parse(msg) => write!(f, "Parse error: {}", msg),
            Error::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            Error::InvalidCoordinate(coord) => write!(f, "Invalid coordinate: {}", coord),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Http(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Http(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json(error)
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Error::Csv(error)
    }
}
