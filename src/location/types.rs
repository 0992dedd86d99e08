//! Core types for the location subsystem.

use crate::coordinate::GeoPosition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Where a position fix came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationSource {
    Fixed,
    Ip,
}

impl fmt::Display for LocationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Mock"),
            Self::Ip => write!(f, "IP"),
        }
    }
}

/// A complete position fix. Never partially populated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub position: GeoPosition,
    pub source: LocationSource,
}

/// Why the current position could not be obtained.
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("location permission was not granted")]
    PermissionDenied,
    #[error("no position within {}s", .0.as_secs_f64())]
    Timeout(Duration),
    #[error("location service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid location response: {0}")]
    InvalidResponse(String),
    #[error("location service failed: {0}")]
    ServiceError(String),
}
