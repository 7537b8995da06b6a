//! Error types for coordinate construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building coordinate or observer values.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FrameError {
    /// A sexagesimal RA/Dec string failed to parse or was out of range.
    CoordinateParse(String),
    /// Observer latitude/longitude outside its valid range.
    ObserverOutOfRange(String),
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CoordinateParse(msg) => write!(f, "coordinate parse error: {msg}"),
            Self::ObserverOutOfRange(msg) => write!(f, "observer location out of range: {msg}"),
        }
    }
}

impl Error for FrameError {}
