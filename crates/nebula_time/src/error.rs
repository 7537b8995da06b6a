//! Error types for observation-time handling.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from parsing an observation date/time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// The date/time string did not match `YYYY-MM-DD HH:MM:SS` or
    /// named a calendar date that does not exist.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid date/time: {msg}"),
        }
    }
}

impl Error for TimeError {}
