//! Error types for geocoding.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from a geocoding lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeocodeError {
    /// Transport-level failure: timeout, DNS, non-2xx status.
    Http(String),
    /// The service answered with a body we could not interpret.
    Malformed(String),
}

impl Display for GeocodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http(msg) => write!(f, "geocoding request failed: {msg}"),
            Self::Malformed(msg) => write!(f, "unexpected geocoding response: {msg}"),
        }
    }
}

impl Error for GeocodeError {}
