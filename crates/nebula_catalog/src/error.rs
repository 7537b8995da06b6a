//! Error types for catalog loading.

use std::error::Error;
use std::fmt::{Display, Formatter};

use nebula_frames::FrameError;

/// A catalog entry failed to parse at load time.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CatalogError {
    /// Named entry carried an unparseable coordinate.
    Entry(&'static str, FrameError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entry(name, e) => write!(f, "catalog entry {name:?}: {e}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Entry(_, e) => Some(e),
        }
    }
}
