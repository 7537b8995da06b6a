//! Celestial coordinate frames and the equatorial → horizontal transform.
//!
//! Provides the equatorial (RA/Dec) and horizontal (alt/az) coordinate
//! types, the observer location, the transform between them, and the
//! visibility classification applied to the result.

pub mod equatorial;
pub mod error;
pub mod horizontal;
pub mod observer;
pub mod visibility;

pub use equatorial::Equatorial;
pub use error::FrameError;
pub use horizontal::{equatorial_to_horizontal, HorizontalPosition};
pub use observer::Observer;
pub use visibility::{compass_point, hours_until_rise, Visibility};
