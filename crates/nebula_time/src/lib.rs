//! Time handling for sky-position queries.
//!
//! This crate provides:
//! - Julian Date conversion from UTC wall-clock time
//! - Earth Rotation Angle, Greenwich Mean Sidereal Time, Local Sidereal Time
//! - An [`ObservationInstant`] type for the three ways an observation
//!   moment is specified (now, an explicit UTC date/time, or "tonight")

pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use instant::ObservationInstant;
pub use julian::{datetime_to_jd_utc, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
