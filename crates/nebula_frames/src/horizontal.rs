//! Equatorial → horizontal (alt/az) transform.
//!
//! The object's J2000 RA/Dec is taken as-is at the observation epoch:
//! precession, nutation, aberration, and atmospheric refraction are all
//! omitted. For stationary deep-sky targets this costs well under half
//! a degree in the current epoch range — fine for pointing a pair of
//! binoculars, not for astrometry.
//!
//! Sources: standard spherical astronomy (Meeus ch. 13); sidereal time
//! from `nebula_time`.

use std::f64::consts::TAU;

use nebula_time::{gmst_rad, local_sidereal_time_rad};

use crate::equatorial::Equatorial;
use crate::observer::Observer;

/// An observer-relative sky position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    /// Degrees above (+) or below (−) the horizon, range [-90, 90].
    pub altitude_deg: f64,
    /// Degrees clockwise from true north (N=0, E=90), range [0, 360).
    pub azimuth_deg: f64,
}

/// Compute the horizontal position of a fixed equatorial coordinate for
/// an observer at a UTC Julian Date.
///
/// Pure function of its three inputs: Earth orientation is derived from
/// the instant alone, so repeated calls are bit-identical.
///
/// Total over all well-formed inputs. The altitude asin argument is
/// clamped against rounding drift, and the azimuth atan2 is finite even
/// at Dec = ±90° or latitude ±90° (where azimuth degenerates to an
/// arbitrary but in-range value).
pub fn equatorial_to_horizontal(
    coord: &Equatorial,
    observer: &Observer,
    jd_utc: f64,
) -> HorizontalPosition {
    let lst = local_sidereal_time_rad(gmst_rad(jd_utc), observer.longitude_rad());
    let hour_angle = lst - coord.ra_rad();

    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_dec, cos_dec) = coord.dec_rad().sin_cos();
    let (sin_lat, cos_lat) = observer.latitude_rad().sin_cos();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_h).clamp(-1.0, 1.0);
    let altitude = sin_alt.asin();

    // Horizon-frame components: north and east projections of the unit
    // direction vector. atan2(east, north) is azimuth from north.
    let north = cos_lat * sin_dec - sin_lat * cos_dec * cos_h;
    let east = -cos_dec * sin_h;
    let azimuth = east.atan2(north).rem_euclid(TAU);

    HorizontalPosition {
        altitude_deg: altitude.to_degrees(),
        azimuth_deg: azimuth.to_degrees(),
    }
}
