//! Earth Rotation Angle and Greenwich Mean Sidereal Time.
//!
//! Maps calendar time to Earth's rotational phase, which is what links
//! a fixed RA/Dec to an observer's local sky.
//!
//! All functions take UT1 Julian Dates. This crate passes UTC JDs
//! directly: |UT1 − UTC| is kept under 0.9 s by leap seconds, which is
//! below 0.004° of rotation — negligible at the output precision of an
//! alt/az finder, so no Earth-orientation table is carried.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::J2000_JD;

/// Arcseconds to radians.
const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Days per Julian century.
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Earth Rotation Angle at a UT1 Julian Date, radians in [0, 2π).
///
/// θ(Du) = 2π (0.7790572732640 + 1.00273781191135448 Du),
/// Du = JD_UT1 − 2451545.0.
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    (TAU * (0.779_057_273_264_0 + 1.002_737_811_911_354_6 * du)).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time at a UT1 Julian Date, radians in [0, 2π).
///
/// GMST = ERA + p(T), with T in Julian centuries from J2000.0 and p the
/// Capitaine et al. 2003 correction polynomial (arcseconds):
///
///   0.014506 + 4612.156534 T + 1.3915817 T² − 0.00000044 T³
///   − 0.000029956 T⁴ − 0.0000000368 T⁵
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_CENTURY;
    let poly_arcsec = 0.014506
        + t * (4612.156534
            + t * (1.3915817
                + t * (-0.00000044 + t * (-0.000029956 + t * -0.0000000368))));
    (earth_rotation_angle_rad(jd_ut1) + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local Sidereal Time from GMST and observer east longitude, radians
/// in [0, 2π).
pub fn local_sidereal_time_rad(gmst: f64, longitude_east_rad: f64) -> f64 {
    (gmst + longitude_east_rad).rem_euclid(TAU)
}
