//! Golden scenarios for the equatorial → horizontal transform.
//!
//! Reference values were computed independently from the same published
//! formulas (IERS 2010 ERA, Capitaine 2003 GMST, Meeus ch. 13 spherical
//! trig) and are asserted at 1e-4°. A full astrometric computation
//! (astropy, precession + nutation + aberration, no refraction) agrees
//! with these to within ~0.2°; that gap is the documented accuracy tier
//! of treating J2000 coordinates as current-epoch and UTC as UT1.

use nebula_frames::{equatorial_to_horizontal, Equatorial, Observer, Visibility};
use nebula_time::ObservationInstant;

const TOL_DEG: f64 = 1e-4;

#[test]
fn orion_nebula_from_new_york() {
    // Orion Nebula (M42), observer in New York, 2024-01-15 20:00 UTC.
    let coord = Equatorial::parse("05h35m16.8s", "-05d23m15s").unwrap();
    let obs = Observer::new(40.7128, -74.0060).unwrap();
    let instant = ObservationInstant::parse("2024-01-15 20:00:00").unwrap();

    let pos = equatorial_to_horizontal(&coord, &obs, instant.jd_utc());

    // 3 PM local: Orion still below the eastern horizon.
    assert!(
        (pos.altitude_deg - (-13.395_923)).abs() < TOL_DEG,
        "alt = {}",
        pos.altitude_deg
    );
    assert!(
        (pos.azimuth_deg - 85.548_916).abs() < TOL_DEG,
        "az = {}",
        pos.azimuth_deg
    );
    assert_eq!(Visibility::classify(pos.altitude_deg), Visibility::NotVisible);
    assert_eq!(nebula_frames::compass_point(pos.azimuth_deg), "E");
}

#[test]
fn ring_nebula_from_tokyo() {
    // Ring Nebula (M57) nearly overhead from Tokyo on a July night.
    let coord = Equatorial::parse("18h53m35.097s", "+33d01m44.88s").unwrap();
    let obs = Observer::new(35.6762, 139.6503).unwrap();
    let instant = ObservationInstant::parse("2024-07-01 14:00:00").unwrap();

    let pos = equatorial_to_horizontal(&coord, &obs, instant.jd_utc());

    assert!(
        (pos.altitude_deg - 78.450_355).abs() < TOL_DEG,
        "alt = {}",
        pos.altitude_deg
    );
    assert!(
        (pos.azimuth_deg - 99.316_423).abs() < TOL_DEG,
        "az = {}",
        pos.azimuth_deg
    );
    assert_eq!(Visibility::classify(pos.altitude_deg), Visibility::Excellent);
}

#[test]
fn same_query_reproduces_exactly() {
    let coord = Equatorial::parse("05h35m16.8s", "-05d23m15s").unwrap();
    let obs = Observer::new(40.7128, -74.0060).unwrap();
    let jd = ObservationInstant::parse("2024-01-15 20:00:00").unwrap().jd_utc();

    let first = equatorial_to_horizontal(&coord, &obs, jd);
    for _ in 0..10 {
        let again = equatorial_to_horizontal(&coord, &obs, jd);
        assert_eq!(first.altitude_deg.to_bits(), again.altitude_deg.to_bits());
        assert_eq!(first.azimuth_deg.to_bits(), again.azimuth_deg.to_bits());
    }
}
