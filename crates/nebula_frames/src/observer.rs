//! Observer geographic location.

use crate::error::FrameError;

/// Where the observer stands: geodetic latitude/longitude in degrees,
/// elevation in meters.
///
/// Longitude is east-positive in [-180, 180] (New York is -74.006).
/// Elevation is carried for completeness but does not enter the alt/az
/// transform: topocentric parallax for deep-sky objects is far below
/// this tool's accuracy tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
}

impl Observer {
    /// Sea-level observer; rejects out-of-range or non-finite input.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, FrameError> {
        Self::with_elevation(latitude_deg, longitude_deg, 0.0)
    }

    pub fn with_elevation(
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
    ) -> Result<Self, FrameError> {
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(FrameError::ObserverOutOfRange(format!(
                "latitude {latitude_deg}° outside [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(FrameError::ObserverOutOfRange(format!(
                "longitude {longitude_deg}° outside [-180, 180]"
            )));
        }
        if !elevation_m.is_finite() {
            return Err(FrameError::ObserverOutOfRange(format!(
                "elevation {elevation_m} m is not finite"
            )));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
            elevation_m,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_range() {
        assert!(Observer::new(40.7128, -74.0060).is_ok());
        assert!(Observer::new(90.0, 180.0).is_ok());
        assert!(Observer::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(Observer::new(90.1, 0.0).is_err());
        assert!(Observer::new(0.0, 180.1).is_err());
        assert!(Observer::new(f64::NAN, 0.0).is_err());
        assert!(Observer::with_elevation(0.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn radians_accessors() {
        let o = Observer::new(45.0, -90.0).unwrap();
        assert!((o.latitude_rad() - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
        assert!((o.longitude_rad() + std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }
}
