//! Qualitative visibility assessment of a horizontal position.
//!
//! Fixed altitude tiers, a 16-point compass rose for azimuth, and a
//! deliberately coarse linear rise-time estimate for objects below the
//! horizon.

/// Ordered visibility tiers for an altitude.
///
/// Boundaries are strict `>` on the lower edge: exactly 30.0° is
/// `Good`, not `Excellent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Visibility {
    NotVisible,
    Poor,
    Fair,
    Good,
    Excellent,
}

impl Visibility {
    /// Classify an altitude in degrees.
    pub fn classify(altitude_deg: f64) -> Self {
        if altitude_deg > 30.0 {
            Self::Excellent
        } else if altitude_deg > 15.0 {
            Self::Good
        } else if altitude_deg > 5.0 {
            Self::Fair
        } else if altitude_deg > 0.0 {
            Self::Poor
        } else {
            Self::NotVisible
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::NotVisible => "Not visible",
        }
    }

    /// Advisory line shown next to the tier.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent - High in the sky, ideal for observation",
            Self::Good => "Good - Reasonably high for observation",
            Self::Fair => "Fair - Low in the sky, atmospheric effects noticeable",
            Self::Poor => "Poor - Very low, near horizon. Wait for better time.",
            Self::NotVisible => "Not visible - Below horizon",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Nearest 16-point compass label for an azimuth in degrees.
///
/// Nearest multiple of 22.5°, wrapping 360° back to N.
pub fn compass_point(azimuth_deg: f64) -> &'static str {
    let idx = (azimuth_deg.rem_euclid(360.0) / 22.5).round() as usize % 16;
    COMPASS_POINTS[idx]
}

/// Degrees of apparent rotation per hour used by the rise estimate.
const ROTATION_DEG_PER_HOUR: f64 = 15.0;

/// Floor for the rise estimate, hours.
const MIN_RISE_HOURS: f64 = 0.1;

/// Rough hours until an object below the horizon rises.
///
/// `None` above the horizon. The estimate is linear at 15°/hour with a
/// 0.1 h floor — it ignores declination and latitude, so it is wrong
/// near the poles and meaningless for circumpolar or never-rising
/// objects. Kept as-is: a better answer would change observable output.
pub fn hours_until_rise(altitude_deg: f64) -> Option<f64> {
    if altitude_deg > 0.0 {
        return None;
    }
    Some((-altitude_deg / ROTATION_DEG_PER_HOUR).max(MIN_RISE_HOURS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_interiors() {
        assert_eq!(Visibility::classify(45.0), Visibility::Excellent);
        assert_eq!(Visibility::classify(20.0), Visibility::Good);
        assert_eq!(Visibility::classify(10.0), Visibility::Fair);
        assert_eq!(Visibility::classify(2.0), Visibility::Poor);
        assert_eq!(Visibility::classify(-5.0), Visibility::NotVisible);
    }

    #[test]
    fn tier_boundaries_fall_to_lower_tier() {
        // Strict > on every threshold
        assert_eq!(Visibility::classify(30.0), Visibility::Good);
        assert_eq!(Visibility::classify(15.0), Visibility::Fair);
        assert_eq!(Visibility::classify(5.0), Visibility::Poor);
        assert_eq!(Visibility::classify(0.0), Visibility::NotVisible);
    }

    #[test]
    fn tiers_are_ordered() {
        assert!(Visibility::Excellent > Visibility::Good);
        assert!(Visibility::Good > Visibility::Fair);
        assert!(Visibility::Fair > Visibility::Poor);
        assert!(Visibility::Poor > Visibility::NotVisible);
    }

    #[test]
    fn compass_cardinals() {
        assert_eq!(compass_point(0.0), "N");
        assert_eq!(compass_point(90.0), "E");
        assert_eq!(compass_point(180.0), "S");
        assert_eq!(compass_point(270.0), "W");
    }

    #[test]
    fn compass_wraps_to_north() {
        assert_eq!(compass_point(359.9), "N");
        assert_eq!(compass_point(348.8), "N");
    }

    #[test]
    fn compass_intermediate_points() {
        assert_eq!(compass_point(22.5), "NNE");
        assert_eq!(compass_point(45.0), "NE");
        assert_eq!(compass_point(200.0), "SSW");
    }

    #[test]
    fn rise_estimate_linear() {
        assert_eq!(hours_until_rise(-15.0), Some(1.0));
        assert_eq!(hours_until_rise(-30.0), Some(2.0));
    }

    #[test]
    fn rise_estimate_floors_at_horizon() {
        assert_eq!(hours_until_rise(0.0), Some(0.1));
        assert_eq!(hours_until_rise(-0.5), Some(0.1));
    }

    #[test]
    fn no_estimate_above_horizon() {
        assert_eq!(hours_until_rise(0.1), None);
        assert_eq!(hours_until_rise(60.0), None);
    }
}
