//! Equatorial coordinates (right ascension / declination, J2000).
//!
//! Catalog entries carry sexagesimal strings (`05h35m16.8s`,
//! `-05d23m15s`); this module parses them into decimal degrees once, at
//! catalog-load time. The transform never sees unparsed input.

use crate::error::FrameError;

/// A J2000 equatorial sky position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Equatorial {
    /// Right ascension in degrees, range [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, range [-90, 90].
    pub dec_deg: f64,
}

impl Equatorial {
    /// Build from decimal degrees. RA is wrapped into [0, 360);
    /// declination outside [-90, 90] is rejected.
    pub fn from_degrees(ra_deg: f64, dec_deg: f64) -> Result<Self, FrameError> {
        if !ra_deg.is_finite() || !dec_deg.is_finite() {
            return Err(FrameError::CoordinateParse(format!(
                "non-finite coordinate ({ra_deg}, {dec_deg})"
            )));
        }
        if !(-90.0..=90.0).contains(&dec_deg) {
            return Err(FrameError::CoordinateParse(format!(
                "declination {dec_deg}° outside [-90, 90]"
            )));
        }
        Ok(Self {
            ra_deg: ra_deg.rem_euclid(360.0),
            dec_deg,
        })
    }

    /// Parse sexagesimal RA (`HHhMMmSS.Ss`) and Dec (`±DDdMMmSS.Ss`).
    pub fn parse(ra: &str, dec: &str) -> Result<Self, FrameError> {
        let ra_deg = parse_ra_deg(ra)?;
        let dec_deg = parse_dec_deg(dec)?;
        Self::from_degrees(ra_deg, dec_deg)
    }

    pub fn ra_rad(&self) -> f64 {
        self.ra_deg.to_radians()
    }

    pub fn dec_rad(&self) -> f64 {
        self.dec_deg.to_radians()
    }
}

/// Split `XXaYYbZZ.Zc`-shaped sexagesimal text on its three unit
/// markers, e.g. (`h`, `m`, `s`) or (`d`, `m`, `s`).
fn split_sexagesimal(s: &str, units: [char; 3]) -> Result<(u32, u32, f64), FrameError> {
    let bad = |why: &str| FrameError::CoordinateParse(format!("{s:?}: {why}"));

    let (whole, rest) = s.split_once(units[0]).ok_or_else(|| bad("missing unit marker"))?;
    let (minutes, rest) = rest.split_once(units[1]).ok_or_else(|| bad("missing minutes"))?;
    let seconds = rest
        .strip_suffix(units[2])
        .ok_or_else(|| bad("missing seconds suffix"))?;

    let whole: u32 = whole.parse().map_err(|e| bad(&format!("{e}")))?;
    let minutes: u32 = minutes.parse().map_err(|e| bad(&format!("{e}")))?;
    let seconds: f64 = seconds.parse().map_err(|e| bad(&format!("{e}")))?;

    if minutes >= 60 {
        return Err(bad("minutes out of range"));
    }
    // Seconds up to 60.0 inclusive: some published coordinates round a
    // full minute as 60.0s (the catalog contains one such entry).
    if !(0.0..=60.0).contains(&seconds) {
        return Err(bad("seconds out of range"));
    }
    Ok((whole, minutes, seconds))
}

/// `HHhMMmSS.Ss` → degrees in [0, 360).
fn parse_ra_deg(s: &str) -> Result<f64, FrameError> {
    let s = s.trim();
    let (h, m, sec) = split_sexagesimal(s, ['h', 'm', 's'])?;
    if h >= 24 {
        return Err(FrameError::CoordinateParse(format!(
            "{s:?}: RA hours out of range"
        )));
    }
    Ok((h as f64 + m as f64 / 60.0 + sec / 3600.0) * 15.0)
}

/// `±DDdMMmSS.Ss` → degrees in [-90, 90].
fn parse_dec_deg(s: &str) -> Result<f64, FrameError> {
    let s = s.trim();
    let (sign, body) = match s.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, s.strip_prefix('+').unwrap_or(s)),
    };
    let (d, m, sec) = split_sexagesimal(body, ['d', 'm', 's'])?;
    let deg = sign * (d as f64 + m as f64 / 60.0 + sec / 3600.0);
    if !(-90.0..=90.0).contains(&deg) {
        return Err(FrameError::CoordinateParse(format!(
            "{s:?}: declination out of range"
        )));
    }
    Ok(deg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orion_ra() {
        // 05h35m16.8s = 83.82°
        let c = Equatorial::parse("05h35m16.8s", "-05d23m15s").unwrap();
        assert!((c.ra_deg - 83.82).abs() < 1e-9);
        assert!((c.dec_deg - (-5.3875)).abs() < 1e-9);
    }

    #[test]
    fn explicit_plus_sign() {
        let c = Equatorial::parse("18h53m35.097s", "+33d01m44.88s").unwrap();
        assert!((c.dec_deg - 33.029_133_333_333_334).abs() < 1e-9);
    }

    #[test]
    fn sixty_second_field_accepted() {
        // Published as 44°20'60.0" — a rounded full minute.
        let c = Equatorial::parse("20h50m48.0s", "+44d20m60.0s").unwrap();
        assert!((c.dec_deg - 44.35).abs() < 1e-9);
    }

    #[test]
    fn rejects_malformed() {
        for (ra, dec) in [
            ("05:35:16.8", "-05d23m15s"),
            ("05h35m16.8", "-05d23m15s"),
            ("05h75m16.8s", "-05d23m15s"),
            ("25h00m00.0s", "+00d00m00s"),
            ("05h35m16.8s", "-95d00m00s"),
            ("05h35m16.8s", "five degrees"),
            ("", ""),
        ] {
            assert!(Equatorial::parse(ra, dec).is_err(), "accepted {ra:?}/{dec:?}");
        }
    }

    #[test]
    fn from_degrees_wraps_ra() {
        let c = Equatorial::from_degrees(370.0, 10.0).unwrap();
        assert!((c.ra_deg - 10.0).abs() < 1e-12);
        let c = Equatorial::from_degrees(-10.0, 10.0).unwrap();
        assert!((c.ra_deg - 350.0).abs() < 1e-12);
    }

    #[test]
    fn from_degrees_rejects_bad_dec() {
        assert!(Equatorial::from_degrees(0.0, 90.5).is_err());
        assert!(Equatorial::from_degrees(0.0, f64::NAN).is_err());
        assert!(Equatorial::from_degrees(0.0, 90.0).is_ok());
        assert!(Equatorial::from_degrees(0.0, -90.0).is_ok());
    }
}
