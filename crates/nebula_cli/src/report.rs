//! Report text assembly and file output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nebula_catalog::Nebula;
use nebula_frames::{compass_point, HorizontalPosition, Observer, Visibility};
use nebula_time::ObservationInstant;

/// Everything a rendered report needs.
pub struct Report<'a> {
    pub nebula: &'a Nebula,
    pub instant: ObservationInstant,
    pub observer: Observer,
    pub position: HorizontalPosition,
}

impl Report<'_> {
    pub fn visibility(&self) -> Visibility {
        Visibility::classify(self.position.altitude_deg)
    }

    pub fn compass(&self) -> &'static str {
        compass_point(self.position.azimuth_deg)
    }

    /// Fixed field order: nebula, time, location, altitude, azimuth
    /// (with compass), visibility, constellation.
    pub fn render(&self) -> String {
        format!(
            "Nebula: {}\n\
             Time: {}\n\
             Location: {}\n\
             Altitude: {:.1} degrees\n\
             Azimuth: {:.1} degrees ({})\n\
             Visibility: {}\n\
             Constellation: {}\n",
            self.nebula.name,
            self.instant,
            format_location(&self.observer),
            self.position.altitude_deg,
            self.position.azimuth_deg,
            self.compass(),
            self.visibility().description(),
            self.nebula.constellation,
        )
    }

    /// Write the report next to the working directory, atomically:
    /// the text lands in a temp file first and is renamed into place,
    /// so an interrupt never leaves a torn report behind.
    pub fn save(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(file_name(self.nebula.name));
        let tmp = path.with_extension("txt.tmp");
        fs::write(&tmp, self.render())?;
        fs::rename(&tmp, &path)?;
        Ok(path)
    }
}

/// `nebula_position_<first word of the display name>.txt`
pub fn file_name(nebula_name: &str) -> String {
    let first = nebula_name.split_whitespace().next().unwrap_or("object");
    format!("nebula_position_{first}.txt")
}

/// `40.7128° N, 74.0060° W` — sign folded into the hemisphere letter.
pub fn format_location(observer: &Observer) -> String {
    let lat = observer.latitude_deg();
    let lon = observer.longitude_deg();
    let ns = if lat < 0.0 { 'S' } else { 'N' };
    let ew = if lon < 0.0 { 'W' } else { 'E' };
    format!("{:.4}° {ns}, {:.4}° {ew}", lat.abs(), lon.abs())
}
