//! Fixed catalog of bright nebulae with J2000 coordinates.
//!
//! The table is hardcoded; [`Catalog::load`] parses every sexagesimal
//! coordinate exactly once, so a malformed entry fails at startup and
//! the transform layer never sees unparsed input. Season tags are the
//! traditional hand-assigned viewing groups, not computed windows.

pub mod error;

use nebula_frames::Equatorial;

pub use error::CatalogError;

/// Lowest valid catalog key.
pub const MIN_ID: u32 = 1;
/// Highest valid catalog key.
pub const MAX_ID: u32 = 13;

/// Hand-assigned best-viewing season group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    WinterSpring,
    Summer,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::WinterSpring, Season::Summer, Season::Autumn];

    pub fn label(&self) -> &'static str {
        match self {
            Self::WinterSpring => "WINTER/SPRING NEBULAS",
            Self::Summer => "SUMMER NEBULAS",
            Self::Autumn => "AUTUMN NEBULAS",
        }
    }
}

/// Raw catalog row as authored: sexagesimal strings, parsed at load.
struct RawNebula {
    id: u32,
    name: &'static str,
    ra: &'static str,
    dec: &'static str,
    constellation: &'static str,
    season: Season,
    notes: &'static [&'static str],
}

/// A catalog entry with its coordinate parsed.
#[derive(Debug, Clone)]
pub struct Nebula {
    pub id: u32,
    pub name: &'static str,
    pub constellation: &'static str,
    pub coord: Equatorial,
    pub season: Season,
    /// Display facts shown in the object info panel.
    pub notes: &'static [&'static str],
}

const RAW: [RawNebula; 13] = [
    RawNebula {
        id: 1,
        name: "Orion Nebula (M42)",
        ra: "05h35m16.8s",
        dec: "-05d23m15s",
        constellation: "Orion",
        season: Season::WinterSpring,
        notes: &[
            "Visibility: Brightest nebula, visible to naked eye!",
            "Best viewing: Winter months",
        ],
    },
    RawNebula {
        id: 2,
        name: "Ring Nebula (M57)",
        ra: "18h53m35.097s",
        dec: "+33d01m44.88s",
        constellation: "Lyra",
        season: Season::Summer,
        notes: &[
            "Type: Planetary nebula (remains of a dead star)",
            "Best viewed with: Telescope",
        ],
    },
    RawNebula {
        id: 3,
        name: "Dumbbell Nebula (M27)",
        ra: "19h59m36.319s",
        dec: "+22d43m16.312s",
        constellation: "Vulpecula",
        season: Season::Autumn,
        notes: &[
            "Type: Planetary nebula (remains of a dead star)",
            "Best viewed with: Telescope",
        ],
    },
    RawNebula {
        id: 4,
        name: "Crab Nebula (M1)",
        ra: "05h34m31.97s",
        dec: "+22d00m52.1s",
        constellation: "Taurus",
        season: Season::WinterSpring,
        notes: &[
            "Type: Supernova remnant (observed in 1054 AD)",
            "Contains: Pulsar at its center",
        ],
    },
    RawNebula {
        id: 5,
        name: "North America Nebula (NGC 7000)",
        ra: "20h59m17.1s",
        dec: "+44d31m44s",
        constellation: "Cygnus",
        season: Season::Summer,
        notes: &[],
    },
    RawNebula {
        id: 6,
        name: "Pelican Nebula (IC 5070)",
        ra: "20h50m48.0s",
        dec: "+44d20m60.0s",
        constellation: "Cygnus",
        season: Season::Summer,
        notes: &[],
    },
    RawNebula {
        id: 7,
        name: "Veil Nebula (NGC 6960)",
        ra: "20h45m38.0s",
        dec: "+30d42m30s",
        constellation: "Cygnus",
        season: Season::Summer,
        notes: &[],
    },
    RawNebula {
        id: 8,
        name: "Helix Nebula (NGC 7293)",
        ra: "22h29m38.55s",
        dec: "-20d50m13.6s",
        constellation: "Aquarius",
        season: Season::Autumn,
        notes: &[
            "Type: Closest planetary nebula to Earth",
            "Nickname: 'Eye of God'",
        ],
    },
    RawNebula {
        id: 9,
        name: "Lagoon Nebula (M8)",
        ra: "18h03m37s",
        dec: "-24d23m12s",
        constellation: "Sagittarius",
        season: Season::Summer,
        notes: &[
            "Best viewing: Summer months",
            "Location: In the Milky Way's center direction",
        ],
    },
    RawNebula {
        id: 10,
        name: "Trifid Nebula (M20)",
        ra: "18h02m23s",
        dec: "-23d01m48s",
        constellation: "Sagittarius",
        season: Season::Summer,
        notes: &[
            "Best viewing: Summer months",
            "Location: In the Milky Way's center direction",
        ],
    },
    RawNebula {
        id: 11,
        name: "Owl Nebula (M97)",
        ra: "11h14m47.734s",
        dec: "+55d01m08.50s",
        constellation: "Ursa Major",
        season: Season::WinterSpring,
        notes: &[],
    },
    RawNebula {
        id: 12,
        name: "Heart Nebula (IC 1805)",
        ra: "02h32m36s",
        dec: "+61d29m00s",
        constellation: "Cassiopeia",
        season: Season::Autumn,
        notes: &[],
    },
    RawNebula {
        id: 13,
        name: "Soul Nebula (IC 1848)",
        ra: "02h51m36s",
        dec: "+60d26m00s",
        constellation: "Cassiopeia",
        season: Season::Autumn,
        notes: &[],
    },
];

/// The parsed, immutable catalog. Loaded once at process start.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Nebula>,
}

impl Catalog {
    /// Parse every raw entry. Fails if any coordinate string is
    /// malformed, which makes bad catalog data a startup error rather
    /// than a mid-session one.
    pub fn load() -> Result<Self, CatalogError> {
        let mut entries = Vec::with_capacity(RAW.len());
        for raw in &RAW {
            let coord = Equatorial::parse(raw.ra, raw.dec)
                .map_err(|e| CatalogError::Entry(raw.name, e))?;
            entries.push(Nebula {
                id: raw.id,
                name: raw.name,
                constellation: raw.constellation,
                coord,
                season: raw.season,
                notes: raw.notes,
            });
        }
        Ok(Self { entries })
    }

    /// Look up an entry by its menu key.
    pub fn get(&self, id: u32) -> Option<&Nebula> {
        self.entries.iter().find(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Nebula> {
        self.entries.iter()
    }

    /// Entries in one season group, in catalog order.
    pub fn by_season(&self, season: Season) -> impl Iterator<Item = &Nebula> {
        self.entries.iter().filter(move |n| n.season == season)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_all_thirteen() {
        let cat = Catalog::load().unwrap();
        assert_eq!(cat.len(), 13);
    }

    #[test]
    fn lookup_round_trips_every_id() {
        let cat = Catalog::load().unwrap();
        for id in MIN_ID..=MAX_ID {
            let neb = cat.get(id).unwrap_or_else(|| panic!("missing id {id}"));
            assert_eq!(neb.id, id);
        }
        assert!(cat.get(0).is_none());
        assert!(cat.get(14).is_none());
    }

    #[test]
    fn orion_coordinates_parse_to_known_degrees() {
        let cat = Catalog::load().unwrap();
        let orion = cat.get(1).unwrap();
        assert_eq!(orion.constellation, "Orion");
        assert!((orion.coord.ra_deg - 83.82).abs() < 1e-9);
        assert!((orion.coord.dec_deg - (-5.3875)).abs() < 1e-9);
    }

    #[test]
    fn season_groups_partition_the_catalog() {
        let cat = Catalog::load().unwrap();
        let mut seen: Vec<u32> = Season::ALL
            .iter()
            .flat_map(|&s| cat.by_season(s).map(|n| n.id))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (MIN_ID..=MAX_ID).collect::<Vec<_>>());
    }

    #[test]
    fn traditional_season_assignment() {
        let cat = Catalog::load().unwrap();
        let ids = |s| cat.by_season(s).map(|n| n.id).collect::<Vec<_>>();
        assert_eq!(ids(Season::WinterSpring), vec![1, 4, 11]);
        assert_eq!(ids(Season::Summer), vec![2, 5, 6, 7, 9, 10]);
        assert_eq!(ids(Season::Autumn), vec![3, 8, 12, 13]);
    }

    #[test]
    fn declinations_within_range() {
        let cat = Catalog::load().unwrap();
        for neb in cat.iter() {
            assert!((-90.0..=90.0).contains(&neb.coord.dec_deg), "{}", neb.name);
            assert!((0.0..360.0).contains(&neb.coord.ra_deg), "{}", neb.name);
        }
    }
}
