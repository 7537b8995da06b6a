//! Interactive menu session.
//!
//! One explicit loop per program run: location → time → object →
//! position → optional save → "check another?". The original tool
//! recursed into itself for the repeat path; a loop keeps the stack
//! flat over long sessions. Passes share only the immutable catalog.

use std::io::{self, BufRead, Write};

use nebula_catalog::{Catalog, Nebula, Season, MAX_ID, MIN_ID};
use nebula_frames::{equatorial_to_horizontal, hours_until_rise, Observer, Visibility};
use nebula_geocode::Geocoder;
use nebula_time::ObservationInstant;

use crate::report::{format_location, Report};

/// Fallback observer when geocoding fails or input is unusable:
/// New York, USA.
pub const DEFAULT_LATITUDE: f64 = 40.7128;
pub const DEFAULT_LONGITUDE: f64 = -74.0060;
pub const DEFAULT_LOCATION_LABEL: &str = "New York, USA";

pub struct Session<'a> {
    catalog: &'a Catalog,
}

impl<'a> Session<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Run until the user declines another pass or stdin closes.
    pub fn run(&self) {
        println!("{}", "=".repeat(70));
        println!("NEBULA LOCATION FINDER");
        println!("{}", "=".repeat(70));
        println!("Find where nebulas are in your sky right now!");
        println!();

        while self.run_once().is_some() {
            let Some(again) = prompt_yes_no("\nCheck another nebula? (y/n): ") else {
                break;
            };
            if !again {
                break;
            }
            println!("\n\n");
        }
        println!("\nHappy stargazing!");
    }

    /// One full query. `None` means stdin closed mid-pass.
    fn run_once(&self) -> Option<()> {
        let observer = self.prompt_location()?;
        println!("\nYour location: {}", format_location(&observer));

        let instant = prompt_time()?;
        let nebula = self.prompt_nebula()?;
        print_nebula_info(nebula);

        let position = equatorial_to_horizontal(&nebula.coord, &observer, instant.jd_utc());
        let report = Report {
            nebula,
            instant,
            observer,
            position,
        };
        print_position(&report);

        let save = prompt_yes_no("\nSave these results to a file? (y/n): ")?;
        if save {
            match report.save(std::path::Path::new(".")) {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "report saved");
                    println!("Results saved to {}", path.display());
                }
                Err(e) => eprintln!("Could not save report: {e}"),
            }
        }
        Some(())
    }

    fn prompt_location(&self) -> Option<Observer> {
        println!("\nHow would you like to enter your location?");
        println!("1. City and Country (e.g., 'Tokyo, Japan')");
        println!("2. Coordinates (latitude and longitude)");

        let choice = loop {
            let answer = read_line("Enter 1 or 2: ")?;
            match answer.as_str() {
                "1" | "2" => break answer,
                _ => println!("Please enter 1 or 2."),
            }
        };

        if choice == "2" {
            self.prompt_coordinates()
        } else {
            self.prompt_place_name()
        }
    }

    fn prompt_coordinates(&self) -> Option<Observer> {
        println!("\nEnter your coordinates:");
        let lat = read_line("Latitude (degrees, + for North, - for South): ")?;
        let lon = read_line("Longitude (degrees, + for East, - for West): ")?;
        match (lat.parse::<f64>(), lon.parse::<f64>()) {
            (Ok(lat), Ok(lon)) => match Observer::new(lat, lon) {
                Ok(obs) => Some(obs),
                Err(e) => {
                    println!("{e}. Using default location: {DEFAULT_LOCATION_LABEL}");
                    Some(default_observer())
                }
            },
            _ => {
                println!("Invalid input. Using default location: {DEFAULT_LOCATION_LABEL}");
                Some(default_observer())
            }
        }
    }

    fn prompt_place_name(&self) -> Option<Observer> {
        println!("\nEnter your location (you can be specific):");
        println!("Examples: 'New York, USA', 'Tokyo, Japan', 'London, UK'");

        let geocoder = match Geocoder::new() {
            Ok(g) => g,
            Err(e) => {
                tracing::warn!(%e, "could not build geocoding client");
                println!(
                    "Geocoding service error. Using default location: {DEFAULT_LOCATION_LABEL}"
                );
                return Some(default_observer());
            }
        };

        loop {
            let query = read_line("Location: ")?;
            if query.is_empty() {
                println!("Using default location: {DEFAULT_LOCATION_LABEL}");
                return Some(default_observer());
            }

            println!("Geocoding your location...");
            match geocoder.lookup(&query) {
                Ok(Some(place)) => {
                    println!("Found: {}", place.display_name);
                    match Observer::new(place.latitude, place.longitude) {
                        Ok(obs) => return Some(obs),
                        Err(e) => {
                            tracing::warn!(%e, "geocoder returned unusable coordinates");
                            println!(
                                "Geocoding service error. Using default location: {DEFAULT_LOCATION_LABEL}"
                            );
                            return Some(default_observer());
                        }
                    }
                }
                Ok(None) => {
                    println!("Location not found. Please try again.");
                    println!("Try being more specific (add country name)");
                }
                Err(e) => {
                    tracing::warn!(%e, "geocoding failed, falling back to default");
                    println!(
                        "Geocoding service error. Using default location: {DEFAULT_LOCATION_LABEL}"
                    );
                    return Some(default_observer());
                }
            }
        }
    }

    fn prompt_nebula(&self) -> Option<&'a Nebula> {
        println!("\n{}", "=".repeat(70));
        println!("AVAILABLE NEBULAS");
        println!("{}", "=".repeat(70));
        for season in Season::ALL {
            println!("\n{}:", season.label());
            for neb in self.catalog.by_season(season) {
                println!("  {:2}. {:30} ({})", neb.id, neb.name, neb.constellation);
            }
        }

        loop {
            let answer = read_line(&format!(
                "\nEnter the number of the nebula ({MIN_ID}-{MAX_ID}): "
            ))?;
            match answer.parse::<u32>() {
                Ok(id) => match self.catalog.get(id) {
                    Some(neb) => return Some(neb),
                    None => println!("Please enter a number between {MIN_ID} and {MAX_ID}."),
                },
                Err(_) => println!("Invalid input. Please enter a number."),
            }
        }
    }
}

fn default_observer() -> Observer {
    Observer::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
        .expect("default location is always in range")
}

fn prompt_time() -> Option<ObservationInstant> {
    println!("\n{}", "=".repeat(40));
    println!("TIME SELECTION");
    println!("{}", "=".repeat(40));
    println!("1. Use current system time");
    println!("2. Enter a specific date and time");
    println!("3. Use tonight's observing time");

    let choice = loop {
        let answer = read_line("Your choice (1, 2, or 3): ")?;
        match answer.as_str() {
            "1" | "2" | "3" => break answer,
            _ => println!("Please enter 1, 2, or 3."),
        }
    };

    match choice.as_str() {
        "2" => loop {
            let text = read_line("Enter date and time (YYYY-MM-DD HH:MM:SS): ")?;
            match ObservationInstant::parse(&text) {
                Ok(t) => {
                    println!("Using specified time: {t}");
                    break Some(t);
                }
                Err(_) => println!("Invalid format. Please use YYYY-MM-DD HH:MM:SS format."),
            }
        },
        "3" => {
            // +12 h from now: a coarse stand-in for "this evening",
            // not a sunset computation.
            let t = ObservationInstant::tonight();
            println!("Using tonight's observing time...");
            println!("Approximate evening time: {t}");
            Some(t)
        }
        _ => {
            let t = ObservationInstant::now();
            println!("Using current time: {t}");
            Some(t)
        }
    }
}

fn print_nebula_info(nebula: &Nebula) {
    println!("\n{}", "=".repeat(60));
    println!("NEBULA INFORMATION: {}", nebula.name);
    println!("{}", "=".repeat(60));
    println!("Constellation: {}", nebula.constellation);
    println!(
        "Coordinates (J2000): RA {:.4}°, Dec {:.4}°",
        nebula.coord.ra_deg, nebula.coord.dec_deg
    );
    if !nebula.notes.is_empty() {
        println!();
        for note in nebula.notes {
            println!("{note}");
        }
    }
    println!("{}", "=".repeat(60));
}

/// Position panel plus observation tips and, below the horizon, the
/// coarse rise estimate.
pub fn print_position(report: &Report<'_>) {
    let pos = &report.position;
    println!("\n{}", "=".repeat(70));
    println!("CURRENT POSITION IN YOUR SKY");
    println!("{}", "=".repeat(70));
    println!("Nebula: {}", report.nebula.name);
    println!("Time: {}", report.instant);
    println!("Your Location: {}", format_location(&report.observer));
    println!("\n{}", "-".repeat(40));
    println!("Altitude: {:.1} degrees", pos.altitude_deg);
    println!("Azimuth:  {:.1} degrees", pos.azimuth_deg);
    println!("{}", "-".repeat(40));
    println!(
        "\nDirection: {} ({:.0} degrees)",
        report.compass(),
        pos.azimuth_deg
    );
    println!("Visibility: {}", report.visibility().description());

    if pos.altitude_deg > 0.0 {
        match report.visibility() {
            Visibility::Excellent => println!("   * Perfect time for observation!"),
            Visibility::Good => println!("   * Good time to observe"),
            _ => println!("   * Consider observing when it's higher in the sky"),
        }
        if pos.altitude_deg < 20.0 {
            println!("\nTip: This nebula would be better observed when");
            println!("     it's higher in the sky (above 30 degrees altitude).");
        }
    } else {
        println!("\nThis nebula is currently below the horizon.");
        if let Some(hours) = hours_until_rise(pos.altitude_deg) {
            // Linear 15°/h estimate: knowingly wrong for circumpolar
            // and never-rising targets.
            let rise = report.instant.plus_hours(hours);
            println!(
                "It will rise at approximately: {} UTC",
                rise.utc().format("%H:%M")
            );
        }
        println!("Check again in a few hours!");
    }

    println!("\nLook in the constellation: {}", report.nebula.constellation);
}

/// Prompt until the user answers y/n. `None` on EOF.
fn prompt_yes_no(prompt: &str) -> Option<bool> {
    loop {
        let answer = read_line(prompt)?.to_lowercase();
        match answer.as_str() {
            "y" | "yes" => return Some(true),
            "n" | "no" => return Some(false),
            _ => println!("Please answer y or n."),
        }
    }
}

/// One trimmed line from stdin. `None` on EOF or a read failure.
fn read_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    io::stdout().flush().ok()?;
    let mut buf = String::new();
    match io::stdin().lock().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}
