//! Nebula locator command line.
//!
//! With no subcommand, runs the interactive menu session. The `locate`
//! and `list` subcommands cover scripted use, where input errors are
//! reported and exit with status 1 instead of re-prompting.

mod report;
mod session;

use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nebula_catalog::{Catalog, MAX_ID, MIN_ID, Season};
use nebula_frames::{Observer, equatorial_to_horizontal};
use nebula_time::ObservationInstant;

use report::Report;
use session::Session;

#[derive(Parser)]
#[command(name = "nebula-locator", about = "Find where bright nebulae sit in your sky")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute one nebula's position without prompts
    Locate {
        /// Catalog key (1-13, see `list`)
        #[arg(long)]
        nebula: u32,
        /// Observer latitude in degrees (+N)
        #[arg(long)]
        lat: f64,
        /// Observer longitude in degrees (+E)
        #[arg(long)]
        lon: f64,
        /// UTC observation time, "YYYY-MM-DD HH:MM:SS" (default: now)
        #[arg(long)]
        date: Option<String>,
        /// Observe 12 hours from now instead of a given date
        #[arg(long, conflicts_with = "date")]
        tonight: bool,
        /// Save the report to the current directory
        #[arg(long)]
        save: bool,
    },
    /// List the catalog grouped by viewing season
    List,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    // A keyboard interrupt is a normal way to leave the menu.
    if let Err(e) = ctrlc::set_handler(|| {
        println!("\n\nProgram interrupted. Goodbye!");
        std::process::exit(0);
    }) {
        tracing::warn!(%e, "could not install interrupt handler");
    }

    let catalog = match Catalog::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load nebula catalog: {e}");
            return ExitCode::FAILURE;
        }
    };

    let cli = Cli::parse();
    match cli.command {
        None => {
            Session::new(&catalog).run();
            ExitCode::SUCCESS
        }
        Some(Commands::List) => {
            run_list(&catalog);
            ExitCode::SUCCESS
        }
        Some(Commands::Locate {
            nebula,
            lat,
            lon,
            date,
            tonight,
            save,
        }) => run_locate(&catalog, nebula, lat, lon, date.as_deref(), tonight, save),
    }
}

fn run_list(catalog: &Catalog) {
    for season in Season::ALL {
        println!("{}:", season.label());
        for neb in catalog.by_season(season) {
            println!("  {:2}. {:30} ({})", neb.id, neb.name, neb.constellation);
        }
        println!();
    }
}

fn run_locate(
    catalog: &Catalog,
    nebula: u32,
    lat: f64,
    lon: f64,
    date: Option<&str>,
    tonight: bool,
    save: bool,
) -> ExitCode {
    let Some(nebula) = catalog.get(nebula) else {
        eprintln!("No nebula with key {nebula}; valid keys are {MIN_ID}-{MAX_ID}.");
        return ExitCode::FAILURE;
    };

    let observer = match Observer::new(lat, lon) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let instant = match (date, tonight) {
        (Some(s), _) => match ObservationInstant::parse(s) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
        (None, true) => ObservationInstant::tonight(),
        (None, false) => ObservationInstant::now(),
    };

    let position = equatorial_to_horizontal(&nebula.coord, &observer, instant.jd_utc());
    let report = Report {
        nebula,
        instant,
        observer,
        position,
    };
    session::print_position(&report);

    if save {
        match report.save(Path::new(".")) {
            Ok(path) => println!("\nResults saved to {}", path.display()),
            Err(e) => {
                eprintln!("Could not save report: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
