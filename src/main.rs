use crate::associate::run_associations;
use crate::config::Config;
use crate::model::{IdGenerator, Roster};
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, info};

mod associate;
mod checks;
mod config;
mod display;
mod error;
mod loaders;
mod model;
mod sample;
mod stats;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Roster file, overrides the configuration
    #[arg(short, long, value_name = "FILE")]
    roster: Option<PathBuf>,
    /// Write the associations as CSV instead of the textual report
    #[arg(long)]
    csv: bool,
    /// Fail if some members end up without any association
    #[arg(long)]
    strict: bool,
    /// Set verbosity level
    #[arg(short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let level = match args.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = match &args.config {
        Some(file_name) => Config::load(file_name)?,
        None => Config::default(),
    };
    let mut ids = IdGenerator::new(config.roster.first_id);
    let (students, professors) = match args.roster.as_ref().or(config.roster.file.as_ref()) {
        Some(path) => {
            info!(path = %path.display(), "loading roster");
            loaders::load_roster(path, &mut ids)?
        }
        None => {
            info!("using the sample roster");
            (
                sample::sample_students(&mut ids)?,
                sample::sample_professors(&mut ids)?,
            )
        }
    };
    checks::check_unique_ids(&students, &professors);
    let mut roster = Roster::new(students, professors);
    run_associations(&mut roster)?;
    checks::check_symmetry(&roster);
    if args.csv {
        display::write_csv(&roster, std::io::stdout().lock())?;
    } else {
        if config.display.details {
            display::display_details(&roster);
        }
        if config.display.stats {
            display::display_stats(&roster);
        }
        if config.display.unmatched {
            display::display_unmatched(&roster);
        }
    }
    if args.strict {
        checks::ensure_associated(&roster)?;
    }
    Ok(())
}
