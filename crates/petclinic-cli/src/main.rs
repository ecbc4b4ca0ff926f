//! PetClinic CLI
//!
//! Command-line interface over a volatile clinic seeded from a fixture

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use petclinic_core::logging_facility;
use petclinic_core::{Clinic, ClinicConfig};

mod commands;

use commands::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "petclinic")]
#[command(about = "PetClinic - in-memory clinic workflows", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed fixture (YAML), overriding the configured one
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Owner search and details
    Owners(commands::owners::OwnersArgs),
    /// Visit booking
    Visits(commands::visits::VisitsArgs),
    /// Veterinarian listing
    Vets(commands::vets::VetsArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => ClinicConfig::from_file(path)?,
        None => ClinicConfig::default(),
    };
    logging_facility::init(config.logging.profile);

    let clinic = match cli.seed.or(config.seed.path) {
        Some(path) => Clinic::from_seed_file(&path)?,
        None => Clinic::new(),
    };
    let format = OutputFormat::from_flag(cli.json);

    match cli.command {
        Commands::Owners(args) => commands::owners::execute(&clinic, format, args),
        Commands::Visits(args) => commands::visits::execute(&clinic, format, args),
        Commands::Vets(args) => commands::vets::execute(&clinic, format, args),
    }
}
