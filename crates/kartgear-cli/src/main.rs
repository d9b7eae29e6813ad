use std::path::PathBuf;

use clap::Parser;

use kartgear_cli::config::{Preset, RunConfig};
use kartgear_cli::{logging, report};
use kartgear_core::model::Catalog;
use kartgear_core::optimize::optimise_builds;

/// Gear build optimiser for kart racing loadouts.
#[derive(Debug, Parser)]
#[command(
    name = "kartgear",
    author,
    version,
    about = "Finds the best gear combinations for your priorities"
)]
struct Cli {
    /// Path to the YAML run configuration; without one the whole catalog is
    /// treated as owned.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Apply a named priority/constraint preset on top of the configuration.
    #[arg(long, value_enum, value_name = "PRESET")]
    preset: Option<Preset>,

    /// Override the number of builds to return.
    #[arg(long, value_name = "N")]
    top_n: Option<usize>,

    /// Rank by raw scores instead of normalised ones.
    #[arg(long)]
    raw_objective: bool,

    /// Exit after validating the configuration (no optimisation is run).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut run = match &cli.config {
        Some(path) => RunConfig::from_path(path)?,
        None => RunConfig::default(),
    };
    if let Some(preset) = cli.preset {
        preset.apply(&mut run);
    }
    if let Some(top_n) = cli.top_n {
        run.top_n = top_n;
    }
    if cli.raw_objective {
        run.normalize = false;
    }

    let catalog = Catalog::builtin();
    let (inventory, config) = run.resolve(&catalog)?;

    if cli.validate_only {
        println!("Configuration OK.");
        return Ok(());
    }

    tracing::info!(
        top_n = config.top_n,
        normalize = config.normalize_objective,
        diverse = config.diverse,
        constraints = config.constraints.iter().count(),
        "running optimiser"
    );

    let results = optimise_builds(&catalog, &inventory, &config)?;
    if results.is_empty() {
        println!("No builds satisfy the current selection and constraints.");
        return Ok(());
    }

    print!("{}", report::render(&results));
    Ok(())
}
