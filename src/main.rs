#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]

use std::io;

use clap::Parser;
use color_eyre::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use racingcar::{RacingGameManager, RacingGameScreen, RandomNumberGenerator};
use tracing_subscriber::EnvFilter;

/// Turn-based console car race
#[derive(Parser, Debug)]
#[command(name = "racingcar")]
#[command(version)]
struct Args {
    /// Seed for the random draws, for a reproducible race
    #[arg(long, env = "RACE_SEED")]
    seed: Option<u64>,

    /// Print the full race log and winners as JSON after the race
    #[arg(long, env = "RACE_JSON")]
    json: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let rng = args
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

    let screen = RacingGameScreen::new(io::stdin().lock(), io::stdout().lock());
    let result = RacingGameManager::new(screen, RandomNumberGenerator::new(rng)).run()?;

    if args.json {
        println!("{}", result.to_json()?);
    }

    Ok(())
}
