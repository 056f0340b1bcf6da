//! Rock-paper-scissors in the terminal
//!
//! Plays best-of-N matches against a random opponent, reading one choice per
//! line from stdin.

mod play;
mod render;

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rps_logic::{MatchConfig, RandomOpponent, Session, DEFAULT_MAX_ROUNDS};

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "Rock-paper-scissors against the computer")]
struct Cli {
    /// Rounds per match
    #[arg(long, env = "RPS_MAX_ROUNDS", default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,

    /// Seed for the opponent (omit for a fresh random game)
    #[arg(long, env = "RPS_SEED")]
    seed: Option<u64>,

    /// Print the final state and history as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = MatchConfig::new(cli.max_rounds)?;
    let opponent = match cli.seed {
        Some(seed) => RandomOpponent::seeded(seed),
        None => RandomOpponent::new(),
    };
    info!(max_rounds = config.max_rounds(), seed = ?cli.seed, "starting session");

    let mut session = Session::with_selector(config, opponent);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    play::run(&mut session, stdin.lock(), &mut stdout)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&play::report(&session))?);
    }

    Ok(())
}
