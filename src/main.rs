//! Palabros - CLI
//!
//! Daily Spanish word-guessing game. One puzzle per calendar day, six
//! attempts, persisted locally so the game survives restarts.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use palabros::{
    commands::{CommandOutcome, run_play, run_results},
    error::Error,
    output,
    storage::Store,
};

#[derive(Parser)]
#[command(
    name = "palabros",
    about = "Adivina la palabra del día en seis intentos",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Database file (default: ~/.palabros/games.db)
    #[arg(long, global = true, value_name = "PATH")]
    db: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Try to guess the seed word using WORD
    Play {
        /// The word the player is playing with
        word: String,
    },

    /// Check the results of a given DATE (YYYYMMDD)
    Results {
        /// The date, given in YYYYMMDD format
        date: String,
    },
}

fn run(cli: &Cli) -> anyhow::Result<CommandOutcome> {
    let store = match &cli.db {
        Some(path) => Store::new(path),
        None => Store::open_default()?,
    };
    store.init()?;

    let outcome = match &cli.command {
        Commands::Play { word } => run_play(&store, word)?,
        Commands::Results { date } => run_results(&store, date)?,
    };

    Ok(outcome)
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(CommandOutcome::Completed) => ExitCode::SUCCESS,
        Ok(CommandOutcome::Rejected) => ExitCode::FAILURE,
        Err(err) => {
            // Domain errors carry their own player-facing message
            let message = match err.downcast_ref::<Error>() {
                Some(domain) => domain.message().to_string(),
                None => format!("Error no controlado: {err}"),
            };
            output::print_error(&message);
            ExitCode::FAILURE
        }
    }
}
