//! Tic-tac-toe - console session between two human players.

#![warn(missing_docs)]

mod cli;
mod console;

use anyhow::{Result, anyhow};
use clap::Parser;
use cli::Cli;
use console::ConsoleGameIo;
use std::cell::RefCell;
use std::rc::Rc;
use tictactoe::{Game, HumanPlayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!("failed to install logging: {err}"))?;

    let stdin = std::io::stdin();
    let io = Rc::new(RefCell::new(ConsoleGameIo::new(
        stdin.lock(),
        std::io::stdout(),
    )));
    let noughts = HumanPlayer::new(Rc::clone(&io));
    let crosses = HumanPlayer::new(Rc::clone(&io));

    let outcome = Game::new(Box::new(noughts), Box::new(crosses), io).play();
    info!(?outcome, "Session finished");

    Ok(())
}
