//! Command-line interface for the console game.

use clap::Parser;

/// Two-player tic-tac-toe on the console.
///
/// Players take turns typing a position label; noughts move first.
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe on the console", long_about = None)]
#[command(version)]
pub struct Cli {}
