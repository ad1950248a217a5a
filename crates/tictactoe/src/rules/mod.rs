//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Nothing here holds state, so
//! win and draw detection can be tested apart from turn-taking.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_game_over};
pub use win::{Line, has_won, winner};

use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Classifies a board as in progress, won or drawn.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(symbol) = winner(board) {
        GameStatus::Won(symbol)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
