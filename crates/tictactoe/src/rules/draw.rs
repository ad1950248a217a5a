//! Draw and game-over detection for tic-tac-toe.

use super::win::has_won;
use crate::types::{Board, Symbol};
use tracing::instrument;

/// A full board on which neither symbol holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !has_won(board, Symbol::Nought) && !has_won(board, Symbol::Cross)
}

/// Drawn, or won by either symbol.
#[instrument(skip(board))]
pub fn is_game_over(board: &Board) -> bool {
    is_draw(board) || has_won(board, Symbol::Nought) || has_won(board, Symbol::Cross)
}
