//! Core domain types for tic-tac-toe.

use crate::position::Position;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::EnumCount;
use tracing::instrument;

/// The mark a player places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// Noughts (moves first).
    #[serde(rename = "O")]
    Nought,
    /// Crosses.
    #[serde(rename = "X")]
    Cross,
}

/// Text that is not a symbol glyph.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, Getters)]
#[display("'{input}' is not a valid symbol.")]
pub struct ParseSymbolError {
    /// The rejected input.
    input: String,
}

impl Symbol {
    /// Both symbols, in turn order.
    pub const ALL: [Symbol; 2] = [Symbol::Nought, Symbol::Cross];

    /// Display glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Nought => "O",
            Symbol::Cross => "X",
        }
    }

    /// Returns the opposing symbol.
    pub fn other(self) -> Self {
        match self {
            Symbol::Nought => Symbol::Cross,
            Symbol::Cross => Symbol::Nought,
        }
    }

    /// Parses a glyph ("O" or "X").
    pub fn parse(input: &str) -> Result<Symbol, ParseSymbolError> {
        Self::ALL
            .into_iter()
            .find(|symbol| symbol.glyph() == input)
            .ok_or_else(|| ParseSymbolError {
                input: input.to_string(),
            })
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// 3x3 tic-tac-toe board.
///
/// A cell, once marked, keeps its mark for the rest of the game. Only
/// [`Board::place_mark`] mutates the board and it does not check for an
/// existing mark: callers must pass a position from
/// [`Board::allowed_positions`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in canonical (row-major) order.
    cells: [Option<Symbol>; Position::COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at `position`, if any.
    pub fn get_mark(&self, position: Position) -> Option<Symbol> {
        self.cells[position.index()]
    }

    /// Places `symbol` at `position`, unconditionally.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, position: Position, symbol: Symbol) {
        self.cells[position.index()] = Some(symbol);
    }

    /// Checks if a cell is unmarked.
    pub fn is_empty(&self, position: Position) -> bool {
        self.get_mark(position).is_none()
    }

    /// True iff every listed position holds exactly `symbol`.
    pub fn has_same_symbol(&self, positions: &[Position], symbol: Symbol) -> bool {
        positions
            .iter()
            .all(|&position| self.get_mark(position) == Some(symbol))
    }

    /// True iff every listed position is marked, by either symbol.
    pub fn is_full_at(&self, positions: &[Position]) -> bool {
        positions.iter().all(|&position| !self.is_empty(position))
    }

    /// True iff all nine cells are marked.
    pub fn is_full(&self) -> bool {
        self.is_full_at(&Position::ALL)
    }

    /// Unmarked positions in canonical order.
    pub fn allowed_positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|&position| self.is_empty(position))
            .collect()
    }

    /// Number of marked cells.
    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, position) in Position::ALL.into_iter().enumerate() {
            if i > 0 {
                let separator = if position.column() == 0 { "\n" } else { " " };
                f.write_str(separator)?;
            }
            match self.get_mark(position) {
                Some(symbol) => f.write_str(symbol.glyph())?,
                None => f.write_str("_")?,
            }
        }
        Ok(())
    }
}

/// State of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A symbol completed a line.
    Won(Symbol),
    /// Board filled with no completed line.
    Draw,
    /// A player quit or resigned before the game finished.
    AbnormallyTerminated(Symbol),
}

impl GameStatus {
    /// Returns true unless the game is still in progress.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}
