//! The nine cells of the board and their canonical labels.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter};
use tracing::instrument;

/// A position on the tic-tac-toe board.
///
/// Declaration order is the canonical order: rows top to bottom,
/// left to right within a row. Serialized form is the canonical label.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumCount,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-middle (row 0, column 1)
    TopMiddle,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Centre cell (row 1, column 1)
    Middle,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-middle (row 2, column 1)
    BottomMiddle,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

/// Input text that does not name an acceptable position.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, Getters)]
#[display("'{input}' is not a valid position.")]
pub struct ParsePositionError {
    /// The rejected input.
    input: String,
}

impl ParsePositionError {
    /// Creates an error for the rejected input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl Position {
    /// All 9 positions in canonical order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopMiddle,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Middle,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomMiddle,
        Position::BottomRight,
    ];

    /// Canonical label, used for both parsing and display.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopMiddle => "top-middle",
            Position::TopRight => "top-right",
            Position::MiddleLeft => "middle-left",
            Position::Middle => "middle",
            Position::MiddleRight => "middle-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomMiddle => "bottom-middle",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Index into a row-major cell array (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.index() % 3
    }

    /// Parses an exact, case-sensitive canonical label.
    #[instrument]
    pub fn parse(input: &str) -> Result<Position, ParsePositionError> {
        Self::parse_among(input, &Self::ALL)
    }

    /// Parses a canonical label, accepting only positions in `allowed`.
    ///
    /// A well-formed label that is not allowed (an occupied cell, say)
    /// is rejected exactly like unparseable text.
    #[instrument(skip(allowed))]
    pub fn parse_among(input: &str, allowed: &[Position]) -> Result<Position, ParsePositionError> {
        allowed
            .iter()
            .copied()
            .find(|position| position.label() == input)
            .ok_or_else(|| ParsePositionError::new(input))
    }
}

impl std::str::FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
