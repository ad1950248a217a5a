//! Errors raised while acquiring a move.

use crate::position::Position;
use crate::types::Symbol;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Why a player left the game early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TerminationCause {
    /// The player conceded.
    #[display("resigned")]
    Resigned,
    /// The player ended the session.
    #[display("quit")]
    Quit,
}

/// A player ended the game before a win or draw.
///
/// Always attributable to the symbol whose turn it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error, Serialize, Deserialize)]
#[display("Player {symbol} {cause}.")]
pub struct AbnormalTermination {
    symbol: Symbol,
    cause: TerminationCause,
}

impl AbnormalTermination {
    /// Creates a termination signal for `symbol`.
    pub fn new(symbol: Symbol, cause: TerminationCause) -> Self {
        Self { symbol, cause }
    }

    /// Symbol of the player who left.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// How they left.
    pub fn cause(&self) -> TerminationCause {
        self.cause
    }
}

/// Failure while a player chooses a move.
///
/// Only [`MoveError::Terminated`] is an expected outcome; every other
/// variant is an unclassified failure.
#[derive(Debug, Display, Error)]
pub enum MoveError {
    /// The player quit or resigned.
    #[display("{_0}")]
    Terminated(AbnormalTermination),

    /// Reading input or writing a prompt failed.
    #[display("I/O error: {_0}")]
    Io(std::io::Error),

    /// Input ended before a position was chosen.
    #[display("Input closed before a position was chosen")]
    InputClosed,

    /// The player chose a cell that is already marked.
    #[display("Position {position} is already occupied")]
    PositionOccupied {
        /// The rejected position.
        position: Position,
    },
}

impl MoveError {
    /// The termination signal, if this is one.
    pub fn termination(&self) -> Option<AbnormalTermination> {
        match self {
            MoveError::Terminated(termination) => Some(*termination),
            _ => None,
        }
    }
}

impl From<AbnormalTermination> for MoveError {
    fn from(termination: AbnormalTermination) -> Self {
        MoveError::Terminated(termination)
    }
}

impl From<std::io::Error> for MoveError {
    fn from(err: std::io::Error) -> Self {
        MoveError::Io(err)
    }
}
