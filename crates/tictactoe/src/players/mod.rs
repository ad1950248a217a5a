//! Player trait and implementations.

mod human;
mod scripted;

pub use human::HumanPlayer;
pub use scripted::ScriptedPlayer;

use crate::error::MoveError;
use crate::position::Position;
use crate::types::{Board, Symbol};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a player for the length of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Allocates a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for PlayerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Anything that can choose moves.
pub trait Player {
    /// Returns this player's identity.
    ///
    /// Used for logging only; turns follow the seat a player was given.
    fn id(&self) -> PlayerId;

    /// Chooses a move for `symbol` on `board`.
    ///
    /// Implementations must return one of `board.allowed_positions()`.
    /// Quitting is reported as [`MoveError::Terminated`] carrying `symbol`.
    fn make_move(&mut self, board: &Board, symbol: Symbol) -> Result<Position, MoveError>;
}
