//! Human player that delegates to the I/O collaborator.

use super::{Player, PlayerId};
use crate::error::MoveError;
use crate::io::GameIo;
use crate::position::Position;
use crate::types::{Board, Symbol};
use tracing::{debug, instrument};

/// Human player whose moves come from a [`GameIo`].
pub struct HumanPlayer<I> {
    id: PlayerId,
    io: I,
}

impl<I: GameIo> HumanPlayer<I> {
    /// Creates a new human player reading from `io`.
    pub fn new(io: I) -> Self {
        Self {
            id: PlayerId::new(),
            io,
        }
    }
}

impl<I: GameIo> Player for HumanPlayer<I> {
    fn id(&self) -> PlayerId {
        self.id
    }

    #[instrument(skip(self, board), fields(player = %self.id))]
    fn make_move(&mut self, board: &Board, symbol: Symbol) -> Result<Position, MoveError> {
        let position = self.io.get_position(board, symbol)?;
        debug!(%position, "Human chose position");
        Ok(position)
    }
}
