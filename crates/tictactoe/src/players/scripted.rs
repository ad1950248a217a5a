//! Player that replays a fixed list of moves.

use super::{Player, PlayerId};
use crate::error::{AbnormalTermination, MoveError, TerminationCause};
use crate::position::Position;
use crate::types::{Board, Symbol};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Plays queued positions in order and resigns once they run out.
///
/// Positions are returned as given, occupied or not.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    id: PlayerId,
    moves: VecDeque<Position>,
}

impl ScriptedPlayer {
    /// Creates a player that will play `moves` in order.
    pub fn new(moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            id: PlayerId::new(),
            moves: moves.into_iter().collect(),
        }
    }

    /// Moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Player for ScriptedPlayer {
    fn id(&self) -> PlayerId {
        self.id
    }

    #[instrument(skip(self, _board), fields(player = %self.id))]
    fn make_move(&mut self, _board: &Board, symbol: Symbol) -> Result<Position, MoveError> {
        match self.moves.pop_front() {
            Some(position) => {
                debug!(%position, "Scripted move");
                Ok(position)
            }
            None => {
                debug!("Script exhausted");
                Err(AbnormalTermination::new(symbol, TerminationCause::Resigned).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plays_in_order_then_resigns() {
        let board = Board::new();
        let mut player = ScriptedPlayer::new([Position::Middle, Position::TopLeft]);
        assert_eq!(player.remaining(), 2);
        assert_eq!(
            player.make_move(&board, Symbol::Cross).unwrap(),
            Position::Middle
        );
        assert_eq!(
            player.make_move(&board, Symbol::Cross).unwrap(),
            Position::TopLeft
        );
        let err = player.make_move(&board, Symbol::Cross).unwrap_err();
        assert_eq!(
            err.termination(),
            Some(AbnormalTermination::new(
                Symbol::Cross,
                TerminationCause::Resigned
            ))
        );
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ScriptedPlayer::new([Position::Middle]);
        let b = ScriptedPlayer::new([Position::Middle]);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), a.id());
    }
}
