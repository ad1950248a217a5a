//! The presentation contract the game is played through.

use crate::error::{AbnormalTermination, MoveError};
use crate::position::Position;
use crate::types::{Board, Symbol};
use std::cell::RefCell;
use std::rc::Rc;

/// Source of human moves and sink for game outcomes.
///
/// Implementations own all prompting and rendering. Unparseable input is
/// handled inside [`GameIo::get_position`] and never reaches the game.
pub trait GameIo {
    /// Blocks until a position from `board.allowed_positions()` is chosen
    /// for `symbol`, or the player quits.
    fn get_position(&mut self, board: &Board, symbol: Symbol) -> Result<Position, MoveError>;

    /// Reports that `symbol` won.
    fn declare_winner(&mut self, board: &Board, symbol: Symbol);

    /// Reports a draw.
    fn declare_draw(&mut self, board: &Board);

    /// Reports that a player left before the game finished.
    fn declare_abnormal_termination(&mut self, board: &Board, cause: AbnormalTermination);

    /// Reports an unclassified failure.
    fn system_error(&mut self, error: &MoveError);
}

/// Lets both human players and the game share one console.
impl<T: GameIo> GameIo for Rc<RefCell<T>> {
    fn get_position(&mut self, board: &Board, symbol: Symbol) -> Result<Position, MoveError> {
        self.borrow_mut().get_position(board, symbol)
    }

    fn declare_winner(&mut self, board: &Board, symbol: Symbol) {
        self.borrow_mut().declare_winner(board, symbol)
    }

    fn declare_draw(&mut self, board: &Board) {
        self.borrow_mut().declare_draw(board)
    }

    fn declare_abnormal_termination(&mut self, board: &Board, cause: AbnormalTermination) {
        self.borrow_mut().declare_abnormal_termination(board, cause)
    }

    fn system_error(&mut self, error: &MoveError) {
        self.borrow_mut().system_error(error)
    }
}
