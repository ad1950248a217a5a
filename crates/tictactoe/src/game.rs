//! Turn loop for a single game between two players.

use crate::error::{AbnormalTermination, MoveError};
use crate::io::GameIo;
use crate::players::Player;
use crate::rules;
use crate::types::{Board, GameStatus, Symbol};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What a finished game reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A symbol completed a line.
    Won(Symbol),
    /// Board filled with no completed line.
    Draw,
    /// A player quit or resigned.
    AbnormallyTerminated(AbnormalTermination),
    /// Move acquisition failed for any other reason.
    Failed(String),
}

impl Outcome {
    /// Terminal status, or `None` for an unclassified failure.
    pub fn status(&self) -> Option<GameStatus> {
        match self {
            Outcome::Won(symbol) => Some(GameStatus::Won(*symbol)),
            Outcome::Draw => Some(GameStatus::Draw),
            Outcome::AbnormallyTerminated(termination) => {
                Some(GameStatus::AbnormallyTerminated(termination.symbol()))
            }
            Outcome::Failed(_) => None,
        }
    }
}

/// A game in progress, owning its board.
///
/// Noughts move first. Each turn the current player is asked for a move,
/// the mark is placed and the turn passes, until the board is won or
/// drawn or a player fails to move. The outcome is reported exactly once.
pub struct Game<I> {
    board: Board,
    noughts: Box<dyn Player>,
    crosses: Box<dyn Player>,
    to_move: Symbol,
    io: I,
}

impl<I: GameIo> Game<I> {
    /// Creates a game on an empty board.
    pub fn new(noughts: Box<dyn Player>, crosses: Box<dyn Player>, io: I) -> Self {
        Self::with_board(Board::new(), noughts, crosses, io)
    }

    /// Creates a game continuing from `board`.
    ///
    /// The side to move follows from the number of marks already placed.
    pub fn with_board(
        board: Board,
        noughts: Box<dyn Player>,
        crosses: Box<dyn Player>,
        io: I,
    ) -> Self {
        let to_move = if board.marks_placed() % 2 == 0 {
            Symbol::Nought
        } else {
            Symbol::Cross
        };
        Self {
            board,
            noughts,
            crosses,
            to_move,
            io,
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Symbol of the player whose turn it is.
    pub fn to_move(&self) -> Symbol {
        self.to_move
    }

    /// Current state as judged from the board alone.
    pub fn status(&self) -> GameStatus {
        rules::status(&self.board)
    }

    /// Plays to completion, reports the outcome and returns it.
    #[instrument(skip(self))]
    pub fn play(mut self) -> Outcome {
        info!(
            noughts = %self.noughts.id(),
            crosses = %self.crosses.id(),
            "Starting game"
        );
        let result = self.run();
        let outcome = self.report(result);
        info!(?outcome, "Game over");
        outcome
    }

    fn run(&mut self) -> Result<(), MoveError> {
        while !rules::is_game_over(&self.board) {
            let symbol = self.to_move();
            let player = match symbol {
                Symbol::Nought => &mut self.noughts,
                Symbol::Cross => &mut self.crosses,
            };
            let position = player.make_move(&self.board, symbol)?;

            // Players are trusted to pick an allowed cell; a marked one ends the game.
            if !self.board.is_empty(position) {
                warn!(%position, %symbol, "Player chose an occupied position");
                return Err(MoveError::PositionOccupied { position });
            }

            self.board.place_mark(position, symbol);
            debug!(%position, %symbol, marks = self.board.marks_placed(), "Mark placed");
            self.to_move = symbol.other();
        }
        Ok(())
    }

    fn report(&mut self, result: Result<(), MoveError>) -> Outcome {
        match result {
            Err(MoveError::Terminated(termination)) => {
                self.io
                    .declare_abnormal_termination(&self.board, termination);
                Outcome::AbnormallyTerminated(termination)
            }
            Err(err) => {
                self.io.system_error(&err);
                Outcome::Failed(err.to_string())
            }
            Ok(()) => match rules::winner(&self.board) {
                Some(symbol) => {
                    self.io.declare_winner(&self.board, symbol);
                    Outcome::Won(symbol)
                }
                None => {
                    self.io.declare_draw(&self.board);
                    Outcome::Draw
                }
            },
        }
    }
}
