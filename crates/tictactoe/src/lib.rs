//! Tic-tac-toe rules engine and turn loop.
//!
//! The game talks to the outside world only through [`GameIo`], so the
//! same [`Game`] drives a console session or a scripted test.

#![warn(missing_docs)]

mod error;
mod game;
mod io;
mod players;
mod position;
pub mod rules;
mod types;

pub use error::{AbnormalTermination, MoveError, TerminationCause};
pub use game::{Game, Outcome};
pub use io::GameIo;
pub use players::{HumanPlayer, Player, PlayerId, ScriptedPlayer};
pub use position::{ParsePositionError, Position};
pub use rules::Line;
pub use types::{Board, GameStatus, ParseSymbolError, Symbol};
