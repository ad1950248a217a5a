//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Symbol};
use tracing::instrument;

/// One of the eight triples that wins the game when uniformly marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    name: &'static str,
    positions: [Position; 3],
}

impl Line {
    /// Top row.
    pub const TOP_ROW: Line = Line::new(
        "top row",
        [Position::TopLeft, Position::TopMiddle, Position::TopRight],
    );
    /// Middle row.
    pub const MIDDLE_ROW: Line = Line::new(
        "middle row",
        [Position::MiddleLeft, Position::Middle, Position::MiddleRight],
    );
    /// Bottom row.
    pub const BOTTOM_ROW: Line = Line::new(
        "bottom row",
        [
            Position::BottomLeft,
            Position::BottomMiddle,
            Position::BottomRight,
        ],
    );
    /// Left column.
    pub const LEFT_COLUMN: Line = Line::new(
        "left column",
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    );
    /// Middle column.
    pub const MIDDLE_COLUMN: Line = Line::new(
        "middle column",
        [Position::TopMiddle, Position::Middle, Position::BottomMiddle],
    );
    /// Right column.
    pub const RIGHT_COLUMN: Line = Line::new(
        "right column",
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
    );
    /// Top-left to bottom-right.
    pub const PRIMARY_DIAGONAL: Line = Line::new(
        "primary diagonal",
        [Position::TopLeft, Position::Middle, Position::BottomRight],
    );
    /// Top-right to bottom-left.
    pub const SECONDARY_DIAGONAL: Line = Line::new(
        "secondary diagonal",
        [Position::TopRight, Position::Middle, Position::BottomLeft],
    );

    /// Rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::TOP_ROW,
        Line::MIDDLE_ROW,
        Line::BOTTOM_ROW,
        Line::LEFT_COLUMN,
        Line::MIDDLE_COLUMN,
        Line::RIGHT_COLUMN,
        Line::PRIMARY_DIAGONAL,
        Line::SECONDARY_DIAGONAL,
    ];

    const fn new(name: &'static str, positions: [Position; 3]) -> Self {
        Self { name, positions }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The three positions, in order.
    pub fn positions(&self) -> &[Position; 3] {
        &self.positions
    }
}

/// Checks whether `symbol` holds any complete line.
#[instrument(skip(board))]
pub fn has_won(board: &Board, symbol: Symbol) -> bool {
    Line::ALL
        .iter()
        .any(|line| board.has_same_symbol(line.positions(), symbol))
}

/// Returns the winning symbol, if any.
///
/// Noughts are checked first, so if both symbols somehow held a line
/// (unreachable through alternating play) Noughts are reported.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Symbol> {
    Symbol::ALL
        .into_iter()
        .find(|&symbol| has_won(board, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(positions: &[Position], symbol: Symbol) -> Board {
        let mut board = Board::new();
        for &position in positions {
            board.place_mark(position, symbol);
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winner(&board), None);
        assert!(!has_won(&board, Symbol::Nought));
        assert!(!has_won(&board, Symbol::Cross));
    }

    #[test]
    fn test_every_line_wins_for_its_symbol_only() {
        for line in Line::ALL {
            for symbol in Symbol::ALL {
                let board = board_with(line.positions(), symbol);
                assert!(has_won(&board, symbol), "{} for {}", line.name(), symbol);
                assert!(!has_won(&board, symbol.other()), "{}", line.name());
                assert_eq!(winner(&board), Some(symbol));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[Position::TopLeft, Position::TopMiddle], Symbol::Cross);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = board_with(&[Position::TopLeft, Position::Middle], Symbol::Nought);
        board.place_mark(Position::BottomRight, Symbol::Cross);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_noughts_take_precedence() {
        let mut board = board_with(Line::TOP_ROW.positions(), Symbol::Cross);
        for &position in Line::BOTTOM_ROW.positions() {
            board.place_mark(position, Symbol::Nought);
        }
        assert!(has_won(&board, Symbol::Cross));
        assert_eq!(winner(&board), Some(Symbol::Nought));
    }

    #[test]
    fn test_lines_are_distinct() {
        for (i, a) in Line::ALL.iter().enumerate() {
            for b in &Line::ALL[i + 1..] {
                assert_ne!(a.positions(), b.positions());
            }
        }
    }
}
