//! Text console implementation of the game's I/O contract.

use std::io::{BufRead, Write};
use tictactoe::{
    AbnormalTermination, Board, GameIo, MoveError, Position, Symbol, TerminationCause,
};
use tracing::{debug, instrument, warn};

/// Plays over any line reader and writer, normally stdin and stdout.
pub struct ConsoleGameIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleGameIo<R, W> {
    /// Creates a console over `reader` and `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Returns the writer, for inspecting what was printed.
    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn prompt(&mut self, allowed: &[Position]) -> std::io::Result<()> {
        let labels: Vec<&str> = allowed.iter().map(|position| position.label()).collect();
        writeln!(self.writer, "Choose a position: {}", labels.join(", "))?;
        writeln!(
            self.writer,
            "Type 'resign' to resign; or, 'exit' or 'quit' to end the game immediately."
        )?;
        write!(self.writer, "Enter choice: ")?;
        self.writer.flush()
    }

    /// Reads one line without its line terminator.
    ///
    /// Bytes that are not UTF-8 are replaced, so the line fails to parse
    /// and is re-prompted like any other bad input.
    fn read_line(&mut self) -> Result<String, MoveError> {
        let mut bytes = Vec::new();
        if self.reader.read_until(b'\n', &mut bytes)? == 0 {
            return Err(MoveError::InputClosed);
        }
        let line = String::from_utf8_lossy(&bytes);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn report(&mut self, board: &Board, message: &str) {
        if let Err(err) = writeln!(self.writer, "{board}\n{message}") {
            warn!(error = %err, "Failed to write outcome");
        }
    }
}

/// Maps a trigger word to how the player left, if it is one.
fn termination_cause(input: &str) -> Option<TerminationCause> {
    match input {
        "resign" => Some(TerminationCause::Resigned),
        "exit" | "quit" => Some(TerminationCause::Quit),
        _ => None,
    }
}

impl<R: BufRead, W: Write> GameIo for ConsoleGameIo<R, W> {
    #[instrument(skip(self, board))]
    fn get_position(&mut self, board: &Board, symbol: Symbol) -> Result<Position, MoveError> {
        let allowed = board.allowed_positions();
        writeln!(self.writer, "{board}")?;
        loop {
            self.prompt(&allowed)?;
            let input = self.read_line()?;
            if let Some(cause) = termination_cause(&input) {
                return Err(AbnormalTermination::new(symbol, cause).into());
            }
            match Position::parse_among(&input, &allowed) {
                Ok(position) => return Ok(position),
                Err(err) => {
                    debug!(input = %err.input(), "Rejected input");
                    writeln!(self.writer, "{err}")?;
                }
            }
        }
    }

    fn declare_winner(&mut self, board: &Board, symbol: Symbol) {
        self.report(board, &format!("Player {symbol} has won!"));
    }

    fn declare_draw(&mut self, board: &Board) {
        self.report(board, "It's a draw.");
    }

    fn declare_abnormal_termination(&mut self, board: &Board, cause: AbnormalTermination) {
        self.report(board, &cause.to_string());
    }

    fn system_error(&mut self, error: &MoveError) {
        if let Err(err) = writeln!(self.writer, "Error: {error}") {
            warn!(error = %err, "Failed to write system error");
        }
    }
}
