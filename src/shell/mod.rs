//! A line-oriented shell for playing a single [`Game`]: reads commands from
//! the input stream and writes responses to the output stream.
//!
//! [`Shell::run`] is the "main loop" of the binary. Failed commands are
//! reported as `error: <message>` lines and do not stop the loop.

use std::io::{BufRead, Write};

use itertools::Itertools;

use crate::chess::core::{Move, Square};
use crate::chess::game::{Game, Outcome};
use crate::chess::perft::perft;
use crate::shell::command::Command;

mod command;

/// Deeper trees take minutes to hours to count.
const MAX_PERFT_DEPTH: u8 = 6;

/// The Shell connects the [`Game`] to the I/O.
pub struct Shell<'a, R: BufRead, W: Write> {
    game: Game,
    input: &'a mut R,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Creates a new instance of the shell with given game and provided I/O.
    #[must_use]
    pub fn new(game: Game, input: &'a mut R, output: &'a mut W) -> Self {
        Self {
            game,
            input,
            output,
        }
    }

    /// The game driven by this shell.
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    /// Continuously reads the input stream and executes commands until "quit"
    /// is sent or the input is closed.
    ///
    /// # Errors
    ///
    /// Only I/O failures are propagated: malformed commands, positions and
    /// moves are reported to the output stream.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match Command::parse(&line) {
                Command::Quit => break,
                command => self.execute(command)?,
            }
            self.output.flush()?;
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::SetPosition { fen } => {
                if let Err(e) = self.game.reset(&fen) {
                    writeln!(self.output, "error: {e}")?;
                }
            },
            Command::NewGame => self.game = Game::new(),
            Command::Fen => writeln!(self.output, "{}", self.game.fen())?,
            Command::Moves { from } => self.handle_moves(from.as_deref())?,
            Command::MakeMove { input } => {
                if let Err(e) = self.game.apply_move(&input) {
                    writeln!(self.output, "error: {e}")?;
                }
            },
            Command::History => writeln!(
                self.output,
                "{}",
                self.game.moves().iter().map(Move::to_string).join(" ")
            )?,
            Command::Status => self.handle_status()?,
            Command::Perft { depth } => match depth.parse::<u8>() {
                Ok(depth) if depth <= MAX_PERFT_DEPTH => {
                    writeln!(self.output, "{}", perft(self.game.board(), depth))?;
                },
                Ok(depth) => writeln!(
                    self.output,
                    "error: perft depth should be at most {MAX_PERFT_DEPTH}, got {depth}"
                )?,
                Err(e) => writeln!(self.output, "error: invalid perft depth \"{depth}\": {e}")?,
            },
            Command::Debug => write!(self.output, "{:?}", self.game.board())?,
            Command::Empty | Command::Quit => {},
            Command::Unknown(line) => writeln!(self.output, "error: unknown command: {line}")?,
        }
        Ok(())
    }

    /// Prints the legal moves in lexicographic order.
    fn handle_moves(&mut self, from: Option<&str>) -> anyhow::Result<()> {
        let moves = match from {
            None => self.game.legal_moves(),
            Some(square) => match Square::try_from(square) {
                Ok(square) => self.game.legal_moves_from(square),
                Err(e) => {
                    writeln!(self.output, "error: {e}")?;
                    return Ok(());
                },
            },
        };
        writeln!(
            self.output,
            "{}",
            moves.iter().map(Move::to_string).sorted().join(" ")
        )?;
        Ok(())
    }

    fn handle_status(&mut self) -> anyhow::Result<()> {
        let status = match self.game.outcome() {
            Outcome::Ongoing if self.game.in_check() => "check".to_string(),
            outcome => outcome.to_string(),
        };
        writeln!(self.output, "{status}")?;
        Ok(())
    }
}
