//! A game of chess: the current [`Board`] together with the history of the
//! moves played and the positions reached. This is the layer that decides
//! which moves are legal.

use std::fmt;

use anyhow::anyhow;

use crate::chess::board::Board;
use crate::chess::core::{Move, MoveList, Player, Square};
use crate::error::{Error, Result};

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Calculates a list of legal moves (i.e. the moves that do not leave our
/// king in check) of the side to move.
///
/// Each pseudo-legal candidate is applied to a copy of the board and kept only
/// if the mover's king is not attacked afterwards. The order of pseudo-legal
/// generation is preserved.
#[must_use]
pub fn legal_moves(board: &Board) -> MoveList {
    let us = board.side_to_move();
    board
        .pseudo_legal_moves(us)
        .into_iter()
        .filter(|&candidate| {
            let mut after = *board;
            after.apply(candidate);
            !after.in_check(us)
        })
        .collect()
}

/// Immutable snapshot of the position: its full FEN string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct State(String);

impl State {
    fn new(board: &Board) -> Self {
        Self(board.fen())
    }

    #[allow(missing_docs)]
    #[must_use]
    pub fn fen(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The status of the game as seen by the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move has at least one legal move. It may still be in
    /// check.
    Ongoing,
    /// The side to move is in check and has no legal moves: the opponent won.
    Checkmate {
        /// The player that delivered the mate.
        winner: Player,
    },
    /// The side to move is not in check and has no legal moves: draw.
    Stalemate,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ongoing => f.write_str("ongoing"),
            Self::Checkmate { .. } => f.write_str("checkmate"),
            Self::Stalemate => f.write_str("stalemate"),
        }
    }
}

/// Session object of a single game: owns the current [`Board`] and records
/// every applied move together with the position it led to.
///
/// The history always starts with the initial position: `states()` has one
/// more entry than `moves()` and its last entry matches [`Game::fen`].
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
    states: Vec<State>,
}

impl Game {
    /// Starts a game from the standard initial position.
    ///
    /// ```
    /// use chessrules::chess::game::{Game, Outcome, STARTING_FEN};
    ///
    /// let mut game = Game::new();
    /// assert_eq!(game.fen(), STARTING_FEN);
    /// assert_eq!(game.legal_moves().len(), 20);
    ///
    /// game.apply_move("e2e4").unwrap();
    /// assert_eq!(
    ///     game.fen(),
    ///     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    /// );
    /// assert_eq!(game.outcome(), Outcome::Ongoing);
    /// assert!(game.apply_move("e2e4").is_err());
    /// assert_eq!(
    ///     game.fen(),
    ///     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
    /// );
    /// assert_eq!(game.states().len(), 2);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_board(Board::starting())
    }

    /// Starts a game from an arbitrary position.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedFen`] if the input is not a valid FEN.
    pub fn from_fen(fen: &str) -> Result<Self> {
        Ok(Self::with_board(Board::try_from(fen)?))
    }

    fn with_board(board: Board) -> Self {
        Self {
            board,
            moves: Vec::new(),
            states: vec![State::new(&board)],
        }
    }

    /// Replaces the position and clears the history. On error the game is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedFen`] if the input is not a valid FEN.
    pub fn reset(&mut self, fen: &str) -> Result<()> {
        *self = Self::from_fen(fen)?;
        Ok(())
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Serializes the current position.
    #[must_use]
    pub fn fen(&self) -> String {
        self.board.fen()
    }

    /// Moves applied since the initial position, in order.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The initial position followed by the position after each move.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Legal moves of the side to move.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(&self.board)
    }

    /// Legal moves of the piece standing on `from`. Empty if the square is
    /// empty or holds a piece of the side not to move.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> MoveList {
        self.legal_moves()
            .into_iter()
            .filter(|candidate| candidate.from() == from)
            .collect()
    }

    /// Parses the move and plays it.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMove`] if the input is not a well-formed move or the
    /// move is not legal. The game is left untouched.
    pub fn apply_move(&mut self, input: &str) -> Result<()> {
        let next_move = Move::from_uci(input).map_err(Error::InvalidMove)?;
        self.make_move(next_move)
    }

    /// Plays the move if it is legal in the current position.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMove`] if the move is not legal. A promotion move
    /// without the promotion piece or with a promotion piece on a regular move
    /// is also rejected. The game is left untouched.
    pub fn make_move(&mut self, next_move: Move) -> Result<()> {
        if !self.legal_moves().contains(&next_move) {
            return Err(Error::InvalidMove(anyhow!(
                "{next_move} is not legal in {}",
                self.fen()
            )));
        }
        self.board.apply(next_move);
        self.moves.push(next_move);
        self.states.push(State::new(&self.board));
        Ok(())
    }

    /// Checks whether the side to move is in check.
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.board.in_check(self.board.side_to_move())
    }

    /// Classifies the position. Draws by the fifty-move rule, repetition or
    /// insufficient material are not detected.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if !self.legal_moves().is_empty() {
            return Outcome::Ongoing;
        }
        if self.in_check() {
            Outcome::Checkmate {
                winner: self.board.side_to_move().opponent(),
            }
        } else {
            Outcome::Stalemate
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Game {
    /// Prints the current position in Forsyth-Edwards Notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

#[cfg(test)]
mod test {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;

    fn setup(fen: &str) -> Game {
        Game::from_fen(fen).unwrap()
    }

    fn get_moves(game: &Game) -> Vec<String> {
        game.legal_moves()
            .iter()
            .map(Move::to_string)
            .sorted()
            .collect()
    }

    #[test]
    fn history() {
        let mut game = Game::default();
        assert_eq!(game.states().len(), 1);
        assert_eq!(game.states()[0].fen(), STARTING_FEN);
        for next_move in ["e2e4", "e7e5", "g1f3"] {
            game.apply_move(next_move).unwrap();
        }
        assert_eq!(
            game.moves().iter().map(Move::to_string).collect::<Vec<_>>(),
            vec!["e2e4", "e7e5", "g1f3"]
        );
        assert_eq!(game.states().len(), game.moves().len() + 1);
        assert_eq!(
            game.states()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>(),
            vec![
                STARTING_FEN,
                "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
                "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2",
                "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2",
            ]
        );
        assert_eq!(game.states().last().unwrap().fen(), game.fen());
        assert_eq!(game.to_string(), game.fen());
    }

    #[test]
    fn rejected_moves_leave_game_untouched() {
        let mut game = Game::new();
        for input in ["e2e5", "e7e5", "e2", "e2e4q", "xyz", "a1a1", ""] {
            assert!(
                matches!(game.apply_move(input), Err(Error::InvalidMove(_))),
                "input: {input}"
            );
        }
        assert_eq!(game.fen(), STARTING_FEN);
        assert!(game.moves().is_empty());
        assert_eq!(game.states().len(), 1);
    }

    #[test]
    fn repeated_move_is_rejected() {
        let mut game = Game::new();
        game.apply_move("e2e4").unwrap();
        let after_first = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        assert_eq!(game.fen(), after_first);
        assert!(matches!(
            game.apply_move("e2e4"),
            Err(Error::InvalidMove(_))
        ));
        assert_eq!(game.fen(), after_first);
        assert_eq!(game.moves().len(), 1);
        assert_eq!(game.states().len(), 2);
        assert_eq!(game.states()[1].fen(), after_first);
    }

    #[test]
    fn case_insensitive_input() {
        let mut game = setup("3qk1b1/P7/8/8/8/8/7P/4K3 w - - 0 1");
        game.apply_move("A7A8Q").unwrap();
        assert_eq!(game.moves()[0].to_string(), "a7a8q");
        assert_eq!(game.fen(), "Q2qk1b1/8/8/8/8/8/7P/4K3 b - - 0 1");
    }

    #[test]
    fn promotion_requires_piece() {
        let mut game = setup("3qk1b1/P7/8/8/8/8/7P/4K3 w - - 0 1");
        assert!(game.apply_move("a7a8").is_err());
        assert!(game.apply_move("h2h3q").is_err());
        assert!(game.apply_move("a7a8k").is_err());
        game.apply_move("a7a8r").unwrap();
        assert_eq!(game.fen(), "R2qk1b1/8/8/8/8/8/7P/4K3 b - - 0 1");
    }

    #[test]
    fn reset() {
        let mut game = Game::new();
        game.apply_move("d2d4").unwrap();
        game.reset("8/8/8/8/8/7k/5q2/7K w - - 0 37").unwrap();
        assert!(game.moves().is_empty());
        assert_eq!(game.states().len(), 1);
        assert_eq!(game.fen(), "8/8/8/8/8/7k/5q2/7K w - - 0 37");

        assert!(matches!(
            game.reset("not a fen"),
            Err(Error::MalformedFen(_))
        ));
        assert_eq!(game.fen(), "8/8/8/8/8/7k/5q2/7K w - - 0 37");
    }

    #[test]
    fn legal_moves_from_square() {
        let game = Game::new();
        assert_eq!(
            game.legal_moves_from(Square::G1)
                .iter()
                .map(Move::to_string)
                .sorted()
                .collect::<Vec<_>>(),
            vec!["g1f3", "g1h3"]
        );
        assert!(game.legal_moves_from(Square::E4).is_empty());
        assert!(game.legal_moves_from(Square::E7).is_empty());
    }

    #[test]
    fn outcome() {
        let game = setup("r3rk2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert!(game.in_check());
        assert_eq!(game.outcome(), Outcome::Ongoing);

        let game = setup("8/p5kp/1p6/2p5/P5P1/2n4P/r2p4/1K6 w - - 2 37");
        assert_eq!(
            game.outcome(),
            Outcome::Checkmate {
                winner: Player::Black
            }
        );
        assert_eq!(game.outcome().to_string(), "checkmate");

        let game = setup("8/8/8/8/8/7k/5q2/7K w - - 0 37");
        assert!(!game.in_check());
        assert_eq!(game.outcome(), Outcome::Stalemate);

        let game = setup("8/5b2/8/6P1/8/p7/1pk5/K7 w - - 0 51");
        assert_eq!(
            game.outcome(),
            Outcome::Checkmate {
                winner: Player::Black
            }
        );
    }

    #[test]
    fn checkmate_after_move() {
        // Fool's mate.
        let mut game = Game::new();
        for next_move in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            game.apply_move(next_move).unwrap();
        }
        assert_eq!(
            game.outcome(),
            Outcome::Checkmate {
                winner: Player::Black
            }
        );
        assert!(game.legal_moves().is_empty());
        assert!(game.apply_move("e1f2").is_err());
    }

    #[test]
    fn check_evasions() {
        assert_eq!(
            get_moves(&setup(
                "r3kb1r/p1p2pp1/2p4p/3Pp3/6b1/2P5/PP1NN2P/R2QK1q1 w Qkq - 0 16"
            )),
            vec!["d2f1", "e2g1"]
        );
    }
}
