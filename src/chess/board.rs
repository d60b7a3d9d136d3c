//! Provides fully-specified [Chess Position] implementation: stores the
//! placement of pieces and tracks the state of castling, en passant and the
//! move counters.
//!
//! The board is square-centric (a "mailbox"): each of the 64 squares holds at
//! most one piece. Move generation and attack detection walk the squares
//! directly.
//!
//! [Chess Position]: https://www.chessprogramming.org/Chess_Position

use std::fmt::{self, Write};
use std::num::NonZeroU32;
use std::str::FromStr;

use anyhow::{bail, Context};

use crate::chess::core::{
    CastleRights,
    CastlingSide,
    File,
    Move,
    MoveList,
    Piece,
    PieceKind,
    Player,
    Rank,
    Square,
    BOARD_SIZE,
    BOARD_WIDTH,
};
use crate::chess::{attacks, movegen};
use crate::error::{Error, Result};

const BACKRANK_PIECES: [PieceKind; BOARD_WIDTH as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// State of the chess game: piece placement, side to move, castling rights,
/// en passant target and the move counters. It has 1:1 relationship with
/// [Forsyth-Edwards Notation] (FEN).
///
/// [`Board::from_fen()`] and [`Board::try_from()`] accept only positions that
/// can be played on: exactly one king per side, consistent castling rights and
/// en passant target, the side that just moved is not left in check.
///
/// The board is a small value type: it is cheap to copy and copies are fully
/// independent, which is what legality checking relies on.
///
/// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SIZE as usize],
    side_to_move: Player,
    castling: CastleRights,
    en_passant_square: Option<Square>,
    /// [Halfmove Clock][^ply] keeps track of the number of (half-)moves
    /// since the last capture or pawn move.
    ///
    /// [Halfmove Clock]: https://www.chessprogramming.org/Halfmove_Clock
    /// [^ply]: "Half-move" or ["ply"](https://www.chessprogramming.org/Ply) means a move of only
    ///     one side.
    halfmove_clock: u32,
    fullmove_number: NonZeroU32,
}

impl Board {
    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use chessrules::chess::board::Board;
    ///
    /// let starting_position = Board::starting();
    /// assert_eq!(
    ///     &starting_position.to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        let mut result = Self::empty();
        for player in [Player::White, Player::Black] {
            for (file, kind) in File::ALL.into_iter().zip(BACKRANK_PIECES) {
                result.set(
                    Square::new(file, Rank::backrank(player)),
                    Some(Piece::new(player, kind)),
                );
                result.set(
                    Square::new(file, Rank::pawns_starting(player)),
                    Some(Piece::new(player, PieceKind::Pawn)),
                );
            }
        }
        result.castling = CastleRights::ALL;
        result
    }

    // Creates an empty board to be filled by parser.
    fn empty() -> Self {
        Self {
            squares: [None; BOARD_SIZE as usize],
            side_to_move: Player::White,
            castling: CastleRights::NONE,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: NonZeroU32::MIN,
        }
    }

    /// Parses board from Forsyth-Edwards Notation.
    ///
    /// FEN ::=
    ///       Piece Placement
    ///   ' ' Side to move
    ///   ' ' Castling ability
    ///   ' ' En passant target square
    ///   ' ' Halfmove clock
    ///   ' ' Fullmove counter
    ///
    /// All six fields are required and separated by exactly one space. Runs of
    /// empty squares may be split into several digits (`44` or `11111111`):
    /// the board is always printed back with a single digit per run. Use
    /// [`Board::try_from`] for cleaning up the input if it is likely to have
    /// surrounding whitespace.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedFen`] if the input does not follow the grammar or the
    /// position is not playable.
    pub fn from_fen(input: &str) -> Result<Self> {
        Self::parse(input).map_err(Error::MalformedFen)
    }

    fn parse(input: &str) -> anyhow::Result<Self> {
        let mut parts = input.split(' ');
        let mut result = Self::empty();
        let pieces_placement = match parts.next() {
            Some(placement) => placement,
            None => bail!("missing pieces placement"),
        };
        let mut rank_id = BOARD_WIDTH;
        for rank_fen in pieces_placement.split('/') {
            if rank_id == 0 {
                bail!("expected {BOARD_WIDTH} ranks, got \"{pieces_placement}\"");
            }
            rank_id -= 1;
            let rank = Rank::try_from(rank_id)?;
            let mut file: u8 = 0;
            for symbol in rank_fen.chars() {
                if matches!(symbol, '1'..='8') {
                    file += symbol as u8 - b'0';
                    if file > BOARD_WIDTH {
                        bail!("rank \"{rank_fen}\" is longer than {BOARD_WIDTH} squares");
                    }
                    continue;
                }
                let piece = Piece::try_from(symbol)?;
                if file >= BOARD_WIDTH {
                    bail!("rank \"{rank_fen}\" is longer than {BOARD_WIDTH} squares");
                }
                result.set(Square::new(File::try_from(file)?, rank), Some(piece));
                file += 1;
            }
            if file != BOARD_WIDTH {
                bail!("rank size should be exactly {BOARD_WIDTH}, got \"{rank_fen}\" of length {file}");
            }
        }
        if rank_id != 0 {
            bail!("there should be {BOARD_WIDTH} ranks, got \"{pieces_placement}\"");
        }
        result.side_to_move = match parts.next() {
            Some(value) => value.try_into()?,
            None => bail!("missing side to move"),
        };
        result.castling = match parts.next() {
            Some(value) => value.try_into()?,
            None => bail!("missing castling rights"),
        };
        result.en_passant_square = match parts.next() {
            Some("-") => None,
            Some(value) => Some(
                Square::try_from(value)
                    .with_context(|| format!("incorrect en passant square \"{value}\""))?,
            ),
            None => bail!("missing en passant square"),
        };
        result.halfmove_clock = match parts.next() {
            Some(value) => parse_counter(value).context("incorrect halfmove clock")?,
            None => bail!("missing halfmove clock"),
        };
        result.fullmove_number = match parts.next() {
            Some(value) => NonZeroU32::new(parse_counter(value).context("incorrect fullmove number")?)
                .context("fullmove number should start at 1")?,
            None => bail!("missing fullmove number"),
        };
        if parts.next().is_some() {
            bail!("trailing symbols are not allowed in FEN");
        }
        result.validate()?;
        Ok(result)
    }

    /// Rejects positions that parse correctly but can not occur in a game the
    /// rules engine can continue.
    fn validate(&self) -> anyhow::Result<()> {
        for player in [Player::White, Player::Black] {
            let pieces = || {
                self.squares
                    .iter()
                    .flatten()
                    .filter(move |piece| piece.owner == player)
            };
            let kings = pieces()
                .filter(|piece| piece.kind == PieceKind::King)
                .count();
            if kings != 1 {
                bail!("expected exactly one {player:?} king, got {kings}");
            }
            let pawns = pieces()
                .filter(|piece| piece.kind == PieceKind::Pawn)
                .count();
            if pawns > BOARD_WIDTH as usize {
                bail!("expected <= {BOARD_WIDTH} {player:?} pawns, got {pawns}");
            }
            let total = pieces().count();
            if total > 2 * BOARD_WIDTH as usize {
                bail!("expected <= {} {player:?} pieces, got {total}", 2 * BOARD_WIDTH);
            }
            for side in CastlingSide::ALL {
                if !self.castling.contains(side.rights(player)) {
                    continue;
                }
                let king = CastlingSide::king_origin(player);
                if self.at(king) != Some(Piece::new(player, PieceKind::King)) {
                    bail!("castling rights {} require the king on {king}", self.castling);
                }
                let rook = side.rook_origin(player);
                if self.at(rook) != Some(Piece::new(player, PieceKind::Rook)) {
                    bail!("castling rights {} require a rook on {rook}", self.castling);
                }
            }
        }
        for square in Square::iter() {
            if matches!(square.rank(), Rank::One | Rank::Eight)
                && self.at(square).is_some_and(|piece| piece.kind == PieceKind::Pawn)
            {
                bail!("pawns can not be placed on backranks, got one on {square}");
            }
        }
        if let Some(en_passant_square) = self.en_passant_square {
            let they = self.side_to_move.opponent();
            let expected_rank = match self.side_to_move {
                Player::White => Rank::Six,
                Player::Black => Rank::Three,
            };
            if en_passant_square.rank() != expected_rank {
                bail!("en passant square {en_passant_square} should be on rank {expected_rank}");
            }
            // A pawn that was just pushed by our opponent should be in front of
            // en_passant_square and the squares it went through are empty.
            let pushed_pawn = en_passant_square
                .shift(they.push_direction())
                .context("en passant square is on the edge of the board")?;
            let origin = en_passant_square
                .shift(they.push_direction().opposite())
                .context("en passant square is on the edge of the board")?;
            if self.at(pushed_pawn) != Some(Piece::new(they, PieceKind::Pawn)) {
                bail!("en passant square {en_passant_square} requires a pawn on {pushed_pawn}");
            }
            if self.at(en_passant_square).is_some() || self.at(origin).is_some() {
                bail!("en passant square {en_passant_square} requires {en_passant_square} and {origin} to be empty");
            }
        }
        if self.in_check(self.side_to_move.opponent()) {
            bail!(
                "{:?} king can not be in check when {:?} is to move",
                self.side_to_move.opponent(),
                self.side_to_move
            );
        }
        Ok(())
    }

    /// Produces the FEN string of this position.
    #[must_use]
    pub fn fen(&self) -> String {
        self.to_string()
    }

    /// Returns the piece on given square, if any.
    #[must_use]
    pub fn at(&self, square: Square) -> Option<Piece> {
        self.squares[square as usize]
    }

    /// Puts the piece (or nothing) on given square. This is a raw edit: the
    /// counters, castling rights and the en passant target are not updated.
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square as usize] = piece;
    }

    /// Finds the king of given player.
    #[must_use]
    pub fn king(&self, player: Player) -> Option<Square> {
        let king = Piece::new(player, PieceKind::King);
        Square::iter().find(|&square| self.at(square) == Some(king))
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn castling(&self) -> CastleRights {
        self.castling
    }

    /// The square "behind" the pawn that has just been pushed two squares
    /// forward.
    #[must_use]
    pub const fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn fullmove_number(&self) -> u32 {
        self.fullmove_number.get()
    }

    /// Calculates the moves of given player that obey piece movement rules
    /// but may leave their own king in check.
    ///
    /// En passant captures are only produced for the side to move.
    #[must_use]
    pub fn pseudo_legal_moves(&self, player: Player) -> MoveList {
        movegen::generate_moves(self, player)
    }

    /// Checks whether `square` is attacked by any piece of `attacker`.
    #[must_use]
    pub fn is_attacked(&self, square: Square, attacker: Player) -> bool {
        attacks::is_attacked(self, square, attacker)
    }

    /// Checks whether the king of `player` is attacked by the opponent.
    #[must_use]
    pub fn in_check(&self, player: Player) -> bool {
        self.king(player)
            .is_some_and(|king| self.is_attacked(king, player.opponent()))
    }

    /// Applies the move without checking its legality: the caller is
    /// responsible for passing one of the [`Board::pseudo_legal_moves`] of the
    /// side to move.
    ///
    /// Handles castling (the rook jumps over the king), en passant capture,
    /// promotion and updates the rights, target square and counters.
    ///
    /// A move from an empty square is a no-op: the board is left unchanged.
    pub fn apply(&mut self, next_move: Move) {
        let (from, to) = (next_move.from(), next_move.to());
        let Some(piece) = self.at(from) else {
            return;
        };
        let us = piece.owner;
        let mut captured = self.at(to).is_some();

        if piece.kind == PieceKind::Pawn
            && Some(to) == self.en_passant_square
            && from.file() != to.file()
            && !captured
        {
            self.set(Square::new(to.file(), from.rank()), None);
            captured = true;
        }
        if piece.kind == PieceKind::King {
            if let Some(side) = CastlingSide::from_king_move(us, from, to) {
                let rook = self.at(side.rook_origin(us));
                self.set(side.rook_origin(us), None);
                self.set(side.rook_destination(us), rook);
            }
        }

        let placed = match next_move.promotion() {
            Some(promotion) => Piece::new(us, promotion.into()),
            None => piece,
        };
        self.set(from, None);
        self.set(to, Some(placed));

        self.castling
            .remove(CastleRights::voided_by(from) | CastleRights::voided_by(to));
        self.en_passant_square = if piece.kind == PieceKind::Pawn
            && from.rank().max(to.rank()) as u8 - from.rank().min(to.rank()) as u8 == 2
        {
            from.shift(us.push_direction())
        } else {
            None
        };
        self.halfmove_clock = if piece.kind == PieceKind::Pawn || captured {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if us == Player::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = us.opponent();
    }
}

fn parse_counter(value: &str) -> anyhow::Result<u32> {
    if value.is_empty() || !value.bytes().all(|c| c.is_ascii_digit()) {
        bail!("counter can not contain anything other than digits, got \"{value}\"");
    }
    if value.len() > 1 && value.starts_with('0') {
        bail!("counter can not have leading zeros, got \"{value}\"");
    }
    value
        .parse::<u32>()
        .with_context(|| format!("counter can not be parsed: \"{value}\""))
}

impl TryFrom<&str> for Board {
    type Error = Error;

    /// Trims the input (newlines and surrounding whitespace) and parses it
    /// as FEN.
    fn try_from(input: &str) -> Result<Self> {
        Self::from_fen(input.trim())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::try_from(input)
    }
}

impl fmt::Display for Board {
    /// Prints board in Forsyth-Edwards Notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_squares = 0u8;
            for file in File::ALL {
                if let Some(piece) = self.at(Square::new(file, rank)) {
                    if empty_squares != 0 {
                        write!(f, "{empty_squares}")?;
                        empty_squares = 0;
                    }
                    write!(f, "{piece}")?;
                } else {
                    empty_squares += 1;
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if rank != Rank::One {
                f.write_char('/')?;
            }
        }
        write!(f, " {} ", &self.side_to_move)?;
        write!(f, "{} ", &self.castling)?;
        match self.en_passant_square {
            Some(square) => write!(f, "{square} "),
            None => write!(f, "- "),
        }?;
        write!(f, "{} ", &self.halfmove_clock)?;
        write!(f, "{}", &self.fullmove_number)?;
        Ok(())
    }
}

impl fmt::Debug for Board {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece) a-la Stockfish "debug" command in UCI mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            for file in File::ALL {
                match self.at(Square::new(file, rank)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if file != File::H {
                    f.write_char(' ')?;
                }
            }
            f.write_char('\n')?;
        }
        writeln!(f, "Player to move: {:?}", &self.side_to_move)?;
        writeln!(f, "Fullmove counter: {}", &self.fullmove_number)?;
        writeln!(f, "En Passant: {:?}", &self.en_passant_square)?;
        // bitflags' default fmt::Debug implementation is not very convenient:
        // dump FEN instead.
        writeln!(f, "Castling rights: {}", &self.castling)?;
        writeln!(f, "FEN: {self}")?;
        Ok(())
    }
}
