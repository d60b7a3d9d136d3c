//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};
use std::mem;

use anyhow::bail;
use arrayvec::ArrayVec;
use itertools::Itertools;

#[allow(missing_docs)]
pub const BOARD_WIDTH: u8 = 8;
#[allow(missing_docs)]
pub const BOARD_SIZE: u8 = BOARD_WIDTH * BOARD_WIDTH;

/// Upper bound on the number of pseudo-legal moves in a position accepted by
/// [`crate::chess::board::Board`]: at most 16 pieces per side, which can not
/// produce more than this many moves even if every non-king piece is a queen.
pub const MAX_MOVES: usize = 512;

/// Moves produced by the move generator. Stored on the stack: the
/// [`crate::chess::board::Board`] is copied for every candidate move when the
/// legality is checked, and the lists are short-lived.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// A move from one square to another, with an optional promotion. The
/// representation has one-to-one correspondence with the "long algebraic"
/// (UCI) move notation: castling is encoded as a king move of two files
/// (`e1g1`) and en passant as a regular pawn capture onto the target square.
///
/// A move does not know whether it is legal: it only makes sense in the
/// context of a [`crate::chess::board::Board`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<Promotion>,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Square, to: Square, promotion: Option<Promotion>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }

    /// Square the piece is moved from.
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Square the piece is moved to.
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn promotion(&self) -> Option<Promotion> {
        self.promotion
    }

    /// Parses a move in the 4-5 character format: origin square, destination
    /// square and an optional promotion letter. The input is case-insensitive
    /// but canonical moves are always lowercase.
    ///
    /// ```
    /// use chessrules::chess::core::{Move, Promotion, Square};
    ///
    /// assert_eq!(
    ///     Move::from_uci("e2e4").unwrap(),
    ///     Move::new(Square::E2, Square::E4, None)
    /// );
    /// assert_eq!(
    ///     Move::from_uci("A7A8Q").unwrap(),
    ///     Move::new(Square::A7, Square::A8, Some(Promotion::Queen))
    /// );
    /// assert!(Move::from_uci("e2").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// If the input is not a valid move string.
    pub fn from_uci(input: &str) -> anyhow::Result<Self> {
        let input = input.to_ascii_lowercase();
        if !input.is_ascii() {
            bail!("move should only contain ASCII symbols, got \"{input}\"");
        }
        match input.len() {
            4 | 5 => (),
            len => bail!("move should have 4 or 5 symbols, got \"{input}\" with {len}"),
        }
        let from = Square::try_from(&input[0..2])?;
        let to = Square::try_from(&input[2..4])?;
        let promotion = match input[4..].chars().next() {
            Some(symbol) => Some(Promotion::try_from(symbol)?),
            None => None,
        };
        Ok(Self::new(from, to, promotion))
    }
}

impl fmt::Display for Move {
    /// Serializes a move in [UCI format].
    ///
    /// [UCI format]: http://wbec-ridderkerk.nl/html/UCIProtocol.html
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{promotion}")?;
        }
        Ok(())
    }
}

/// Board squares: from left to right, from bottom to the top:
///
/// ```
/// use chessrules::chess::core::Square;
///
/// assert_eq!(Square::A1 as u8, 0);
/// assert_eq!(Square::E1 as u8, 4);
/// assert_eq!(Square::H1 as u8, 7);
/// assert_eq!(Square::A4 as u8, 8 * 3);
/// assert_eq!(Square::H8 as u8, 63);
/// ```
///
/// Square is a compact representation using only one byte.
///
/// ```
/// use chessrules::chess::core::Square;
/// use std::mem;
///
/// assert_eq!(std::mem::size_of::<Square>(), 1);
/// ```
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[rustfmt::skip]
#[allow(missing_docs)]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

impl Square {
    /// Connects file (column) and rank (row) to form a full square.
    #[must_use]
    pub const fn new(file: File, rank: Rank) -> Self {
        Self::from_index(file as u8 + (rank as u8) * BOARD_WIDTH)
    }

    const fn from_index(index: u8) -> Self {
        debug_assert!(index < BOARD_SIZE);
        unsafe { mem::transmute(index) }
    }

    /// Returns file (column) on which the square is located.
    #[must_use]
    pub const fn file(self) -> File {
        unsafe { mem::transmute(self as u8 % BOARD_WIDTH) }
    }

    /// Returns rank (row) on which the square is located.
    #[must_use]
    pub const fn rank(self) -> Rank {
        unsafe { mem::transmute(self as u8 / BOARD_WIDTH) }
    }

    /// Iterates over all squares from [`Square::A1`] to [`Square::H8`].
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> {
        (0..BOARD_SIZE).map(Self::from_index)
    }

    /// Returns the square shifted by the given number of files and ranks or
    /// `None` if the result is outside of the board.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;
        let width = BOARD_WIDTH as i8;
        if (0..width).contains(&file) && (0..width).contains(&rank) {
            Some(Self::from_index((rank * width + file) as u8))
        } else {
            None
        }
    }

    /// Returns the neighbouring square in given direction.
    #[must_use]
    pub fn shift(self, direction: Direction) -> Option<Self> {
        let (file_delta, rank_delta) = direction.delta();
        self.offset(file_delta, rank_delta)
    }
}

impl TryFrom<u8> for Square {
    type Error = anyhow::Error;

    /// Creates a square given its position on the board.
    ///
    /// # Errors
    ///
    /// If given square index is outside 0..[`BOARD_SIZE`] range.
    fn try_from(square_index: u8) -> anyhow::Result<Self> {
        // Exclusive range patterns are not allowed:
        // https://github.com/rust-lang/rust/issues/37854
        const MAX_INDEX: u8 = BOARD_SIZE - 1;
        match square_index {
            0..=MAX_INDEX => Ok(Self::from_index(square_index)),
            _ => bail!("square index should be in 0..BOARD_SIZE, got {square_index}"),
        }
    }
}

impl TryFrom<&str> for Square {
    type Error = anyhow::Error;

    fn try_from(square: &str) -> anyhow::Result<Self> {
        let (file, rank) = match square.chars().collect_tuple() {
            Some((file, rank)) => (file, rank),
            None => bail!(
                "square should be two-char, got \"{square}\" with {} chars",
                square.chars().count()
            ),
        };
        Ok(Self::new(file.try_into()?, rank.try_into()?))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Represents a column (vertical row) of the chessboard. In chess notation, it
/// is normally represented with a lowercase letter.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    #[allow(missing_docs)]
    pub const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
    ];
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char((b'a' + *self as u8) as char)
    }
}

impl TryFrom<char> for File {
    type Error = anyhow::Error;

    fn try_from(file: char) -> anyhow::Result<Self> {
        match file {
            'a'..='h' => Ok(unsafe { mem::transmute(file as u8 - b'a') }),
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        }
    }
}

impl TryFrom<u8> for File {
    type Error = anyhow::Error;

    fn try_from(column: u8) -> anyhow::Result<Self> {
        match column {
            0..=7 => Ok(unsafe { mem::transmute(column) }),
            _ => bail!("file should be within 0..BOARD_WIDTH, got {column}"),
        }
    }
}

/// Represents a horizontal row of the chessboard. In chess notation, it is
/// represented with a number. The implementation assumes zero-based values
/// (i.e. rank 1 would be 0).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[allow(missing_docs)]
pub enum Rank {
    One = 0,
    Two = 1,
    Three = 2,
    Four = 3,
    Five = 4,
    Six = 5,
    Seven = 6,
    Eight = 7,
}

impl Rank {
    #[allow(missing_docs)]
    pub const ALL: [Self; BOARD_WIDTH as usize] = [
        Self::One,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
    ];

    /// The rank where the pieces of given player start.
    #[must_use]
    pub const fn backrank(player: Player) -> Self {
        match player {
            Player::White => Self::One,
            Player::Black => Self::Eight,
        }
    }

    /// The rank pawns of given player start on and can be pushed by two
    /// squares from.
    #[must_use]
    pub const fn pawns_starting(player: Player) -> Self {
        match player {
            Player::White => Self::Two,
            Player::Black => Self::Seven,
        }
    }

    /// The rank pawns of given player are promoted on.
    #[must_use]
    pub const fn promotion(player: Player) -> Self {
        Self::backrank(player.opponent())
    }
}

impl TryFrom<char> for Rank {
    type Error = anyhow::Error;

    fn try_from(rank: char) -> anyhow::Result<Self> {
        match rank {
            '1'..='8' => Ok(unsafe { mem::transmute(rank as u8 - b'1') }),
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = anyhow::Error;

    fn try_from(row: u8) -> anyhow::Result<Self> {
        match row {
            0..=7 => Ok(unsafe { mem::transmute(row) }),
            _ => bail!("rank should be within 0..BOARD_WIDTH, got {row}"),
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u8 + 1)
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Direction of the pawn pushes.
    #[must_use]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("player should be 'w' or 'b', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King = 1,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl From<Promotion> for PieceKind {
    fn from(promotion: Promotion) -> Self {
        match promotion {
            Promotion::Queen => Self::Queen,
            Promotion::Rook => Self::Rook,
            Promotion::Bishop => Self::Bishop,
            Promotion::Knight => Self::Knight,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        })
    }
}

/// Represents a specific piece owned by a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(owner: Player, kind: PieceKind) -> Self {
        Self { owner, kind }
    }
}

impl TryFrom<char> for Piece {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        let kind = match symbol.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        };
        // White player: uppercase symbols, black player: lowercase.
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self { owner, kind })
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = self.kind.to_string();
        match self.owner {
            Player::White => f.write_str(&symbol.to_ascii_uppercase()),
            Player::Black => f.write_str(&symbol),
        }
    }
}

bitflags::bitflags! {
    /// Track the ability to [castle] each side (kingside is often referred to
    /// as O-O or h-side castle, queenside -- O-O-O or a-side castle). When the
    /// king moves, player loses ability to castle both sides. When the rook
    /// moves or is captured, player loses ability to castle its corresponding
    /// side.
    ///
    /// An easy mnemonic is that the king and the rook end up on the same files
    /// for both sides:
    ///
    /// - When castling h-side (short), the king ends up on [`File::G`] and the
    ///   rook on [`File::F`]
    /// - When castling a-side (long), the king ends up on [`File::C`] and the
    ///   rook on [`File::D`]
    ///
    /// The full rules are:
    ///
    /// - The king and the castling rook must not have previously moved.
    /// - No square from the king's initial square to its final square may be
    ///   under attack by an enemy piece.
    /// - All the squares between the king's initial and final squares
    ///   (including the final square), and all the squares between the
    ///   castling rook's initial and final squares (including the final
    ///   square), must be vacant except for the king and castling rook.
    ///
    /// [castle]: https://www.chessprogramming.org/Castling
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct CastleRights : u8 {
        #[allow(missing_docs)]
        const NONE = 0;
        #[allow(missing_docs)]
        const WHITE_SHORT = 0b1000;
        #[allow(missing_docs)]
        const WHITE_LONG = 0b0100;
        #[allow(missing_docs)]
        const WHITE_BOTH = Self::WHITE_SHORT.bits() | Self::WHITE_LONG.bits();
        #[allow(missing_docs)]
        const BLACK_SHORT = 0b0010;
        #[allow(missing_docs)]
        const BLACK_LONG = 0b0001;
        #[allow(missing_docs)]
        const BLACK_BOTH = Self::BLACK_SHORT.bits() | Self::BLACK_LONG.bits();
        #[allow(missing_docs)]
        const ALL = Self::WHITE_BOTH.bits() | Self::BLACK_BOTH.bits();
    }
}

impl CastleRights {
    /// Rights that are lost when a piece moves from or to the given square:
    /// the king and rook home squares void the rights attached to them
    /// regardless of which piece actually moves.
    #[must_use]
    pub const fn voided_by(square: Square) -> Self {
        match square {
            Square::E1 => Self::WHITE_BOTH,
            Square::H1 => Self::WHITE_SHORT,
            Square::A1 => Self::WHITE_LONG,
            Square::E8 => Self::BLACK_BOTH,
            Square::H8 => Self::BLACK_SHORT,
            Square::A8 => Self::BLACK_LONG,
            _ => Self::NONE,
        }
    }
}

impl TryFrom<&str> for CastleRights {
    type Error = anyhow::Error;

    /// Parses [`CastleRights`] for both players from the FEN format. The user
    /// is responsible for providing valid input cleaned up from the actual FEN
    /// chunk.
    ///
    /// # Errors
    ///
    /// Returns [`anyhow::Error`] if given pattern does not match
    ///
    /// [`CastleRights`] := (K)? (Q)? (k)? (q)? | -
    ///
    /// The letters have to come in this exact order.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        if input == "-" {
            return Ok(Self::NONE);
        }
        let mut rights = Self::NONE;
        let mut remaining = input;
        for (symbol, right) in [
            ('K', Self::WHITE_SHORT),
            ('Q', Self::WHITE_LONG),
            ('k', Self::BLACK_SHORT),
            ('q', Self::BLACK_LONG),
        ] {
            if let Some(rest) = remaining.strip_prefix(symbol) {
                rights |= right;
                remaining = rest;
            }
        }
        if rights.is_empty() || !remaining.is_empty() {
            bail!("unknown castle rights: {input}");
        }
        Ok(rights)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::NONE {
            return f.write_char('-');
        }
        if self.contains(Self::WHITE_SHORT) {
            f.write_char('K')?;
        }
        if self.contains(Self::WHITE_LONG) {
            f.write_char('Q')?;
        }
        if self.contains(Self::BLACK_SHORT) {
            f.write_char('k')?;
        }
        if self.contains(Self::BLACK_LONG) {
            f.write_char('q')?;
        }
        Ok(())
    }
}

/// Kingside (short, O-O) or queenside (long, O-O-O) castle.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CastlingSide {
    Short,
    Long,
}

impl CastlingSide {
    #[allow(missing_docs)]
    pub const ALL: [Self; 2] = [Self::Short, Self::Long];

    /// The right required to castle this side.
    #[must_use]
    pub const fn rights(self, player: Player) -> CastleRights {
        match (player, self) {
            (Player::White, Self::Short) => CastleRights::WHITE_SHORT,
            (Player::White, Self::Long) => CastleRights::WHITE_LONG,
            (Player::Black, Self::Short) => CastleRights::BLACK_SHORT,
            (Player::Black, Self::Long) => CastleRights::BLACK_LONG,
        }
    }

    /// The square the king starts castling from.
    #[must_use]
    pub const fn king_origin(player: Player) -> Square {
        Square::new(File::E, Rank::backrank(player))
    }

    /// The square the king ends up on.
    #[must_use]
    pub const fn king_destination(self, player: Player) -> Square {
        match self {
            Self::Short => Square::new(File::G, Rank::backrank(player)),
            Self::Long => Square::new(File::C, Rank::backrank(player)),
        }
    }

    /// The square the castling rook starts from.
    #[must_use]
    pub const fn rook_origin(self, player: Player) -> Square {
        match self {
            Self::Short => Square::new(File::H, Rank::backrank(player)),
            Self::Long => Square::new(File::A, Rank::backrank(player)),
        }
    }

    /// The square the rook ends up on. This is also the square the king walks
    /// through.
    #[must_use]
    pub const fn rook_destination(self, player: Player) -> Square {
        match self {
            Self::Short => Square::new(File::F, Rank::backrank(player)),
            Self::Long => Square::new(File::D, Rank::backrank(player)),
        }
    }

    /// Squares between the king and the rook that have to be vacant.
    #[must_use]
    pub fn gap(self, player: Player) -> ArrayVec<Square, 3> {
        let files: &[File] = match self {
            Self::Short => &[File::F, File::G],
            Self::Long => &[File::B, File::C, File::D],
        };
        files
            .iter()
            .map(|&file| Square::new(file, Rank::backrank(player)))
            .collect()
    }

    /// Recognizes castling by the king's move: two files away from its origin
    /// square on the backrank.
    #[must_use]
    pub fn from_king_move(player: Player, from: Square, to: Square) -> Option<Self> {
        if from != Self::king_origin(player) {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|side| side.king_destination(player) == to)
    }
}

/// A pawn can be promoted to a queen, rook, bishop or a knight.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Promotion {
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl Promotion {
    #[allow(missing_docs)]
    pub const ALL: [Self; 4] = [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];
}

impl TryFrom<char> for Promotion {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol {
            'q' => Ok(Self::Queen),
            'r' => Ok(Self::Rook),
            'b' => Ok(Self::Bishop),
            'n' => Ok(Self::Knight),
            _ => bail!("promotion should be one of \"qrbn\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for Promotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", PieceKind::from(*self))
    }
}

/// Directions on the board from a perspective of White player.
///
/// Traditionally those are North (Up), West (Left), East (Right), South (Down)
/// and their combinations. However, using cardinal directions is confusing,
/// hence they are replaced by relative directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Also known as NorthWest.
    UpLeft,
    /// Also known as North.
    Up,
    /// Also known as NorthEast.
    UpRight,
    /// Also known as East.
    Right,
    /// Also known as West.
    Left,
    /// Also known as SouthWest.
    DownLeft,
    /// Also known as South.
    Down,
    /// Also known as SouthEast.
    DownRight,
}

impl Direction {
    #[allow(missing_docs)]
    pub const ALL: [Self; 8] = [
        Self::UpLeft,
        Self::Up,
        Self::UpRight,
        Self::Right,
        Self::Left,
        Self::DownLeft,
        Self::Down,
        Self::DownRight,
    ];
    /// Directions a rook slides in.
    pub const ORTHOGONAL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];
    /// Directions a bishop slides in.
    pub const DIAGONAL: [Self; 4] = [
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
    ];

    /// File and rank increments of a single step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (-1, 1),
            Self::Up => (0, 1),
            Self::UpRight => (1, 1),
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
            Self::DownLeft => (-1, -1),
            Self::Down => (0, -1),
            Self::DownRight => (1, -1),
        }
    }

    #[allow(missing_docs)]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::UpLeft => Self::DownRight,
            Self::Up => Self::Down,
            Self::UpRight => Self::DownLeft,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::DownLeft => Self::UpRight,
            Self::Down => Self::Up,
            Self::DownRight => Self::UpLeft,
        }
    }
}
