//! Attack detection on the mailbox board: instead of pre-calculating attack
//! sets for each piece, the rays are traced from the target square outwards
//! until they hit the first blocker.

use crate::chess::board::Board;
use crate::chess::core::{Direction, PieceKind, Player, Square};

/// Relative jumps of a knight as (file, rank) increments.
pub(super) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// Iterates over the squares along `direction` starting next to `from` and
/// stopping at the edge of the board.
pub(super) fn ray(from: Square, direction: Direction) -> impl Iterator<Item = Square> {
    std::iter::successors(from.shift(direction), move |square| square.shift(direction))
}

/// Returns the first occupied square along the ray, if any.
fn first_blocker(board: &Board, from: Square, direction: Direction) -> Option<Square> {
    ray(from, direction).find(|&square| board.at(square).is_some())
}

fn has_piece(board: &Board, square: Option<Square>, attacker: Player, kinds: &[PieceKind]) -> bool {
    square
        .and_then(|square| board.at(square))
        .is_some_and(|piece| piece.owner == attacker && kinds.contains(&piece.kind))
}

/// Checks whether any piece of `attacker` attacks `square` (regardless of
/// whether `square` is occupied and whose piece is there).
///
/// Pawns attack diagonally forward only, sliders are blocked by the first
/// occupied square along their ray.
pub(super) fn is_attacked(board: &Board, square: Square, attacker: Player) -> bool {
    // A pawn attacking this square would stand one rank "behind" it from the
    // attacker's perspective.
    let (_, forward) = attacker.push_direction().delta();
    if [-1, 1].into_iter().any(|file_delta| {
        has_piece(
            board,
            square.offset(file_delta, -forward),
            attacker,
            &[PieceKind::Pawn],
        )
    }) {
        return true;
    }
    if KNIGHT_OFFSETS.into_iter().any(|(file_delta, rank_delta)| {
        has_piece(
            board,
            square.offset(file_delta, rank_delta),
            attacker,
            &[PieceKind::Knight],
        )
    }) {
        return true;
    }
    if Direction::ALL
        .into_iter()
        .any(|direction| has_piece(board, square.shift(direction), attacker, &[PieceKind::King]))
    {
        return true;
    }
    let rook_like = Direction::ORTHOGONAL.into_iter().any(|direction| {
        has_piece(
            board,
            first_blocker(board, square, direction),
            attacker,
            &[PieceKind::Rook, PieceKind::Queen],
        )
    });
    rook_like
        || Direction::DIAGONAL.into_iter().any(|direction| {
            has_piece(
                board,
                first_blocker(board, square, direction),
                attacker,
                &[PieceKind::Bishop, PieceKind::Queen],
            )
        })
}
