//! Pseudo-legal move [generation]: the moves follow piece movement rules but
//! may leave the king of the moving side in check. Filtering those out is the
//! job of [`crate::chess::game`].
//!
//! [generation]: https://www.chessprogramming.org/Move_Generation

use crate::chess::attacks::{self, KNIGHT_OFFSETS};
use crate::chess::board::Board;
use crate::chess::core::{
    CastlingSide,
    Direction,
    Move,
    MoveList,
    PieceKind,
    Player,
    Promotion,
    Rank,
    Square,
};

/// Produces a list of pseudo-legal moves of `player`. Squares are visited in
/// A1..H8 order, the moves of each piece are produced in a fixed direction
/// order, so the result is deterministic.
#[must_use]
pub(super) fn generate_moves(board: &Board, player: Player) -> MoveList {
    let mut moves = MoveList::new();
    for from in Square::iter() {
        // Only generate moves when the square is non-empty and has the piece
        // of a correct color on it.
        let piece = match board.at(from) {
            Some(piece) if piece.owner == player => piece,
            _ => continue,
        };
        match piece.kind {
            PieceKind::King => {
                for direction in Direction::ALL {
                    push_if_available(board, player, from, from.shift(direction), &mut moves);
                }
                generate_castles(board, player, from, &mut moves);
            },
            PieceKind::Queen => {
                for direction in Direction::ALL {
                    generate_slides(board, player, from, direction, &mut moves);
                }
            },
            PieceKind::Rook => {
                for direction in Direction::ORTHOGONAL {
                    generate_slides(board, player, from, direction, &mut moves);
                }
            },
            PieceKind::Bishop => {
                for direction in Direction::DIAGONAL {
                    generate_slides(board, player, from, direction, &mut moves);
                }
            },
            PieceKind::Knight => {
                for (file_delta, rank_delta) in KNIGHT_OFFSETS {
                    push_if_available(
                        board,
                        player,
                        from,
                        from.offset(file_delta, rank_delta),
                        &mut moves,
                    );
                }
            },
            PieceKind::Pawn => generate_pawn_moves(board, player, from, &mut moves),
        }
    }
    moves
}

/// Adds a move to `to` unless it is off the board or occupied by our own
/// piece. Empty squares and opponent pieces (captures) are valid targets.
fn push_if_available(
    board: &Board,
    player: Player,
    from: Square,
    to: Option<Square>,
    moves: &mut MoveList,
) {
    let Some(to) = to else {
        return;
    };
    if board.at(to).map_or(true, |piece| piece.owner != player) {
        moves.push(Move::new(from, to, None));
    }
}

fn generate_slides(
    board: &Board,
    player: Player,
    from: Square,
    direction: Direction,
    moves: &mut MoveList,
) {
    for to in attacks::ray(from, direction) {
        match board.at(to) {
            None => moves.push(Move::new(from, to, None)),
            Some(piece) => {
                if piece.owner != player {
                    moves.push(Move::new(from, to, None));
                }
                break;
            },
        }
    }
}

/// Pawn pushes (single and double), diagonal captures, en passant. Moves onto
/// the last rank expand into all four promotions.
fn generate_pawn_moves(board: &Board, player: Player, from: Square, moves: &mut MoveList) {
    let push = |to: Square, moves: &mut MoveList| {
        if to.rank() == Rank::promotion(player) {
            for promotion in Promotion::ALL {
                moves.push(Move::new(from, to, Some(promotion)));
            }
        } else {
            moves.push(Move::new(from, to, None));
        }
    };
    let forward = player.push_direction();
    if let Some(single) = from.shift(forward).filter(|&to| board.at(to).is_none()) {
        push(single, moves);
        if from.rank() == Rank::pawns_starting(player) {
            if let Some(double) = single.shift(forward).filter(|&to| board.at(to).is_none()) {
                push(double, moves);
            }
        }
    }
    let en_passant = if board.side_to_move() == player {
        board.en_passant_square()
    } else {
        None
    };
    let (_, rank_delta) = forward.delta();
    for file_delta in [-1, 1] {
        let Some(to) = from.offset(file_delta, rank_delta) else {
            continue;
        };
        let is_capture = board.at(to).is_some_and(|piece| piece.owner != player);
        if is_capture || Some(to) == en_passant {
            push(to, moves);
        }
    }
}

/// Castling is produced only if the right is retained, the squares between
/// the king and the rook are empty, the king is not in check and does not
/// pass through or land on an attacked square.
fn generate_castles(board: &Board, player: Player, king: Square, moves: &mut MoveList) {
    if king != CastlingSide::king_origin(player) {
        return;
    }
    let they = player.opponent();
    for side in CastlingSide::ALL {
        if !board.castling().contains(side.rights(player)) {
            continue;
        }
        if side
            .gap(player)
            .iter()
            .any(|&square| board.at(square).is_some())
        {
            continue;
        }
        let walk = [king, side.rook_destination(player), side.king_destination(player)];
        if walk.iter().any(|&square| board.is_attacked(square, they)) {
            continue;
        }
        moves.push(Move::new(king, side.king_destination(player), None));
    }
}
