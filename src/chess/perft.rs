//! [Perft] (**per**formance **t**esting) is a technique for checking
//! correctness of move generation by traversing the tree of possible positions
//! (nodes) and counting all the leaf nodes at certain depth.
//!
//! [Perft]: https://www.chessprogramming.org/Perft

use crate::chess::board::Board;
use crate::chess::game;

/// Counts the leaf nodes of the legal move tree of given depth.
///
/// ```
/// use chessrules::chess::board::Board;
/// use chessrules::chess::perft::perft;
///
/// assert_eq!(perft(&Board::starting(), 0), 1);
/// assert_eq!(perft(&Board::starting(), 2), 400);
/// ```
#[must_use]
pub fn perft(board: &Board, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = game::legal_moves(board);
    if depth == 1 {
        return moves.len() as u64;
    }
    moves
        .iter()
        .map(|&next_move| {
            let mut next = *board;
            next.apply(next_move);
            perft(&next, depth - 1)
        })
        .sum()
}
