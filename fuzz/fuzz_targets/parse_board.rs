#![no_main]
use chessrules::Board;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Every accepted FEN prints into a canonical form that parses back
        // into the same board and prints identically.
        if let Ok(board) = Board::from_fen(input) {
            let canonical = board.fen();
            assert_eq!(Board::from_fen(&canonical).unwrap(), board);
            assert_eq!(Board::from_fen(&canonical).unwrap().fen(), canonical);
        }
    }
});
