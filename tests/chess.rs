use chessrules::chess::board::Board;
use chessrules::chess::perft::perft;
use chessrules::{Error, Game, Outcome};
use pretty_assertions::assert_eq;

fn legal_position(input: &str) {
    let board = Board::from_fen(input).expect("we are parsing valid position: {input}");
    assert_eq!(board.fen(), input);
}

#[test]
fn basic_positions() {
    legal_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    legal_position("2r3r1/p3k3/1p3pp1/1B5p/5P2/2P1p1P1/PP4KP/3R4 w - - 0 34");
    legal_position("rnbqk1nr/p3bppp/1p2p3/2ppP3/3P4/P7/1PP1NPPP/R1BQKBNR w KQkq c6 0 7");
    legal_position("r2qkb1r/1pp1pp1p/p1np1np1/1B6/3PP1b1/2N1BN2/PPP2PPP/R2QK2R w KQkq - 0 7");
    legal_position("r3k3/5p2/2p5/p7/P3r3/2N2n2/1PP2P2/2K2B2 w q - 0 24");
    legal_position("r1b1qrk1/ppp2pbp/n2p1np1/4p1B1/2PPP3/2NB1N1P/PP3PP1/R2QK2R w KQ e6 0 9");
    legal_position("8/8/8/8/2P5/3k4/8/KB6 b - c3 0 1");
    legal_position("rnbq1rk1/pp4pp/1b1ppn2/2p2p2/2PP4/1P2PN2/PB2BPPP/RN1Q1RK1 w - c6 0 9");
}

#[test]
#[should_panic(expected = "expected exactly one White king, got 0")]
fn no_white_king() {
    let _ = Board::try_from("3k4/8/8/8/8/8/8/8 w - - 0 1").unwrap();
}

#[test]
#[should_panic(expected = "expected exactly one Black king, got 0")]
fn no_black_king() {
    let _ = Board::try_from("8/8/8/8/8/8/8/3K4 w - - 0 1").unwrap();
}

#[test]
#[should_panic(expected = "expected exactly one White king, got 3")]
fn too_many_kings() {
    let _ = Board::try_from("1kkk4/8/8/8/8/8/8/1KKK4 w - - 0 1").unwrap();
}

#[test]
#[should_panic(expected = "expected <= 8 White pawns, got 9")]
fn too_many_white_pawns() {
    let _ =
        Board::try_from("rnbqkbnr/pppppppp/8/8/8/P7/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
}

#[test]
#[should_panic(expected = "expected <= 8 Black pawns, got 9")]
fn too_many_black_pawns() {
    let _ =
        Board::try_from("rnbqkbnr/pppppppp/p7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").unwrap();
}

#[test]
#[should_panic(expected = "pawns can not be placed on backranks")]
fn pawns_on_backranks() {
    let _ = Board::try_from("3kr3/8/8/8/7b/8/8/1P1K4 w - - 0 1").unwrap();
}

#[test]
#[should_panic(expected = "en passant square e3 should be on rank 6")]
fn wrong_en_passant_player() {
    let _ = Board::try_from("4k3/8/8/8/4P3/8/8/4K3 w - e3 0 1").unwrap();
}

#[test]
#[should_panic(expected = "en passant square e4 should be on rank 3")]
fn wrong_en_passant_rank() {
    let _ = Board::try_from("4k3/8/8/8/4P3/8/8/4K3 b - e4 0 1").unwrap();
}

#[test]
#[should_panic(expected = "en passant square d6 requires a pawn on d5")]
fn en_passant_not_beyond_pawn() {
    let _ = Board::try_from("4k3/8/8/4p3/3P4/8/8/4K3 w - d6 0 1").unwrap();
}

#[test]
#[should_panic(expected = "castling rights KQ require a rook on a1")]
fn castling_without_rook() {
    let _ = Board::try_from("4k3/8/8/8/8/8/8/1R2K2R w KQ - 0 1").unwrap();
}

#[test]
#[should_panic(expected = "Black king can not be in check when White is to move")]
fn opponent_left_in_check() {
    let _ = Board::try_from("4k3/8/8/8/8/8/8/4QK2 w - - 0 1").unwrap();
}

#[test]
fn clean_board_str() {
    // Whitespaces at the start/end of the input are not accepted in from_fen
    // but will be cleaned up by try_from.
    assert!(Board::try_from(
        "rnbqkb1r/ppp1pp1p/5np1/3p4/3P1B2/5N2/PPP1PPPP/RN1QKB1R w KQkq - 0 1\n"
    )
    .is_ok());
    assert!(Board::from_fen(
        "\n rnbqkb1r/ppp1pp1p/5np1/3p4/3P1B2/5N2/PPP1PPPP/RN1QKB1R w KQkq - 0 1\n"
    )
    .is_err());
    // Trimmed FEN (EPD) is not enough.
    assert!(Board::try_from("rnbqkbnr/pp2pppp/8/3p4/3P4/3B4/PPP2PPP/RNBQK1NR b KQkq -").is_err());
    // Don't crash on unicode symbols.
    assert!(Board::try_from("8/8/8/8/8/8/8/8 b 88 🔠 🔠 ").is_err());
}

#[test]
fn no_crash() {
    for input in [
        "3k2p1N/82/8/8/7B/6K1/3R4/8 b - - 0 1",
        "3kn3/R2p1N2/8/8/70000000000000000B/6K1/3R4/8 b - - 0 1",
        "3kn3/R4N2/8/8/7B/6K1/3R4/8 b - - 0 48 b - - 0 4/8 b",
        "\tfen3kn3/R2p1N2/8/8/7B/6K1/3R4/8 b - - 0 23",
        "fen 3kn3/R2p1N2/8/8/7B/6K1/3R4/8 b - - 0 23",
        "3kn3/R4N2/8/8/7B/6K1/3r4/8 b - - +8 1",
        "////////",
        "8/8/8/8/8/8/8/8/ w - - 0 1",
    ] {
        assert!(
            matches!(Board::try_from(input), Err(Error::MalformedFen(_))),
            "input: {input}"
        );
    }
}

fn play(fen: &str, moves: &[&str]) -> Game {
    let mut game = Game::from_fen(fen).unwrap();
    for next_move in moves {
        game.apply_move(next_move).unwrap();
    }
    game
}

#[test]
fn promotion_and_double_push() {
    let game = play(
        "3qk1b1/P7/8/8/8/8/7P/4K3 w - - 0 1",
        &["a7a8q", "g8h7", "h2h4"],
    );
    let states: Vec<_> = game.states().iter().map(|state| state.fen()).collect();
    assert_eq!(
        states,
        vec![
            "3qk1b1/P7/8/8/8/8/7P/4K3 w - - 0 1",
            "Q2qk1b1/8/8/8/8/8/7P/4K3 b - - 0 1",
            "Q2qk3/7b/8/8/8/8/7P/4K3 w - - 1 2",
            "Q2qk3/7b/8/8/7P/8/8/4K3 b - h3 0 2",
        ]
    );
}

#[test]
fn castling() {
    let white = "r3k2r/pppqbppp/3pb3/8/8/3PB3/PPPQBPPP/R3K2R w KQkq - 0 7";
    assert_eq!(
        play(white, &["e1g1"]).fen(),
        "r3k2r/pppqbppp/3pb3/8/8/3PB3/PPPQBPPP/R4RK1 b kq - 1 7"
    );
    assert_eq!(
        play(white, &["e1c1"]).fen(),
        "r3k2r/pppqbppp/3pb3/8/8/3PB3/PPPQBPPP/2KR3R b kq - 1 7"
    );
    let black = "r3k2r/pppqbppp/3pb3/8/8/3PB3/PPPQBPPP/R3K2R b KQkq - 0 7";
    assert_eq!(
        play(black, &["e8g8"]).fen(),
        "r4rk1/pppqbppp/3pb3/8/8/3PB3/PPPQBPPP/R3K2R w KQ - 1 8"
    );
    assert_eq!(
        play(black, &["e8c8"]).fen(),
        "2kr3r/pppqbppp/3pb3/8/8/3PB3/PPPQBPPP/R3K2R w KQ - 1 8"
    );
    // Capturing the rook on its home square voids the right.
    assert_eq!(
        play(
            "1r2k2r/3nb1Qp/p1pp4/3p4/3P4/P1N2P2/1PP3PP/R1B3K1 w k - 0 22",
            &["g7h8"]
        )
        .fen(),
        "1r2k2Q/3nb2p/p1pp4/3p4/3P4/P1N2P2/1PP3PP/R1B3K1 b - - 0 22"
    );
    // The king walking away and back does not restore the right.
    let mut game = play(white, &["e1f1", "e8f8", "f1e1", "f8e8"]);
    assert_eq!(
        game.fen(),
        "r3k2r/pppqbppp/3pb3/8/8/3PB3/PPPQBPPP/R3K2R w - - 4 9"
    );
    assert!(game.apply_move("e1g1").is_err());
}

#[test]
fn castling_through_check() {
    let mut game = Game::from_fen("r3k2r/8/8/8/8/8/8/3RKR2 b kq - 0 1").unwrap();
    assert!(matches!(
        game.apply_move("e8g8"),
        Err(Error::InvalidMove(_))
    ));
    assert!(matches!(
        game.apply_move("e8c8"),
        Err(Error::InvalidMove(_))
    ));
}

#[test]
fn en_passant() {
    assert_eq!(
        play(
            "rnbqkbnr/ppp2ppp/4p3/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 1",
            &["e5d6"]
        )
        .fen(),
        "rnbqkbnr/ppp2ppp/3Pp3/8/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
    );
    assert_eq!(
        play(
            "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
            &["d4e3"]
        )
        .fen(),
        "rnbqkbnr/ppp1pppp/8/8/8/4p3/PPPP1PPP/RNBQKBNR w KQkq - 0 2"
    );
    // The target expires after one move.
    let mut game = play(
        "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
        &["g8f6", "g1f3"],
    );
    assert!(game.apply_move("d4e3").is_err());
}

#[test]
fn capture() {
    assert_eq!(
        play(
            "r2q1rk1/pppbbppp/2n5/3p4/3PN3/4PN2/1PPBBPPP/R2Q1RK1 b - - 0 9",
            &["d5e4"]
        )
        .fen(),
        "r2q1rk1/pppbbppp/2n5/8/3Pp3/4PN2/1PPBBPPP/R2Q1RK1 w - - 0 10"
    );
}

#[test]
fn outcomes() {
    let outcome = |fen: &str| Game::from_fen(fen).unwrap().outcome();
    assert_eq!(
        outcome("r3rk2/8/8/8/8/8/8/R3K2R w KQ - 0 1"),
        Outcome::Ongoing
    );
    assert!(Game::from_fen("r3rk2/8/8/8/8/8/8/R3K2R w KQ - 0 1")
        .unwrap()
        .in_check());
    assert!(matches!(
        outcome("8/p5kp/1p6/2p5/P5P1/2n4P/r2p4/1K6 w - - 2 37"),
        Outcome::Checkmate { .. }
    ));
    assert_eq!(
        outcome("8/8/8/8/8/7k/5q2/7K w - - 0 37"),
        Outcome::Stalemate
    );
    assert!(matches!(
        outcome("8/5b2/8/6P1/8/p7/1pk5/K7 w - - 0 51"),
        Outcome::Checkmate { .. }
    ));
    assert_eq!(Game::new().outcome(), Outcome::Ongoing);
}

#[test]
fn perft_starting_position() {
    let board = Board::starting();
    assert_eq!(perft(&board, 0), 1);
    assert_eq!(perft(&board, 1), 20);
    assert_eq!(perft(&board, 2), 400);
    assert_eq!(perft(&board, 3), 8902);
    assert_eq!(perft(&board, 4), 197_281);
}

#[test]
fn perft_kiwipete() {
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    assert_eq!(perft(&board, 1), 48);
    assert_eq!(perft(&board, 2), 2039);
    assert_eq!(perft(&board, 3), 97862);
}

#[test]
fn perft_endgame() {
    let board = Board::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(perft(&board, 1), 14);
    assert_eq!(perft(&board, 2), 191);
    assert_eq!(perft(&board, 3), 2812);
    assert_eq!(perft(&board, 4), 43238);
}

#[test]
fn perft_complex() {
    let board =
        Board::from_fen("r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1")
            .unwrap();
    assert_eq!(perft(&board, 1), 6);
    assert_eq!(perft(&board, 2), 264);
    assert_eq!(perft(&board, 3), 9467);
}

#[test]
fn perft_fifth() {
    let board =
        Board::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8").unwrap();
    assert_eq!(perft(&board, 1), 44);
    assert_eq!(perft(&board, 2), 1486);
    assert_eq!(perft(&board, 3), 62379);
}

// This test is very expensive in the Debug setting: disable it by default.
#[ignore]
#[test]
fn perft_deep() {
    assert_eq!(perft(&Board::starting(), 5), 4_865_609);
    let board =
        Board::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1")
            .unwrap();
    assert_eq!(perft(&board, 4), 4_085_603);
    let board =
        Board::from_fen("r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10")
            .unwrap();
    assert_eq!(perft(&board, 3), 89890);
}
