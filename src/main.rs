//! Command-line shell for playing a game of chess over stdin/stdout.

use std::io;

use chessrules::{Game, Shell};
use clap::Parser;

mod cli;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    if !args.quiet {
        chessrules::print_version_info();
    }
    let game = match args.fen {
        Some(fen) => Game::from_fen(&fen)?,
        None => Game::new(),
    };
    let mut input = io::stdin().lock();
    let mut output = io::stdout().lock();
    Shell::new(game, &mut input, &mut output).run()
}
