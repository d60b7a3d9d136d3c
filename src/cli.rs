use clap::Parser;

#[derive(Parser)]
#[clap(author, version, about)]
pub(crate) struct Cli {
    /// Position to start the game from, in Forsyth-Edwards Notation. The
    /// standard starting position is used if omitted.
    #[clap(long, value_name = "FEN")]
    pub(crate) fen: Option<String>,
    /// Do not print the version banner on startup
    #[clap(short, long)]
    pub(crate) quiet: bool,
}
