use crate::chess::core::Move;

/// Commands understood by [`crate::Shell`], one per input line.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    /// `position <fen>`.
    SetPosition { fen: String },
    /// `startpos` or `position startpos`.
    NewGame,
    Fen,
    /// `moves` lists all legal moves, `moves <square>` only those of the piece
    /// standing there.
    Moves { from: Option<String> },
    /// `move <move>` or just `<move>`.
    MakeMove { input: String },
    History,
    Status,
    Perft { depth: String },
    Debug,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub(super) fn parse(line: &str) -> Self {
        let line = line.trim();
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => Self::Empty,
            ["position", "startpos"] | ["startpos"] => Self::NewGame,
            ["position", fen @ ..] => Self::SetPosition { fen: fen.join(" ") },
            ["fen"] => Self::Fen,
            ["moves"] => Self::Moves { from: None },
            ["moves", square] => Self::Moves {
                from: Some((*square).to_string()),
            },
            ["move", input] => Self::MakeMove {
                input: (*input).to_string(),
            },
            ["history"] => Self::History,
            ["status"] => Self::Status,
            ["perft", depth] => Self::Perft {
                depth: (*depth).to_string(),
            },
            ["d"] => Self::Debug,
            ["quit"] => Self::Quit,
            [input] if Move::from_uci(input).is_ok() => Self::MakeMove {
                input: (*input).to_string(),
            },
            _ => Self::Unknown(line.to_string()),
        }
    }
}
