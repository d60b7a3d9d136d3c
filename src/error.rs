//! Errors surfaced by the public API.

/// Failure kinds reported to the users of [`crate::chess::board::Board`] and
/// [`crate::chess::game::Game`]. The wrapped [`anyhow::Error`] carries the
/// human-readable details of what exactly went wrong.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The FEN string violates the grammar or describes an impossible
    /// position.
    #[error("malformed FEN: {0:#}")]
    MalformedFen(anyhow::Error),
    /// The move string is not well-formed or the move is not legal in the
    /// current position.
    #[error("invalid move: {0:#}")]
    InvalidMove(anyhow::Error),
}

#[allow(missing_docs)]
pub type Result<T> = std::result::Result<T, Error>;
