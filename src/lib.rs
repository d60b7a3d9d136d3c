//! Chess rules engine: parses and serializes positions in Forsyth-Edwards
//! Notation, generates legal moves, applies them and tracks the game history
//! and outcome.
//!
//! ```
//! use chessrules::{Game, Outcome};
//!
//! let mut game = Game::new();
//! for next_move in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.apply_move(next_move).unwrap();
//! }
//! assert!(matches!(game.outcome(), Outcome::Checkmate { .. }));
//! ```

// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
#![deny(clippy::perf)]

pub mod chess;
mod error;
mod shell;

pub use chess::board::Board;
pub use chess::core::{Move, Square};
pub use chess::game::{Game, Outcome, State};
pub use error::{Error, Result};
pub use shell::Shell;
use shadow_rs::shadow;

shadow!(build);

/// Target triple the binary was built for. Produced by `build.rs`.
const TARGET: &str = include_str!(concat!(env!("OUT_DIR"), "/target"));

/// Returns the full version that can be used to identify how the binary was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints information about the version, build type and target on startup.
pub fn print_version_info() {
    println!("chessrules {}", version());
    println!("Release build: {}, target: {TARGET}", !shadow_rs::is_debug());
    if !shadow_rs::git_clean() {
        println!("Warning: built with uncommitted changes");
    }
}
