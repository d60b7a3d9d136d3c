//! Implementation of chess rules: board representation, move generation and
//! the game state machine.

mod attacks;
pub mod board;
pub mod core;
pub mod game;
mod movegen;
pub mod perft;
