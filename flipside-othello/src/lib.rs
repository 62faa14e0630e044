//! `flipside-othello` is the board layer of the flipside Othello engine.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`bitboard`] contains the raw [`Bitboard`](bitboard::Bitboard) set type:
//!    one bit per cell, index `row * 8 + col`, with `a1` in the least significant bit.
//!  - [`Board`] holds one bitboard per color and implements the game rules:
//!    legality checks, move application with flips, and child enumeration for search.

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;

/// The most legal moves any reachable position can offer.
pub const MAX_VALID_MOVES: usize = 32;
