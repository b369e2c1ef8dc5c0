//! A bitboard engine for playing the board game 'Connect 4'
//!
//! Positions are stored as one 64-bit mask per player. The engine drops
//! stones with a carry trick, detects alignments by folding masks along
//! the four direction strides, and picks moves for an automated opponent
//! with a depth-limited negamax search using alpha-beta pruning.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{notation, EngineConfig, Player, Searcher};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! // player one has stacked three stones in the first column
//! let board = notation::parse_moves("17171")?;
//! let config = EngineConfig::default().with_max_depth(6).with_ai_role(Player::Two);
//! let mut searcher = Searcher::new(config);
//! let best = searcher.choose_move(&board)?;
//!
//! assert_eq!(best.column, 0);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod bitboard;

pub mod lines;

pub mod eval;

pub mod config;

pub mod search;

pub mod notation;


pub use bitboard::{BitBoard, Player};
pub use config::{EngineConfig, SearchOrder};
pub use error::{EngineError, Result};
pub use search::{BestMove, Searcher};

/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of bits reserved for each column of a bitboard
///
/// A column holds `HEIGHT` real cells, one sentinel bit directly above them
/// and padding so that the horizontal stride is two more than the
/// diagonal one.
pub const COLUMN_STRIDE: usize = 9;

// the whole padded grid must fit in a u64
const_assert!(WIDTH * COLUMN_STRIDE <= 64);
// every column needs room for its sentinel
const_assert!(HEIGHT + 1 < COLUMN_STRIDE);
