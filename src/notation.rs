//! Text formats used to exchange positions with the outside world
//!
//! Two formats are understood:
//! - a grid string of 42 cell symbols, row by row from the top row down,
//!   each row left to right: `-`, `0` or `.` for an empty cell, `1` and `2`
//!   for the players. Whitespace is ignored so rows may be split over lines.
//! - a move history of 1-indexed column digits, player one moving first,
//!   e.g. `"4453"`.
//!
//! The engine never works on these strings directly, they are only
//! converted to and from [`BitBoard`]s.

use crate::bitboard::{cell_mask, try_drop, BitBoard, Player};
use crate::error::{EngineError, Result};
use crate::{lines, HEIGHT, WIDTH};

pub const EMPTY_SYMBOL: char = '-';

/// Reads a grid string into a validated board
pub fn parse_grid<S: AsRef<str>>(grid: S) -> Result<BitBoard> {
    let mut masks = [0u64; 2];
    let mut cell = 0;

    for (position, symbol) in grid.as_ref().chars().enumerate() {
        if symbol.is_ascii_whitespace() {
            continue;
        }
        if cell == WIDTH * HEIGHT {
            return Err(EngineError::Parse {
                position,
                reason: format!("more than {} cells", WIDTH * HEIGHT),
            });
        }
        let column = cell % WIDTH;
        let row = HEIGHT - 1 - cell / WIDTH;
        match symbol {
            '-' | '0' | '.' => {}
            '1' => masks[0] |= cell_mask(column, row),
            '2' => masks[1] |= cell_mask(column, row),
            _ => {
                return Err(EngineError::Parse {
                    position,
                    reason: format!("unknown cell symbol '{}'", symbol),
                })
            }
        }
        cell += 1;
    }

    if cell != WIDTH * HEIGHT {
        return Err(EngineError::Parse {
            position: grid.as_ref().chars().count(),
            reason: format!("expected {} cells, found {}", WIDTH * HEIGHT, cell),
        });
    }
    BitBoard::from_masks(masks[0], masks[1])
}

/// Writes a board as a 42 character grid string
pub fn to_grid(board: &BitBoard) -> String {
    let mut grid = String::with_capacity(WIDTH * HEIGHT);
    for row in (0..HEIGHT).rev() {
        for column in 0..WIDTH {
            grid.push(match board.cell(column, row) {
                Some(Player::One) => '1',
                Some(Player::Two) => '2',
                None => EMPTY_SYMBOL,
            });
        }
    }
    grid
}

/// Replays a move history from the empty board
pub fn parse_moves<S: AsRef<str>>(moves: S) -> Result<BitBoard> {
    let mut masks = [0u64; 2];
    let mut player = 0;

    for (position, column_char) in moves.as_ref().chars().enumerate() {
        // only play available moves
        match column_char.to_digit(10).map(|c| c as usize) {
            Some(column @ 1..=WIDTH) => {
                let column = column - 1;
                // abort if the position was already won
                if lines::has_four(masks[0]) || lines::has_four(masks[1]) {
                    return Err(EngineError::Parse {
                        position,
                        reason: "game is already over".to_string(),
                    });
                }
                masks[player] = try_drop(column, masks[player], masks[1 - player])?;
                player = 1 - player;
            }
            _ => {
                return Err(EngineError::Parse {
                    position,
                    reason: format!("could not parse '{}' as a valid move", column_char),
                })
            }
        }
    }
    BitBoard::from_masks(masks[0], masks[1])
}
