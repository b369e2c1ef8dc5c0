//! Static evaluation of positions at the search horizon

use crate::bitboard::{column_mask, OPEN};
use crate::lines::Stride;

const CENTER_WEIGHT: i32 = 4;
const NEAR_CENTER_WEIGHT: i32 = 2;
const THREE_WEIGHT: i32 = 50;
const TWO_WEIGHT: i32 = 5;

const CENTER: u64 = column_mask(3);
const NEAR_CENTER: u64 = column_mask(2) | column_mask(4);

/// Heuristic value of a non-terminal position for the mover
///
/// Antisymmetric: `score(a, b) == -score(b, a)`.
pub fn score(mover: u64, opponent: u64) -> i32 {
    let empty = OPEN & !(mover | opponent);
    side_score(mover, empty) - side_score(opponent, empty)
}

fn side_score(stones: u64, empty: u64) -> i32 {
    let mut score = (stones & CENTER).count_ones() as i32 * CENTER_WEIGHT
        + (stones & NEAR_CENTER).count_ones() as i32 * NEAR_CENTER_WEIGHT;

    for &stride in Stride::ALL.iter() {
        score += open_windows(stones, empty, stride, 3) as i32 * THREE_WEIGHT;
        score += open_windows(stones, empty, stride, 2) as i32 * TWO_WEIGHT;
    }
    score
}

/// Counts four-cell windows along `stride` holding exactly `count` of
/// `stones` with every other cell empty
///
/// Each 4-bit pattern picks which window cells must be stones and which
/// must be empty. Both masks only contain real cells, so a window that
/// runs off the board can never match.
fn open_windows(stones: u64, empty: u64, stride: Stride, count: u32) -> u32 {
    let shift = stride.shift();
    let mut total = 0;
    for pattern in 0u32..16 {
        if pattern.count_ones() != count {
            continue;
        }
        let mut starts = OPEN;
        for cell in 0..4 {
            let source = if pattern & (1 << cell) != 0 { stones } else { empty };
            starts &= source >> (cell * shift);
        }
        total += starts.count_ones();
    }
    total
}
