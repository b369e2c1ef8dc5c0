//! Alignment detection on single-player masks
//!
//! A run along a stride is found by folding the mask against itself:
//! after `length - 1` rounds of `m & (m >> stride)` a bit survives only if
//! it starts `length` consecutive stones along that stride. The bits above
//! each column (sentinel and padding) are never set, so a fold can not
//! carry a run from the top of one column into the bottom of the next.

use crate::bitboard::OPEN;
use crate::COLUMN_STRIDE;

/// The four directions an alignment can take
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stride {
    /// up a column
    Vertical,
    /// along a row
    Horizontal,
    /// one column right, one row down
    DownDiagonal,
    /// one column right, one row up
    UpDiagonal,
}

impl Stride {
    pub const ALL: [Stride; 4] = [
        Stride::Horizontal,
        Stride::Vertical,
        Stride::DownDiagonal,
        Stride::UpDiagonal,
    ];

    /// Bit distance between neighbouring cells in this direction
    pub const fn shift(self) -> u32 {
        match self {
            Stride::Vertical => 1,
            Stride::Horizontal => COLUMN_STRIDE as u32,
            Stride::DownDiagonal => COLUMN_STRIDE as u32 - 1,
            Stride::UpDiagonal => COLUMN_STRIDE as u32 + 1,
        }
    }
}

/// Start bits of every run of `length` stones along `stride`
pub fn fold_runs(mask: u64, stride: Stride, length: usize) -> u64 {
    let shift = stride.shift();
    let mut runs = mask;
    for _ in 1..length {
        runs &= runs >> shift;
    }
    runs
}

pub fn has_run_along_stride(mask: u64, stride: Stride, length: usize) -> bool {
    fold_runs(mask, stride, length) != 0
}

pub fn has_run_any_direction(mask: u64, length: usize) -> bool {
    Stride::ALL
        .iter()
        .any(|&stride| has_run_along_stride(mask, stride, length))
}

pub fn has_four(mask: u64) -> bool {
    has_run_any_direction(mask, 4)
}

/// `occupied` is the union of both players' stones
pub fn is_full(occupied: u64) -> bool {
    occupied & OPEN == OPEN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitboard::{cell_mask, column_mask};
    use crate::{HEIGHT, WIDTH};

    fn cells(list: &[(usize, usize)]) -> u64 {
        list.iter()
            .fold(0, |mask, &(column, row)| mask | cell_mask(column, row))
    }

    fn hits(mask: u64) -> Vec<Stride> {
        Stride::ALL
            .iter()
            .copied()
            .filter(|&stride| has_run_along_stride(mask, stride, 4))
            .collect()
    }

    #[test]
    fn empty_board() {
        assert!(!has_four(0));
        assert!(!is_full(0));
        for &stride in Stride::ALL.iter() {
            assert!(!has_run_along_stride(0, stride, 2));
        }
    }

    #[test]
    fn vertical_under_translation_and_reflection() {
        for column in 0..WIDTH {
            for base in 0..=(HEIGHT - 4) {
                let mask = cells(&[
                    (column, base),
                    (column, base + 1),
                    (column, base + 2),
                    (column, base + 3),
                ]);
                assert!(has_four(mask));
                let mirrored = cells(&[
                    (WIDTH - 1 - column, base),
                    (WIDTH - 1 - column, base + 1),
                    (WIDTH - 1 - column, base + 2),
                    (WIDTH - 1 - column, base + 3),
                ]);
                assert!(has_four(mirrored));
                assert_eq!(hits(mask), vec![Stride::Vertical]);
            }
        }
    }

    #[test]
    fn each_direction_is_distinguished() {
        let horizontal = cells(&[(1, 2), (2, 2), (3, 2), (4, 2)]);
        let ascending = cells(&[(0, 0), (1, 1), (2, 2), (3, 3)]);
        let descending = cells(&[(3, 5), (4, 4), (5, 3), (6, 2)]);

        assert_eq!(hits(horizontal), vec![Stride::Horizontal]);
        assert_eq!(hits(ascending), vec![Stride::UpDiagonal]);
        assert_eq!(hits(descending), vec![Stride::DownDiagonal]);
    }

    #[test]
    fn three_is_not_four() {
        let three = cells(&[(2, 0), (3, 0), (4, 0)]);
        assert!(!has_four(three));
        assert!(has_run_any_direction(three, 3));
        assert!(has_run_along_stride(three, Stride::Horizontal, 2));
        assert!(!has_run_along_stride(three, Stride::Vertical, 2));
    }

    #[test]
    fn column_boundary_does_not_alias() {
        // top of one column followed by the bottom of the next
        for column in 0..(WIDTH - 1) {
            let wrap = cells(&[
                (column, HEIGHT - 2),
                (column, HEIGHT - 1),
                (column + 1, 0),
                (column + 1, 1),
            ]);
            assert!(!has_four(wrap), "vertical wrap at column {}", column);
        }
        // a full column next to a full column has no vertical run of seven
        let two_columns = column_mask(2) | column_mask(3);
        assert!(!has_run_along_stride(two_columns, Stride::Vertical, 7));

        // diagonals leaving the board at the top or bottom edge
        for column in 0..(WIDTH - 3) {
            let up = cells(&[
                (column, HEIGHT - 2),
                (column + 1, HEIGHT - 1),
                (column + 2, 0),
                (column + 3, 1),
            ]);
            assert!(!has_run_along_stride(up, Stride::UpDiagonal, 4));
            let down = cells(&[(column, 1), (column + 1, 0), (column + 2, HEIGHT - 1), (column + 3, HEIGHT - 2)]);
            assert!(!has_run_along_stride(down, Stride::DownDiagonal, 4));
        }

        // every real cell paired with every real cell along each stride is a genuine neighbour
        for &stride in Stride::ALL.iter() {
            for column in 0..WIDTH {
                for row in 0..HEIGHT {
                    let pair = fold_runs(OPEN, stride, 2) & cell_mask(column, row);
                    let (dc, dr): (isize, isize) = match stride {
                        Stride::Vertical => (0, 1),
                        Stride::Horizontal => (1, 0),
                        Stride::DownDiagonal => (1, -1),
                        Stride::UpDiagonal => (1, 1),
                    };
                    let (nc, nr) = (column as isize + dc, row as isize + dr);
                    let on_board = nc >= 0 && nc < WIDTH as isize && nr >= 0 && nr < HEIGHT as isize;
                    assert_eq!(pair != 0, on_board, "{:?} from ({}, {})", stride, column, row);
                }
            }
        }
    }

    #[test]
    fn full_iff_all_real_cells_occupied() {
        assert!(is_full(OPEN));
        for column in 0..WIDTH {
            for row in 0..HEIGHT {
                assert!(!is_full(OPEN & !cell_mask(column, row)));
            }
        }
    }
}
