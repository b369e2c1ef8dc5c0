use crate::error::{EngineError, Result};
use crate::{lines, COLUMN_STRIDE, HEIGHT, WIDTH};

mod static_masks {
    use crate::{COLUMN_STRIDE, HEIGHT, WIDTH};

    pub const fn bottom_mask() -> u64 {
        let mut mask = 0;
        let mut column = 0;
        while column < WIDTH {
            mask |= 1 << (column * COLUMN_STRIDE);
            column += 1;
        }
        mask
    }
    pub const fn full_board_mask() -> u64 {
        bottom_mask() * ((1 << HEIGHT as u64) - 1)
    }
    pub const fn sentinel_mask() -> u64 {
        bottom_mask() << HEIGHT
    }
}

/// Bit 0 of every column
pub const ROW0: u64 = static_masks::bottom_mask();

/// The 42 real cells of the board
pub const OPEN: u64 = static_masks::full_board_mask();

/// The bit directly above the top cell of every column
pub const SENTINELS: u64 = static_masks::sentinel_mask();

/// Mask of the six real cells of `column`
pub const fn column_mask(column: usize) -> u64 {
    ((1 << HEIGHT) - 1) << (column * COLUMN_STRIDE)
}

/// Mask of the single cell at `column`, `row` (row 0 is the bottom)
pub const fn cell_mask(column: usize, row: usize) -> u64 {
    1 << (column * COLUMN_STRIDE + row)
}

/// Drops a stone for the mover into `column` and returns the updated mover mask
///
/// `(filled + ROW0) & OPEN` marks the lowest empty cell of every column at
/// once: adding the bottom bit ripples the carry up through the stones of a
/// column and stops at its first empty cell. A full column carries into its
/// sentinel, which `OPEN` discards.
pub fn try_drop(column: usize, mover: u64, opponent: u64) -> Result<u64> {
    if column >= WIDTH {
        return Err(EngineError::ColumnOutOfRange { column });
    }
    let filled = mover | opponent;
    let valid = filled.wrapping_add(ROW0) & OPEN;
    let move_bit = valid & column_mask(column);
    if move_bit == 0 {
        return Err(EngineError::ColumnFull { column });
    }
    Ok(mover | move_bit)
}

/// One of the two sides of the game. Player one moves first
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// A board state: one stone mask per player
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitBoard {
    masks: [u64; 2],
}

impl BitBoard {
    pub fn new() -> Self {
        Self { masks: [0, 0] }
    }

    /// Builds a board from externally supplied masks, refusing corrupt input
    pub fn from_masks(player_one: u64, player_two: u64) -> Result<Self> {
        let board = Self {
            masks: [player_one, player_two],
        };
        board.validate()?;
        Ok(board)
    }

    /// Checks that the masks are disjoint, only touch real cells and that
    /// no column has a gap below a stone
    pub fn validate(&self) -> Result<()> {
        let [one, two] = self.masks;
        if one & two != 0 {
            return Err(EngineError::InvariantViolation(format!(
                "player masks overlap at {:#x}",
                one & two
            )));
        }
        let filled = one | two;
        if filled & SENTINELS != 0 {
            return Err(EngineError::InvariantViolation(format!(
                "sentinel bits set at {:#x}",
                filled & SENTINELS
            )));
        }
        if filled & !OPEN != 0 {
            return Err(EngineError::InvariantViolation(format!(
                "bits set outside the board at {:#x}",
                filled & !OPEN
            )));
        }
        for column in 0..WIDTH {
            let stack = (filled & column_mask(column)) >> (column * COLUMN_STRIDE);
            // a gravity-stacked column reads as 2^k - 1
            if stack & (stack + 1) != 0 {
                return Err(EngineError::InvariantViolation(format!(
                    "column {} has a stone above an empty cell",
                    column + 1
                )));
            }
        }
        Ok(())
    }

    pub fn stones(&self, player: Player) -> u64 {
        self.masks[player.index()]
    }

    /// Mask of every occupied cell
    pub fn occupied(&self) -> u64 {
        self.masks[0] | self.masks[1]
    }

    pub fn num_moves(&self) -> usize {
        self.occupied().count_ones() as usize
    }

    /// The side whose turn it is, assuming player one moved first
    pub fn next_player(&self) -> Player {
        if self.stones(Player::One).count_ones() > self.stones(Player::Two).count_ones() {
            Player::Two
        } else {
            Player::One
        }
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && cell_mask(column, HEIGHT - 1) & self.occupied() == 0
    }

    /// Columns that still accept a stone, left to right
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..WIDTH).filter(move |&column| self.playable(column))
    }

    /// Drops a stone for `player`, returning the single-bit move that was placed
    pub fn try_drop(&mut self, column: usize, player: Player) -> Result<u64> {
        let mover = self.masks[player.index()];
        let opponent = self.masks[player.other().index()];
        let updated = try_drop(column, mover, opponent)?;
        self.masks[player.index()] = updated;
        Ok(updated ^ mover)
    }

    /// Takes back a move returned by [`try_drop`](Self::try_drop)
    pub fn undo(&mut self, player: Player, move_bit: u64) {
        debug_assert!(self.masks[player.index()] & move_bit == move_bit);
        self.masks[player.index()] &= !move_bit;
    }

    pub fn cell(&self, column: usize, row: usize) -> Option<Player> {
        let mask = cell_mask(column, row);
        if self.masks[0] & mask != 0 {
            Some(Player::One)
        } else if self.masks[1] & mask != 0 {
            Some(Player::Two)
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        lines::is_full(self.occupied())
    }

    /// The player holding four in a row, if any
    pub fn winner(&self) -> Option<Player> {
        if lines::has_four(self.stones(Player::One)) {
            Some(Player::One)
        } else if lines::has_four(self.stones(Player::Two)) {
            Some(Player::Two)
        } else {
            None
        }
    }
}
