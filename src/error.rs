//! Error types for the engine

use thiserror::Error;

/// Errors raised while applying moves, importing positions or searching
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The column has no empty cell left. Recoverable, try another column
    #[error("Invalid move, column {} full", .column + 1)]
    ColumnFull { column: usize },

    #[error("Invalid move, column {} out of range. Columns must be between 1 and {}", .column + 1, crate::WIDTH)]
    ColumnOutOfRange { column: usize },

    /// No column accepts a drop. The game is over
    #[error("no legal move remains")]
    NoLegalMove,

    /// The supplied board state is corrupt and must not be searched
    #[error("invalid board state: {0}")]
    InvariantViolation(String),

    #[error("could not parse position at character {position}: {reason}")]
    Parse { position: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
