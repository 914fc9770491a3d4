//! Error types for board and game operations

use crate::board::Coord;

/// Errors raised when setting up a game or applying a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HexError {
    #[error("Invalid board size: {size} (must be between {min} and {max})")]
    InvalidBoardSize { size: u8, min: u8, max: u8 },

    #[error("Position {coord} is outside the {size}x{size} board")]
    OutOfBounds { coord: Coord, size: u8 },

    #[error("Position {coord} is already occupied")]
    Occupied { coord: Coord },

    #[error("Game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, HexError>;
