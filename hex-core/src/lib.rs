//! Hex Core - Board topology and win detection
//!
//! This crate provides the core logic for the connection game Hex:
//! - Board geometry (square array with hex adjacency)
//! - Adjacency map built once per game
//! - Win detection (connectivity search, plus the legacy frontier search)
//! - Game state with move validation
//! - Text rendering of the board

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod topology;
pub mod win;

// Re-exports for convenient access
pub use board::{Board, Cell, Coord, Player, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use config::GameConfig;
pub use error::HexError;
pub use game::{Game, GameResult};
pub use render::render_board;
pub use topology::{build_adjacency, AdjacencyMap, CellRegion};
pub use win::{has_won, has_won_with, winning_path, WinRule};
