//! Game state: board, turn order and result

use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, Player};
use crate::config::GameConfig;
use crate::error::{HexError, Result};
use crate::topology::{build_adjacency, AdjacencyMap};
use crate::win::{has_won_with, winning_path};

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    RedWins,
    BlueWins,
}

impl GameResult {
    pub fn win_for(player: Player) -> Self {
        match player {
            Player::Red => GameResult::RedWins,
            Player::Blue => GameResult::BlueWins,
        }
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Ongoing => None,
            GameResult::RedWins => Some(Player::Red),
            GameResult::BlueWins => Some(Player::Blue),
        }
    }
}

/// One game in progress
///
/// Owns the board and the adjacency map, which is built once here and shared
/// by every win check.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    adjacency: AdjacencyMap,
    current_player: Player,
    result: GameResult,
    moves_played: u32,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let board = Board::new(config.board_size)?;
        let adjacency = build_adjacency(config.board_size);

        tracing::debug!(
            size = config.board_size,
            first = %config.first_player,
            rule = %config.win_rule,
            "New game"
        );

        Ok(Self {
            current_player: config.first_player,
            config,
            board,
            adjacency,
            result: GameResult::Ongoing,
            moves_played: 0,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn adjacency(&self) -> &AdjacencyMap {
        &self.adjacency
    }

    /// Player to move next
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    pub fn moves_played(&self) -> u32 {
        self.moves_played
    }

    /// Winning chain, once the game is decided
    pub fn winning_path(&self) -> Option<Vec<Coord>> {
        let winner = self.winner()?;
        winning_path(&self.board, &self.adjacency, winner)
    }

    // ========================================================================
    // MOVES
    // ========================================================================

    /// Place the current player's stone and check whether it wins
    ///
    /// Only the mover is checked: a new stone cannot complete the
    /// opponent's chain.
    pub fn play(&mut self, coord: Coord) -> Result<GameResult> {
        if self.result != GameResult::Ongoing {
            return Err(HexError::GameOver);
        }

        let mover = self.current_player;
        self.board.place(coord, mover)?;
        self.moves_played += 1;
        tracing::debug!(player = %mover, %coord, moves = self.moves_played, "Move applied");

        if has_won_with(&self.board, &self.adjacency, mover, self.config.win_rule) {
            self.result = GameResult::win_for(mover);
            tracing::info!(winner = %mover, moves = self.moves_played, "Game won");
        } else {
            self.current_player = mover.opponent();
        }

        Ok(self.result)
    }
}
