//! GameConfig - board size, turn order and win rule

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::board::{Player, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::HexError;
use crate::win::WinRule;

/// Settings for one game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side length
    pub board_size: u8,
    /// Player making the first move
    pub first_player: Player,
    /// Algorithm used to decide a win
    pub win_rule: WinRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            first_player: Player::Red,
            win_rule: WinRule::Connectivity,
        }
    }
}

impl GameConfig {
    /// Default config on a board of the given side
    pub fn with_size(board_size: u8) -> Self {
        Self {
            board_size,
            ..Default::default()
        }
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    pub fn with_win_rule(mut self, rule: WinRule) -> Self {
        self.win_rule = rule;
        self
    }

    /// Check that the board size is playable
    pub fn validate(&self) -> Result<(), HexError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            Ok(())
        } else {
            Err(HexError::InvalidBoardSize {
                size: self.board_size,
                min: MIN_BOARD_SIZE,
                max: MAX_BOARD_SIZE,
            })
        }
    }

    /// Parse and validate a JSON config (missing fields take defaults)
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        let config: GameConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }
}
