use crate::common::GameError;

pub const GRID_SIZE: usize = 4;
/// Largest accepted grid side; keeps `size * size` small and allocation bounded.
pub const MAX_GRID_SIZE: usize = 64;
pub const WIN_TILE: u32 = 2048;
/// Chance that a spawned tile is a 4 instead of a 2.
pub const FOUR_PROBABILITY: f64 = 0.1;
pub const INITIAL_TILES: usize = 2;
/// Number of undo snapshots kept before the oldest is dropped.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Rule set for a single game session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub size: usize,
    pub win_tile: u32,
    pub four_probability: f64,
    pub history_limit: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            win_tile: WIN_TILE,
            four_probability: FOUR_PROBABILITY,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl GameConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_win_tile(mut self, win_tile: u32) -> Self {
        self.win_tile = win_tile;
        self
    }

    pub fn with_four_probability(mut self, p: f64) -> Self {
        self.four_probability = p;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Check that the rule set describes a playable game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.size < 2 {
            return Err(GameError::GridTooSmall { size: self.size });
        }
        if self.size > MAX_GRID_SIZE {
            return Err(GameError::GridTooLarge { size: self.size });
        }
        // a win tile of 2 would be won by the opening spawn
        if self.win_tile < 4 || !self.win_tile.is_power_of_two() {
            return Err(GameError::InvalidWinTile(self.win_tile));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(GameError::InvalidProbability);
        }
        if self.history_limit == 0 {
            return Err(GameError::InvalidHistoryLimit);
        }
        Ok(())
    }
}
