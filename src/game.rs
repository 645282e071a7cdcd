use crate::{
    common::{GameError, GameStatus, MoveOutcome},
    config::{GameConfig, INITIAL_TILES},
    direction::Direction,
    grid::Grid,
    history::History,
};
use core::fmt;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Grid and score at one point in a game. Used for undo snapshots and as the
/// payload for saving and restoring a session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub grid: Grid,
    pub score: u64,
}

/// Core game logic: the grid, score, undo history and the tile spawner.
///
/// The random number generator is the only source of randomness, so two
/// engines built from the same seed and fed the same moves stay identical.
pub struct GameEngine<R: Rng = SmallRng> {
    config: GameConfig,
    grid: Grid,
    score: u64,
    history: History,
    rng: R,
}

impl GameEngine<SmallRng> {
    /// Standard 4×4 game with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::start(GameConfig::default(), SmallRng::seed_from_u64(seed))
    }

    /// Custom rules with a fixed seed.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, GameError> {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }

    /// Custom rules seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn from_entropy(config: GameConfig) -> Result<Self, GameError> {
        let mut seed_rng = rand::rng();
        Self::new(config, SmallRng::from_rng(&mut seed_rng))
    }
}

impl<R: Rng> GameEngine<R> {
    /// Validate `config` and start a fresh game with two random tiles.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self::start(config, rng))
    }

    /// Resume a saved game. History starts empty.
    pub fn from_state(state: GameState, config: GameConfig, rng: R) -> Result<Self, GameError> {
        config.validate()?;
        let mut engine = Self::empty(config, rng);
        engine.restore(state)?;
        Ok(engine)
    }

    fn empty(config: GameConfig, rng: R) -> Self {
        Self {
            grid: Grid::new(config.size),
            score: 0,
            history: History::new(config.history_limit),
            rng,
            config,
        }
    }

    fn start(config: GameConfig, rng: R) -> Self {
        let mut engine = Self::empty(config, rng);
        engine.reset();
        engine
    }

    /// Clear the grid, score and history, then place the opening tiles.
    pub fn reset(&mut self) {
        self.grid = Grid::new(self.config.size);
        self.score = 0;
        self.history.clear();
        for _ in 0..INITIAL_TILES {
            self.spawn_random_tile();
        }
        log::debug!("new game on a {0}x{0} grid", self.config.size);
    }

    /// Slide all tiles in `direction`.
    ///
    /// A move that leaves the grid unchanged is a no-op: score, history and
    /// grid are untouched and no tile is spawned. Otherwise the previous
    /// state is pushed onto the undo history and one random tile is spawned.
    pub fn apply_move(&mut self, direction: Direction) -> MoveOutcome {
        let (shifted, gained) = self.grid.shift(direction);
        if shifted == self.grid {
            log::debug!("move {} changed nothing", direction);
            return MoveOutcome::default();
        }

        let previous = core::mem::replace(&mut self.grid, shifted);
        self.history.push(GameState {
            grid: previous,
            score: self.score,
        });
        self.score += gained;
        self.spawn_random_tile();

        let outcome = MoveOutcome {
            changed: true,
            won: self.check_win(),
            game_over: self.is_game_over(),
            gained,
        };
        log::debug!(
            "move {} gained {} (score {}, won {}, game over {})",
            direction,
            gained,
            self.score,
            outcome.won,
            outcome.game_over
        );
        outcome
    }

    /// Apply a move given as a numeric code (0 left, 1 up, 2 right, 3 down).
    pub fn apply_move_code(&mut self, code: u8) -> Result<MoveOutcome, GameError> {
        let direction = Direction::try_from(code)?;
        Ok(self.apply_move(direction))
    }

    /// Place a 2 (or, with the configured probability, a 4) on a uniformly
    /// chosen empty cell. Returns the placed tile, or `None` when the grid is
    /// full.
    pub fn spawn_random_tile(&mut self) -> Option<(usize, usize, u32)> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[self.rng.random_range(0..empty.len())];
        let value = if self.rng.random_bool(self.config.four_probability) {
            4
        } else {
            2
        };
        self.grid.set(row, col, value).ok()?;
        log::trace!("spawned {} at ({}, {})", value, row, col);
        Some((row, col, value))
    }

    /// Revert the most recent move that changed the grid.
    pub fn undo(&mut self) -> Result<(), GameError> {
        let state = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.grid = state.grid;
        self.score = state.score;
        log::debug!("undo to score {}", self.score);
        Ok(())
    }

    /// Replace the current grid and score with a saved state and forget the
    /// undo history.
    pub fn restore(&mut self, state: GameState) -> Result<(), GameError> {
        state.grid.validate()?;
        if state.grid.size() != self.config.size {
            return Err(GameError::SizeMismatch {
                expected: self.config.size,
                actual: state.grid.size(),
            });
        }
        self.grid = state.grid;
        self.score = state.score;
        self.history.clear();
        Ok(())
    }

    /// Snapshot of the current grid and score.
    pub fn state(&self) -> GameState {
        GameState {
            grid: self.grid.clone(),
            score: self.score,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    /// Returns `true` when the win tile is on the grid.
    pub fn check_win(&self) -> bool {
        self.grid.contains(self.config.win_tile)
    }

    /// Returns `true` when no move can change the grid.
    pub fn is_game_over(&self) -> bool {
        self.grid.is_game_over()
    }

    /// Evaluate the current game status. A win takes precedence.
    pub fn status(&self) -> GameStatus {
        if self.check_win() {
            GameStatus::Won
        } else if self.is_game_over() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }
}

impl<R: Rng> fmt::Debug for GameEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("score", &self.score)
            .field("history", &self.history.len())
            .finish()
    }
}
