//! Commonly used types and utilities for ease of import.

pub use crate::{Direction, GameConfig, GameEngine, GameError, GameState, GameStatus, Grid, MoveOutcome};

#[cfg(feature = "std")]
pub use crate::cli::{parse_command, render, run_session, Command};
