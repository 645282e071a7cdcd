#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
#[cfg(feature = "std")]
pub mod cli;
mod common;
mod config;
mod direction;
mod game;
mod grid;
mod history;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;

pub use common::*;
pub use config::*;
pub use direction::Direction;
pub use game::{GameEngine, GameState};
pub use grid::{is_tile_value, slide_row, Grid};
pub use history::History;
#[cfg(feature = "std")]
pub use logging::init_logging;
