//! Move directions and their mapping onto left-rotations of the grid.

use crate::common::GameError;
use core::fmt;
use core::str::FromStr;

/// Which way the tiles slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Counter-clockwise quarter turns that make this direction a left slide.
    pub const fn rotations(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Turns needed to restore the original orientation afterwards.
    pub const fn inverse_rotations(self) -> usize {
        (4 - self.rotations()) % 4
    }

    /// Numeric code used by external callers (same as the rotation count).
    pub const fn code(self) -> u8 {
        self.rotations() as u8
    }
}

impl TryFrom<u8> for Direction {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Direction::Left),
            1 => Ok(Direction::Up),
            2 => Ok(Direction::Right),
            3 => Ok(Direction::Down),
            other => Err(GameError::InvalidDirection(other)),
        }
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("left") || s.eq_ignore_ascii_case("l") {
            Ok(Direction::Left)
        } else if s.eq_ignore_ascii_case("up") || s.eq_ignore_ascii_case("u") {
            Ok(Direction::Up)
        } else if s.eq_ignore_ascii_case("right") || s.eq_ignore_ascii_case("r") {
            Ok(Direction::Right)
        } else if s.eq_ignore_ascii_case("down") || s.eq_ignore_ascii_case("d") {
            Ok(Direction::Down)
        } else {
            Err(GameError::UnknownDirection)
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}
