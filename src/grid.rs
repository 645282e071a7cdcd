//! Square tile grid and the pure slide/merge algorithms.
//!
//! A grid is an `N×N` matrix of tile values stored row-major. Zero marks an
//! empty cell; every other cell holds a power of two. All transformations
//! here return new values and never touch engine state, so the engine can
//! compare the pre-move and post-move grids structurally.

use crate::common::GameError;
use crate::config::MAX_GRID_SIZE;
use crate::direction::Direction;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

/// `true` for zero or a power of two of at least 2.
#[inline]
pub fn is_tile_value(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// Two tiles merge when equal, non-empty, and their sum still fits in a `u32`.
#[inline]
fn merges_with(tile: u32, other: u32) -> Option<u32> {
    if tile != 0 && tile == other {
        tile.checked_mul(2)
    } else {
        None
    }
}

/// Range check shared by every constructor that takes a side length.
fn check_size(size: usize) -> Result<(), GameError> {
    if size < 2 {
        Err(GameError::GridTooSmall { size })
    } else if size > MAX_GRID_SIZE {
        Err(GameError::GridTooLarge { size })
    } else {
        Ok(())
    }
}

/// Slide one row toward index 0, merging equal neighbours once.
///
/// Returns the new row (padded with zeros to the input width) and the score
/// gained from merges. A tile produced by a merge never merges again in the
/// same pass, so `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`.
pub fn slide_row(row: &[u32]) -> (Vec<u32>, u64) {
    let mut out = Vec::with_capacity(row.len());
    let mut gained = 0u64;
    let mut tiles = row.iter().copied().filter(|&v| v != 0).peekable();

    while let Some(tile) = tiles.next() {
        // tiles at the top bit cannot grow further, so they never merge
        match tiles.peek().and_then(|&next| merges_with(tile, next)) {
            Some(merged) => {
                tiles.next();
                gained += u64::from(merged);
                out.push(merged);
            }
            None => out.push(tile),
        }
    }

    out.resize(row.len(), 0);
    (out, gained)
}

/// An `N×N` grid of tiles.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: usize,
    cells: Vec<u32>,
}

impl Grid {
    /// Create an all-empty grid without checking the size. Callers pass a
    /// size already accepted by `GameConfig::validate`.
    pub fn new(size: usize) -> Self {
        Grid {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Fallible constructor: rejects sizes outside `2..=MAX_GRID_SIZE`.
    pub fn try_new(size: usize) -> Result<Self, GameError> {
        check_size(size)?;
        Ok(Self::new(size))
    }

    /// Build a grid from explicit rows, validating shape and tile values.
    pub fn from_rows<R: AsRef<[u32]>>(rows: &[R]) -> Result<Self, GameError> {
        let size = rows.len();
        check_size(size)?;
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GameError::NotSquare {
                    row: r,
                    len: row.len(),
                    expected: size,
                });
            }
            cells.extend_from_slice(row);
        }
        let grid = Grid { size, cells };
        grid.validate()?;
        Ok(grid)
    }

    /// Check shape and tile values, e.g. after deserialising.
    pub fn validate(&self) -> Result<(), GameError> {
        check_size(self.size)?;
        let expected = self.size.checked_mul(self.size);
        if expected != Some(self.cells.len()) {
            return Err(GameError::NotSquare {
                row: self.cells.len() / self.size,
                len: self.cells.len() % self.size,
                expected: self.size,
            });
        }
        for (idx, &value) in self.cells.iter().enumerate() {
            if !is_tile_value(value) {
                return Err(GameError::InvalidTile {
                    row: idx / self.size,
                    col: idx % self.size,
                    value,
                });
            }
        }
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.cells[row * self.size + col])
    }

    /// Write a tile value at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<(), GameError> {
        if row >= self.size || col >= self.size {
            return Err(GameError::OutOfBounds { row, col });
        }
        if !is_tile_value(value) {
            return Err(GameError::InvalidTile { row, col, value });
        }
        self.cells[row * self.size + col] = value;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        self.rows().map(|r| r.to_vec()).collect()
    }

    /// Coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(idx, _)| (idx / self.size, idx % self.size))
            .collect()
    }

    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    pub fn contains(&self, tile: u32) -> bool {
        self.cells.contains(&tile)
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles on the grid.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// `true` if two horizontally or vertically adjacent cells hold tiles
    /// that a slide would merge.
    pub fn has_adjacent_pair(&self) -> bool {
        let n = self.size;
        for r in 0..n {
            for c in 0..n {
                let v = self.cells[r * n + c];
                if c + 1 < n && merges_with(v, self.cells[r * n + c + 1]).is_some() {
                    return true;
                }
                if r + 1 < n && merges_with(v, self.cells[(r + 1) * n + c]).is_some() {
                    return true;
                }
            }
        }
        false
    }

    /// No empty cell and no adjacent equal pair: no move can change the grid.
    pub fn is_game_over(&self) -> bool {
        self.count_empty() == 0 && !self.has_adjacent_pair()
    }

    /// Quarter turn counter-clockwise: `new[i][j] = old[j][N-1-i]`.
    pub fn rotate_left(&self) -> Grid {
        let n = self.size;
        let mut cells = vec![0; n * n];
        for i in 0..n {
            for j in 0..n {
                cells[i * n + j] = self.cells[j * n + (n - 1 - i)];
            }
        }
        Grid { size: n, cells }
    }

    /// Apply [`Grid::rotate_left`] `turns` times (mod 4).
    pub fn rotate_left_n(&self, turns: usize) -> Grid {
        let mut grid = self.clone();
        for _ in 0..turns % 4 {
            grid = grid.rotate_left();
        }
        grid
    }

    /// Slide every row left, returning the new grid and the merge gain.
    pub fn slide_left(&self) -> (Grid, u64) {
        let mut cells = Vec::with_capacity(self.cells.len());
        let mut gained = 0;
        for row in self.rows() {
            let (slid, g) = slide_row(row);
            cells.extend(slid);
            gained += g;
        }
        (
            Grid {
                size: self.size,
                cells,
            },
            gained,
        )
    }

    /// Slide the whole grid in `direction` by rotating it so the move becomes
    /// a left slide, then rotating back.
    pub fn shift(&self, direction: Direction) -> (Grid, u64) {
        let (slid, gained) = self.rotate_left_n(direction.rotations()).slide_left();
        (slid.rotate_left_n(direction.inverse_rotations()), gained)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut width = 1;
        let mut max = self.max_tile();
        while max >= 10 {
            width += 1;
            max /= 10;
        }
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, &v) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if v == 0 {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", v, width = width)?;
                }
            }
        }
        Ok(())
    }
}
