//! Common types for 2048: engine errors and move outcomes.

/// Result of applying a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// The grid differs from the pre-move grid.
    pub changed: bool,
    /// A tile equal to the win tile is on the grid after the move.
    pub won: bool,
    /// No empty cell and no adjacent equal pair remain.
    pub game_over: bool,
    /// Score added by merges during this move.
    pub gained: u64,
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Broad category of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Undo was requested with nothing to revert.
    EmptyHistory,
    /// Caller supplied a value outside the accepted domain.
    InvalidArgument,
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No earlier state to return to.
    EmptyHistory,
    /// Direction code outside `0..=3`.
    InvalidDirection(u8),
    /// Direction name not recognised.
    UnknownDirection,
    /// Grid side shorter than two cells.
    GridTooSmall { size: usize },
    /// Grid side above `MAX_GRID_SIZE`.
    GridTooLarge { size: usize },
    /// A row whose length differs from the number of rows.
    NotSquare { row: usize, len: usize, expected: usize },
    /// Row or column index is outside the grid.
    OutOfBounds { row: usize, col: usize },
    /// Cell value that is neither zero nor a power of two of at least 2.
    InvalidTile { row: usize, col: usize, value: u32 },
    /// Restored grid does not match the configured size.
    SizeMismatch { expected: usize, actual: usize },
    /// Win tile must be a power of two of at least 4.
    InvalidWinTile(u32),
    /// Spawn probability outside `[0, 1]`.
    InvalidProbability,
    /// History must keep at least one snapshot.
    InvalidHistoryLimit,
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::EmptyHistory => ErrorKind::EmptyHistory,
            _ => ErrorKind::InvalidArgument,
        }
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::EmptyHistory => write!(f, "Nothing to undo"),
            GameError::InvalidDirection(code) => {
                write!(f, "Invalid direction code {} (expected 0..=3)", code)
            }
            GameError::UnknownDirection => write!(f, "Unknown direction name"),
            GameError::GridTooSmall { size } => {
                write!(f, "Grid size {} is too small (minimum 2)", size)
            }
            GameError::GridTooLarge { size } => write!(
                f,
                "Grid size {} is too large (maximum {})",
                size,
                crate::config::MAX_GRID_SIZE
            ),
            GameError::NotSquare { row, len, expected } => write!(
                f,
                "Row {} has {} cells, expected {}",
                row, len, expected
            ),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Cell ({}, {}) is outside the grid", row, col)
            }
            GameError::InvalidTile { row, col, value } => write!(
                f,
                "Cell ({}, {}) holds {}, which is not a tile value",
                row, col, value
            ),
            GameError::SizeMismatch { expected, actual } => write!(
                f,
                "Grid size {} does not match configured size {}",
                actual, expected
            ),
            GameError::InvalidWinTile(v) => {
                write!(f, "Win tile {} is not a power of two of at least 4", v)
            }
            GameError::InvalidProbability => write!(f, "Probability must be within [0, 1]"),
            GameError::InvalidHistoryLimit => write!(f, "History limit must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
