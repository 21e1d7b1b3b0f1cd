use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board side size must be positive")]
    ZeroSize,

    #[error("board side size {side} is larger than the maximum of {max}")]
    TooLarge { side: usize, max: usize },

    #[error("number of mines must be between 1 and {} (got {mines} on {cells} tiles)", .cells - 1)]
    MineCount { mines: usize, cells: usize },

    #[error("a custom board needs both --size and --mines")]
    IncompleteCustom,
}

/// A rejected action. The board is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("tile ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("this tile is already clear")]
    AlreadyVisible,

    #[error("this tile is flagged")]
    Flagged,

    #[error("the game is already over")]
    GameOver,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{token}' is not a number between 1 and {size}")]
    Coordinate { token: String, size: usize },

    #[error("expected 'row col' or 'f row col'")]
    Arity,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown difficulty '{0}'")]
pub struct UnknownDifficulty(pub String);
