use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

use crate::error::{ConfigError, UnknownDifficulty};

/// Largest accepted board side. Row and column labels stay two digits wide.
pub const MAX_SIDE: usize = 99;

/// Board dimensions and mine count for one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameConfig {
    side: usize,
    mines: usize,
}

impl GameConfig {
    pub fn new(side: usize, mines: usize) -> Result<Self, ConfigError> {
        if side == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if side > MAX_SIDE {
            return Err(ConfigError::TooLarge { side, max: MAX_SIDE });
        }
        let cells = side * side;
        if mines == 0 || mines >= cells {
            return Err(ConfigError::MineCount { mines, cells });
        }
        Ok(Self { side, mines })
    }

    /// Resolves command-line style options: a preset, or a custom size and mine count.
    pub fn resolve(difficulty: Option<Difficulty>, size: Option<usize>, mines: Option<usize>) -> Result<Option<Self>, ConfigError> {
        match (size, mines) {
            (Some(side), Some(mines)) => Self::new(side, mines).map(Some),
            (None, None) => Ok(difficulty.map(Difficulty::config)),
            _ => Err(ConfigError::IncompleteCustom),
        }
    }

    pub fn side(&self) -> usize { self.side }
    pub fn mines(&self) -> usize { self.mines }
    pub fn cells(&self) -> usize { self.side * self.side }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn config(self) -> GameConfig {
        let (side, mines) = match self {
            Difficulty::Easy => (10, 7),
            Difficulty::Normal => (20, 20),
            Difficulty::Hard => (30, 40),
        };
        GameConfig { side, mines }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.config();
        write!(f, "{}: {} x {} board, {} mines", self.name(), c.side, c.side, c.mines)
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownDifficulty(s.to_string()))
    }
}
