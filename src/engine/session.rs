use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::generator::generate;
use crate::engine::grid::{Coord, Grid};
use crate::engine::reveal::flood_reveal;
use crate::error::MoveError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionKind {
    Reveal,
    ToggleFlag,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Action {
    pub pos: Coord,
    pub kind: ActionKind,
}

impl Action {
    pub fn reveal(row: usize, col: usize) -> Self {
        Self { pos: Coord::new(row, col), kind: ActionKind::Reveal }
    }

    pub fn flag(row: usize, col: usize) -> Self {
        Self { pos: Coord::new(row, col), kind: ActionKind::ToggleFlag }
    }
}

/// One game from generation to a terminal status. Owns the board.
#[derive(Clone, Debug)]
pub struct GameSession {
    grid: Grid,
    mines: usize,
    status: GameStatus,
    seed: Option<u64>,
}

impl GameSession {
    /// Generates a board from `seed`. A seed of 0 draws a fresh one from entropy.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let seed = if seed == 0 { rand::random::<u64>().max(1) } else { seed };
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = generate(&config, &mut rng);
        info!(side = config.side(), mines = config.mines(), seed, "new game");
        Self { grid, mines: config.mines(), status: GameStatus::InProgress, seed: Some(seed) }
    }

    /// Starts a session on a prepared board (mine layout already fixed).
    pub fn from_grid(grid: Grid) -> Self {
        let mines = grid.mine_count();
        Self { grid, mines, status: GameStatus::InProgress, seed: None }
    }

    pub fn grid(&self) -> &Grid { &self.grid }
    pub fn side(&self) -> usize { self.grid.side() }
    pub fn mines(&self) -> usize { self.mines }
    pub fn status(&self) -> GameStatus { self.status }
    pub fn seed(&self) -> Option<u64> { self.seed }

    pub fn flags_placed(&self) -> usize {
        self.grid.tiles().filter(|(_, t)| t.flagged).count()
    }

    /// Applies one player action. Rejected actions leave the board unchanged.
    pub fn apply(&mut self, action: Action) -> Result<GameStatus, MoveError> {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        let Coord { row, col } = action.pos;
        let size = self.grid.side();
        let tile = self.grid.get_mut(action.pos).ok_or(MoveError::OutOfBounds { row, col, size })?;
        if tile.visible {
            return Err(MoveError::AlreadyVisible);
        }
        match action.kind {
            ActionKind::ToggleFlag => {
                tile.flagged = !tile.flagged;
                debug!(row, col, flagged = tile.flagged, "flag toggled");
                return Ok(self.status);
            }
            ActionKind::Reveal if tile.flagged => return Err(MoveError::Flagged),
            ActionKind::Reveal => {}
        }

        if tile.mine {
            self.grid.reveal_all_mines();
            self.status = GameStatus::Lost;
            info!(row, col, "mine revealed, game lost");
            return Ok(self.status);
        }

        let revealed = flood_reveal(&mut self.grid, action.pos);
        debug!(row, col, revealed, "tiles revealed");

        if self.grid.hidden_count() == self.mines {
            self.status = GameStatus::Won;
            info!("all safe tiles revealed, game won");
        }
        Ok(self.status)
    }
}
