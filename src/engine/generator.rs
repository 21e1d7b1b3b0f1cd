use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::config::GameConfig;
use crate::engine::grid::Grid;

/// Builds a fresh board: all tiles cleared, `config.mines()` distinct mine
/// tiles drawn uniformly, adjacency numbers filled in.
pub fn generate<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Grid {
    let mut grid = Grid::empty(config.side());
    // Partial Fisher-Yates over cell indices: always terminates, no rejection.
    for i in index::sample(rng, config.cells(), config.mines()).into_iter() {
        grid.tile_mut_at(i).mine = true;
    }
    grid.compute_adjacency();
    debug!(side = config.side(), mines = config.mines(), "board generated");
    grid
}
