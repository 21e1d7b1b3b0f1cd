//! Board model and turn resolution.

pub mod generator;
pub mod grid;
pub mod reveal;
pub mod session;

pub use generator::generate;
pub use grid::{Coord, Grid, Tile};
pub use reveal::flood_reveal;
pub use session::{Action, ActionKind, GameSession, GameStatus};
