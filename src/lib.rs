pub mod config;
pub mod console;
pub mod engine;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod render;
pub mod tui;
