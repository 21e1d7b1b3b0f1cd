use std::fmt::Write as _;

use crossterm::style::Stylize;

use crate::engine::{Grid, Tile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStyle {
    Plain,
    Color,
}

/// Text symbol for a tile as the player sees it.
pub fn tile_symbol(tile: &Tile) -> char {
    if !tile.is_visible() {
        if tile.is_flagged() { '!' } else { '-' }
    } else if tile.is_mine() {
        '*'
    } else if tile.mines_around() == 0 {
        ' '
    } else {
        char::from_digit(tile.mines_around() as u32, 10).unwrap_or('?')
    }
}

/// Renders the board with 1-based row and column labels.
pub fn render_board(grid: &Grid, style: RenderStyle) -> String {
    let width = grid.side().to_string().len().max(2);
    let mut s = String::new();
    let _ = write!(s, "{:width$} ", "");
    for col in 1..=grid.side() {
        let _ = write!(s, " {:<width$}", col);
    }
    s.push('\n');

    for (r, row) in grid.rows().enumerate() {
        let _ = write!(s, "{:<width$} ", r + 1);
        for tile in row {
            let sym = tile_symbol(tile);
            s.push(' ');
            match style {
                RenderStyle::Color if sym == '!' => { let _ = write!(s, "{}", sym.yellow().bold()); }
                RenderStyle::Color if sym == '*' => { let _ = write!(s, "{}", sym.red().bold()); }
                _ => s.push(sym),
            }
            s.push_str(&" ".repeat(width - 1));
        }
        s.push('\n');
    }
    s
}
