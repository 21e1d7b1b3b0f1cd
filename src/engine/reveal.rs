use crate::engine::grid::{Coord, Grid};

/// Reveals `start` and floods outward through zero-count tiles.
///
/// Tiles bordering a mine are revealed but do not propagate. A tile is marked
/// visible as it is pushed, so each one enters the stack at most once.
/// Flood-revealed tiles lose any flag they carried. Returns the number of
/// tiles that became visible.
///
/// `start` must be in bounds and must not be a mine.
pub fn flood_reveal(grid: &mut Grid, start: Coord) -> usize {
    let mut revealed = 0;
    let mut stack = Vec::new();
    if mark_visible(grid, start) {
        revealed += 1;
        stack.push(start);
    }
    while let Some(pos) = stack.pop() {
        let zero = grid.get(pos).map_or(false, |t| t.mines_around == 0 && !t.mine);
        if !zero {
            continue;
        }
        for n in grid.neighbors(pos) {
            if mark_visible(grid, n) {
                revealed += 1;
                stack.push(n);
            }
        }
    }
    revealed
}

fn mark_visible(grid: &mut Grid, pos: Coord) -> bool {
    match grid.get_mut(pos) {
        Some(tile) if !tile.visible => {
            tile.visible = true;
            tile.flagged = false;
            true
        }
        _ => false,
    }
}
