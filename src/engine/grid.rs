/// Zero-based position on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    pub(crate) mine: bool,
    pub(crate) visible: bool,
    pub(crate) flagged: bool,
    pub(crate) mines_around: u8,
}

impl Tile {
    pub fn is_mine(&self) -> bool { self.mine }
    pub fn is_visible(&self) -> bool { self.visible }
    pub fn is_flagged(&self) -> bool { self.flagged }
    /// Number of mines among the eight neighbours. Always 0 for a mine tile.
    pub fn mines_around(&self) -> u8 { self.mines_around }
}

/// Square matrix of tiles stored row-major in a flat vector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    side: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    /// A board with every tile hidden, clear and unflagged.
    pub fn empty(side: usize) -> Self {
        Self { side, tiles: vec![Tile::default(); side * side] }
    }

    /// Builds a board from an explicit mine layout and computes adjacency.
    /// Positions outside the board are ignored.
    pub fn with_mines(side: usize, mines: &[Coord]) -> Self {
        let mut grid = Self::empty(side);
        for &pos in mines {
            if let Some(tile) = grid.get_mut(pos) {
                tile.mine = true;
            }
        }
        grid.compute_adjacency();
        grid
    }

    pub fn side(&self) -> usize { self.side }

    pub fn contains(&self, pos: Coord) -> bool {
        pos.row < self.side && pos.col < self.side
    }

    pub fn get(&self, pos: Coord) -> Option<&Tile> {
        if self.contains(pos) { self.tiles.get(idx(self.side, pos)) } else { None }
    }

    pub(crate) fn get_mut(&mut self, pos: Coord) -> Option<&mut Tile> {
        if self.contains(pos) { self.tiles.get_mut(idx(self.side, pos)) } else { None }
    }

    pub(crate) fn tile_mut_at(&mut self, index: usize) -> &mut Tile {
        &mut self.tiles[index]
    }

    pub fn positions(&self) -> impl Iterator<Item = Coord> {
        let side = self.side;
        (0..side * side).map(move |i| Coord::new(i / side, i % side))
    }

    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        self.positions().zip(self.tiles.iter())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.side.max(1))
    }

    /// In-bounds positions at Chebyshev distance 1. Never wraps.
    pub fn neighbors(&self, pos: Coord) -> impl Iterator<Item = Coord> {
        let side = self.side;
        let rows = pos.row.saturating_sub(1)..=(pos.row + 1).min(side.saturating_sub(1));
        rows.flat_map(move |r| {
            let cols = pos.col.saturating_sub(1)..=(pos.col + 1).min(side.saturating_sub(1));
            cols.map(move |c| Coord::new(r, c))
        })
        .filter(move |&n| n != pos)
    }

    pub fn mine_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.mine).count()
    }

    pub fn hidden_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.visible).count()
    }

    pub(crate) fn compute_adjacency(&mut self) {
        for pos in self.positions() {
            let i = idx(self.side, pos);
            if self.tiles[i].mine {
                continue;
            }
            let count = self
                .neighbors(pos)
                .filter(|&n| self.tiles[idx(self.side, n)].mine)
                .count();
            self.tiles[i].mines_around = count as u8;
        }
    }

    pub(crate) fn reveal_all_mines(&mut self) {
        for tile in self.tiles.iter_mut().filter(|t| t.mine) {
            tile.visible = true;
        }
    }
}

fn idx(side: usize, pos: Coord) -> usize { pos.row * side + pos.col }
