//! Tile map - one visual handle per grid cell
//!
//! Each `Tile` is tagged with its grid coordinates and its top-left terminal
//! position, mirroring what the view needs to paint it. The whole map is
//! discarded and rebuilt on every accepted resize; there is no incremental
//! diffing across layouts.
//!
//! Lookup is a direct row-major index, so the in-bounds invariant is
//! enforced structurally. An out-of-range lookup is a programming error and
//! panics.

use arrayvec::ArrayVec;

use crate::geometry::TileLayout;

/// A single drawable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub row: u8,
    pub col: u8,
    /// Top-left terminal cell at build time.
    pub x: u16,
    pub y: u16,
    /// Drawn filled (the active cell) or outlined.
    pub filled: bool,
}

/// Row-major tile store with O(1) cell lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    rows: u8,
    cols: u8,
    /// Tile footprint in terminal cells, captured from the layout.
    tile_w: u16,
    tile_h: u16,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Build one tile per grid cell; the tile at `active` starts filled,
    /// every other tile outlined.
    pub fn build(layout: &TileLayout, active: (u8, u8)) -> Self {
        let rows = layout.rows();
        let cols = layout.cols();
        let (tile_w, tile_h) = layout.tile_extent();

        let mut tiles = Vec::with_capacity(rows as usize * cols as usize);
        for row in 0..rows {
            for col in 0..cols {
                let (x, y) = layout.cell_origin(row, col);
                tiles.push(Tile {
                    row,
                    col,
                    x,
                    y,
                    filled: (row, col) == active,
                });
            }
        }

        Self {
            rows,
            cols,
            tile_w,
            tile_h,
            tiles,
        }
    }

    fn index(&self, row: u8, col: u8) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "tile lookup out of range: ({}, {}) on {}x{}",
            row,
            col,
            self.rows,
            self.cols
        );
        row as usize * self.cols as usize + col as usize
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile footprint in terminal cells: `(columns, rows)`.
    pub fn tile_extent(&self) -> (u16, u16) {
        (self.tile_w, self.tile_h)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, row: u8, col: u8) -> &Tile {
        &self.tiles[self.index(row, col)]
    }

    /// The two-cell visual update for a cursor move: clear the fill on
    /// `from`, set it on `to`. Returns the updated tiles, old cell first.
    pub fn apply_move(&mut self, from: (u8, u8), to: (u8, u8)) -> ArrayVec<Tile, 2> {
        let i = self.index(from.0, from.1);
        self.tiles[i].filled = false;
        let j = self.index(to.0, to.1);
        self.tiles[j].filled = true;

        let mut updated = ArrayVec::new();
        updated.push(self.tiles[i]);
        updated.push(self.tiles[j]);
        updated
    }

    /// Cells currently drawn filled. The grid invariant keeps this at
    /// exactly one entry; tests assert on it.
    pub fn filled_cells(&self) -> Vec<(u8, u8)> {
        self.tiles
            .iter()
            .filter(|t| t.filled)
            .map(|t| (t.row, t.col))
            .collect()
    }
}
