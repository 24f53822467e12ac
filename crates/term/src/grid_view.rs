//! GridView: paints the tile map into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use tilegrid_core::{TileMap, Viewport};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

const HINT: &str = "arrows: move   q: quit";

/// Styles for the two tile states plus the footer hint.
pub struct GridView {
    outline: CellStyle,
    highlight: CellStyle,
    hint: CellStyle,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            outline: CellStyle {
                fg: Rgb::new(220, 220, 220),
                bg: Rgb::new(0, 0, 0),
                bold: false,
            },
            highlight: CellStyle {
                fg: Rgb::new(255, 255, 0),
                bg: Rgb::new(0, 0, 0),
                bold: true,
            },
            hint: CellStyle {
                fg: Rgb::new(120, 120, 130),
                bg: Rgb::new(0, 0, 0),
                bold: false,
            },
        }
    }
}

impl GridView {
    /// Render the tile map into an existing framebuffer.
    ///
    /// The active tile is drawn as a solid block, everything else as a box
    /// outline. Tiles too small for an outline (a 1-unit tile is one row
    /// tall) degrade to a dot marker so the grid stays legible on small
    /// terminals.
    pub fn render_into(&self, tiles: &TileMap, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (tile_w, tile_h) = tiles.tile_extent();
        for tile in tiles.tiles() {
            if tile.filled {
                fb.fill_rect(tile.x, tile.y, tile_w, tile_h, '█', self.highlight);
            } else if tile_w >= 2 && tile_h >= 2 {
                fb.stroke_rect(tile.x, tile.y, tile_w, tile_h, self.outline);
            } else {
                fb.fill_rect(tile.x, tile.y, tile_w, tile_h, '·', self.outline);
            }
        }

        self.draw_hint(tiles, viewport, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, tiles: &TileMap, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(tiles, viewport, &mut fb);
        fb
    }

    fn draw_hint(&self, tiles: &TileMap, viewport: Viewport, fb: &mut FrameBuffer) {
        let Some(last) = tiles.tiles().last() else {
            return;
        };

        // Only when the bottom row is clear of the grid.
        let (_, tile_h) = tiles.tile_extent();
        let grid_bottom = last.y.saturating_add(tile_h);
        if grid_bottom >= viewport.height {
            return;
        }

        let x = viewport.width.saturating_sub(HINT.chars().count() as u16) / 2;
        fb.put_str(x, viewport.height - 1, HINT, self.hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid_core::{TileLayout, TileMap};

    #[test]
    fn test_active_tile_is_solid_block() {
        let layout = TileLayout::fit(Viewport::new(90, 45), 15, 15);
        let tiles = TileMap::build(&layout, (7, 7));
        let fb = GridView::default().render(&tiles, Viewport::new(90, 45));

        let (x, y) = layout.cell_origin(7, 7);
        let (tile_w, tile_h) = layout.tile_extent();
        for dy in 0..tile_h {
            for dx in 0..tile_w {
                assert_eq!(fb.get(x + dx, y + dy).unwrap().ch, '█');
            }
        }
    }

    #[test]
    fn test_inactive_tiles_are_outlined() {
        let layout = TileLayout::fit(Viewport::new(90, 45), 15, 15);
        let tiles = TileMap::build(&layout, (7, 7));
        let fb = GridView::default().render(&tiles, Viewport::new(90, 45));

        let (x, y) = layout.cell_origin(0, 0);
        let (tile_w, tile_h) = layout.tile_extent();
        assert_eq!(fb.get(x, y).unwrap().ch, '┌');
        assert_eq!(fb.get(x + tile_w - 1, y).unwrap().ch, '┐');
        assert_eq!(fb.get(x, y + tile_h - 1).unwrap().ch, '└');
        assert_eq!(fb.get(x + tile_w - 1, y + tile_h - 1).unwrap().ch, '┘');
    }

    #[test]
    fn test_one_unit_tiles_degrade_to_dots() {
        // 80x24 terminal: tile = min((80/2)/15, 24/15) = 1.
        let layout = TileLayout::fit(Viewport::new(80, 24), 15, 15);
        assert_eq!(layout.tile(), 1);

        let tiles = TileMap::build(&layout, (7, 7));
        let fb = GridView::default().render(&tiles, Viewport::new(80, 24));

        let (x, y) = layout.cell_origin(0, 0);
        assert_eq!(fb.get(x, y).unwrap().ch, '·');
    }
}
