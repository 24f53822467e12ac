//! GridScene: the bridge between events and the grid model.
//!
//! Everything the event loop mutates lives here as an explicit field: the
//! cursor, the tile layout and map, and the resize debounce. Handlers take
//! `&mut self`; there is no module-level state.

use log::{debug, trace};

use tilegrid_core::{GridCursor, MoveOutcome, TileLayout, TileMap, Viewport};
use tilegrid_types::{Direction, GridConfig};

use crate::debounce::ResizeDebounce;
use crate::fb::FrameBuffer;
use crate::grid_view::GridView;

pub struct GridScene {
    cursor: GridCursor,
    layout: TileLayout,
    tiles: TileMap,
    debounce: ResizeDebounce,
    viewport: Viewport,
    view: GridView,
}

impl GridScene {
    /// Build the scene for the current viewport: full tile map with the
    /// center cell highlighted.
    pub fn new(config: GridConfig, viewport: Viewport) -> Self {
        let cursor = GridCursor::new(config.rows, config.cols);
        let layout = TileLayout::fit(viewport, config.rows, config.cols);
        let tiles = TileMap::build(&layout, cursor.active());
        debug!(
            "scene init: {}x{} grid in {}x{} viewport, tile edge {}",
            config.rows,
            config.cols,
            viewport.width,
            viewport.height,
            layout.tile()
        );

        Self {
            cursor,
            layout,
            tiles,
            debounce: ResizeDebounce::new(config.debounce_ms),
            viewport,
            view: GridView::default(),
        }
    }

    /// Apply a cursor move. Returns true when the frame changed.
    ///
    /// A blocked move is a silent no-op, matching the cursor contract.
    pub fn on_direction(&mut self, direction: Direction) -> bool {
        match self.cursor.step(direction) {
            MoveOutcome::Moved { from, to } => {
                trace!("cursor {}: {:?} -> {:?}", direction.as_str(), from, to);
                self.tiles.apply_move(from, to);
                true
            }
            MoveOutcome::Blocked => {
                trace!("cursor {}: blocked at {:?}", direction.as_str(), self.cursor.active());
                false
            }
        }
    }

    /// Record a resize event. The rebuild runs from `poll_rebuild` once the
    /// burst has quiesced.
    pub fn on_resize(&mut self, now_ms: u64, viewport: Viewport) {
        self.debounce.schedule(now_ms, viewport);
    }

    /// Rebuild the tile map if the debounce window has elapsed.
    ///
    /// The map is replaced wholesale from a fresh layout; the active cell
    /// carries over. Returns true when a rebuild happened (the caller must
    /// then invalidate the renderer).
    pub fn poll_rebuild(&mut self, now_ms: u64) -> bool {
        let Some(viewport) = self.debounce.poll(now_ms) else {
            return false;
        };

        self.viewport = viewport;
        self.layout = TileLayout::fit(viewport, self.cursor.rows(), self.cursor.cols());
        self.tiles = TileMap::build(&self.layout, self.cursor.active());
        debug!(
            "rebuilt {} tiles for {}x{} viewport, tile edge {}",
            self.tiles.len(),
            viewport.width,
            viewport.height,
            self.layout.tile()
        );
        true
    }

    /// Paint the current tile map.
    pub fn render_into(&self, fb: &mut FrameBuffer) {
        self.view.render_into(&self.tiles, self.viewport, fb);
    }

    pub fn active(&self) -> (u8, u8) {
        self.cursor.active()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn layout(&self) -> &TileLayout {
        &self.layout
    }

    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    pub fn resize_pending(&self) -> bool {
        self.debounce.is_armed()
    }
}
