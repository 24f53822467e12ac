//! Core grid model - pure, deterministic, and testable
//!
//! This crate holds everything the application knows about the grid without
//! touching a terminal: the cursor state machine, the tile geometry math,
//! and the tile map of cell visual handles. It has **zero dependencies** on
//! UI or I/O, so every rule here is unit-testable.
//!
//! # Module Structure
//!
//! - [`grid`]: the cursor - a single highlighted cell with four moves,
//!   bounds-checked before commit
//! - [`geometry`]: fits the grid into a viewport (tile edge, centering
//!   offsets), recomputed on every accepted resize
//! - [`tiles`]: one visual handle per cell, row-major with O(1) lookup,
//!   rebuilt wholesale when the layout changes
//!
//! # Example
//!
//! ```
//! use tilegrid_core::{GridCursor, MoveOutcome, TileLayout, TileMap, Viewport};
//! use tilegrid_types::Direction;
//!
//! let mut cursor = GridCursor::new(15, 15);
//! let layout = TileLayout::fit(Viewport::new(90, 45), 15, 15);
//! let mut tiles = TileMap::build(&layout, cursor.active());
//!
//! if let MoveOutcome::Moved { from, to } = cursor.step(Direction::Right) {
//!     tiles.apply_move(from, to);
//! }
//! assert_eq!(tiles.filled_cells(), vec![cursor.active()]);
//! ```

pub mod geometry;
pub mod grid;
pub mod tiles;

pub use tilegrid_types as types;

// Re-export commonly used types for convenience
pub use geometry::{TileLayout, Viewport};
pub use grid::{GridCursor, MoveOutcome};
pub use tiles::{Tile, TileMap};
