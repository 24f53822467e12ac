//! Encoding tests for the terminal renderer.
//!
//! Real terminal I/O is not exercised here; the encode functions build the
//! byte stream that `TerminalRenderer::draw` would flush.

use tui_tilegrid::core::{TileLayout, TileMap, Viewport};
use tui_tilegrid::term::{encode_diff_into, encode_full_into, FrameBuffer, GridView};

fn grid_frame(vp: Viewport, active: (u8, u8)) -> FrameBuffer {
    let layout = TileLayout::fit(vp, 15, 15);
    let tiles = TileMap::build(&layout, active);
    GridView::default().render(&tiles, vp)
}

#[test]
fn full_encode_emits_output_for_a_grid_frame() {
    let fb = grid_frame(Viewport::new(90, 45), (7, 7));

    let mut out = Vec::new();
    encode_full_into(&fb, &mut out).unwrap();
    assert!(!out.is_empty());
}

#[test]
fn diff_of_identical_frames_is_nearly_empty() {
    let fb = grid_frame(Viewport::new(90, 45), (7, 7));

    let mut full = Vec::new();
    encode_full_into(&fb, &mut full).unwrap();

    let mut diff = Vec::new();
    encode_diff_into(&fb, &fb, &mut diff).unwrap();

    // Only the trailing style reset remains.
    assert!(diff.len() < 32);
    assert!(diff.len() < full.len());
}

#[test]
fn cursor_move_diff_is_much_smaller_than_full_redraw() {
    let before = grid_frame(Viewport::new(90, 45), (7, 7));
    let after = grid_frame(Viewport::new(90, 45), (7, 8));

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();

    // A move repaints two tiles out of 225.
    assert!(!diff.is_empty());
    assert!(diff.len() * 10 < full.len());
}
