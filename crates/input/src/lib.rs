//! Keyboard input mapping for the grid cursor.

pub mod map;

pub use tilegrid_types as types;

pub use map::{handle_key_event, is_move_kind, should_quit};
