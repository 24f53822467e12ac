//! Terminal tile grid (workspace facade crate).
//!
//! This package keeps the `tui_tilegrid::{core,input,term,types}` public API
//! stable while the implementation lives in dedicated crates under
//! `crates/`. The binary-only `cli` module also lives here so the argument
//! parsing stays testable.

pub mod cli;

pub use tilegrid_core as core;
pub use tilegrid_input as input;
pub use tilegrid_term as term;
pub use tilegrid_types as types;
