//! Grid cursor - the single highlighted cell and its moves
//!
//! The entire state machine of the application: one cell position with four
//! directional transitions. A step that would leave the grid is ignored and
//! the position stays put.

use crate::types::Direction;

/// Outcome of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The cursor moved; `from` and `to` are the two cells that need a
    /// visual update.
    Moved { from: (u8, u8), to: (u8, u8) },
    /// The step would leave the grid; nothing changed.
    Blocked,
}

impl MoveOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Cursor position on a fixed rows x cols grid.
///
/// Invariant: `row < rows && col < cols` at all times. Candidate positions
/// are bounds-checked before they are committed, so the active cell can
/// never leave the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    rows: u8,
    cols: u8,
    row: u8,
    col: u8,
}

impl GridCursor {
    /// Create a cursor starting at the center cell `(rows/2, cols/2)`.
    pub fn new(rows: u8, cols: u8) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            row: rows / 2,
            col: cols / 2,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Current active cell as `(row, col)`.
    pub fn active(&self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// Step one cell in `direction`.
    ///
    /// Out-of-bounds steps report `Blocked` without raising an error; this
    /// is a silent-ignore policy, not a failure.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let (dr, dc) = direction.delta();
        let row = self.row as i16 + dr;
        let col = self.col as i16 + dc;

        if row < 0 || row >= self.rows as i16 || col < 0 || col >= self.cols as i16 {
            return MoveOutcome::Blocked;
        }

        let from = self.active();
        self.row = row as u8;
        self.col = col as u8;
        MoveOutcome::Moved {
            from,
            to: self.active(),
        }
    }
}
