//! Trailing-edge debounce for resize bursts.
//!
//! A drag-resize delivers a stream of resize events, and rebuilding the tile
//! map for each one would thrash the renderer. The rebuild instead waits
//! until the stream has been quiet for a fixed delay: each `schedule`
//! replaces the pending viewport and restarts the clock, so only the last
//! event of a burst ever fires.

use tilegrid_core::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Pending {
    scheduled_at_ms: u64,
    viewport: Viewport,
}

/// Schedule-replace timer over monotonic millisecond timestamps.
///
/// The caller supplies `now_ms`; nothing here reads a clock, which keeps the
/// timing behavior deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeDebounce {
    delay_ms: u64,
    pending: Option<Pending>,
}

impl ResizeDebounce {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    /// Record `viewport` and restart the delay window.
    pub fn schedule(&mut self, now_ms: u64, viewport: Viewport) {
        self.pending = Some(Pending {
            scheduled_at_ms: now_ms,
            viewport,
        });
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Fire once the window has elapsed, yielding the last viewport seen.
    ///
    /// Returns `None` while the window is still open or when nothing is
    /// scheduled. A fire disarms the timer until the next `schedule`.
    pub fn poll(&mut self, now_ms: u64) -> Option<Viewport> {
        let pending = self.pending?;
        if now_ms.saturating_sub(pending.scheduled_at_ms) < self.delay_ms {
            return None;
        }
        self.pending = None;
        Some(pending.viewport)
    }
}
