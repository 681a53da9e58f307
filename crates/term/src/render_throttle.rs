//! Frame pacing for a mostly static screen.
//!
//! The memory board only changes when the engine emits commands or the cursor
//! moves, so frames are skipped until the fingerprint changes. A periodic
//! refresh still repaints anything another process scribbled over.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    refresh_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    dirty: bool,
}

impl RenderThrottle {
    pub fn new(refresh_interval_ms: u64) -> Self {
        Self {
            refresh_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            dirty: true,
        }
    }

    /// Force the next call to render (resize, focus regained).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Decide whether to render a frame now.
    ///
    /// Renders on the first call, after `mark_dirty`, whenever the fingerprint
    /// changes, and otherwise at most once per refresh interval.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let due = self.dirty
            || fingerprint != self.last_fingerprint
            || now_ms.saturating_sub(self.last_render_ms) >= self.refresh_interval_ms;

        if due {
            self.dirty = false;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
        }
        due
    }
}

/// Combine the board view revision and cursor position into one fingerprint.
pub fn frame_fingerprint(revision: u64, cursor: usize, viewport: (u16, u16)) -> u64 {
    revision
        .wrapping_mul(0x100000001b3)
        .wrapping_add((cursor as u64) << 32)
        .wrapping_add(((viewport.0 as u64) << 16) | viewport.1 as u64)
}
