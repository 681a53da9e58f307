//! Selection cursor over the card grid.
//!
//! Movement clamps at the grid edges. A short last row (never produced by the
//! built-in tiers, but allowed) is handled by clamping to the last card.

use crate::types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardCursor {
    position: usize,
    columns: usize,
    len: usize,
}

impl Default for CardCursor {
    fn default() -> Self {
        Self::new(4, 12)
    }
}

impl CardCursor {
    pub fn new(columns: u8, len: usize) -> Self {
        Self {
            position: 0,
            columns: (columns as usize).max(1),
            len,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// (column, row) of the cursor.
    pub fn cell(&self) -> (usize, usize) {
        (self.position % self.columns, self.position / self.columns)
    }

    /// Adopt a new grid shape, keeping the position when it still fits.
    pub fn resize(&mut self, columns: u8, len: usize) {
        self.columns = (columns as usize).max(1);
        self.len = len;
        if self.position >= len {
            self.position = 0;
        }
    }

    /// Jump to a specific card (e.g. after a mouse click).
    pub fn set_position(&mut self, position: usize) {
        if position < self.len {
            self.position = position;
        }
    }

    pub fn step(&mut self, direction: Direction) {
        if self.len == 0 {
            return;
        }

        let (col, row) = self.cell();
        let last_row = (self.len - 1) / self.columns;
        let target = match direction {
            Direction::Left if col > 0 => self.position - 1,
            Direction::Right if col + 1 < self.columns => self.position + 1,
            Direction::Up if row > 0 => self.position - self.columns,
            Direction::Down if row < last_row => self.position + self.columns,
            _ => self.position,
        };
        self.position = target.min(self.len - 1);
    }
}
