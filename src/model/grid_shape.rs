use serde::{Deserialize, Serialize};

/// Board layout in columns and rows. `cols * rows` is the slot count; the
/// deck builder fills `floor(slots / 2)` pairs, so an odd grid simply
/// leaves its last slot empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub cols: u32,
    pub rows: u32,
}

impl GridShape {
    /// Substituted whenever a configured shape is missing or degenerate.
    pub const FALLBACK: GridShape = GridShape { cols: 4, rows: 3 };

    pub fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    pub fn total_slots(&self) -> usize {
        (self.cols as usize) * (self.rows as usize)
    }

    pub fn needed_pairs(&self) -> usize {
        self.total_slots() / 2
    }

    pub fn is_valid(&self) -> bool {
        self.cols > 0 && self.rows > 0
    }

    pub fn or_fallback(self) -> GridShape {
        if self.is_valid() {
            self
        } else {
            GridShape::FALLBACK
        }
    }
}
