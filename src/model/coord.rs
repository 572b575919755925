use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a cell on the lattice.
///
/// Field order gives the derived `Ord` its row-major meaning: rows first, then
/// columns. Every deterministic iteration in the engine relies on this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GridCoord {
    pub row: u32,
    pub column: u32,
}

impl GridCoord {
    pub fn new(column: u32, row: u32) -> Self {
        Self { row, column }
    }

    /// Offset by `(dx, dy)`, or `None` if the result would be negative.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        let column = self.column.checked_add_signed(dx)?;
        let row = self.row.checked_add_signed(dy)?;
        Some(Self { row, column })
    }

    /// True if the two coordinates touch horizontally, vertically or diagonally.
    pub fn is_adjacent(self, other: GridCoord) -> bool {
        self != other && self.column.abs_diff(other.column) <= 1 && self.row.abs_diff(other.row) <= 1
    }
}

impl From<(u32, u32)> for GridCoord {
    /// Converts a `(column, row)` pair.
    fn from((column, row): (u32, u32)) -> Self {
        Self::new(column, row)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
