use serde::{Deserialize, Serialize};

use super::coord::GridCoord;
use super::disease_state::DiseaseState;

/// What a renderer needs to draw one cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellView {
    pub coord: GridCoord,
    pub state: DiseaseState,
    /// Top-left corner in screen units.
    pub screen_position: (f64, f64),
    pub size: f64,
}

impl CellView {
    pub fn new(coord: GridCoord, state: DiseaseState, cell_size: f64) -> Self {
        Self {
            coord,
            state,
            screen_position: (
                coord.column as f64 * cell_size,
                coord.row as f64 * cell_size,
            ),
            size: cell_size,
        }
    }

    /// Whether the point lies inside this cell's square.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        let (left, top) = self.screen_position;
        x >= left && x < left + self.size && y >= top && y < top + self.size
    }
}
