use thiserror::Error;

use super::coord::GridCoord;

/// Errors raised by engine construction and cell lookup.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A constructor or reset parameter is out of its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    /// A lookup addressed a cell outside the lattice.
    #[error("coordinate {coord} is outside the {columns}x{rows} grid")]
    CoordinateOutOfRange {
        coord: GridCoord,
        rows: u32,
        columns: u32,
    },
}
