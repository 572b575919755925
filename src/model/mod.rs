pub mod coord;
pub mod disease_state;
pub mod error;
pub mod params;
pub mod stats;
pub mod view;

pub use coord::GridCoord;
pub use disease_state::DiseaseState;
pub use error::EngineError;
pub use params::{DiseaseParams, EngineConfig, TickRates};
pub use stats::{Census, StatsSnapshot};
pub use view::CellView;
