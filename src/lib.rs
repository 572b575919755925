pub mod flush;
pub mod model;
pub mod scenario;
pub mod sim;

#[cfg(test)]
pub(crate) mod testutil;

pub use model::{
    Census, CellView, DiseaseParams, DiseaseState, EngineConfig, EngineError, GridCoord,
    StatsSnapshot, TickRates,
};
pub use scenario::Scenario;
pub use sim::{Cell, Control, Engine, RunConfig, RunReport, SeedStage, Stepper, run};
