mod cell;
mod engine;
mod grid;
mod rng;
mod runner;

pub use cell::Cell;
pub use engine::{Engine, SeedStage};
pub use grid::Grid;
pub use rng::SimRng;
pub use runner::{Control, RunConfig, RunReport, Stepper, run};
