use crate::model::{DiseaseParams, EngineConfig, EngineError, GridCoord};
use crate::sim::{Engine, SeedStage};

/// Fluent builder for hand-placed outbreaks.
///
/// Starts from an all-healthy grid (`initial_infection_rate = 0`) and applies
/// each placement in call order. Used by tests for deterministic fixtures, and
/// by hosts that let the user click a patient zero.
#[derive(Debug, Clone)]
pub struct Scenario {
    config: EngineConfig,
    seeds: Vec<(GridCoord, SeedStage)>,
}

impl Scenario {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            config: EngineConfig::new(rows, columns).with_initial_infection_rate(0.0),
            seeds: Vec::new(),
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn disease(mut self, params: DiseaseParams) -> Self {
        self.config.disease = params;
        self
    }

    pub fn cell_size(mut self, cell_size: f64) -> Self {
        self.config.cell_size = cell_size;
        self
    }

    /// Keep random seeding on top of the placed cells.
    pub fn initial_infection_rate(mut self, rate: f64) -> Self {
        self.config.initial_infection_rate = rate;
        self
    }

    pub fn incubating(mut self, column: u32, row: u32) -> Self {
        self.seeds.push((GridCoord::new(column, row), SeedStage::Incubating));
        self
    }

    pub fn contagious(mut self, column: u32, row: u32) -> Self {
        self.seeds.push((GridCoord::new(column, row), SeedStage::Contagious));
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Build the engine. Placements on already-infected cells are skipped;
    /// placements off the grid fail.
    pub fn build(self) -> Result<Engine, EngineError> {
        let mut engine = Engine::new(self.config)?;
        for (coord, stage) in self.seeds {
            engine.seed_cell(coord, stage)?;
        }
        Ok(engine)
    }
}
