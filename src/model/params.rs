use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Durations that set a cell's timers when it enters a disease stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiseaseParams {
    /// Ticks spent Incubating before becoming Contagious.
    pub incubation_duration: u32,
    /// Ticks spent Contagious before the death/recovery roll.
    pub contagious_duration: u32,
}

impl Default for DiseaseParams {
    fn default() -> Self {
        Self {
            incubation_duration: 2,
            contagious_duration: 3,
        }
    }
}

/// Everything needed to build (or rebuild) an engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub rows: u32,
    pub columns: u32,
    /// Edge length of one cell in screen units. Only used for cell views.
    pub cell_size: f64,
    /// Probability that a cell starts the run already Incubating.
    pub initial_infection_rate: f64,
    pub disease: DiseaseParams,
    /// RNG seed for deterministic runs.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rows: 10,
            columns: 10,
            cell_size: 80.0,
            initial_infection_rate: 0.1,
            disease: DiseaseParams::default(),
            seed: 42,
        }
    }
}

impl EngineConfig {
    pub fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_disease(mut self, disease: DiseaseParams) -> Self {
        self.disease = disease;
        self
    }

    pub fn with_initial_infection_rate(mut self, rate: f64) -> Self {
        self.initial_infection_rate = rate;
        self
    }

    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Number of cells the grid will hold.
    pub fn population(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.rows == 0 {
            return Err(EngineError::InvalidConfiguration("rows must be positive"));
        }
        if self.columns == 0 {
            return Err(EngineError::InvalidConfiguration("columns must be positive"));
        }
        if !self.cell_size.is_finite() || self.cell_size <= 0.0 {
            return Err(EngineError::InvalidConfiguration(
                "cell_size must be a positive finite number",
            ));
        }
        if !is_probability(self.initial_infection_rate) {
            return Err(EngineError::InvalidConfiguration(
                "initial_infection_rate must be between 0.0 and 1.0",
            ));
        }
        Ok(())
    }
}

/// Per-tick probabilities supplied by the host on every step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TickRates {
    /// Chance that a contagious cell infects one healthy neighbour this tick.
    pub transmission_rate: f64,
    /// Chance that a cell at the end of its contagious period dies rather than recovers.
    pub death_rate: f64,
}

impl Default for TickRates {
    fn default() -> Self {
        Self {
            transmission_rate: 0.1,
            death_rate: 0.1,
        }
    }
}

impl TickRates {
    pub fn new(transmission_rate: f64, death_rate: f64) -> Self {
        Self {
            transmission_rate,
            death_rate,
        }
    }

    pub fn is_valid(&self) -> bool {
        is_probability(self.transmission_rate) && is_probability(self.death_rate)
    }

    /// Both rates forced into [0, 1]. NaN becomes 0.
    pub fn clamped(self) -> Self {
        Self {
            transmission_rate: clamp_probability(self.transmission_rate),
            death_rate: clamp_probability(self.death_rate),
        }
    }
}

fn is_probability(p: f64) -> bool {
    (0.0..=1.0).contains(&p)
}

fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
