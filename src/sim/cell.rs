use crate::model::{DiseaseParams, DiseaseState, GridCoord};

use super::rng::SimRng;

/// One automaton unit at a fixed lattice position.
///
/// State changes go through the guarded methods below; each one is a no-op when
/// called from the wrong state, which keeps Dead and Immune absorbing.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    position: GridCoord,
    state: DiseaseState,
    incubation_timer: u32,
    contagious_timer: u32,
    /// Arena keys of adjacent cells, in scan order. Fixed after grid build.
    neighbors: Vec<GridCoord>,
}

impl Cell {
    pub fn new(position: GridCoord) -> Self {
        Self {
            position,
            state: DiseaseState::Healthy,
            incubation_timer: 0,
            contagious_timer: 0,
            neighbors: Vec::new(),
        }
    }

    pub fn position(&self) -> GridCoord {
        self.position
    }

    pub fn state(&self) -> DiseaseState {
        self.state
    }

    pub fn neighbors(&self) -> &[GridCoord] {
        &self.neighbors
    }

    /// Remaining incubation ticks. Only meaningful while Incubating.
    pub fn incubation_timer(&self) -> u32 {
        self.incubation_timer
    }

    /// Remaining contagious ticks. Only meaningful while Contagious.
    pub fn contagious_timer(&self) -> u32 {
        self.contagious_timer
    }

    pub(crate) fn set_neighbors(&mut self, neighbors: Vec<GridCoord>) {
        self.neighbors = neighbors;
    }

    /// Healthy → Incubating. Returns false, changing nothing, from any other state.
    pub fn infect(&mut self, params: &DiseaseParams) -> bool {
        if self.state != DiseaseState::Healthy {
            return false;
        }
        self.state = DiseaseState::Incubating;
        self.incubation_timer = params.incubation_duration;
        true
    }

    /// Count down incubation. Returns true on the tick the cell turns Contagious.
    pub fn incubate(&mut self, params: &DiseaseParams) -> bool {
        if self.state != DiseaseState::Incubating {
            return false;
        }
        self.incubation_timer = self.incubation_timer.saturating_sub(1);
        if self.incubation_timer > 0 {
            return false;
        }
        self.enter_contagious(params);
        true
    }

    /// Skip the rest of incubation. Used when placing contagious cells by hand.
    pub fn become_contagious(&mut self, params: &DiseaseParams) -> bool {
        if self.state != DiseaseState::Incubating {
            return false;
        }
        self.incubation_timer = 0;
        self.enter_contagious(params);
        true
    }

    fn enter_contagious(&mut self, params: &DiseaseParams) {
        self.state = DiseaseState::Contagious;
        self.contagious_timer = params.contagious_duration;
    }

    /// Count down the contagious period. Returns true once the final day is
    /// reached; the state itself is left for [`Cell::resolve_outcome`].
    pub fn progress_disease(&mut self) -> bool {
        if self.state != DiseaseState::Contagious {
            return false;
        }
        self.contagious_timer = self.contagious_timer.saturating_sub(1);
        self.contagious_timer == 0
    }

    /// Contagious → Dead (returns true) with probability `death_rate`, otherwise
    /// Contagious → Immune (returns false). No draw is made outside Contagious.
    pub fn resolve_outcome(&mut self, death_rate: f64, rng: &mut SimRng) -> bool {
        if self.state != DiseaseState::Contagious {
            return false;
        }
        let died = rng.chance(death_rate);
        self.state = if died {
            DiseaseState::Dead
        } else {
            DiseaseState::Immune
        };
        self.contagious_timer = 0;
        died
    }
}
