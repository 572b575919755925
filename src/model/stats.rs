use serde::{Deserialize, Serialize};

use super::disease_state::DiseaseState;

/// Read-only view of the engine's aggregate counters after a tick.
///
/// `infected` counts cells currently Incubating or Contagious, not everyone who
/// ever caught the disease.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub total_population: u64,
    pub infected: u64,
    pub contagious: u64,
    pub dead: u64,
    pub immune: u64,
    pub day: u64,
}

impl StatsSnapshot {
    pub fn incubating(&self) -> u64 {
        self.infected.saturating_sub(self.contagious)
    }

    pub fn healthy(&self) -> u64 {
        self.total_population
            .saturating_sub(self.infected + self.dead + self.immune)
    }

    /// Cells that have left the healthy state at some point. Nothing returns to
    /// Healthy, so this is recoverable from the current counters.
    pub fn ever_infected(&self) -> u64 {
        self.infected + self.dead + self.immune
    }
}

/// Per-state head count produced by a full scan of the population.
///
/// Independent of the incrementally maintained counters, so the two can be
/// checked against each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Census {
    pub healthy: u64,
    pub incubating: u64,
    pub contagious: u64,
    pub dead: u64,
    pub immune: u64,
}

impl Census {
    pub fn record(&mut self, state: DiseaseState) {
        match state {
            DiseaseState::Healthy => self.healthy += 1,
            DiseaseState::Incubating => self.incubating += 1,
            DiseaseState::Contagious => self.contagious += 1,
            DiseaseState::Dead => self.dead += 1,
            DiseaseState::Immune => self.immune += 1,
        }
    }

    pub fn count(&self, state: DiseaseState) -> u64 {
        match state {
            DiseaseState::Healthy => self.healthy,
            DiseaseState::Incubating => self.incubating,
            DiseaseState::Contagious => self.contagious,
            DiseaseState::Dead => self.dead,
            DiseaseState::Immune => self.immune,
        }
    }

    pub fn active(&self) -> u64 {
        self.incubating + self.contagious
    }

    pub fn total(&self) -> u64 {
        self.healthy + self.incubating + self.contagious + self.dead + self.immune
    }

    /// True if the counters in `stats` agree with this census.
    pub fn matches(&self, stats: &StatsSnapshot) -> bool {
        self.total() == stats.total_population
            && self.active() == stats.infected
            && self.contagious == stats.contagious
            && self.dead == stats.dead
            && self.immune == stats.immune
    }
}

impl FromIterator<DiseaseState> for Census {
    fn from_iter<I: IntoIterator<Item = DiseaseState>>(iter: I) -> Self {
        let mut census = Census::default();
        for state in iter {
            census.record(state);
        }
        census
    }
}
