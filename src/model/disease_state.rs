use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a cell.
///
/// Allowed edges: Healthy → Incubating → Contagious → {Dead, Immune}.
/// Dead and Immune are absorbing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseState {
    #[default]
    Healthy,
    Incubating,
    Contagious,
    Dead,
    Immune,
}

impl DiseaseState {
    pub const ALL: [DiseaseState; 5] = [
        DiseaseState::Healthy,
        DiseaseState::Incubating,
        DiseaseState::Contagious,
        DiseaseState::Dead,
        DiseaseState::Immune,
    ];

    /// Incubating or Contagious: needs per-tick processing.
    pub fn is_active(self) -> bool {
        matches!(self, DiseaseState::Incubating | DiseaseState::Contagious)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, DiseaseState::Dead | DiseaseState::Immune)
    }

    /// Whether `self → next` is one of the allowed edges.
    pub fn can_transition_to(self, next: DiseaseState) -> bool {
        matches!(
            (self, next),
            (DiseaseState::Healthy, DiseaseState::Incubating)
                | (DiseaseState::Incubating, DiseaseState::Contagious)
                | (DiseaseState::Contagious, DiseaseState::Dead)
                | (DiseaseState::Contagious, DiseaseState::Immune)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DiseaseState::Healthy => "healthy",
            DiseaseState::Incubating => "incubating",
            DiseaseState::Contagious => "contagious",
            DiseaseState::Dead => "dead",
            DiseaseState::Immune => "immune",
        }
    }
}

impl fmt::Display for DiseaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
