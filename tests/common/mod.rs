#![allow(dead_code)]

use epidemic_grid::{DiseaseParams, DiseaseState, Engine, GridCoord, StatsSnapshot};

pub fn disease(incubation: u32, contagious: u32) -> DiseaseParams {
    DiseaseParams {
        incubation_duration: incubation,
        contagious_duration: contagious,
    }
}

/// State of every cell, row-major.
pub fn states(engine: &Engine) -> Vec<DiseaseState> {
    engine.cell_views().map(|v| v.state).collect()
}

pub fn state_at(engine: &Engine, column: u32, row: u32) -> DiseaseState {
    engine.get_cell(GridCoord::new(column, row)).unwrap().state()
}

/// Panics unless the running counters agree with a full scan of the grid.
pub fn assert_consistent(engine: &Engine) {
    let stats = engine.snapshot_stats();
    let census = engine.census();
    assert_eq!(
        census.total(),
        u64::from(engine.rows()) * u64::from(engine.columns()),
        "conservation broken on day {}",
        stats.day
    );
    assert_eq!(
        stats.infected,
        census.incubating + census.contagious,
        "active count drifted on day {}",
        stats.day
    );
    assert!(census.matches(&stats), "{stats:?} vs {census:?}");
}

pub fn read_lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect()
}

pub fn parse_snapshots(path: &std::path::Path) -> Vec<StatsSnapshot> {
    read_lines(path)
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}
