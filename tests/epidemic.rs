mod common;

use common::{assert_consistent, disease, state_at, states};
use epidemic_grid::{
    DiseaseState, Engine, EngineConfig, EngineError, GridCoord, RunConfig, Scenario, TickRates,
    run,
};

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn fully_seeded_grid_dies_out_in_two_days() {
    let config = EngineConfig::new(3, 3)
        .with_initial_infection_rate(1.0)
        .with_disease(disease(1, 1));
    let mut engine = Engine::new(config).unwrap();
    let rates = TickRates::new(0.0, 1.0);
    assert_eq!(engine.snapshot_stats().infected, 9);

    // Day 1: every cell finishes incubating.
    assert!(!engine.advance_tick(rates));
    let stats = engine.snapshot_stats();
    assert_eq!(stats.contagious, 9);
    assert_eq!(stats.infected, 9);
    assert!(states(&engine).iter().all(|&s| s == DiseaseState::Contagious));

    // Day 2: every cell reaches its final day and dies.
    assert!(engine.advance_tick(rates));
    let stats = engine.snapshot_stats();
    assert_eq!(stats.dead, 9);
    assert_eq!(stats.contagious, 0);
    assert_eq!(stats.infected, 0);
    assert_eq!(stats.day, 2);
    assert_eq!(engine.active_cells().count(), 0);
}

#[test]
fn contagious_centre_infects_all_eight_neighbours() {
    let mut engine = Scenario::new(3, 3)
        .disease(disease(2, 3))
        .contagious(1, 1)
        .build()
        .unwrap();

    engine.advance_tick(TickRates::new(1.0, 0.0));

    let stats = engine.snapshot_stats();
    assert_eq!(stats.infected, 9);
    assert_eq!(stats.contagious, 1);
    assert_eq!(engine.census().incubating, 8);
    for row in 0..3 {
        for column in 0..3 {
            if (column, row) != (1, 1) {
                assert_eq!(state_at(&engine, column, row), DiseaseState::Incubating);
            }
        }
    }
}

#[test]
fn corner_source_only_reaches_three_cells() {
    let mut engine = Scenario::new(4, 4).contagious(0, 0).build().unwrap();
    engine.advance_tick(TickRates::new(1.0, 0.0));
    assert_eq!(engine.census().incubating, 3);
    assert_eq!(state_at(&engine, 1, 1), DiseaseState::Incubating);
    assert_eq!(state_at(&engine, 2, 0), DiseaseState::Healthy);
}

#[test]
fn death_rate_zero_leaves_everyone_immune() {
    let mut engine = Scenario::new(5, 5)
        .disease(disease(1, 1))
        .contagious(2, 2)
        .build()
        .unwrap();
    let report = run(&mut engine, &RunConfig::new(TickRates::new(1.0, 0.0), 100));
    assert!(report.completed);
    let stats = engine.snapshot_stats();
    assert_eq!(stats.immune, 25);
    assert_eq!(stats.dead, 0);
    assert_eq!(stats.healthy(), 0);
}

// ---------------------------------------------------------------------------
// Timers
// ---------------------------------------------------------------------------

#[test]
fn incubation_timer_decreases_by_one_per_tick() {
    let mut engine = Scenario::new(1, 1)
        .disease(disease(4, 2))
        .incubating(0, 0)
        .build()
        .unwrap();
    let origin = GridCoord::new(0, 0);
    let rates = TickRates::new(0.0, 0.0);

    for expected in [3, 2, 1] {
        engine.advance_tick(rates);
        let cell = engine.get_cell(origin).unwrap();
        assert_eq!(cell.state(), DiseaseState::Incubating);
        assert_eq!(cell.incubation_timer(), expected);
    }

    engine.advance_tick(rates);
    let cell = engine.get_cell(origin).unwrap();
    assert_eq!(cell.state(), DiseaseState::Contagious);
    assert_eq!(cell.incubation_timer(), 0);
    assert_eq!(cell.contagious_timer(), 2);

    engine.advance_tick(rates);
    assert_eq!(engine.get_cell(origin).unwrap().contagious_timer(), 1);
    assert!(engine.advance_tick(rates));
    assert_eq!(engine.get_cell(origin).unwrap().state(), DiseaseState::Immune);
}

// ---------------------------------------------------------------------------
// Propagation ordering
// ---------------------------------------------------------------------------

#[test]
fn infection_spreads_one_ring_per_generation() {
    // A 1x7 strip with the source at the left end. Incubation 1 means a cell
    // infected on day N is contagious on day N+1 and infects on day N+2.
    let mut engine = Scenario::new(1, 7)
        .disease(disease(1, 10))
        .contagious(0, 0)
        .build()
        .unwrap();
    let rates = TickRates::new(1.0, 0.0);

    engine.advance_tick(rates);
    assert_eq!(state_at(&engine, 1, 0), DiseaseState::Incubating);
    assert_eq!(state_at(&engine, 2, 0), DiseaseState::Healthy);

    engine.advance_tick(rates);
    assert_eq!(state_at(&engine, 1, 0), DiseaseState::Contagious);
    assert_eq!(state_at(&engine, 2, 0), DiseaseState::Healthy);

    engine.advance_tick(rates);
    assert_eq!(state_at(&engine, 2, 0), DiseaseState::Incubating);
    assert_eq!(state_at(&engine, 3, 0), DiseaseState::Healthy);
}

#[test]
fn cells_infected_this_tick_do_not_infect_this_tick() {
    // Zero incubation: a fresh cell would turn contagious on its first
    // processed tick, so any same-tick processing would show up as spread.
    let mut engine = Scenario::new(1, 5)
        .disease(disease(0, 10))
        .contagious(0, 0)
        .build()
        .unwrap();
    engine.advance_tick(TickRates::new(1.0, 0.0));
    assert_eq!(state_at(&engine, 1, 0), DiseaseState::Incubating);
    assert_eq!(state_at(&engine, 2, 0), DiseaseState::Healthy);
    assert_eq!(engine.snapshot_stats().contagious, 1);
}

// ---------------------------------------------------------------------------
// Global properties
// ---------------------------------------------------------------------------

#[test]
fn conservation_and_consistency_hold_every_tick() {
    for seed in [1, 7, 42, 1234] {
        let config = EngineConfig::new(15, 20)
            .with_seed(seed)
            .with_initial_infection_rate(0.03);
        let mut engine = Engine::new(config).unwrap();
        assert_consistent(&engine);
        for _ in 0..400 {
            let done = engine.advance_tick(TickRates::new(0.2, 0.15));
            assert_consistent(&engine);
            assert_eq!(done, engine.active_cells().count() == 0);
            if done {
                break;
            }
        }
        assert!(engine.is_quiescent(), "seed {seed} did not finish");
    }
}

#[test]
fn terminal_cells_stay_terminal_and_leave_active_set() {
    let mut engine = Engine::new(
        EngineConfig::new(12, 12)
            .with_seed(5)
            .with_initial_infection_rate(0.08)
            .with_disease(disease(1, 2)),
    )
    .unwrap();
    let rates = TickRates::new(0.35, 0.5);
    let mut terminal: Vec<(GridCoord, DiseaseState)> = Vec::new();

    for _ in 0..80 {
        engine.advance_tick(rates);
        for &(coord, state) in &terminal {
            assert_eq!(engine.get_cell(coord).unwrap().state(), state);
            assert!(!engine.is_active(coord));
        }
        terminal = engine
            .cell_views()
            .filter(|v| v.state.is_terminal())
            .map(|v| (v.coord, v.state))
            .collect();
    }
    assert!(!terminal.is_empty());
}

#[test]
fn same_seed_reproduces_every_cell_every_tick() {
    let config = EngineConfig::new(20, 20)
        .with_seed(99)
        .with_initial_infection_rate(0.02);
    let rates = TickRates::new(0.3, 0.25);
    let mut a = Engine::new(config.clone()).unwrap();
    let mut b = Engine::new(config).unwrap();

    assert_eq!(states(&a), states(&b));
    for _ in 0..60 {
        let done_a = a.advance_tick(rates);
        let done_b = b.advance_tick(rates);
        assert_eq!(done_a, done_b);
        assert_eq!(states(&a), states(&b));
        assert_eq!(a.snapshot_stats(), b.snapshot_stats());
    }
}

#[test]
fn different_seeds_diverge() {
    let rates = TickRates::new(0.3, 0.25);
    let mut a = Engine::new(EngineConfig::new(20, 20).with_seed(1).with_initial_infection_rate(0.1)).unwrap();
    let mut b = Engine::new(EngineConfig::new(20, 20).with_seed(2).with_initial_infection_rate(0.1)).unwrap();
    for _ in 0..10 {
        a.advance_tick(rates);
        b.advance_tick(rates);
    }
    assert_ne!(states(&a), states(&b));
}

#[test]
fn quiescent_engine_keeps_reporting_done() {
    let mut engine = Scenario::new(2, 2)
        .disease(disease(1, 1))
        .incubating(0, 0)
        .build()
        .unwrap();
    let rates = TickRates::new(0.0, 1.0);
    assert!(!engine.advance_tick(rates));
    assert!(engine.advance_tick(rates));
    let frozen = states(&engine);
    for _ in 0..3 {
        assert!(engine.advance_tick(rates));
    }
    assert_eq!(states(&engine), frozen);
    assert_eq!(engine.day(), 5);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn invalid_configurations_are_rejected() {
    let bad = [
        EngineConfig::new(0, 4),
        EngineConfig::new(4, 0),
        EngineConfig::new(4, 4).with_cell_size(0.0),
        EngineConfig::new(4, 4).with_initial_infection_rate(-0.5),
        EngineConfig::new(4, 4).with_initial_infection_rate(1.5),
    ];
    for config in bad {
        assert!(
            matches!(Engine::new(config.clone()), Err(EngineError::InvalidConfiguration(_))),
            "{config:?} accepted"
        );
    }
}

#[test]
fn lookup_outside_grid_is_an_error() {
    let engine = Engine::new(EngineConfig::new(3, 5)).unwrap();
    let err = engine.get_cell(GridCoord::new(5, 0)).unwrap_err();
    assert_eq!(
        err,
        EngineError::CoordinateOutOfRange {
            coord: GridCoord::new(5, 0),
            rows: 3,
            columns: 5,
        }
    );
    assert!(engine.get_cell(GridCoord::new(4, 2)).is_ok());
}
