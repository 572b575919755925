use crate::model::{DiseaseState, GridCoord, TickRates};
use crate::sim::Engine;

// ---------------------------------------------------------------------------
// Tick execution helpers
// ---------------------------------------------------------------------------

/// Advance `days` ticks, checking bookkeeping after every one. Returns the
/// value of the last `advance_tick` call (true if the engine is quiescent).
pub fn tick_days_checked(engine: &mut Engine, rates: TickRates, days: u32) -> bool {
    let mut done = engine.is_quiescent();
    for _ in 0..days {
        done = engine.advance_tick(rates);
        assert_bookkeeping(engine);
        assert_eq!(done, engine.is_quiescent());
    }
    done
}

// ---------------------------------------------------------------------------
// Invariant checks
// ---------------------------------------------------------------------------

/// Counters agree with a full census, the census covers the whole grid, and
/// the active set is exactly the Incubating and Contagious cells.
pub fn assert_bookkeeping(engine: &Engine) {
    let stats = engine.snapshot_stats();
    let census = engine.census();
    assert_eq!(
        census.total(),
        u64::from(engine.rows()) * u64::from(engine.columns()),
        "census does not cover the grid on day {}",
        stats.day
    );
    assert!(
        census.matches(&stats),
        "counters {stats:?} disagree with census {census:?}"
    );

    for row in 0..engine.rows() {
        for column in 0..engine.columns() {
            let coord = GridCoord::new(column, row);
            let state = engine.get_cell(coord).unwrap().state();
            assert_eq!(
                engine.is_active(coord),
                state.is_active(),
                "{coord} is {state} but active-set membership is {}",
                engine.is_active(coord)
            );
        }
    }
}

/// State of every cell, row-major.
pub fn states(engine: &Engine) -> Vec<DiseaseState> {
    engine.cell_views().map(|v| v.state).collect()
}
