use std::collections::VecDeque;

use crate::model::{EngineConfig, EngineError, StatsSnapshot, TickRates};

use super::engine::Engine;

/// Configuration for a batch run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunConfig {
    pub rates: TickRates,
    /// Hard stop even if the epidemic is still going.
    pub max_ticks: u64,
}

impl RunConfig {
    pub fn new(rates: TickRates, max_ticks: u64) -> Self {
        Self { rates, max_ticks }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(TickRates::default(), 1_000)
    }
}

/// Result of [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    pub ticks: u64,
    /// True if the engine went quiescent before `max_ticks`.
    pub completed: bool,
    /// Stats after each tick, in order.
    pub history: Vec<StatsSnapshot>,
}

impl RunReport {
    pub fn final_stats(&self) -> Option<&StatsSnapshot> {
        self.history.last()
    }

    /// Day with the most simultaneously active cells, and that count.
    pub fn peak_infected(&self) -> Option<(u64, u64)> {
        self.history
            .iter()
            .max_by(|a, b| a.infected.cmp(&b.infected).then(b.day.cmp(&a.day)))
            .map(|s| (s.day, s.infected))
    }
}

/// Tick `engine` until it reports quiescence or `config.max_ticks` is reached.
///
/// An engine that is already quiescent is not ticked at all.
pub fn run(engine: &mut Engine, config: &RunConfig) -> RunReport {
    let mut history = Vec::new();
    let mut completed = engine.is_quiescent();

    while !completed && (history.len() as u64) < config.max_ticks {
        completed = engine.advance_tick(config.rates);
        history.push(engine.snapshot_stats());
    }

    let stats = engine.snapshot_stats();
    if completed {
        tracing::info!(
            day = stats.day,
            dead = stats.dead,
            immune = stats.immune,
            "epidemic ran its course"
        );
    } else {
        tracing::info!(
            day = stats.day,
            infected = stats.infected,
            "stopped at tick limit"
        );
    }

    RunReport {
        ticks: history.len() as u64,
        completed,
        history,
    }
}

/// Input from the host loop, one per frame or input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Nothing requested; redraw and wait.
    AwaitInput,
    /// Advance exactly one tick (e.g. space bar or a "next" button).
    ContinueToNextState,
}

/// Host-facing driver: holds the engine, the rates set by the UI, an optional
/// auto-play mode and a bounded history of recent snapshots.
#[derive(Debug, Clone)]
pub struct Stepper {
    engine: Engine,
    rates: TickRates,
    auto_play: bool,
    history: VecDeque<StatsSnapshot>,
    history_capacity: usize,
}

impl Stepper {
    pub fn new(engine: Engine, rates: TickRates, history_capacity: usize) -> Self {
        Self {
            engine,
            rates,
            auto_play: false,
            history: VecDeque::with_capacity(history_capacity),
            history_capacity,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn rates(&self) -> TickRates {
        self.rates
    }

    /// Rates apply from the next tick on.
    pub fn set_rates(&mut self, rates: TickRates) {
        self.rates = rates;
    }

    pub fn auto_play(&self) -> bool {
        self.auto_play
    }

    pub fn set_auto_play(&mut self, on: bool) {
        self.auto_play = on;
    }

    /// Recent snapshots, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &StatsSnapshot> {
        self.history.iter()
    }

    /// Apply one control input. Returns the new stats if a tick ran.
    pub fn handle(&mut self, control: Control) -> Option<StatsSnapshot> {
        match control {
            Control::AwaitInput => None,
            Control::ContinueToNextState => Some(self.step()),
        }
    }

    /// Called once per frame. Ticks only while auto-play is on, and turns
    /// auto-play off once the epidemic is over.
    pub fn poll(&mut self) -> Option<StatsSnapshot> {
        if !self.auto_play {
            return None;
        }
        let stats = self.step();
        if self.engine.is_quiescent() {
            tracing::debug!(day = stats.day, "auto-play halted");
            self.auto_play = false;
        }
        Some(stats)
    }

    fn step(&mut self) -> StatsSnapshot {
        self.engine.advance_tick(self.rates);
        let stats = self.engine.snapshot_stats();
        if self.history_capacity > 0 {
            if self.history.len() == self.history_capacity {
                self.history.pop_front();
            }
            self.history.push_back(stats);
        }
        stats
    }

    /// Rebuild the engine from `config`, clear history and stop auto-play.
    /// On error nothing changes.
    pub fn reset(&mut self, config: EngineConfig) -> Result<(), EngineError> {
        self.engine.reset(config)?;
        self.history.clear();
        self.auto_play = false;
        Ok(())
    }

    pub fn into_engine(self) -> Engine {
        self.engine
    }
}
