use std::collections::BTreeSet;

use crate::model::{
    Census, CellView, DiseaseState, EngineConfig, EngineError, GridCoord, StatsSnapshot,
    TickRates,
};

use super::cell::Cell;
use super::grid::Grid;
use super::rng::SimRng;

/// Stage a hand-placed infection starts in. See [`Engine::seed_cell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStage {
    Incubating,
    Contagious,
}

/// Owns the population, the active set, the counters and the RNG, and advances
/// the whole epidemic one tick at a time.
///
/// The active set holds every Incubating or Contagious cell and is maintained
/// incrementally; a tick only visits those cells, never the full grid. The
/// counters are likewise only rebuilt on construction and [`Engine::reset`].
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    grid: Grid,
    /// Ordered row-major so ticks visit cells in a fixed order.
    active: BTreeSet<GridCoord>,
    stats: StatsSnapshot,
    rng: SimRng,
}

impl Engine {
    /// Build the population, roll the initial infections and wire neighbours.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;

        let mut rng = SimRng::seeded(config.seed);
        let mut grid = Grid::new(config.rows, config.columns);
        let mut active = BTreeSet::new();

        // Seeding bypasses the transmission roll: one flat draw per cell.
        for cell in grid.iter_mut() {
            if rng.chance(config.initial_infection_rate) && cell.infect(&config.disease) {
                active.insert(cell.position());
            }
        }
        grid.build_neighbors();

        let stats = StatsSnapshot {
            total_population: grid.len() as u64,
            infected: active.len() as u64,
            ..StatsSnapshot::default()
        };

        tracing::debug!(
            rows = config.rows,
            columns = config.columns,
            seed = config.seed,
            seeded = active.len(),
            "built population"
        );

        Ok(Self {
            config,
            grid,
            active,
            stats,
            rng,
        })
    }

    /// Throw away the current population and rebuild from `config`.
    ///
    /// On an invalid config the engine is left exactly as it was.
    pub fn reset(&mut self, config: EngineConfig) -> Result<(), EngineError> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Advance every active cell by one day.
    ///
    /// Returns true once no cell is Incubating or Contagious, i.e. the epidemic
    /// has run its course. Cells infected during this tick are added to the active
    /// set but only start progressing on the next one.
    pub fn advance_tick(&mut self, rates: TickRates) -> bool {
        if !rates.is_valid() {
            tracing::warn!(
                transmission_rate = rates.transmission_rate,
                death_rate = rates.death_rate,
                "tick rates outside [0, 1], clamping"
            );
        }
        let rates = rates.clamped();
        self.stats.day += 1;

        let snapshot: Vec<GridCoord> = self.active.iter().copied().collect();
        for coord in snapshot {
            if let Err(err) = self.step_cell(coord, rates) {
                tracing::error!(%coord, %err, "active cell missing from grid");
                self.active.remove(&coord);
            }
        }

        debug_assert_eq!(self.stats.infected, self.active.len() as u64);
        self.stats.infected = self.active.len() as u64;

        tracing::trace!(
            day = self.stats.day,
            infected = self.stats.infected,
            contagious = self.stats.contagious,
            dead = self.stats.dead,
            immune = self.stats.immune,
            "tick"
        );

        self.active.is_empty()
    }

    fn step_cell(&mut self, coord: GridCoord, rates: TickRates) -> Result<(), EngineError> {
        match self.grid.get(coord)?.state() {
            DiseaseState::Incubating => {
                if self.grid.get_mut(coord)?.incubate(&self.config.disease) {
                    self.stats.contagious += 1;
                }
            }
            DiseaseState::Contagious => {
                let final_day = self.grid.get_mut(coord)?.progress_disease();

                let infected = self.grid.infect_neighbors(
                    coord,
                    rates.transmission_rate,
                    &self.config.disease,
                    &mut self.rng,
                )?;
                self.stats.infected += infected.len() as u64;
                self.active.extend(infected);

                if final_day {
                    self.active.remove(&coord);
                    self.stats.infected = self.stats.infected.saturating_sub(1);
                    self.stats.contagious = self.stats.contagious.saturating_sub(1);
                    let died = self
                        .grid
                        .get_mut(coord)?
                        .resolve_outcome(rates.death_rate, &mut self.rng);
                    if died {
                        self.stats.dead += 1;
                    } else {
                        self.stats.immune += 1;
                    }
                }
            }
            DiseaseState::Healthy | DiseaseState::Dead | DiseaseState::Immune => {}
        }
        Ok(())
    }

    /// Place an infection by hand, bypassing every roll. Returns false if the
    /// cell was not Healthy.
    pub fn seed_cell(&mut self, coord: GridCoord, stage: SeedStage) -> Result<bool, EngineError> {
        let params = self.config.disease;
        let cell = self.grid.get_mut(coord)?;
        if !cell.infect(&params) {
            return Ok(false);
        }
        if stage == SeedStage::Contagious {
            cell.become_contagious(&params);
            self.stats.contagious += 1;
        }
        self.active.insert(coord);
        self.stats.infected += 1;
        Ok(true)
    }

    pub fn snapshot_stats(&self) -> StatsSnapshot {
        self.stats
    }

    pub fn get_cell(&self, coord: GridCoord) -> Result<&Cell, EngineError> {
        self.grid.get(coord)
    }

    pub fn cell_view(&self, coord: GridCoord) -> Result<CellView, EngineError> {
        let cell = self.grid.get(coord)?;
        Ok(CellView::new(coord, cell.state(), self.config.cell_size))
    }

    /// Views of every cell in row-major order, for drawing a frame.
    pub fn cell_views(&self) -> impl Iterator<Item = CellView> + '_ {
        let size = self.config.cell_size;
        self.grid
            .iter()
            .map(move |cell| CellView::new(cell.position(), cell.state(), size))
    }

    /// Cell under a screen point, if any.
    pub fn coord_at_screen(&self, x: f64, y: f64) -> Option<GridCoord> {
        // Also rejects NaN.
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let size = self.config.cell_size;
        let coord = GridCoord::new((x / size) as u32, (y / size) as u32);
        self.grid.contains(coord).then_some(coord)
    }

    /// Full scan of the population, independent of the running counters.
    pub fn census(&self) -> Census {
        self.grid.iter().map(Cell::state).collect()
    }

    /// Currently Incubating or Contagious cells, row-major.
    pub fn active_cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.active.iter().copied()
    }

    pub fn is_active(&self, coord: GridCoord) -> bool {
        self.active.contains(&coord)
    }

    pub fn is_quiescent(&self) -> bool {
        self.active.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn rows(&self) -> u32 {
        self.grid.rows()
    }

    pub fn columns(&self) -> u32 {
        self.grid.columns()
    }

    pub fn day(&self) -> u64 {
        self.stats.day
    }
}
