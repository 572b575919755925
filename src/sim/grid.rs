use crate::model::{DiseaseParams, DiseaseState, EngineError, GridCoord};

use super::cell::Cell;
use super::rng::SimRng;

/// Moore neighbourhood offsets in scan order: the row above left to right, then
/// left and right of the centre, then the row below left to right.
///
/// This order decides the RNG consumption order during infection and must stay
/// fixed for seeded runs to reproduce.
const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Arena owning every cell of the lattice.
///
/// Cells live in a row-major `Vec`; neighbours refer to each other by
/// [`GridCoord`] and every cross-cell mutation is resolved through the arena.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: u32,
    columns: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-healthy lattice with no neighbour wiring yet.
    pub fn new(rows: u32, columns: u32) -> Self {
        let mut cells = Vec::with_capacity(rows as usize * columns as usize);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(Cell::new(GridCoord::new(column, row)));
            }
        }
        Self {
            rows,
            columns,
            cells,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.column < self.columns && coord.row < self.rows
    }

    fn slot(&self, coord: GridCoord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.row as usize * self.columns as usize + coord.column as usize)
    }

    fn out_of_range(&self, coord: GridCoord) -> EngineError {
        EngineError::CoordinateOutOfRange {
            coord,
            rows: self.rows,
            columns: self.columns,
        }
    }

    pub fn get(&self, coord: GridCoord) -> Result<&Cell, EngineError> {
        self.slot(coord)
            .map(|i| &self.cells[i])
            .ok_or_else(|| self.out_of_range(coord))
    }

    pub fn get_mut(&mut self, coord: GridCoord) -> Result<&mut Cell, EngineError> {
        match self.slot(coord) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(self.out_of_range(coord)),
        }
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// In-range Moore neighbours of `coord`, in scan order.
    pub fn neighbor_coords(&self, coord: GridCoord) -> Vec<GridCoord> {
        MOORE_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| coord.offset(dx, dy))
            .filter(|&c| self.contains(c))
            .collect()
    }

    /// Wire every cell to its 8-connected neighbours. Edge and corner cells get
    /// fewer; there is no wraparound.
    pub fn build_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let neighbors = self.neighbor_coords(self.cells[i].position());
            self.cells[i].set_neighbors(neighbors);
        }
    }

    /// Let the contagious cell at `source` roll once against each healthy
    /// neighbour. Neighbours that catch the disease start incubating at once and
    /// are returned in scan order.
    ///
    /// Non-contagious sources infect nobody and draw nothing from `rng`.
    pub fn infect_neighbors(
        &mut self,
        source: GridCoord,
        transmission_rate: f64,
        params: &DiseaseParams,
        rng: &mut SimRng,
    ) -> Result<Vec<GridCoord>, EngineError> {
        let cell = self.get(source)?;
        if cell.state() != DiseaseState::Contagious {
            return Ok(Vec::new());
        }
        let neighbors = cell.neighbors().to_vec();

        let mut infected = Vec::new();
        for coord in neighbors {
            let neighbor = self.get_mut(coord)?;
            if neighbor.state() != DiseaseState::Healthy {
                continue;
            }
            if rng.chance(transmission_rate) && neighbor.infect(params) {
                infected.push(coord);
            }
        }
        Ok(infected)
    }
}
