//! The grid engine: a fixed `size x size` board storing only living cells.
//!
//! ## Storage
//!
//! Living cells live in an `im::OrdSet<Cell>`. Absence from the set is the
//! only representation of a dead cell. The ordered set gives row-major
//! iteration for free, and cloning a grid is O(1), which the simulation
//! history depends on.
//!
//! ## Boundaries
//!
//! Edges are clamped, not wrapped. A corner cell has 3 neighbors, an edge
//! cell 5, an interior cell 8.
//!
//! ## Advancing a generation
//!
//! `next` is two-phase. The observe phase walks the living cells, collects
//! the ones that die, and tallies living neighbors for every dead cell it
//! touches. Nothing is mutated until that walk completes; the commit phase
//! then applies deaths followed by births.
//!
//! ```
//! use rust_life::core::Cell;
//! use rust_life::grid::Grid;
//!
//! let mut grid = Grid::new(3);
//! grid.set_alive_all([Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)]).unwrap();
//! grid.next();
//!
//! assert!(grid.is_alive(Cell::new(1, 1)));
//! assert_eq!(grid.to_string(), ".x.\n.x.\n...\n");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use im::OrdSet;
use log::trace;
use rustc_hash::{FxHashMap, FxHasher};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::snapshot::GridSnapshot;
use crate::core::{Cell, GridConfig, GridError, SeedRng, ALIVE_SYMBOL, DEAD_SYMBOL};
use crate::rules;

/// Moore neighborhood of a cell, clamped to the grid.
///
/// Never holds more than 8 cells, so it stays on the stack.
pub type Neighbors = SmallVec<[Cell; 8]>;

/// Living and dead counts over a neighbor list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NeighborCounts {
    pub alive: usize,
    pub dead: usize,
}

/// What a single `next` call changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    /// Living cells that died (underpopulation or overcrowding).
    pub deaths: usize,
    /// Dead cells that came alive.
    pub births: usize,
}

impl StepSummary {
    /// True if the step left the grid unchanged.
    #[must_use]
    pub fn is_still(&self) -> bool {
        self.deaths == 0 && self.births == 0
    }
}

/// A bounded Game of Life grid.
///
/// ## Invariants
///
/// - Every living cell satisfies `row < size && col < size`.
/// - `size` never changes after construction.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridSnapshot", into = "GridSnapshot")]
pub struct Grid {
    size: u32,
    living: OrdSet<Cell>,
}

impl Grid {
    /// Create an empty `size x size` grid.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            living: OrdSet::new(),
        }
    }

    /// Create an empty grid sized by a configuration.
    #[must_use]
    pub fn with_config(config: &GridConfig) -> Self {
        Self::new(config.size)
    }

    /// Grid side length.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    // === Mutation ===

    /// Mark a cell alive. Idempotent.
    ///
    /// Fails with `OutOfBounds` if the cell is outside the grid.
    pub fn set_alive(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(cell)?;
        self.living.insert(cell);
        Ok(())
    }

    /// Mark a cell dead. No-op if it is already dead.
    ///
    /// Out-of-bounds cells are rejected even though they can never be
    /// alive.
    pub fn set_dead(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(cell)?;
        self.living.remove(&cell);
        Ok(())
    }

    /// Mark several cells alive.
    ///
    /// Every cell is checked before any is inserted, so on error the grid
    /// is unchanged.
    pub fn set_alive_all<I>(&mut self, cells: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let cells: Vec<Cell> = cells.into_iter().collect();
        for &cell in &cells {
            self.check_bounds(cell)?;
        }
        self.living.extend(cells);
        Ok(())
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.living = OrdSet::new();
    }

    /// Replace the grid contents with a random fill.
    ///
    /// Each cell is alive with probability `density`, visited in row-major
    /// order so a given seed always produces the same grid.
    pub fn randomize(&mut self, rng: &mut SeedRng, density: f64) -> Result<(), GridError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(GridError::InvalidDensity(density));
        }

        let size = self.size;
        self.living = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::new(row, col)))
            .filter(|_| rng.gen_bool(density))
            .collect();
        Ok(())
    }

    // === Queries ===

    /// Is this cell alive? Out-of-bounds cells are simply dead.
    #[must_use]
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.living.contains(&cell)
    }

    /// Is this cell inside `[0, size) x [0, size)`?
    #[must_use]
    pub fn is_in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Number of living cells.
    #[must_use]
    pub fn num_living_cells(&self) -> usize {
        self.living.len()
    }

    /// Living cells in ascending `(row, col)` order.
    pub fn living_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.living.iter().copied()
    }

    /// Neighbors of `cell`, clamped to the grid, excluding `cell` itself.
    ///
    /// Ordered by row, then column. Intended for in-bounds cells.
    ///
    /// ```
    /// use rust_life::core::Cell;
    /// use rust_life::grid::Grid;
    ///
    /// let grid = Grid::new(3);
    /// let corner = grid.neighbors(Cell::new(0, 0));
    /// assert_eq!(
    ///     corner.as_slice(),
    ///     &[Cell::new(0, 1), Cell::new(1, 0), Cell::new(1, 1)]
    /// );
    /// ```
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> Neighbors {
        let mut neighbors = Neighbors::new();
        if self.size == 0 {
            return neighbors;
        }

        let last = self.size - 1;
        let cols = cell.col.saturating_sub(1)..=cell.col.saturating_add(1).min(last);
        for row in cell.row.saturating_sub(1)..=cell.row.saturating_add(1).min(last) {
            for col in cols.clone() {
                if row != cell.row || col != cell.col {
                    neighbors.push(Cell::new(row, col));
                }
            }
        }
        neighbors
    }

    /// Count the living cells in a precomputed neighbor list.
    #[must_use]
    pub fn num_living_neighbors(&self, neighbors: &[Cell]) -> usize {
        neighbors.iter().filter(|&&n| self.is_alive(n)).count()
    }

    /// Split a precomputed neighbor list into living and dead counts.
    #[must_use]
    pub fn num_neighbors(&self, neighbors: &[Cell]) -> NeighborCounts {
        let alive = self.num_living_neighbors(neighbors);
        NeighborCounts {
            alive,
            dead: neighbors.len() - alive,
        }
    }

    /// Would a living cell with these neighbors die?
    #[must_use]
    pub fn is_over_crowded_or_under_populated(&self, neighbors: &[Cell]) -> bool {
        !rules::survives(self.num_living_neighbors(neighbors))
    }

    /// Deterministic hash of the size and living cells.
    ///
    /// Equal grids always share a fingerprint.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.size.hash(&mut hasher);
        for cell in self.living.iter() {
            cell.hash(&mut hasher);
        }
        hasher.finish()
    }

    // === Generation ===

    /// Advance exactly one generation in place.
    pub fn next(&mut self) -> StepSummary {
        let mut to_dead = Vec::new();
        let mut dead_neighbors: FxHashMap<Cell, usize> = FxHashMap::default();

        for &cell in self.living.iter() {
            self.process_cell(cell, &mut to_dead, &mut dead_neighbors);
        }

        for cell in &to_dead {
            self.living.remove(cell);
        }

        let mut births = 0;
        for (cell, count) in dead_neighbors {
            if rules::is_reborn(count) {
                self.living.insert(cell);
                births += 1;
            }
        }

        let summary = StepSummary {
            deaths: to_dead.len(),
            births,
        };
        trace!(
            "generation step: {} deaths, {} births, {} alive",
            summary.deaths,
            summary.births,
            self.living.len()
        );
        summary
    }

    /// Observe one living cell: mark it for death if the rule says so, and
    /// credit it to each dead neighbor's tally.
    fn process_cell(
        &self,
        cell: Cell,
        to_dead: &mut Vec<Cell>,
        dead_neighbors: &mut FxHashMap<Cell, usize>,
    ) {
        let neighbors = self.neighbors(cell);
        if self.is_over_crowded_or_under_populated(&neighbors) {
            to_dead.push(cell);
        }

        for &neighbor in &neighbors {
            if !self.is_alive(neighbor) {
                *dead_neighbors.entry(neighbor).or_insert(0) += 1;
            }
        }
    }

    // === Rendering ===

    /// Text dump with custom symbols: `size` rows of `size` characters,
    /// each row newline-terminated.
    #[must_use]
    pub fn render(&self, alive: char, dead: char) -> String {
        let side = self.size as usize;
        let mut out = String::with_capacity(side * (side + 1));
        for row in 0..self.size {
            for col in 0..self.size {
                out.push(if self.is_alive(Cell::new(row, col)) { alive } else { dead });
            }
            out.push('\n');
        }
        out
    }

    fn check_bounds(&self, cell: Cell) -> Result<(), GridError> {
        if self.is_in_bounds(cell) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                cell,
                size: self.size,
            })
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(ALIVE_SYMBOL, DEAD_SYMBOL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: u32, cells: &[(u32, u32)]) -> Grid {
        let mut grid = Grid::new(size);
        grid.set_alive_all(cells.iter().copied().map(Cell::from)).unwrap();
        grid
    }

    #[test]
    fn test_default_grid() {
        let grid = Grid::default();
        assert_eq!(grid.size(), 0);
        assert_eq!(grid.to_string(), "");
        assert_eq!(grid.num_living_cells(), 0);
    }

    #[test]
    fn test_with_config() {
        let grid = Grid::with_config(&GridConfig::new(7));
        assert_eq!(grid.size(), 7);
    }

    #[test]
    fn test_set_alive_and_dead() {
        let mut grid = Grid::new(3);
        let cell = Cell::new(1, 2);

        grid.set_alive(cell).unwrap();
        assert!(grid.is_alive(cell));

        grid.set_dead(cell).unwrap();
        assert!(!grid.is_alive(cell));

        // Dead already: still fine
        grid.set_dead(cell).unwrap();
        assert_eq!(grid.num_living_cells(), 0);
    }

    #[test]
    fn test_set_alive_is_idempotent() {
        let mut once = Grid::new(3);
        once.set_alive(Cell::new(0, 0)).unwrap();

        let mut twice = Grid::new(3);
        twice.set_alive(Cell::new(0, 0)).unwrap();
        twice.set_alive(Cell::new(0, 0)).unwrap();

        assert_eq!(once, twice);
        assert_eq!(twice.num_living_cells(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut grid = grid_with(3, &[(1, 1)]);
        let before = grid.clone();

        let err = grid.set_alive(Cell::new(3, 0)).unwrap_err();
        assert!(matches!(
            err,
            GridError::OutOfBounds { cell, size: 3 } if cell == Cell::new(3, 0)
        ));

        let err = grid.set_dead(Cell::new(0, 4)).unwrap_err();
        assert_eq!(err.cell(), Some(Cell::new(0, 4)));

        assert_eq!(grid, before);
    }

    #[test]
    fn test_set_alive_all_is_atomic() {
        let mut grid = Grid::new(3);
        let result = grid.set_alive_all([Cell::new(0, 0), Cell::new(5, 5), Cell::new(1, 1)]);

        assert!(result.is_err());
        assert_eq!(grid.num_living_cells(), 0);
    }

    #[test]
    fn test_is_alive_out_of_bounds_is_false() {
        let grid = grid_with(2, &[(0, 0)]);
        assert!(!grid.is_alive(Cell::new(10, 10)));
    }

    #[test]
    fn test_is_in_bounds() {
        let grid = Grid::new(3);
        assert!(grid.is_in_bounds(Cell::new(0, 0)));
        assert!(grid.is_in_bounds(Cell::new(2, 2)));
        assert!(!grid.is_in_bounds(Cell::new(3, 0)));
        assert!(!grid.is_in_bounds(Cell::new(0, 3)));

        assert!(!Grid::default().is_in_bounds(Cell::new(0, 0)));
    }

    #[test]
    fn test_neighbor_counts_by_position() {
        let grid = Grid::new(5);
        assert_eq!(grid.neighbors(Cell::new(0, 0)).len(), 3);
        assert_eq!(grid.neighbors(Cell::new(4, 4)).len(), 3);
        assert_eq!(grid.neighbors(Cell::new(0, 2)).len(), 5);
        assert_eq!(grid.neighbors(Cell::new(2, 4)).len(), 5);
        assert_eq!(grid.neighbors(Cell::new(2, 2)).len(), 8);
    }

    #[test]
    fn test_neighbors_order() {
        let grid = Grid::new(3);
        let neighbors = grid.neighbors(Cell::new(1, 1));
        assert_eq!(
            neighbors.as_slice(),
            &[
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 0),
                Cell::new(1, 2),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_neighbors_tiny_grids() {
        assert!(Grid::new(0).neighbors(Cell::new(0, 0)).is_empty());
        assert!(Grid::new(1).neighbors(Cell::new(0, 0)).is_empty());
    }

    #[test]
    fn test_num_neighbors() {
        let grid = grid_with(3, &[(0, 0), (0, 1)]);
        let neighbors = grid.neighbors(Cell::new(1, 1));

        assert_eq!(grid.num_living_neighbors(&neighbors), 2);
        assert_eq!(grid.num_neighbors(&neighbors), NeighborCounts { alive: 2, dead: 6 });
    }

    #[test]
    fn test_over_crowded_or_under_populated() {
        let lonely = grid_with(3, &[(1, 1)]);
        assert!(lonely.is_over_crowded_or_under_populated(&lonely.neighbors(Cell::new(1, 1))));

        let pair = grid_with(3, &[(1, 1), (0, 0), (0, 1)]);
        assert!(!pair.is_over_crowded_or_under_populated(&pair.neighbors(Cell::new(1, 1))));

        let crowded = grid_with(3, &[(1, 1), (0, 0), (0, 1), (0, 2), (1, 0)]);
        assert!(crowded.is_over_crowded_or_under_populated(&crowded.neighbors(Cell::new(1, 1))));
    }

    #[test]
    fn test_death_check_follows_rule() {
        // Center cell (2,2) with `n` of its neighbors alive.
        let ring = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)];
        for n in 0..=ring.len() {
            let mut grid = grid_with(5, &ring[..n]);
            grid.set_alive(Cell::new(2, 2)).unwrap();
            let neighbors = grid.neighbors(Cell::new(2, 2));

            assert_eq!(
                grid.is_over_crowded_or_under_populated(&neighbors),
                !rules::survives(n),
                "{} neighbors",
                n
            );
        }
    }

    #[test]
    fn test_render() {
        let grid = grid_with(3, &[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(grid.to_string(), "xx.\n.x.\n...\n");
        assert_eq!(grid.render('#', ' '), "## \n # \n   \n");
    }

    #[test]
    fn test_next_underpopulation() {
        let mut grid = grid_with(3, &[(1, 1), (1, 2)]);
        let summary = grid.next();

        assert!(!grid.is_alive(Cell::new(1, 1)));
        assert!(!grid.is_alive(Cell::new(1, 2)));
        assert_eq!(summary, StepSummary { deaths: 2, births: 0 });
    }

    #[test]
    fn test_next_birth() {
        let mut grid = grid_with(3, &[(0, 0), (0, 1), (0, 2)]);
        grid.next();
        assert!(grid.is_alive(Cell::new(1, 1)));
    }

    #[test]
    fn test_next_block_is_still() {
        let mut grid = grid_with(4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        let before = grid.clone();
        let summary = grid.next();

        assert!(summary.is_still());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_clear() {
        let mut grid = grid_with(3, &[(0, 0), (2, 2)]);
        grid.clear();
        assert_eq!(grid.num_living_cells(), 0);
        assert_eq!(grid.size(), 3);
    }

    #[test]
    fn test_randomize_rejects_bad_density() {
        let mut grid = Grid::new(4);
        let mut rng = SeedRng::new(1);
        assert!(matches!(
            grid.randomize(&mut rng, 1.5),
            Err(GridError::InvalidDensity(_))
        ));
        assert!(grid.randomize(&mut rng, f64::NAN).is_err());
    }

    #[test]
    fn test_randomize_extremes() {
        let mut grid = Grid::new(4);
        let mut rng = SeedRng::new(1);

        grid.randomize(&mut rng, 1.0).unwrap();
        assert_eq!(grid.num_living_cells(), 16);

        grid.randomize(&mut rng, 0.0).unwrap();
        assert_eq!(grid.num_living_cells(), 0);
    }

    #[test]
    fn test_fingerprint() {
        let a = grid_with(4, &[(0, 0), (1, 1)]);
        let b = grid_with(4, &[(1, 1), (0, 0)]);
        let c = grid_with(4, &[(0, 0)]);

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_living_cells_sorted() {
        let grid = grid_with(4, &[(3, 0), (0, 3), (1, 1)]);
        let cells: Vec<_> = grid.living_cells().collect();
        assert_eq!(cells, vec![Cell::new(0, 3), Cell::new(1, 1), Cell::new(3, 0)]);
    }
}
