//! Bounded memory of past generations for cycle detection.
//!
//! Entries hold full `Grid` clones. Grids share structure through `im`, so
//! a clone costs O(1) and only the cells that changed since are new.
//! Lookups compare fingerprints first and fall back to exact equality, so a
//! hash collision never reports a false cycle.

use im::Vector;

use crate::grid::Grid;

#[derive(Clone, Debug)]
struct Entry {
    generation: u64,
    fingerprint: u64,
    grid: Grid,
}

/// The last `depth` recorded generations, oldest first.
#[derive(Clone, Debug)]
pub struct History {
    depth: usize,
    entries: Vector<Entry>,
}

impl History {
    /// Create an empty history remembering at most `depth` generations.
    #[must_use]
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            entries: Vector::new(),
        }
    }

    /// Maximum number of remembered generations.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget everything.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Remember `grid` as the state at `generation`, evicting the oldest
    /// entry once full.
    pub fn record(&mut self, generation: u64, grid: &Grid) {
        if self.depth == 0 {
            return;
        }
        self.entries.push_back(Entry {
            generation,
            fingerprint: grid.fingerprint(),
            grid: grid.clone(),
        });
        while self.entries.len() > self.depth {
            self.entries.pop_front();
        }
    }

    /// Most recent remembered generation whose grid equals `grid`.
    #[must_use]
    pub fn find(&self, grid: &Grid) -> Option<u64> {
        let fingerprint = grid.fingerprint();
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.fingerprint == fingerprint && entry.grid == *grid)
            .map(|entry| entry.generation)
    }
}
