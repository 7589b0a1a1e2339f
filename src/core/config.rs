//! Grid and simulation configuration.
//!
//! `GridConfig` bundles everything needed to stand up a `Simulation`:
//! - grid size (fixed for the life of the grid)
//! - symbols used by the text dump
//! - how many past generations are remembered for cycle detection

use serde::{Deserialize, Serialize};

/// Symbol for a living cell in text dumps.
pub const ALIVE_SYMBOL: char = 'x';

/// Symbol for a dead cell in text dumps.
pub const DEAD_SYMBOL: char = '.';

/// Default number of past generations kept for cycle detection.
pub const DEFAULT_HISTORY_DEPTH: usize = 10;

/// Configuration for a grid and the simulation running it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid side length. The grid covers `[0, size) x [0, size)`.
    pub size: u32,

    /// Character rendered for living cells.
    pub alive_symbol: char,

    /// Character rendered for dead cells.
    pub dead_symbol: char,

    /// Past generations remembered for cycle detection. 0 disables it.
    pub history_depth: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

impl GridConfig {
    /// Create a configuration for a `size x size` grid.
    #[must_use]
    pub fn new(size: u32) -> Self {
        Self {
            size,
            alive_symbol: ALIVE_SYMBOL,
            dead_symbol: DEAD_SYMBOL,
            history_depth: DEFAULT_HISTORY_DEPTH,
        }
    }

    /// Set the text dump symbols.
    #[must_use]
    pub fn with_symbols(mut self, alive: char, dead: char) -> Self {
        self.alive_symbol = alive;
        self.dead_symbol = dead;
        self
    }

    /// Set the cycle detection history depth.
    #[must_use]
    pub fn with_history_depth(mut self, depth: usize) -> Self {
        self.history_depth = depth;
        self
    }
}
