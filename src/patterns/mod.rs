//! Seed patterns and placing them on a grid.
//!
//! ```
//! use rust_life::core::Cell;
//! use rust_life::grid::Grid;
//! use rust_life::patterns::BLINKER;
//!
//! let mut grid = Grid::new(5);
//! grid.place(&BLINKER, Cell::new(2, 1)).unwrap();
//! assert_eq!(grid.to_string(), ".....\n.....\n.xxx.\n.....\n.....\n");
//! ```

pub mod library;

pub use library::{
    Pattern, BEACON, BLINKER, BLOCK, GLIDER, GOSPER_GLIDER_GUN, PATTERNS, PULSAR,
    R_PENTOMINO, TOAD,
};

use crate::core::{Cell, GridError};
use crate::grid::Grid;

impl Pattern {
    /// Absolute cells of this pattern with its top-left corner at `origin`.
    pub fn cells_at(&self, origin: Cell) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .map(move |&offset| origin.offset(Cell::from(offset)))
    }
}

impl Grid {
    /// Bring a pattern to life with its top-left corner at `origin`.
    ///
    /// Fails with `OutOfBounds` if any part of the pattern falls outside the
    /// grid, in which case nothing is placed.
    pub fn place(&mut self, pattern: &Pattern, origin: Cell) -> Result<(), GridError> {
        self.set_alive_all(pattern.cells_at(origin))
    }
}
