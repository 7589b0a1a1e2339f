//! Cell coordinates.
//!
//! A `Cell` is a `(row, col)` position on the grid. It carries no state of
//! its own: whether a cell is alive is decided by the `Grid` holding it.
//!
//! ## Ordering
//!
//! Cells order lexicographically by row, then column. The `Grid` relies on
//! this for deterministic iteration and rendering.
//!
//! ```
//! use rust_life::core::Cell;
//!
//! assert!(Cell::new(0, 5) < Cell::new(1, 0));
//! assert!(Cell::new(1, 0) < Cell::new(1, 1));
//!
//! let parsed: Cell = "2, 3".parse().unwrap();
//! assert_eq!(parsed, Cell::new(2, 3));
//! assert_eq!(parsed.to_string(), "(2,3)");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::GridError;

/// A `(row, col)` coordinate on the grid.
///
/// Field order matters: the derived `Ord` compares `row` first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
}

impl Cell {
    /// Create a new cell coordinate.
    #[must_use]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// Offset this cell by another (used to place patterns).
    ///
    /// Saturates at `u32::MAX`, which is never inside a grid.
    #[must_use]
    pub const fn offset(self, by: Cell) -> Cell {
        Cell::new(self.row.saturating_add(by.row), self.col.saturating_add(by.col))
    }
}

impl From<(u32, u32)> for Cell {
    fn from((row, col): (u32, u32)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl FromStr for Cell {
    type Err = GridError;

    /// Parse `"row,col"`, tolerating whitespace around either number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || GridError::ParseCell { input: s.to_string() };

        let mut parts = s.split(',');
        let row = parts.next().ok_or_else(invalid)?;
        let col = parts.next().ok_or_else(invalid)?;
        if parts.next().is_some() {
            return Err(invalid());
        }

        let row = row.trim().parse::<u32>().map_err(|_| invalid())?;
        let col = col.trim().parse::<u32>().map_err(|_| invalid())?;
        Ok(Cell::new(row, col))
    }
}
