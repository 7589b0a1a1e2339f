//! Serializable grid snapshots.
//!
//! `Grid` serializes through `GridSnapshot`, a plain `size` plus sorted
//! living-cell list. Deserializing re-checks bounds, so a snapshot that
//! names a cell outside the grid is rejected rather than loaded.
//!
//! Binary snapshots use `bincode`.

use serde::{Deserialize, Serialize};

use super::engine::Grid;
use crate::core::{Cell, GridError};

/// Plain-data form of a `Grid`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: u32,
    /// Living cells, ascending.
    pub living: Vec<Cell>,
}

impl From<Grid> for GridSnapshot {
    fn from(grid: Grid) -> Self {
        Self {
            size: grid.size(),
            living: grid.living_cells().collect(),
        }
    }
}

impl TryFrom<GridSnapshot> for Grid {
    type Error = GridError;

    fn try_from(snapshot: GridSnapshot) -> Result<Self, Self::Error> {
        let mut grid = Grid::new(snapshot.size);
        grid.set_alive_all(snapshot.living)?;
        Ok(grid)
    }
}

impl Grid {
    /// Capture the current state as plain data.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        self.clone().into()
    }

    /// Encode as `bincode`.
    pub fn to_bytes(&self) -> Result<Vec<u8>, GridError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from `bincode`, re-validating every cell.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, GridError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
