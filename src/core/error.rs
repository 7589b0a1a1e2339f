//! Error type shared by the engine, snapshots, and seeding helpers.

use thiserror::Error;

use super::cell::Cell;

/// Errors raised by grid operations.
///
/// The engine itself only ever raises `OutOfBounds`. The other variants
/// come from parsing, random seeding, and snapshot encoding.
#[derive(Debug, Error)]
pub enum GridError {
    /// A mutation targeted a cell outside `[0, size) x [0, size)`.
    #[error("{cell} out of bounds for grid size {size}")]
    OutOfBounds { cell: Cell, size: u32 },

    /// Text could not be parsed as `row,col`.
    #[error("invalid cell {input:?}, expected \"row,col\"")]
    ParseCell { input: String },

    /// Random fill density must be a probability.
    #[error("density {0} is not within [0, 1]")]
    InvalidDensity(f64),

    /// Binary snapshot could not be encoded or decoded.
    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}

impl GridError {
    /// The rejected coordinate, if this is a bounds error.
    #[must_use]
    pub fn cell(&self) -> Option<Cell> {
        match self {
            GridError::OutOfBounds { cell, .. } => Some(*cell),
            _ => None,
        }
    }
}
