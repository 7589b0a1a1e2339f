//! The grid engine and its serializable snapshot form.
//!
//! `Grid` holds the living cells of a fixed-size board and advances them
//! one generation at a time. `GridSnapshot` is its plain-data twin used for
//! serde and binary encoding.

pub mod engine;
pub mod snapshot;

pub use engine::{Grid, NeighborCounts, Neighbors, StepSummary};
pub use snapshot::GridSnapshot;
