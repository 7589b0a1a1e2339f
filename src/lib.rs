//! # rust-life
//!
//! Conway's Game of Life on a fixed, bounded `N x N` grid.
//!
//! ## Design Principles
//!
//! 1. **Sparse**: Only living cells are stored. Absence means dead.
//!
//! 2. **Clamped Edges**: Cells at the border simply have fewer neighbors.
//!    Nothing wraps around and nothing lives outside the grid.
//!
//! 3. **Observe, Then Commit**: A generation is computed entirely from the
//!    previous one before any cell changes.
//!
//! ## Example
//!
//! ```
//! use rust_life::{Cell, Grid};
//!
//! let mut grid = Grid::new(3);
//! grid.set_alive(Cell::new(0, 0)).unwrap();
//! grid.set_alive(Cell::new(0, 1)).unwrap();
//! grid.set_alive(Cell::new(1, 1)).unwrap();
//! assert_eq!(grid.to_string(), "xx.\n.x.\n...\n");
//!
//! grid.next();
//! assert!(grid.is_alive(Cell::new(1, 0)));
//! ```
//!
//! ## Modules
//!
//! - `core`: Cell coordinates, errors, configuration, seeded RNG
//! - `rules`: The B3/S23 rule predicates
//! - `grid`: The grid engine and snapshots
//! - `patterns`: Named seed patterns
//! - `simulation`: Multi-generation runs with cycle detection

pub mod core;
pub mod rules;
pub mod grid;
pub mod patterns;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{Cell, GridConfig, GridError, SeedRng};

pub use crate::grid::{Grid, GridSnapshot, NeighborCounts, Neighbors, StepSummary};

pub use crate::patterns::{Pattern, PATTERNS};

pub use crate::simulation::{History, RunReport, Simulation, StopReason};
