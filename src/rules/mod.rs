//! The standard Game of Life transition rule.
//!
//! - Underpopulation: a living cell with fewer than 2 living neighbors dies.
//! - Overcrowding: a living cell with more than 3 living neighbors dies.
//! - Survival: a living cell with 2 or 3 living neighbors lives on.
//! - Birth: a dead cell with exactly 3 living neighbors becomes alive.
//!
//! There is exactly one rule set; the grid engine calls into these
//! predicates rather than hardcoding the thresholds.

pub mod conway;

pub use conway::{is_overcrowded, is_reborn, is_underpopulated, next_state, survives};
