//! Running a grid for many generations.
//!
//! - `Simulation`: generation counter, seeding helpers, `step` and `run`
//! - `History`: bounded record of past grids for cycle detection

pub mod history;
pub mod runner;

pub use history::History;
pub use runner::{RunReport, Simulation, StopReason};
