//! Core value types: cell coordinates, errors, configuration, RNG.
//!
//! Nothing here knows about generations; the `grid` module builds on these.

pub mod cell;
pub mod config;
pub mod error;
pub mod rng;

pub use cell::Cell;
pub use config::{GridConfig, ALIVE_SYMBOL, DEAD_SYMBOL, DEFAULT_HISTORY_DEPTH};
pub use error::GridError;
pub use rng::SeedRng;
