//! Multi-generation runner on top of the grid engine.
//!
//! `Simulation` owns a `Grid`, counts generations, and watches for the two
//! ways a bounded Life run settles down:
//! - extinction: no living cells remain
//! - a cycle: the grid repeats a remembered earlier generation
//!
//! Still lifes are cycles of period 1.

use log::{debug, info};

use super::history::History;
use crate::core::{Cell, GridConfig, GridError, SeedRng};
use crate::grid::{Grid, StepSummary};
use crate::patterns::Pattern;

/// Why `Simulation::run` stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// No living cells remain.
    Extinct,
    /// The grid repeated a state from `period` generations earlier.
    Cycle { period: u64 },
    /// The generation limit was reached.
    Limit,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Extinct => write!(f, "extinct"),
            StopReason::Cycle { period } => write!(f, "cycle of period {}", period),
            StopReason::Limit => write!(f, "generation limit"),
        }
    }
}

/// Outcome of `Simulation::run`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunReport {
    /// Generations advanced during this run.
    pub generations: u64,
    pub stop: StopReason,
}

/// A grid plus its generation count and recent history.
#[derive(Clone, Debug)]
pub struct Simulation {
    grid: Grid,
    generation: u64,
    history: History,
    last_cycle: Option<u64>,
    alive_symbol: char,
    dead_symbol: char,
}

impl Simulation {
    /// Start an empty simulation from a configuration.
    #[must_use]
    pub fn new(config: &GridConfig) -> Self {
        let mut sim = Self::from_grid(Grid::with_config(config), config.history_depth);
        sim.alive_symbol = config.alive_symbol;
        sim.dead_symbol = config.dead_symbol;
        sim
    }

    /// Start from an existing grid at generation 0.
    #[must_use]
    pub fn from_grid(grid: Grid, history_depth: usize) -> Self {
        let mut sim = Self {
            grid,
            generation: 0,
            history: History::new(history_depth),
            last_cycle: None,
            alive_symbol: crate::core::ALIVE_SYMBOL,
            dead_symbol: crate::core::DEAD_SYMBOL,
        };
        sim.restart_history();
        sim
    }

    // === Accessors ===

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations advanced since the simulation started.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of living cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.grid.num_living_cells()
    }

    /// Text dump using the configured symbols.
    #[must_use]
    pub fn render(&self) -> String {
        self.grid.render(self.alive_symbol, self.dead_symbol)
    }

    // === Seeding ===
    //
    // Editing the grid breaks continuity with earlier generations, so each
    // edit restarts the history from the edited state.

    /// Bring a cell to life.
    pub fn set_alive(&mut self, cell: Cell) -> Result<(), GridError> {
        self.grid.set_alive(cell)?;
        self.restart_history();
        Ok(())
    }

    /// Kill a cell.
    pub fn set_dead(&mut self, cell: Cell) -> Result<(), GridError> {
        self.grid.set_dead(cell)?;
        self.restart_history();
        Ok(())
    }

    /// Place a pattern with its top-left corner at `origin`.
    pub fn place(&mut self, pattern: &Pattern, origin: Cell) -> Result<(), GridError> {
        self.grid.place(pattern, origin)?;
        self.restart_history();
        Ok(())
    }

    /// Replace the grid with a random fill.
    pub fn randomize(&mut self, rng: &mut SeedRng, density: f64) -> Result<(), GridError> {
        self.grid.randomize(rng, density)?;
        self.restart_history();
        Ok(())
    }

    fn restart_history(&mut self) {
        self.history.clear();
        self.history.record(self.generation, &self.grid);
        self.last_cycle = None;
    }

    // === Stepping ===

    /// Advance one generation.
    pub fn step(&mut self) -> StepSummary {
        let summary = self.grid.next();
        self.generation += 1;

        self.last_cycle = self
            .history
            .find(&self.grid)
            .map(|seen| self.generation - seen);
        self.history.record(self.generation, &self.grid);

        debug!(
            "generation {}: population {} ({} deaths, {} births)",
            self.generation,
            self.population(),
            summary.deaths,
            summary.births
        );
        summary
    }

    /// Period of the cycle entered by the latest step, if any.
    ///
    /// Only cycles no longer than the history depth are seen.
    #[must_use]
    pub fn detect_cycle(&self) -> Option<u64> {
        self.last_cycle
    }

    /// Step until extinction, a detected cycle, or `max_generations` steps.
    pub fn run(&mut self, max_generations: u64) -> RunReport {
        let mut generations = 0;
        let stop = loop {
            if generations == max_generations {
                break StopReason::Limit;
            }
            self.step();
            generations += 1;

            if self.population() == 0 {
                break StopReason::Extinct;
            }
            if let Some(period) = self.detect_cycle() {
                break StopReason::Cycle { period };
            }
        };

        info!(
            "stopped at generation {} after {} steps: {}",
            self.generation, generations, stop
        );
        RunReport { generations, stop }
    }

    /// Like `run`, but pauses every `every` generations to call
    /// `on_checkpoint`.
    ///
    /// Checkpoints fire only between chunks: never at the start, never
    /// after the final chunk, and never once the run has stopped early.
    /// `None` or `Some(0)` runs in a single chunk. The report counts every
    /// generation advanced across all chunks.
    pub fn run_with_checkpoints<F>(
        &mut self,
        max_generations: u64,
        every: Option<u64>,
        mut on_checkpoint: F,
    ) -> RunReport
    where
        F: FnMut(&Simulation),
    {
        let every = every.filter(|&n| n > 0);
        let mut generations = 0;
        loop {
            let remaining = max_generations - generations;
            let chunk = every.map_or(remaining, |n| n.min(remaining));
            let report = self.run(chunk);
            generations += report.generations;

            if report.stop != StopReason::Limit || generations == max_generations {
                return RunReport {
                    generations,
                    stop: report.stop,
                };
            }
            on_checkpoint(self);
        }
    }
}
