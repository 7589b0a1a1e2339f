//! `life-driver`: seed a bounded grid and run it from the command line.
//!
//! **Usage:**
//! ```text
//! life-driver --size 50 --pattern r-pentomino --at 24,24 --generations 500
//! life-driver --size 20 --random 0.3 --seed 7 --every 10
//! life-driver --size 3 --cell 0,0 --cell 0,1 --cell 0,2 --generations 1
//! ```
//!
//! Set `RUST_LOG=debug` to log every generation.

use anyhow::{Context, Result};
use clap::Parser;
use rust_life::{Cell, GridConfig, Pattern, SeedRng, Simulation, PATTERNS};

/// Run Conway's Game of Life on a bounded grid.
#[derive(Parser)]
#[command(name = "life-driver", about = "Run Conway's Game of Life on a bounded grid")]
struct Args {
    /// Grid side length.
    #[arg(long, default_value_t = 50)]
    size: u32,

    /// Built-in pattern to place (block, blinker, glider, r-pentomino, ...).
    #[arg(long)]
    pattern: Option<String>,

    /// Top-left corner of the pattern, as `row,col`.
    #[arg(long, default_value = "0,0")]
    at: Cell,

    /// Extra living cell as `row,col`. Repeatable.
    #[arg(long = "cell")]
    cells: Vec<Cell>,

    /// Fill the grid randomly with this density before placing anything else.
    #[arg(long)]
    random: Option<f64>,

    /// Seed for `--random`.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Maximum generations to run.
    #[arg(long, default_value_t = 100)]
    generations: u64,

    /// Print the grid every N generations (default: only first and last).
    #[arg(long)]
    every: Option<u64>,

    /// Past generations remembered for cycle detection.
    #[arg(long, default_value_t = rust_life::core::DEFAULT_HISTORY_DEPTH)]
    history: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = GridConfig::new(args.size).with_history_depth(args.history);
    let mut sim = Simulation::new(&config);

    if let Some(density) = args.random {
        sim.randomize(&mut SeedRng::new(args.seed), density)?;
    }
    if let Some(name) = &args.pattern {
        let pattern = Pattern::by_name(name).with_context(|| {
            let known: Vec<_> = PATTERNS.iter().map(|p| p.name).collect();
            format!("unknown pattern {:?}, expected one of: {}", name, known.join(", "))
        })?;
        sim.place(pattern, args.at)?;
    }
    for &cell in &args.cells {
        sim.set_alive(cell)?;
    }

    print_generation(&sim);

    let report = sim.run_with_checkpoints(args.generations, args.every, print_generation);
    if report.generations > 0 {
        print_generation(&sim);
    }
    println!("Stopped: {}", report.stop);
    Ok(())
}

fn print_generation(sim: &Simulation) {
    println!();
    println!("Generation {} (population {})", sim.generation(), sim.population());
    print!("{}", sim.render());
}
