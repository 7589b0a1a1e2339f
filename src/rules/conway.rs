//! Conway's B3/S23 rule as plain predicates over a living-neighbor count.
//!
//! The grid engine evaluates these against counts taken from the previous
//! generation only.

/// Fewer than two living neighbors: a living cell dies.
#[must_use]
pub const fn is_underpopulated(living_neighbors: usize) -> bool {
    living_neighbors < 2
}

/// More than three living neighbors: a living cell dies.
#[must_use]
pub const fn is_overcrowded(living_neighbors: usize) -> bool {
    living_neighbors > 3
}

/// A living cell with this many living neighbors stays alive.
#[must_use]
pub const fn survives(living_neighbors: usize) -> bool {
    !is_underpopulated(living_neighbors) && !is_overcrowded(living_neighbors)
}

/// A dead cell with exactly three living neighbors is born.
#[must_use]
pub const fn is_reborn(living_neighbors: usize) -> bool {
    living_neighbors == 3
}

/// Next state of a cell given its current state and living-neighbor count.
#[must_use]
pub const fn next_state(alive: bool, living_neighbors: usize) -> bool {
    if alive {
        survives(living_neighbors)
    } else {
        is_reborn(living_neighbors)
    }
}
