use super::{Coord, State};
use tracing::{debug, trace};

/// Number of living cells among the eight neighbors of `cell`.
pub fn living_neighbors(cell: Coord, state: &State) -> usize {
    cell.neighbors().filter(|&n| state.contains(n)).count()
}

/// Conway's rule: birth on 3 neighbors, survival on 2 or 3.
pub fn is_alive(cell: Coord, state: &State) -> bool {
    match living_neighbors(cell, state) {
        3 => true,
        2 => state.contains(cell),
        _ => false,
    }
}

/// Computes the next generation.
///
/// Only the bounding box grown by one cell is scanned: a cell farther away
/// has no living neighbors and cannot be born.
pub fn step(state: &State) -> State {
    let area = state.bounding_box().expanded(1);
    let mut next = State::new();
    for y in area.bottom_left.y..=area.top_right.y {
        for x in area.bottom_left.x..=area.top_right.x {
            let cell = Coord::new(x, y);
            if is_alive(cell, state) {
                next.insert(cell);
            }
        }
    }
    trace!(
        population = next.population(),
        width = area.width(),
        height = area.height(),
        "stepped generation"
    );
    next
}

/// Returns `iterations + 1` states: the seed and each of its successors.
pub fn iterate(seed: &State, iterations: usize) -> Vec<State> {
    debug!(iterations, population = seed.population(), "iterating");
    generations(seed.clone())
        .take(iterations.saturating_add(1))
        .collect()
}

/// Lazy sequence of generations starting with `seed` itself.
///
/// The sequence never ends; bound it with [`Iterator::take`].
/// Cloning yields an independent sequence resumed from the same point.
pub fn generations(seed: State) -> Generations {
    Generations {
        last: seed,
        started: false,
    }
}

#[derive(Clone, Debug)]
pub struct Generations {
    last: State,
    started: bool,
}

impl Iterator for Generations {
    type Item = State;

    fn next(&mut self) -> Option<State> {
        // successor is computed on demand so `take(n)` never steps past what it yields
        if self.started {
            self.last = step(&self.last);
        } else {
            self.started = true;
        }
        Some(self.last.clone())
    }
}
