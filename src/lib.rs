#![warn(clippy::all)]

mod patterns;
mod render;
mod sparse;
mod utils;

pub use patterns::{
    find_pattern, pattern_names, random_soup, resolve_seed, Pattern, PATTERNS, RANDOM,
};
pub use render::{render, render_generations};
pub use sparse::{
    generations, is_alive, iterate, living_neighbors, step, BoundingBox, Coord, Generations, State,
};
pub use utils::{parse_iterations, parse_rle, Config, LifeError, NiceInt};
