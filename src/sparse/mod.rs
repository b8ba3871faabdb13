mod coord;
mod engine;
mod state;
mod tests;

pub use coord::Coord;
pub use engine::{generations, is_alive, iterate, living_neighbors, step, Generations};
pub use state::{BoundingBox, State};
