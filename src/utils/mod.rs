mod config;
mod error;
mod format_int;
mod parse_rle;

pub use config::Config;
pub use error::{parse_iterations, LifeError};
pub use format_int::NiceInt;
pub use parse_rle::parse_rle;
