mod cell;
mod error;
mod grid;
mod patterns;
pub mod generation;

pub use cell::Cell;
pub use error::GridError;
pub use grid::{Grid, DEFAULT_COLS, DEFAULT_ROWS};
pub use patterns::{Pattern, presets};
pub use generation::{count_alive_neighbors, generations, next_generation, next_generation_rows};
