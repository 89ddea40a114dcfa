mod config;
mod simulation;
mod ticker;

pub use config::{DEFAULT_DENSITY, SimulationConfig};
pub use simulation::{Action, Simulation};
pub use ticker::{DEFAULT_INTERVAL, TickToken, Ticker};
