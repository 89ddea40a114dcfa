// Domain layer - Core business logic
pub mod domain;

// Application layer - Use cases and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GridError, Pattern, presets, count_alive_neighbors, next_generation};
pub use application::{Action, Simulation, SimulationConfig, Ticker};
pub use ui::{Button, Layout};

/// Install the global tracing subscriber, filtered by `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
