use std::time::Duration;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use super::{DEFAULT_DENSITY, SimulationConfig, TickToken, Ticker};
use crate::domain::{Grid, GridError, next_generation, presets};

const MIN_INTERVAL: Duration = Duration::from_millis(50);
const MAX_INTERVAL: Duration = Duration::from_millis(2000);
const SPEED_STEP: Duration = Duration::from_millis(50);

/// Everything a player can ask the simulation to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleCell { row: usize, col: usize },
    Step,
    ToggleRunning,
    Reset,
    Clear,
    Randomize,
    /// Stamp the preset at this index of `presets::all_patterns()`
    Stamp(usize),
    SpeedUp,
    SlowDown,
}

/// Simulation owns the board and its run state.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    grid: Grid,
    /// Reset target; never handed out mutably
    seed: Grid,
    ticker: Ticker,
    generation: u64,
    density: f64,
    rng: StdRng,
}

impl Simulation {
    /// Start from the default 6x6 seed
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_seed(presets::default_seed(), config)
    }

    /// Start from a caller-supplied seed grid
    pub fn with_seed(seed: Grid, config: &SimulationConfig) -> Self {
        let density = if (0.0..=1.0).contains(&config.density) {
            config.density
        } else {
            warn!(density = config.density, "fill density outside [0, 1], using default");
            DEFAULT_DENSITY
        };
        Self {
            grid: seed.clone(),
            seed,
            ticker: Ticker::new(config.tick_interval()),
            generation: 0,
            density,
            rng: StdRng::seed_from_u64(config.seed),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn seed(&self) -> &Grid {
        &self.seed
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn is_running(&self) -> bool {
        self.ticker.is_active()
    }

    pub fn interval(&self) -> Duration {
        self.ticker.interval()
    }

    /// Flip a single cell
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let cell = self.grid.toggle(row, col)?;
        debug!(row, col, alive = cell.is_alive(), "toggled cell");
        Ok(())
    }

    /// Replace the board with its next generation
    pub fn step(&mut self) {
        self.grid = next_generation(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "advanced generation"
        );
    }

    pub fn start(&mut self) {
        if self.ticker.start() {
            info!(interval_ms = self.interval().as_millis() as u64, "simulation started");
        }
    }

    pub fn stop(&mut self) {
        if self.ticker.stop() {
            info!(generation = self.generation, "simulation stopped");
        }
    }

    pub fn toggle_running(&mut self) {
        if self.is_running() {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Restore a fresh copy of the seed. Running state is left as is.
    pub fn reset(&mut self) {
        self.grid = self.seed.clone();
        self.generation = 0;
        info!("grid reset to seed");
    }

    /// Kill every cell and stop
    pub fn clear(&mut self) {
        self.stop();
        self.grid.clear();
        self.generation = 0;
        info!("grid cleared");
    }

    /// Random fill from the seeded rng, then stop
    pub fn randomize(&mut self) {
        self.stop();
        self.grid.randomize(&mut self.rng, self.density);
        self.generation = 0;
        info!(population = self.grid.population(), "grid randomized");
    }

    /// Stamp a preset onto the middle of the board, then stop
    pub fn stamp(&mut self, index: usize) {
        let Some(pattern) = presets::all_patterns().into_iter().nth(index) else {
            warn!(index, "no preset at index");
            return;
        };
        self.stop();
        pattern.place_centered(&mut self.grid);
        self.generation = 0;
        info!(pattern = pattern.name, "stamped preset");
    }

    /// Shorten or lengthen the tick interval by one step, clamped
    pub fn adjust_speed(&mut self, faster: bool) {
        let current = self.ticker.interval();
        let next = if faster {
            current.saturating_sub(SPEED_STEP)
        } else {
            current + SPEED_STEP
        };
        self.ticker.set_interval(next.clamp(MIN_INTERVAL, MAX_INTERVAL));
    }

    /// Advance the ticker by one frame and step if a tick is due
    pub fn tick(&mut self, delta: Duration) {
        if let Some(token) = self.ticker.advance(delta) {
            self.apply_tick(token);
        }
    }

    /// Apply a tick only if it belongs to the current run.
    /// Returns whether a generation was computed.
    pub fn apply_tick(&mut self, token: TickToken) -> bool {
        if !self.ticker.accepts(token) {
            warn!("dropped tick from a stopped run");
            return false;
        }
        self.step();
        true
    }

    pub fn apply(&mut self, action: Action) -> Result<(), GridError> {
        match action {
            Action::ToggleCell { row, col } => self.toggle_cell(row, col)?,
            Action::Step => self.step(),
            Action::ToggleRunning => self.toggle_running(),
            Action::Reset => self.reset(),
            Action::Clear => self.clear(),
            Action::Randomize => self.randomize(),
            Action::Stamp(index) => self.stamp(index),
            Action::SpeedUp => self.adjust_speed(true),
            Action::SlowDown => self.adjust_speed(false),
        }
        Ok(())
    }
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(&SimulationConfig::default())
    }
}
