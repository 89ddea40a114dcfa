use std::time::Duration;

use clap::Args;

/// Fraction of cells alive after a random fill, unless overridden
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Parse a fill density, accepting only finite values in [0, 1]
fn parse_density(value: &str) -> Result<f64, String> {
    let density: f64 = value.parse().map_err(|err| format!("{err}"))?;
    if (0.0..=1.0).contains(&density) {
        Ok(density)
    } else {
        Err(format!("{value} is not between 0 and 1"))
    }
}

/// Runtime options shared by the windowed app and the headless runner
#[derive(Args, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Milliseconds between generations while running
    #[arg(long, default_value_t = 200)]
    pub tick_ms: u64,

    /// Seed for the random fill
    #[arg(long, default_value_t = 0xFACA_DE00)]
    pub seed: u64,

    /// Fraction of cells alive after a random fill
    #[arg(long, default_value_t = DEFAULT_DENSITY, value_parser = parse_density)]
    pub density: f64,

    /// Hide the "col row" labels drawn inside each cell
    #[arg(long)]
    pub hide_labels: bool,

    /// Side length of a cell in pixels
    #[arg(long, default_value_t = 48.0)]
    pub cell_size: f32,
}

impl SimulationConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub const fn debug_labels(&self) -> bool {
        !self.hide_labels
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_ms: 200,
            seed: 0xFACA_DE00,
            density: DEFAULT_DENSITY,
            hide_labels: false,
            cell_size: 48.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        config: SimulationConfig,
    }

    #[test]
    fn test_cli_defaults_match_default_impl() {
        let cli = Cli::parse_from(["torus_life"]);
        assert_eq!(cli.config, SimulationConfig::default());
        assert_eq!(cli.config.tick_interval(), Duration::from_millis(200));
        assert!(cli.config.debug_labels());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["torus_life", "--tick-ms", "50", "--hide-labels"]);
        assert_eq!(cli.config.tick_interval(), Duration::from_millis(50));
        assert!(!cli.config.debug_labels());
    }

    #[test]
    fn test_cli_rejects_bad_density() {
        for bad in ["NaN", "inf", "-0.1", "1.5", "lots"] {
            assert!(
                Cli::try_parse_from(["torus_life", "--density", bad]).is_err(),
                "{bad} accepted"
            );
        }
        let cli = Cli::parse_from(["torus_life", "--density", "1"]);
        assert_eq!(cli.config.density, 1.0);
    }
}
