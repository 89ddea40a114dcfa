//! Run the simulation without a window and print each generation

use std::time::{Duration, Instant};

use anyhow::{Context, Result, ensure};
use clap::Parser;
use torus_life::{Grid, Simulation, SimulationConfig, init_tracing, presets};
use tracing::info;

#[derive(Parser)]
#[command(version, about = "Print Game of Life generations on a 6x6 torus")]
struct Cli {
    /// Number of generations to print after the seed
    #[arg(short, long, default_value_t = 10)]
    generations: u64,

    /// Start from a preset (blinker, block, glider, toad, beacon)
    #[arg(short, long)]
    pattern: Option<String>,

    /// Start from a random fill instead of the default seed
    #[arg(long, conflicts_with = "pattern")]
    random: bool,

    /// Wait one tick interval between generations
    #[arg(long)]
    realtime: bool,

    /// Print the available presets and exit
    #[arg(long)]
    list_patterns: bool,

    #[command(flatten)]
    config: SimulationConfig,
}

fn build_simulation(cli: &Cli) -> Result<Simulation> {
    let mut sim = match &cli.pattern {
        Some(name) => {
            let pattern = presets::find(name)
                .with_context(|| format!("unknown pattern {name:?}"))?;
            let mut seed = Grid::default();
            pattern.place_centered(&mut seed);
            Simulation::with_seed(seed, &cli.config)
        }
        None => Simulation::new(&cli.config),
    };
    if cli.random {
        sim.randomize();
    }
    Ok(sim)
}

/// One "name: description" line per preset
fn pattern_listing() -> String {
    presets::all_patterns()
        .iter()
        .map(|p| format!("{}: {}\n", p.name.to_lowercase(), p.description))
        .collect()
}

fn print_generation(sim: &Simulation) {
    println!(
        "generation {} (alive {})\n{}",
        sim.generation(),
        sim.grid().population(),
        sim.grid()
    );
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    if cli.list_patterns {
        print!("{}", pattern_listing());
        return Ok(());
    }
    ensure!(cli.config.tick_ms > 0 || !cli.realtime, "--realtime needs a non-zero --tick-ms");

    let mut sim = build_simulation(&cli)?;
    info!(generations = cli.generations, realtime = cli.realtime, "headless run");
    print_generation(&sim);

    if cli.realtime {
        // Drive the same ticker the window uses, from wall-clock time
        sim.start();
        let mut last = Instant::now();
        while sim.generation() < cli.generations {
            std::thread::sleep(Duration::from_millis(cli.config.tick_ms.min(20)));
            let now = Instant::now();
            let before = sim.generation();
            sim.tick(now - last);
            last = now;
            if sim.generation() != before {
                print_generation(&sim);
            }
        }
        sim.stop();
    } else {
        for _ in 0..cli.generations {
            sim.step();
            print_generation(&sim);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_listing_names_every_preset() {
        let listing = pattern_listing();
        assert_eq!(listing.lines().count(), presets::all_patterns().len());
        assert!(listing.contains("glider: Moves diagonally (period 4)"));
        for line in listing.lines() {
            let name = line.split(':').next().unwrap_or_default();
            assert!(presets::find(name).is_some(), "{name}");
        }
    }

    #[test]
    fn test_unknown_pattern_is_an_error() {
        let cli = Cli::parse_from(["headless", "--pattern", "gosper"]);
        assert!(build_simulation(&cli).is_err());
    }
}
