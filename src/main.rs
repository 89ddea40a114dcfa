use std::time::Duration;

use clap::Parser;
use macroquad::prelude::*;
use torus_life::{Simulation, SimulationConfig, init_tracing, input, rendering, ui::Layout};
use tracing::{info, warn};

/// Conway's Game of Life on a 6x6 torus
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    config: SimulationConfig,
}

fn window_conf() -> Conf {
    let cli = Cli::parse();
    let (width, height) = Layout::default_board(cli.config.cell_size).window_size();
    Conf {
        window_title: "Conway's Game of Life - Torus".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();
    let config = Cli::parse().config;
    let mut sim = Simulation::new(&config);
    let layout = Layout::default_board(config.cell_size);
    info!(?config, "starting");

    loop {
        let mouse_pos = mouse_position();

        // Start/Stop caption depends on the current run state
        let buttons = layout.create_buttons(sim.is_running());

        let actions = input::process_mouse(&layout, &buttons, mouse_pos)
            .into_iter()
            .chain(input::process_keyboard());
        for action in actions {
            if let Err(err) = sim.apply(action) {
                warn!(%err, ?action, "action rejected");
            }
        }

        sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(Color::from_rgba(30, 30, 30, 255));
        rendering::draw_grid(sim.grid(), &layout, config.debug_labels());
        let buttons = layout.create_buttons(sim.is_running());
        rendering::draw_controls(&sim, &layout, &buttons, mouse_pos);

        next_frame().await;
    }
}
