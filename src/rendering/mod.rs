use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Grid;
use crate::ui::{Button, Control, Layout, MARGIN, BUTTON_HEIGHT, cell_id};

/// Cell palette: alive is blue with white text, dead is light gray with black text
fn cell_colors(alive: bool) -> (Color, Color) {
    if alive {
        (Color::from_rgba(59, 130, 246, 255), WHITE)
    } else {
        (Color::from_rgba(243, 244, 246, 255), BLACK)
    }
}

/// Draw every cell as a square; debug mode prints "col row" inside it
pub fn draw_grid(grid: &Grid, layout: &Layout, debug_labels: bool) {
    let size = layout.cell_size;
    for (row, col, cell) in grid.iter_cells() {
        let (x, y) = layout.cell_origin(row, col);
        let (fill, text_color) = cell_colors(cell.is_alive());
        draw_rectangle(x, y, size, size, fill);

        if debug_labels {
            let label = format!("{col} {row}");
            let dims = measure_text(&label, None, 16, 1.0);
            draw_text(
                &label,
                x + (size - dims.width) / 2.0,
                y + (size + dims.height) / 2.0,
                16.0,
                text_color,
            );
        }
    }
}

/// Draw control buttons and a one-line status
pub fn draw_controls(sim: &Simulation, layout: &Layout, buttons: &[(Control, Button)], mouse_pos: (f32, f32)) {
    buttons.iter().for_each(|(_, btn)| btn.draw(mouse_pos));

    let mut status = format!(
        "{} | gen {} | alive {} | {} ms/gen",
        if sim.is_running() { "Running" } else { "Paused" },
        sim.generation(),
        sim.grid().population(),
        sim.interval().as_millis(),
    );
    if let Some((row, col)) = layout.cell_at(mouse_pos) {
        status.push_str(&format!(" | cell {}", cell_id(row, col)));
    }
    let y = layout.controls_y() + BUTTON_HEIGHT + MARGIN + 12.0;
    draw_text(&status, MARGIN, y, 18.0, LIGHTGRAY);
}
