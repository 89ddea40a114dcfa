mod button;

pub use button::Button;

use crate::application::Action;
use crate::domain::{DEFAULT_COLS, DEFAULT_ROWS};

pub const MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 2.0;
pub const BUTTON_WIDTH: f32 = 96.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
pub const BUTTON_GAP: f32 = 8.0;
/// Room under the buttons for the status line
pub const STATUS_HEIGHT: f32 = 32.0;

/// Stable identifier of a cell button, `"{row}-{col}"`
pub fn cell_id(row: usize, col: usize) -> String {
    format!("{row}-{col}")
}

/// Control buttons under the board, in display order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    StartStop,
    Next,
    Reset,
    Clear,
    Random,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::StartStop,
        Control::Next,
        Control::Reset,
        Control::Clear,
        Control::Random,
    ];

    /// Button caption; Start/Stop follows the run state
    pub fn label(self, running: bool) -> &'static str {
        match self {
            Control::StartStop if running => "Stop",
            Control::StartStop => "Start",
            Control::Next => "Next",
            Control::Reset => "Reset",
            Control::Clear => "Clear",
            Control::Random => "Random",
        }
    }

    pub const fn action(self) -> Action {
        match self {
            Control::StartStop => Action::ToggleRunning,
            Control::Next => Action::Step,
            Control::Reset => Action::Reset,
            Control::Clear => Action::Clear,
            Control::Random => Action::Randomize,
        }
    }
}

/// Screen geometry of the board and the control row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f32,
}

impl Layout {
    pub const fn new(rows: usize, cols: usize, cell_size: f32) -> Self {
        Self { rows, cols, cell_size }
    }

    /// Layout of the default board, known before any simulation exists
    pub const fn default_board(cell_size: f32) -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, cell_size)
    }

    fn pitch(&self) -> f32 {
        self.cell_size + CELL_GAP
    }

    /// Top-left corner of a cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            MARGIN + col as f32 * self.pitch(),
            MARGIN + row as f32 * self.pitch(),
        )
    }

    /// (width, height) of the board without margins
    pub fn board_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.pitch() - CELL_GAP,
            self.rows as f32 * self.pitch() - CELL_GAP,
        )
    }

    /// Map a screen point to the cell under it; gaps and margins map to None
    pub fn cell_at(&self, point: (f32, f32)) -> Option<(usize, usize)> {
        let axis = |v: f32, count: usize| -> Option<usize> {
            let offset = v - MARGIN;
            if offset < 0.0 {
                return None;
            }
            let index = (offset / self.pitch()) as usize;
            let within = offset - index as f32 * self.pitch();
            (index < count && within <= self.cell_size).then_some(index)
        };
        Some((axis(point.1, self.rows)?, axis(point.0, self.cols)?))
    }

    /// Y coordinate of the control row
    pub fn controls_y(&self) -> f32 {
        MARGIN * 2.0 + self.board_size().1
    }

    /// Build the control buttons for the current run state
    pub fn create_buttons(&self, running: bool) -> Vec<(Control, Button)> {
        let y = self.controls_y();
        Control::ALL
            .iter()
            .enumerate()
            .map(|(i, &control)| {
                let x = MARGIN + i as f32 * (BUTTON_WIDTH + BUTTON_GAP);
                let button = Button::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT, control.label(running));
                (control, button)
            })
            .collect()
    }

    /// Window size that fits the board, the controls and the status line
    pub fn window_size(&self) -> (f32, f32) {
        let buttons = Control::ALL.len() as f32;
        let controls_width = buttons * BUTTON_WIDTH + (buttons - 1.0) * BUTTON_GAP;
        let width = self.board_size().0.max(controls_width) + MARGIN * 2.0;
        let height = self.controls_y() + BUTTON_HEIGHT + MARGIN + STATUS_HEIGHT;
        (width, height)
    }
}
