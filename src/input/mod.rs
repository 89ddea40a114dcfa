use macroquad::prelude::*;

use crate::application::Action;
use crate::ui::{Button, Control, Layout};

/// Keyboard shortcuts
const KEY_ACTIONS: [(KeyCode, Action); 7] = [
    (KeyCode::Space, Action::ToggleRunning),
    (KeyCode::N, Action::Step),
    (KeyCode::R, Action::Reset),
    (KeyCode::C, Action::Clear),
    (KeyCode::X, Action::Randomize),
    (KeyCode::Up, Action::SpeedUp),
    (KeyCode::Down, Action::SlowDown),
];

/// Number keys 1-5 stamp the matching preset
const STAMP_KEYS: [KeyCode; 5] = [
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
];

/// Translate a left click into an action, if it hit a cell or a button
pub fn click_action(
    layout: &Layout,
    buttons: &[(Control, Button)],
    mouse_pos: (f32, f32),
) -> Option<Action> {
    if let Some((row, col)) = layout.cell_at(mouse_pos) {
        return Some(Action::ToggleCell { row, col });
    }
    buttons
        .iter()
        .find(|(_, btn)| btn.is_hovered(mouse_pos))
        .map(|(control, _)| control.action())
}

/// Collect this frame's mouse actions
pub fn process_mouse(layout: &Layout, buttons: &[(Control, Button)], mouse_pos: (f32, f32)) -> Vec<Action> {
    if !is_mouse_button_pressed(MouseButton::Left) {
        return Vec::new();
    }
    click_action(layout, buttons, mouse_pos).into_iter().collect()
}

/// Collect this frame's keyboard actions
pub fn process_keyboard() -> Vec<Action> {
    let keys = KEY_ACTIONS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|&(_, action)| action);
    let stamps = STAMP_KEYS
        .iter()
        .enumerate()
        .filter(|(_, key)| is_key_pressed(**key))
        .map(|(i, _)| Action::Stamp(i));
    keys.chain(stamps).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_on_cell_toggles_it() {
        let layout = Layout::new(6, 6, 48.0);
        let buttons = layout.create_buttons(false);
        let (x, y) = layout.cell_origin(1, 2);
        assert_eq!(
            click_action(&layout, &buttons, (x + 10.0, y + 10.0)),
            Some(Action::ToggleCell { row: 1, col: 2 })
        );
    }

    #[test]
    fn test_click_on_button_maps_to_control() {
        let layout = Layout::new(6, 6, 48.0);
        let buttons = layout.create_buttons(true);
        let y = layout.controls_y() + 5.0;
        assert_eq!(
            click_action(&layout, &buttons, (crate::ui::MARGIN + 5.0, y)),
            Some(Action::ToggleRunning)
        );
    }

    #[test]
    fn test_click_on_background_does_nothing() {
        let layout = Layout::new(6, 6, 48.0);
        let buttons = layout.create_buttons(false);
        assert_eq!(click_action(&layout, &buttons, (1.0, 1.0)), None);
    }
}
