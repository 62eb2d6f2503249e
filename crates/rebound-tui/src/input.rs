use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Jump back to the origin
    Reset,
    /// Turn swipe momentum on or off
    ToggleMomentum,
    /// Release the panel as if a drag ended (snap back from the keyboard)
    Release,
    /// Keyboard drag by whole cells
    Nudge(i16, i16),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::Reset,
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMomentum,
        (KeyCode::Char(' '), KeyModifiers::NONE) => Action::Release,
        (KeyCode::Enter, _) => Action::Release,

        // Vim-style nudges
        (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) => Action::Nudge(-1, 0),
        (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) => Action::Nudge(1, 0),
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::Nudge(0, -1),
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::Nudge(0, 1),

        _ => Action::None,
    }
}
