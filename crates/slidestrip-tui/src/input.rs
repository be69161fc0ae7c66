use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollLeft,
    ScrollRight,
    JumpToStart,
    JumpToEnd,
    ToggleAutoAdvance,
    ToggleSlider,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Horizontal scrolling
        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::ScrollLeft,
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::ScrollRight,
        (KeyCode::Left, KeyModifiers::NONE) => Action::ScrollLeft,
        (KeyCode::Right, KeyModifiers::NONE) => Action::ScrollRight,

        // Jump to either end
        (KeyCode::Char('g'), KeyModifiers::NONE) => Action::JumpToStart,
        (KeyCode::Home, _) => Action::JumpToStart,
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToEnd,
        (KeyCode::Char('G'), KeyModifiers::NONE) => Action::JumpToEnd,
        (KeyCode::End, _) => Action::JumpToEnd,

        // Toggles
        (KeyCode::Char('a'), KeyModifiers::NONE) => Action::ToggleAutoAdvance,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::ToggleSlider,

        _ => Action::None,
    }
}

/// Map the mouse wheel onto horizontal scrolling
///
/// Vertical wheels scroll the strip too, since most terminals never report
/// horizontal wheel events.
pub fn handle_mouse_event(mouse: MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollLeft | MouseEventKind::ScrollUp => Action::ScrollLeft,
        MouseEventKind::ScrollRight | MouseEventKind::ScrollDown => Action::ScrollRight,
        _ => Action::None,
    }
}
