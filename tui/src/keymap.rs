use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use kubenav_core::navigation::Key;
use kubenav_core::navigation::KeyChord;
use kubenav_core::navigation::Modifier;

/// Converts a terminal key event into the chord the navigation core binds
/// against. Releases and keys the core has no name for yield `None`.
pub(crate) fn key_chord(event: KeyEvent) -> Option<KeyChord> {
    if !matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }
    let key = match event.code {
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::F(n) => Key::F(n),
        KeyCode::Char(c) => Key::Char(c),
        _ => return None,
    };
    Some(KeyChord::new(key, modifier(key, event.modifiers)))
}

// Ctrl wins over Alt, Alt over Shift. Shift is already folded into
// character keys and BackTab by the terminal.
fn modifier(key: Key, modifiers: KeyModifiers) -> Modifier {
    if modifiers.contains(KeyModifiers::CONTROL) {
        Modifier::Ctrl
    } else if modifiers.contains(KeyModifiers::ALT) {
        Modifier::Alt
    } else if modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(key, Key::Char(_) | Key::BackTab)
    {
        Modifier::Shift
    } else {
        Modifier::None
    }
}
