use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Prev,
    First,
    Last,
    /// Direct slide selection (0-based), from digit keys or dots
    GoTo(usize),
    ToggleHelp,
    ExitMode,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key closes help; quit still quits
        return match lookup(keymap, key) {
            Some(Action::Quit) => Action::Quit,
            _ => Action::ExitMode,
        };
    }

    if let Some(action) = lookup(keymap, key) {
        return action;
    }

    // 1-9 jump straight to a slide
    match (key.code, key.modifiers) {
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::GoTo(c as usize - '1' as usize)
        }
        _ => Action::None,
    }
}

/// Find the bound action, tolerating terminals that disagree about Shift on symbols
fn lookup(keymap: &Keymap, key: KeyEvent) -> Option<Action> {
    if let Some(action) = keymap.get(&KeyBinding::new(key.code, key.modifiers)) {
        return Some(*action);
    }

    let KeyCode::Char(c) = key.code else {
        return None;
    };
    let alternate = if key.modifiers.contains(KeyModifiers::SHIFT) {
        key.modifiers.difference(KeyModifiers::SHIFT)
    } else if c.is_ascii_uppercase() {
        key.modifiers.union(KeyModifiers::SHIFT)
    } else {
        return None;
    };
    keymap.get(&KeyBinding::new(key.code, alternate)).copied()
}
