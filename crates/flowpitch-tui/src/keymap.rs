use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyModifiers};
use flowpitch_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// Parsed key binding (key code + modifiers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn simple(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    pub fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }
}

/// Runtime keymap for key-to-action lookup
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Create a keymap from configuration
    pub fn from_config(config: &KeymapConfig) -> Self {
        let mut bindings = HashMap::new();

        let mut add_binding = |key_str: &str, action: Action| {
            if let Some(binding) = parse_key_binding(key_str) {
                if let Some(existing) = bindings.get(&binding) {
                    warn!(
                        "Key conflict: '{}' already bound to {:?}, ignoring binding to {:?}",
                        key_str, existing, action
                    );
                } else {
                    bindings.insert(binding, action);
                }
            } else {
                warn!("Invalid key binding: '{}', ignoring", key_str);
            }
        };

        add_binding(&config.quit, Action::Quit);
        add_binding(&config.next, Action::Next);
        add_binding(&config.prev, Action::Prev);
        add_binding(&config.first, Action::First);
        add_binding(&config.last, Action::Last);
        add_binding(&config.help, Action::ToggleHelp);

        // Always available, whatever the config says
        bindings.insert(KeyBinding::ctrl(KeyCode::Char('c')), Action::Quit);
        bindings.insert(KeyBinding::simple(KeyCode::Right), Action::Next);
        bindings.insert(KeyBinding::simple(KeyCode::Char(' ')), Action::Next);
        bindings.insert(KeyBinding::simple(KeyCode::Enter), Action::Next);
        bindings.insert(KeyBinding::simple(KeyCode::Left), Action::Prev);
        bindings.entry(KeyBinding::simple(KeyCode::Home)).or_insert(Action::First);
        bindings.entry(KeyBinding::simple(KeyCode::End)).or_insert(Action::Last);
        bindings.insert(KeyBinding::simple(KeyCode::Esc), Action::ExitMode);

        Self { bindings }
    }

    /// Get action for a key binding
    pub fn get(&self, binding: &KeyBinding) -> Option<&Action> {
        self.bindings.get(binding)
    }
}

/// Parse Vim-style key notation into KeyBinding
/// Supported formats:
/// - Single char: "l", "h", "q", "?"
/// - Uppercase (Shift): "G", "N"
/// - Ctrl: "<C-n>", "<C-p>"
/// - Shift: "<S-Tab>", "<S-g>"
/// - Special keys: "<CR>", "<Esc>", "<Tab>", "<Space>", "<Left>", "<Right>", "<Home>", "<End>", "<PageDown>"
pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
    let s = s.trim();

    if s.len() > 2 && s.starts_with('<') && s.ends_with('>') {
        let inner = &s[1..s.len() - 1];
        return parse_special_key(inner);
    }

    let mut chars = s.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    if c.is_ascii_uppercase() {
        return Some(KeyBinding::shift(KeyCode::Char(c)));
    }
    Some(KeyBinding::simple(KeyCode::Char(c)))
}

/// Parse special key notation (content inside <...>)
fn parse_special_key(inner: &str) -> Option<KeyBinding> {
    if let Some(rest) = inner.strip_prefix("C-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::ctrl(key));
    }

    if let Some(rest) = inner.strip_prefix("S-") {
        let key = parse_key_name(rest)?;
        return Some(KeyBinding::shift(key));
    }

    parse_key_name(inner).map(KeyBinding::simple)
}

/// Parse a key name (without modifiers)
fn parse_key_name(name: &str) -> Option<KeyCode> {
    match name.to_lowercase().as_str() {
        "cr" | "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "space" | "spc" => Some(KeyCode::Char(' ')),
        "bs" | "backspace" => Some(KeyCode::Backspace),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" | "pgup" => Some(KeyCode::PageUp),
        "pagedown" | "pgdn" => Some(KeyCode::PageDown),
        _ => {
            // Single character after modifier (e.g., "n" in "<C-n>")
            let mut chars = name.chars();
            let c = chars.next()?;
            if chars.next().is_none() {
                Some(KeyCode::Char(c.to_ascii_lowercase()))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_keys() {
        assert_eq!(parse_key_binding("l"), Some(KeyBinding::simple(KeyCode::Char('l'))));
        assert_eq!(parse_key_binding("?"), Some(KeyBinding::simple(KeyCode::Char('?'))));
        assert_eq!(parse_key_binding("gg"), None);
        assert_eq!(parse_key_binding(""), None);
    }

    #[test]
    fn test_parse_uppercase_keys() {
        assert_eq!(parse_key_binding("G"), Some(KeyBinding::shift(KeyCode::Char('G'))));
    }

    #[test]
    fn test_parse_ctrl_keys() {
        assert_eq!(parse_key_binding("<C-n>"), Some(KeyBinding::ctrl(KeyCode::Char('n'))));
    }

    #[test]
    fn test_parse_special_keys() {
        assert_eq!(parse_key_binding("<CR>"), Some(KeyBinding::simple(KeyCode::Enter)));
        assert_eq!(parse_key_binding("<Space>"), Some(KeyBinding::simple(KeyCode::Char(' '))));
        assert_eq!(parse_key_binding("<PageDown>"), Some(KeyBinding::simple(KeyCode::PageDown)));
        assert_eq!(parse_key_binding("<S-Tab>"), Some(KeyBinding::shift(KeyCode::Tab)));
        assert_eq!(parse_key_binding("<Nope>"), None);
    }

    #[test]
    fn test_keymap_from_config() {
        let keymap = Keymap::default();

        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('q'))), Some(&Action::Quit));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('l'))), Some(&Action::Next));
        assert_eq!(keymap.get(&KeyBinding::shift(KeyCode::Char('G'))), Some(&Action::Last));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char('?'))), Some(&Action::ToggleHelp));
    }

    #[test]
    fn test_fixed_navigation_keys() {
        let config = KeymapConfig {
            next: "<Left>".to_string(),
            ..Default::default()
        };
        let keymap = Keymap::from_config(&config);

        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Right)), Some(&Action::Next));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Char(' '))), Some(&Action::Next));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Enter)), Some(&Action::Next));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Left)), Some(&Action::Prev));
        assert_eq!(keymap.get(&KeyBinding::simple(KeyCode::Home)), Some(&Action::First));
        assert_eq!(keymap.get(&KeyBinding::ctrl(KeyCode::Char('c'))), Some(&Action::Quit));
    }
}
