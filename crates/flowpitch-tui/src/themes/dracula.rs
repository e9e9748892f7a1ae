//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

/// Dracula default theme
pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2a, 0x36), // Background
        bg1: Color::Rgb(0x21, 0x22, 0x2c), // Current Line (darker)
        bg2: Color::Rgb(0x44, 0x47, 0x5a), // Selection
        fg0: Color::Rgb(0xf8, 0xf8, 0xf2), // Foreground
        fg1: Color::Rgb(0xe0, 0xe0, 0xe0),
        muted: Color::Rgb(0xbd, 0x93, 0xf9), // Purple
        disabled: Color::Rgb(0x62, 0x72, 0xa4), // Comment
        accent: Color::Rgb(0xff, 0x79, 0xc6), // Pink
        kicker: Color::Rgb(0x8b, 0xe9, 0xfd), // Cyan
        before: Color::Rgb(0xff, 0x55, 0x55), // Red
        after: Color::Rgb(0x50, 0xfa, 0x7b),  // Green
        metric: Color::Rgb(0xf1, 0xfa, 0x8c), // Yellow
    }
}
