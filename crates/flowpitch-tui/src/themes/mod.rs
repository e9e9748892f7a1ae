//! Theme registry and loader
//!
//! Built-in themes with per-color overrides from the config file.

pub(crate) mod dracula;
pub(crate) mod gruvbox;
pub(crate) mod nord;
pub(crate) mod one_dark;

use flowpitch_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "gruvbox-dark" | "gruvbox" => gruvbox::dark(),
        "gruvbox-light" => gruvbox::light(),
        "dracula" => dracula::default(),
        "nord" => nord::default(),
        "one-dark" | "onedark" => one_dark::default(),
        other => {
            warn!("Unknown theme '{}', falling back to gruvbox-dark", other);
            gruvbox::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 12] = [
        (&overrides.bg0, &mut theme.bg0),
        (&overrides.bg1, &mut theme.bg1),
        (&overrides.bg2, &mut theme.bg2),
        (&overrides.fg0, &mut theme.fg0),
        (&overrides.fg1, &mut theme.fg1),
        (&overrides.muted, &mut theme.muted),
        (&overrides.disabled, &mut theme.disabled),
        (&overrides.accent, &mut theme.accent),
        (&overrides.kicker, &mut theme.kicker),
        (&overrides.before, &mut theme.before),
        (&overrides.after, &mut theme.after),
        (&overrides.metric, &mut theme.metric),
    ];

    for (hex, slot) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => warn!("Ignoring invalid color override '{}'", hex),
            }
        }
    }

    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "gruvbox-light", "dracula", "nord", "one-dark"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_rejects_non_ascii() {
        assert!(parse_hex_color("é12").is_none());
        assert!(parse_hex_color("#zzzzzz").is_none());
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
    }

    #[test]
    fn test_load_theme_default() {
        let theme = load_theme(&ThemeConfig::default());
        assert!(matches!(theme.bg0, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "does-not-exist".to_string(),
            colors: ThemeColorOverrides::default(),
        };
        assert!(matches!(load_theme(&config).bg0, Color::Rgb(0x28, 0x28, 0x28)));
    }

    #[test]
    fn test_all_listed_themes_load() {
        for name in available_themes() {
            let config = ThemeConfig {
                name: name.to_string(),
                colors: ThemeColorOverrides::default(),
            };
            let _ = load_theme(&config);
        }
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "nord".to_string(),
            colors: ThemeColorOverrides {
                accent: Some("#ff0000".to_string()),
                metric: Some("nope".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert!(matches!(theme.accent, Color::Rgb(255, 0, 0)));
        assert!(matches!(theme.metric, Color::Rgb(0xeb, 0xcb, 0x8b)));
    }
}
