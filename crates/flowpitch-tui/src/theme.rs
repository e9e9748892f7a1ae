use ratatui::style::{Color, Modifier, Style};

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Surfaces
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Text
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,
    pub disabled: Color,

    // Semantic colors
    pub accent: Color,
    pub kicker: Color,
    pub before: Color,
    pub after: Color,
    pub metric: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::gruvbox::dark()
    }
}

impl Theme {
    pub fn stage(&self) -> Style {
        Style::default().fg(self.fg0).bg(self.bg0)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(self.fg0).bg(self.bg1)
    }

    pub fn border(&self, active: bool) -> Style {
        if active {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.disabled)
        }
    }

    pub fn title(&self) -> Style {
        Style::default().fg(self.fg0).add_modifier(Modifier::BOLD)
    }

    pub fn kicker(&self) -> Style {
        Style::default().fg(self.kicker).add_modifier(Modifier::BOLD)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn bar(&self) -> Style {
        Style::default().fg(self.fg1).bg(self.bg2)
    }

    /// Button style, dimmed when the action is not available
    pub fn button(&self, enabled: bool) -> Style {
        if enabled {
            Style::default().fg(self.fg0).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.disabled)
        }
    }
}
