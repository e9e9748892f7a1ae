use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Key help overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let keys = &app.config.keymap;
        let entries: [(String, &str); 8] = [
            (format!("{} / → / Space / Enter", keys.next), "next slide"),
            (format!("{} / ←", keys.prev), "previous slide"),
            (format!("{} / Home", keys.first), "first slide"),
            (format!("{} / End", keys.last), "last slide"),
            ("1-9".to_string(), "go to slide"),
            ("drag / click".to_string(), "swipe, dots, buttons"),
            (keys.help.clone(), "toggle help"),
            (keys.quit.clone(), "quit"),
        ];

        let theme = &app.theme;
        let key_width = entries.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        let lines: Vec<Line> = entries
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>width$}", key, width = key_width),
                        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(*desc, Style::default().fg(theme.fg1)),
                ])
            })
            .collect();

        let area = frame.area();
        let popup_width = (key_width as u16 + 28).min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);
        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(theme.card());
        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
