use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match app.mode {
            Mode::Normal => "PRESENT",
            Mode::Help => "HELP",
        };

        let mut status_text = format!(" {} | {}", mode_str, app.carousel.status_label());
        let title = app.deck.display_title();
        if !title.is_empty() {
            status_text.push_str(&format!(" | {}", title));
        }
        if app.carousel.config().loop_at_end {
            status_text.push_str(" | LOOP");
        }

        let help_hint = " q:quit ←/→:slides ?:help ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(status_text, theme.bar().add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(padding_len), theme.bar()),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
