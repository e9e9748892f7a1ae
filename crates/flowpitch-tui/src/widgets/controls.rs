use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols,
    text::Span,
    widgets::{LineGauge, Paragraph},
    Frame,
};

use crate::app::App;

/// Prev/next buttons, dot indicators and the progress bar
pub struct ControlsWidget;

impl ControlsWidget {
    pub fn render(frame: &mut Frame, app: &App) {
        let layout = &app.layout;
        let theme = &app.theme;
        let carousel = &app.carousel;

        frame.buffer_mut().set_style(layout.controls, theme.stage());

        frame.render_widget(
            Paragraph::new(Span::styled("‹ Prev", theme.button(carousel.can_prev()))),
            layout.prev_button,
        );
        frame.render_widget(
            Paragraph::new(Span::styled("Next ›", theme.button(carousel.can_next())))
                .alignment(Alignment::Right),
            layout.next_button,
        );

        let buf = frame.buffer_mut();
        for index in 0..app.deck.len() {
            let Some(x) = layout.dot_x(index) else {
                break;
            };
            let (symbol, color) = if carousel.is_active(index) {
                ("●", theme.accent)
            } else {
                ("○", theme.disabled)
            };
            buf.set_string(x, layout.dots.y, symbol, Style::default().fg(color));
        }

        Self::render_progress(frame, layout.progress, app);
    }

    fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
        let carousel = &app.carousel;
        let label = format!("{}/{} ", carousel.current_index() + 1, carousel.slide_count());
        let gauge = LineGauge::default()
            .ratio(carousel.progress().clamp(0.0, 1.0))
            .label(Span::styled(label, app.theme.muted()))
            .line_set(symbols::line::THICK)
            .filled_style(Style::default().fg(app.theme.accent))
            .unfilled_style(Style::default().fg(app.theme.disabled))
            .style(app.theme.stage());
        frame.render_widget(gauge, area);
    }
}
