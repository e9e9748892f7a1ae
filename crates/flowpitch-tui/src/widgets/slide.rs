use flowpitch_core::{Metric, Slide, SlideBody};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const HINT: &str = "←/→ • drag • keys";

/// One slide drawn as a full page card
pub struct SlideWidget<'a> {
    slide: &'a Slide,
    index: usize,
    total: usize,
    active: bool,
    show_hint: bool,
    theme: &'a Theme,
}

impl<'a> SlideWidget<'a> {
    pub fn new(slide: &'a Slide, index: usize, total: usize, theme: &'a Theme) -> Self {
        Self {
            slide,
            index,
            total,
            active: false,
            show_hint: true,
            theme,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn show_hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    fn header_lines(&self) -> Vec<Line<'a>> {
        let t = self.theme;
        let mut lines = Vec::new();
        if !self.slide.kicker.is_empty() {
            lines.push(Line::from(Span::styled(self.slide.kicker.as_str(), t.kicker())));
        }
        lines.push(Line::from(Span::styled(self.slide.title.as_str(), t.title())));
        if !self.slide.subtitle.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(self.slide.subtitle.as_str(), t.muted())));
        }
        lines
    }

    fn header_height(&self, width: u16) -> u16 {
        let mut height = wrapped_height(&self.slide.title, width);
        if !self.slide.kicker.is_empty() {
            height += wrapped_height(&self.slide.kicker, width);
        }
        if !self.slide.subtitle.is_empty() {
            height += 1 + wrapped_height(&self.slide.subtitle, width);
        }
        height
    }

    fn render_footer(&self, area: Rect, buf: &mut Buffer) {
        let counter = format!("Slide {} / {}", self.index + 1, self.total);
        Paragraph::new(Span::styled(counter, self.theme.muted())).render(area, buf);
        if self.show_hint {
            Paragraph::new(Span::styled(HINT, self.theme.muted()))
                .alignment(Alignment::Right)
                .render(area, buf);
        }
    }

    fn render_standard(&self, area: Rect, bullets: &'a [String], buf: &mut Buffer) {
        let t = self.theme;
        let mut lines = self.header_lines();

        if !bullets.is_empty() {
            lines.push(Line::default());
            for bullet in bullets {
                lines.push(Line::from(vec![
                    Span::styled("• ", Style::default().fg(t.accent)),
                    Span::styled(bullet.as_str(), Style::default().fg(t.fg1)),
                ]));
            }
        }

        if let Some(metric) = &self.slide.metric {
            lines.push(Line::default());
            lines.extend(metric_lines(metric, t));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }

    #[allow(clippy::too_many_arguments)]
    fn render_hero(
        &self,
        area: Rect,
        before: &'a [String],
        after: &'a [String],
        chips: &'a [String],
        before_tag: &'a str,
        after_tag: &'a str,
        buf: &mut Buffer,
    ) {
        let t = self.theme;
        let metric_height = if self.slide.metric.is_some() { 3 } else { 0 };
        let chips_height = if chips.is_empty() { 0 } else { 2 };
        let [header, panels, chips_area, metric_area] = Layout::vertical([
            Constraint::Length(self.header_height(area.width) + 1),
            Constraint::Min(3),
            Constraint::Length(chips_height),
            Constraint::Length(metric_height),
        ])
        .areas(area);

        Paragraph::new(self.header_lines())
            .wrap(Wrap { trim: true })
            .render(header, buf);

        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(panels);
        render_panel(left, "Before", before_tag, "✕ ", t.before, before, t, buf);
        render_panel(right, "After", after_tag, "✓ ", t.after, after, t, buf);

        if !chips.is_empty() {
            let mut spans = Vec::with_capacity(chips.len() * 2);
            for chip in chips {
                spans.push(Span::styled(
                    format!("[ {} ]", chip),
                    Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(" "));
            }
            let chips_line = Rect { y: chips_area.y + 1, height: 1, ..chips_area };
            Paragraph::new(Line::from(spans)).render(chips_line, buf);
        }

        if let Some(metric) = &self.slide.metric {
            Paragraph::new(metric_lines(metric, t)).render(metric_area, buf);
        }
    }
}

impl Widget for SlideWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border(self.active))
            .style(self.theme.card())
            .padding(Padding::new(2, 2, 1, 0));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let [content, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        match self.slide.body() {
            SlideBody::Standard { bullets } => self.render_standard(content, bullets, buf),
            SlideBody::Hero {
                before,
                after,
                chips,
                before_tag,
                after_tag,
            } => self.render_hero(content, before, after, chips, before_tag, after_tag, buf),
        }

        self.render_footer(footer, buf);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_panel(
    area: Rect,
    badge: &str,
    tag: &str,
    marker: &'static str,
    color: ratatui::style::Color,
    items: &[String],
    t: &Theme,
    buf: &mut Buffer,
) {
    let title = Line::from(vec![
        Span::styled(format!(" {} ", badge), Style::default().fg(t.bg0).bg(color).add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {} ", tag), t.muted()),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(t.disabled))
        .title(title)
        .padding(Padding::horizontal(1));

    let lines: Vec<Line> = items
        .iter()
        .map(|item| {
            Line::from(vec![
                Span::styled(marker, Style::default().fg(color)),
                Span::styled(item.as_str(), Style::default().fg(t.fg1)),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn metric_lines<'a>(metric: &'a Metric, t: &Theme) -> Vec<Line<'a>> {
    vec![
        Line::from(vec![
            Span::styled("▌ ", Style::default().fg(t.metric)),
            Span::styled(
                metric.num.as_str(),
                Style::default().fg(t.metric).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(metric.label.as_str(), t.muted()),
        ]),
    ]
}

/// Lines `text` occupies when greedily word-wrapped to `width` columns
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    if width == 0 {
        return 1;
    }
    let width = width as usize;
    let mut lines = 1u16;
    let mut used = 0usize;

    for word in text.split_whitespace() {
        let w = word.width();
        let needed = if used == 0 { w } else { used + 1 + w };
        if needed <= width {
            used = needed;
        } else if w > width {
            // Long words are broken across lines
            if used > 0 {
                lines += 1;
            }
            lines += ((w - 1) / width) as u16;
            used = w % width;
            if used == 0 {
                used = width;
            }
        } else {
            lines += 1;
            used = w;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowpitch_core::Deck;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "));
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_wrapped_height() {
        assert_eq!(wrapped_height("", 10), 1);
        assert_eq!(wrapped_height("short", 10), 1);
        assert_eq!(wrapped_height("one two three", 7), 2);
        assert_eq!(wrapped_height("aaaa bbbb cccc", 4), 3);
        assert_eq!(wrapped_height("abcdefghij", 4), 3);
        assert_eq!(wrapped_height("anything", 0), 1);
    }

    #[test]
    fn test_standard_slide_renders_content() {
        let deck = Deck::demo().unwrap();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 100, 24);
        let mut buf = Buffer::empty(area);
        SlideWidget::new(&deck.slides[2], 2, deck.len(), &theme)
            .active(true)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("PROBLEM"));
        assert!(text.contains("PPT/PDF sharing kills momentum."));
        assert!(text.contains("• The story breaks"));
        assert!(text.contains("Slide 3 / 7"));
        assert!(text.contains("drag"));
    }

    #[test]
    fn test_hero_slide_renders_panels() {
        let deck = Deck::demo().unwrap();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 140, 36);
        let mut buf = Buffer::empty(area);
        SlideWidget::new(&deck.slides[0], 0, deck.len(), &theme)
            .show_hint(false)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Before"));
        assert!(text.contains("After"));
        assert!(text.contains("[ Faster creation ]"));
        assert!(text.contains("Trackable"));
        assert!(!text.contains("drag • keys"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let deck = Deck::demo().unwrap();
        let theme = Theme::default();
        for (w, h) in [(0, 0), (1, 1), (3, 2), (10, 4)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            SlideWidget::new(&deck.slides[0], 0, 7, &theme).render(area, &mut buf);
        }
    }
}
