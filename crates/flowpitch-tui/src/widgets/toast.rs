use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

/// Transient "Slide i/N" notice near the bottom of the stage
pub struct ToastWidget;

impl ToastWidget {
    pub fn render(frame: &mut Frame, app: &App, now: Instant) {
        let Some(message) = app.notice.visible(now) else {
            return;
        };
        let Some(area) = toast_rect(app.layout.stage, message.width() as u16 + 4) else {
            return;
        };

        frame.render_widget(Clear, area);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(app.theme.border(true))
            .style(app.theme.bar());
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}

/// Centered 3-row box two rows above the bottom of `stage`, if it fits
fn toast_rect(stage: Rect, width: u16) -> Option<Rect> {
    let height = 3;
    if stage.width < width || stage.height < height + 2 {
        return None;
    }
    let x = stage.x + (stage.width - width) / 2;
    let y = stage.bottom() - height - 2;
    Some(Rect::new(x, y, width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_rect_centered() {
        let rect = toast_rect(Rect::new(0, 0, 100, 30), 13).unwrap();
        assert_eq!(rect, Rect::new(43, 25, 13, 3));
    }

    #[test]
    fn test_toast_rect_too_small() {
        assert!(toast_rect(Rect::new(0, 0, 10, 30), 13).is_none());
        assert!(toast_rect(Rect::new(0, 0, 100, 4), 13).is_none());
    }
}
