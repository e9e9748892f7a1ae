use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::Widget,
    Frame,
};

use crate::app::App;
use crate::widgets::SlideWidget;

/// Horizontal strip of full-width slide pages, shifted by the carousel offset
///
/// Slide `i` sits at column `i * width + offset`. Only pages overlapping the
/// stage are rendered; each goes to an off-screen buffer and is copied in,
/// clipped to the stage.
pub struct SlideTrackWidget;

impl SlideTrackWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let buf = frame.buffer_mut();
        Self::render_to(buf, area, app);
    }

    pub fn render_to(buf: &mut Buffer, area: Rect, app: &App) {
        buf.set_style(area, app.theme.stage());
        if area.width == 0 || area.height == 0 {
            return;
        }

        let width = i64::from(area.width);
        let offset = app.track_offset_columns().round() as i64;
        let page_area = Rect::new(0, 0, area.width, area.height);
        // One column of stage shows between neighbouring cards
        let card_area = Rect::new(1, 0, area.width.saturating_sub(2), area.height);

        for (index, slide) in app.deck.slides.iter().enumerate() {
            let left = index as i64 * width + offset;
            if left >= width || left + width <= 0 {
                continue;
            }

            let mut page = Buffer::empty(page_area);
            page.set_style(page_area, app.theme.stage());
            SlideWidget::new(slide, index, app.deck.len(), &app.theme)
                .active(app.carousel.is_active(index))
                .show_hint(app.config.ui.show_hints)
                .render(card_area, &mut page);

            blit(&page, left, area, buf);
        }
    }
}

/// Copy `page` into `dst` with its left edge at `left` columns into `area`
fn blit(page: &Buffer, left: i64, area: Rect, dst: &mut Buffer) {
    for py in 0..area.height {
        for px in 0..area.width {
            let column = left + i64::from(px);
            if column < 0 || column >= i64::from(area.width) {
                continue;
            }
            let target = (area.x + column as u16, area.y + py);
            if let (Some(src), Some(cell)) = (page.cell((px, py)), dst.cell_mut(target)) {
                *cell = src.clone();
            }
        }
    }
}
