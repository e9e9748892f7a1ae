//! Screen regions and mouse hit-testing
//!
//! The layout is a pure function of the terminal area and slide count, so the
//! same geometry is used for drawing and for deciding what a click hit.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the "‹ Prev" / "Next ›" buttons, in columns
pub const BUTTON_WIDTH: u16 = 8;
/// Each dot takes a glyph and a gap
const DOT_STRIDE: u16 = 2;
/// Left/right tap zones are this fraction of the stage width
const TAP_ZONE_DIVISOR: u16 = 6;

/// What a mouse position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    PrevButton,
    NextButton,
    Dot(usize),
    TapLeft,
    TapRight,
    Stage,
    /// Progress bar, status bar, gaps between controls
    Chrome,
}

impl Hit {
    pub fn is_stage(&self) -> bool {
        matches!(self, Hit::Stage | Hit::TapLeft | Hit::TapRight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub area: Rect,
    /// Where slides are drawn
    pub stage: Rect,
    pub controls: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    /// Span covering all dots
    pub dots: Rect,
    pub progress: Rect,
    pub status: Rect,
    slide_count: usize,
}

impl ScreenLayout {
    pub fn new(area: Rect, slide_count: usize) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),    // Stage
                Constraint::Length(1), // Prev / dots / next
                Constraint::Length(1), // Progress
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let controls = rows[1];
        let button_width = BUTTON_WIDTH.min(controls.width / 2);
        let prev_button = Rect::new(controls.x, controls.y, button_width, controls.height);
        let next_button = Rect::new(
            controls.right().saturating_sub(button_width),
            controls.y,
            button_width,
            controls.height,
        );

        let between = controls.width.saturating_sub(button_width * 2);
        let dots_width = (slide_count as u16)
            .saturating_mul(DOT_STRIDE)
            .saturating_sub(1)
            .min(between);
        let dots = Rect::new(
            controls.x + button_width + (between - dots_width) / 2,
            controls.y,
            dots_width,
            controls.height,
        );

        Self {
            area,
            stage: rows[0],
            controls,
            prev_button,
            next_button,
            dots,
            progress: rows[2],
            status: rows[3],
            slide_count,
        }
    }

    /// Column of dot `index`, if it fits on screen
    pub fn dot_x(&self, index: usize) -> Option<u16> {
        let offset = (index as u16).checked_mul(DOT_STRIDE)?;
        (offset < self.dots.width).then(|| self.dots.x + offset)
    }

    pub fn hit(&self, column: u16, row: u16) -> Hit {
        if contains(self.stage, column, row) {
            let zone = self.stage.width / TAP_ZONE_DIVISOR;
            if column < self.stage.x + zone {
                return Hit::TapLeft;
            }
            if column >= self.stage.right().saturating_sub(zone) {
                return Hit::TapRight;
            }
            return Hit::Stage;
        }
        if contains(self.prev_button, column, row) {
            return Hit::PrevButton;
        }
        if contains(self.next_button, column, row) {
            return Hit::NextButton;
        }
        if contains(self.dots, column, row) {
            let index = ((column - self.dots.x) / DOT_STRIDE) as usize;
            if index < self.slide_count {
                return Hit::Dot(index);
            }
        }
        Hit::Chrome
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::new(Rect::new(0, 0, 120, 40), 7)
    }

    #[test]
    fn test_regions() {
        let l = layout();
        assert_eq!(l.stage, Rect::new(0, 0, 120, 37));
        assert_eq!(l.controls.y, 37);
        assert_eq!(l.progress.y, 38);
        assert_eq!(l.status.y, 39);
        assert_eq!(l.dots.width, 13);
        assert_eq!(l.dots.x, 8 + (104 - 13) / 2);
    }

    #[test]
    fn test_hit_controls() {
        let l = layout();
        assert_eq!(l.hit(0, 37), Hit::PrevButton);
        assert_eq!(l.hit(119, 37), Hit::NextButton);
        assert_eq!(l.hit(l.dots.x, 37), Hit::Dot(0));
        assert_eq!(l.hit(l.dots.x + 1, 37), Hit::Dot(0));
        assert_eq!(l.hit(l.dots.x + 12, 37), Hit::Dot(6));
        assert_eq!(l.hit(60, 38), Hit::Chrome);
        assert!(!Hit::Dot(3).is_stage());
        assert!(Hit::TapLeft.is_stage());
    }

    #[test]
    fn test_hit_stage_zones() {
        let l = layout();
        assert_eq!(l.hit(0, 5), Hit::TapLeft);
        assert_eq!(l.hit(19, 5), Hit::TapLeft);
        assert_eq!(l.hit(20, 5), Hit::Stage);
        assert_eq!(l.hit(100, 5), Hit::TapRight);
        assert_eq!(l.hit(99, 5), Hit::Stage);
    }

    #[test]
    fn test_dot_positions() {
        let l = layout();
        assert_eq!(l.dot_x(0), Some(l.dots.x));
        assert_eq!(l.dot_x(6), Some(l.dots.x + 12));
        assert_eq!(l.dot_x(7), None);
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let l = ScreenLayout::new(Rect::new(0, 0, 3, 2), 40);
        let _ = l.hit(1, 1);
        let _ = l.hit(0, 0);
    }
}
