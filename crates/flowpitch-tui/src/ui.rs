use std::time::Instant;

use ratatui::Frame;

use crate::app::{App, Mode};
use crate::widgets::{ControlsWidget, HelpWidget, SlideTrackWidget, StatusBarWidget, ToastWidget};

/// Draw one frame
pub fn draw(frame: &mut Frame, app: &mut App, now: Instant) {
    app.resize(frame.area());

    let app = &*app;
    SlideTrackWidget::render(frame, app.layout.stage, app);
    ControlsWidget::render(frame, app);
    StatusBarWidget::render(frame, app.layout.status, app);
    ToastWidget::render(frame, app, now);

    if app.mode == Mode::Help {
        HelpWidget::render(frame, app);
    }
}
