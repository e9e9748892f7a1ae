use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
///
/// Polls at the idle tick rate normally and at the animation frame rate
/// while the slide track is moving.
pub struct EventHandler {
    tick_rate: Duration,
    frame_rate: Duration,
}

impl EventHandler {
    pub fn with_animation_fps(tick_rate_ms: u64, animation_fps: u32) -> Self {
        let frame_rate = if animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / animation_fps as u64)
        };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            frame_rate,
        }
    }

    /// Poll for the next event at the idle tick rate
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation frame rate
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.frame_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }
        let event = match event::read()? {
            // Only handle key press events, ignore release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::FocusLost => Some(AppEvent::FocusLost),
            _ => None,
        };
        Ok(event)
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Mouse button, drag or wheel
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Terminal lost focus; any drag in progress is cancelled
    FocusLost,
    /// Nothing happened within the poll window
    Tick,
}
