use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use flowpitch_core::carousel::PointerId;
use flowpitch_core::{AppConfig, Carousel, Deck, Navigation, Notice, PointerTarget};
use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::input::Action;
use crate::layout::{Hit, ScreenLayout};
use crate::theme::Theme;

/// The terminal has a single mouse pointer
pub const MOUSE_POINTER: PointerId = 1;

/// Carousel units per terminal column
///
/// Motion tuning (flick scale, snap thresholds) is expressed in pixels, so
/// columns are converted at the edge of the carousel.
pub const CELL_PX: f64 = 8.0;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Presenting slides
    Normal,
    /// Key help overlay
    Help,
}

/// Where the left button went down, for telling clicks from drags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Press {
    hit: Hit,
    column: u16,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Slides being presented
    pub deck: Deck,
    /// Slide index, track offset and spring
    pub carousel: Carousel,
    /// "Slide i/N" toast
    pub notice: Notice,
    pub theme: Theme,
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Geometry of the last known terminal size
    pub layout: ScreenLayout,
    press: Option<Press>,
}

impl App {
    pub fn new(deck: Deck, config: Arc<AppConfig>, theme: Theme) -> Self {
        let carousel = Carousel::new(deck.len(), 0.0, config.carousel.clone());
        let notice = Notice::new(Duration::from_millis(config.carousel.toast_duration_ms));
        Self {
            config,
            deck,
            carousel,
            notice,
            theme,
            mode: Mode::Normal,
            should_quit: false,
            layout: ScreenLayout::default(),
            press: None,
        }
    }

    /// Recompute geometry for a new terminal area and re-align the track
    pub fn resize(&mut self, area: Rect) {
        if area == self.layout.area {
            return;
        }
        self.layout = ScreenLayout::new(area, self.deck.len());
        self.press = None;
        self.carousel.on_resize(self.stage_px());
        debug!("Resized to {}x{}", area.width, area.height);
    }

    fn stage_px(&self) -> f64 {
        f64::from(self.layout.stage.width) * CELL_PX
    }

    /// Track offset in terminal columns
    pub fn track_offset_columns(&self) -> f64 {
        self.carousel.offset() / CELL_PX
    }

    /// Advance animation by one frame
    pub fn tick(&mut self, now: Instant) {
        self.carousel.tick(now);
    }

    /// Whether frames should be produced at the animation rate
    pub fn needs_animation(&self) -> bool {
        !self.carousel.is_settled()
    }

    /// Show the toast for a successful navigation
    fn notify(&mut self, nav: Option<Navigation>, now: Instant) {
        if let Some(nav) = nav {
            info!("Slide {}/{}", nav.index + 1, nav.total);
            self.notice.show(nav.message(), now);
        }
    }

    /// Apply an input action
    pub fn apply(&mut self, action: Action, now: Instant) {
        let nav = match action {
            Action::Quit => {
                self.should_quit = true;
                None
            }
            Action::Next => self.carousel.next(),
            Action::Prev => self.carousel.prev(),
            Action::First => self.carousel.first(),
            Action::Last => self.carousel.last(),
            Action::GoTo(index) if index < self.carousel.slide_count() => {
                self.carousel.go_to(index as isize)
            }
            Action::GoTo(_) => None,
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Normal => {
                        // Mouse input is ignored under the overlay, so a drag would never end
                        self.cancel_drag();
                        self.notice.clear();
                        Mode::Help
                    }
                    Mode::Help => Mode::Normal,
                };
                None
            }
            Action::ExitMode => {
                self.mode = Mode::Normal;
                None
            }
            Action::None => None,
        };
        self.notify(nav, now);
    }

    /// Translate mouse input into drag callbacks and control clicks
    ///
    /// Pressing the stage starts a drag; releasing it lets the carousel pick
    /// the slide from position and flick velocity. A press and release on the
    /// same cell of a button, dot or tap zone is also a click.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        if self.mode == Mode::Help {
            return;
        }
        let hit = self.layout.hit(mouse.column, mouse.row);
        let x = f64::from(mouse.column) * CELL_PX;

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some(Press {
                    hit,
                    column: mouse.column,
                });
                let target = if hit.is_stage() {
                    PointerTarget::Stage
                } else {
                    PointerTarget::Control
                };
                self.carousel.on_drag_start(MOUSE_POINTER, x, target, now);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.carousel.on_drag_move(MOUSE_POINTER, x, now);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let nav = self.carousel.on_drag_end(MOUSE_POINTER, self.stage_px());
                self.notify(nav, now);

                let press = self.press.take();
                if press == Some(Press { hit, column: mouse.column }) {
                    self.click(hit, now);
                }
            }
            _ => {}
        }
    }

    fn click(&mut self, hit: Hit, now: Instant) {
        let action = match hit {
            Hit::PrevButton | Hit::TapLeft => Action::Prev,
            Hit::NextButton | Hit::TapRight => Action::Next,
            Hit::Dot(index) => Action::GoTo(index),
            Hit::Stage | Hit::Chrome => return,
        };
        self.apply(action, now);
    }

    /// The pointer went away (e.g. focus lost) mid-gesture
    pub fn cancel_drag(&mut self) {
        self.press = None;
        self.carousel.on_drag_cancel(MOUSE_POINTER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use flowpitch_core::CarouselConfig;

    fn app() -> App {
        let mut app = App::new(Deck::demo().unwrap(), Arc::new(AppConfig::default()), Theme::default());
        app.resize(Rect::new(0, 0, 120, 40));
        app
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_resize_aligns_track_to_stage() {
        let mut app = app();
        app.apply(Action::GoTo(2), Instant::now());
        app.resize(Rect::new(0, 0, 80, 24));
        assert_eq!(app.track_offset_columns(), -160.0);
        assert!(app.carousel.is_settled());
    }

    #[test]
    fn test_navigation_shows_notice() {
        let now = Instant::now();
        let mut app = app();
        app.apply(Action::Next, now);
        assert_eq!(app.carousel.current_index(), 1);
        assert_eq!(app.notice.visible(now), Some("Slide 2/7"));
    }

    #[test]
    fn test_edge_noop_shows_nothing() {
        let now = Instant::now();
        let mut app = app();
        app.apply(Action::Prev, now);
        assert!(app.notice.visible(now).is_none());
    }

    #[test]
    fn test_help_toggle_and_quit() {
        let now = Instant::now();
        let mut app = app();
        app.apply(Action::ToggleHelp, now);
        assert_eq!(app.mode, Mode::Help);
        app.apply(Action::ExitMode, now);
        assert_eq!(app.mode, Mode::Normal);
        app.apply(Action::Quit, now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_click_next_button() {
        let now = Instant::now();
        let mut app = app();
        let y = app.layout.controls.y;
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 115, y), now);
        assert!(!app.carousel.is_dragging());
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 115, y), now);
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn test_click_dot() {
        let now = Instant::now();
        let mut app = app();
        let y = app.layout.controls.y;
        let x = app.layout.dot_x(4).unwrap();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), x, y), now);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), x, y), now);
        assert_eq!(app.carousel.current_index(), 4);
    }

    #[test]
    fn test_tap_right_zone() {
        let now = Instant::now();
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 110, 10), now);
        assert!(app.carousel.is_dragging());
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 110, 10), now);
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn test_plain_stage_click_does_nothing() {
        let now = Instant::now();
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 60, 10), now);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 60, 10), now);
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn test_drag_past_half_advances() {
        let t0 = Instant::now();
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 90, 10), t0);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 10), t0 + Duration::from_millis(300));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 10), t0 + Duration::from_millis(500));
        assert_eq!(app.track_offset_columns(), -70.0);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 10), t0 + Duration::from_millis(510));
        assert_eq!(app.carousel.current_index(), 1);
        assert!(app.needs_animation());
    }

    #[test]
    fn test_focus_lost_cancels_drag() {
        let t0 = Instant::now();
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 90, 10), t0);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 20, 10), t0 + Duration::from_millis(50));
        app.cancel_drag();
        assert!(!app.carousel.is_dragging());
        assert_eq!(app.carousel.current_index(), 0);
    }

    #[test]
    fn test_short_flick_advances() {
        let t0 = Instant::now();
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 80, 10), t0);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 70, 10), t0 + Duration::from_millis(25));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 70, 10), t0 + Duration::from_millis(30));
        assert_eq!(app.carousel.current_index(), 1);
    }

    #[test]
    fn test_help_during_drag_ends_session() {
        let t0 = Instant::now();
        let mut app = app();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 60, 10), t0);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 50, 10), t0 + Duration::from_millis(16));
        app.apply(Action::ToggleHelp, t0 + Duration::from_millis(20));
        assert!(!app.carousel.is_dragging());

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 50, 10), t0 + Duration::from_millis(30));
        app.apply(Action::ExitMode, t0 + Duration::from_millis(40));
        app.apply(Action::Next, t0 + Duration::from_millis(50));

        let mut now = t0 + Duration::from_millis(50);
        for _ in 0..300 {
            app.tick(now);
            now += Duration::from_millis(16);
        }
        assert_eq!(app.carousel.current_index(), 1);
        assert!(app.carousel.is_settled());
        assert_eq!(app.track_offset_columns(), -120.0);
    }

    #[test]
    fn test_digit_past_last_slide_is_ignored() {
        let config = AppConfig {
            carousel: CarouselConfig {
                loop_at_end: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut app = App::new(Deck::demo().unwrap(), Arc::new(config), Theme::default());
        app.resize(Rect::new(0, 0, 120, 40));
        app.apply(Action::GoTo(3), Instant::now());
        app.apply(Action::GoTo(8), Instant::now());
        assert_eq!(app.carousel.current_index(), 3);
    }

    #[test]
    fn test_loop_config_is_used() {
        let config = AppConfig {
            carousel: CarouselConfig {
                loop_at_end: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut app = App::new(Deck::demo().unwrap(), Arc::new(config), Theme::default());
        app.resize(Rect::new(0, 0, 120, 40));
        app.apply(Action::Prev, Instant::now());
        assert_eq!(app.carousel.current_index(), 6);
    }
}
