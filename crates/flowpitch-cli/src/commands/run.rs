use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use flowpitch_core::AppConfig;
use flowpitch_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    keymap::Keymap,
    load_theme, ui, App,
};

use crate::RunArgs;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run(mut config: AppConfig, args: RunArgs) -> Result<()> {
    // Command line overrides
    if args.loop_at_end {
        config.carousel.loop_at_end = true;
    }
    if let Some(theme) = args.theme {
        config.ui.theme.name = theme;
    }

    let deck = super::resolve_deck(&config, args.deck)?;
    info!("Presenting {} slides", deck.len());

    let config = Arc::new(config);
    let keymap = Keymap::from_config(&config.keymap);
    let theme = load_theme(&config.ui.theme);
    let title = match deck.display_title() {
        "" => "FlowPitch".to_string(),
        t => format!("{} - FlowPitch", t),
    };

    let mut app = App::new(deck, Arc::clone(&config), theme);
    if let Some(start) = args.start {
        app.carousel.jump_to(start.max(1) as isize - 1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange,
        SetTitle(title)
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);
    let result = event_loop(&mut terminal, &mut app, &events, &keymap);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(terminal: &mut Tui, app: &mut App, events: &EventHandler, keymap: &Keymap) -> Result<()> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::draw(frame, app, now))?;

        let event = if app.needs_animation() {
            events.next_animation()?
        } else {
            events.next()?
        };

        let now = Instant::now();
        match event {
            Some(AppEvent::Key(key)) => {
                let action = handle_key_event(key, app, keymap);
                app.apply(action, now);
            }
            Some(AppEvent::Mouse(mouse)) => app.handle_mouse(mouse, now),
            Some(AppEvent::Resize(w, h)) => {
                debug!("Terminal resized to {}x{}", w, h);
                // The next draw picks up the new area
            }
            Some(AppEvent::FocusLost) => app.cancel_drag(),
            Some(AppEvent::Tick) | None => {}
        }

        if app.should_quit {
            info!("Quit");
            return Ok(());
        }
    }
}
