use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use rebound_core::AppConfig;
use rebound_tui::{
    event::{AppEvent, EventHandler},
    input::handle_key_event,
    widgets::{PanelWidget, StatusBarWidget},
    App, Theme,
};

pub fn run(config: AppConfig) -> Result<()> {
    tracing::info!("Starting interactive panel");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Rebound"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);
    let mut app = App::new(config, Theme::default());

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!(position = %app.position(), "Exiting");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        // Fire animation frames that came due since the last pass
        app.tick(Instant::now());

        terminal.draw(|frame| {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(frame.area());

            PanelWidget::render(frame, layout[0], app);
            StatusBarWidget::render(frame, layout[1], app);
        })?;

        // Poll at frame rate only while an animation waits for frames
        let event = if app.needs_frames() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };

        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => {
                    app.status_message = None;
                    let action = handle_key_event(key);
                    app.apply_action(action, Instant::now());
                }
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                // The viewport is re-measured on the next draw
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
