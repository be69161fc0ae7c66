use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use tracing::info;

use slidestrip_core::AppConfig;
use slidestrip_tui::{
    event::{AppEvent, EventHandler},
    input::{handle_key_event, handle_mouse_event},
    scroll::ScrollConfigExt,
    widgets::{CarouselWidget, ColorCard, StatusBarWidget},
    App,
};

pub async fn run(config: &AppConfig, items: usize, card_width: u16) -> Result<()> {
    let mut app = App::new(ColorCard::cycle(items, card_width), config);

    // Timer needs the runtime; mount before the terminal is taken over
    app.view.mount()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Slidestrip"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app, config);
    app.view.unmount();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<ColorCard>,
    config: &AppConfig,
) -> Result<()> {
    let event_handler =
        EventHandler::new(config.ui.tick_rate_ms, config.scroll.animation_tick_duration());

    // Checked at the end of each iteration to pick the next poll timeout
    let mut needs_fast_update = false;

    loop {
        // Auto-advance ticks that fired while we were waiting on input
        app.view.pump_ticks();
        app.view.update();

        terminal.draw(|frame| draw(frame, app))?;

        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => app.handle_action(handle_key_event(key)),
                AppEvent::Mouse(mouse) => app.handle_action(handle_mouse_event(mouse)),
                // Layout is remeasured on every draw
                AppEvent::Resize(_, _) | AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.view.needs_fast_update();

        if app.should_quit {
            info!("Quit requested");
            return Ok(());
        }
    }
}

fn draw(frame: &mut Frame, app: &mut App<ColorCard>) {
    let size = frame.area();
    let status_rows = if app.show_status_bar { 1 } else { 0 };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(status_rows)])
        .split(size);

    CarouselWidget::render(frame, main_layout[0], &mut app.view, &app.theme);
    if app.show_status_bar {
        StatusBarWidget::render(
            frame,
            main_layout[1],
            &app.view,
            &app.theme,
            app.status_message.as_deref(),
        );
    }
}
