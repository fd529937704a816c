use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use vibepup_tui::app::App;
use vibepup_tui::config::{Flags, Settings};
use vibepup_tui::decor::Catalog;
use vibepup_tui::event::AppEvent;
use vibepup_tui::motion::Ticker;
use vibepup_tui::tui::Renderer;

/// Logs never touch the terminal we draw on
fn init_tracing(log_file: Option<&Path>) -> io::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .try_init();
        }
    }
    Ok(())
}

/// Initialize the terminal for TUI
fn init_terminal(alt_screen: bool) -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if alt_screen {
        execute!(stdout, EnterAlternateScreen)?;
    }
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to its original state
fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    alt_screen: bool,
) -> io::Result<()> {
    disable_raw_mode()?;
    if alt_screen {
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    }
    terminal.show_cursor()
}

/// Run the application
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
) -> io::Result<()> {
    let mut ticker = Ticker::new(app.settings().performance);
    let mut events = EventStream::new();

    let size = terminal.size()?;
    app.handle_event(AppEvent::Resize {
        width: size.width,
        height: size.height,
    });

    loop {
        terminal.draw(|frame| Renderer::render(frame, &app))?;

        let event = tokio::select! {
            tick = ticker.next() => AppEvent::Tick(tick),
            Some(ev) = app.supervisor_mut().wait_for_next() => AppEvent::from(ev),
            maybe = events.next() => match maybe {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Some(Ok(Event::Resize(width, height))) => AppEvent::Resize { width, height },
                Some(Ok(_)) => continue,
                Some(Err(e)) => return Err(e),
                None => break,
            },
        };
        app.handle_event(event);

        if app.should_quit() {
            break;
        }
    }

    // Covers the input stream closing underneath us
    app.quit();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let flags = Flags::parse();
    init_tracing(flags.log_file.as_deref())?;

    let catalog = Catalog::builtin();
    let settings = Settings::from_flags(&flags, &catalog);
    info!(program = %settings.program, args = ?settings.extra_args, "starting");
    let app = App::new(settings, catalog);

    let mut terminal = init_terminal(flags.alt_screen)?;
    let result = run_app(&mut terminal, app).await;
    restore_terminal(&mut terminal, flags.alt_screen)?;

    if let Err(e) = &result {
        error!(error = %e, "terminal loop failed");
    }
    result
}
