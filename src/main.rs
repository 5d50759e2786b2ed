use std::io;
use std::time::Duration;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use tally::app::App;
use tally::startup::{self, AppConfig};
use tally::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    // Handle --version before any initialization
    if std::env::args().any(|arg| arg == "--version") {
        println!("tally {}", VERSION);
        std::process::exit(0);
    }

    color_eyre::install()?;

    let mut config = AppConfig::from_env();
    if std::env::args().any(|arg| arg == "--dev") {
        config.dev_mode = true;
    }
    if let Some(path) = std::env::args().skip(1).find(|arg| !arg.starts_with('-')) {
        config.initial_path = path;
    }

    startup::init_tracing(&config)?;
    tracing::info!(version = VERSION, dev = config.dev_mode, "starting tally");

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let _guard = runtime.enter();

    let mut app = App::new(config);
    app.start_session_watch();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    result
}

/// Setup panic hook to restore terminal on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

/// Restore terminal to normal mode
fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .expect("message receiver already taken");

    loop {
        if app.should_quit {
            return Ok(());
        }

        if app.take_redraw() {
            terminal.draw(|frame| ui::render(frame, app))?;
        }

        // 100ms tick drives the spinners; keys and messages wake us sooner
        let timeout = tokio::time::sleep(Duration::from_millis(100));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(error)) => {
                        tracing::error!(%error, "terminal event stream failed");
                        return Err(error.into());
                    }
                    None => return Ok(()),
                }
            }

            // The app holds a sender, so recv() only yields messages.
            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }
        }
    }
}
