mod app;
mod config;
mod demo;
mod keys;
mod log_buffer;
mod remote;
mod tokio_thread;
mod ui;

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use albumdeck_core::{AlbumList, NavigatorConfig, RowTable, fetch_all};
use anyhow::Context as _;
use app::{App, FocusedPanel};
use clap::Parser;
use config::Config;
use keys::Action;
use log_buffer::{LogBuffer, LogBufferLayer};
use remote::Remote;
use tokio_thread::TokioThread;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Use a faked player with sample albums instead of the Spotify Web API
    #[arg(long)]
    demo: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Log to a buffer for the logs panel instead of stdout.
    let log_buffer = LogBuffer::new();

    // Also log to a file, which survives the alternate screen.
    let log_file = std::fs::File::create("albumdeck.log").context("failed to create log file")?;
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(LogBufferLayer::new(log_buffer.clone()))
        .with(file_layer)
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("albumdeck=info")),
        )
        .init();

    let config_path = args.config.unwrap_or_else(Config::default_path);
    let config = Config::load(&config_path)?;

    let tokio = TokioThread::new()?;
    let (remote_tx, remote_rx) = std::sync::mpsc::channel();
    let mut remote = if args.demo {
        tracing::info!("running in demo mode");
        Remote::demo(tokio, remote_tx)
    } else {
        if config.server.access_token.is_empty() {
            if !config_path.exists() {
                config.save(&config_path)?;
            }
            anyhow::bail!(
                "no access token configured; set server.access_token in {} or run with --demo",
                config_path.display()
            );
        }
        Remote::spotify(&config.server, tokio, remote_tx)
    };

    let page_size = config.navigation.page_size.clamp(1, remote.max_page_size());
    if page_size != config.navigation.page_size {
        tracing::warn!(
            "page size {} is out of range, using {page_size}",
            config.navigation.page_size
        );
    }

    let dataset = fetch_all(&mut remote, page_size).context("failed to fetch saved albums")?;
    let albums = AlbumList::new(
        dataset,
        RowTable::new(),
        NavigatorConfig {
            window_size: config.navigation.window_size,
            column_width: config.navigation.column_width,
        },
    )
    .context("failed to show saved albums")?;
    remote.refresh_status();

    let mut app = App::new(
        config,
        config_path,
        albums,
        remote,
        remote_rx,
        log_buffer,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(app.config.general.tick_rate_ms);
    let result = run_app(&mut terminal, &mut app, tick_rate);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save state on exit.
    app.save_state();

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::draw(frame, app))?;
            app.needs_redraw = false;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            // Process the first event, then drain all remaining queued events.
            let process_event = |evt: Event, app: &mut App| match evt {
                Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                    handle_key_event(app, &key);
                    app.needs_redraw = true;
                }
                Event::Resize(_, _) => app.needs_redraw = true,
                _ => {}
            };

            process_event(event::read()?, app);
            while event::poll(Duration::ZERO)? {
                process_event(event::read()?, app);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key_event(app: &mut App, key: &event::KeyEvent) {
    match app.focused_panel {
        FocusedPanel::Library => {
            if let Some(action) = keys::library_action(key)
                && !handle_global_action(app, action)
            {
                ui::library::handle_key(app, action);
            }
        }
        FocusedPanel::Devices => {
            if let Some(action) = keys::devices_action(key)
                && !handle_global_action(app, action)
            {
                ui::devices::handle_key(app, action);
            }
        }
        FocusedPanel::Logs => {
            if let Some(action) = keys::logs_action(key)
                && let Some(la) = ui::logs::handle_key(&mut app.logs, action)
            {
                match la {
                    ui::logs::LogsAction::ToggleLogs => app.toggle_logs(),
                    ui::logs::LogsAction::Quit => app.should_quit = true,
                }
            }
        }
    }
}

/// Handles actions that mean the same thing in the library and devices
/// panels. Returns whether `action` was handled.
fn handle_global_action(app: &mut App, action: Action) -> bool {
    if let Some(command) = action.transport() {
        app.transport(command);
        return true;
    }
    match action {
        Action::Quit => app.should_quit = true,
        Action::Logs => app.toggle_logs(),
        Action::SwitchFocus => app.switch_focus(),
        _ => return false,
    }
    true
}
