mod alien;
mod app;
mod bullet;
mod config;
mod error;
mod event;
mod fleet;
mod game;
mod geometry;
mod input;
mod settings;
mod ship;
mod stats;
mod ui;

use std::fs::File;
use std::io::{self, Stdout};
use std::process::ExitCode;
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use app::App;
use config::Config;
use error::Error;
use event::EventHandler;
use settings::Settings;

type Tui = Terminal<CrosstermBackend<Stdout>>;

fn main() -> ExitCode {
    match try_main() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("alien_invasion: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_main() -> Result<(), Error> {
    let config = Config::parse();
    config.validate()?;
    init_logging(&config)?;

    let settings = Settings::from_config(&config);
    info!(
        width = settings.screen_width,
        height = settings.screen_height,
        fps = settings.fps,
        ships = settings.ship_limit,
        bullets = settings.bullets_allowed,
        "starting"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    // Key release events let held keys stop the ship exactly; terminals
    // without them fall back to press timing.
    let keyboard_enhanced = supports_keyboard_enhancement().unwrap_or(false)
        && execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )
        .is_ok();
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    terminal.clear()?;

    let mut app = App::new(settings);
    let result = run(&mut terminal, &mut app);

    // Restore terminal. Every step runs even if an earlier one failed.
    if keyboard_enhanced {
        if let Err(err) = execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags) {
            warn!(%err, "failed to pop keyboard enhancement flags");
        }
    }
    if let Err(err) = disable_raw_mode() {
        warn!(%err, "failed to disable raw mode");
    }
    if let Err(err) = execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    ) {
        warn!(%err, "failed to leave alternate screen");
    }
    if let Err(err) = terminal.show_cursor() {
        warn!(%err, "failed to show cursor");
    }

    info!(high_score = app.game.stats.high_score, "exiting");
    result
}

fn run(terminal: &mut Tui, app: &mut App) -> Result<(), Error> {
    let events = EventHandler::new();
    let frame_budget = Duration::from_secs_f64(1.0 / f64::from(app.game.settings.fps));
    let mut mouse_captured = true;

    loop {
        let frame_start = Instant::now();

        for ev in events.drain() {
            if let Some(input) = input::decode(&ev) {
                app.on_input(input);
            }
        }
        if app.should_quit {
            return Ok(());
        }

        app.on_tick();

        // The play button is the only thing the pointer is for.
        if app.game.pointer_visible != mouse_captured {
            mouse_captured = app.game.pointer_visible;
            if mouse_captured {
                execute!(terminal.backend_mut(), EnableMouseCapture)?;
            } else {
                execute!(terminal.backend_mut(), DisableMouseCapture)?;
            }
        }

        terminal.draw(|frame| ui::render(frame, app))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        } else {
            debug!(?elapsed, "frame over budget");
        }
    }
}

/// Install a file-backed subscriber when `--log-file` is given. The terminal
/// belongs to the game, so there is no console logging.
fn init_logging(config: &Config) -> Result<(), Error> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| Error::Log {
        path: path.clone(),
        source,
    })?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
