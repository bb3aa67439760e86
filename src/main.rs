use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use leetfinder::app::App;
use leetfinder::catalog::Catalog;
use leetfinder::config::Config;
use leetfinder::event::{AppEvent, EventHandler};
use leetfinder::render::HighlightRenderer;
use leetfinder::ui::theme::Theme;
use leetfinder::ui::view;

#[derive(Parser)]
#[command(
    name = "leetfinder",
    version,
    about = "Browse algorithm practice problems and their solutions in the terminal"
)]
struct Cli {
    #[arg(short, long, help = "Problem catalog (JSON array)")]
    problems: Option<PathBuf>,

    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Language used to highlight solutions")]
    language: Option<String>,

    #[arg(long, help = "Append logs to this file")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load().unwrap_or_default();
    if let Some(path) = cli.problems {
        config.problems_path = path.to_string_lossy().into_owned();
    }
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if let Some(language) = cli.language {
        config.code_language = language;
    }
    if let Some(path) = cli.log_file {
        config.log_file = Some(path.to_string_lossy().into_owned());
    }
    config.normalize();

    init_logging(config.log_file.as_deref())?;

    // Load before touching the terminal so a bad file fails with a readable error.
    let catalog = Catalog::load(Path::new(&config.problems_path))?;
    info!(
        count = catalog.len(),
        path = %config.problems_path,
        "problem catalog loaded"
    );

    let theme = Theme::load(&config.theme).unwrap_or_else(|| {
        warn!(
            theme = %config.theme,
            available = ?Theme::available_themes(),
            "unknown theme, using default"
        );
        Theme::default()
    });
    let theme: &'static Theme = Box::leak(Box::new(theme));
    let renderer = HighlightRenderer::new(&config.syntax_theme);

    let mut app = App::new(catalog, &config, theme, Box::new(renderer));

    let guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let events = EventHandler::new();
    let (width, height) = size()?;
    app.handle(AppEvent::Resize(width, height));
    let result = run_app(&mut terminal, &mut app, &events);

    drop(guard);
    result
}

/// Raw mode plus alternate screen, undone when dropped on any exit path.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    fn enter(out: W) -> Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show);
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| view::render(frame, app))?;

        app.handle(events.next()?);

        if app.should_quit {
            info!("exiting");
            return Ok(());
        }
    }
}

/// Logs go to `log_file` when set; otherwise they are discarded so nothing
/// writes over the alternate screen. `RUST_LOG` overrides the default level.
fn init_logging(log_file: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {path}"))?;
            let _ = builder.with_writer(Mutex::new(file)).try_init();
        }
        None => {
            let _ = builder.with_writer(io::sink).try_init();
        }
    }
    Ok(())
}
