mod app;
mod cli;
mod error;

use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_cloud::animate;
use tui_cloud::project::CloudView;

use crate::app::{Action, App};
use crate::cli::Args;
use crate::error::Result;

fn main() -> ExitCode {
    let args = Args::parse();

    match start(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start(args: &Args) -> Result<()> {
    if let Some(path) = &args.log {
        init_tracing(path)?;
    }

    let config = args.cloud_config()?;
    let frame_interval = args.frame_interval()?;
    let keywords = args.load_keywords()?;

    info!(count = keywords.len(), "loaded keywords");

    let app = App::new(keywords, config);

    enable_raw_mode()?;
    enter_or_restore(
        || crossterm::execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture),
        || {
            let _ = crossterm::execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
            disable_raw_mode()
        },
    )?;

    let result = run(app, frame_interval);

    disable_raw_mode()?;
    crossterm::execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;

    result
}

/// Runs `enter`; if it fails, `restore` puts the terminal back before the
/// original error is returned.
fn enter_or_restore(
    enter: impl FnOnce() -> io::Result<()>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<()> {
    if let Err(err) = enter() {
        let _ = restore();
        return Err(err);
    }

    Ok(())
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_tracing(path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn run(mut app: App, frame_interval: Duration) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let start = Instant::now();
    let mut last = start;

    loop {
        let now = Instant::now();
        let delta = now.duration_since(last).as_secs_f32();
        last = now;

        app.cloud.tick(delta, animate::bob_phase(now.duration_since(start)));

        terminal.draw(|f| draw(f, &mut app))?;

        let next_tick = now + frame_interval;

        // Drain input until the next frame is due.
        loop {
            let timeout = next_tick.saturating_duration_since(Instant::now());

            if !event::poll(timeout)? {
                break;
            }

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Action::Quit = app.on_key(key.code) {
                        info!("quit");
                        return Ok(());
                    }
                }

                Event::Mouse(mouse) => app.on_mouse(mouse),

                _ => {}
            }
        }
    }
}

fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(f.area());

    header(f, chunks[0], app);

    app.cloud_area = chunks[1];
    f.render_widget(CloudView::new(&app.cloud), chunks[1]);
}

fn header(f: &mut Frame, area: Rect, app: &App) {
    let hover = match app.hovered() {
        Some(k) => format!("  {} ({})", k.word, k.weight),
        None => String::new(),
    };

    let line = Line::from(vec![
        Span::styled("tui-cloud", Style::new().bold()),
        Span::styled(
            format!(
                "  {} words  [o rotate] [r reverse] [c clear] [l reload] [p palette] [q quit]",
                app.shown().len()
            ),
            Style::new().fg(Color::DarkGray),
        ),
        Span::styled(hover, Style::new().fg(Color::Yellow)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
