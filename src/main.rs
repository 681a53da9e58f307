//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for keyboard/mouse input and the framebuffer renderer from
//! `tui_memory::term`. Configuration comes from `MEMORY_*` environment
//! variables; logs go to `MEMORY_LOG_PATH` when it is set, never to the
//! terminal the game is drawn on.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tui_memory::core::{FileScoreStore, GameConfig, MemoryGame};
use tui_memory::input::{handle_key_event, handle_mouse_event, should_quit};
use tui_memory::term::{
    frame_fingerprint, stdout_is_terminal, FrameBuffer, GameView, RenderThrottle,
    TerminalRenderer, Viewport,
};
use tui_memory::types::TICK_MS;
use tui_memory::App;

/// Repaint at least this often even when nothing changed.
const REFRESH_MS: u64 = 1000;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(config.log_path.as_deref())?;

    if !stdout_is_terminal() {
        warn!("stdout is not a terminal, not starting");
        eprintln!("tui-memory needs an interactive terminal");
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let store = FileScoreStore::open_or_empty(config.scores_path.clone());
    info!(
        difficulty = config.difficulty.as_str(),
        scores = %config.scores_path.display(),
        "starting"
    );
    let mut app = App::new(MemoryGame::new(config, store));

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut throttle = RenderThrottle::new(REFRESH_MS);

    let clock = Instant::now();
    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let cursor = app.cursor().position();
        let fingerprint = frame_fingerprint(app.board().revision(), cursor, (w, h));
        if throttle.should_render(clock.elapsed().as_millis() as u64, fingerprint) {
            view.render_into(app.board(), Some(cursor), viewport, &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        app.shutdown();
                        info!(moves = app.game().moves(), "quit");
                        return Ok(());
                    }
                    handle_key_event(key)
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, |x, y| {
                    view.card_at(app.board(), viewport, x, y)
                }),
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.mark_dirty();
                    None
                }
                _ => None,
            };

            if let Some(action) = action {
                app.handle(action);
            }
        }

        // Tick with the real elapsed time so the clock does not drift.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            let elapsed_ms = u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX);
            app.tick(elapsed_ms);
        }
    }
}
