//! Terminal falling-block game (default binary).
//!
//! Runs one session on a single-threaded loop: render, wait for a key until
//! the next frame, then feed elapsed time to the session. Key presses and
//! timer ticks are therefore never processed concurrently.
//!
//! Environment:
//! - `BLOCKFALL_ROWS`, `BLOCKFALL_COLUMNS`, `BLOCKFALL_WIDTH`, `BLOCKFALL_HEIGHT`: session size
//! - `BLOCKFALL_SEED`: fixed piece sequence
//! - `BLOCKFALL_LOG`: log file path (filter from `RUST_LOG`, default `info`)

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};

use blockfall::core::{Session, SessionConfig, SessionEvent, SessionSnapshot};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

/// Upper bound on the wait for input between frames
const FRAME_MS: u64 = 16;

const ENV_SEED: &str = "BLOCKFALL_SEED";
const ENV_LOG: &str = "BLOCKFALL_LOG";

fn main() -> Result<()> {
    init_logging()?;
    let config = SessionConfig::from_env()?;
    let seed = seed_from_env()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file: stderr would draw over the alternate screen.
fn init_logging() -> Result<()> {
    let Some(path) = std::env::var_os(ENV_LOG) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.to_string_lossy()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn seed_from_env() -> Result<u64> {
    match std::env::var(ENV_SEED) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be an unsigned integer, got {:?}", ENV_SEED, raw)),
        _ => Ok(rand::random()),
    }
}

fn run(term: &mut TerminalRenderer, config: SessionConfig, seed: u64) -> Result<()> {
    let mut session = Session::new(config, seed);
    session.start()?;

    let view = GameView::default();
    let mut frame = FrameBuffer::new(0, 0);
    let mut snap = SessionSnapshot::default();
    // A rejected start blocks the game until any key dismisses it.
    let mut warning: Option<&'static str> = None;
    let mut last_advance = Instant::now();

    loop {
        // Render.
        session.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, warning, Viewport::new(w, h), &mut frame);
        term.present(&mut frame)?;

        // Input with timeout until next frame.
        let timeout = Duration::from_millis(FRAME_MS).saturating_sub(last_advance.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit with score {}", session.score());
                        return Ok(());
                    }
                    if warning.take().is_some() {
                        last_advance = Instant::now();
                        continue;
                    }
                    match handle_key_event(key) {
                        Some(GameAction::Start) => {
                            if let Err(err) = session.start() {
                                warn!("{}", err);
                                warning = Some("GAME IN PROGRESS");
                            }
                        }
                        Some(action) => {
                            session.apply_action(action);
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Timers are frozen while a warning is up.
        if warning.is_some() {
            last_advance = Instant::now();
        } else {
            let elapsed_ms = last_advance.elapsed().as_millis() as u32;
            if elapsed_ms > 0 {
                last_advance += Duration::from_millis(elapsed_ms as u64);
                session.advance(elapsed_ms);
            }
        }

        for event in session.take_events() {
            match event {
                SessionEvent::ClockUpdated { .. } => {}
                other => debug!("{:?}", other),
            }
        }
    }
}
