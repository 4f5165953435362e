//! Terminal runner (default binary).
//!
//! Drives a [`Session`] at a fixed frame rate with crossterm input and the
//! framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use blockfall::core::{Session, SessionConfig};
use blockfall::input::{game_over_choice, GameOverChoice, InputHandler};
use blockfall::term::{FrameBuffer, FrameClock, GameView, TerminalRenderer, Viewport};
use blockfall::types::{BOARD_HEIGHT, BOARD_WIDTH, FPS};

/// blockfall - falling-block puzzle game for the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH)]
    columns: u8,

    /// Board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    rows: u8,

    /// Seed for the piece sequence (random when omitted)
    #[arg(long)]
    seed: Option<u32>,

    /// Frames per second
    #[arg(long, default_value_t = FPS, value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    let config = SessionConfig::new(args.columns, args.rows);
    let seed = args.seed.unwrap_or_else(rand::random);
    let session = Session::new(config, seed)?;
    tracing::info!(seed, columns = args.columns, rows = args.rows, fps = args.fps, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, session, args.fps);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut session: Session, fps: u32) -> Result<()> {
    let mut input = if term.enable_release_events()? {
        InputHandler::with_release_events()
    } else {
        InputHandler::new()
    };

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = FrameClock::new(fps, Instant::now());
    let mut snap = session.snapshot();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick; the game-over screen just waits.
        let timeout = clock.poll_timeout(Instant::now(), snap.game_over());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if snap.game_over() => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match game_over_choice(key) {
                        Some(GameOverChoice::Restart) => {
                            tracing::info!(high_score = session.high_score(), "restart");
                            session.restart();
                            input.reset();
                            snap = session.snapshot();
                            clock.reset(Instant::now());
                        }
                        Some(GameOverChoice::Quit) => break,
                        None => {}
                    }
                }
                Event::Key(key) => input.handle_key(key),
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if snap.game_over() {
            continue;
        }
        if let Some(dt_ms) = clock.tick_due(Instant::now()) {
            let commands = input.update(dt_ms);
            snap = session.tick(dt_ms, &commands);
            if snap.quit {
                break;
            }
        }
    }

    tracing::info!(
        score = session.score(),
        high_score = session.high_score(),
        lines = session.lines_cleared(),
        "exiting"
    );
    Ok(())
}
