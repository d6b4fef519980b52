//! Terminal runner (default binary).
//!
//! Reads keys with crossterm, advances the engine by the measured time between
//! frames, and draws through the framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lanken_tetris::core::{FrameClock, GameConfig, GameSnapshot, GameState};
use lanken_tetris::input::{classify, KeyCommand};
use lanken_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use lanken_tetris::types::{BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS};

/// Upper bound on the wait for input before the next frame (~60 FPS).
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Width of the widest piece; used to center the spawn column.
const WIDEST_PIECE: usize = 4;

#[derive(Debug, Parser)]
#[command(name = "lanken-tetris", version, about = "Falling-block puzzle in the terminal")]
struct Args {
    /// Seed for the piece generator (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH)]
    cols: usize,

    /// Board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    rows: usize,

    /// Gravity interval in milliseconds
    #[arg(long = "fall-ms", default_value_t = FALL_INTERVAL_MS)]
    fall_ms: u32,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> GameConfig {
        let spawn_col = self.cols.saturating_sub(WIDEST_PIECE) / 2;
        GameConfig::default()
            .with_dimensions(self.cols, self.rows)
            .with_fall_interval_ms(self.fall_ms)
            .with_spawn(spawn_col as i32, 0)
    }

    fn seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path)?;
    }

    // Fail before touching the terminal.
    let config = args.config();
    config.validate().context("invalid game configuration")?;
    let state = GameState::new(config, args.seed())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, state);

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
        .try_init()
        .map_err(|e| anyhow!("failed to install logger: {e}"))
}

fn run(term: &mut TerminalRenderer, mut state: GameState) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut clock = FrameClock::new();
    let mut seed = state.seed();

    loop {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => match classify(key) {
                    Some(KeyCommand::Quit) => {
                        info!(score = state.score(), lines = state.lines(), "quit");
                        return Ok(());
                    }
                    Some(KeyCommand::Restart) => {
                        seed = seed.wrapping_add(1);
                        state.restart(seed);
                        clock = FrameClock::new();
                    }
                    Some(KeyCommand::Action(action)) => {
                        state.apply_action(action);
                    }
                    None => {}
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        state.tick(clock.lap());
        if let Some(ev) = state.take_last_event() {
            debug!(
                lines_cleared = ev.lines_cleared,
                score = ev.score,
                "score updated"
            );
        }

        state.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.present(&mut fb)?;
    }
}
