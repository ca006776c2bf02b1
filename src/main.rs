use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use bomb_dodger::clock::FrameClock;
use bomb_dodger::consts::{FRAME, GAME_OVER_PAUSE, NUM_OF_BOMBS};
use bomb_dodger::display::TerminalSurface;
use bomb_dodger::input::KeyTracker;
use bomb_dodger::{Game, GameStatus};

// ── Logging ───────────────────────────────────────────────────────────────────

/// The terminal belongs to the game, so log lines go to a file.
fn log_path() -> PathBuf {
    std::env::temp_dir().join("bomb_dodger.log")
}

fn init_logging() -> Result<()> {
    let path = log_path();
    let file = File::create(&path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits or touches a bomb.
fn game_loop<W: Write>(surface: &mut TerminalSurface<W>) -> Result<GameStatus> {
    let mut rng = thread_rng();
    let mut game = Game::new(&mut rng);
    let mut keys = KeyTracker::new();
    let mut clock = FrameClock::new(FRAME);

    info!(
        "game started: {} bombs on a {:?} terminal",
        NUM_OF_BOMBS,
        surface.size()
    );

    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        keys.begin_frame();
        while event::poll(Duration::ZERO).context("failed to poll terminal events")? {
            let ev = event::read().context("failed to read terminal event")?;
            keys.handle(&ev);
        }

        match game.step(&keys.frame_input(), surface)? {
            GameStatus::Running => clock.tick(),
            GameStatus::GameOver => {
                thread::sleep(GAME_OVER_PAUSE);
                return Ok(GameStatus::GameOver);
            }
            GameStatus::Quit => return Ok(GameStatus::Quit),
        }
    }
}

// ── Terminal session ──────────────────────────────────────────────────────────

/// Raw mode plus the alternate screen for as long as it lives.  Dropping it
/// hands the terminal back to the shell, on error paths too.
struct TerminalSession {
    keyboard_enhanced: bool,
}

impl TerminalSession {
    fn open<W: Write>(out: &mut W) -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut session = TerminalSession {
            keyboard_enhanced: false,
        };
        out.execute(terminal::EnterAlternateScreen)
            .context("failed to enter alternate screen")?;
        out.execute(cursor::Hide)?;

        // Key release events only arrive on terminals that speak the kitty
        // keyboard protocol.
        session.keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        if !session.keyboard_enhanced {
            warn!("terminal does not report key releases; using hold window");
        }
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.keyboard_enhanced {
            if let Err(e) = out.execute(PopKeyboardEnhancementFlags) {
                warn!("failed to pop keyboard flags: {e}");
            }
        }
        if let Err(e) = out
            .execute(cursor::Show)
            .and_then(|out| out.execute(terminal::LeaveAlternateScreen))
        {
            warn!("failed to leave alternate screen: {e}");
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("failed to disable raw mode: {e}");
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging()?;

    let mut out = BufWriter::new(stdout());
    let session = TerminalSession::open(&mut out)?;

    let (cols, rows) = terminal::size().context("failed to read terminal size")?;
    let status = {
        let mut surface = TerminalSurface::new(&mut out, cols, rows);
        game_loop(&mut surface)
    };

    // Flush what the game queued before the session restores the screen.
    out.flush().context("failed to flush terminal output")?;
    drop(session);

    info!("exiting after {:?}", status?);
    Ok(())
}
