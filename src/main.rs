//! Playable terminal binary.
//!
//! Wires keyboard input and a gravity timer around the core engine. The
//! engine reports its gravity pace through `fall_interval_ms`; this loop
//! re-reads it every iteration so line clears speed the game up immediately.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::GameSession;
use blockfall::input::{action_for_key, should_quit};
use blockfall::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    env_logger::init();

    let seed = seed_from_args();
    log::info!("blockfall starting (seed {seed})");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore the terminal, even when the loop errored.
    let _ = term.exit();

    if let Ok(score) = &result {
        log::info!("blockfall exiting, final score {score}");
    }
    result.map(|_| ())
}

/// Seed from the first CLI argument, or from the clock.
fn seed_from_args() -> u32 {
    if let Some(seed) = std::env::args().nth(1).and_then(|s| s.parse().ok()) {
        return seed;
    }
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<u32> {
    let mut session = GameSession::new(seed);
    session.start();

    let view = GameView::default();
    let mut last_tick = Instant::now();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, Viewport::new(w, h));
        term.draw(&fb)?;

        // While paused (or over) gravity is suspended; holding the tick
        // origin at "now" grants a full interval on resume.
        if session.paused() || session.game_over() {
            last_tick = Instant::now();
        }

        let interval = Duration::from_millis(u64::from(session.fall_interval_ms()));
        let timeout = interval
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(session.score());
                    }
                    if let Some(action) = action_for_key(key) {
                        session.apply_action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= interval {
            last_tick = Instant::now();
            session.tick();
        }
    }
}
