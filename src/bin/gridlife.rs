//! Bounded automaton runner.
//!
//! Steps the grid on a fixed cadence. A cursor moves with the arrow keys and
//! `space` brings its neighborhood to life.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_gridworld::core::{LifeKernel, LifeSnapshot};
use tui_gridworld::input::{life_action, should_quit, FocusInput};
use tui_gridworld::logging::{init_logging, LoggingConfig};
use tui_gridworld::settings::life_config_from_env;
use tui_gridworld::term::{FrameBuffer, LifeHud, LifeView, TerminalRenderer, Viewport};
use tui_gridworld::types::{Coordinate, Extent, LifeAction, DEFAULT_LIFE_STEP_MS, TICK_MS};

fn main() -> Result<()> {
    init_logging(LoggingConfig::from_env())?;

    let config = life_config_from_env();
    info!(
        "starting life: {}x{} {}",
        config.extent.width,
        config.extent.height,
        config.boundary.as_str()
    );
    let mut life = LifeKernel::new(config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut life);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Keep the cursor on the grid.
fn clamp_to(extent: Extent, c: Coordinate) -> Coordinate {
    let max_x = extent.width.saturating_sub(1).min(i32::MAX as u32) as i32;
    let max_y = extent.height.saturating_sub(1).min(i32::MAX as u32) as i32;
    Coordinate::new(c.x.clamp(0, max_x), c.y.clamp(0, max_y))
}

fn run(term: &mut TerminalRenderer, life: &mut LifeKernel) -> Result<()> {
    let view = LifeView::default();
    let mut snap = LifeSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let extent = life.extent();
    let center = Coordinate::new((extent.width / 2) as i32, (extent.height / 2) as i32);
    let mut cursor_input = FocusInput::new(center);
    let mut seed = life.config().seed;
    let mut paused = false;
    let mut step_timer_ms: u32 = 0;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        let cursor = clamp_to(extent, cursor_input.target());
        cursor_input.set_target(cursor);

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        life.snapshot_into(&mut snap);
        let hud = LifeHud {
            cursor,
            paused,
            seed,
        };
        view.render_into(&snap, hud, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }
                        match life_action(key) {
                            Some(LifeAction::MoveCursor(_)) => {
                                cursor_input.handle_key_press(key.code);
                            }
                            Some(LifeAction::Poke) => {
                                life.poke(cursor, true);
                            }
                            Some(LifeAction::Step) => {
                                if paused {
                                    life.step();
                                }
                            }
                            Some(LifeAction::Pause) => paused = !paused,
                            Some(LifeAction::Reseed) => {
                                seed = seed.wrapping_add(1);
                                life.reseed(seed);
                                step_timer_ms = 0;
                                info!("reseeded with {}", seed);
                            }
                            None => {}
                        }
                    }
                    KeyEventKind::Repeat => {}
                    KeyEventKind::Release => {
                        cursor_input.handle_key_release(key.code);
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            cursor_input.update(TICK_MS);

            if paused {
                continue;
            }
            step_timer_ms += TICK_MS;
            while step_timer_ms >= DEFAULT_LIFE_STEP_MS {
                step_timer_ms -= DEFAULT_LIFE_STEP_MS;
                life.step();
            }
        }
    }
}
