//! Streaming world runner (default binary).
//!
//! The focal point moves with the arrow keys; the kernel materializes the
//! window around it and reports when a hazard is reached. Input, ticking and
//! rendering live here, the kernel only sees `recenter` calls.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tui_gridworld::core::{WorldKernel, WorldSnapshot};
use tui_gridworld::input::{should_quit, world_action, FocusInput};
use tui_gridworld::logging::{init_logging, LoggingConfig};
use tui_gridworld::settings::world_config_from_env;
use tui_gridworld::term::{FrameBuffer, TerminalRenderer, Viewport, WorldHud, WorldView};
use tui_gridworld::types::{WorldAction, TICK_MS};

fn main() -> Result<()> {
    init_logging(LoggingConfig::from_env())?;

    // Build the kernel before touching the terminal so config errors print normally.
    let config = world_config_from_env();
    info!("starting world: {:?}", config);
    let mut world = WorldKernel::new(config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut world);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, world: &mut WorldKernel) -> Result<()> {
    let view = WorldView::default();
    let mut snap = WorldSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut focus_input = FocusInput::new(world.focus());
    let mut seed = world.config().seed;
    let mut paused = false;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        world.snapshot_into(&mut snap);
        view.render_into(&snap, WorldHud { seed, paused }, Viewport::new(w, h), &mut fb);
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
                        match world_action(key) {
                            Some(WorldAction::Move(_)) => {
                                if !paused && !world.is_game_over() {
                                    focus_input.handle_key_press(key.code);
                                }
                            }
                            Some(WorldAction::Restart) => {
                                seed = seed.wrapping_add(1);
                                world.restart(seed)?;
                                focus_input.set_target(world.focus());
                                focus_input.reset();
                                paused = false;
                            }
                            Some(WorldAction::Pause) => {
                                paused = !paused;
                                focus_input.reset();
                            }
                            None => {}
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; DAS/ARR handles repeats internally.
                    }
                    KeyEventKind::Release => {
                        focus_input.handle_key_release(key.code);
                    }
                },
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if paused || world.is_game_over() {
                continue;
            }

            focus_input.update(TICK_MS);
            let target = focus_input.target();
            if target == world.focus() {
                continue;
            }
            match world.recenter(target) {
                Ok(outcome) => {
                    if let Some(at) = outcome.hazard_reached {
                        info!("game over at {} (seed {})", at, seed);
                        focus_input.reset();
                    }
                }
                Err(err) => {
                    // Focus is unchanged; drop the pending move.
                    warn!("recenter to {} failed: {}", target, err);
                    focus_input.set_target(world.focus());
                }
            }
        }
    }
}
