//! DAS/ARR focus handler for terminal environments.
//!
//! Holding a direction moves the focal target once on press, then repeats
//! after the delayed auto shift. Terminals that do not emit key release events
//! are handled with a timeout.

use std::time::Instant;

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::map::direction_of;
use crate::types::{Coordinate, Direction, DEFAULT_ARR_MS, DEFAULT_DAS_MS};

/// Tracks the held direction and the focal coordinate it drives.
///
/// The handler only accumulates a *target*; the driver hands it to the kernel
/// (`recenter`) on the next tick, so several repeats inside one tick collapse
/// into a single recenter pass.
#[derive(Debug, Clone)]
pub struct FocusInput {
    held: Option<Direction>,
    target: Coordinate,
    last_key_time: Instant,
    das_timer: u32,
    arr_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

// In terminals without key-release events, a short timeout prevents a single tap
// from turning into a sustained "held" state that triggers DAS/ARR repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

impl FocusInput {
    pub fn new(target: Coordinate) -> Self {
        Self::with_config(target, DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(target: Coordinate, das_delay: u32, arr_rate: u32) -> Self {
        Self {
            held: None,
            target,
            last_key_time: Instant::now(),
            das_timer: 0,
            arr_accumulator: 0,
            das_delay,
            // A zero rate would repeat forever inside `update`.
            arr_rate: arr_rate.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn target(&self) -> Coordinate {
        self.target
    }

    pub fn held(&self) -> Option<Direction> {
        self.held
    }

    /// Overwrite the target, e.g. after a restart moved the focus home.
    pub fn set_target(&mut self, target: Coordinate) {
        self.target = target;
    }

    /// Handle a key press; returns the direction applied to the target, if any.
    ///
    /// Auto-repeat press events for the already held direction are swallowed,
    /// repeats come from [`FocusInput::update`] instead.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Direction> {
        let dir = direction_of(code)?;
        self.last_key_time = Instant::now();
        if self.held == Some(dir) {
            return None;
        }
        self.held = Some(dir);
        self.das_timer = 0;
        self.arr_accumulator = 0;
        self.target = self.target.step(dir);
        Some(dir)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if direction_of(code).is_some_and(|dir| self.held == Some(dir)) {
            self.release();
        }
    }

    /// Advance timers by `elapsed_ms`; returns the repeated directions, each
    /// already applied to the target.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<Direction, 32> {
        let mut repeats = ArrayVec::<Direction, 32>::new();

        // Auto-release when terminal does not emit release events.
        let time_since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if time_since_last_key > self.key_release_timeout_ms {
            self.release();
        }

        let Some(dir) = self.held else {
            return repeats;
        };

        let prev_das = self.das_timer;
        self.das_timer = self.das_timer.saturating_add(elapsed_ms);
        if self.das_timer < self.das_delay {
            return repeats;
        }

        let excess = if prev_das < self.das_delay {
            self.das_timer - self.das_delay
        } else {
            elapsed_ms
        };
        self.arr_accumulator = self.arr_accumulator.saturating_add(excess);

        while self.arr_accumulator >= self.arr_rate {
            self.arr_accumulator -= self.arr_rate;
            if repeats.try_push(dir).is_err() {
                // Drop the backlog rather than lurching across the map.
                self.arr_accumulator = 0;
                break;
            }
            self.target = self.target.step(dir);
        }

        repeats
    }

    fn release(&mut self) {
        self.held = None;
        self.das_timer = 0;
        self.arr_accumulator = 0;
    }

    /// Forget held keys; the target stays where it is.
    pub fn reset(&mut self) {
        self.release();
        self.last_key_time = Instant::now();
    }
}

impl Default for FocusInput {
    fn default() -> Self {
        Self::new(Coordinate::ORIGIN)
    }
}
