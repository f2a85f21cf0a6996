//! Streaming world - unbounded grid materialized around a moving focal point
//!
//! The world owns a [`GridStore`], a [`WindowController`] and a
//! [`CellSource`]. Each [`WorldKernel::recenter`] brings the window up to date
//! and then exposes the cell under the new focus. Landing on a hazard marks
//! the cell `Triggered` and reports it back to the caller; the kernel keeps
//! running, deciding to stop is the caller's business.

use log::info;

use crate::boundary::BoundaryPolicy;
use crate::cell::Cell;
use crate::config::WorldConfig;
use crate::error::Result;
use crate::rules;
use crate::snapshot::{CellView, WorldSnapshot};
use crate::source::{CellSource, SeededCellSource};
use crate::store::GridStore;
use crate::types::{Coordinate, Exposure};
use crate::window::{GridWindow, WindowController, WindowUpdate};

/// Outcome of [`WorldKernel::recenter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecenterOutcome {
    pub update: WindowUpdate,
    /// Set when this recenter triggered a hazard (game over signal).
    pub hazard_reached: Option<Coordinate>,
}

impl RecenterOutcome {
    pub fn is_game_over_signal(&self) -> bool {
        self.hazard_reached.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct WorldKernel<S = SeededCellSource> {
    config: WorldConfig,
    store: GridStore,
    window: WindowController,
    source: S,
    moves: u64,
    triggered_at: Option<Coordinate>,
}

impl WorldKernel<SeededCellSource> {
    /// World with seeded hazard placement from the config.
    pub fn new(config: WorldConfig) -> Result<Self> {
        let source = SeededCellSource::new(config.seed, config.hazard());
        Self::with_source(config, source)
    }

    /// Start a new session with a different seed.
    pub fn restart(&mut self, seed: u64) -> Result<()> {
        self.config.seed = seed;
        self.source = SeededCellSource::new(seed, self.config.hazard());
        info!("restarting world with seed {}", seed);
        self.reset()
    }
}

impl<S: CellSource> WorldKernel<S> {
    /// World backed by a caller-provided cell source.
    pub fn with_source(config: WorldConfig, source: S) -> Result<Self> {
        config.validate()?;
        let window = WindowController::new(
            config.start,
            config.radius,
            config.scan_radius(),
            config.eviction,
        );
        let mut kernel = Self {
            config,
            store: GridStore::new(),
            window,
            source,
            moves: 0,
            triggered_at: None,
        };
        kernel.materialize_start()?;
        Ok(kernel)
    }

    fn materialize_start(&mut self) -> Result<()> {
        let mut guard = StartGuard::new(&mut self.source, &self.config);
        self.window.materialize_initial(&mut self.store, &mut guard)?;
        self.expose_focus();
        Ok(())
    }

    /// Drop all state and rebuild the start window with the same source.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear();
        self.window = WindowController::new(
            self.config.start,
            self.config.radius,
            self.config.scan_radius(),
            self.config.eviction,
        );
        self.moves = 0;
        self.triggered_at = None;
        self.materialize_start()
    }

    /// Move the focal point to `focus`.
    ///
    /// Same focus: no-op. Otherwise the window is materialized and scanned,
    /// then the focus cell is exposed. Errors come only from the cell source;
    /// on error the focus is unchanged.
    pub fn recenter(&mut self, focus: Coordinate) -> Result<RecenterOutcome> {
        let mut guard = StartGuard::new(&mut self.source, &self.config);
        let update = self.window.recenter(&mut self.store, &mut guard, focus)?;
        if !update.changed {
            return Ok(RecenterOutcome {
                update,
                hazard_reached: None,
            });
        }
        self.moves += 1;
        let hazard_reached = self.expose_focus();
        Ok(RecenterOutcome {
            update,
            hazard_reached,
        })
    }

    /// Expose the cell under the focus; returns the focus if it triggered.
    fn expose_focus(&mut self) -> Option<Coordinate> {
        let focus = self.window.focus();
        let triggered = self.store.get_mut(focus).is_some_and(Cell::expose);
        if !triggered {
            return None;
        }
        if self.triggered_at.is_none() {
            self.triggered_at = Some(focus);
        }
        info!("hazard reached at {} after {} moves", focus, self.moves);
        Some(focus)
    }

    pub fn focus(&self) -> Coordinate {
        self.window.focus()
    }

    pub fn window(&self) -> GridWindow {
        self.window.window()
    }

    pub fn controller(&self) -> &WindowController {
        &self.window
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// True once any hazard was triggered in this session.
    pub fn is_game_over(&self) -> bool {
        self.triggered_at.is_some()
    }

    /// The first hazard triggered in this session.
    pub fn triggered_at(&self) -> Option<Coordinate> {
        self.triggered_at
    }

    pub fn exposure_at(&self, at: Coordinate) -> Option<Exposure> {
        self.store.get(at).map(Cell::exposure)
    }

    /// Fresh hazard count around `at` over materialized neighbors.
    pub fn aggregate(&self, at: Coordinate) -> u8 {
        rules::aggregate(&self.store, at, BoundaryPolicy::Infinite)
    }

    pub fn snapshot(&self) -> WorldSnapshot {
        let mut snap = WorldSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its allocation.
    pub fn snapshot_into(&self, snap: &mut WorldSnapshot) {
        let window = self.window.window();
        snap.focus = window.focus;
        snap.radius = window.radius;
        snap.cells.clear();
        snap.cells
            .extend(window.coordinates().map(|c| self.store.get(c).map(CellView::from)));
        snap.game_over = self.is_game_over();
        snap.triggered_at = self.triggered_at;
        snap.moves = self.moves;
        snap.store_len = self.store.len();
    }
}

/// Wraps the cell source so the start coordinate is never a hazard when
/// `safe_start` is set, no matter how often it is (re)materialized.
struct StartGuard<'a, S> {
    inner: &'a mut S,
    start: Option<Coordinate>,
}

impl<'a, S> StartGuard<'a, S> {
    fn new(inner: &'a mut S, config: &WorldConfig) -> Self {
        Self {
            inner,
            start: config.safe_start.then_some(config.start),
        }
    }
}

impl<S: CellSource> CellSource for StartGuard<'_, S> {
    fn create(&mut self, at: Coordinate) -> Result<Cell> {
        let mut cell = self.inner.create(at)?;
        if self.start == Some(at) {
            cell.disarm();
        }
        Ok(cell)
    }
}
