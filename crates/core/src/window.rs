//! Window controller - lazy materialization around a moving focal point
//!
//! The controller owns the focal coordinate and only changes it through
//! [`WindowController::recenter`]. A recenter pass has a fixed order:
//!
//! 1. materialize every missing coordinate of the new window,
//! 2. advance the focus,
//! 3. run the proximity scan over the inner window,
//! 4. evict (if enabled).
//!
//! The scan never starts before every materialization of the pass has
//! resolved, so it never observes a half-built window. If a materialization
//! fails the pass stops there: the focus stays put and no scan runs. Cells
//! created before the failure remain, which is harmless since creation is
//! idempotent.

use log::{debug, trace};

use crate::boundary::BoundaryPolicy;
use crate::config::EvictionPolicy;
use crate::error::Result;
use crate::rules;
use crate::source::CellSource;
use crate::store::GridStore;
use crate::types::Coordinate;

/// Square coordinate set `[focus - r, focus + r]` on both axes (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridWindow {
    pub focus: Coordinate,
    pub radius: u32,
}

impl GridWindow {
    pub fn new(focus: Coordinate, radius: u32) -> Self {
        Self { focus, radius }
    }

    pub fn side(&self) -> u32 {
        self.radius.saturating_mul(2).saturating_add(1)
    }

    pub fn len(&self) -> usize {
        let side = self.side() as usize;
        side.saturating_mul(side)
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        self.focus.chebyshev(c) <= self.radius
    }

    /// Coordinates in row-major order (top-left first).
    ///
    /// Rows or columns that would fall outside the `i32` range are skipped.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let r = self.radius as i64;
        let (fx, fy) = (self.focus.x as i64, self.focus.y as i64);
        let in_range = |v: &i64| (i32::MIN as i64..=i32::MAX as i64).contains(v);
        (fy - r..=fy + r).filter(in_range).flat_map(move |y| {
            (fx - r..=fx + r)
                .filter(in_range)
                .map(move |x| Coordinate::new(x as i32, y as i32))
        })
    }
}

/// Result of one recenter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowUpdate {
    /// False when the focus did not change (no-op pass).
    pub changed: bool,
    pub created: usize,
    pub evicted: usize,
    pub scanned: usize,
}

impl WindowUpdate {
    pub fn unchanged() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct WindowController {
    focus: Coordinate,
    radius: u32,
    scan_radius: u32,
    eviction: EvictionPolicy,
}

impl WindowController {
    pub fn new(focus: Coordinate, radius: u32, scan_radius: u32, eviction: EvictionPolicy) -> Self {
        Self {
            focus,
            radius,
            scan_radius: scan_radius.min(radius),
            eviction,
        }
    }

    pub fn focus(&self) -> Coordinate {
        self.focus
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn scan_radius(&self) -> u32 {
        self.scan_radius
    }

    pub fn eviction(&self) -> EvictionPolicy {
        self.eviction
    }

    /// The window around the current focus.
    pub fn window(&self) -> GridWindow {
        GridWindow::new(self.focus, self.radius)
    }

    /// The proximity-scan sub-window around the current focus.
    pub fn scan_window(&self) -> GridWindow {
        GridWindow::new(self.focus, self.scan_radius)
    }

    /// Materialize and scan the window around the current focus.
    ///
    /// Used once at construction, before any recenter.
    pub fn materialize_initial(
        &mut self,
        store: &mut GridStore,
        source: &mut impl CellSource,
    ) -> Result<WindowUpdate> {
        let created = materialize(store, source, self.window())?;
        let scanned = self.scan(store);
        debug!(
            "initial window at {} (r={}): created {}",
            self.focus, self.radius, created
        );
        Ok(WindowUpdate {
            changed: true,
            created,
            evicted: 0,
            scanned,
        })
    }

    /// Move the focal point and bring the store up to date.
    ///
    /// A no-op when `new_focus` equals the current focus.
    pub fn recenter(
        &mut self,
        store: &mut GridStore,
        source: &mut impl CellSource,
        new_focus: Coordinate,
    ) -> Result<WindowUpdate> {
        if new_focus == self.focus {
            return Ok(WindowUpdate::unchanged());
        }

        let target = GridWindow::new(new_focus, self.radius);
        let created = materialize(store, source, target)?;

        self.focus = new_focus;
        let scanned = self.scan(store);

        let evicted = match self.eviction.keep_distance(self.radius) {
            Some(keep) => store.retain_within(self.focus, keep),
            None => 0,
        };

        debug!(
            "recenter to {}: created {}, scanned {}, evicted {}, store {}",
            new_focus,
            created,
            scanned,
            evicted,
            store.len()
        );

        Ok(WindowUpdate {
            changed: true,
            created,
            evicted,
            scanned,
        })
    }

    /// Recompute `display_count` over the scan window. Returns cells scanned.
    pub fn scan(&self, store: &mut GridStore) -> usize {
        let mut scanned = 0;
        for c in self.scan_window().coordinates() {
            let count = rules::aggregate(store, c, BoundaryPolicy::Infinite);
            if let Some(cell) = store.get_mut(c) {
                cell.set_display_count(count);
                scanned += 1;
            }
        }
        trace!("scan around {} covered {} cells", self.focus, scanned);
        scanned
    }
}

/// Create every missing cell of `window`. All creations resolve before this
/// returns; the first failure aborts the pass.
fn materialize(
    store: &mut GridStore,
    source: &mut impl CellSource,
    window: GridWindow,
) -> Result<usize> {
    let missing: Vec<Coordinate> = window
        .coordinates()
        .filter(|&c| !store.contains(c))
        .collect();
    for &c in &missing {
        store.try_get_or_create(c, |at| source.create(at))?;
    }
    Ok(missing.len())
}
