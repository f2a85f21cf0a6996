//! Cell sources - the materialization backend
//!
//! A [`CellSource`] creates the cell for a coordinate the first time a window
//! needs it. Creation may fail (a resource the cell depends on could not be
//! acquired); the window controller propagates that to the caller of
//! `recenter` without advancing the focus.

use crate::cell::Cell;
use crate::error::{KernelError, Result};
use crate::rng::HazardRatio;
use crate::types::Coordinate;

pub trait CellSource {
    fn create(&mut self, at: Coordinate) -> Result<Cell>;
}

impl<F> CellSource for F
where
    F: FnMut(Coordinate) -> Result<Cell>,
{
    fn create(&mut self, at: Coordinate) -> Result<Cell> {
        self(at)
    }
}

/// Seeded hazard placement. Same seed and ratio give the same hazard for a
/// coordinate regardless of when it is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededCellSource {
    seed: u64,
    hazard: HazardRatio,
}

impl SeededCellSource {
    pub fn new(seed: u64, hazard: HazardRatio) -> Self {
        Self { seed, hazard }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn hazard(&self) -> HazardRatio {
        self.hazard
    }

    /// Whether `at` holds a hazard, without creating anything.
    pub fn is_hazard(&self, at: Coordinate) -> bool {
        self.hazard.hit(at.x, at.y, self.seed)
    }
}

impl CellSource for SeededCellSource {
    fn create(&mut self, at: Coordinate) -> Result<Cell> {
        Ok(Cell::new(at, self.is_hazard(at)))
    }
}

/// Source that fails for every coordinate matching a predicate.
///
/// Wraps another source; useful to model a backend that cannot acquire the
/// resources for some cells.
pub struct FailingSource<S, P> {
    inner: S,
    fails: P,
}

impl<S, P> FailingSource<S, P>
where
    S: CellSource,
    P: FnMut(Coordinate) -> bool,
{
    pub fn new(inner: S, fails: P) -> Self {
        Self { inner, fails }
    }
}

impl<S, P> CellSource for FailingSource<S, P>
where
    S: CellSource,
    P: FnMut(Coordinate) -> bool,
{
    fn create(&mut self, at: Coordinate) -> Result<Cell> {
        if (self.fails)(at) {
            return Err(KernelError::Materialize {
                at,
                reason: "resource unavailable".to_string(),
            });
        }
        self.inner.create(at)
    }
}
