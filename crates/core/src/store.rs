//! GridStore - coordinate-keyed cell cache
//!
//! Exactly one [`Cell`] exists per coordinate for the lifetime of the store.
//! Creation is idempotent: the factory runs at most once per coordinate no
//! matter how often overlapping windows request it. Cells are only removed by
//! an explicit eviction or `clear()`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::cell::Cell;
use crate::types::Coordinate;

#[derive(Debug, Clone, Default)]
pub struct GridStore {
    cells: HashMap<Coordinate, Cell>,
    /// Number of cells ever inserted (factory invocations that succeeded).
    materialized: u64,
}

impl GridStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: HashMap::with_capacity(capacity),
            materialized: 0,
        }
    }

    /// Return the cell at `at`, creating it with `factory` if absent.
    pub fn get_or_create(
        &mut self,
        at: Coordinate,
        factory: impl FnOnce(Coordinate) -> Cell,
    ) -> &mut Cell {
        match self.cells.entry(at) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                self.materialized += 1;
                e.insert(factory(at))
            }
        }
    }

    /// Fallible variant of [`get_or_create`](Self::get_or_create).
    ///
    /// A failing factory leaves the store unchanged.
    pub fn try_get_or_create<E>(
        &mut self,
        at: Coordinate,
        factory: impl FnOnce(Coordinate) -> Result<Cell, E>,
    ) -> Result<&mut Cell, E> {
        match self.cells.entry(at) {
            Entry::Occupied(e) => Ok(e.into_mut()),
            Entry::Vacant(e) => {
                let cell = factory(at)?;
                self.materialized += 1;
                Ok(e.insert(cell))
            }
        }
    }

    /// Look up a cell. Never creates.
    pub fn get(&self, at: Coordinate) -> Option<&Cell> {
        self.cells.get(&at)
    }

    pub fn get_mut(&mut self, at: Coordinate) -> Option<&mut Cell> {
        self.cells.get_mut(&at)
    }

    pub fn contains(&self, at: Coordinate) -> bool {
        self.cells.contains_key(&at)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn materialized_total(&self) -> u64 {
        self.materialized
    }

    /// Iterate all cells (arbitrary order).
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.keys().copied()
    }

    /// Drop every cell farther than `distance` (Chebyshev) from `focus`.
    ///
    /// Returns the number of evicted cells.
    pub fn retain_within(&mut self, focus: Coordinate, distance: u32) -> usize {
        let before = self.cells.len();
        self.cells.retain(|c, _| c.chebyshev(focus) <= distance);
        before - self.cells.len()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
        self.materialized = 0;
    }
}
