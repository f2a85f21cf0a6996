//! Bounded automaton - fixed-extent grid stepped synchronously
//!
//! The whole grid is materialized at construction. Every [`LifeKernel::step`]
//! computes all next states from the current generation before writing any of
//! them back.

use log::{debug, trace};

use crate::boundary::{neighbors, BoundaryPolicy};
use crate::cell::Cell;
use crate::config::LifeConfig;
use crate::error::Result;
use crate::rng::SimpleRng;
use crate::rules;
use crate::snapshot::LifeSnapshot;
use crate::store::GridStore;
use crate::types::{Coordinate, Extent};

/// Outcome of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    pub generation: u64,
    pub births: u32,
    pub deaths: u32,
    pub alive: usize,
}

#[derive(Debug, Clone)]
pub struct LifeKernel {
    config: LifeConfig,
    store: GridStore,
    generation: u64,
    alive: usize,
}

impl LifeKernel {
    pub fn new(config: LifeConfig) -> Result<Self> {
        config.validate()?;
        let mut kernel = Self {
            store: GridStore::with_capacity(config.extent.area()),
            config,
            generation: 0,
            alive: 0,
        };
        kernel.populate(kernel.config.seed);
        Ok(kernel)
    }

    /// Fill the grid with a random initial generation.
    fn populate(&mut self, seed: u64) {
        let mut rng = SimpleRng::new(seed);
        let one_in = self.config.seed_one_in;
        self.store.clear();
        for c in self.config.extent.coordinates() {
            let active = rng.one_in(one_in);
            self.store.get_or_create(c, |c| Cell::with_active(c, active));
        }
        self.generation = 0;
        self.alive = self.store.iter().filter(|c| c.active()).count();
        debug!(
            "life grid {}x{} seeded with {}: {} alive",
            self.config.extent.width, self.config.extent.height, seed, self.alive
        );
    }

    pub fn extent(&self) -> Extent {
        self.config.extent
    }

    pub fn boundary(&self) -> BoundaryPolicy {
        self.config.boundary
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    pub fn store(&self) -> &GridStore {
        &self.store
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn alive_count(&self) -> usize {
        self.alive
    }

    pub fn is_alive(&self, at: Coordinate) -> bool {
        self.store.get(at).is_some_and(Cell::active)
    }

    /// Advance one generation.
    pub fn step(&mut self) -> StepReport {
        let next = rules::next_generation(&self.store, self.config.extent, self.config.boundary);
        let delta = rules::apply_generation(&mut self.store, &next);
        self.generation += 1;
        self.alive = self.alive + delta.births as usize - delta.deaths as usize;

        let report = StepReport {
            generation: self.generation,
            births: delta.births,
            deaths: delta.deaths,
            alive: self.alive,
        };
        trace!("{:?}", report);
        report
    }

    /// Set one cell. Out-of-range coordinates are ignored; returns whether a
    /// cell was addressed.
    pub fn set_alive(&mut self, at: Coordinate, alive: bool) -> bool {
        match self.store.get_mut(at) {
            Some(cell) => {
                if cell.active() != alive {
                    cell.set_active(alive);
                    if alive {
                        self.alive += 1;
                    } else {
                        self.alive -= 1;
                    }
                }
                true
            }
            None => false,
        }
    }

    /// Set every resolved neighbor of `origin` to `alive`. Returns how many
    /// cells changed.
    ///
    /// `origin` is untouched unless the boundary resolves a neighbor onto it,
    /// which `Clamped` does at edges and corners.
    pub fn poke(&mut self, origin: Coordinate, alive: bool) -> usize {
        let mut changed = 0;
        for c in neighbors(origin, self.config.boundary) {
            if self.is_alive(c) != alive && self.set_alive(c, alive) {
                changed += 1;
            }
        }
        changed
    }

    /// Re-randomize with a new seed and reset the generation counter.
    pub fn reseed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.populate(seed);
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        for c in self.config.extent.coordinates() {
            if let Some(cell) = self.store.get_mut(c) {
                cell.set_active(false);
            }
        }
        self.alive = 0;
    }

    pub fn snapshot(&self) -> LifeSnapshot {
        let mut snap = LifeSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot, reusing its allocation.
    pub fn snapshot_into(&self, snap: &mut LifeSnapshot) {
        snap.extent = self.config.extent;
        snap.generation = self.generation;
        snap.alive = self.alive;
        snap.cells.clear();
        snap.cells
            .extend(self.config.extent.coordinates().map(|c| self.is_alive(c)));
    }
}
