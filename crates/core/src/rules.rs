//! Rule engine - stateless per-cell transition and aggregation
//!
//! Two rule families share the neighbor resolver:
//!
//! - **Automaton**: B3/S23. Every next state is computed from one snapshot of
//!   the current generation ([`next_generation`]) and written back afterwards
//!   ([`apply_generation`]), so results never depend on visit order.
//! - **Proximity scan**: [`aggregate`] counts hazards among the materialized
//!   neighbors. Absent neighbors contribute 0, so a count can grow later when
//!   a neighbor is generated. The result is advisory display data.

use crate::boundary::{neighbors, BoundaryPolicy};
use crate::cell::Cell;
use crate::store::GridStore;
use crate::types::{Coordinate, Extent};

/// Counting stops once this many live neighbors have been seen.
///
/// Only the exact counts 2 and 3 matter to the rule, so anything above 4
/// has the same outcome.
const LIVE_COUNT_CUTOFF: u8 = 4;

/// B3/S23 transition.
#[inline]
pub fn next_alive(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,
        (false, 3) => true,
        _ => false,
    }
}

/// Transition for a concrete cell.
#[inline]
pub fn transition(cell: &Cell, live_neighbors: u8) -> bool {
    next_alive(cell.active(), live_neighbors)
}

/// Count live neighbors of `origin`, stopping early above the cutoff.
///
/// The returned value is exact for counts up to 4 and some value greater than
/// 4 otherwise.
pub fn count_live(store: &GridStore, origin: Coordinate, policy: BoundaryPolicy) -> u8 {
    let mut live = 0u8;
    for c in neighbors(origin, policy) {
        if live > LIVE_COUNT_CUTOFF {
            break;
        }
        if store.get(c).is_some_and(Cell::active) {
            live += 1;
        }
    }
    live
}

/// Count hazard cells among the materialized neighbors of `origin`.
pub fn aggregate(store: &GridStore, origin: Coordinate, policy: BoundaryPolicy) -> u8 {
    neighbors(origin, policy)
        .into_iter()
        .filter(|&c| store.get(c).is_some_and(Cell::hazard))
        .count() as u8
}

/// Compute the next generation for every coordinate of `extent`.
///
/// Reads only; the store is left untouched. Returned in row-major order.
pub fn next_generation(
    store: &GridStore,
    extent: Extent,
    policy: BoundaryPolicy,
) -> Vec<(Coordinate, bool)> {
    extent
        .coordinates()
        .map(|c| {
            let alive = store.get(c).is_some_and(Cell::active);
            (c, next_alive(alive, count_live(store, c, policy)))
        })
        .collect()
}

/// Births and deaths produced by [`apply_generation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenerationDelta {
    pub births: u32,
    pub deaths: u32,
}

/// Write a computed generation back into the store.
pub fn apply_generation(store: &mut GridStore, next: &[(Coordinate, bool)]) -> GenerationDelta {
    let mut delta = GenerationDelta::default();
    for &(c, alive) in next {
        if let Some(cell) = store.get_mut(c) {
            match (cell.active(), alive) {
                (false, true) => delta.births += 1,
                (true, false) => delta.deaths += 1,
                _ => continue,
            }
            cell.set_active(alive);
        }
    }
    delta
}
