//! Property-based tests for boundary resolution, rules and determinism.

use proptest::prelude::*;
use tui_gridworld::core::rules::next_alive;
use tui_gridworld::core::{
    neighbors, BoundaryPolicy, Cell, GridStore, HazardRatio, LifeConfig, LifeKernel,
    SeededCellSource, WorldConfig, WorldKernel,
};
use tui_gridworld::types::{Coordinate, Direction, Extent};

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

// =============================================================================
// Boundary Properties
// =============================================================================

proptest! {
    /// Toroidal resolution always lands inside the extent.
    #[test]
    fn prop_toroidal_in_range(
        x in -10_000i32..10_000,
        y in -10_000i32..10_000,
        w in 1u32..200,
        h in 1u32..200,
        dx in -1i32..=1,
        dy in -1i32..=1,
    ) {
        let extent = Extent::new(w, h);
        let c = BoundaryPolicy::Toroidal(extent)
            .resolve(Coordinate::new(x, y), (dx, dy))
            .unwrap();
        prop_assert!(extent.contains(c));
        prop_assert_eq!(c.x as i64, (x as i64 + dx as i64).rem_euclid(w as i64));
        prop_assert_eq!(c.y as i64, (y as i64 + dy as i64).rem_euclid(h as i64));
    }

    /// Clamped resolution saturates to the edge and never leaves the grid.
    #[test]
    fn prop_clamped_in_range(
        x in -50i32..250,
        y in -50i32..250,
        side in 1u32..200,
        dx in -1i32..=1,
        dy in -1i32..=1,
    ) {
        let extent = Extent::square(side);
        let c = BoundaryPolicy::Clamped(extent)
            .resolve(Coordinate::new(x, y), (dx, dy))
            .unwrap();
        prop_assert!(extent.contains(c));
        let max = side as i32 - 1;
        prop_assert_eq!(c.x, (x + dx).clamp(0, max));
        prop_assert_eq!(c.y, (y + dy).clamp(0, max));
    }

    /// Truncated neighbors are exactly the in-range infinite neighbors.
    #[test]
    fn prop_truncated_is_filtered_infinite(x in -3i32..20, y in -3i32..20, side in 1u32..16) {
        let extent = Extent::square(side);
        let origin = Coordinate::new(x, y);
        let truncated: Vec<Coordinate> =
            neighbors(origin, BoundaryPolicy::Truncated(extent)).into_iter().collect();
        let filtered: Vec<Coordinate> = neighbors(origin, BoundaryPolicy::Infinite)
            .into_iter()
            .filter(|&c| extent.contains(c))
            .collect();
        prop_assert_eq!(truncated, filtered);
    }
}

// =============================================================================
// Rule Properties
// =============================================================================

proptest! {
    /// The automaton step matches a brute-force count on random boards.
    #[test]
    fn prop_step_matches_reference(
        side in 3u32..12,
        cells in proptest::collection::vec(any::<bool>(), 144),
    ) {
        let extent = Extent::square(side);
        let mut life = LifeKernel::new(LifeConfig::new(side)).unwrap();
        life.clear();
        let alive_at = |c: Coordinate| cells[(c.y as u32 * side + c.x as u32) as usize];
        for c in extent.coordinates() {
            life.set_alive(c, alive_at(c));
        }

        life.step();

        let s = side as i32;
        for c in extent.coordinates() {
            let mut n = 0u8;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) == (0, 0) {
                        continue;
                    }
                    let nc = Coordinate::new((c.x + dx).rem_euclid(s), (c.y + dy).rem_euclid(s));
                    n += alive_at(nc) as u8;
                }
            }
            prop_assert_eq!(life.is_alive(c), next_alive(alive_at(c), n), "at {}", c);
        }
    }
}

// =============================================================================
// Materialization and Determinism Properties
// =============================================================================

proptest! {
    /// Requesting the same coordinates twice never changes the store.
    #[test]
    fn prop_materialization_idempotent(
        coords in proptest::collection::vec((-20i32..20, -20i32..20), 1..60),
    ) {
        let mut store = GridStore::new();
        let source = SeededCellSource::new(3, HazardRatio::one_in(2));
        for &(x, y) in &coords {
            let c = Coordinate::new(x, y);
            store.get_or_create(c, |c| Cell::new(c, source.is_hazard(c)));
        }
        let len = store.len();
        let total = store.materialized_total();
        for &(x, y) in coords.iter().rev() {
            let c = Coordinate::new(x, y);
            store.get_or_create(c, |c| Cell::new(c, !source.is_hazard(c)));
            prop_assert_eq!(store.get(c).unwrap().hazard(), source.is_hazard(c));
        }
        prop_assert_eq!(store.len(), len);
        prop_assert_eq!(store.materialized_total(), total);
    }

    /// Same seed and same move sequence produce identical worlds.
    #[test]
    fn prop_world_deterministic(
        seed in any::<u64>(),
        path in proptest::collection::vec(direction(), 0..30),
    ) {
        let cfg = WorldConfig::default().with_seed(seed).with_hazard_one_in(4);
        let mut a = WorldKernel::new(cfg.clone()).unwrap();
        let mut b = WorldKernel::new(cfg).unwrap();
        for &d in &path {
            let ta = a.focus().step(d);
            let tb = b.focus().step(d);
            let oa = a.recenter(ta).unwrap();
            let ob = b.recenter(tb).unwrap();
            prop_assert_eq!(oa, ob);
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
        prop_assert_eq!(a.store().len(), b.store().len());
    }

    /// Every materialized window cell within the scan radius carries the
    /// hazard count of its materialized neighbors.
    #[test]
    fn prop_scan_counts_consistent(
        seed in any::<u64>(),
        path in proptest::collection::vec(direction(), 1..12),
    ) {
        let cfg = WorldConfig::default().with_seed(seed).with_hazard_one_in(3);
        let mut world = WorldKernel::new(cfg).unwrap();
        for &d in &path {
            let t = world.focus().step(d);
            world.recenter(t).unwrap();
        }
        for c in world.controller().scan_window().coordinates() {
            let cell = world.store().get(c).unwrap();
            prop_assert_eq!(cell.display_count(), Some(world.aggregate(c)));
        }
    }
}
