//! Window controller tests - windowed materialization and proximity scan

use std::collections::HashMap;

use tui_gridworld::core::{
    Cell, CellSource, EvictionPolicy, FailingSource, GridStore, GridWindow, HazardRatio,
    KernelError, SeededCellSource, WindowController, WorldConfig, WorldKernel,
};
use tui_gridworld::types::{Coordinate, Direction};

fn seeded() -> SeededCellSource {
    SeededCellSource::new(11, HazardRatio::one_in(4))
}

fn hazards_at(
    points: &'static [(i32, i32)],
) -> impl FnMut(Coordinate) -> Result<Cell, KernelError> {
    move |c| Ok(Cell::new(c, points.contains(&(c.x, c.y))))
}

fn cells_of(store: &GridStore) -> HashMap<Coordinate, Cell> {
    store.iter().map(|c| (c.coordinate(), c.clone())).collect()
}

#[test]
fn test_unit_move_adds_one_edge_of_the_ring() {
    for radius in 1..=5u32 {
        for dir in [Direction::Right, Direction::Down, Direction::Left, Direction::Up] {
            let mut store = GridStore::new();
            let mut source = seeded();
            let mut ctl =
                WindowController::new(Coordinate::ORIGIN, radius, 0, EvictionPolicy::Disabled);
            ctl.materialize_initial(&mut store, &mut source).unwrap();
            let side = (2 * radius + 1) as usize;
            assert_eq!(store.len(), side * side);

            let update = ctl
                .recenter(&mut store, &mut source, Coordinate::ORIGIN.step(dir))
                .unwrap();
            assert_eq!(update.created, side, "radius {} moving {}", radius, dir.as_str());
            assert_eq!(store.len(), side * side + side);
        }
    }
}

#[test]
fn test_fresh_moves_create_exactly_2r_plus_1_and_keep_prior_cells() {
    let radius = 3;
    let mut store = GridStore::new();
    let mut source = seeded();
    let mut ctl = WindowController::new(Coordinate::ORIGIN, radius, 1, EvictionPolicy::Disabled);
    ctl.materialize_initial(&mut store, &mut source).unwrap();

    let mut focus = Coordinate::ORIGIN;
    for _ in 0..10 {
        let prior = cells_of(&store);
        focus = focus.step(Direction::Right);
        let update = ctl.recenter(&mut store, &mut source, focus).unwrap();

        assert_eq!(update.created, 7);
        assert_eq!(store.len(), prior.len() + 7);
        for (c, cell) in &prior {
            let now = store.get(*c).expect("prior cell still present");
            assert_eq!(now.hazard(), cell.hazard());
            assert_eq!(now.exposure(), cell.exposure());
            assert_eq!(now.id(), cell.id());
        }
    }
}

#[test]
fn test_backtracking_creates_nothing() {
    let mut store = GridStore::new();
    let mut source = seeded();
    let mut ctl = WindowController::new(Coordinate::ORIGIN, 2, 1, EvictionPolicy::Disabled);
    ctl.materialize_initial(&mut store, &mut source).unwrap();
    ctl.recenter(&mut store, &mut source, Coordinate::new(1, 0)).unwrap();
    let total = store.materialized_total();

    let update = ctl.recenter(&mut store, &mut source, Coordinate::ORIGIN).unwrap();
    assert!(update.changed);
    assert_eq!(update.created, 0);
    assert_eq!(store.materialized_total(), total);
}

#[test]
fn test_jump_materializes_whole_new_window() {
    let mut store = GridStore::new();
    let mut source = seeded();
    let mut ctl = WindowController::new(Coordinate::ORIGIN, 2, 1, EvictionPolicy::Disabled);
    ctl.materialize_initial(&mut store, &mut source).unwrap();

    let update = ctl
        .recenter(&mut store, &mut source, Coordinate::new(100, -100))
        .unwrap();
    assert_eq!(update.created, 25);
    assert!(GridWindow::new(Coordinate::new(100, -100), 2)
        .coordinates()
        .all(|c| store.contains(c)));
}

#[test]
fn test_full_window_counts_match_neighbor_hazards() {
    // Scan margin 1: every scanned cell has all 8 neighbors materialized.
    let cfg = WorldConfig::default().with_radius(3).with_scan_margin(1);
    let source = hazards_at(&[(1, 1), (2, 2), (-1, 0), (3, 3)]);
    let world = WorldKernel::with_source(cfg, source).unwrap();

    for c in world.controller().scan_window().coordinates() {
        let expected = tui_gridworld::types::NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| [(1, 1), (2, 2), (-1, 0), (3, 3)].contains(&(c.x + dx, c.y + dy)))
            .count() as u8;
        let cell = world.store().get(c).unwrap();
        assert_eq!(cell.display_count(), Some(expected), "count at {}", c);
    }
    assert_eq!(world.store().get(Coordinate::ORIGIN).unwrap().display_count(), Some(2));
}

#[test]
fn test_partial_window_count_grows_when_neighbor_arrives() {
    // Scan margin 0: edge cells are scanned with absent neighbors.
    let cfg = WorldConfig::default().with_radius(1).with_scan_margin(0);
    let mut world = WorldKernel::with_source(cfg, hazards_at(&[(2, 0)])).unwrap();

    let edge = Coordinate::new(1, 0);
    assert_eq!(world.store().get(edge).unwrap().display_count(), Some(0));
    assert!(!world.store().contains(Coordinate::new(2, 0)));

    world.recenter(edge).unwrap();
    assert!(world.store().contains(Coordinate::new(2, 0)));
    assert_eq!(world.store().get(edge).unwrap().display_count(), Some(1));
    assert_eq!(world.aggregate(edge), 1);
}

#[test]
fn test_cells_outside_scan_window_have_no_count() {
    let cfg = WorldConfig::default().with_radius(3).with_scan_margin(2);
    let world = WorldKernel::new(cfg).unwrap();
    let far = Coordinate::new(3, 3);
    assert!(world.store().contains(far));
    assert_eq!(world.store().get(far).unwrap().display_count(), None);
    assert!(world.store().get(Coordinate::new(1, 1)).unwrap().display_count().is_some());
}

#[test]
fn test_failed_materialization_keeps_focus_and_skips_scan() {
    let bad = Coordinate::new(3, 0);
    let mut store = GridStore::new();
    let mut source = FailingSource::new(seeded(), move |c| c == bad);
    let mut ctl = WindowController::new(Coordinate::ORIGIN, 1, 0, EvictionPolicy::Disabled);
    ctl.materialize_initial(&mut store, &mut source).unwrap();

    // Window around (2, 0) needs (3, 0).
    let err = ctl
        .recenter(&mut store, &mut source, Coordinate::new(2, 0))
        .unwrap_err();
    assert!(matches!(err, KernelError::Materialize { at, .. } if at == bad));
    assert_eq!(ctl.focus(), Coordinate::ORIGIN);
    assert!(!store.contains(bad));
    // The scan did not run over the would-be window.
    assert_eq!(store.get(Coordinate::new(2, 0)).and_then(Cell::display_count), None);

    // A target that avoids the failing cell still works.
    assert!(ctl.recenter(&mut store, &mut source, Coordinate::new(0, 1)).is_ok());
    assert_eq!(ctl.focus(), Coordinate::new(0, 1));
}

#[test]
fn test_eviction_disabled_by_default_and_bounded_when_enabled() {
    let mut unbounded = WorldKernel::new(WorldConfig::default().with_radius(2)).unwrap();
    let mut bounded = WorldKernel::new(
        WorldConfig::default()
            .with_radius(2)
            .with_eviction(EvictionPolicy::Distance { factor: 2 }),
    )
    .unwrap();

    let mut focus = Coordinate::ORIGIN;
    for _ in 0..40 {
        focus = focus.step(Direction::Right);
        unbounded.recenter(focus).unwrap();
        bounded.recenter(focus).unwrap();
    }

    assert_eq!(unbounded.store().len(), 25 + 40 * 5);
    // keep distance 4: at most a 9x9 square survives.
    assert!(bounded.store().len() <= 81);
    assert!(bounded
        .store()
        .coordinates()
        .all(|c| c.chebyshev(focus) <= 4));
    assert!(bounded.window().coordinates().all(|c| bounded.store().contains(c)));
}

#[test]
fn test_custom_source_trait_object_style() {
    struct Checkerboard;
    impl CellSource for Checkerboard {
        fn create(&mut self, at: Coordinate) -> Result<Cell, KernelError> {
            Ok(Cell::new(at, (at.x + at.y).rem_euclid(2) == 1))
        }
    }

    let cfg = WorldConfig::default().with_radius(2).with_scan_margin(1);
    let world = WorldKernel::with_source(cfg, Checkerboard).unwrap();
    // Origin has 4 orthogonal hazard neighbors on a checkerboard.
    assert_eq!(world.store().get(Coordinate::ORIGIN).unwrap().display_count(), Some(4));
}
