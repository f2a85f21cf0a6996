//! Kernel-level tests for both simulation modes

use tui_gridworld::core::{
    BoundaryPolicy, Cell, CellSource, ConfigError, EvictionPolicy, KernelError, LifeConfig, LifeKernel, Mode,
    SimulationKernel, WorldConfig, WorldKernel,
};
use tui_gridworld::types::{Coordinate, Direction, Exposure, Extent};

fn hazard_line(c: Coordinate) -> Result<Cell, KernelError> {
    // A vertical wall of hazards at x = 2.
    Ok(Cell::new(c, c.x == 2))
}

fn walk<S: CellSource>(world: &mut WorldKernel<S>, path: &[Direction]) {
    let mut focus = world.focus();
    for &d in path {
        focus = focus.step(d);
        world.recenter(focus).unwrap();
    }
}

#[test]
fn test_triggered_cell_stays_triggered() {
    let mut world = WorldKernel::with_source(WorldConfig::default(), hazard_line).unwrap();
    let wall = Coordinate::new(2, 0);

    world.recenter(Coordinate::new(1, 0)).unwrap();
    let outcome = world.recenter(wall).unwrap();
    assert_eq!(outcome.hazard_reached, Some(wall));
    assert!(world.is_game_over());

    // Later moves, including back over the cell, never undo the trigger.
    for target in [
        Coordinate::new(3, 0),
        Coordinate::new(10, 10),
        wall,
        Coordinate::new(-5, 0),
    ] {
        world.recenter(target).unwrap();
        assert_eq!(world.exposure_at(wall), Some(Exposure::Triggered));
        assert_eq!(world.triggered_at(), Some(wall));
    }
}

#[test]
fn test_trigger_survives_eviction() {
    let cfg = WorldConfig::default()
        .with_radius(1)
        .with_scan_margin(0)
        .with_eviction(EvictionPolicy::Distance { factor: 1 });
    let mut world = WorldKernel::with_source(cfg, hazard_line).unwrap();
    let wall = Coordinate::new(2, 0);
    world.recenter(Coordinate::new(1, 0)).unwrap();
    world.recenter(wall).unwrap();

    world.recenter(Coordinate::new(50, 0)).unwrap();
    assert!(!world.store().contains(wall));
    assert!(world.is_game_over());
    assert_eq!(world.triggered_at(), Some(wall));
    assert!(world.snapshot().game_over);
}

#[test]
fn test_safe_cells_become_exposed() {
    let mut world = WorldKernel::with_source(WorldConfig::default(), hazard_line).unwrap();
    walk(&mut world, &[Direction::Down, Direction::Down, Direction::Left]);
    for c in [
        Coordinate::ORIGIN,
        Coordinate::new(0, 1),
        Coordinate::new(0, 2),
        Coordinate::new(-1, 2),
    ] {
        assert_eq!(world.exposure_at(c), Some(Exposure::Exposed), "{}", c);
    }
    assert_eq!(world.exposure_at(Coordinate::new(1, 1)), Some(Exposure::Hidden));
    assert_eq!(world.moves(), 3);
    assert!(!world.is_game_over());
}

#[test]
fn test_same_seed_same_world() {
    let path = [
        Direction::Right,
        Direction::Right,
        Direction::Down,
        Direction::Left,
        Direction::Up,
        Direction::Up,
        Direction::Up,
    ];
    let cfg = WorldConfig::default().with_seed(1234).with_hazard_one_in(6).with_safe_start(true);

    let mut a = WorldKernel::new(cfg.clone()).unwrap();
    let mut b = WorldKernel::new(cfg).unwrap();
    walk(&mut a, &path);
    walk(&mut b, &path);

    assert_eq!(a.snapshot(), b.snapshot());
    let mut coords: Vec<Coordinate> = a.store().coordinates().collect();
    coords.sort_by_key(|c| (c.y, c.x));
    for c in coords {
        assert_eq!(a.store().get(c), b.store().get(c));
    }
}

#[test]
fn test_hazard_layout_independent_of_path() {
    let cfg = WorldConfig::default().with_seed(77).with_hazard_one_in(3).with_safe_start(false);
    let mut a = WorldKernel::new(cfg.clone()).unwrap();
    let mut b = WorldKernel::new(cfg).unwrap();
    a.recenter(Coordinate::new(6, 0)).unwrap();
    walk(&mut b, &[Direction::Right; 6]);

    for c in a.window().coordinates() {
        assert_eq!(
            a.store().get(c).map(Cell::hazard),
            b.store().get(c).map(Cell::hazard),
            "hazard at {}",
            c
        );
    }
}

#[test]
fn test_different_seeds_differ() {
    let a = WorldKernel::new(WorldConfig::default().with_radius(6).with_seed(1)).unwrap();
    let b = WorldKernel::new(WorldConfig::default().with_radius(6).with_seed(2)).unwrap();
    let hazards = |w: &WorldKernel| -> Vec<bool> {
        w.window()
            .coordinates()
            .map(|c| w.store().get(c).is_some_and(Cell::hazard))
            .collect()
    };
    assert_ne!(hazards(&a), hazards(&b));
}

#[test]
fn test_restart_rebuilds_with_new_seed() {
    let mut world = WorldKernel::with_source(WorldConfig::default(), hazard_line).unwrap();
    world.recenter(Coordinate::new(1, 0)).unwrap();
    world.recenter(Coordinate::new(2, 0)).unwrap();
    assert!(world.is_game_over());

    world.reset().unwrap();
    assert!(!world.is_game_over());
    assert_eq!(world.focus(), Coordinate::ORIGIN);
    assert_eq!(world.moves(), 0);

    let mut seeded = WorldKernel::new(WorldConfig::default()).unwrap();
    seeded.restart(99).unwrap();
    assert_eq!(seeded.config().seed, 99);
    assert_eq!(seeded.source().seed(), 99);
}

#[test]
fn test_life_determinism_under_seed() {
    let cfg = LifeConfig::new(32).with_seed(5);
    let mut a = LifeKernel::new(cfg.clone()).unwrap();
    let mut b = LifeKernel::new(cfg).unwrap();
    for _ in 0..20 {
        assert_eq!(a.step(), b.step());
    }
    assert_eq!(a.snapshot(), b.snapshot());

    let c = LifeKernel::new(LifeConfig::new(32).with_seed(6)).unwrap();
    assert_ne!(LifeKernel::new(LifeConfig::new(32).with_seed(5)).unwrap().snapshot(), c.snapshot());
}

#[test]
fn test_life_adjacent_seeds_draw_different_boards() {
    let board = |seed: u64| {
        let cfg = LifeConfig::new(32).with_seed(seed);
        LifeKernel::new(cfg).unwrap().snapshot()
    };
    assert_ne!(board(0).cells, board(1).cells);
    assert_ne!(board(1).cells, board(0x1_0000_0001).cells);

    // Reseeding with the next seed, as the runner does, redraws the board.
    let mut life = LifeKernel::new(LifeConfig::new(32).with_seed(0)).unwrap();
    let before = life.snapshot().cells;
    life.reseed(1);
    assert_ne!(life.snapshot().cells, before);
}

#[test]
fn test_life_toroidal_corner_neighbor_counts() {
    let mut life = LifeKernel::new(LifeConfig::new(10)).unwrap();
    life.clear();
    // Three live cells touching (0, 0) only across the wrap.
    for (x, y) in [(9, 9), (9, 0), (0, 9)] {
        life.set_alive(Coordinate::new(x, y), true);
    }
    life.step();
    assert!(life.is_alive(Coordinate::ORIGIN), "born from wrapped neighbors");
}

#[test]
fn test_life_poke_sets_neighborhood() {
    let mut life = LifeKernel::new(LifeConfig::new(10)).unwrap();
    life.clear();
    assert_eq!(life.poke(Coordinate::new(5, 5), true), 8);
    assert_eq!(life.alive_count(), 8);
    assert!(!life.is_alive(Coordinate::new(5, 5)));
    assert_eq!(life.poke(Coordinate::new(5, 5), true), 0);
}

#[test]
fn test_life_poke_clamped_corner_includes_origin() {
    let extent = Extent::square(10);
    let cfg = LifeConfig::new(10).with_boundary(BoundaryPolicy::Clamped(extent));
    let mut life = LifeKernel::new(cfg).unwrap();
    life.clear();

    // (-1, -1), (0, -1) and (-1, 0) all clamp back onto the corner.
    assert_eq!(life.poke(Coordinate::ORIGIN, true), 4);
    assert!(life.is_alive(Coordinate::ORIGIN));
    for (x, y) in [(1, 0), (0, 1), (1, 1)] {
        assert!(life.is_alive(Coordinate::new(x, y)));
    }
    assert_eq!(life.alive_count(), 4);
}

#[test]
fn test_repeated_recenter_leaves_every_cell_unchanged() {
    let cfg = WorldConfig::default().with_seed(11).with_hazard_one_in(4);
    let mut world = WorldKernel::new(cfg).unwrap();
    walk(&mut world, &[Direction::Right, Direction::Down, Direction::Down]);

    let cells = |world: &WorldKernel| {
        let mut cells: Vec<Cell> = world.store().iter().cloned().collect();
        cells.sort_by_key(Cell::coordinate);
        cells
    };
    let focus = world.focus();
    let before = cells(&world);
    let moves = world.moves();

    let outcome = world.recenter(focus).unwrap();
    assert!(!outcome.update.changed);
    assert_eq!(outcome.hazard_reached, None);
    assert_eq!(cells(&world), before);
    assert_eq!(world.moves(), moves);
}

#[test]
fn test_invalid_configs_fail_fast() {
    assert_eq!(
        WorldKernel::new(WorldConfig::default().with_radius(0)).unwrap_err(),
        KernelError::Config(ConfigError::ZeroRadius)
    );
    assert!(matches!(
        WorldKernel::new(WorldConfig::default().with_radius(1).with_scan_margin(2)),
        Err(KernelError::Config(ConfigError::ScanMarginTooLarge { .. }))
    ));
    assert!(matches!(
        WorldKernel::new(WorldConfig::default().with_radius(u32::MAX)),
        Err(KernelError::Config(ConfigError::RadiusTooLarge { .. }))
    ));
    assert!(matches!(
        LifeKernel::new(LifeConfig::new(3_000_000_000)),
        Err(KernelError::Config(ConfigError::ExtentTooLarge { .. }))
    ));
    assert!(matches!(
        WorldKernel::new(WorldConfig::default().with_hazard_one_in(0)),
        Err(KernelError::Config(ConfigError::ZeroRatio { .. }))
    ));
    assert!(matches!(
        WorldKernel::new(
            WorldConfig::default().with_eviction(EvictionPolicy::Distance { factor: 0 })
        ),
        Err(KernelError::Config(ConfigError::ZeroEvictionFactor))
    ));

    assert!(matches!(
        LifeKernel::new(LifeConfig::new(0)),
        Err(KernelError::Config(ConfigError::EmptyExtent { .. }))
    ));
    assert_eq!(
        LifeKernel::new(LifeConfig::new(8).with_boundary(BoundaryPolicy::Infinite)).unwrap_err(),
        KernelError::Config(ConfigError::UnboundedLife)
    );
    assert!(matches!(
        LifeKernel::new(
            LifeConfig::new(8).with_boundary(BoundaryPolicy::Toroidal(Extent::square(9)))
        ),
        Err(KernelError::Config(ConfigError::ExtentMismatch { .. }))
    ));
}

#[test]
fn test_simulation_kernel_dispatch() {
    let mut kernel = SimulationKernel::from_config(WorldConfig::default()).unwrap();
    assert_eq!(kernel.mode(), Mode::World);
    assert!(kernel.as_world().is_some());
    assert!(kernel.recenter(Coordinate::new(0, 1)).unwrap().update.changed);
    assert!(kernel.step().is_err());

    let mut kernel = SimulationKernel::from(LifeKernel::new(LifeConfig::new(16)).unwrap());
    assert_eq!(kernel.mode(), Mode::Life);
    assert_eq!(kernel.store().len(), 256);
    assert!(!kernel.is_game_over());
    assert_eq!(kernel.step().unwrap().generation, 1);
    assert_eq!(kernel.as_life().map(LifeKernel::generation), Some(1));
}
