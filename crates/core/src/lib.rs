//! Grid simulation kernel - pure, deterministic, and testable
//!
//! This crate contains the grid rules, state management, and materialization
//! logic. It has **no dependencies** on terminals, input devices, or I/O:
//!
//! - **Deterministic**: Same seed and configuration produce identical grids
//! - **Testable**: Every rule and ordering guarantee is unit tested
//! - **Lazy**: The streaming world only materializes cells around its focal point
//!
//! # Module Structure
//!
//! - [`boundary`]: boundary policies and 8-neighbor resolution
//! - [`cell`]: the cell type and its exposure transitions
//! - [`store`]: coordinate-keyed cell cache with idempotent creation
//! - [`rules`]: automaton transition and proximity aggregation
//! - [`window`]: focal point ownership and windowed materialization
//! - [`source`]: cell sources (seeded hazard placement)
//! - [`life`]: bounded automaton façade
//! - [`world`]: streaming world façade
//! - [`kernel`]: one interface over both modes
//!
//! # Example
//!
//! ```
//! use tui_gridworld_core::{WorldConfig, WorldKernel};
//! use tui_gridworld_types::{Coordinate, Direction};
//!
//! let mut world = WorldKernel::new(WorldConfig::default().with_seed(7)).unwrap();
//! let before = world.store().len();
//!
//! let next = world.focus().step(Direction::Right);
//! let outcome = world.recenter(next).unwrap();
//!
//! // One new column of 2 * radius + 1 cells entered the window
//! assert_eq!(outcome.update.created, 7);
//! assert_eq!(world.store().len(), before + 7);
//! ```
//!
//! # Ordering
//!
//! A recenter pass materializes the whole new window before the proximity
//! scan runs, and an automaton step computes every next state before writing
//! any back. Callers drive both from a single periodic tick; the kernel does
//! no locking of its own.

pub mod boundary;
pub mod cell;
pub mod config;
pub mod error;
pub mod kernel;
pub mod life;
pub mod rng;
pub mod rules;
pub mod snapshot;
pub mod source;
pub mod store;
pub mod window;
pub mod world;

pub use tui_gridworld_types as types;

// Re-export commonly used types for convenience
pub use boundary::{neighbors, BoundaryPolicy};
pub use cell::{Cell, CellId};
pub use config::{EvictionPolicy, KernelConfig, LifeConfig, WorldConfig};
pub use error::{ConfigError, KernelError};
pub use kernel::{Mode, SimulationKernel};
pub use life::{LifeKernel, StepReport};
pub use rng::{HazardRatio, SimpleRng};
pub use snapshot::{CellView, LifeSnapshot, WorldSnapshot};
pub use source::{CellSource, FailingSource, SeededCellSource};
pub use store::GridStore;
pub use window::{GridWindow, WindowController, WindowUpdate};
pub use world::{RecenterOutcome, WorldKernel};
