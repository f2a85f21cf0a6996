//! Core types module - shared value types and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no kernel logic, so they can be shared by the
//! simulation kernel, the input layer, and the terminal views alike.
//!
//! # Grid Conventions
//!
//! - Coordinates are signed (`i32`); the streaming world is unbounded in every direction
//! - `x` grows to the right, `y` grows downward (screen convention)
//! - Bounded grids cover `0..width` x `0..height`
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DEFAULT_VISIBLE_RADIUS` | 3 | Window radius around the focal point |
//! | `DEFAULT_SCAN_MARGIN` | 2 | Proximity scan covers `radius - margin` |
//! | `DEFAULT_HAZARD_ONE_IN` | 20 | One cell in 20 is a hazard |
//! | `DEFAULT_LIFE_EXTENT` | 100 | Side of the bounded automaton grid |
//! | `DEFAULT_LIFE_SEED_ONE_IN` | 20 | One cell in 20 starts alive |
//!
//! # Examples
//!
//! ```
//! use tui_gridworld_types::{Coordinate, Direction, Exposure};
//!
//! let origin = Coordinate::new(0, 0);
//! let right = origin.step(Direction::Right);
//! assert_eq!(right, Coordinate::new(1, 0));
//!
//! // Canonical key form, also accepted by `parse`
//! assert_eq!(right.key(), "1-0");
//! assert_eq!("-3--4".parse::<Coordinate>(), Ok(Coordinate::new(-3, -4)));
//!
//! assert!(Exposure::Triggered.is_terminal());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Default window radius around the focal point.
pub const DEFAULT_VISIBLE_RADIUS: u32 = 3;

/// Largest accepted window radius; the window holds `(2r + 1)^2` cells.
pub const MAX_VISIBLE_RADIUS: u32 = 1024;

/// Default inset of the proximity scan relative to the window radius.
pub const DEFAULT_SCAN_MARGIN: u32 = 2;

/// Default hazard ratio (1 in 20 cells).
pub const DEFAULT_HAZARD_ONE_IN: u32 = 20;

/// Denser hazard preset (1 in 5 cells).
pub const DENSE_HAZARD_ONE_IN: u32 = 5;

/// Default side length of the bounded automaton grid.
pub const DEFAULT_LIFE_EXTENT: u32 = 100;

/// Largest accepted bounded grid, in cells (4096 x 4096).
pub const MAX_LIFE_CELLS: usize = 1 << 24;

/// Default initial alive ratio of the bounded automaton (1 in 20 cells).
pub const DEFAULT_LIFE_SEED_ONE_IN: u32 = 20;

/// Interval between automaton generations while running.
pub const DEFAULT_LIFE_STEP_MS: u32 = 96;

/// Default random seed.
pub const DEFAULT_SEED: u64 = 1;

/// Delay before a held direction starts repeating.
pub const DEFAULT_DAS_MS: u32 = 150;

/// Interval between repeats of a held direction.
pub const DEFAULT_ARR_MS: u32 = 60;

/// 8-connected Moore neighborhood offsets.
///
/// The order is fixed (top row, middle row, bottom row) so neighbor counts are
/// reproducible and early-exit counting is deterministic.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// An immutable integer pair identifying a grid cell.
///
/// Used verbatim as a cache key. Equality is by component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize)]
pub struct Coordinate {
    pub x: i32,
    pub y: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Canonical string key (`"{x}-{y}"`).
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Offset by `(dx, dy)`. Returns `None` if either axis overflows.
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> Option<Coordinate> {
        Some(Coordinate {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// Move one cell in `dir`, saturating at the integer limits.
    pub fn step(&self, dir: Direction) -> Coordinate {
        let (dx, dy) = dir.delta();
        Coordinate {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Chebyshev (king-move) distance.
    pub fn chebyshev(&self, other: Coordinate) -> u32 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        dx.max(dy).min(u32::MAX as u64) as u32
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

/// Error returned when a coordinate key cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordinateError;

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected a coordinate key of the form \"{x}-{y}\"")
    }
}

impl std::error::Error for ParseCoordinateError {}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse the canonical key form. Negative components make the separator
    /// ambiguous (`"-1--2"`), so the separator is the first `-` that is not
    /// at the start of the string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let sep = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .ok_or(ParseCoordinateError)?;
        let x = s[..sep].parse().map_err(|_| ParseCoordinateError)?;
        let y = s[sep + 1..].parse().map_err(|_| ParseCoordinateError)?;
        Ok(Coordinate { x, y })
    }
}

/// Size of a bounded grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        (self.width as usize).saturating_mul(self.height as usize)
    }

    pub fn contains(&self, c: Coordinate) -> bool {
        c.x >= 0
            && c.y >= 0
            && (c.x as i64) < self.width as i64
            && (c.y as i64) < self.height as i64
    }

    /// Row-major flat index, `None` if out of range.
    pub fn index(&self, c: Coordinate) -> Option<usize> {
        if !self.contains(c) {
            return None;
        }
        Some(c.y as usize * self.width as usize + c.x as usize)
    }

    /// All coordinates in row-major order.
    ///
    /// Sides beyond `i32::MAX` are cut at the largest representable column.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let side = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        let (w, h) = (side(self.width), side(self.height));
        (0..h).flat_map(move |y| (0..w).map(move |x| Coordinate::new(x, y)))
    }
}

/// Cardinal direction for focal-point movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta. `Up` decreases `y`.
    pub const fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_gridworld_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Streaming-world exposure state of a cell.
///
/// - **Hidden**: the focal point has never visited the cell
/// - **Exposed**: the focal point has visited the cell
/// - **Triggered**: the focal point reached a hazard here (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Exposure {
    #[default]
    Hidden,
    Exposed,
    Triggered,
}

impl Exposure {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Exposure::Triggered)
    }

    pub fn is_visited(&self) -> bool {
        !matches!(self, Exposure::Hidden)
    }
}

/// Actions the streaming-world driver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldAction {
    /// Shift the target focal point one cell
    Move(Direction),
    /// Start a new session with the next seed
    Restart,
    /// Toggle pause state
    Pause,
}

/// Actions the bounded-automaton driver understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeAction {
    /// Move the poke cursor one cell
    MoveCursor(Direction),
    /// Activate the neighborhood under the cursor
    Poke,
    /// Advance exactly one generation (while paused)
    Step,
    /// Toggle pause state
    Pause,
    /// Re-randomize the grid with the next seed
    Reseed,
}
