//! Boundary module - neighbor resolution under a boundary policy
//!
//! A [`BoundaryPolicy`] resolves a relative offset against an origin
//! coordinate. [`neighbors`] applies it to the fixed Moore offsets and returns
//! up to 8 coordinates without allocating.
//!
//! Policies:
//! - `Infinite`: no wrap, every integer pair is valid
//! - `Toroidal`: true modulo wrap on both axes
//! - `Clamped`: saturate to the nearest edge (a corner can be its own neighbor)
//! - `Truncated`: out-of-range neighbors are absent

use arrayvec::ArrayVec;

use crate::types::{Coordinate, Extent, NEIGHBOR_OFFSETS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    Infinite,
    Toroidal(Extent),
    Clamped(Extent),
    Truncated(Extent),
}

impl BoundaryPolicy {
    /// Resolve `origin + (dx, dy)` under this policy.
    ///
    /// Returns `None` when the neighbor does not exist (truncated edge, or
    /// integer overflow on an infinite grid). Callers treat `None` as "no
    /// cell", never as an error.
    #[inline]
    pub fn resolve(&self, origin: Coordinate, (dx, dy): (i32, i32)) -> Option<Coordinate> {
        match *self {
            BoundaryPolicy::Infinite => origin.offset(dx, dy),
            BoundaryPolicy::Toroidal(extent) => Some(Coordinate::new(
                wrap(origin.x as i64 + dx as i64, extent.width),
                wrap(origin.y as i64 + dy as i64, extent.height),
            )),
            BoundaryPolicy::Clamped(extent) => Some(Coordinate::new(
                clamp(origin.x as i64 + dx as i64, extent.width),
                clamp(origin.y as i64 + dy as i64, extent.height),
            )),
            BoundaryPolicy::Truncated(extent) => {
                let c = origin.offset(dx, dy)?;
                extent.contains(c).then_some(c)
            }
        }
    }

    /// The grid extent for bounded policies.
    pub fn extent(&self) -> Option<Extent> {
        match *self {
            BoundaryPolicy::Infinite => None,
            BoundaryPolicy::Toroidal(e)
            | BoundaryPolicy::Clamped(e)
            | BoundaryPolicy::Truncated(e) => Some(e),
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.extent().is_some()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryPolicy::Infinite => "infinite",
            BoundaryPolicy::Toroidal(_) => "toroidal",
            BoundaryPolicy::Clamped(_) => "clamped",
            BoundaryPolicy::Truncated(_) => "truncated",
        }
    }

    /// Parse a bounded policy name (case-insensitive) for the given extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_gridworld_core::BoundaryPolicy;
    /// use tui_gridworld_types::Extent;
    ///
    /// let e = Extent::square(8);
    /// assert_eq!(BoundaryPolicy::parse_bounded("torus", e), Some(BoundaryPolicy::Toroidal(e)));
    /// assert_eq!(BoundaryPolicy::parse_bounded("Clamp", e), Some(BoundaryPolicy::Clamped(e)));
    /// assert_eq!(BoundaryPolicy::parse_bounded("nowhere", e), None);
    /// ```
    pub fn parse_bounded(s: &str, extent: Extent) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "torus" | "toroidal" | "wrap" => Some(BoundaryPolicy::Toroidal(extent)),
            "clamp" | "clamped" => Some(BoundaryPolicy::Clamped(extent)),
            "truncate" | "truncated" => Some(BoundaryPolicy::Truncated(extent)),
            _ => None,
        }
    }
}

/// True modulo: `((v % n) + n) % n`.
#[inline]
fn wrap(v: i64, n: u32) -> i32 {
    let n = n.max(1) as i64;
    v.rem_euclid(n) as i32
}

#[inline]
fn clamp(v: i64, n: u32) -> i32 {
    let max = n.max(1) as i64 - 1;
    v.clamp(0, max) as i32
}

/// Resolve the 8 Moore neighbors of `origin`.
///
/// Order follows [`NEIGHBOR_OFFSETS`]. Absent neighbors are skipped, so the
/// result holds between 0 and 8 coordinates. Duplicates are kept: under
/// `Clamped` a corner cell resolves to itself three times.
pub fn neighbors(origin: Coordinate, policy: BoundaryPolicy) -> ArrayVec<Coordinate, 8> {
    let mut out = ArrayVec::new();
    for offset in NEIGHBOR_OFFSETS {
        if let Some(c) = policy.resolve(origin, offset) {
            out.push(c);
        }
    }
    out
}
