//! Cell module - the unit of simulated state
//!
//! A cell's identity, coordinate and hazard flag are fixed at creation. The
//! window moves, cells never do. The remaining axes are mutually independent:
//! `active` belongs to the automaton, `exposure` and `display_count` to the
//! streaming world.

use std::fmt;

use serde::Serialize;

use crate::types::{Coordinate, Exposure};

/// Stable identifier derived from a cell's coordinate.
///
/// Packs both axes into one `u64`; displays as the canonical `"{x}-{y}"` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CellId(u64);

impl CellId {
    pub fn of(c: Coordinate) -> Self {
        Self(((c.x as u32 as u64) << 32) | (c.y as u32 as u64))
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new((self.0 >> 32) as u32 as i32, self.0 as u32 as i32)
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.coordinate().fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    coordinate: Coordinate,
    hazard: bool,
    active: bool,
    exposure: Exposure,
    /// Advisory proximity count, `None` until a scan covers the cell.
    display_count: Option<u8>,
}

impl Cell {
    pub fn new(coordinate: Coordinate, hazard: bool) -> Self {
        Self {
            id: CellId::of(coordinate),
            coordinate,
            hazard,
            active: false,
            exposure: Exposure::Hidden,
            display_count: None,
        }
    }

    /// Automaton cell with an initial alive flag.
    pub fn with_active(coordinate: Coordinate, active: bool) -> Self {
        Self {
            active,
            ..Self::new(coordinate, false)
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn hazard(&self) -> bool {
        self.hazard
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn exposure(&self) -> Exposure {
        self.exposure
    }

    pub fn display_count(&self) -> Option<u8> {
        self.display_count
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub(crate) fn set_display_count(&mut self, count: u8) {
        self.display_count = Some(count);
    }

    /// Record a visit by the focal point.
    ///
    /// `Hidden` becomes `Exposed`, and a hazard goes on to `Triggered`.
    /// Both steps happen in the same visit, so a hazard is never observed
    /// as `Exposed`. Returns true only on the visit that triggers.
    /// `Triggered` never changes.
    pub(crate) fn expose(&mut self) -> bool {
        match self.exposure {
            Exposure::Triggered => false,
            Exposure::Hidden | Exposure::Exposed => {
                if self.hazard {
                    self.exposure = Exposure::Triggered;
                    true
                } else {
                    self.exposure = Exposure::Exposed;
                    false
                }
            }
        }
    }

    /// Force the hazard flag off (start-cell protection).
    pub(crate) fn disarm(&mut self) {
        self.hazard = false;
    }
}
