use serde::Serialize;

use crate::cell::Cell;
use crate::types::{Coordinate, Exposure, Extent};

/// Read-only view of one cell for the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellView {
    pub coordinate: Coordinate,
    pub hazard: bool,
    pub active: bool,
    pub exposure: Exposure,
    pub display_count: Option<u8>,
}

impl From<&Cell> for CellView {
    fn from(value: &Cell) -> Self {
        Self {
            coordinate: value.coordinate(),
            hazard: value.hazard(),
            active: value.active(),
            exposure: value.exposure(),
            display_count: value.display_count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldSnapshot {
    pub focus: Coordinate,
    pub radius: u32,
    /// Window cells in row-major order; `None` where nothing is materialized.
    pub cells: Vec<Option<CellView>>,
    pub game_over: bool,
    pub triggered_at: Option<Coordinate>,
    pub moves: u64,
    pub store_len: usize,
}

impl WorldSnapshot {
    pub fn clear(&mut self) {
        self.focus = Coordinate::ORIGIN;
        self.radius = 0;
        self.cells.clear();
        self.game_over = false;
        self.triggered_at = None;
        self.moves = 0;
        self.store_len = 0;
    }

    pub fn side(&self) -> u32 {
        self.radius.saturating_mul(2).saturating_add(1)
    }

    /// Cell at window-relative position (`0..side`, `0..side`).
    pub fn at(&self, col: u32, row: u32) -> Option<&CellView> {
        let side = self.side();
        if col >= side || row >= side {
            return None;
        }
        self.cells
            .get((row * side + col) as usize)
            .and_then(Option::as_ref)
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for WorldSnapshot {
    fn default() -> Self {
        Self {
            focus: Coordinate::ORIGIN,
            radius: 0,
            cells: Vec::new(),
            game_over: false,
            triggered_at: None,
            moves: 0,
            store_len: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeSnapshot {
    pub extent: Extent,
    pub generation: u64,
    pub alive: usize,
    /// Alive flags in row-major order.
    pub cells: Vec<bool>,
}

impl LifeSnapshot {
    pub fn is_alive(&self, x: u32, y: u32) -> bool {
        if x >= self.extent.width || y >= self.extent.height {
            return false;
        }
        self.cells
            .get(y as usize * self.extent.width as usize + x as usize)
            .copied()
            .unwrap_or(false)
    }
}

impl Default for LifeSnapshot {
    fn default() -> Self {
        Self {
            extent: Extent::square(0),
            generation: 0,
            alive: 0,
            cells: Vec::new(),
        }
    }
}
