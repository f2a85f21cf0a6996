//! WorldView: maps a [`WorldSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{CellView, WorldSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Exposure;
use crate::view::{AnchorY, Board, Viewport, BOARD_BG, LABEL, VALUE};

/// Driver state shown next to the grid; not part of the kernel snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorldHud {
    pub seed: u64,
    pub paused: bool,
}

/// Renders the window around the focal point.
pub struct WorldView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for WorldView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

const HIDDEN: CellStyle = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).dim();
const EXPOSED_BG: Rgb = Rgb::new(60, 60, 72);
const FOCUS_BG: Rgb = Rgb::new(70, 110, 160);
const TRIGGERED: CellStyle = CellStyle::new(Rgb::new(255, 90, 90), Rgb::new(90, 20, 20)).bold();
const REVEALED_HAZARD: CellStyle = CellStyle::new(Rgb::new(220, 80, 80), BOARD_BG);

impl WorldView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        snap: &WorldSnapshot,
        hud: WorldHud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let side = u16::try_from(snap.side()).unwrap_or(u16::MAX);
        let board = Board::place(viewport, self.anchor_y, self.cell_w, self.cell_h, side, side);
        board.draw_frame(fb);

        for row in 0..snap.side() {
            for col in 0..snap.side() {
                let Some(cell) = snap.at(col, row) else {
                    continue;
                };
                let focused = cell.coordinate == snap.focus;
                let (ch, style) = cell_glyph(cell, focused, snap.game_over);
                board.put_cell(fb, col as u16, row as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, &board);

        if snap.game_over {
            board.overlay_text(fb, "GAME OVER");
        } else if hud.paused {
            board.overlay_text(fb, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &WorldSnapshot, hud: WorldHud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &WorldSnapshot,
        hud: WorldHud,
        viewport: Viewport,
        board: &Board,
    ) {
        let Some(panel_x) = board.panel_x(viewport, 12) else {
            return;
        };

        let mut y = board.start_y;
        fb.put_str(panel_x, y, "FOCUS", LABEL);
        y = y.saturating_add(1);
        let x = fb.put_i32(panel_x, y, snap.focus.x, VALUE);
        let x = fb.put_str(x, y, ",", VALUE);
        fb.put_i32(x, y, snap.focus.y, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", LABEL);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.moves, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CELLS", LABEL);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.store_len as u64, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", LABEL);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, hud.seed, VALUE);

        if let Some(at) = snap.triggered_at {
            y = y.saturating_add(2);
            fb.put_str(panel_x, y, "HIT", LABEL);
            y = y.saturating_add(1);
            let x = fb.put_i32(panel_x, y, at.x, VALUE);
            let x = fb.put_str(x, y, ",", VALUE);
            fb.put_i32(x, y, at.y, VALUE);
        }
    }
}

/// Glyph and style for one materialized cell.
fn cell_glyph(cell: &CellView, focused: bool, game_over: bool) -> (char, CellStyle) {
    let (ch, mut style) = match cell.exposure {
        Exposure::Triggered => ('*', TRIGGERED),
        Exposure::Hidden if game_over && cell.hazard => ('*', REVEALED_HAZARD),
        Exposure::Hidden => ('·', HIDDEN),
        Exposure::Exposed => match cell.display_count {
            Some(n @ 1..=8) => (digit(n), CellStyle::new(count_color(n), EXPOSED_BG).bold()),
            _ => (' ', CellStyle::new(Rgb::new(120, 120, 130), EXPOSED_BG)),
        },
    };
    if focused && cell.exposure != Exposure::Triggered {
        style.bg = FOCUS_BG;
        if ch == ' ' {
            return ('@', CellStyle::new(Rgb::new(255, 255, 255), FOCUS_BG).bold());
        }
    }
    (ch, style)
}

fn digit(n: u8) -> char {
    char::from(b'0' + n.min(9))
}

fn count_color(n: u8) -> Rgb {
    match n {
        1 => Rgb::new(100, 160, 255),
        2 => Rgb::new(100, 220, 120),
        3 => Rgb::new(240, 100, 100),
        4 => Rgb::new(200, 120, 220),
        5 => Rgb::new(255, 165, 0),
        6 => Rgb::new(80, 220, 220),
        _ => Rgb::new(240, 240, 240),
    }
}
