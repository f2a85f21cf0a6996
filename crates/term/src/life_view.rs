//! LifeView: maps a [`LifeSnapshot`] into a terminal framebuffer.
//!
//! Grids larger than the terminal scroll so the cursor stays visible.

use crate::core::LifeSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Coordinate;
use crate::view::{scroll_start, AnchorY, Board, Viewport, BOARD_BG, LABEL, VALUE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeHud {
    pub cursor: Coordinate,
    pub paused: bool,
    pub seed: u64,
}

impl Default for LifeHud {
    fn default() -> Self {
        Self {
            cursor: Coordinate::ORIGIN,
            paused: false,
            seed: 0,
        }
    }
}

pub struct LifeView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
    /// Columns kept free for the side panel.
    panel_w: u16,
}

impl Default for LifeView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
            panel_w: 14,
        }
    }
}

const ALIVE: CellStyle = CellStyle::new(Rgb::new(100, 220, 120), BOARD_BG).bold();
const DEAD: CellStyle = CellStyle::new(Rgb::new(70, 70, 80), BOARD_BG).dim();
const CURSOR_BG: Rgb = Rgb::new(70, 110, 160);

impl LifeView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Number of grid columns and rows that fit in `viewport`.
    pub fn visible_cells(&self, snap: &LifeSnapshot, viewport: Viewport) -> (u32, u32) {
        let usable_w = viewport.width.saturating_sub(2 + self.panel_w) / self.cell_w;
        let usable_h = viewport.height.saturating_sub(2) / self.cell_h;
        (
            (usable_w as u32).min(snap.extent.width),
            (usable_h as u32).min(snap.extent.height),
        )
    }

    pub fn render_into(
        &self,
        snap: &LifeSnapshot,
        hud: LifeHud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let (cols, rows) = self.visible_cells(snap, viewport);
        let cursor_x = hud.cursor.x.max(0) as u32;
        let cursor_y = hud.cursor.y.max(0) as u32;
        let x0 = scroll_start(snap.extent.width, cols, cursor_x);
        let y0 = scroll_start(snap.extent.height, rows, cursor_y);

        let board = Board::place(
            viewport,
            self.anchor_y,
            self.cell_w,
            self.cell_h,
            cols as u16,
            rows as u16,
        );
        board.draw_frame(fb);

        for row in 0..rows {
            for col in 0..cols {
                let (x, y) = (x0 + col, y0 + row);
                let (ch, mut style) = if snap.is_alive(x, y) {
                    ('█', ALIVE)
                } else {
                    ('·', DEAD)
                };
                if (x, y) == (cursor_x, cursor_y) {
                    style.bg = CURSOR_BG;
                }
                board.put_cell(fb, col as u16, row as u16, ch, style);
            }
        }

        self.draw_side_panel(fb, snap, hud, viewport, &board);

        if hud.paused {
            board.overlay_text(fb, "PAUSED");
        }
    }

    pub fn render(&self, snap: &LifeSnapshot, hud: LifeHud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, hud, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &LifeSnapshot,
        hud: LifeHud,
        viewport: Viewport,
        board: &Board,
    ) {
        let Some(panel_x) = board.panel_x(viewport, 10) else {
            return;
        };

        let mut y = board.start_y;
        fb.put_str(panel_x, y, "GEN", LABEL);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.generation, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ALIVE", LABEL);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.alive as u64, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SIZE", LABEL);
        y = y.saturating_add(1);
        let x = fb.put_u32(panel_x, y, snap.extent.width, VALUE);
        let x = fb.put_str(x, y, "x", VALUE);
        fb.put_u32(x, y, snap.extent.height, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "CURSOR", LABEL);
        y = y.saturating_add(1);
        let x = fb.put_i32(panel_x, y, hud.cursor.x, VALUE);
        let x = fb.put_str(x, y, ",", VALUE);
        fb.put_i32(x, y, hud.cursor.y, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SEED", LABEL);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, hud.seed, VALUE);
    }
}
