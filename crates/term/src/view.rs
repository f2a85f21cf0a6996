//! Layout pieces shared by the world and life views.
//!
//! Pure (no I/O).

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

pub(crate) const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
pub(crate) const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

pub(crate) const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
pub(crate) const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
pub(crate) const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
pub(crate) const OVERLAY: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();

/// Placement of a grid of `cols x rows` board cells inside a bordered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Board {
    pub start_x: u16,
    pub start_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub cols: u16,
    pub rows: u16,
}

impl Board {
    pub fn place(
        viewport: Viewport,
        anchor_y: AnchorY,
        cell_w: u16,
        cell_h: u16,
        cols: u16,
        rows: u16,
    ) -> Self {
        let frame_w = cols.saturating_mul(cell_w).saturating_add(2);
        let frame_h = rows.saturating_mul(cell_h).saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        Self {
            start_x,
            start_y,
            cell_w,
            cell_h,
            cols,
            rows,
        }
    }

    pub fn frame_w(&self) -> u16 {
        self.cols.saturating_mul(self.cell_w).saturating_add(2)
    }

    pub fn frame_h(&self) -> u16 {
        self.rows.saturating_mul(self.cell_h).saturating_add(2)
    }

    /// Column of the side panel, if the viewport leaves room for one.
    pub fn panel_x(&self, viewport: Viewport, min_width: u16) -> Option<u16> {
        let panel_x = self
            .start_x
            .saturating_add(self.frame_w())
            .saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < min_width {
            return None;
        }
        Some(panel_x)
    }

    pub fn draw_frame(&self, fb: &mut FrameBuffer) {
        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        fb.fill_rect(
            self.start_x.saturating_add(1),
            self.start_y.saturating_add(1),
            self.cols.saturating_mul(self.cell_w),
            self.rows.saturating_mul(self.cell_h),
            ' ',
            bg,
        );
        draw_border(
            fb,
            self.start_x,
            self.start_y,
            self.frame_w(),
            self.frame_h(),
            BORDER,
        );
    }

    /// Paint one board cell: background fill plus a glyph in its first column.
    pub fn put_cell(&self, fb: &mut FrameBuffer, col: u16, row: u16, ch: char, style: CellStyle) {
        let px = self
            .start_x
            .saturating_add(1)
            .saturating_add(col.saturating_mul(self.cell_w));
        let py = self
            .start_y
            .saturating_add(1)
            .saturating_add(row.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, ch, style);
    }

    pub fn overlay_text(&self, fb: &mut FrameBuffer, text: &str) {
        let mid_y = self.start_y.saturating_add(self.frame_h() / 2);
        let text_w = text.chars().count() as u16;
        let x = self
            .start_x
            .saturating_add(self.frame_w().saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, OVERLAY);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// First index of a `visible`-long span over `0..total` that keeps `cursor`
/// in view, centered where possible.
pub(crate) fn scroll_start(total: u32, visible: u32, cursor: u32) -> u32 {
    if visible >= total {
        return 0;
    }
    cursor
        .saturating_sub(visible / 2)
        .min(total - visible)
}
