//! GameView: maps a session snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{format_elapsed, SessionSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, GameStatus};

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

const BOARD_BG: Rgb = Rgb::new(20, 20, 28);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the board frame landed inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// `warning` is drawn over the board until the caller stops passing it.
    pub fn render_into(
        &self,
        snap: &SessionSnapshot,
        warning: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_w = snap.columns().saturating_mul(self.cell_w);
        let board_h = snap.rows().saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), BOARD_BG);
        fb.fill_rect(frame.x.saturating_add(1), frame.y.saturating_add(1), board_w, board_h, ' ', bg);
        self.draw_border(fb, frame, viewport, CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG));

        // Grid cells past the viewport edge are never drawn.
        let inner_w = viewport.width.saturating_sub(frame.x.saturating_add(1));
        let inner_h = viewport.height.saturating_sub(frame.y.saturating_add(1));
        let visible_columns = snap.columns().min(inner_w.div_ceil(self.cell_w));
        let visible_rows = snap.rows().min(inner_h.div_ceil(self.cell_h));
        for row in 0..visible_rows {
            for column in 0..visible_columns {
                match snap.visible_cell(row as i32, column as i32) {
                    Some(color) => self.draw_block(fb, frame, row, column, color),
                    None => self.draw_guide(fb, frame, row, column),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        let overlay = match snap.status {
            GameStatus::Init => Some("PRESS ENTER"),
            GameStatus::Paused => Some("PAUSED"),
            GameStatus::Ended => Some("GAME OVER"),
            GameStatus::Running => None,
        };
        if let Some(text) = overlay {
            self.draw_overlay_text(fb, frame, 0, text);
        }
        if let Some(text) = warning {
            self.draw_overlay_text(fb, frame, 2, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, None, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, viewport: Viewport, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        // Edges are clipped to the viewport; off-screen writes would be dropped anyway.
        for px in x.saturating_add(1)..right.min(viewport.width) {
            fb.put_char(px, y, '─', style);
            fb.put_char(px, bottom, '─', style);
        }
        for py in y.saturating_add(1)..bottom.min(viewport.height) {
            fb.put_char(x, py, '│', style);
            fb.put_char(right, py, '│', style);
        }
    }

    fn draw_guide(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, column: u16) {
        let style = CellStyle::new(Rgb::new(70, 70, 80), BOARD_BG).dim();
        self.fill_cell_rect(fb, frame, row, column, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, column: u16, color: Color) {
        let style = CellStyle::new(block_rgb(color), BOARD_BG).bold();
        self.fill_cell_rect(fb, frame, row, column, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: u16,
        column: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = frame.x.saturating_add(1).saturating_add(column.saturating_mul(self.cell_w));
        let py = frame.y.saturating_add(1).saturating_add(row.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(panel_x, y, "TIME", label);
        fb.put_str(panel_x, y + 1, &format_elapsed(snap.elapsed_ms), value);
        y += 3;

        fb.put_str(panel_x, y, "STATUS", label);
        fb.put_str(panel_x, y + 1, snap.status.as_str(), value);
        y += 3;

        for line in ["←→ move", "↓ drop", "SPC/↑ turn", "P pause", "ENTER new", "Q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, offset: u16, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2).saturating_add(offset);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

fn block_rgb(color: Color) -> Rgb {
    match color {
        Color::Purple => Rgb::new(170, 90, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}
