//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, PieceView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Color;

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

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const GRID_FG: Rgb = Rgb::new(70, 70, 80);
const BORDER: CellStyle = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// A lightweight terminal renderer for the board, the falling piece and the
/// next-piece preview.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares up terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let board_w = snap.board.width().saturating_mul(self.cell_w);
        let board_h = snap.board.height();
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Settled cells.
        for (y, row) in snap.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell.color() {
                    Some(color) => {
                        self.draw_block(fb, start_x, start_y, x as i32, y as i32, color)
                    }
                    None => self.draw_empty(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Falling piece, clipped to the playfield.
        let (bw, bh) = (i32::from(snap.board.width()), i32::from(snap.board.height()));
        for (x, y) in snap.current.cells() {
            if (0..bw).contains(&x) && (0..bh).contains(&y) {
                self.draw_block(fb, start_x, start_y, x, y, snap.current.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x.saturating_add(frame_w), start_y);

        if snap.is_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', BORDER);
        fb.put_char(x + w - 1, y, '┐', BORDER);
        fb.put_char(x, y + h - 1, '└', BORDER);
        fb.put_char(x + w - 1, y + h - 1, '┘', BORDER);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', BORDER);
            fb.put_char(x + dx, y + h - 1, '─', BORDER);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', BORDER);
            fb.put_char(x + w - 1, y + dy, '│', BORDER);
        }
    }

    /// Top-left terminal position of board cell (x, y)
    fn cell_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (
            start_x
                .saturating_add(1)
                .saturating_add(x.saturating_mul(self.cell_w)),
            start_y.saturating_add(1).saturating_add(y),
        )
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        let style = CellStyle::new(GRID_FG, PLAYFIELD_BG);
        fb.put_char(px, py, '·', style);
        fb.fill_rect(px.saturating_add(1), py, self.cell_w - 1, 1, ' ', style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: i32,
        y: i32,
        color: Color,
    ) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        let style = CellStyle::new(Rgb::from(color), PLAYFIELD_BG).bold();
        let (px, py) = self.cell_origin(origin_x, origin_y, x, y);
        fb.fill_rect(px, py, self.cell_w, 1, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame_right: u16,
        start_y: u16,
    ) {
        let panel_x = frame_right.saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", LABEL);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, VALUE);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", LABEL);
        fb.put_str(panel_x.saturating_add(5), y, snap.next.kind.letter(), VALUE);
        y = y.saturating_add(1);
        self.draw_preview(fb, &snap.next, panel_x, y);
    }

    /// Next piece drawn at its own origin, outside the playfield.
    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &PieceView, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::from(piece.color), PLAYFIELD_BG).bold();
        for (r, c) in piece.shape.cells() {
            let px = x.saturating_add((c as u16).saturating_mul(self.cell_w));
            fb.fill_rect(px, y.saturating_add(r as u16), self.cell_w, 1, '█', style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
