//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::PieceKind;

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

const WELL_BG: Rgb = Rgb::new(0, 0, 0);
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const GRID: Style = Style::new(Rgb::new(17, 17, 17), WELL_BG).dim();
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const OVERLAY: Style = Style::new(Rgb::new(255, 0, 0), Rgb::new(0, 0, 0)).bold();

/// Block color for each kind.
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0x00, 0xff, 0xff),
        PieceKind::Z => Rgb::new(0xff, 0x64, 0x64),
        PieceKind::S => Rgb::new(0x64, 0xff, 0x64),
        PieceKind::O => Rgb::new(0xff, 0xff, 0x64),
        PieceKind::J => Rgb::new(0xff, 0xa5, 0x00),
        PieceKind::L => Rgb::new(0xa0, 0x20, 0xf0),
        PieceKind::T => Rgb::new(0x64, 0x64, 0xff),
    }
}

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
        Self { cell_w: 2, cell_h: 1 }
    }
}

/// Top-left of the board frame and its outer size.
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
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let board_w = (snap.width as u16).saturating_mul(self.cell_w);
        let board_h = (snap.height as u16).saturating_mul(self.cell_h);
        let w = board_w.saturating_add(2);
        let h = board_h.saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        self.draw_border(fb, frame);

        for y in 0..snap.height {
            for x in 0..snap.width {
                match snap.cell(x, y) {
                    Some(kind) => self.draw_block(fb, frame, x as i32, y as i32, kind),
                    None => self.fill_cell(fb, frame, x as u16, y as u16, '·', GRID),
                }
            }
        }

        if let Some(active) = &snap.active {
            for &(x, y) in &active.blocks {
                self.draw_block(fb, frame, x, y, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_overlay(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, f: Frame) {
        if f.w < 2 || f.h < 2 {
            return;
        }
        let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);

        fb.put(f.x, f.y, '┌', BORDER);
        fb.put(right, f.y, '┐', BORDER);
        fb.put(f.x, bottom, '└', BORDER);
        fb.put(right, bottom, '┘', BORDER);
        for x in f.x + 1..right {
            fb.put(x, f.y, '─', BORDER);
            fb.put(x, bottom, '─', BORDER);
        }
        for y in f.y + 1..bottom {
            fb.put(f.x, y, '│', BORDER);
            fb.put(right, y, '│', BORDER);
        }
    }

    /// Draw one board block. Blocks above row 0 are not visible.
    fn draw_block(&self, fb: &mut FrameBuffer, f: Frame, x: i32, y: i32, kind: PieceKind) {
        if x < 0 || y < 0 {
            return;
        }
        let style = Style::new(piece_color(kind), WELL_BG).bold();
        self.fill_cell(fb, f, x as u16, y as u16, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, f: Frame, x: u16, y: u16, ch: char, style: Style) {
        let px = f.x.saturating_add(1).saturating_add(x.saturating_mul(self.cell_w));
        let py = f.y.saturating_add(1).saturating_add(y.saturating_mul(self.cell_h));
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, vp: Viewport, f: Frame) {
        let panel_x = f.x.saturating_add(f.w).saturating_add(2);
        if panel_x.saturating_add(10) > vp.width {
            return;
        }

        let mut y = f.y;
        fb.put_str(panel_x, y, "SCORE", LABEL);
        fb.put_u32(panel_x, y + 1, snap.score, VALUE);
        y += 3;

        fb.put_str(panel_x, y, "LINES", LABEL);
        fb.put_u32(panel_x, y + 1, snap.lines, VALUE);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", LABEL);
        y += 1;
        if let Some(kind) = snap.next {
            let shape = get_shape(kind);
            let style = Style::new(piece_color(kind), Rgb::new(0, 0, 0)).bold();
            for (c, r) in shape.offsets() {
                let px = panel_x.saturating_add(c as u16 * 2);
                fb.fill_rect(px, y.saturating_add(r as u16), 2, 1, '█', style);
            }
            y += shape.rows() as u16;
        }
        y += 1;

        for hint in ["←→ move", "↑ rotate", "↓ drop", "r restart", "q quit"] {
            fb.put_str(panel_x, y, hint, VALUE.dim());
            y += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, f: Frame, text: &str) {
        let mid_y = f.y.saturating_add(f.h / 2);
        let band_w = f.w.saturating_sub(2);
        fb.fill_rect(f.x + 1, mid_y.saturating_sub(1), band_w, 3, ' ', OVERLAY);

        let text_w = text.chars().count() as u16;
        let x = f.x.saturating_add(f.w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, OVERLAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameState};

    fn screen_text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn colors_are_distinct() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(piece_color(a), piece_color(b));
                }
            }
        }
    }

    #[test]
    fn overlay_only_when_game_over() {
        let state = GameState::new(GameConfig::default(), 1).unwrap();
        let mut snap = state.snapshot();
        let view = GameView::default();

        let fb = view.render(&snap, Viewport::new(22, 22));
        assert!(!screen_text(&fb).contains("GAME OVER"));

        snap.game_over = true;
        let fb = view.render(&snap, Viewport::new(22, 22));
        assert!(screen_text(&fb).contains("GAME OVER"));
    }

    #[test]
    fn oversized_board_is_clipped() {
        let (width, height) = (512, 4);
        let mut snap = GameSnapshot {
            width,
            height,
            board: vec![None; width * height],
            ..GameSnapshot::default()
        };
        snap.board[width * height - 1] = Some(PieceKind::J);

        let fb = GameView::new(128, 1).render(&snap, Viewport::new(80, 24));
        assert_eq!((fb.width(), fb.height()), (80, 24));
        // Frame is 6 rows tall, centered at y = 9; it is wider than the screen.
        assert_eq!(fb.get(0, 9).map(|g| g.ch), Some('┌'));
        assert_eq!(fb.get(1, 10).map(|g| g.ch), Some('·'));
        assert_eq!(fb.get(79, 10).map(|g| g.ch), Some('·'));
    }

    #[test]
    fn panel_hidden_on_narrow_viewport() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        assert!(!screen_text(&fb).contains("SCORE"));
    }
}
