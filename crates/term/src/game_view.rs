//! GameView: maps a [`SessionSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{color, Mask, SessionSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::PieceKind;

pub const TITLE: &str = "BLOCKFALL";

const PANEL_MIN_W: u16 = 10;

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Screen position of the playfield frame (border included).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

/// Draws the playfield, the side panel and the game-over overlay.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Where the playfield frame lands for a board of `columns` x `rows`.
    pub fn frame_rect(&self, columns: u8, rows: u8, viewport: Viewport) -> FrameRect {
        let w = (columns as u16) * self.cell_w + 2;
        let h = (rows as u16) * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        FrameRect { x, y, w, h }
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let columns = snap.grid.width();
        let rows = snap.grid.height();
        let frame = self.frame_rect(columns, rows, viewport);

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            CellStyle::new(PLAYFIELD_BG, PLAYFIELD_BG),
        );
        self.draw_border(fb, frame, border);

        for (y, row) in snap.grid.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                match cell {
                    Some(kind) => self.draw_block(fb, frame, x as u16, y as u16, *kind),
                    None => self.draw_empty_cell(fb, frame, x as u16, y as u16),
                }
            }
        }

        // Active piece, stamped directly so the hot path stays allocation-free.
        if !snap.game_over() {
            for &(x, y) in snap.active.cells.iter() {
                if x >= 0 && y >= 0 && x < columns as i16 && y < rows as i16 {
                    self.draw_block(fb, frame, x as u16, y as u16, snap.active.kind);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over() {
            self.draw_game_over(fb, frame, snap.score);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: FrameRect, style: CellStyle) {
        let FrameRect { x, y, w, h } = frame;
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

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, frame: FrameRect, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG).dim();
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: FrameRect, x: u16, y: u16, kind: PieceKind) {
        let px = frame.x + 1 + x * self.cell_w;
        let py = frame.y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', block_style(kind, PLAYFIELD_BG));
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &SessionSnapshot,
        viewport: Viewport,
        frame: FrameRect,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = frame.y;
        fb.put_str(panel_x, y, TITLE, label);
        y = y.saturating_add(2);

        let x = fb.put_str(panel_x, y, "NEXT ", label);
        fb.put_str(x, y, snap.next.kind.letter(), value);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, snap.next.mask, snap.next.kind);
        y = y.saturating_add(4 * self.cell_h + 1);

        for (name, n) in [
            ("SCORE", snap.score),
            ("HIGH", snap.high_score),
            ("LINES", snap.lines),
        ] {
            fb.put_str(panel_x, y, name, label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, n, value);
            y = y.saturating_add(2);
        }
    }

    /// Next piece in its spawn orientation, on a 4x4 cell grid.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, mask: Mask, kind: PieceKind) {
        let style = block_style(kind, PANEL_BG);
        for (col, row) in mask.cells() {
            let px = x + (col as u16) * self.cell_w;
            let py = y + (row as u16) * self.cell_h;
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, frame: FrameRect, score: u32) {
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        let mid_y = frame.y.saturating_add(frame.h / 2);

        self.put_centered(fb, frame, mid_y.saturating_sub(1), "GAME OVER", style);

        let text_w = 6 + digit_count(score);
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let x = fb.put_str(x, mid_y, "SCORE ", style);
        fb.put_u32(x, mid_y, score, style);

        let hint = CellStyle { bold: false, ..style };
        self.put_centered(fb, frame, mid_y.saturating_add(1), "R restart / Q quit", hint);
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        frame: FrameRect,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

fn block_style(kind: PieceKind, bg: Rgb) -> CellStyle {
    CellStyle::new(Rgb::from(color(kind)), bg).bold()
}

fn digit_count(mut n: u32) -> u16 {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Session, SessionConfig};
    use crate::types::Command;

    #[test]
    fn digit_count_matches_decimal_width() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(800), 3);
        assert_eq!(digit_count(u32::MAX), 10);
    }

    #[test]
    fn frame_is_centered_in_viewport() {
        let view = GameView::default();
        let frame = view.frame_rect(10, 20, Viewport::new(80, 30));
        assert_eq!(frame, FrameRect { x: 29, y: 4, w: 22, h: 22 });

        let top = GameView::default().with_anchor_y(AnchorY::Top);
        assert_eq!(top.frame_rect(10, 20, Viewport::new(80, 30)).y, 0);
    }

    #[test]
    fn active_piece_cells_are_drawn_with_catalog_color() {
        let mut session = Session::new(SessionConfig::default(), 7).unwrap();
        // Two steps down bring every spawn shape fully onto the board.
        let snap = session.tick(
            16,
            &[Command::SoftDropStart, Command::SoftDropStart, Command::SoftDropStop],
        );
        let view = GameView::default();
        let viewport = Viewport::new(80, 30);
        let fb = view.render(&snap, viewport);
        let frame = view.frame_rect(10, 20, viewport);

        let expected = Rgb::from(color(snap.active.kind));
        for &(x, y) in snap.active.cells.iter() {
            assert!(y >= 0);
            let px = frame.x + 1 + (x as u16) * 2;
            let py = frame.y + 1 + y as u16;
            let cell = fb.get(px, py).unwrap();
            assert_eq!(cell.ch, '█');
            assert_eq!(cell.style.fg, expected);
        }
    }

    #[test]
    fn game_over_overlay_shows_score_and_choices() {
        let mut session = Session::new(SessionConfig::default(), 3).unwrap();
        let mut snap = session.snapshot();
        for _ in 0..100 {
            snap = session.tick(16, &[Command::HardDrop]);
            if snap.game_over() {
                break;
            }
        }
        assert!(snap.game_over());

        let fb = GameView::default().render(&snap, Viewport::new(80, 30));
        let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(text.iter().any(|row| row.contains("GAME OVER")));
        assert!(text.iter().any(|row| row.contains("SCORE 0")));
        assert!(text.iter().any(|row| row.contains("R restart / Q quit")));
    }

    #[test]
    fn narrow_viewport_skips_side_panel() {
        let session = Session::new(SessionConfig::default(), 1).unwrap();
        let fb = GameView::default().render(&session.snapshot(), Viewport::new(24, 22));
        for y in 0..fb.height() {
            assert!(!fb.row_text(y).contains(TITLE));
        }
    }
}
