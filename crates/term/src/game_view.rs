//! Maps a [`GameSession`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against exact cell contents.

use blockfall_core::GameSession;
use blockfall_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Renders the well, the falling piece, and the score panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensates for terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

const WELL_BG: Rgb = Rgb::new(18, 18, 26);

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w }
    }

    /// Render the session into a fresh framebuffer sized to the viewport.
    pub fn render(&self, session: &GameSession, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let well_w = BOARD_WIDTH as u16 * self.cell_w;
        let well_h = BOARD_HEIGHT as u16;
        let frame_w = well_w + 2;
        let frame_h = well_h + 2;

        // Keep the well centered, with room for the side panel.
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let background = CellStyle {
            fg: Rgb::new(70, 70, 85),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        fb.fill_rect(start_x + 1, start_y + 1, well_w, well_h, ' ', background);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match session.board().get(x, y).flatten() {
                    Some(kind) => self.draw_block(&mut fb, start_x, start_y, x, y, kind),
                    None => self.draw_grid_dot(&mut fb, start_x, start_y, x, y),
                }
            }
        }

        // Falling piece, clipped to the visible rows: blocks still above the
        // top edge simply are not drawn.
        if let Some(piece) = session.active() {
            for (x, y) in piece.blocks() {
                if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                    self.draw_block(&mut fb, start_x, start_y, x, y, piece.kind);
                }
            }
        }

        self.draw_side_panel(&mut fb, session, start_x + frame_w + 2, start_y);

        if session.game_over() {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if session.paused() {
            self.draw_overlay(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }

        fb
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: i8, y: i8) -> (u16, u16) {
        (
            start_x + 1 + (x as u16) * self.cell_w,
            start_y + 1 + y as u16,
        )
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            fg: kind_color(kind),
            bg: WELL_BG,
            bold: true,
            dim: false,
        };
        let (cx, cy) = self.cell_origin(start_x, start_y, x, y);
        for dx in 0..self.cell_w {
            fb.put_char(cx + dx, cy, '█', style);
        }
    }

    fn draw_grid_dot(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: i8, y: i8) {
        let style = CellStyle {
            fg: Rgb::new(70, 70, 85),
            bg: WELL_BG,
            bold: false,
            dim: true,
        };
        let (cx, cy) = self.cell_origin(start_x, start_y, x, y);
        fb.put_char(cx, cy, '·', style);
        for dx in 1..self.cell_w {
            fb.put_char(cx + dx, cy, ' ', style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    fn draw_side_panel(&self, fb: &mut FrameBuffer, session: &GameSession, x: u16, y: u16) {
        let label = CellStyle {
            fg: Rgb::new(140, 140, 150),
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(235, 235, 235),
            bold: true,
            ..CellStyle::default()
        };

        fb.put_str(x, y + 1, "SCORE", label);
        fb.put_str(x, y + 2, &session.score().to_string(), value);

        fb.put_str(x, y + 4, "SPEED", label);
        fb.put_str(
            x,
            y + 5,
            &format!("{} ms/row", session.fall_interval_ms()),
            value,
        );

        let hints = [
            "←/→  move",
            "↑    rotate",
            "↓    drop",
            "spc  slam",
            "p    pause",
            "r    restart",
            "q    quit",
        ];
        for (i, hint) in hints.iter().enumerate() {
            fb.put_str(x, y + 8 + i as u16, hint, label);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(60, 20, 20),
            bold: true,
            dim: false,
        };
        let tx = x + w.saturating_sub(text.len() as u16) / 2;
        let ty = y + h / 2;
        fb.put_str(tx, ty, text, style);
    }
}

/// Width reserved for the side panel, in terminal columns.
const PANEL_W: u16 = 14;

/// Display color for each piece kind.
pub fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(6, 182, 212),
        PieceKind::J => Rgb::new(37, 99, 235),
        PieceKind::L => Rgb::new(249, 115, 22),
        PieceKind::O => Rgb::new(250, 204, 21),
        PieceKind::S => Rgb::new(34, 197, 94),
        PieceKind::T => Rgb::new(168, 85, 247),
        PieceKind::Z => Rgb::new(239, 68, 68),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_distinct() {
        let mut seen = Vec::new();
        for kind in PieceKind::ALL {
            let color = kind_color(kind);
            assert!(!seen.contains(&color), "{:?} reuses a color", kind);
            seen.push(color);
        }
    }

    #[test]
    fn render_fits_any_viewport() {
        let mut session = GameSession::new(1);
        session.start();
        let view = GameView::default();
        // Tiny and generous viewports must both render without panicking.
        for (w, h) in [(10, 5), (80, 24), (200, 60)] {
            let fb = view.render(&session, Viewport::new(w, h));
            assert_eq!(fb.width(), w);
            assert_eq!(fb.height(), h);
        }
    }
}
