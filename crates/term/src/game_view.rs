//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, left to right: the bordered board (two terminal columns per cell),
//! then a side panel with the NEXT preview window, the score and the key list.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Style};
use crate::types::{Cell, Phase, Rgb, COLUMNS, PREVIEW_SIZE, ROWS};

/// Terminal columns per board cell.
pub const CELL_W: u16 = 2;

/// Board frame size including the border.
pub const BOARD_FRAME_W: u16 = COLUMNS as u16 * CELL_W + 2;
pub const BOARD_FRAME_H: u16 = ROWS as u16 + 2;

/// Preview frame size including the border.
pub const PREVIEW_FRAME_W: u16 = PREVIEW_SIZE as u16 * CELL_W + 2;
pub const PREVIEW_FRAME_H: u16 = PREVIEW_SIZE as u16 + 2;

const PANEL_GAP: u16 = 2;
const PANEL_W: u16 = 18;

/// Total width the view wants; narrower viewports clip the side panel.
pub const LAYOUT_W: u16 = BOARD_FRAME_W + PANEL_GAP + PANEL_W;

const INSTRUCTIONS: [&str; 7] = [
    "\u{2190} h a  left",
    "\u{2192} l d  right",
    "\u{2193} j s  drop",
    "\u{2191} k w  rotate",
    "p      pause",
    "r      restart",
    "q esc  quit",
];

const BLOCK: char = '█';
const EMPTY: char = '·';

const BACKGROUND: Style = Style::new(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
const EMPTY_CELL: Style = Style::new(Rgb::new(70, 70, 80), Rgb::new(30, 30, 40));
const BORDER: Style = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const LABEL: Style = Style::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const VALUE: Style = Style::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const HINT: Style = Style::new(Rgb::new(140, 140, 150), Rgb::BLACK);
const OVERLAY: Style = Style::new(Rgb::WHITE, Rgb::BLACK).bold();

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

/// Top-left corners of the layout parts for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board_x: u16,
    pub board_y: u16,
    pub panel_x: u16,
}

impl Layout {
    /// Center the layout in the viewport, pinning to the top-left when it does
    /// not fit.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let board_x = viewport.width.saturating_sub(LAYOUT_W) / 2;
        let board_y = viewport.height.saturating_sub(BOARD_FRAME_H) / 2;
        Self {
            board_x,
            board_y,
            panel_x: board_x + BOARD_FRAME_W + PANEL_GAP,
        }
    }

    /// Terminal position of the left half of board cell `(row, col)`.
    pub fn board_cell(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.board_x + 1 + col as u16 * CELL_W,
            self.board_y + 1 + row as u16,
        )
    }

    /// Terminal position of the left half of preview cell `(row, col)`.
    pub fn preview_cell(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.panel_x + 1 + col as u16 * CELL_W,
            self.board_y + 2 + row as u16,
        )
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers reuse the framebuffer across frames; it is only reallocated when
    /// the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let layout = Layout::for_viewport(viewport);
        self.draw_board(fb, snap, &layout);
        self.draw_panel(fb, snap, &layout);

        match snap.phase {
            Phase::Paused => self.draw_overlay(fb, &layout, "PAUSED"),
            Phase::GameOver => self.draw_overlay(fb, &layout, "GAME OVER"),
            Phase::Falling | Phase::Locking => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        fb.fill_rect(
            layout.board_x + 1,
            layout.board_y + 1,
            BOARD_FRAME_W - 2,
            BOARD_FRAME_H - 2,
            ' ',
            BACKGROUND,
        );
        fb.draw_box(
            layout.board_x,
            layout.board_y,
            BOARD_FRAME_W,
            BOARD_FRAME_H,
            BORDER,
        );

        for (row, cells) in snap.board.iter().enumerate() {
            // Rows waiting to be cleared are drawn solid white.
            let highlighted = snap.is_highlighted(row);
            for (col, cell) in cells.iter().enumerate() {
                let (x, y) = layout.board_cell(row, col);
                match (highlighted, cell) {
                    (true, _) => put_block(fb, x, y, Rgb::WHITE),
                    (false, Cell::Filled(color)) => put_block(fb, x, y, *color),
                    (false, Cell::Empty) => fb.put_char(x, y, EMPTY, EMPTY_CELL),
                }
            }
        }

        if let Some(active) = snap.active {
            for (row, col) in active.cells {
                if row < ROWS && col < COLUMNS {
                    let (x, y) = layout.board_cell(row, col);
                    put_block(fb, x, y, active.color);
                }
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let x = layout.panel_x;
        let mut y = layout.board_y;

        fb.put_str(x, y, "NEXT", LABEL);
        y += 1;
        fb.fill_rect(
            x + 1,
            y + 1,
            PREVIEW_FRAME_W - 2,
            PREVIEW_FRAME_H - 2,
            ' ',
            BACKGROUND,
        );
        fb.draw_box(x, y, PREVIEW_FRAME_W, PREVIEW_FRAME_H, BORDER);
        for (row, col) in snap.pending.preview_cells() {
            let (px, py) = layout.preview_cell(row, col);
            put_block(fb, px, py, snap.pending.color);
        }
        y += PREVIEW_FRAME_H;

        let end = fb.put_str(x, y, "SCORE ", LABEL);
        fb.put_u32(end, y, snap.score, VALUE);
        y += 1;

        for line in INSTRUCTIONS {
            if y >= fb.height() {
                break;
            }
            fb.put_str(x, y, line, HINT);
            y += 1;
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: &Layout, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = layout.board_x + BOARD_FRAME_W.saturating_sub(text_w) / 2;
        let y = layout.board_y + BOARD_FRAME_H / 2;
        fb.put_str(x, y, text, OVERLAY);
    }
}

fn put_block(fb: &mut FrameBuffer, x: u16, y: u16, color: Rgb) {
    let style = Style::new(color, BACKGROUND.bg);
    fb.fill_rect(x, y, CELL_W, 1, BLOCK, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActiveSnapshot, GameSession, PendingPiece};
    use crate::types::ShapeKind;

    const VP: Viewport = Viewport {
        width: LAYOUT_W,
        height: BOARD_FRAME_H,
    };

    fn empty_snapshot() -> GameSnapshot {
        let mut snap = GameSession::new(1).snapshot();
        snap.active = None;
        snap
    }

    #[test]
    fn test_layout_pins_to_origin_when_exact() {
        let layout = Layout::for_viewport(VP);
        assert_eq!((layout.board_x, layout.board_y), (0, 0));
        assert_eq!(layout.board_cell(0, 0), (1, 1));
        assert_eq!(layout.board_cell(14, 9), (19, 15));
    }

    #[test]
    fn test_layout_centers_in_large_viewport() {
        let layout = Layout::for_viewport(Viewport::new(LAYOUT_W + 10, BOARD_FRAME_H + 4));
        assert_eq!((layout.board_x, layout.board_y), (5, 2));
    }

    #[test]
    fn test_active_piece_drawn_with_its_color() {
        let mut snap = empty_snapshot();
        let color = Rgb::new(10, 200, 30);
        snap.active = Some(ActiveSnapshot {
            kind: ShapeKind::O,
            color,
            center_row: 1,
            center_column: 4,
            cells: [(0, 4), (0, 5), (1, 4), (1, 5)],
        });
        let fb = GameView.render(&snap, VP);
        let (x, y) = Layout::for_viewport(VP).board_cell(1, 5);
        let g = fb.get(x + 1, y).unwrap();
        assert_eq!(g.ch, BLOCK);
        assert_eq!(g.style.fg, color);
    }

    #[test]
    fn test_preview_uses_pending_color() {
        let mut snap = empty_snapshot();
        let color = Rgb::new(1, 2, 3);
        snap.pending = PendingPiece::new(ShapeKind::I, color);
        let fb = GameView.render(&snap, VP);
        let layout = Layout::for_viewport(VP);
        for (row, col) in [(0, 2), (1, 2), (2, 2), (3, 2)] {
            let (x, y) = layout.preview_cell(row, col);
            assert_eq!(fb.get(x, y).unwrap().style.fg, color);
        }
        let (x, y) = layout.preview_cell(0, 0);
        assert_eq!(fb.get(x, y).unwrap().ch, ' ');
    }
}
