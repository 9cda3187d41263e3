//! Full-screen composition: the board frame centred in the terminal, plus a
//! key-hint line along the bottom.

use tui_snake_types::Viewport;

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub const KEY_HINTS: &str = "arrows/wasd move  esc pause  r restart  q quit";
pub const TOO_SMALL: &str = "terminal too small";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

#[derive(Debug, Clone, Copy)]
pub struct ScreenView {
    anchor_y: AnchorY,
    show_hints: bool,
}

impl Default for ScreenView {
    fn default() -> Self {
        Self {
            anchor_y: AnchorY::Center,
            show_hints: true,
        }
    }
}

impl ScreenView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }

    /// Compose `board` into a viewport-sized `out`. With no board, a notice
    /// is drawn instead.
    pub fn compose_into(&self, board: Option<&FrameBuffer>, viewport: Viewport, out: &mut FrameBuffer) {
        out.resize(viewport.width, viewport.height);
        out.clear(Cell::default());

        let hints = self.show_hints && viewport.height > 1;
        let usable_h = viewport.height.saturating_sub(u16::from(hints));

        match board {
            Some(board) => {
                let x = viewport.width.saturating_sub(board.width()) / 2;
                let y = match self.anchor_y {
                    AnchorY::Center => usable_h.saturating_sub(board.height()) / 2,
                    AnchorY::Top => 0,
                };
                out.blit(board, x, y);
            }
            None => {
                let style = CellStyle::new(Rgb::new(250, 128, 114), Rgb::new(0, 0, 0)).bold();
                let x = viewport.width.saturating_sub(TOO_SMALL.len() as u16) / 2;
                out.put_str(x, usable_h / 2, TOO_SMALL, style);
            }
        }

        if hints {
            let style = CellStyle::new(Rgb::new(120, 120, 120), Rgb::new(0, 0, 0)).dim();
            let x = viewport.width.saturating_sub(KEY_HINTS.len() as u16) / 2;
            out.put_str(x, viewport.height - 1, KEY_HINTS, style);
        }
    }

    pub fn compose(&self, board: Option<&FrameBuffer>, viewport: Viewport) -> FrameBuffer {
        let mut out = FrameBuffer::new(viewport.width, viewport.height);
        self.compose_into(board, viewport, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_is_centred_above_hints() {
        let mut board = FrameBuffer::new(4, 2);
        board.put_str(0, 0, "####", CellStyle::default());
        board.put_str(0, 1, "####", CellStyle::default());

        let out = ScreenView::new().compose(Some(&board), Viewport::new(60, 7));
        // Six usable rows: board at rows 2..4, hints on row 6.
        assert_eq!(out.row_text(2).trim(), "####");
        assert_eq!(out.row_text(2).find('#'), Some(28));
        assert!(out.row_text(6).contains("esc pause"));
    }

    #[test]
    fn test_missing_board_shows_notice() {
        let out = ScreenView::new()
            .with_hints(false)
            .compose(None, Viewport::new(30, 5));
        assert!(out.row_text(2).contains(TOO_SMALL));
    }
}
