//! Terminal drawing surface.
//!
//! A [`TermSurface`] paints the board into its own framebuffer: a bordered
//! play area with each grid cell `cell_w × cell_h` characters wide, plus one
//! HUD row underneath. The host blits that framebuffer into the screen.

use tui_snake_core::{Hud, Paint, Surface, SurfaceError, SurfaceProvider};
use tui_snake_types::{GameStatus, GridCell, Viewport};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

const BOARD_BG: Rgb = Rgb::new(20, 24, 20);
const SNAKE: Rgb = Rgb::new(162, 197, 121);
const SNAKE_HEAD: Rgb = Rgb::new(200, 235, 150);
const FOOD: Rgb = Rgb::new(250, 128, 114);

/// Rows below the board reserved for the HUD.
pub const HUD_ROWS: u16 = 1;

/// Board surface backed by a [`FrameBuffer`].
#[derive(Debug, Clone)]
pub struct TermSurface {
    fb: FrameBuffer,
    grid_size: u16,
    cell_w: u16,
    cell_h: u16,
}

impl TermSurface {
    pub fn new(grid_size: u16, cell_w: u16, cell_h: u16) -> Self {
        let cell_w = cell_w.max(1);
        let cell_h = cell_h.max(1);
        let (w, h) = frame_size(grid_size, cell_w, cell_h);
        Self {
            fb: FrameBuffer::new(w, h),
            grid_size,
            cell_w,
            cell_h,
        }
    }

    /// The painted board, border and HUD included.
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn grid_size(&self) -> u16 {
        self.grid_size
    }

    fn fill_cell(&mut self, cell: GridCell, ch: char, style: CellStyle) {
        let px = 1 + cell.x * self.cell_w;
        let py = 1 + cell.y * self.cell_h;
        self.fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_border(&mut self) {
        let w = self.grid_size * self.cell_w + 2;
        let h = self.grid_size * self.cell_h + 2;
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        self.fb.put_char(0, 0, '┌', style);
        self.fb.put_char(w - 1, 0, '┐', style);
        self.fb.put_char(0, h - 1, '└', style);
        self.fb.put_char(w - 1, h - 1, '┘', style);
        for x in 1..w - 1 {
            self.fb.put_char(x, 0, '─', style);
            self.fb.put_char(x, h - 1, '─', style);
        }
        for y in 1..h - 1 {
            self.fb.put_char(0, y, '│', style);
            self.fb.put_char(w - 1, y, '│', style);
        }
    }

    fn draw_overlay(&mut self, text: &str) {
        let board_h = self.grid_size * self.cell_h + 2;
        let text_w = text.chars().count() as u16;
        let x = self.fb.width().saturating_sub(text_w) / 2;
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        self.fb.put_str(x, board_h / 2, text, style);
    }
}

impl Surface for TermSurface {
    fn clear(&mut self, grid_size: u16) -> Result<(), SurfaceError> {
        if grid_size != self.grid_size {
            let (w, h) = frame_size(grid_size, self.cell_w, self.cell_h);
            self.fb.resize(w, h);
            self.grid_size = grid_size;
        }
        self.fb.clear(Cell::default());
        self.draw_border();

        let empty = CellStyle::new(Rgb::new(70, 80, 70), BOARD_BG).dim();
        for y in 0..grid_size {
            for x in 0..grid_size {
                self.fill_cell(GridCell::new(x, y), ' ', empty);
                let px = 1 + x * self.cell_w;
                let py = 1 + y * self.cell_h;
                self.fb.put_char(px, py, '·', empty);
            }
        }
        Ok(())
    }

    fn paint(&mut self, cell: GridCell, paint: Paint) -> Result<(), SurfaceError> {
        if !cell.in_bounds(self.grid_size) {
            return Err(SurfaceError::Draw(format!("cell {cell} outside board")));
        }
        let (ch, fg) = match paint {
            Paint::Empty => (' ', BOARD_BG),
            Paint::Body => ('█', SNAKE),
            Paint::Head => ('█', SNAKE_HEAD),
            Paint::Food => ('█', FOOD),
        };
        let mut style = CellStyle::new(fg, BOARD_BG);
        if paint == Paint::Head {
            style = style.bold();
        }
        self.fill_cell(cell, ch, style);
        Ok(())
    }

    fn draw_hud(&mut self, hud: Hud) -> Result<(), SurfaceError> {
        let y = self.grid_size * self.cell_h + 2;
        let label = CellStyle::new(Rgb::new(160, 160, 160), Rgb::new(0, 0, 0));
        let value = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();

        let x = self.fb.put_str(1, y, "SCORE ", label);
        let score_end = self.fb.put_u32(x, y, hud.score, value);

        let status = match hud.status {
            GameStatus::Idle => "READY",
            GameStatus::Running => "",
            GameStatus::Paused => "PAUSED",
            GameStatus::GameOver => "GAME OVER",
        };
        let right = self
            .fb
            .width()
            .saturating_sub(status.chars().count() as u16 + 1);
        if right > score_end {
            self.fb.put_str(right, y, status, label);
        }

        match hud.status {
            GameStatus::Paused => self.draw_overlay("PAUSED"),
            GameStatus::GameOver => self.draw_overlay("GAME OVER"),
            GameStatus::Idle | GameStatus::Running => {}
        }
        Ok(())
    }
}

/// Character size of a board frame, border and HUD included.
pub fn frame_size(grid_size: u16, cell_w: u16, cell_h: u16) -> (u16, u16) {
    (
        grid_size.saturating_mul(cell_w).saturating_add(2),
        grid_size
            .saturating_mul(cell_h)
            .saturating_add(2 + HUD_ROWS),
    )
}

/// Hands out [`TermSurface`]s sized for the current terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSurfaceProvider {
    pub cell_w: u16,
    pub cell_h: u16,
}

impl TermSurfaceProvider {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }
}

impl Default for TermSurfaceProvider {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

impl SurfaceProvider for TermSurfaceProvider {
    type Surface = TermSurface;

    fn acquire(&mut self, viewport: Viewport, grid_size: u16) -> Result<TermSurface, SurfaceError> {
        let (w, h) = frame_size(grid_size, self.cell_w, self.cell_h);
        if w > viewport.width || h > viewport.height {
            return Err(SurfaceError::Unavailable(format!(
                "board needs {w}x{h}, terminal is {}x{}",
                viewport.width, viewport.height
            )));
        }
        Ok(TermSurface::new(grid_size, self.cell_w, self.cell_h))
    }
}
