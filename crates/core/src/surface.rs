//! Drawing surface seam.
//!
//! The engine renders every frame through [`Surface`]; hosts decide what a
//! "cell" looks like. [`GridSurface`] is an in-memory implementation used for
//! headless runs, tests and benchmarks.

use std::fmt;

use crate::types::{GameStatus, GridCell, Viewport};

/// What occupies a painted cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Paint {
    #[default]
    Empty,
    Body,
    Head,
    Food,
}

/// Heads-up display values drawn after the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hud {
    pub score: u32,
    pub status: GameStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// No drawing context could be obtained.
    Unavailable(String),
    /// A draw call failed.
    Draw(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Unavailable(why) => write!(f, "drawing surface unavailable: {why}"),
            SurfaceError::Draw(why) => write!(f, "draw failed: {why}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// A drawing target addressed in grid cells.
pub trait Surface {
    /// Start a frame: reset every cell of a `grid_size` grid to empty.
    fn clear(&mut self, grid_size: u16) -> Result<(), SurfaceError>;

    fn paint(&mut self, cell: GridCell, paint: Paint) -> Result<(), SurfaceError>;

    fn draw_hud(&mut self, hud: Hud) -> Result<(), SurfaceError>;
}

/// Hands out drawing surfaces for a board of a given side.
pub trait SurfaceProvider {
    type Surface: Surface;

    fn acquire(&mut self, viewport: Viewport, grid_size: u16)
        -> Result<Self::Surface, SurfaceError>;
}

/// In-memory surface: a row-major grid of paints plus the last HUD.
#[derive(Debug, Clone, Default)]
pub struct GridSurface {
    grid_size: u16,
    cells: Vec<Paint>,
    hud: Option<Hud>,
    frames: u64,
    failures_left: u32,
}

impl GridSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `frames` calls to [`Surface::clear`] fail.
    pub fn fail_next_frames(&mut self, frames: u32) {
        self.failures_left = frames;
    }

    pub fn grid_size(&self) -> u16 {
        self.grid_size
    }

    pub fn get(&self, cell: GridCell) -> Option<Paint> {
        if !cell.in_bounds(self.grid_size) {
            return None;
        }
        self.cells.get(cell.index(self.grid_size)).copied()
    }

    pub fn hud(&self) -> Option<Hud> {
        self.hud
    }

    /// Number of frames that were cleared successfully.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn count(&self, paint: Paint) -> usize {
        self.cells.iter().filter(|&&p| p == paint).count()
    }
}

impl Surface for GridSurface {
    fn clear(&mut self, grid_size: u16) -> Result<(), SurfaceError> {
        if self.failures_left > 0 {
            self.failures_left -= 1;
            return Err(SurfaceError::Draw("injected failure".to_string()));
        }
        let len = usize::from(grid_size) * usize::from(grid_size);
        self.grid_size = grid_size;
        self.cells.clear();
        self.cells.resize(len, Paint::Empty);
        self.frames += 1;
        Ok(())
    }

    fn paint(&mut self, cell: GridCell, paint: Paint) -> Result<(), SurfaceError> {
        if !cell.in_bounds(self.grid_size) {
            return Err(SurfaceError::Draw(format!("cell {cell} outside grid")));
        }
        let idx = cell.index(self.grid_size);
        self.cells[idx] = paint;
        Ok(())
    }

    fn draw_hud(&mut self, hud: Hud) -> Result<(), SurfaceError> {
        self.hud = Some(hud);
        Ok(())
    }
}

/// Provider of [`GridSurface`]s; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridSurfaceProvider;

impl SurfaceProvider for GridSurfaceProvider {
    type Surface = GridSurface;

    fn acquire(&mut self, _viewport: Viewport, _grid_size: u16) -> Result<GridSurface, SurfaceError> {
        Ok(GridSurface::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_resets_cells() {
        let mut surface = GridSurface::new();
        surface.clear(3).unwrap();
        surface.paint(GridCell::new(1, 1), Paint::Food).unwrap();
        assert_eq!(surface.get(GridCell::new(1, 1)), Some(Paint::Food));

        surface.clear(3).unwrap();
        assert_eq!(surface.count(Paint::Empty), 9);
        assert_eq!(surface.frames(), 2);
    }

    #[test]
    fn test_paint_outside_grid_fails() {
        let mut surface = GridSurface::new();
        surface.clear(3).unwrap();
        assert!(surface.paint(GridCell::new(3, 0), Paint::Body).is_err());
    }

    #[test]
    fn test_injected_failures_are_consumed() {
        let mut surface = GridSurface::new();
        surface.fail_next_frames(1);
        assert!(surface.clear(3).is_err());
        assert!(surface.clear(3).is_ok());
        assert_eq!(surface.frames(), 1);
    }
}
