//! Responsive board sizing.

use serde::{Deserialize, Serialize};
use tui_snake_types::Viewport;

/// How a viewport maps to a square board side, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSizing {
    pub min_side: u16,
    pub max_side: u16,
    /// Percent of the viewport width kept free around the board.
    pub pad_x_pct: u16,
    /// Percent of the viewport height kept free around the board.
    pub pad_y_pct: u16,
    /// Characters per grid cell, horizontally.
    pub cell_w: u16,
    /// Characters per grid cell, vertically.
    pub cell_h: u16,
    /// Columns taken by the border.
    pub chrome_w: u16,
    /// Rows taken by the border and HUD.
    pub chrome_h: u16,
}

impl Default for BoardSizing {
    fn default() -> Self {
        Self {
            min_side: 10,
            max_side: 26,
            pad_x_pct: 10,
            pad_y_pct: 25,
            cell_w: 2,
            cell_h: 1,
            chrome_w: 2,
            chrome_h: 3,
        }
    }
}

impl BoardSizing {
    /// Board side for `viewport`, clamped to `[min_side, max_side]`.
    ///
    /// The clamp can produce a board that does not fit a tiny viewport; the
    /// surface provider rejects those.
    pub fn side_for(&self, viewport: Viewport) -> u16 {
        let fit = |extent: u16, pad_pct: u16, chrome: u16, cell: u16| -> u16 {
            let usable = u32::from(extent) * u32::from(100 - pad_pct.min(100)) / 100;
            let usable = usable.saturating_sub(u32::from(chrome));
            (usable / u32::from(cell.max(1))).min(u32::from(u16::MAX)) as u16
        };
        let across = fit(viewport.width, self.pad_x_pct, self.chrome_w, self.cell_w);
        let down = fit(viewport.height, self.pad_y_pct, self.chrome_h, self.cell_h);

        let max = self.max_side.max(self.min_side);
        across.min(down).clamp(self.min_side, max)
    }
}
