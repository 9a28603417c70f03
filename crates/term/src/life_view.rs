//! LifeView: maps a grid and session state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Grid;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::Palette;
use crate::types::SessionState;

/// Glyph for a live cell.
pub const ALIVE_CHAR: char = '█';

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

/// Draws one terminal cell per grid cell plus a status block in the top-right.
#[derive(Debug, Clone, Default)]
pub struct LifeView {
    palette: Palette,
}

impl LifeView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(
        &self,
        grid: &Grid,
        state: &SessionState,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.palette.background.into_cell(' '));

        let w = grid.width().min(viewport.width);
        let h = grid.height().min(viewport.height);
        let cells = grid.cells();
        for x in 0..w {
            let column = &cells[x as usize];
            for y in 0..h {
                if column[y as usize] {
                    fb.set(x, y, self.palette.cell.into_cell(ALIVE_CHAR));
                }
            }
        }

        self.draw_status(fb, state, w);
    }

    /// Status lines, right-aligned against the visible grid edge.
    fn draw_status(&self, fb: &mut FrameBuffer, state: &SessionState, right: u16) {
        let style = CellStyle {
            bold: true,
            ..CellStyle::new(Rgb::WHITE, Rgb::BLACK)
        };
        let lines = [
            format!("FPS {}", state.tick_rate_hz),
            format!("TURN {}", state.turn),
            state.run_state().as_str().to_string(),
        ];
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count() as u16;
            fb.put_str(right.saturating_sub(len), row as u16, line, style);
        }
    }
}
