//! Renderer seam and the guard that releases the display.

use anyhow::Result;

use crate::core::Grid;
use crate::types::SessionState;

/// Something that can draw a session.
///
/// Only the event loop calls these, on the same task that mutates the grid.
pub trait Renderer {
    /// Draw the grid and status into the back buffer.
    fn render_frame(&mut self, grid: &Grid, state: &SessionState) -> Result<()>;

    /// Make the last rendered frame visible.
    fn present(&mut self) -> Result<()>;

    /// Give the display back (restore the terminal).
    fn release(&mut self) -> Result<()>;

    /// Forget any cached screen contents; the next present is a full redraw.
    fn invalidate(&mut self) {}
}

/// Owns an acquired renderer and releases it exactly once.
///
/// `release` is called explicitly on orderly shutdown so its error can be
/// reported; `Drop` covers every other path, including unwinding.
pub struct DisplayGuard<R: Renderer> {
    renderer: R,
    released: bool,
}

impl<R: Renderer> DisplayGuard<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            released: false,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Draw and present the grid, then clear its dirty flag.
    pub fn draw(&mut self, grid: &mut Grid, state: &SessionState) -> Result<()> {
        self.renderer.render_frame(grid, state)?;
        self.renderer.present()?;
        grid.clear_dirty();
        Ok(())
    }

    /// Release the display. Later calls are no-ops.
    pub fn release(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        log::debug!("releasing display");
        self.renderer.release()
    }
}

impl<R: Renderer> Drop for DisplayGuard<R> {
    fn drop(&mut self) {
        if !self.released {
            self.released = true;
            if let Err(e) = self.renderer.release() {
                log::error!("failed to release display: {:#}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting {
        frames: usize,
        releases: Arc<AtomicUsize>,
    }

    impl Renderer for Counting {
        fn render_frame(&mut self, _grid: &Grid, _state: &SessionState) -> Result<()> {
            self.frames += 1;
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            Ok(())
        }

        fn release(&mut self) -> Result<()> {
            self.releases.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn state() -> SessionState {
        SessionState {
            running: true,
            paused: true,
            turn: 0,
            tick_rate_hz: 23,
        }
    }

    #[test]
    fn draw_clears_dirty_flag() {
        let releases = Arc::new(AtomicUsize::new(0));
        let mut guard = DisplayGuard::new(Counting {
            frames: 0,
            releases,
        });
        let mut grid = Grid::new(3, 3).unwrap();
        assert!(grid.is_dirty());

        guard.draw(&mut grid, &state()).unwrap();
        assert!(!grid.is_dirty());
        assert_eq!(guard.renderer().frames, 1);
    }

    #[test]
    fn release_runs_once_across_explicit_and_drop() {
        let releases = Arc::new(AtomicUsize::new(0));
        {
            let mut guard = DisplayGuard::new(Counting {
                frames: 0,
                releases: releases.clone(),
            });
            guard.release().unwrap();
            guard.release().unwrap();
            assert!(guard.is_released());
        }
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_releases_when_never_released() {
        let releases = Arc::new(AtomicUsize::new(0));
        drop(DisplayGuard::new(Counting {
            frames: 0,
            releases: releases.clone(),
        }));
        assert_eq!(releases.load(Ordering::SeqCst), 1);
    }
}
