//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the cell grid, the preset seeder and the Game of Life
//! transition rule. It has **zero dependencies** on terminals or async
//! runtimes, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same random fill
//! - **Testable**: every rule and preset is checked by unit tests
//! - **Portable**: usable headless, in a terminal, or from benchmarks
//!
//! # Module Structure
//!
//! - [`grid`]: W x H boolean matrix with dirty tracking and neighbor counts
//! - [`patterns`]: named presets and the random fill
//! - [`rng`]: small LCG used for random fills
//! - [`simulation`]: next-generation computation and the turn counter
//!
//! # Example
//!
//! ```
//! use tui_life_core::{patterns, Grid, Simulation, SimpleRng};
//!
//! let mut grid = Grid::new(7, 7).unwrap();
//! patterns::seed_with_rng(&mut grid, "blinker", &mut SimpleRng::new(1));
//! assert_eq!(grid.alive_cells(), vec![(2, 3), (3, 3), (4, 3)]);
//!
//! let mut sim = Simulation::new();
//! sim.advance(&mut grid);
//! assert_eq!(grid.alive_cells(), vec![(3, 2), (3, 3), (3, 4)]);
//! assert_eq!(sim.turn(), 1);
//! ```

pub mod grid;
pub mod patterns;
pub mod rng;
pub mod simulation;

pub use tui_life_types as types;

// Re-export commonly used types for convenience
pub use grid::Grid;
pub use patterns::{seed, seed_with_rng, Pattern, SeedReport};
pub use rng::SimpleRng;
pub use simulation::{next_generation, Simulation};
