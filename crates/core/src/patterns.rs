//! Pattern seeder - named presets and random fill
//!
//! Each preset is a fixed list of (dx, dy) offsets applied to an anchor:
//!
//! | Pattern | Anchor | Cells |
//! |---------|--------|-------|
//! | blinker | center | 3 |
//! | toad | center | 6 |
//! | beacon | center | 6 |
//! | lwss | center | 9 |
//! | glider | origin | 5 |
//! | block | origin | 4 |
//! | gosper-glider-gun | center - (18, 5) | 36 |
//!
//! The center is `(W/2, H/2)`, truncated. Offsets that land outside the grid
//! are dropped. `random`, an empty name, or an unknown name fill each cell
//! independently with [`DEFAULT_ALIVE_PROBABILITY`]; only unknown names carry
//! a warning.

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::{LifeError, DEFAULT_ALIVE_PROBABILITY, RANDOM_PATTERN};

const BLINKER: [(i32, i32); 3] = [(-1, 0), (0, 0), (1, 0)];

const TOAD: [(i32, i32); 6] = [(-1, 0), (0, 0), (1, 0), (0, 1), (1, 1), (2, 1)];

const BEACON: [(i32, i32); 6] = [(-2, -1), (-2, -2), (-1, -2), (1, 0), (1, 1), (0, 1)];

const LWSS: [(i32, i32); 9] = [
    (-1, 1),
    (2, 1),
    (-2, 0),
    (-2, -1),
    (2, -1),
    (-2, -2),
    (-1, -2),
    (0, -2),
    (1, -2),
];

const GLIDER: [(i32, i32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

const BLOCK: [(i32, i32); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

#[rustfmt::skip]
const GOSPER_GLIDER_GUN: [(i32, i32); 36] = [
    (0, 4), (0, 5), (1, 4), (1, 5),
    (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8), (13, 2), (13, 8),
    (14, 5), (15, 3), (15, 7), (16, 4), (16, 5), (16, 6), (17, 5),
    (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1), (22, 5),
    (24, 0), (24, 1), (24, 5), (24, 6),
    (34, 2), (34, 3), (35, 2), (35, 3),
];

/// Shift from the grid center to the gun's top-left corner.
const GOSPER_SHIFT: (i32, i32) = (18, 5);

/// Named initial configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Blinker,
    Toad,
    Beacon,
    Lwss,
    GosperGliderGun,
    Glider,
    Block,
    Random,
}

impl Pattern {
    /// Every pattern, in the order they are listed to users.
    pub const ALL: [Pattern; 8] = [
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Lwss,
        Pattern::GosperGliderGun,
        Pattern::Glider,
        Pattern::Block,
        Pattern::Random,
    ];

    /// Parse pattern from name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_life_core::Pattern;
    ///
    /// assert_eq!(Pattern::from_name("blinker"), Some(Pattern::Blinker));
    /// assert_eq!(Pattern::from_name("Gosper-Glider-Gun"), Some(Pattern::GosperGliderGun));
    /// assert_eq!(Pattern::from_name("lightweight-spaceship"), Some(Pattern::Lwss));
    /// assert_eq!(Pattern::from_name("pulsar"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "blinker" => Some(Pattern::Blinker),
            "toad" => Some(Pattern::Toad),
            "beacon" => Some(Pattern::Beacon),
            "lwss" | "lightweight-spaceship" => Some(Pattern::Lwss),
            "gosper-glider-gun" => Some(Pattern::GosperGliderGun),
            "glider" => Some(Pattern::Glider),
            "block" => Some(Pattern::Block),
            RANDOM_PATTERN => Some(Pattern::Random),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Beacon => "beacon",
            Pattern::Lwss => "lwss",
            Pattern::GosperGliderGun => "gosper-glider-gun",
            Pattern::Glider => "glider",
            Pattern::Block => "block",
            Pattern::Random => RANDOM_PATTERN,
        }
    }

    /// Comma-separated list of every pattern name.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(Pattern::name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Offsets relative to the anchor; empty for `Random`.
    pub fn offsets(&self) -> &'static [(i32, i32)] {
        match self {
            Pattern::Blinker => &BLINKER,
            Pattern::Toad => &TOAD,
            Pattern::Beacon => &BEACON,
            Pattern::Lwss => &LWSS,
            Pattern::GosperGliderGun => &GOSPER_GLIDER_GUN,
            Pattern::Glider => &GLIDER,
            Pattern::Block => &BLOCK,
            Pattern::Random => &[],
        }
    }

    /// Anchor point on a `width` x `height` grid; `None` for `Random`.
    pub fn anchor(&self, width: u16, height: u16) -> Option<(i32, i32)> {
        let center = ((width / 2) as i32, (height / 2) as i32);
        match self {
            Pattern::Blinker | Pattern::Toad | Pattern::Beacon | Pattern::Lwss => Some(center),
            Pattern::GosperGliderGun => {
                Some((center.0 - GOSPER_SHIFT.0, center.1 - GOSPER_SHIFT.1))
            }
            Pattern::Glider | Pattern::Block => Some((0, 0)),
            Pattern::Random => None,
        }
    }

    /// Absolute cell coordinates on a grid of the given size, before clipping.
    pub fn cells(&self, width: u16, height: u16) -> Vec<(i32, i32)> {
        let Some((ax, ay)) = self.anchor(width, height) else {
            return Vec::new();
        };
        self.offsets()
            .iter()
            .map(|&(dx, dy)| (ax + dx, ay + dy))
            .collect()
    }
}

/// Outcome of seeding a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    /// Pattern actually applied (Random after a fallback).
    pub pattern: Pattern,
    /// Pattern cells dropped because they fell outside the grid.
    pub clipped: usize,
    /// Set when the requested name was unknown.
    pub warning: Option<LifeError>,
}

/// Seed `grid` from `name`, drawing random fills from a clock-seeded RNG.
pub fn seed(grid: &mut Grid, name: &str) -> SeedReport {
    seed_with_rng(grid, name, &mut SimpleRng::from_clock())
}

/// Seed `grid` from `name` using the supplied RNG for random fills.
///
/// Existing cells are cleared first. This never fails: unknown names fall
/// back to a random fill and report [`LifeError::UnknownPattern`].
pub fn seed_with_rng(grid: &mut Grid, name: &str, rng: &mut SimpleRng) -> SeedReport {
    let trimmed = name.trim();
    let (pattern, warning) = match Pattern::from_name(trimmed) {
        Some(pattern) => (pattern, None),
        None if trimmed.is_empty() => (Pattern::Random, None),
        None => {
            log::debug!("unknown pattern '{}', falling back to random", trimmed);
            (
                Pattern::Random,
                Some(LifeError::UnknownPattern(trimmed.to_string())),
            )
        }
    };

    grid.clear();
    let mut clipped = 0;
    if pattern == Pattern::Random {
        fill_random(grid, DEFAULT_ALIVE_PROBABILITY, rng);
    } else {
        for (x, y) in pattern.cells(grid.width(), grid.height()) {
            if grid.set(x, y, true).is_err() {
                clipped += 1;
            }
        }
    }

    log::debug!(
        "seeded {}x{} grid with {} ({} alive, {} clipped)",
        grid.width(),
        grid.height(),
        pattern.name(),
        grid.alive_count(),
        clipped
    );

    SeedReport {
        pattern,
        clipped,
        warning,
    }
}

/// Fill every cell independently: alive with probability `p`.
pub fn fill_random(grid: &mut Grid, p: f32, rng: &mut SimpleRng) {
    let cells = (0..grid.width())
        .map(|_| (0..grid.height()).map(|_| rng.chance(p)).collect())
        .collect();
    grid.install(cells);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut cells: Vec<(i32, i32)>) -> Vec<(i32, i32)> {
        cells.sort();
        cells
    }

    #[test]
    fn names_round_trip() {
        for pattern in Pattern::ALL {
            assert_eq!(Pattern::from_name(pattern.name()), Some(pattern));
        }
        assert_eq!(
            Pattern::names(),
            "blinker, toad, beacon, lwss, gosper-glider-gun, glider, block, random"
        );
    }

    #[test]
    fn offset_counts() {
        assert_eq!(Pattern::Blinker.offsets().len(), 3);
        assert_eq!(Pattern::Toad.offsets().len(), 6);
        assert_eq!(Pattern::Beacon.offsets().len(), 6);
        assert_eq!(Pattern::Lwss.offsets().len(), 9);
        assert_eq!(Pattern::Glider.offsets().len(), 5);
        assert_eq!(Pattern::Block.offsets().len(), 4);
        assert_eq!(Pattern::GosperGliderGun.offsets().len(), 36);
        assert!(Pattern::Random.offsets().is_empty());
    }

    #[test]
    fn gosper_anchor_is_shifted_from_center() {
        assert_eq!(Pattern::GosperGliderGun.anchor(80, 24), Some((22, 7)));
        assert_eq!(Pattern::Blinker.anchor(7, 7), Some((3, 3)));
        assert_eq!(Pattern::Glider.anchor(80, 24), Some((0, 0)));
        assert_eq!(Pattern::Random.anchor(80, 24), None);
    }

    #[test]
    fn seeding_clears_previous_cells() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(4, 4, true).unwrap();
        seed_with_rng(&mut grid, "block", &mut SimpleRng::new(1));
        assert_eq!(grid.alive_cells(), sorted(vec![(0, 0), (1, 0), (0, 1), (1, 1)]));
    }

    #[test]
    fn clipped_cells_are_counted() {
        // Center of a 2x2 grid is (1, 1); blinker wants x = 0..=2.
        let mut grid = Grid::new(2, 2).unwrap();
        let report = seed_with_rng(&mut grid, "blinker", &mut SimpleRng::new(1));
        assert_eq!(report.clipped, 1);
        assert_eq!(grid.alive_cells(), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn empty_name_is_random_without_warning() {
        let mut grid = Grid::new(10, 10).unwrap();
        let report = seed_with_rng(&mut grid, "", &mut SimpleRng::new(9));
        assert_eq!(report.pattern, Pattern::Random);
        assert_eq!(report.warning, None);
    }

    #[test]
    fn random_fill_is_reproducible_for_a_seed() {
        let mut a = Grid::new(20, 20).unwrap();
        let mut b = Grid::new(20, 20).unwrap();
        seed_with_rng(&mut a, "random", &mut SimpleRng::new(77));
        seed_with_rng(&mut b, "random", &mut SimpleRng::new(77));
        assert_eq!(a.cells(), b.cells());
        assert!(a.alive_count() > 0);
    }
}
