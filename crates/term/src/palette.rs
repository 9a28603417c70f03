//! Cell and background colors, chosen by name.

use crate::fb::{CellStyle, Rgb};

/// Resolve a color name (case-insensitive) or `#rrggbb`.
pub fn named_color(name: &str) -> Option<Rgb> {
    let name = name.trim().to_lowercase();
    let rgb = match name.as_str() {
        "black" => Rgb::BLACK,
        "white" => Rgb::WHITE,
        "red" => Rgb::new(205, 49, 49),
        "green" => Rgb::new(13, 188, 121),
        "yellow" => Rgb::new(229, 229, 16),
        "blue" => Rgb::new(36, 114, 200),
        "magenta" => Rgb::new(188, 63, 188),
        "cyan" => Rgb::new(17, 168, 205),
        "grey" | "gray" => Rgb::new(128, 128, 128),
        "orange" => Rgb::new(255, 165, 0),
        "purple" => Rgb::new(128, 0, 128),
        _ => return Rgb::from_hex(&name),
    };
    Some(rgb)
}

/// Styles for live and dead cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub cell: CellStyle,
    pub background: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(Rgb::WHITE, Rgb::BLACK)
    }
}

impl Palette {
    pub fn new(cell: Rgb, background: Rgb) -> Self {
        Self {
            cell: CellStyle::new(cell, background),
            background: CellStyle::new(background, background),
        }
    }

    /// Build a palette from optional color names.
    ///
    /// Unknown names keep the default for that slot and are returned so the
    /// caller can warn about them.
    pub fn from_names(cell: Option<&str>, background: Option<&str>) -> (Self, Vec<String>) {
        let defaults = Self::default();
        let mut unknown = Vec::new();
        let mut resolve = |name: Option<&str>, fallback: Rgb| match name {
            Some(n) if !n.trim().is_empty() => named_color(n).unwrap_or_else(|| {
                unknown.push(n.to_string());
                fallback
            }),
            _ => fallback,
        };

        let cell = resolve(cell, defaults.cell.fg);
        let background = resolve(background, defaults.background.bg);
        (Self::new(cell, background), unknown)
    }
}
