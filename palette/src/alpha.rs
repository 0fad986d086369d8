use crate::color::HexColor;
use crate::color::PaletteError;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// The opacity steps every alpha palette is built over, in emission order.
pub const OPACITY_LEVELS: [u8; 15] = [1, 2, 3, 4, 5, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// Maps a percentage to an 8-bit alpha channel. Halves round up, so 50%
/// lands on 128, not 127.
pub fn alpha_byte(level: u8) -> u8 {
    let level = u16::from(level.min(100));
    ((level * 255 + 50) / 100) as u8
}

/// A base color with a two-digit lowercase alpha suffix, e.g. `#FFFFFF0d`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AlphaColor(String);

impl AlphaColor {
    fn new(base: &HexColor, level: u8) -> Self {
        let base = base.as_str();
        let alpha = alpha_byte(level);
        Self(format!("{base}{alpha:02x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlphaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The fixed ladder of translucent variants of one base color. Entries are
/// keyed by opacity level and iterate in `OPACITY_LEVELS` order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AlphaPalette {
    #[serde(skip)]
    base: HexColor,
    entries: IndexMap<u8, AlphaColor>,
}

impl AlphaPalette {
    pub fn generate(base: &HexColor) -> Self {
        let entries = OPACITY_LEVELS
            .iter()
            .map(|&level| (level, AlphaColor::new(base, level)))
            .collect();
        Self {
            base: base.clone(),
            entries,
        }
    }

    pub fn base(&self) -> &HexColor {
        &self.base
    }

    pub fn get(&self, level: u8) -> Option<&AlphaColor> {
        self.entries.get(&level)
    }

    pub fn levels(&self) -> impl Iterator<Item = u8> {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &AlphaColor)> {
        self.entries.iter().map(|(&level, color)| (level, color))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validates `base` and derives its alpha palette in one step.
pub fn alpha_palette(base: &str) -> Result<AlphaPalette, PaletteError> {
    let base = HexColor::new(base)?;
    Ok(AlphaPalette::generate(&base))
}
