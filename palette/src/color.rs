use serde::Deserialize;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("invalid color {value}: expected `#` followed by six hex digits")]
    InvalidColor { value: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// A `#RRGGBB` color. The text is stored as given, so case is preserved
/// when the value is rendered back out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    text: String,
    rgb: Rgb,
}

impl HexColor {
    pub fn new(value: impl Into<String>) -> Result<Self, PaletteError> {
        let text = value.into();
        match parse_rgb_str(&text) {
            Some(rgb) => Ok(Self { text, rgb }),
            None => Err(PaletteError::InvalidColor { value: text }),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }
}

fn parse_rgb_str(value: &str) -> Option<Rgb> {
    let s = value.strip_prefix('#')?;
    // `from_str_radix` also accepts a leading sign, so check the digits first.
    if s.len() != 6 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Rgb(r, g, b))
}

impl TryFrom<String> for HexColor {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.text
    }
}

impl FromStr for HexColor {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
