mod alpha;
mod color;
pub mod scales;

pub use alpha::AlphaColor;
pub use alpha::AlphaPalette;
pub use alpha::OPACITY_LEVELS;
pub use alpha::alpha_byte;
pub use alpha::alpha_palette;
pub use color::HexColor;
pub use color::PaletteError;
pub use color::Rgb;
