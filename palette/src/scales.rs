//! Bundled base color scales and the alpha primitives derived from them.

use crate::alpha::AlphaPalette;
use crate::alpha::alpha_palette;
use indexmap::IndexMap;

pub const WHITE: &str = "#FFFFFF";

pub const GRAY: [(u16, &str); 11] = [
    (50, "#FAFAFA"),
    (100, "#F5F5F5"),
    (200, "#E5E5E5"),
    (300, "#D4D4D4"),
    (400, "#A3A3A3"),
    (500, "#737373"),
    (600, "#525252"),
    (700, "#404040"),
    (800, "#262626"),
    (900, "#171717"),
    (950, "#0A0A0A"),
];

pub const ACCENT: [(u16, &str); 11] = [
    (50, "#F0FDFA"),
    (100, "#CCFBF1"),
    (200, "#99F6E4"),
    (300, "#5EEAD4"),
    (400, "#2DD4BF"),
    (500, "#14B8A6"),
    (600, "#0D9488"),
    (700, "#0F766E"),
    (800, "#115E59"),
    (900, "#134E4A"),
    (950, "#042F2E"),
];

pub const GREEN: [(u16, &str); 11] = [
    (50, "#F0FDF4"),
    (100, "#DCFCE7"),
    (200, "#BBF7D0"),
    (300, "#86EFAC"),
    (400, "#4ADE80"),
    (500, "#22C55E"),
    (600, "#16A34A"),
    (700, "#15803D"),
    (800, "#166534"),
    (900, "#14532D"),
    (950, "#052E16"),
];

// Orange has no 950 stop.
pub const ORANGE: [(u16, &str); 10] = [
    (50, "#FFFAEB"),
    (100, "#FEEFC7"),
    (200, "#FEDF89"),
    (300, "#FEC84B"),
    (400, "#FDB022"),
    (500, "#F79009"),
    (600, "#DC6803"),
    (700, "#B54708"),
    (800, "#93370D"),
    (900, "#792E0D"),
];

pub const RED: [(u16, &str); 11] = [
    (50, "#FEF2F2"),
    (100, "#FEE2E2"),
    (200, "#FECACA"),
    (300, "#FCA5A5"),
    (400, "#F87171"),
    (500, "#EF4444"),
    (600, "#DC2626"),
    (700, "#B91C1C"),
    (800, "#991B1B"),
    (900, "#7F1D1D"),
    (950, "#450A0A"),
];

pub fn shade<'a>(scale: &[(u16, &'a str)], shade: u16) -> Option<&'a str> {
    scale
        .iter()
        .find(|(value, _)| *value == shade)
        .map(|(_, color)| *color)
}

/// The alpha palettes the styling layer consumes, keyed by primitive name,
/// in emission order.
pub fn alpha_primitives() -> IndexMap<&'static str, AlphaPalette> {
    let bases = [
        ("white", Some(WHITE)),
        ("gray", shade(&GRAY, 900)),
        ("red", shade(&RED, 500)),
        ("accent", shade(&ACCENT, 500)),
    ];
    bases
        .into_iter()
        .map(|(name, base)| {
            // These are bundled constants; failing to derive them is a bug,
            // not an input error.
            let base = base.unwrap_or_else(|| panic!("missing bundled shade for {name}"));
            let palette =
                alpha_palette(base).unwrap_or_else(|err| panic!("bundled {name} scale: {err}"));
            (name, palette)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn shade_finds_known_stops() {
        assert_eq!(shade(&GRAY, 900), Some("#171717"));
        assert_eq!(shade(&ACCENT, 500), Some("#14B8A6"));
        assert_eq!(shade(&RED, 500), Some("#EF4444"));
        assert_eq!(shade(&GREEN, 950), Some("#052E16"));
    }

    #[test]
    fn shade_misses_undefined_stops() {
        assert_eq!(shade(&GRAY, 150), None);
        // Orange has no 950 stop.
        assert_eq!(shade(&ORANGE, 950), None);
    }

    #[test]
    fn alpha_primitives_cover_the_fixed_bases_in_order() {
        let primitives = alpha_primitives();
        let names: Vec<&str> = primitives.keys().copied().collect();
        assert_eq!(names, ["white", "gray", "red", "accent"]);

        let white = primitives.get("white").expect("white palette");
        assert_eq!(white.base().as_str(), "#FFFFFF");
        assert_eq!(white.get(3).map(ToString::to_string), Some("#FFFFFF08".to_string()));

        let gray = primitives.get("gray").expect("gray palette");
        assert_eq!(gray.base().as_str(), "#171717");

        let accent = primitives.get("accent").expect("accent palette");
        assert_eq!(accent.get(100).map(ToString::to_string), Some("#14B8A6ff".to_string()));
    }
}
