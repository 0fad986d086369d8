use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// One color role in the terminal display. The set and its order are part
/// of the renderer contract and never change at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeSlot {
    Cursor,
    CursorAccent,
    Foreground,
    Background,
    SelectionBackground,
    SelectionForeground,
    SelectionInactiveBackground,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl ThemeSlot {
    pub const ALL: [ThemeSlot; 23] = [
        ThemeSlot::Cursor,
        ThemeSlot::CursorAccent,
        ThemeSlot::Foreground,
        ThemeSlot::Background,
        ThemeSlot::SelectionBackground,
        ThemeSlot::SelectionForeground,
        ThemeSlot::SelectionInactiveBackground,
        ThemeSlot::Black,
        ThemeSlot::Red,
        ThemeSlot::Green,
        ThemeSlot::Yellow,
        ThemeSlot::Blue,
        ThemeSlot::Magenta,
        ThemeSlot::Cyan,
        ThemeSlot::White,
        ThemeSlot::BrightBlack,
        ThemeSlot::BrightRed,
        ThemeSlot::BrightGreen,
        ThemeSlot::BrightYellow,
        ThemeSlot::BrightBlue,
        ThemeSlot::BrightMagenta,
        ThemeSlot::BrightCyan,
        ThemeSlot::BrightWhite,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ThemeSlot::Cursor => "cursor",
            ThemeSlot::CursorAccent => "cursorAccent",
            ThemeSlot::Foreground => "foreground",
            ThemeSlot::Background => "background",
            ThemeSlot::SelectionBackground => "selectionBackground",
            ThemeSlot::SelectionForeground => "selectionForeground",
            ThemeSlot::SelectionInactiveBackground => "selectionInactiveBackground",
            ThemeSlot::Black => "black",
            ThemeSlot::Red => "red",
            ThemeSlot::Green => "green",
            ThemeSlot::Yellow => "yellow",
            ThemeSlot::Blue => "blue",
            ThemeSlot::Magenta => "magenta",
            ThemeSlot::Cyan => "cyan",
            ThemeSlot::White => "white",
            ThemeSlot::BrightBlack => "brightBlack",
            ThemeSlot::BrightRed => "brightRed",
            ThemeSlot::BrightGreen => "brightGreen",
            ThemeSlot::BrightYellow => "brightYellow",
            ThemeSlot::BrightBlue => "brightBlue",
            ThemeSlot::BrightMagenta => "brightMagenta",
            ThemeSlot::BrightCyan => "brightCyan",
            ThemeSlot::BrightWhite => "brightWhite",
        }
    }

    /// The style token this slot reads from. The table is fixed; ANSI slots
    /// share the `color-` prefix, the rest have bespoke token names.
    pub fn token(self) -> &'static str {
        match self {
            ThemeSlot::Cursor => "--tint-terminal-cursorColor",
            ThemeSlot::CursorAccent => "--tint-terminal-cursorColorAccent",
            ThemeSlot::Foreground => "--tint-terminal-textColor",
            ThemeSlot::Background => "--tint-terminal-backgroundColor",
            ThemeSlot::SelectionBackground => "--tint-terminal-selection-backgroundColor",
            ThemeSlot::SelectionForeground => "--tint-terminal-selection-textColor",
            ThemeSlot::SelectionInactiveBackground => {
                "--tint-terminal-selection-backgroundColorInactive"
            }
            ThemeSlot::Black => "--tint-terminal-color-black",
            ThemeSlot::Red => "--tint-terminal-color-red",
            ThemeSlot::Green => "--tint-terminal-color-green",
            ThemeSlot::Yellow => "--tint-terminal-color-yellow",
            ThemeSlot::Blue => "--tint-terminal-color-blue",
            ThemeSlot::Magenta => "--tint-terminal-color-magenta",
            ThemeSlot::Cyan => "--tint-terminal-color-cyan",
            ThemeSlot::White => "--tint-terminal-color-white",
            ThemeSlot::BrightBlack => "--tint-terminal-color-brightBlack",
            ThemeSlot::BrightRed => "--tint-terminal-color-brightRed",
            ThemeSlot::BrightGreen => "--tint-terminal-color-brightGreen",
            ThemeSlot::BrightYellow => "--tint-terminal-color-brightYellow",
            ThemeSlot::BrightBlue => "--tint-terminal-color-brightBlue",
            ThemeSlot::BrightMagenta => "--tint-terminal-color-brightMagenta",
            ThemeSlot::BrightCyan => "--tint-terminal-color-brightCyan",
            ThemeSlot::BrightWhite => "--tint-terminal-color-brightWhite",
        }
    }
}

impl fmt::Display for ThemeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
