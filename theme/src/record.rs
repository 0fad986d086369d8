use crate::slot::ThemeSlot;
use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;

/// The complete color record handed to the terminal renderer. Every slot is
/// present; an absent value means the renderer falls back to its own
/// default for that slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_accent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_foreground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_inactive_background: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub black: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magenta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cyan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub white: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bright_black: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bright_red: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bright_green: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bright_yellow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bright_blue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bright_magenta: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bright_cyan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bright_white: Option<String>,
}

impl TerminalTheme {
    pub fn get(&self, slot: ThemeSlot) -> Option<&str> {
        let value = match slot {
            ThemeSlot::Cursor => &self.cursor,
            ThemeSlot::CursorAccent => &self.cursor_accent,
            ThemeSlot::Foreground => &self.foreground,
            ThemeSlot::Background => &self.background,
            ThemeSlot::SelectionBackground => &self.selection_background,
            ThemeSlot::SelectionForeground => &self.selection_foreground,
            ThemeSlot::SelectionInactiveBackground => &self.selection_inactive_background,
            ThemeSlot::Black => &self.black,
            ThemeSlot::Red => &self.red,
            ThemeSlot::Green => &self.green,
            ThemeSlot::Yellow => &self.yellow,
            ThemeSlot::Blue => &self.blue,
            ThemeSlot::Magenta => &self.magenta,
            ThemeSlot::Cyan => &self.cyan,
            ThemeSlot::White => &self.white,
            ThemeSlot::BrightBlack => &self.bright_black,
            ThemeSlot::BrightRed => &self.bright_red,
            ThemeSlot::BrightGreen => &self.bright_green,
            ThemeSlot::BrightYellow => &self.bright_yellow,
            ThemeSlot::BrightBlue => &self.bright_blue,
            ThemeSlot::BrightMagenta => &self.bright_magenta,
            ThemeSlot::BrightCyan => &self.bright_cyan,
            ThemeSlot::BrightWhite => &self.bright_white,
        };
        value.as_deref()
    }

    pub fn set(&mut self, slot: ThemeSlot, value: Option<String>) {
        let field = match slot {
            ThemeSlot::Cursor => &mut self.cursor,
            ThemeSlot::CursorAccent => &mut self.cursor_accent,
            ThemeSlot::Foreground => &mut self.foreground,
            ThemeSlot::Background => &mut self.background,
            ThemeSlot::SelectionBackground => &mut self.selection_background,
            ThemeSlot::SelectionForeground => &mut self.selection_foreground,
            ThemeSlot::SelectionInactiveBackground => &mut self.selection_inactive_background,
            ThemeSlot::Black => &mut self.black,
            ThemeSlot::Red => &mut self.red,
            ThemeSlot::Green => &mut self.green,
            ThemeSlot::Yellow => &mut self.yellow,
            ThemeSlot::Blue => &mut self.blue,
            ThemeSlot::Magenta => &mut self.magenta,
            ThemeSlot::Cyan => &mut self.cyan,
            ThemeSlot::White => &mut self.white,
            ThemeSlot::BrightBlack => &mut self.bright_black,
            ThemeSlot::BrightRed => &mut self.bright_red,
            ThemeSlot::BrightGreen => &mut self.bright_green,
            ThemeSlot::BrightYellow => &mut self.bright_yellow,
            ThemeSlot::BrightBlue => &mut self.bright_blue,
            ThemeSlot::BrightMagenta => &mut self.bright_magenta,
            ThemeSlot::BrightCyan => &mut self.bright_cyan,
            ThemeSlot::BrightWhite => &mut self.bright_white,
        };
        *field = value;
    }

    pub fn slots(&self) -> impl Iterator<Item = (ThemeSlot, Option<&str>)> {
        ThemeSlot::ALL.into_iter().map(|slot| (slot, self.get(slot)))
    }

    pub fn is_empty(&self) -> bool {
        ThemeSlot::ALL.into_iter().all(|slot| self.get(slot).is_none())
    }
}

/// A sparse per-slot patch applied after token resolution. A slot mapped to
/// `None` forces that slot absent even when its token resolved; slots not
/// listed are left alone.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeOverrides {
    entries: IndexMap<ThemeSlot, Option<String>>,
}

impl ThemeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, slot: ThemeSlot, value: impl Into<String>) {
        self.entries.insert(slot, Some(value.into()));
    }

    pub fn unset(&mut self, slot: ThemeSlot) {
        self.entries.insert(slot, None);
    }

    pub fn get(&self, slot: ThemeSlot) -> Option<Option<&str>> {
        self.entries.get(&slot).map(Option::as_deref)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemeSlot, Option<&str>)> {
        self.entries.iter().map(|(&slot, value)| (slot, value.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
