mod context;
mod record;
mod resolve;
mod slot;

pub use context::StyleContext;
pub use context::ThemeError;
pub use context::install_style_context;
pub use context::terminal_theme;
pub use record::TerminalTheme;
pub use record::ThemeOverrides;
pub use resolve::ComputedStyles;
pub use resolve::StyleTokens;
pub use slot::ThemeSlot;
