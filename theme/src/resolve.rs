use crate::record::TerminalTheme;
use crate::record::ThemeOverrides;
use crate::slot::ThemeSlot;
use std::collections::HashMap;

/// Synchronous lookup of named style tokens. Implementations are treated as
/// a stable snapshot for the duration of one resolution.
pub trait StyleTokens {
    fn token_value(&self, token: &str) -> Option<String>;
}

impl<F> StyleTokens for F
where
    F: Fn(&str) -> Option<String>,
{
    fn token_value(&self, token: &str) -> Option<String> {
        self(token)
    }
}

/// An in-memory token source. Hosts populate one from whatever holds their
/// computed styles; tests build them inline.
#[derive(Clone, Debug, Default)]
pub struct ComputedStyles {
    values: HashMap<String, String>,
}

impl ComputedStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.values.insert(token.into(), value.into());
    }

    pub fn unset(&mut self, token: &str) {
        self.values.remove(token);
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.values.get(token).map(String::as_str)
    }
}

impl StyleTokens for ComputedStyles {
    fn token_value(&self, token: &str) -> Option<String> {
        self.values.get(token).cloned()
    }
}

impl TerminalTheme {
    /// Builds a fresh record from `tokens`, then applies `overrides` on top.
    /// A token that is missing or resolves to the empty string leaves its
    /// slot absent; an override listed as `None` forces the slot absent.
    pub fn resolve_with(
        tokens: &dyn StyleTokens,
        overrides: Option<&ThemeOverrides>,
    ) -> TerminalTheme {
        let mut theme = TerminalTheme::default();
        for slot in ThemeSlot::ALL {
            let value = tokens
                .token_value(slot.token())
                .filter(|value| !value.is_empty());
            theme.set(slot, value);
        }
        if let Some(overrides) = overrides {
            for (slot, value) in overrides.iter() {
                theme.set(slot, value.map(str::to_string));
            }
        }
        theme
    }
}
