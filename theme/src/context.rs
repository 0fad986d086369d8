use crate::record::TerminalTheme;
use crate::record::ThemeOverrides;
use crate::resolve::StyleTokens;
use crate::slot::ThemeSlot;
#[cfg(test)]
use std::sync::Mutex;
#[cfg(test)]
use std::sync::MutexGuard;
use std::sync::OnceLock;
use std::sync::RwLock;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("no style context installed; cannot resolve terminal theme")]
    StyleContextUnavailable,
}

/// A handle to one style token source. Resolution itself is stateless; the
/// context only pins which source to read.
pub struct StyleContext {
    source: Box<dyn StyleTokens + Send + Sync>,
}

impl StyleContext {
    pub fn new(source: impl StyleTokens + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    pub fn terminal_theme(&self, overrides: Option<&ThemeOverrides>) -> TerminalTheme {
        TerminalTheme::resolve_with(self.source.as_ref(), overrides)
    }
}

static STYLE_CONTEXT: OnceLock<RwLock<Option<StyleContext>>> = OnceLock::new();
#[cfg(test)]
static CONTEXT_TEST_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn context_cell() -> &'static RwLock<Option<StyleContext>> {
    STYLE_CONTEXT.get_or_init(|| RwLock::new(None))
}

/// Makes `source` the process-wide token source for [`terminal_theme`].
/// Installing again swaps the source; resolutions already in flight finish
/// against the one they started with.
pub fn install_style_context(source: impl StyleTokens + Send + Sync + 'static) {
    let context = StyleContext::new(source);
    if let Ok(mut guard) = context_cell().write() {
        let replaced = guard.is_some();
        *guard = Some(context);
        debug!(replaced, "style context installed");
    }
}

/// Resolves a terminal theme against the installed style context. Fails
/// without producing a record when no context is installed.
pub fn terminal_theme(overrides: Option<&ThemeOverrides>) -> Result<TerminalTheme, ThemeError> {
    let guard = context_cell()
        .read()
        .map_err(|_| ThemeError::StyleContextUnavailable)?;
    match guard.as_ref() {
        Some(context) => {
            let theme = context.terminal_theme(overrides);
            let absent = theme.slots().filter(|(_, value)| value.is_none()).count();
            let resolved = ThemeSlot::ALL.len() - absent;
            debug!(resolved, absent, "terminal theme resolved");
            Ok(theme)
        }
        None => Err(ThemeError::StyleContextUnavailable),
    }
}

#[cfg(test)]
fn clear_style_context() {
    if let Ok(mut guard) = context_cell().write() {
        *guard = None;
    }
}

// Global-context tests share one process; serialize them.
#[cfg(test)]
fn test_context_guard() -> MutexGuard<'static, ()> {
    CONTEXT_TEST_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|err| err.into_inner())
}
