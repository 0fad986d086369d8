use pretty_assertions::assert_eq;
use tint_theme::ComputedStyles;
use tint_theme::TerminalTheme;
use tint_theme::ThemeOverrides;
use tint_theme::ThemeSlot;

fn fully_populated_styles() -> ComputedStyles {
    let mut styles = ComputedStyles::new();
    for slot in ThemeSlot::ALL {
        styles.set(slot.token(), format!("#{slot}"));
    }
    styles
}

#[test]
fn resolves_every_slot_from_its_token() {
    let styles = fully_populated_styles();
    let theme = TerminalTheme::resolve_with(&styles, None);

    for slot in ThemeSlot::ALL {
        assert_eq!(theme.get(slot), Some(format!("#{slot}").as_str()));
    }
    assert!(!theme.is_empty());
}

#[test]
fn unknown_tokens_do_not_leak_into_the_record() {
    let mut styles = ComputedStyles::new();
    styles.set("--tint-terminal-cursorColor", "#FFFFFF");
    styles.set("--tint-panel-backgroundColor", "#123456");
    styles.set("--unrelated", "#654321");

    let theme = TerminalTheme::resolve_with(&styles, None);
    assert_eq!(theme.get(ThemeSlot::Cursor), Some("#FFFFFF"));
    assert_eq!(theme.slots().filter(|(_, value)| value.is_some()).count(), 1);
}

#[test]
fn record_field_values_match_slot_accessors() {
    let mut styles = ComputedStyles::new();
    styles.set("--tint-terminal-selection-backgroundColorInactive", "#262626");
    styles.set("--tint-terminal-color-brightYellow", "#FEC84B");

    let theme = TerminalTheme::resolve_with(&styles, None);
    assert_eq!(theme.selection_inactive_background.as_deref(), Some("#262626"));
    assert_eq!(theme.bright_yellow.as_deref(), Some("#FEC84B"));
    assert_eq!(
        theme.get(ThemeSlot::SelectionInactiveBackground),
        theme.selection_inactive_background.as_deref()
    );
}

#[test]
fn overrides_take_precedence_over_every_token() {
    let styles = fully_populated_styles();

    let mut overrides = ThemeOverrides::new();
    for slot in ThemeSlot::ALL {
        overrides.unset(slot);
    }

    let theme = TerminalTheme::resolve_with(&styles, Some(&overrides));
    assert!(theme.is_empty());
}

#[test]
fn empty_overrides_change_nothing() {
    let styles = fully_populated_styles();
    let with_empty = TerminalTheme::resolve_with(&styles, Some(&ThemeOverrides::new()));
    let without = TerminalTheme::resolve_with(&styles, None);
    assert_eq!(with_empty, without);
}

#[test]
fn mixed_overrides_apply_per_slot() {
    let mut styles = ComputedStyles::new();
    styles.set("--tint-terminal-textColor", "#E5E5E5");
    styles.set("--tint-terminal-backgroundColor", "#171717");
    styles.set("--tint-terminal-color-red", "#EF4444");

    let mut overrides = ThemeOverrides::new();
    // Replace one resolved slot, clear another, fill one the tokens missed.
    overrides.set(ThemeSlot::Foreground, "#FAFAFA");
    overrides.unset(ThemeSlot::Background);
    overrides.set(ThemeSlot::Cursor, "#14B8A6");

    let theme = TerminalTheme::resolve_with(&styles, Some(&overrides));
    assert_eq!(theme.get(ThemeSlot::Foreground), Some("#FAFAFA"));
    assert_eq!(theme.get(ThemeSlot::Background), None);
    assert_eq!(theme.get(ThemeSlot::Cursor), Some("#14B8A6"));
    assert_eq!(theme.get(ThemeSlot::Red), Some("#EF4444"));
}

#[test]
fn values_pass_through_verbatim() {
    // The resolver does not validate or normalize values; hosts can store
    // anything their renderer accepts.
    let mut styles = ComputedStyles::new();
    styles.set("--tint-terminal-cursorColor", "rgba(20, 184, 166, 0.5)");
    styles.set("--tint-terminal-color-white", " #FFFFFF ");

    let theme = TerminalTheme::resolve_with(&styles, None);
    assert_eq!(
        theme.get(ThemeSlot::Cursor),
        Some("rgba(20, 184, 166, 0.5)")
    );
    assert_eq!(theme.get(ThemeSlot::White), Some(" #FFFFFF "));
}

#[test]
fn source_is_read_once_per_slot_per_resolution() {
    use std::sync::Arc;
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    let reads = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&reads);
    let lookup = move |_token: &str| -> Option<String> {
        counter.fetch_add(1, Ordering::Relaxed);
        None
    };

    let theme = TerminalTheme::resolve_with(&lookup, None);
    assert!(theme.is_empty());
    assert_eq!(reads.load(Ordering::Relaxed), ThemeSlot::ALL.len());
}
