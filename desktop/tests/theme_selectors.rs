#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Checks that the selectors the directory components emit are still styled by the
shared theme (ui/assets/theme/main.css). If you rename a class in the markup,
update REQUIRED_SELECTORS alongside it.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    // Buttons
    ".button {",
    ".button--ghost",
    // Controls
    ".filters {",
    ".filters__select",
    ".filters__reset",
    // Load states
    ".loading",
    ".loading__spinner",
    ".error",
    ".users-empty",
    // Rows
    ".users-list {",
    ".users-list-item {",
    ".users-list-item-avatar",
    ".users-list-item-avatar-img",
    ".users-list-item-avatar-placeholder",
    ".users-list-item-avatar-btn",
    ".users-list-item-name",
    ".users-list-item-last-name",
    ".users-list-item-age",
    ".users-list-item-email",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn load_state_panels_share_layout_block() {
    // Loading, error and empty panels are styled together so they swap without layout jumps.
    assert!(
        THEME_CSS.contains(".loading,\n.error,\n.users-empty {"),
        "Loading/error/empty panels no longer share a layout block"
    );
}
