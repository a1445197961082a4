//! Platform-specific key configuration

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts
/// - macOS: SUPER (Cmd key), with Ctrl accepted as fallback
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear field shortcut display
/// Ctrl+U works on all platforms
pub const CLEAR_FIELD_SHORTCUT: &str = "Ctrl+U";

/// True when the key carries the platform shortcut modifier (or Ctrl)
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(SHORTCUT_MODIFIER) || modifiers.contains(KeyModifiers::CONTROL)
}

/// True when a character key should be typed into the focused field.
/// Windows reports AltGr as Ctrl+Alt, so `@` on many layouts arrives that way.
pub fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT) || !is_shortcut(modifiers)
}
