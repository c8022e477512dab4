//! Preferences surviving a page reload

use folio::app::{DocumentView, MemoryPreferences, Message, PreferenceStore};
use folio::core::Theme;

use crate::boot_with_prefs;

#[test]
fn test_theme_survives_reload() {
    let prefs = MemoryPreferences::new();

    let mut first = boot_with_prefs(&prefs);
    assert_eq!(first.state().theme, Theme::Dark);
    first.process_message(Message::ToggleTheme);
    assert_eq!(prefs.get("theme").as_deref(), Some("light"));
    drop(first);

    let second = boot_with_prefs(&prefs);
    assert_eq!(second.state().theme, Theme::Light);
    let doc = second.document();
    let root = doc.root();
    assert_eq!(doc.attribute(&root, "data-theme").as_deref(), Some("light"));
}

#[test]
fn test_reload_resets_everything_else() {
    let prefs = MemoryPreferences::new();

    let mut first = boot_with_prefs(&prefs);
    first.process_message(Message::navigate("contact"));
    first.process_message(Message::SearchBlog("rust".into()));
    drop(first);

    let second = boot_with_prefs(&prefs);
    assert_eq!(second.state().current_section.as_str(), "home");
    assert!(second.state().search.is_empty());
}
