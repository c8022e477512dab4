//! Persistent key-value preference storage
//!
//! Only one key is ever written: `theme`. The browser host backs this with
//! `localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use folio_core::prelude::*;
use folio_core::{Theme, THEME_STORAGE_KEY};

#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Read the stored theme, returning the raw value alongside the resolved
/// theme so callers can tell "absent" from "unparseable".
pub fn load_theme(store: &dyn PreferenceStore) -> (Theme, Option<String>) {
    let stored = store.get(THEME_STORAGE_KEY);
    (Theme::from_stored(stored.as_deref()), stored)
}

pub fn save_theme(store: &mut dyn PreferenceStore, theme: Theme) -> Result<()> {
    store
        .set(THEME_STORAGE_KEY, theme.as_str())
        .with_context(|| format!("Persisting theme '{}'", theme))
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(key: &str, value: &str) -> Self {
        let prefs = Self::new();
        prefs
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        prefs
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
