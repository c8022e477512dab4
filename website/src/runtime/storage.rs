//! `localStorage`-backed preference store

use folio_app::PreferenceStore;
use folio_core::{Error, Result};
use tracing::warn;
use web_sys::{Storage, Window};

pub struct LocalStoragePreferences {
    storage: Option<Storage>,
}

impl LocalStoragePreferences {
    /// Private browsing modes may deny storage; the page then works without
    /// persistence.
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            warn!("localStorage unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStoragePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| Error::storage("localStorage unavailable"))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::storage(format!("{:?}", e)))
    }
}
