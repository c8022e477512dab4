use folio_app::Location;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::Window;

pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Location for BrowserLocation {
    fn fragment(&self) -> Option<String> {
        let hash = self.window.location().hash().ok()?;
        let fragment = hash.trim_start_matches('#');
        (!fragment.is_empty()).then(|| fragment.to_string())
    }

    /// `pushState` does not fire `hashchange`, so this never loops back as a
    /// `FragmentChanged` message.
    fn push_fragment(&mut self, fragment: &str) {
        let url = format!("#{}", fragment);
        let result = self
            .window
            .history()
            .and_then(|history| history.push_state_with_url(&JsValue::NULL, "", Some(&url)));
        if let Err(e) = result {
            warn!("pushState failed: {:?}", e);
        }
    }
}
