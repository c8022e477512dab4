//! Folio Library
//!
//! Client-side interactivity for a single-page portfolio site: section
//! navigation, theme switching, reveal animations, filtering, search, form
//! validation and notifications, driven through host-provided capabilities.

pub use folio_app as app;
pub use folio_core as core;

use folio_app::{DocumentView, PageController, Services, Settings};
use folio_core::prelude::*;

// Re-export main entry points
pub use folio_app::config::{load_settings, parse_settings};
pub use folio_app::Message;
pub use folio_core::logging;

/// Create a controller over `document` and run its initialisation.
///
/// Problems found while wiring the page are logged and returned; none of them
/// stop the page from working.
pub fn boot<D: DocumentView>(
    document: D,
    settings: Settings,
    services: Services,
    viewport_width: u32,
) -> (PageController<D>, Vec<Error>) {
    let mut controller = PageController::new(document, settings, services);
    let reports = controller.init(viewport_width);
    for report in &reports {
        warn!("Page init: {}", report);
    }
    info!(
        "Folio ready: {} sections, theme {}",
        controller.state().sections.len(),
        controller.state().theme
    );
    (controller, reports)
}
