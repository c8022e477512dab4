//! Section navigation handlers

use folio_core::prelude::*;
use folio_core::SectionId;

use crate::state::UiState;

use super::{appearance, UpdateAction, UpdateResult};

/// Handle a navigation-link click.
///
/// Unknown ids are reported and ignored; state stays untouched.
pub fn handle_navigate(state: &mut UiState, id: SectionId) -> UpdateResult {
    if !state.has_section(&id) {
        warn!("Ignoring navigation to unknown section '{}'", id);
        return UpdateResult::error(Error::section_not_found(id.as_str()));
    }

    let result = enter_section(state, id, true);

    // Link clicks always collapse the mobile sidebar
    if state.is_narrow() && state.sidebar_open {
        state.sidebar_open = false;
        return result.with_action(appearance::menu_sync(state));
    }
    result
}

/// Handle a fragment change the page did not initiate (back/forward).
pub fn handle_fragment_changed(state: &mut UiState, fragment: &str) -> UpdateResult {
    match SectionId::from_fragment(fragment) {
        Some(id) if state.has_section(&id) => {
            if id == state.current_section {
                return UpdateResult::none();
            }
            enter_section(state, id, false)
        }
        _ => {
            debug!("Fragment '{}' does not name a section", fragment);
            UpdateResult::none()
        }
    }
}

/// Switch to `id`, which must be a known section.
pub(crate) fn enter_section(state: &mut UiState, id: SectionId, push_fragment: bool) -> UpdateResult {
    debug!("Entering section '{}'", id);
    state.current_section = id.clone();
    UpdateResult::action(UpdateAction::ActivateSection { id, push_fragment })
}
