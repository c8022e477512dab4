//! Theme, reveal animation, caret, parallax and mobile menu handlers

use folio_core::prelude::*;

use crate::message::Message;
use crate::state::UiState;

use super::{TimerSlot, UpdateAction, UpdateResult};

pub fn handle_toggle_theme(state: &mut UiState) -> UpdateResult {
    state.theme = state.theme.toggled();
    info!("Theme switched to {}", state.theme);

    UpdateResult::actions(vec![
        UpdateAction::ApplyTheme {
            theme: state.theme,
            persist: true,
        },
        UpdateAction::StartThemeTransition,
        UpdateAction::ScheduleIn {
            slot: TimerSlot::ThemeTransition,
            delay: state.settings.timing.theme_transition(),
            message: Message::ThemeTransitionElapsed,
        },
    ])
}

/// Reveal is one-shot: a card already loaded is never touched again.
pub fn handle_card_entered(state: &mut UiState, index: usize) -> UpdateResult {
    if state.revealed.insert(index) {
        UpdateResult::action(UpdateAction::RevealCard { index })
    } else {
        UpdateResult::none()
    }
}

/// Flip the caret and re-arm the next blink.
pub fn handle_caret_blink(state: &mut UiState) -> UpdateResult {
    state.caret_visible = !state.caret_visible;
    UpdateResult::actions(vec![
        UpdateAction::SetCaretVisible(state.caret_visible),
        UpdateAction::Schedule {
            delay: state.settings.timing.caret_blink(),
            message: Message::CaretBlink,
        },
    ])
}

pub fn handle_scroll(state: &mut UiState, offset: f64) -> UpdateResult {
    UpdateResult::action(UpdateAction::ApplyParallax {
        translate_y: offset * state.settings.layout.parallax_factor,
    })
}

/// Re-evaluate the mobile toggle; widening past the breakpoint closes the
/// sidebar.
pub fn handle_resize(state: &mut UiState, width: u32) -> UpdateResult {
    state.viewport_width = width;
    if !state.is_narrow() && state.sidebar_open {
        debug!("Viewport widened to {}px, closing sidebar", width);
        state.sidebar_open = false;
    }
    UpdateResult::action(menu_sync(state))
}

pub fn handle_toggle_menu(state: &mut UiState) -> UpdateResult {
    state.sidebar_open = !state.sidebar_open;
    UpdateResult::action(menu_sync(state))
}

pub(crate) fn menu_sync(state: &UiState) -> UpdateAction {
    UpdateAction::SyncMobileMenu {
        toggle_visible: state.is_narrow(),
        sidebar_open: state.sidebar_open,
    }
}
