//! Notification lifecycle
//!
//! show -> (slide-in delay) -> visible -> (auto-dismiss or close click)
//! -> hidden -> (hide delay) -> removed
//!
//! Every timer carries the notification id; a timer for a notification that
//! is no longer current does nothing.

use folio_core::prelude::*;
use folio_core::{NotificationId, NotificationKind};

use crate::message::Message;
use crate::state::UiState;

use super::{TimerSlot, UpdateAction, UpdateResult};

pub fn handle_show(state: &mut UiState, message: String, kind: NotificationKind) -> UpdateResult {
    let id = state.next_notification_id();
    debug!("Showing {} notification {}", kind, id);
    state.notification = Some(id);

    let timing = &state.settings.timing;
    UpdateResult::actions(vec![
        UpdateAction::ShowNotification { id, message, kind },
        UpdateAction::Schedule {
            delay: timing.notification_slide_in(),
            message: Message::NotificationSlideIn(id),
        },
        UpdateAction::ScheduleIn {
            slot: TimerSlot::NotificationDismiss,
            delay: timing.notification_duration(),
            message: Message::NotificationExpired(id),
        },
    ])
}

pub fn handle_slide_in(state: &mut UiState, id: NotificationId) -> UpdateResult {
    if state.notification == Some(id) {
        UpdateResult::action(UpdateAction::SlideInNotification(id))
    } else {
        UpdateResult::none()
    }
}

/// Start the two-phase removal of notification `id`.
///
/// `manual` dismissals also cancel the pending auto-dismiss timer.
pub fn handle_dismiss(state: &mut UiState, id: NotificationId, manual: bool) -> UpdateResult {
    if state.notification != Some(id) {
        trace!("Notification {} already gone", id);
        return UpdateResult::none();
    }
    state.notification = None;

    let mut actions = Vec::with_capacity(3);
    if manual {
        actions.push(UpdateAction::CancelTimer(TimerSlot::NotificationDismiss));
    }
    actions.push(UpdateAction::HideNotification(id));
    actions.push(UpdateAction::Schedule {
        delay: state.settings.timing.notification_hide(),
        message: Message::NotificationRemove(id),
    });
    UpdateResult::actions(actions)
}
