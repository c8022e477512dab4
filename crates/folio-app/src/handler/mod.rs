//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `navigation`: Section switching and fragment handling
//! - `appearance`: Theme, reveal animation, caret, parallax, mobile menu
//! - `forms`: Field validation, contact and newsletter submission
//! - `notifications`: Notification lifecycle

pub(crate) mod appearance;
pub(crate) mod forms;
pub(crate) mod navigation;
pub(crate) mod notifications;
pub(crate) mod update;


use std::time::Duration;

use folio_core::{
    Error, FieldError, Filter, NotificationId, NotificationKind, SearchQuery, SectionId, Theme,
};

use crate::message::Message;
use crate::transport::ContactSubmission;

// Re-export main entry point
pub use update::update;

/// Timers that are cancelled when re-armed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerSlot {
    /// Clears the theme transition class
    ThemeTransition,
    /// Auto-dismisses the visible notification
    NotificationDismiss,
}

/// Effects the controller performs after update
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Make `id` the only active section/link and replay its reveal
    ActivateSection { id: SectionId, push_fragment: bool },

    // ─────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────
    /// Write theme attributes and icon, optionally persisting the choice
    ApplyTheme { theme: Theme, persist: bool },
    StartThemeTransition,
    ClearThemeTransition,
    /// Mark reveal card `index` as loaded
    RevealCard { index: usize },
    SetCaretVisible(bool),
    ApplyParallax { translate_y: f64 },
    SyncMobileMenu { toggle_visible: bool, sidebar_open: bool },

    // ─────────────────────────────────────────────────────────
    // Filtering and search
    // ─────────────────────────────────────────────────────────
    ApplyProjectFilter(Filter),
    ApplyBlogCategory(Filter),
    ApplySearch(SearchQuery),

    // ─────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────
    MarkFieldInvalid { field_id: String, error: FieldError },
    ClearFieldError { field_id: String },
    SetContactBusy(bool),
    DeliverContact(ContactSubmission),
    ResetForm { form_id: &'static str },

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────
    /// Replace any notification on screen with a new one
    ShowNotification {
        id: NotificationId,
        message: String,
        kind: NotificationKind,
    },
    SlideInNotification(NotificationId),
    HideNotification(NotificationId),
    RemoveNotification(NotificationId),

    // ─────────────────────────────────────────────────────────
    // Timers
    // ─────────────────────────────────────────────────────────
    /// Post `message` after `delay`
    Schedule { delay: Duration, message: Message },
    /// Post `message` after `delay`, cancelling whatever `slot` held before
    ScheduleIn {
        slot: TimerSlot,
        delay: Duration,
        message: Message,
    },
    CancelTimer(TimerSlot),
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Actions for the controller to perform, in order
    pub actions: Vec<UpdateAction>,
    /// Non-fatal condition to report to the host
    pub error: Option<Error>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            ..Self::default()
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self::actions(vec![action])
    }

    pub fn actions(actions: Vec<UpdateAction>) -> Self {
        Self {
            actions,
            ..Self::default()
        }
    }

    pub fn error(error: Error) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }

    pub fn with_action(mut self, action: UpdateAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn with_message(mut self, msg: Message) -> Self {
        self.message = Some(msg);
        self
    }
}
