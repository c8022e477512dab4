//! Message types for the page controller (TEA pattern)

use folio_core::{Error, FieldSpec, Filter, NotificationId, NotificationKind, SectionId};

use crate::transport::ContactSubmission;

/// All possible messages/actions in the page
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Navigation link clicked
    NavigateTo(SectionId),
    /// The address fragment changed underneath us (back/forward)
    FragmentChanged(String),

    // ─────────────────────────────────────────────────────────
    // Theme
    // ─────────────────────────────────────────────────────────
    ToggleTheme,
    /// The transient transition class may be cleared
    ThemeTransitionElapsed,

    // ─────────────────────────────────────────────────────────
    // Reveal animation
    // ─────────────────────────────────────────────────────────
    /// The observer saw card `index` enter the viewport
    CardEnteredView { index: usize },
    /// Periodic caret flip
    CaretBlink,

    // ─────────────────────────────────────────────────────────
    // Filtering and search
    // ─────────────────────────────────────────────────────────
    FilterProjects(Filter),
    FilterBlog(Filter),
    SearchBlog(String),

    // ─────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────
    FieldInput { field: FieldSpec, value: String },
    FieldBlur { field: FieldSpec, value: String },
    ContactSubmit(ContactSubmission),
    /// Outcome reported by the contact transport
    ContactDelivered(Result<(), Error>),
    NewsletterSubmit { email: String },

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────
    ShowNotification {
        message: String,
        kind: NotificationKind,
    },
    NotificationSlideIn(NotificationId),
    /// Close control clicked
    DismissNotification(NotificationId),
    /// Display time ran out
    NotificationExpired(NotificationId),
    /// Slide-out finished; detach the node
    NotificationRemove(NotificationId),

    // ─────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────
    Resize { width: u32 },
    ToggleMobileMenu,
    Scroll { offset: f64 },
}

impl Message {
    pub fn navigate(id: impl Into<String>) -> Self {
        Message::NavigateTo(SectionId::new(id))
    }

    pub fn notify(message: impl Into<String>, kind: NotificationKind) -> Self {
        Message::ShowNotification {
            message: message.into(),
            kind,
        }
    }
}
