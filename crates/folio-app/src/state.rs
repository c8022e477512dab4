//! Page state (Model in TEA pattern)

use std::collections::BTreeSet;

use folio_core::{Filter, NotificationId, SearchQuery, SectionId, Theme};

use crate::config::Settings;

/// Contact form lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactPhase {
    #[default]
    Idle,
    /// Handed to the transport, waiting for `ContactDelivered`
    Sending,
}

/// Complete UI state, owned by the controller for one page load
#[derive(Debug, Clone)]
pub struct UiState {
    pub settings: Settings,

    pub current_section: SectionId,
    /// Sections present at load time; never changes afterwards
    pub sections: BTreeSet<SectionId>,
    pub theme: Theme,

    pub project_filter: Filter,
    pub blog_category: Filter,
    pub search: SearchQuery,

    pub viewport_width: u32,
    pub sidebar_open: bool,

    pub caret_visible: bool,
    /// Reveal cards already marked loaded
    pub revealed: BTreeSet<usize>,

    /// Ids of fields currently showing an inline error
    pub invalid_fields: BTreeSet<String>,
    pub contact: ContactPhase,

    /// Notification currently on screen (not yet sliding out)
    pub notification: Option<NotificationId>,
    next_notification: u64,
}

impl UiState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            current_section: SectionId::home(),
            sections: BTreeSet::new(),
            theme: Theme::default(),
            project_filter: Filter::All,
            blog_category: Filter::All,
            search: SearchQuery::default(),
            viewport_width: 0,
            sidebar_open: false,
            caret_visible: true,
            revealed: BTreeSet::new(),
            invalid_fields: BTreeSet::new(),
            contact: ContactPhase::Idle,
            notification: None,
            next_notification: 1,
        }
    }

    pub fn has_section(&self, id: &SectionId) -> bool {
        self.sections.contains(id)
    }

    /// Whether the viewport is at or below the mobile breakpoint.
    pub fn is_narrow(&self) -> bool {
        self.settings.layout.is_narrow(self.viewport_width)
    }

    pub fn is_field_invalid(&self, id: &str) -> bool {
        self.invalid_fields.contains(id)
    }

    /// Allocate the id for a new notification.
    pub fn next_notification_id(&mut self) -> NotificationId {
        let id = NotificationId(self.next_notification);
        self.next_notification += 1;
        id
    }

    /// Section to enter at load: the fragment's section if it exists,
    /// otherwise `home`, or `None` when neither is in the section set.
    pub fn initial_section(&self, fragment: Option<&str>) -> Option<SectionId> {
        fragment
            .and_then(SectionId::from_fragment)
            .into_iter()
            .chain(Some(SectionId::home()))
            .find(|id| self.has_section(id))
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
