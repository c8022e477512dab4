//! Page controller - owns the state and drives the TEA loop
//!
//! Hosts create one [`PageController`] per page load, call [`PageController::init`]
//! once the markup exists, and feed every DOM event through
//! [`PageController::process_message`].

use std::collections::HashMap;

use folio_core::prelude::*;
use folio_core::SectionId;

use crate::config::Settings;
use crate::dom::{markup, DocumentView, Selector};
use crate::handler::{self, TimerSlot, UpdateAction};
use crate::location::Location;
use crate::message::Message;
use crate::preferences::{load_theme, PreferenceStore};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::state::UiState;
use crate::transport::{ContactTransport, SimulatedTransport};

/// Host capabilities the controller depends on
pub struct Services {
    pub scheduler: Box<dyn Scheduler>,
    pub preferences: Box<dyn PreferenceStore>,
    pub location: Box<dyn Location>,
    pub transport: Box<dyn ContactTransport>,
}

impl Services {
    /// Services with the simulated contact transport.
    pub fn simulated(
        scheduler: impl Scheduler + 'static,
        preferences: impl PreferenceStore + 'static,
        location: impl Location + 'static,
        settings: &Settings,
    ) -> Self {
        Self {
            scheduler: Box::new(scheduler),
            preferences: Box::new(preferences),
            location: Box::new(location),
            transport: Box::new(SimulatedTransport::new(settings.timing.contact_delay())),
        }
    }

    /// Replace the contact transport.
    pub fn with_transport(mut self, transport: impl ContactTransport + 'static) -> Self {
        self.transport = Box::new(transport);
        self
    }
}

/// Controller for one page load
pub struct PageController<D: DocumentView> {
    pub(crate) state: UiState,
    pub(crate) document: D,
    pub(crate) services: Services,
    pub(crate) timers: HashMap<TimerSlot, TimerHandle>,
    /// Cards observed by the reveal animation, by `data-reveal-index`
    pub(crate) reveal_targets: Vec<D::Element>,
}

impl<D: DocumentView> PageController<D> {
    pub fn new(document: D, settings: Settings, services: Services) -> Self {
        Self {
            state: UiState::new(settings),
            document,
            services,
            timers: HashMap::new(),
            reveal_targets: Vec::new(),
        }
    }

    /// Wire the controller to the loaded document.
    ///
    /// Returns the non-fatal problems found along the way; a missing element
    /// disables the behaviour that needs it and nothing else.
    pub fn init(&mut self, viewport_width: u32) -> Vec<Error> {
        let mut reports = Vec::new();

        // Theme
        let (theme, stored) = load_theme(self.services.preferences.as_ref());
        self.state.theme = theme;
        let persist = stored.as_deref() != Some(theme.as_str());
        info!("Initial theme: {} (stored: {:?})", theme, stored);
        self.run_action(UpdateAction::ApplyTheme { theme, persist }, &mut reports);

        // Sections are fixed from here on
        let sections: Vec<_> = self
            .document
            .query_all(Selector::Class(markup::SECTION))
            .iter()
            .filter_map(|el| self.document.attribute(el, "id"))
            .filter_map(|id| SectionId::from_fragment(&id))
            .collect();
        if sections.is_empty() {
            warn!("Document has no sections; navigation disabled");
            reports.push(Error::NoSections);
        }
        let first_section = sections.first().cloned();
        self.state.sections = sections.into_iter().collect();

        // Reveal targets
        self.reveal_targets = self.document.query_all(Selector::Class(markup::CARD));
        for (index, card) in self.reveal_targets.iter().enumerate() {
            self.document
                .set_attribute(card, markup::REVEAL_INDEX_ATTR, &index.to_string());
        }
        debug!("Observing {} reveal cards", self.reveal_targets.len());

        if let Err(e) = self.insert_mobile_toggle() {
            warn!("Mobile menu toggle unavailable: {}", e);
            reports.push(e);
        }
        reports.extend(self.process_message(Message::Resize {
            width: viewport_width,
        }));

        if !self
            .document
            .query_all(Selector::Class(markup::CARET))
            .is_empty()
        {
            let blink = self.state.settings.timing.caret_blink();
            self.services.scheduler.schedule(blink, Message::CaretBlink);
        }

        // Initial section
        if let Some(first) = first_section {
            let fragment = self.services.location.fragment();
            let initial = match self.state.initial_section(fragment.as_deref()) {
                Some(id) => id,
                None => {
                    warn!("No '{}' section, starting at '{}'", SectionId::home(), first);
                    reports.push(Error::section_not_found(SectionId::home().as_str()));
                    first
                }
            };
            info!("Initial section: {}", initial);
            let result = handler::navigation::enter_section(&mut self.state, initial, false);
            for action in result.actions {
                self.run_action(action, &mut reports);
            }
        }

        reports
    }

    /// Process a message through the TEA update function
    ///
    /// Returns the non-fatal conditions reported while handling it.
    pub fn process_message(&mut self, message: Message) -> Vec<Error> {
        let mut reports = Vec::new();

        let mut msg = Some(message);
        while let Some(m) = msg {
            trace!("Processing {:?}", m);
            let result = handler::update(&mut self.state, m);

            if let Some(error) = result.error {
                reports.push(error);
            }
            for action in result.actions {
                self.run_action(action, &mut reports);
            }

            // Continue with follow-up message
            msg = result.message;
        }

        reports
    }

    fn run_action(&mut self, action: UpdateAction, reports: &mut Vec<Error>) {
        if let Err(e) = self.handle_action(action) {
            warn!("Action failed: {}", e);
            reports.push(e);
        }
    }

    fn insert_mobile_toggle(&mut self) -> Result<()> {
        if self
            .document
            .element_by_id(markup::MOBILE_TOGGLE_ID)
            .is_some()
        {
            return Ok(());
        }
        let doc = &mut self.document;
        let button = doc.create_element("button")?;
        doc.set_attribute(&button, "id", markup::MOBILE_TOGGLE_ID);
        doc.set_attribute(&button, "class", "mobile-menu-toggle");
        doc.set_attribute(&button, "aria-label", "Toggle navigation");
        let icon = doc.create_element("i")?;
        doc.set_attribute(&icon, "class", markup::MENU_OPEN_ICON);
        doc.append_child(&button, &icon);
        let body = doc.body();
        doc.append_child(&body, &button);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }

    /// Elements the host should observe for the reveal animation, indexed
    /// like `Message::CardEnteredView`.
    pub fn reveal_targets(&self) -> &[D::Element] {
        &self.reveal_targets
    }
}

#[cfg(test)]
mod tests;
