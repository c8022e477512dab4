//! Action handlers: UpdateAction dispatch against the document and services

use folio_core::prelude::*;
use folio_core::{BlogEntry, FieldError, Filter, NotificationId, NotificationKind, SearchQuery, SectionId, Theme};

use crate::controller::{PageController, Services};
use crate::dom::{markup, DocumentView, Selector};
use crate::handler::UpdateAction;
use crate::preferences::save_theme;

impl<D: DocumentView> PageController<D> {
    /// Execute one action
    pub(crate) fn handle_action(&mut self, action: UpdateAction) -> Result<()> {
        match action {
            UpdateAction::ActivateSection { id, push_fragment } => {
                self.activate_section(&id)?;
                if push_fragment {
                    self.services.location.push_fragment(id.as_str());
                }
                Ok(())
            }

            UpdateAction::ApplyTheme { theme, persist } => self.apply_theme(theme, persist),

            UpdateAction::StartThemeTransition => {
                let body = self.document.body();
                self.document.add_class(&body, markup::THEME_TRANSITION);
                Ok(())
            }

            UpdateAction::ClearThemeTransition => {
                let body = self.document.body();
                self.document.remove_class(&body, markup::THEME_TRANSITION);
                Ok(())
            }

            UpdateAction::RevealCard { index } => {
                // Cards removed since init are not revived
                let card = self
                    .reveal_targets
                    .get(index)
                    .filter(|card| self.document.is_connected(card))
                    .cloned()
                    .ok_or_else(|| {
                        Error::element_not_found(format!(
                            "[{}=\"{}\"]",
                            markup::REVEAL_INDEX_ATTR,
                            index
                        ))
                    })?;
                self.document.add_class(&card, markup::LOADED);
                Ok(())
            }

            UpdateAction::SetCaretVisible(visible) => {
                let opacity = if visible { "1" } else { "0" };
                for caret in self.document.query_all(Selector::Class(markup::CARET)) {
                    self.document.set_style(&caret, "opacity", opacity);
                }
                Ok(())
            }

            UpdateAction::ApplyParallax { translate_y } => {
                let transform = format!("translateY({:.2}px)", translate_y);
                for el in self.document.query_all(Selector::Class(markup::BG_DECORATION)) {
                    self.document.set_style(&el, "transform", &transform);
                }
                Ok(())
            }

            UpdateAction::SyncMobileMenu {
                toggle_visible,
                sidebar_open,
            } => self.sync_mobile_menu(toggle_visible, sidebar_open),

            UpdateAction::ApplyProjectFilter(filter) => {
                self.apply_card_filter(
                    markup::FILTER_BUTTON,
                    markup::FILTER_ATTR,
                    markup::PROJECT_CARD,
                    &filter,
                );
                Ok(())
            }

            UpdateAction::ApplyBlogCategory(filter) => {
                self.apply_card_filter(
                    markup::CATEGORY_BUTTON,
                    markup::CATEGORY_ATTR,
                    markup::BLOG_CARD,
                    &filter,
                );
                Ok(())
            }

            UpdateAction::ApplySearch(query) => {
                self.apply_search(&query);
                Ok(())
            }

            UpdateAction::MarkFieldInvalid { field_id, error } => {
                self.mark_field_invalid(&field_id, error)
            }

            UpdateAction::ClearFieldError { field_id } => self.clear_field_error(&field_id),

            UpdateAction::SetContactBusy(busy) => self.set_contact_busy(busy),

            UpdateAction::DeliverContact(submission) => {
                let Services {
                    transport,
                    scheduler,
                    ..
                } = &mut self.services;
                transport.deliver(submission, scheduler.as_mut());
                Ok(())
            }

            UpdateAction::ResetForm { form_id } => {
                let form = self.require(form_id)?;
                self.document.reset_form(&form);
                Ok(())
            }

            UpdateAction::ShowNotification { id, message, kind } => {
                self.show_notification(id, &message, kind)
            }

            UpdateAction::SlideInNotification(id) => {
                if let Some(el) = self.notification_element(id) {
                    self.document.add_class(&el, markup::SHOW);
                }
                Ok(())
            }

            UpdateAction::HideNotification(id) => {
                if let Some(el) = self.notification_element(id) {
                    self.document.remove_class(&el, markup::SHOW);
                }
                Ok(())
            }

            UpdateAction::RemoveNotification(id) => {
                if let Some(el) = self.notification_element(id) {
                    self.document.remove(&el);
                }
                Ok(())
            }

            UpdateAction::Schedule { delay, message } => {
                self.services.scheduler.schedule(delay, message);
                Ok(())
            }

            UpdateAction::ScheduleIn {
                slot,
                delay,
                message,
            } => {
                if let Some(previous) = self.timers.remove(&slot) {
                    self.services.scheduler.cancel(previous);
                }
                let handle = self.services.scheduler.schedule(delay, message);
                self.timers.insert(slot, handle);
                Ok(())
            }

            UpdateAction::CancelTimer(slot) => {
                if let Some(handle) = self.timers.remove(&slot) {
                    self.services.scheduler.cancel(handle);
                }
                Ok(())
            }
        }
    }

    fn require(&self, id: &str) -> Result<D::Element> {
        self.document
            .element_by_id(id)
            .ok_or_else(|| Error::element_not_found(format!("#{}", id)))
    }

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────

    fn activate_section(&mut self, id: &SectionId) -> Result<()> {
        let doc = &mut self.document;

        // Leave the current markup alone when the target is missing
        let section = doc
            .element_by_id(id.as_str())
            .ok_or_else(|| Error::section_not_found(id.as_str()))?;

        for other in doc.query_all(Selector::Class(markup::SECTION)) {
            doc.remove_class(&other, markup::ACTIVE);
        }
        for link in doc.query_all(Selector::Class(markup::NAV_LINK)) {
            let targets_section = doc
                .attribute(&link, "href")
                .as_deref()
                .and_then(link_fragment)
                == Some(id.as_str());
            doc.toggle_class(&link, markup::ACTIVE, targets_section);
        }

        doc.add_class(&section, markup::ACTIVE);

        // Staggered entrance for the cards of the new section
        let step = self.state.settings.timing.reveal_stagger_ms;
        for (i, card) in doc
            .query_all_in(&section, Selector::Class(markup::CARD))
            .into_iter()
            .enumerate()
        {
            doc.set_style(&card, "animation-delay", &format!("{}ms", i as u64 * step));
            doc.remove_class(&card, markup::FADE_IN);
            doc.add_class(&card, markup::FADE_IN);
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────

    fn apply_theme(&mut self, theme: Theme, persist: bool) -> Result<()> {
        let root = self.document.root();
        self.document
            .set_attribute(&root, markup::THEME_ATTR, theme.as_str());

        let icon = self.document.element_by_id(markup::THEME_ICON_ID);
        if let Some(icon) = &icon {
            self.document.set_attribute(icon, "class", theme.icon_class());
        }

        if persist {
            save_theme(self.services.preferences.as_mut(), theme)?;
        }
        icon.map(|_| ())
            .ok_or_else(|| Error::element_not_found(format!("#{}", markup::THEME_ICON_ID)))
    }

    fn sync_mobile_menu(&mut self, toggle_visible: bool, sidebar_open: bool) -> Result<()> {
        if let Some(toggle) = self.document.element_by_id(markup::MOBILE_TOGGLE_ID) {
            let display = if toggle_visible { "block" } else { "none" };
            self.document.set_style(&toggle, "display", display);
            let icon_class = if sidebar_open {
                markup::MENU_CLOSE_ICON
            } else {
                markup::MENU_OPEN_ICON
            };
            for icon in self.document.query_all_in(&toggle, Selector::Tag("i")) {
                self.document.set_attribute(&icon, "class", icon_class);
            }
        }

        let sidebar = self.require(markup::SIDEBAR_ID)?;
        self.document
            .toggle_class(&sidebar, markup::SIDEBAR_OPEN, sidebar_open);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Filtering and search
    // ─────────────────────────────────────────────────────────

    fn apply_card_filter(&mut self, button_class: &str, button_attr: &str, card_class: &str, filter: &Filter) {
        let doc = &mut self.document;
        for button in doc.query_all(Selector::Class(button_class)) {
            let value = doc.attribute(&button, button_attr).unwrap_or_default();
            doc.toggle_class(&button, markup::ACTIVE, Filter::parse(&value) == *filter);
        }

        let mut shown = 0;
        for card in doc.query_all(Selector::Class(card_class)) {
            let category = doc
                .attribute(&card, markup::CATEGORY_ATTR)
                .unwrap_or_default();
            let visible = filter.matches(&category);
            shown += usize::from(visible);
            set_visible(doc, &card, visible);
        }
        debug!("Filter '{}' on .{}: {} shown", filter, card_class, shown);
    }

    fn apply_search(&mut self, query: &SearchQuery) {
        let doc = &mut self.document;
        for card in doc.query_all(Selector::Class(markup::BLOG_CARD)) {
            let entry = blog_entry(doc, &card);
            set_visible(doc, &card, query.matches(&entry));
        }
    }

    // ─────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────

    fn mark_field_invalid(&mut self, field_id: &str, error: FieldError) -> Result<()> {
        let field = self.require(field_id)?;
        let doc = &mut self.document;
        doc.add_class(&field, markup::FIELD_INVALID);

        match error_element(doc, &field) {
            Some(existing) => doc.set_text(&existing, error.message()),
            None => {
                let message = doc.create_element("div")?;
                doc.set_attribute(&message, "class", markup::FIELD_ERROR);
                doc.set_text(&message, error.message());
                doc.insert_after(&field, &message);
            }
        }
        Ok(())
    }

    fn clear_field_error(&mut self, field_id: &str) -> Result<()> {
        let field = self.require(field_id)?;
        let doc = &mut self.document;
        doc.remove_class(&field, markup::FIELD_INVALID);
        if let Some(existing) = error_element(doc, &field) {
            doc.remove(&existing);
        }
        Ok(())
    }

    fn set_contact_busy(&mut self, busy: bool) -> Result<()> {
        let button = self.require(markup::CONTACT_SUBMIT_ID)?;
        let doc = &mut self.document;
        if busy {
            if doc.attribute(&button, markup::LABEL_ATTR).is_none() {
                let label = doc.text_content(&button);
                doc.set_attribute(&button, markup::LABEL_ATTR, &label);
            }
            doc.set_attribute(&button, "disabled", "");
            doc.add_class(&button, markup::LOADING);
            doc.set_text(&button, &self.state.settings.messages.sending_label);
        } else {
            doc.remove_attribute(&button, "disabled");
            doc.remove_class(&button, markup::LOADING);
            if let Some(label) = doc.attribute(&button, markup::LABEL_ATTR) {
                doc.set_text(&button, &label);
                doc.remove_attribute(&button, markup::LABEL_ATTR);
            }
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────

    fn show_notification(
        &mut self,
        id: NotificationId,
        message: &str,
        kind: NotificationKind,
    ) -> Result<()> {
        let doc = &mut self.document;
        for old in doc.query_all(Selector::Class(markup::NOTIFICATION)) {
            doc.remove(&old);
        }

        let node = doc.create_element("div")?;
        doc.set_attribute(&node, "id", &id.dom_id());
        doc.set_attribute(
            &node,
            "class",
            &format!("{} {}-{}", markup::NOTIFICATION, markup::NOTIFICATION, kind),
        );

        let content = doc.create_element("div")?;
        doc.set_attribute(&content, "class", "notification-content");
        let icon = doc.create_element("i")?;
        doc.set_attribute(&icon, "class", kind.icon_class());
        let text = doc.create_element("span")?;
        doc.set_text(&text, message);
        doc.append_child(&content, &icon);
        doc.append_child(&content, &text);

        let close = doc.create_element("button")?;
        doc.set_attribute(&close, "class", markup::NOTIFICATION_CLOSE);
        doc.set_attribute(&close, markup::NOTIFICATION_ATTR, &id.0.to_string());
        doc.set_attribute(&close, "aria-label", "Dismiss notification");
        let close_icon = doc.create_element("i")?;
        doc.set_attribute(&close_icon, "class", markup::MENU_CLOSE_ICON);
        doc.append_child(&close, &close_icon);

        doc.append_child(&node, &content);
        doc.append_child(&node, &close);
        let body = doc.body();
        doc.append_child(&body, &node);
        Ok(())
    }

    /// The notification node, if it is still in the document.
    fn notification_element(&self, id: NotificationId) -> Option<D::Element> {
        let el = self.document.element_by_id(&id.dom_id());
        if el.is_none() {
            trace!("Notification {} no longer attached", id);
        }
        el
    }
}

/// Fragment a navigation link points at (`#about`, `/index.html#about`).
fn link_fragment(href: &str) -> Option<&str> {
    href.split_once('#').map(|(_, fragment)| fragment)
}

fn set_visible<D: DocumentView>(doc: &mut D, el: &D::Element, visible: bool) {
    if visible {
        doc.remove_style(el, "display");
    } else {
        doc.set_style(el, "display", "none");
    }
}

/// Inline error element directly following `field`, if any.
fn error_element<D: DocumentView>(doc: &D, field: &D::Element) -> Option<D::Element> {
    doc.next_element_sibling(field)
        .filter(|next| doc.has_class(next, markup::FIELD_ERROR))
}

fn blog_entry<D: DocumentView>(doc: &D, card: &D::Element) -> BlogEntry {
    let first_text = |class: &str| {
        doc.query_all_in(card, Selector::Class(class))
            .first()
            .map(|el| doc.text_content(el))
            .unwrap_or_default()
    };
    BlogEntry {
        title: first_text(markup::BLOG_TITLE),
        excerpt: first_text(markup::BLOG_EXCERPT),
        tags: doc
            .query_all_in(card, Selector::Class(markup::TAG))
            .iter()
            .map(|tag| doc.text_content(tag))
            .collect(),
    }
}
