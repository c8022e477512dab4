//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::UiState;

use super::{appearance, forms, navigation, notifications, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and the actions to perform
pub fn update(state: &mut UiState, message: Message) -> UpdateResult {
    match message {
        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::NavigateTo(id) => navigation::handle_navigate(state, id),
        Message::FragmentChanged(fragment) => {
            navigation::handle_fragment_changed(state, &fragment)
        }

        // ─────────────────────────────────────────────────────────
        // Appearance
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => appearance::handle_toggle_theme(state),
        Message::ThemeTransitionElapsed => {
            UpdateResult::action(UpdateAction::ClearThemeTransition)
        }
        Message::CardEnteredView { index } => appearance::handle_card_entered(state, index),
        Message::CaretBlink => appearance::handle_caret_blink(state),
        Message::Scroll { offset } => appearance::handle_scroll(state, offset),
        Message::Resize { width } => appearance::handle_resize(state, width),
        Message::ToggleMobileMenu => appearance::handle_toggle_menu(state),

        // ─────────────────────────────────────────────────────────
        // Filtering and search
        // ─────────────────────────────────────────────────────────
        Message::FilterProjects(filter) => {
            state.project_filter = filter.clone();
            UpdateResult::action(UpdateAction::ApplyProjectFilter(filter))
        }
        Message::FilterBlog(filter) => {
            state.blog_category = filter.clone();
            UpdateResult::action(UpdateAction::ApplyBlogCategory(filter))
        }
        Message::SearchBlog(term) => {
            let query = folio_core::SearchQuery::new(&term);
            state.search = query.clone();
            UpdateResult::action(UpdateAction::ApplySearch(query))
        }

        // ─────────────────────────────────────────────────────────
        // Forms
        // ─────────────────────────────────────────────────────────
        Message::FieldInput { field, value } => forms::handle_field_input(state, &field, &value),
        Message::FieldBlur { field, value } => forms::validate(state, &field, &value).0,
        Message::ContactSubmit(submission) => forms::handle_contact_submit(state, submission),
        Message::ContactDelivered(outcome) => forms::handle_contact_delivered(state, outcome),
        Message::NewsletterSubmit { email } => forms::handle_newsletter_submit(state, &email),

        // ─────────────────────────────────────────────────────────
        // Notifications
        // ─────────────────────────────────────────────────────────
        Message::ShowNotification { message, kind } => {
            notifications::handle_show(state, message, kind)
        }
        Message::NotificationSlideIn(id) => notifications::handle_slide_in(state, id),
        Message::DismissNotification(id) => notifications::handle_dismiss(state, id, true),
        Message::NotificationExpired(id) => notifications::handle_dismiss(state, id, false),
        Message::NotificationRemove(id) => {
            UpdateResult::action(UpdateAction::RemoveNotification(id))
        }
    }
}
