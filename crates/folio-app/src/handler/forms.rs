//! Form handlers: field validation, contact and newsletter submission

use folio_core::prelude::*;
use folio_core::{validate_field, FieldSpec, NotificationKind};

use crate::dom::markup;
use crate::message::Message;
use crate::state::{ContactPhase, UiState};
use crate::transport::ContactSubmission;

use super::{UpdateAction, UpdateResult};

/// Validate one field and produce the matching mark/clear action.
///
/// Returns the result alongside whether the field passed.
pub fn validate(state: &mut UiState, field: &FieldSpec, value: &str) -> (UpdateResult, bool) {
    match validate_field(field, value) {
        Ok(()) => {
            state.invalid_fields.remove(&field.id);
            let action = UpdateAction::ClearFieldError {
                field_id: field.id.clone(),
            };
            (UpdateResult::action(action), true)
        }
        Err(error) => {
            trace!("Field '{}' invalid: {}", field.id, error);
            state.invalid_fields.insert(field.id.clone());
            let action = UpdateAction::MarkFieldInvalid {
                field_id: field.id.clone(),
                error,
            };
            (UpdateResult::action(action), false)
        }
    }
}

/// Typing only re-validates a field that is already marked invalid.
pub fn handle_field_input(state: &mut UiState, field: &FieldSpec, value: &str) -> UpdateResult {
    if state.is_field_invalid(&field.id) {
        validate(state, field, value).0
    } else {
        UpdateResult::none()
    }
}

pub fn handle_contact_submit(state: &mut UiState, submission: ContactSubmission) -> UpdateResult {
    if state.contact == ContactPhase::Sending {
        debug!("Contact message already in flight, ignoring submit");
        return UpdateResult::none();
    }

    let mut actions = Vec::with_capacity(submission.fields.len() + 2);
    let mut all_valid = true;
    for field in &submission.fields {
        let (result, valid) = validate(state, &field.spec, &field.value);
        actions.extend(result.actions);
        all_valid &= valid;
    }

    if !all_valid {
        info!("Contact form has invalid fields, not sending");
        return UpdateResult::actions(actions);
    }

    state.contact = ContactPhase::Sending;
    actions.push(UpdateAction::SetContactBusy(true));
    actions.push(UpdateAction::DeliverContact(submission));
    UpdateResult::actions(actions)
}

pub fn handle_contact_delivered(state: &mut UiState, outcome: Result<()>) -> UpdateResult {
    if state.contact != ContactPhase::Sending {
        warn!("Delivery outcome arrived with no contact message in flight");
        return UpdateResult::none();
    }
    state.contact = ContactPhase::Idle;

    match outcome {
        Ok(()) => {
            info!("Contact message delivered");
            let notice = Message::notify(
                state.settings.messages.contact_success.clone(),
                NotificationKind::Success,
            );
            UpdateResult::actions(vec![
                UpdateAction::SetContactBusy(false),
                UpdateAction::ResetForm {
                    form_id: markup::CONTACT_FORM_ID,
                },
            ])
            .with_message(notice)
        }
        Err(e) => {
            warn!("Contact delivery failed: {}", e);
            let notice = Message::notify(
                state.settings.messages.contact_failure.clone(),
                NotificationKind::Error,
            );
            UpdateResult {
                message: Some(notice),
                actions: vec![UpdateAction::SetContactBusy(false)],
                error: Some(e),
            }
        }
    }
}

pub fn handle_newsletter_submit(state: &mut UiState, email: &str) -> UpdateResult {
    let field = FieldSpec::required_email(markup::NEWSLETTER_EMAIL_ID);
    if validate_field(&field, email).is_ok() {
        info!("Newsletter subscription accepted");
        let notice = Message::notify(
            state.settings.messages.newsletter_success.clone(),
            NotificationKind::Success,
        );
        let mut result = UpdateResult::action(UpdateAction::ResetForm {
            form_id: markup::NEWSLETTER_FORM_ID,
        });
        if state.invalid_fields.remove(&field.id) {
            result = result.with_action(UpdateAction::ClearFieldError { field_id: field.id });
        }
        result.with_message(notice)
    } else {
        debug!("Newsletter email rejected");
        UpdateResult::message(Message::notify(
            state.settings.messages.newsletter_invalid.clone(),
            NotificationKind::Error,
        ))
    }
}
