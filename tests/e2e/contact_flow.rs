//! Contact and newsletter flows with simulated delivery

use folio::app::test_utils::{contact_specs, contact_submission, TestPage};
use folio::app::{ContactPhase, DocumentView, Message};

fn fill_contact_form(page: &mut TestPage, name: &str, email: &str, message: &str) {
    for (id, value) in [
        ("contact-name", name),
        ("contact-email", email),
        ("contact-message", message),
    ] {
        let field = page.el(id);
        page.doc_mut().set_value(field, value);
    }
}

#[test]
fn test_fix_errors_then_send() {
    let mut page = TestPage::new();
    fill_contact_form(&mut page, "Ada", "ada@", "Hello");

    page.send(Message::ContactSubmit(contact_submission("Ada", "ada@", "Hello")));
    assert!(page.has_class("contact-email", "error"));
    assert_eq!(page.controller.state().contact, ContactPhase::Idle);

    let [_, email, _] = contact_specs();
    page.send(Message::FieldInput {
        field: email,
        value: "ada@example.com".into(),
    });
    assert!(!page.has_class("contact-email", "error"));

    page.send(Message::ContactSubmit(contact_submission(
        "Ada",
        "ada@example.com",
        "Hello",
    )));
    assert!(page.has_class("contact-submit", "loading"));

    page.advance_ms(2000);
    assert!(!page.has_class("contact-submit", "loading"));
    let name = page.el("contact-name");
    assert_eq!(page.doc().value(name), "");

    // Success notification slides in, then leaves
    page.advance_ms(100);
    assert!(page.has_class("notification-1", "show"));
    page.advance_ms(5300);
    assert!(page.notifications().is_empty());
}

#[test]
fn test_notification_close_during_delivery() {
    let mut page = TestPage::new();
    page.send(Message::NewsletterSubmit {
        email: "nope".into(),
    });
    assert_eq!(page.notifications().len(), 1);

    page.send(Message::ContactSubmit(contact_submission(
        "Ada",
        "ada@example.com",
        "Hello",
    )));
    page.advance_ms(150);
    page.send(Message::DismissNotification(folio::core::NotificationId(1)));
    page.advance_ms(300);
    assert!(page.notifications().is_empty());

    page.advance_ms(1550);
    let notes = page.notifications();
    assert_eq!(notes.len(), 1);
    assert!(page.doc().has_class(&notes[0], "notification-success"));
}

#[test]
fn test_newsletter_then_contact_replace_notifications() {
    let mut page = TestPage::new();

    page.send(Message::NewsletterSubmit {
        email: "reader@example.com".into(),
    });
    page.send(Message::NewsletterSubmit {
        email: "bad".into(),
    });

    let notes = page.notifications();
    assert_eq!(notes.len(), 1);
    assert!(page.doc().has_class(&notes[0], "notification-error"));
    assert_eq!(
        page.doc().attribute(&notes[0], "id").as_deref(),
        Some("notification-2")
    );
}
