//! Controller tests: messages and timers driven against the fixture page

use std::time::Duration;

use folio_core::{Error, FieldSpec, Filter, NotificationId, NotificationKind, Theme};

use super::*;
use crate::location::MemoryLocation;
use crate::preferences::{MockPreferenceStore, PreferenceStore};
use crate::scheduler::{Scheduler, VirtualScheduler};
use crate::state::ContactPhase;
use crate::test_utils::{
    contact_submission, fixture_page, MemoryDocument, PageOptions, TestPage,
};
use crate::transport::{ContactSubmission, ContactTransport, SimulatedTransport};

fn narrow() -> PageOptions {
    PageOptions {
        viewport_width: 800,
        ..PageOptions::default()
    }
}

/// Fails every delivery after a short delay
struct OfflineTransport;

impl ContactTransport for OfflineTransport {
    fn deliver(&mut self, _submission: ContactSubmission, scheduler: &mut dyn Scheduler) {
        scheduler.schedule(
            Duration::from_millis(10),
            Message::ContactDelivered(Err(Error::transport("offline"))),
        );
    }
}

// ─────────────────────────────────────────────────────────
// Init
// ─────────────────────────────────────────────────────────

#[test]
fn test_init_defaults() {
    let page = TestPage::new();

    assert!(page.init_reports.is_empty(), "{:?}", page.init_reports);
    assert_eq!(page.active_sections(), vec!["home"]);
    assert_eq!(page.active_links(), vec!["#home"]);
    assert!(page.location.history().is_empty());

    let root = page.doc().root();
    assert_eq!(page.doc().attribute(&root, "data-theme").as_deref(), Some("dark"));
    assert_eq!(page.prefs.get("theme").as_deref(), Some("dark"));
    assert!(page.has_class("theme-icon", "fa-sun"));
}

#[test]
fn test_init_numbers_reveal_cards() {
    let page = TestPage::new();

    let targets = page.controller.reveal_targets();
    assert_eq!(targets.len(), 9);
    assert_eq!(
        page.doc().attribute(&targets[3], "data-reveal-index").as_deref(),
        Some("3")
    );
}

#[test]
fn test_init_restores_stored_theme_without_rewriting() {
    let mut prefs = MockPreferenceStore::new();
    prefs
        .expect_get()
        .returning(|_| Some("light".to_string()));
    prefs.expect_set().never();

    let clock = VirtualScheduler::new();
    let services = Services {
        scheduler: Box::new(clock),
        preferences: Box::new(prefs),
        location: Box::new(MemoryLocation::new()),
        transport: Box::new(SimulatedTransport::default()),
    };
    let mut controller = PageController::new(
        crate::test_utils::fixture_page(),
        Settings::default(),
        services,
    );
    let reports = controller.init(1280);

    assert!(reports.is_empty());
    assert_eq!(controller.state().theme, Theme::Light);
    let root = controller.document().root();
    assert_eq!(
        controller.document().attribute(&root, "data-theme").as_deref(),
        Some("light")
    );
}

#[test]
fn test_init_replaces_unrecognised_stored_theme() {
    let page = TestPage::boot(PageOptions {
        stored_theme: Some("purple".into()),
        ..PageOptions::default()
    });

    assert_eq!(page.controller.state().theme, Theme::Dark);
    assert_eq!(page.prefs.get("theme").as_deref(), Some("dark"));
}

#[test]
fn test_init_enters_fragment_section() {
    let page = TestPage::boot(PageOptions {
        fragment: Some("#blog".into()),
        ..PageOptions::default()
    });

    assert_eq!(page.active_sections(), vec!["blog"]);
    assert_eq!(page.active_links(), vec!["#blog"]);
    // Entering from the address bar does not add history
    assert_eq!(page.location.history(), vec!["blog"]);
}

#[test]
fn test_init_ignores_unknown_fragment() {
    let page = TestPage::boot(PageOptions {
        fragment: Some("#missing".into()),
        ..PageOptions::default()
    });

    assert_eq!(page.active_sections(), vec!["home"]);
}

#[test]
fn test_init_without_home_starts_at_first_section() {
    let mut doc = fixture_page();
    let home = doc.element_by_id("home").unwrap();
    doc.remove(&home);

    let page = TestPage::boot_document(doc, PageOptions::default());

    assert_eq!(page.init_reports, vec![Error::section_not_found("home")]);
    assert_eq!(page.controller.state().current_section.as_str(), "about");
    assert!(!page.controller.state().sections.contains(&SectionId::home()));
    assert_eq!(page.active_sections(), vec!["about"]);
    assert_eq!(page.active_links(), vec!["#about"]);
}

#[test]
fn test_init_without_home_still_honours_fragment() {
    let mut doc = fixture_page();
    let home = doc.element_by_id("home").unwrap();
    doc.remove(&home);

    let page = TestPage::boot_document(
        doc,
        PageOptions {
            fragment: Some("#contact".into()),
            ..PageOptions::default()
        },
    );

    assert!(page.init_reports.is_empty(), "{:?}", page.init_reports);
    assert_eq!(page.active_sections(), vec!["contact"]);
}

#[test]
fn test_missing_section_element_leaves_markup_untouched() {
    let mut page = TestPage::new();
    let blog = page.el("blog");
    page.doc_mut().remove(&blog);

    let reports = page.send(Message::navigate("blog"));

    assert_eq!(reports, vec![Error::section_not_found("blog")]);
    assert_eq!(page.active_sections(), vec!["home"]);
    assert_eq!(page.active_links(), vec!["#home"]);
}

#[test]
fn test_init_inserts_mobile_toggle_once() {
    let mut page = TestPage::new();
    let toggle = page.el("mobile-menu-toggle");
    assert_eq!(page.doc().style(toggle, "display"), Some("none"));

    page.controller.init(1280);

    let toggles = page
        .doc()
        .query_all(Selector::Class("mobile-menu-toggle"));
    assert_eq!(toggles.len(), 1);
}

#[test]
fn test_init_on_empty_document_reports_and_survives() {
    let mut page = TestPage::boot_document(MemoryDocument::new(), PageOptions::default());

    assert!(page.init_reports.contains(&Error::NoSections));
    assert!(page
        .init_reports
        .contains(&Error::element_not_found("#theme-icon")));

    let reports = page.send(Message::navigate("home"));
    assert_eq!(reports, vec![Error::section_not_found("home")]);

    // Theme still flips even without an icon
    page.send(Message::ToggleTheme);
    assert_eq!(page.controller.state().theme, Theme::Light);
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_navigation_leaves_one_active_section_and_link() {
    let mut page = TestPage::new();

    let sections: Vec<SectionId> = page.controller.state().sections.iter().cloned().collect();
    assert_eq!(sections.len(), 5);

    for id in &sections {
        let reports = page.send(Message::NavigateTo(id.clone()));
        assert!(reports.is_empty(), "{}: {:?}", id, reports);
        assert_eq!(page.active_sections(), vec![id.as_str()]);
        assert_eq!(page.active_links(), vec![id.href()]);
        assert_eq!(&page.controller.state().current_section, id);
    }

    let pushed: Vec<String> = sections.iter().map(|id| id.to_string()).collect();
    assert_eq!(page.location.history(), pushed);
}

#[test]
fn test_navigation_is_idempotent() {
    let mut page = TestPage::new();
    page.send(Message::navigate("about"));
    let once = page.doc().outer_html(page.el("about"));

    page.send(Message::navigate("about"));

    assert_eq!(page.doc().outer_html(page.el("about")), once);
    assert_eq!(page.active_sections(), vec!["about"]);
}

#[test]
fn test_navigation_staggers_section_cards() {
    let mut page = TestPage::new();
    page.send(Message::navigate("projects"));

    let delays: Vec<_> = page
        .displayed("project-card")
        .iter()
        .map(|id| {
            let el = page.el(id);
            page.doc().style(el, "animation-delay").map(str::to_string)
        })
        .collect();
    assert_eq!(
        delays,
        vec![
            Some("0ms".to_string()),
            Some("100ms".to_string()),
            Some("200ms".to_string())
        ]
    );
    assert!(page.has_class("project-shop", "fade-in-up"));
}

#[test]
fn test_navigation_to_unknown_section_changes_nothing() {
    let mut page = TestPage::new();
    page.send(Message::navigate("about"));

    let reports = page.send(Message::navigate("missing"));

    assert_eq!(reports, vec![Error::section_not_found("missing")]);
    assert_eq!(page.active_sections(), vec!["about"]);
    assert_eq!(page.location.history(), vec!["about"]);
}

#[test]
fn test_fragment_change_follows_history() {
    let mut page = TestPage::new();
    page.send(Message::navigate("about"));
    page.send(Message::navigate("blog"));

    page.send(Message::FragmentChanged("#about".into()));

    assert_eq!(page.active_sections(), vec!["about"]);
    assert_eq!(page.location.history(), vec!["about", "blog"]);
}

#[test]
fn test_link_click_closes_mobile_sidebar() {
    let mut page = TestPage::boot(narrow());
    page.send(Message::ToggleMobileMenu);
    assert!(page.has_class("sidebar", "open"));

    page.send(Message::navigate("contact"));

    assert!(!page.has_class("sidebar", "open"));
    assert_eq!(page.active_sections(), vec!["contact"]);
}

// ─────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_theme_updates_document_and_storage() {
    let mut page = TestPage::new();

    page.send(Message::ToggleTheme);

    let root = page.doc().root();
    assert_eq!(page.doc().attribute(&root, "data-theme").as_deref(), Some("light"));
    assert_eq!(page.prefs.get("theme").as_deref(), Some("light"));
    assert!(page.has_class("theme-icon", "fa-moon"));

    let body = page.doc().body();
    assert!(page.doc().has_class(&body, "theme-transition"));
    page.advance_ms(300);
    assert!(!page.doc().has_class(&body, "theme-transition"));
}

#[test]
fn test_toggle_theme_twice_restores_everything() {
    let mut page = TestPage::new();
    let root = page.doc().root();

    page.send(Message::ToggleTheme);
    page.send(Message::ToggleTheme);

    assert_eq!(page.doc().attribute(&root, "data-theme").as_deref(), Some("dark"));
    assert_eq!(page.prefs.get("theme").as_deref(), Some("dark"));
    assert!(page.has_class("theme-icon", "fa-sun"));
}

#[test]
fn test_rapid_toggles_restart_transition_timer() {
    let mut page = TestPage::new();
    let body = page.doc().body();

    page.send(Message::ToggleTheme);
    page.advance_ms(200);
    page.send(Message::ToggleTheme);
    page.advance_ms(150);
    assert!(page.doc().has_class(&body, "theme-transition"));

    page.advance_ms(150);
    assert!(!page.doc().has_class(&body, "theme-transition"));
}

#[test]
fn test_storage_failure_is_reported_but_theme_applies() {
    let mut prefs = MockPreferenceStore::new();
    prefs.expect_get().returning(|_| Some("dark".to_string()));
    prefs
        .expect_set()
        .times(1)
        .returning(|key, value| {
            assert_eq!(key, "theme");
            assert_eq!(value, "light");
            Err(Error::storage("quota exceeded"))
        });

    let services = Services {
        scheduler: Box::new(VirtualScheduler::new()),
        preferences: Box::new(prefs),
        location: Box::new(MemoryLocation::new()),
        transport: Box::new(SimulatedTransport::default()),
    };
    let mut controller = PageController::new(
        crate::test_utils::fixture_page(),
        Settings::default(),
        services,
    );
    controller.init(1280);

    let reports = controller.process_message(Message::ToggleTheme);

    assert_eq!(reports, vec![Error::storage("quota exceeded")]);
    let doc = controller.document();
    let root = doc.root();
    assert_eq!(doc.attribute(&root, "data-theme").as_deref(), Some("light"));
    let icon = doc.element_by_id("theme-icon").expect("icon");
    assert_eq!(doc.attribute(&icon, "class").as_deref(), Some("fas fa-moon"));
}

// ─────────────────────────────────────────────────────────
// Reveal, caret, parallax
// ─────────────────────────────────────────────────────────

#[test]
fn test_card_reveal_marks_loaded() {
    let mut page = TestPage::new();

    page.send(Message::CardEnteredView { index: 4 });

    let card = page.controller.reveal_targets()[4];
    assert!(page.doc().has_class(&card, "loaded"));
    assert!(page.has_class("project-blog", "loaded"));
}

#[test]
fn test_card_reveal_out_of_range_is_reported() {
    let mut page = TestPage::new();

    let reports = page.send(Message::CardEnteredView { index: 99 });

    assert_eq!(reports.len(), 1);
    assert!(reports[0].is_recoverable());
}

#[test]
fn test_card_reveal_skips_detached_card() {
    let mut page = TestPage::new();
    let card = page.controller.reveal_targets()[4];
    page.doc_mut().remove(&card);

    let reports = page.send(Message::CardEnteredView { index: 4 });

    assert_eq!(
        reports,
        vec![Error::element_not_found("[data-reveal-index=\"4\"]")]
    );
    assert!(!page.doc().has_class(&card, "loaded"));
}

#[test]
fn test_caret_blinks_on_schedule() {
    let mut page = TestPage::new();
    let caret = page.doc().query_all(Selector::Class("typing-cursor"))[0];

    page.advance_ms(499);
    assert_eq!(page.doc().style(caret, "opacity"), None);
    page.advance_ms(1);
    assert_eq!(page.doc().style(caret, "opacity"), Some("0"));
    page.advance_ms(500);
    assert_eq!(page.doc().style(caret, "opacity"), Some("1"));
}

#[test]
fn test_scroll_moves_decoration() {
    let mut page = TestPage::new();

    page.send(Message::Scroll { offset: 120.0 });

    let deco = page.doc().query_all(Selector::Class("bg-decoration"))[0];
    assert_eq!(
        page.doc().style(deco, "transform"),
        Some("translateY(12.00px)")
    );
}

// ─────────────────────────────────────────────────────────
// Layout
// ─────────────────────────────────────────────────────────

#[test]
fn test_narrow_viewport_shows_toggle() {
    let mut page = TestPage::boot(narrow());
    let toggle = page.el("mobile-menu-toggle");
    assert_eq!(page.doc().style(toggle, "display"), Some("block"));

    page.send(Message::ToggleMobileMenu);
    assert!(page.has_class("sidebar", "open"));
    let icon = page.doc().query_all_in(&toggle, Selector::Tag("i"))[0];
    assert_eq!(page.doc().attribute(&icon, "class").as_deref(), Some("fas fa-times"));

    page.send(Message::ToggleMobileMenu);
    assert!(!page.has_class("sidebar", "open"));
    assert_eq!(page.doc().attribute(&icon, "class").as_deref(), Some("fas fa-bars"));
}

#[test]
fn test_widening_past_breakpoint_closes_sidebar() {
    let mut page = TestPage::boot(narrow());
    page.send(Message::ToggleMobileMenu);

    page.send(Message::Resize { width: 1024 });
    assert!(page.has_class("sidebar", "open"));

    page.send(Message::Resize { width: 1025 });
    assert!(!page.has_class("sidebar", "open"));
    let toggle = page.el("mobile-menu-toggle");
    assert_eq!(page.doc().style(toggle, "display"), Some("none"));
}

// ─────────────────────────────────────────────────────────
// Filtering and search
// ─────────────────────────────────────────────────────────

#[test]
fn test_project_filter_shows_matching_cards() {
    let mut page = TestPage::new();

    page.send(Message::FilterProjects(Filter::parse("web")));
    assert_eq!(page.displayed("project-card"), vec!["project-shop", "project-blog"]);

    let active: Vec<_> = page
        .doc()
        .query_all(Selector::Class("filter-btn"))
        .into_iter()
        .filter(|b| page.doc().has_class(b, "active"))
        .filter_map(|b| page.doc().attribute(&b, "data-filter"))
        .collect();
    assert_eq!(active, vec!["web"]);

    page.send(Message::FilterProjects(Filter::All));
    assert_eq!(page.displayed("project-card").len(), 3);
}

#[test]
fn test_blog_category_filter() {
    let mut page = TestPage::new();

    page.send(Message::FilterBlog(Filter::parse("rust")));

    assert_eq!(page.displayed("blog-card"), vec!["post-async", "post-hooks"]);
    // Project cards are untouched
    assert_eq!(page.displayed("project-card").len(), 3);
}

#[test]
fn test_search_matches_title_excerpt_and_tags() {
    let mut page = TestPage::new();

    page.send(Message::SearchBlog("RUST".into()));
    assert_eq!(page.displayed("blog-card"), vec!["post-async"]);

    page.send(Message::SearchBlog("css".into()));
    assert_eq!(page.displayed("blog-card"), vec!["post-colors"]);

    page.send(Message::SearchBlog("rewrite".into()));
    assert_eq!(page.displayed("blog-card"), vec!["post-hooks"]);

    page.send(Message::SearchBlog("   ".into()));
    assert_eq!(page.displayed("blog-card").len(), 3);
}

// ─────────────────────────────────────────────────────────
// Forms
// ─────────────────────────────────────────────────────────

fn field_error_text(page: &TestPage, field_id: &str) -> Option<String> {
    let field = page.el(field_id);
    page.doc()
        .next_element_sibling(&field)
        .filter(|n| page.doc().has_class(n, "field-error"))
        .map(|n| page.doc().text_content(&n))
}

#[test]
fn test_invalid_contact_submit_marks_fields() {
    let mut page = TestPage::new();

    page.send(Message::ContactSubmit(contact_submission("", "bad", "Hi")));

    assert!(page.has_class("contact-name", "error"));
    assert_eq!(
        field_error_text(&page, "contact-name").as_deref(),
        Some("This field is required")
    );
    assert_eq!(
        field_error_text(&page, "contact-email").as_deref(),
        Some("Please enter a valid email address")
    );
    assert!(!page.has_class("contact-message", "error"));
    assert_eq!(field_error_text(&page, "contact-message"), None);
    assert!(!page.has_class("contact-submit", "loading"));
}

#[test]
fn test_repeated_validation_keeps_single_error_element() {
    let mut page = TestPage::new();
    let email = folio_core::FieldSpec::required_email("contact-email");

    page.send(Message::FieldBlur {
        field: email.clone(),
        value: String::new(),
    });
    page.send(Message::FieldBlur {
        field: email,
        value: "nope".into(),
    });

    let errors = page.doc().query_all(Selector::Class("field-error"));
    assert_eq!(errors.len(), 1);
    assert_eq!(
        field_error_text(&page, "contact-email").as_deref(),
        Some("Please enter a valid email address")
    );
}

#[test]
fn test_typing_clears_fixed_field() {
    let mut page = TestPage::new();
    page.send(Message::ContactSubmit(contact_submission("", "a@b.co", "Hi")));
    assert!(page.has_class("contact-name", "error"));

    let [name, _, _] = crate::test_utils::contact_specs();
    page.send(Message::FieldInput {
        field: name,
        value: "Ada".into(),
    });

    assert!(!page.has_class("contact-name", "error"));
    assert_eq!(field_error_text(&page, "contact-name"), None);
}

#[test]
fn test_contact_submit_success_flow() {
    let mut page = TestPage::new();
    let name = page.el("contact-name");
    page.doc_mut().set_value(name, "Ada");

    page.send(Message::ContactSubmit(contact_submission(
        "Ada",
        "ada@example.com",
        "Hello there",
    )));

    let button = page.el("contact-submit");
    assert_eq!(page.doc().text_content(&button), "Sending...");
    assert!(page.doc().attribute(&button, "disabled").is_some());
    assert!(page.has_class("contact-submit", "loading"));
    assert_eq!(page.controller.state().contact, ContactPhase::Sending);

    let reports = page.advance_ms(1999);
    assert!(reports.is_empty());
    assert!(page.notifications().is_empty());

    page.advance_ms(1);
    assert_eq!(page.doc().text_content(&button), "Send Message");
    assert!(page.doc().attribute(&button, "disabled").is_none());
    assert!(!page.has_class("contact-submit", "loading"));
    assert_eq!(page.doc().value(name), "");

    let notes = page.notifications();
    assert_eq!(notes.len(), 1);
    assert!(page.doc().has_class(&notes[0], "notification-success"));
    assert_eq!(
        page.doc().text_content(&notes[0]),
        "Thank you for your message! I'll get back to you soon."
    );
}

#[test]
fn test_contact_submit_while_sending_is_ignored() {
    let mut page = TestPage::new();
    let submission = contact_submission("Ada", "ada@example.com", "Hello");

    page.send(Message::ContactSubmit(submission.clone()));
    page.advance_ms(1000);
    page.send(Message::ContactSubmit(submission));
    page.advance_ms(1000);

    // One delivery, one notification, button restored
    assert_eq!(page.notifications().len(), 1);
    assert!(!page.clock.has_pending(|m| matches!(m, Message::ContactDelivered(_))));
    assert_eq!(page.controller.state().contact, ContactPhase::Idle);
}

#[test]
fn test_contact_delivery_failure_keeps_values() {
    let mut page = TestPage::new();
    page.controller.services.transport = Box::new(OfflineTransport);
    let name = page.el("contact-name");
    page.doc_mut().set_value(name, "Ada");

    page.send(Message::ContactSubmit(contact_submission(
        "Ada",
        "ada@example.com",
        "Hello",
    )));
    let reports = page.advance_ms(10);

    assert_eq!(reports, vec![Error::transport("offline")]);
    assert_eq!(page.doc().value(name), "Ada");
    assert!(!page.has_class("contact-submit", "loading"));
    let notes = page.notifications();
    assert!(page.doc().has_class(&notes[0], "notification-error"));
    assert_eq!(page.controller.state().contact, ContactPhase::Idle);
}

#[test]
fn test_newsletter_valid_resets_form() {
    let mut page = TestPage::new();
    let input = page.el("newsletter-email");
    page.doc_mut().set_value(input, "reader@example.com");

    page.send(Message::NewsletterSubmit {
        email: "reader@example.com".into(),
    });

    assert_eq!(page.doc().value(input), "");
    let notes = page.notifications();
    assert_eq!(
        page.doc().text_content(&notes[0]),
        "Thank you for subscribing to the newsletter!"
    );
}

#[test]
fn test_newsletter_invalid_keeps_value() {
    let mut page = TestPage::new();
    let input = page.el("newsletter-email");
    page.doc_mut().set_value(input, "reader");

    page.send(Message::NewsletterSubmit {
        email: "reader".into(),
    });

    assert_eq!(page.doc().value(input), "reader");
    let notes = page.notifications();
    assert!(page.doc().has_class(&notes[0], "notification-error"));
    assert_eq!(
        page.doc().text_content(&notes[0]),
        "Please enter a valid email address."
    );
}

#[test]
fn test_newsletter_field_validates_on_blur_and_input() {
    let mut page = TestPage::new();
    let field = FieldSpec::required_email("newsletter-email");

    page.send(Message::FieldBlur {
        field: field.clone(),
        value: "reader@".into(),
    });
    assert!(page.has_class("newsletter-email", "error"));
    assert_eq!(
        field_error_text(&page, "newsletter-email").as_deref(),
        Some("Please enter a valid email address")
    );

    page.send(Message::FieldInput {
        field: field.clone(),
        value: "reader@example".into(),
    });
    assert!(page.has_class("newsletter-email", "error"));

    page.send(Message::FieldInput {
        field,
        value: "reader@example.com".into(),
    });
    assert!(!page.has_class("newsletter-email", "error"));
    assert_eq!(field_error_text(&page, "newsletter-email"), None);
}

// ─────────────────────────────────────────────────────────
// Notifications
// ─────────────────────────────────────────────────────────

#[test]
fn test_notification_markup() {
    let mut page = TestPage::new();

    page.send(Message::notify("Hello", NotificationKind::Info));

    let notes = page.notifications();
    let html = page.doc().outer_html(notes[0]);
    insta::assert_snapshot!(html, @r#"<div class="notification notification-info" id="notification-1"><div class="notification-content"><i class="fas fa-info-circle"></i><span>Hello</span></div><button aria-label="Dismiss notification" class="notification-close" data-notification="1"><i class="fas fa-times"></i></button></div>"#);
}

#[test]
fn test_notification_lifecycle() {
    let mut page = TestPage::new();
    page.send(Message::notify("Saved", NotificationKind::Success));
    let id = "notification-1";

    assert!(!page.has_class(id, "show"));
    page.advance_ms(100);
    assert!(page.has_class(id, "show"));

    page.advance_ms(4899);
    assert!(page.has_class(id, "show"));
    page.advance_ms(1);
    assert!(!page.has_class(id, "show"));

    page.advance_ms(299);
    assert_eq!(page.notifications().len(), 1);
    page.advance_ms(1);
    assert!(page.notifications().is_empty());
}

#[test]
fn test_new_notification_replaces_old_and_its_timers() {
    let mut page = TestPage::new();
    page.send(Message::notify("one", NotificationKind::Info));
    page.advance_ms(50);
    page.send(Message::notify("two", NotificationKind::Info));

    let notes = page.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(
        page.doc().attribute(&notes[0], "id").as_deref(),
        Some("notification-2")
    );

    // The first notification's expiry (t=5000) was cancelled
    page.advance_ms(4999);
    assert!(page.has_class("notification-2", "show"));
    page.advance_ms(1);
    assert!(!page.has_class("notification-2", "show"));
    page.advance_ms(300);
    assert!(page.notifications().is_empty());
}

#[test]
fn test_manual_dismiss() {
    let mut page = TestPage::new();
    page.send(Message::notify("bye", NotificationKind::Info));
    page.advance_ms(100);

    page.send(Message::DismissNotification(NotificationId(1)));
    assert!(!page.has_class("notification-1", "show"));
    page.advance_ms(300);
    assert!(page.notifications().is_empty());

    // Auto-dismiss timer was cancelled
    let reports = page.advance_ms(10_000);
    assert!(reports.is_empty());
    assert!(page.notifications().is_empty());
}

#[test]
fn test_stale_removal_does_not_touch_newer_notification() {
    let mut page = TestPage::new();
    page.send(Message::notify("first", NotificationKind::Info));
    page.advance_ms(100);
    page.send(Message::DismissNotification(NotificationId(1)));
    page.advance_ms(100);
    page.send(Message::notify("second", NotificationKind::Info));

    // Removal of #1 falls due here
    let reports = page.advance_ms(200);

    assert!(reports.is_empty());
    let notes = page.notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(page.doc().text_content(&notes[0]), "second");
    assert!(page.has_class("notification-2", "show"));
}

#[test]
fn test_dismiss_after_removal_is_noop() {
    let mut page = TestPage::new();
    page.send(Message::notify("x", NotificationKind::Error));
    page.advance_ms(5400);
    assert!(page.notifications().is_empty());

    let reports = page.send(Message::DismissNotification(NotificationId(1)));
    assert!(reports.is_empty());
}

#[test]
fn test_virtual_clock_is_shared() {
    let page = TestPage::new();
    assert_eq!(page.clock.now(), Duration::ZERO);
    // Caret blink armed by init
    assert!(page.clock.has_pending(|m| *m == Message::CaretBlink));
}
