//! Navigation, layout and filtering flows across a whole page session

use folio::app::dom::{DocumentView, Selector};
use folio::app::test_utils::{PageOptions, TestPage};
use folio::app::Message;
use folio::core::Filter;

use crate::page_at_width;

#[test]
fn test_deep_link_then_back_and_forward() {
    let mut page = TestPage::boot(PageOptions {
        fragment: Some("#projects".into()),
        ..PageOptions::default()
    });
    crate::assert_active!(page, "projects");

    page.send(Message::navigate("blog"));
    page.send(Message::navigate("contact"));
    crate::assert_active!(page, "contact");

    // Browser back twice
    page.send(Message::FragmentChanged("#blog".into()));
    crate::assert_active!(page, "blog");
    page.send(Message::FragmentChanged("#projects".into()));
    crate::assert_active!(page, "projects");

    assert_eq!(page.location.history(), vec!["projects", "blog", "contact"]);
}

#[test]
fn test_resize_round_trip() {
    let mut page = page_at_width(1280);
    let toggle = page.el("mobile-menu-toggle");
    assert_eq!(page.doc().style(toggle, "display"), Some("none"));

    page.send(Message::Resize { width: 700 });
    assert_eq!(page.doc().style(toggle, "display"), Some("block"));
    page.send(Message::ToggleMobileMenu);
    assert!(page.has_class("sidebar", "open"));

    page.send(Message::Resize { width: 1400 });
    assert_eq!(page.doc().style(toggle, "display"), Some("none"));
    assert!(!page.has_class("sidebar", "open"));

    page.send(Message::Resize { width: 700 });
    // Narrowing again does not reopen the sidebar
    assert!(!page.has_class("sidebar", "open"));
}

#[test]
fn test_mobile_navigation_session() {
    let mut page = page_at_width(375);

    for id in ["about", "blog", "home"] {
        page.send(Message::ToggleMobileMenu);
        assert!(page.has_class("sidebar", "open"));
        page.send(Message::navigate(id));
        assert!(!page.has_class("sidebar", "open"));
        crate::assert_active!(page, id);
    }
}

#[test]
fn test_filters_and_search_coexist_per_list() {
    let mut page = page_at_width(1280);
    page.send(Message::navigate("projects"));

    page.send(Message::FilterProjects(Filter::parse("mobile")));
    page.send(Message::SearchBlog("palette".into()));

    assert_eq!(page.displayed("project-card"), vec!["project-app"]);
    assert_eq!(page.displayed("blog-card"), vec!["post-colors"]);

    // The latest blog operation decides visibility
    page.send(Message::FilterBlog(Filter::parse("rust")));
    assert_eq!(page.displayed("blog-card"), vec!["post-async", "post-hooks"]);
}

#[test]
fn test_reveal_cards_while_scrolling() {
    let mut page = page_at_width(1280);
    let total = page.controller.reveal_targets().len();

    for index in 0..total {
        page.send(Message::Scroll {
            offset: index as f64 * 100.0,
        });
        page.send(Message::CardEnteredView { index });
    }

    let doc = page.doc();
    let loaded = doc
        .query_all(Selector::Class("card"))
        .into_iter()
        .filter(|c| doc.has_class(c, "loaded"))
        .count();
    assert_eq!(loaded, total);
    assert_eq!(page.controller.state().revealed.len(), total);
}
