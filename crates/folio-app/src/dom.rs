//! Document view capability
//!
//! The controller never touches a real DOM. It talks to a [`DocumentView`],
//! a narrow interface over lookups, element creation and the handful of
//! mutations the page behaviours need. The browser host implements it over
//! `web-sys`; tests use the in-memory document from `test_utils`.

use folio_core::Result;

/// Simple selector understood by every document view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<'a> {
    /// `.class`
    Class(&'a str),
    /// `tag`
    Tag(&'a str),
}

impl Selector<'_> {
    /// CSS form of the selector.
    pub fn css(&self) -> String {
        match self {
            Selector::Class(class) => format!(".{}", class),
            Selector::Tag(tag) => tag.to_string(),
        }
    }
}

/// Read/write access to the host document
pub trait DocumentView {
    /// Handle to one element. Cheap to clone; equal handles name the same node.
    type Element: Clone + PartialEq + std::fmt::Debug;

    // ─────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All matching elements in document order.
    fn query_all(&self, selector: Selector<'_>) -> Vec<Self::Element>;

    /// All matching descendants of `scope` in document order.
    fn query_all_in(&self, scope: &Self::Element, selector: Selector<'_>) -> Vec<Self::Element>;

    /// The `<html>` element.
    fn root(&self) -> Self::Element;

    fn body(&self) -> Self::Element;

    fn next_element_sibling(&self, element: &Self::Element) -> Option<Self::Element>;

    /// Whether the element is still attached to the document.
    fn is_connected(&self, element: &Self::Element) -> bool;

    // ─────────────────────────────────────────────────────────
    // Tree mutation
    // ─────────────────────────────────────────────────────────

    fn create_element(&mut self, tag: &str) -> Result<Self::Element>;

    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element);

    /// Insert `node` directly after `reference`, as its next sibling.
    fn insert_after(&mut self, reference: &Self::Element, node: &Self::Element);

    /// Detach the element. Detaching a detached element is a no-op.
    fn remove(&mut self, element: &Self::Element);

    /// Restore every control of a form to its initial value.
    fn reset_form(&mut self, form: &Self::Element);

    // ─────────────────────────────────────────────────────────
    // Attributes, classes, style, text
    // ─────────────────────────────────────────────────────────

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;
    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);
    fn remove_attribute(&mut self, element: &Self::Element, name: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;
    fn add_class(&mut self, element: &Self::Element, class: &str);
    fn remove_class(&mut self, element: &Self::Element, class: &str);

    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);
    fn remove_style(&mut self, element: &Self::Element, property: &str);

    /// Concatenated text of the element and its descendants.
    fn text_content(&self, element: &Self::Element) -> String;

    /// Replace the element's children with a single text node.
    fn set_text(&mut self, element: &Self::Element, text: &str);

    /// Set or clear a class depending on `on`.
    fn toggle_class(&mut self, element: &Self::Element, class: &str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }
}

/// Ids, classes and attributes the page markup must expose
pub mod markup {
    // Sections and navigation
    pub const SECTION: &str = "section";
    pub const NAV_LINK: &str = "nav-link";
    pub const ACTIVE: &str = "active";

    // Reveal animation
    pub const CARD: &str = "card";
    pub const LOADED: &str = "loaded";
    pub const FADE_IN: &str = "fade-in-up";
    pub const REVEAL_INDEX_ATTR: &str = "data-reveal-index";
    pub const CARET: &str = "typing-cursor";

    // Theme
    pub const THEME_TOGGLE_ID: &str = "theme-toggle";
    pub const THEME_ICON_ID: &str = "theme-icon";
    pub const THEME_ATTR: &str = "data-theme";
    pub const THEME_TRANSITION: &str = "theme-transition";

    // Filtering and search
    pub const FILTER_BUTTON: &str = "filter-btn";
    pub const FILTER_ATTR: &str = "data-filter";
    pub const PROJECT_CARD: &str = "project-card";
    pub const CATEGORY_BUTTON: &str = "category-btn";
    pub const CATEGORY_ATTR: &str = "data-category";
    pub const BLOG_CARD: &str = "blog-card";
    pub const BLOG_TITLE: &str = "blog-title";
    pub const BLOG_EXCERPT: &str = "blog-excerpt";
    pub const TAG: &str = "tag";
    pub const SEARCH_INPUT_ID: &str = "blog-search";

    // Forms
    pub const CONTACT_FORM_ID: &str = "contact-form";
    pub const CONTACT_SUBMIT_ID: &str = "contact-submit";
    pub const NEWSLETTER_FORM_ID: &str = "newsletter-form";
    pub const NEWSLETTER_EMAIL_ID: &str = "newsletter-email";
    pub const FIELD_INVALID: &str = "error";
    pub const FIELD_ERROR: &str = "field-error";
    pub const LOADING: &str = "loading";
    pub const LABEL_ATTR: &str = "data-label";

    // Notifications
    pub const NOTIFICATION: &str = "notification";
    pub const NOTIFICATION_CLOSE: &str = "notification-close";
    pub const NOTIFICATION_ATTR: &str = "data-notification";
    pub const SHOW: &str = "show";

    // Layout
    pub const SIDEBAR_ID: &str = "sidebar";
    pub const SIDEBAR_OPEN: &str = "open";
    pub const MOBILE_TOGGLE_ID: &str = "mobile-menu-toggle";
    pub const MENU_OPEN_ICON: &str = "fas fa-bars";
    pub const MENU_CLOSE_ICON: &str = "fas fa-times";
    pub const BG_DECORATION: &str = "bg-decoration";
}
