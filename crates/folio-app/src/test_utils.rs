//! Test utilities for the page controller
//!
//! Provides [`MemoryDocument`], an arena-backed [`DocumentView`], a fixture
//! page exposing the full markup contract, and [`TestPage`], which boots a
//! controller over that fixture with a virtual clock.

use std::collections::BTreeMap;
use std::time::Duration;

use folio_core::{Error, FieldKind, FieldSpec};

use crate::config::Settings;
use crate::controller::{PageController, Services};
use crate::dom::{markup, DocumentView, Selector};
use crate::location::MemoryLocation;
use crate::message::Message;
use crate::preferences::MemoryPreferences;
use crate::scheduler::VirtualScheduler;
use crate::transport::{ContactSubmission, FormField};

/// Index of a node inside a [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    tag: String,
    attrs: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    /// Own text, rendered before the children
    text: String,
    value: String,
    default_value: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

/// Minimal in-memory DOM
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    root: NodeId,
    body: NodeId,
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDocument {
    /// An empty `<html><body></body></html>` document.
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
            body: NodeId(0),
        };
        doc.root = doc.alloc("html");
        doc.body = doc.alloc("body");
        let (root, body) = (doc.root, doc.body);
        doc.append_child(&root, &body);
        doc
    }

    fn alloc(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Node {
            tag: tag.to_string(),
            ..Node::default()
        });
        NodeId(self.nodes.len() - 1)
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.node_mut(id).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != id);
        }
    }

    /// Descendants of `scope` in document order, excluding `scope`.
    fn descendants(&self, scope: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(scope).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    fn matches(&self, id: NodeId, selector: Selector<'_>) -> bool {
        match selector {
            Selector::Class(class) => self.has_class(&id, class),
            Selector::Tag(tag) => self.node(id).tag.eq_ignore_ascii_case(tag),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Builder helpers
    // ─────────────────────────────────────────────────────────

    /// Append a new `<tag>` under `parent` and return it.
    pub fn add(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.alloc(tag);
        self.append_child(&parent, &id);
        id
    }

    /// Append a new element with attributes (`class`, `id`, ...) and text.
    pub fn add_with(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
        text: &str,
    ) -> NodeId {
        let id = self.add(parent, tag);
        for (name, value) in attrs {
            self.set_attribute(&id, name, value);
        }
        if !text.is_empty() {
            self.set_text(&id, text);
        }
        id
    }

    pub fn body_id(&self) -> NodeId {
        self.body
    }

    /// Current value of a form control.
    pub fn value(&self, id: NodeId) -> &str {
        &self.node(id).value
    }

    /// Type into a form control.
    pub fn set_value(&mut self, id: NodeId, value: &str) {
        self.node_mut(id).value = value.to_string();
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.node(id).style.get(property).map(String::as_str)
    }

    pub fn tag(&self, id: NodeId) -> &str {
        &self.node(id).tag
    }

    /// Whether the element would be rendered (`display` not `none`).
    pub fn is_displayed(&self, id: NodeId) -> bool {
        self.style(id, "display") != Some("none")
    }

    /// Serialise an element and its subtree, attributes sorted by name.
    pub fn outer_html(&self, id: NodeId) -> String {
        let node = self.node(id);
        let mut out = format!("<{}", node.tag);
        for (name, value) in &node.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, value));
        }
        if !node.style.is_empty() {
            let style: Vec<String> = node
                .style
                .iter()
                .map(|(k, v)| format!("{}: {}", k, v))
                .collect();
            out.push_str(&format!(" style=\"{}\"", style.join("; ")));
        }
        out.push('>');
        out.push_str(&node.text);
        for child in &node.children {
            out.push_str(&self.outer_html(*child));
        }
        out.push_str(&format!("</{}>", node.tag));
        out
    }
}

impl DocumentView for MemoryDocument {
    type Element = NodeId;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .find(|n| self.node(*n).attrs.get("id").map(String::as_str) == Some(id))
    }

    fn query_all(&self, selector: Selector<'_>) -> Vec<NodeId> {
        self.query_all_in(&self.root, selector)
    }

    fn query_all_in(&self, scope: &NodeId, selector: Selector<'_>) -> Vec<NodeId> {
        self.descendants(*scope)
            .into_iter()
            .filter(|n| self.matches(*n, selector))
            .collect()
    }

    fn root(&self) -> NodeId {
        self.root
    }

    fn body(&self) -> NodeId {
        self.body
    }

    fn next_element_sibling(&self, element: &NodeId) -> Option<NodeId> {
        let parent = self.node(*element).parent?;
        let siblings = &self.node(parent).children;
        let pos = siblings.iter().position(|c| c == element)?;
        siblings.get(pos + 1).copied()
    }

    fn is_connected(&self, element: &NodeId) -> bool {
        let mut current = *element;
        loop {
            if current == self.root {
                return true;
            }
            match self.node(current).parent {
                Some(parent) => current = parent,
                None => return false,
            }
        }
    }

    fn create_element(&mut self, tag: &str) -> folio_core::Result<NodeId> {
        Ok(self.alloc(tag))
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        self.detach(*child);
        self.node_mut(*parent).children.push(*child);
        self.node_mut(*child).parent = Some(*parent);
    }

    fn insert_after(&mut self, reference: &NodeId, node: &NodeId) {
        let Some(parent) = self.node(*reference).parent else {
            return;
        };
        self.detach(*node);
        let siblings = &mut self.node_mut(parent).children;
        let pos = siblings
            .iter()
            .position(|c| c == reference)
            .map_or(siblings.len(), |p| p + 1);
        siblings.insert(pos, *node);
        self.node_mut(*node).parent = Some(parent);
    }

    fn remove(&mut self, element: &NodeId) {
        self.detach(*element);
    }

    fn reset_form(&mut self, form: &NodeId) {
        for id in self.descendants(*form) {
            let node = self.node_mut(id);
            node.value = node.default_value.clone();
        }
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.node(*element).attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) {
        let node = self.node_mut(*element);
        if name == "value" {
            node.value = value.to_string();
            node.default_value = value.to_string();
        }
        node.attrs.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, element: &NodeId, name: &str) {
        self.node_mut(*element).attrs.remove(name);
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.node(*element)
            .attrs
            .get("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    fn add_class(&mut self, element: &NodeId, class: &str) {
        if self.has_class(element, class) {
            return;
        }
        let attrs = &mut self.node_mut(*element).attrs;
        let classes = attrs.entry("class".to_string()).or_default();
        if !classes.is_empty() {
            classes.push(' ');
        }
        classes.push_str(class);
    }

    fn remove_class(&mut self, element: &NodeId, class: &str) {
        let attrs = &mut self.node_mut(*element).attrs;
        let Some(kept) = attrs.get("class").map(|classes| {
            classes
                .split_whitespace()
                .filter(|c| *c != class)
                .collect::<Vec<_>>()
                .join(" ")
        }) else {
            return;
        };
        if kept.is_empty() {
            attrs.remove("class");
        } else {
            attrs.insert("class".to_string(), kept);
        }
    }

    fn set_style(&mut self, element: &NodeId, property: &str, value: &str) {
        self.node_mut(*element)
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn remove_style(&mut self, element: &NodeId, property: &str) {
        self.node_mut(*element).style.remove(property);
    }

    fn text_content(&self, element: &NodeId) -> String {
        let node = self.node(*element);
        let mut text = node.text.clone();
        for child in &node.children {
            text.push_str(&self.text_content(child));
        }
        text
    }

    fn set_text(&mut self, element: &NodeId, text: &str) {
        let children = std::mem::take(&mut self.node_mut(*element).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
        self.node_mut(*element).text = text.to_string();
    }
}

// ─────────────────────────────────────────────────────────────────
// Fixture page
// ─────────────────────────────────────────────────────────────────

/// Section ids of the fixture page, in document order.
pub const FIXTURE_SECTIONS: [&str; 5] = ["home", "about", "projects", "blog", "contact"];

/// Build a page exposing the whole markup contract.
///
/// - `home` (active in the markup): caret + 2 cards
/// - `about`: 1 card
/// - `projects`: filter buttons `all/web/mobile`, cards web, web, mobile
/// - `blog`: search input, category buttons `all/rust/design`, 3 posts
/// - `contact`: contact form and newsletter form
pub fn fixture_page() -> MemoryDocument {
    let mut doc = MemoryDocument::new();
    let body = doc.body_id();

    let sidebar = doc.add_with(body, "aside", &[("id", markup::SIDEBAR_ID)], "");
    let nav = doc.add(sidebar, "nav");
    for id in FIXTURE_SECTIONS {
        let class = if id == "home" { "nav-link active" } else { "nav-link" };
        let href = format!("#{}", id);
        doc.add_with(nav, "a", &[("class", class), ("href", href.as_str())], id);
    }
    let toggle = doc.add_with(sidebar, "button", &[("id", markup::THEME_TOGGLE_ID)], "");
    doc.add_with(
        toggle,
        "i",
        &[("id", markup::THEME_ICON_ID), ("class", "fas fa-moon")],
        "",
    );

    doc.add_with(body, "div", &[("class", markup::BG_DECORATION)], "");
    let main = doc.add(body, "main");

    // home
    let home = doc.add_with(main, "section", &[("id", "home"), ("class", "section active")], "");
    let heading = doc.add_with(home, "h1", &[], "Hi, I build things");
    doc.add_with(heading, "span", &[("class", markup::CARET)], "|");
    doc.add_with(home, "div", &[("class", "card")], "Intro");
    doc.add_with(home, "div", &[("class", "card")], "Stats");

    // about
    let about = doc.add_with(main, "section", &[("id", "about"), ("class", "section")], "");
    doc.add_with(about, "div", &[("class", "card")], "Bio");

    // projects
    let projects = doc.add_with(main, "section", &[("id", "projects"), ("class", "section")], "");
    let filters = doc.add(projects, "div");
    for (value, class) in [("all", "filter-btn active"), ("web", "filter-btn"), ("mobile", "filter-btn")] {
        doc.add_with(filters, "button", &[("class", class), ("data-filter", value)], value);
    }
    for (id, category) in [("project-shop", "web"), ("project-blog", "web"), ("project-app", "mobile")] {
        doc.add_with(
            projects,
            "div",
            &[("id", id), ("class", "project-card card"), ("data-category", category)],
            id,
        );
    }

    // blog
    let blog = doc.add_with(main, "section", &[("id", "blog"), ("class", "section")], "");
    doc.add_with(blog, "input", &[("id", markup::SEARCH_INPUT_ID), ("type", "search")], "");
    let categories = doc.add(blog, "div");
    for (value, class) in [("all", "category-btn active"), ("rust", "category-btn"), ("design", "category-btn")] {
        doc.add_with(categories, "button", &[("class", class), ("data-category", value)], value);
    }
    let posts: [(&str, &str, &str, &str, &[&str]); 3] = [
        ("post-async", "rust", "Async Rust in practice", "Executors, wakers and pinning", &["rust", "async"]),
        ("post-colors", "design", "Picking a colour palette", "Contrast for dark themes", &["design", "css"]),
        ("post-hooks", "rust", "Porting hooks", "Lessons from a frontend rewrite", &["react", "wasm"]),
    ];
    for (id, category, title, excerpt, tags) in posts {
        let card = doc.add_with(
            blog,
            "article",
            &[("id", id), ("class", "blog-card card"), ("data-category", category)],
            "",
        );
        doc.add_with(card, "h3", &[("class", markup::BLOG_TITLE)], title);
        doc.add_with(card, "p", &[("class", markup::BLOG_EXCERPT)], excerpt);
        let tag_list = doc.add(card, "div");
        for tag in tags {
            doc.add_with(tag_list, "span", &[("class", markup::TAG)], tag);
        }
    }

    // contact
    let contact = doc.add_with(main, "section", &[("id", "contact"), ("class", "section")], "");
    let form = doc.add_with(contact, "form", &[("id", markup::CONTACT_FORM_ID)], "");
    doc.add_with(form, "input", &[("id", "contact-name"), ("type", "text"), ("required", "")], "");
    doc.add_with(form, "input", &[("id", "contact-email"), ("type", "email"), ("required", "")], "");
    doc.add_with(form, "textarea", &[("id", "contact-message"), ("required", "")], "");
    doc.add_with(form, "button", &[("id", markup::CONTACT_SUBMIT_ID), ("type", "submit")], "Send Message");

    let newsletter = doc.add_with(contact, "form", &[("id", markup::NEWSLETTER_FORM_ID)], "");
    doc.add_with(
        newsletter,
        "input",
        &[("id", markup::NEWSLETTER_EMAIL_ID), ("type", "email"), ("required", "")],
        "",
    );
    doc.add_with(newsletter, "button", &[("type", "submit")], "Subscribe");

    doc
}

/// Field specs of the fixture contact form.
pub fn contact_specs() -> [FieldSpec; 3] {
    [
        FieldSpec::new("contact-name", FieldKind::Text, true),
        FieldSpec::required_email("contact-email"),
        FieldSpec::new("contact-message", FieldKind::TextArea, true),
    ]
}

/// A contact submission for the fixture form.
pub fn contact_submission(name: &str, email: &str, message: &str) -> ContactSubmission {
    let [name_spec, email_spec, message_spec] = contact_specs();
    ContactSubmission::new(vec![
        FormField::new(name_spec, name),
        FormField::new(email_spec, email),
        FormField::new(message_spec, message),
    ])
}

// ─────────────────────────────────────────────────────────────────
// Booted controller harness
// ─────────────────────────────────────────────────────────────────

/// Boot options for [`TestPage`]
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub stored_theme: Option<String>,
    pub fragment: Option<String>,
    pub viewport_width: u32,
    pub settings: Settings,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            stored_theme: None,
            fragment: None,
            viewport_width: 1280,
            settings: Settings::default(),
        }
    }
}

/// Controller booted over [`fixture_page`] with shared handles to its
/// clock, preference store and location
pub struct TestPage {
    pub controller: PageController<MemoryDocument>,
    pub clock: VirtualScheduler,
    pub prefs: MemoryPreferences,
    pub location: MemoryLocation,
    /// Problems reported by `init`
    pub init_reports: Vec<Error>,
}

impl TestPage {
    pub fn new() -> Self {
        Self::boot(PageOptions::default())
    }

    pub fn boot(options: PageOptions) -> Self {
        Self::boot_document(fixture_page(), options)
    }

    pub fn boot_document(document: MemoryDocument, options: PageOptions) -> Self {
        let clock = VirtualScheduler::new();
        let prefs = match &options.stored_theme {
            Some(theme) => MemoryPreferences::with(folio_core::THEME_STORAGE_KEY, theme),
            None => MemoryPreferences::new(),
        };
        let location = match &options.fragment {
            Some(fragment) => MemoryLocation::with_fragment(fragment),
            None => MemoryLocation::new(),
        };
        let services = Services::simulated(
            clock.clone(),
            prefs.clone(),
            location.clone(),
            &options.settings,
        );
        let mut controller = PageController::new(document, options.settings, services);
        let init_reports = controller.init(options.viewport_width);

        Self {
            controller,
            clock,
            prefs,
            location,
            init_reports,
        }
    }

    pub fn send(&mut self, message: Message) -> Vec<Error> {
        self.controller.process_message(message)
    }

    /// Advance virtual time, feeding every due timer back into the controller.
    pub fn advance_ms(&mut self, ms: u64) -> Vec<Error> {
        let mut reports = Vec::new();
        let controller = &mut self.controller;
        self.clock.advance(Duration::from_millis(ms), |message| {
            reports.extend(controller.process_message(message));
        });
        reports
    }

    pub fn doc(&self) -> &MemoryDocument {
        self.controller.document()
    }

    pub fn doc_mut(&mut self) -> &mut MemoryDocument {
        self.controller.document_mut()
    }

    /// Element by id; panics when missing.
    pub fn el(&self, id: &str) -> NodeId {
        self.doc()
            .element_by_id(id)
            .unwrap_or_else(|| panic!("fixture has no #{}", id))
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.doc().has_class(&self.el(id), class)
    }

    /// Ids of sections carrying `active`.
    pub fn active_sections(&self) -> Vec<String> {
        let doc = self.doc();
        doc.query_all(Selector::Class(markup::SECTION))
            .into_iter()
            .filter(|s| doc.has_class(s, markup::ACTIVE))
            .filter_map(|s| doc.attribute(&s, "id"))
            .collect()
    }

    /// `href`s of navigation links carrying `active`.
    pub fn active_links(&self) -> Vec<String> {
        let doc = self.doc();
        doc.query_all(Selector::Class(markup::NAV_LINK))
            .into_iter()
            .filter(|l| doc.has_class(l, markup::ACTIVE))
            .filter_map(|l| doc.attribute(&l, "href"))
            .collect()
    }

    /// Ids of displayed elements with `class`.
    pub fn displayed(&self, class: &str) -> Vec<String> {
        let doc = self.doc();
        doc.query_all(Selector::Class(class))
            .into_iter()
            .filter(|n| doc.is_displayed(*n))
            .filter_map(|n| doc.attribute(&n, "id"))
            .collect()
    }

    /// Notification nodes currently attached.
    pub fn notifications(&self) -> Vec<NodeId> {
        self.doc().query_all(Selector::Class(markup::NOTIFICATION))
    }
}

impl Default for TestPage {
    fn default() -> Self {
        Self::new()
    }
}
