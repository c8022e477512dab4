//! `DocumentView` over the live DOM

use folio_app::{DocumentView, Selector};
use folio_core::{Error, Result};
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlFormElement};

pub struct WebDocument {
    document: Document,
    root: Element,
    body: Element,
}

impl WebDocument {
    pub fn new(document: Document) -> std::result::Result<Self, JsValue> {
        let root = document
            .document_element()
            .ok_or_else(|| JsValue::from_str("document has no root element"))?;
        let body: Element = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .into();
        Ok(Self {
            document,
            root,
            body,
        })
    }
}

fn collect(list: std::result::Result<web_sys::NodeList, JsValue>, selector: &str) -> Vec<Element> {
    match list {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            warn!("Query '{}' failed: {:?}", selector, e);
            Vec::new()
        }
    }
}

fn log_failure(operation: &str, result: std::result::Result<(), JsValue>) {
    if let Err(e) = result {
        warn!("{} failed: {:?}", operation, e);
    }
}

impl DocumentView for WebDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: Selector<'_>) -> Vec<Element> {
        let css = selector.css();
        collect(self.document.query_selector_all(&css), &css)
    }

    fn query_all_in(&self, scope: &Element, selector: Selector<'_>) -> Vec<Element> {
        let css = selector.css();
        collect(scope.query_selector_all(&css), &css)
    }

    fn root(&self) -> Element {
        self.root.clone()
    }

    fn body(&self) -> Element {
        self.body.clone()
    }

    fn next_element_sibling(&self, element: &Element) -> Option<Element> {
        element.next_element_sibling()
    }

    fn is_connected(&self, element: &Element) -> bool {
        element.is_connected()
    }

    fn create_element(&mut self, tag: &str) -> Result<Element> {
        self.document
            .create_element(tag)
            .map_err(|e| Error::dom(format!("create <{}>: {:?}", tag, e)))
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        log_failure("appendChild", parent.append_child(child).map(|_| ()));
    }

    fn insert_after(&mut self, reference: &Element, node: &Element) {
        log_failure("after", reference.after_with_node_1(node));
    }

    fn remove(&mut self, element: &Element) {
        element.remove();
    }

    fn reset_form(&mut self, form: &Element) {
        if let Some(form) = form.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&mut self, element: &Element, name: &str, value: &str) {
        log_failure("setAttribute", element.set_attribute(name, value));
    }

    fn remove_attribute(&mut self, element: &Element, name: &str) {
        log_failure("removeAttribute", element.remove_attribute(name));
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_class(&mut self, element: &Element, class: &str) {
        log_failure("classList.add", element.class_list().add_1(class));
    }

    fn remove_class(&mut self, element: &Element, class: &str) {
        log_failure("classList.remove", element.class_list().remove_1(class));
    }

    fn set_style(&mut self, element: &Element, property: &str, value: &str) {
        if let Some(el) = element.dyn_ref::<HtmlElement>() {
            log_failure("style.setProperty", el.style().set_property(property, value));
        }
    }

    fn remove_style(&mut self, element: &Element, property: &str) {
        if let Some(el) = element.dyn_ref::<HtmlElement>() {
            log_failure(
                "style.removeProperty",
                el.style().remove_property(property).map(|_| ()),
            );
        }
    }

    fn text_content(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn set_text(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }
}
