//! DOM listeners translating browser events into controller messages

use folio_app::config::RevealSettings;
use folio_app::dom::markup;
use folio_app::transport::{ContactSubmission, FormField};
use folio_app::{Message, Selector};
use folio_core::{FieldKind, FieldSpec, Filter, NotificationId, SectionId};
use js_sys::Array;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlInputElement, HtmlTextAreaElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window,
};

use super::Dispatcher;

/// Current viewport width in CSS pixels.
pub fn viewport_width(window: &Window) -> u32 {
    window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(0)
}

/// Listen for `kind` on `target`, dispatching whatever `translate` yields.
///
/// Listeners live as long as the page, so the closure is leaked on purpose.
fn on<F>(target: &EventTarget, kind: &str, dispatcher: &Dispatcher, translate: F) -> Result<(), JsValue>
where
    F: Fn(&Event) -> Option<Message> + 'static,
{
    let dispatcher = dispatcher.clone();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if let Some(message) = translate(&event) {
            dispatcher.dispatch(message);
        }
    });
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn query(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

fn control_value(element: &Element) -> String {
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn field_spec(element: &Element) -> FieldSpec {
    let input_type = element.get_attribute("type");
    FieldSpec::new(
        element.id(),
        FieldKind::from_markup(&element.tag_name(), input_type.as_deref()),
        element.has_attribute("required"),
    )
}

fn form_controls(form: &Element) -> Vec<Element> {
    let Ok(list) = form.query_selector_all("input, textarea") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter(|el| !el.id().is_empty())
        .collect()
}

/// Attach every page listener.
pub fn attach(window: &Window, dispatcher: &Dispatcher) -> Result<(), JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    attach_navigation(&document, dispatcher)?;
    attach_filters(&document, dispatcher)?;
    attach_forms(&document, dispatcher)?;

    if let Some(toggle) = document.get_element_by_id(markup::THEME_TOGGLE_ID) {
        on(&toggle, "click", dispatcher, |_| Some(Message::ToggleTheme))?;
    }

    // Notifications and the mobile toggle are created after load
    on(&document, "click", dispatcher, |event| {
        let element = event_element(event)?;
        let close_selector = Selector::Class(markup::NOTIFICATION_CLOSE).css();
        if let Ok(Some(close)) = element.closest(&close_selector) {
            let id = close
                .get_attribute(markup::NOTIFICATION_ATTR)?
                .parse::<u64>()
                .ok()?;
            return Some(Message::DismissNotification(NotificationId(id)));
        }
        let toggle_selector = format!("#{}", markup::MOBILE_TOGGLE_ID);
        if let Ok(Some(_)) = element.closest(&toggle_selector) {
            return Some(Message::ToggleMobileMenu);
        }
        None
    })?;

    let scroll_window = window.clone();
    on(window, "scroll", dispatcher, move |_| {
        let offset = scroll_window.scroll_y().unwrap_or(0.0);
        Some(Message::Scroll { offset })
    })?;

    let resize_window = window.clone();
    on(window, "resize", dispatcher, move |_| {
        Some(Message::Resize {
            width: viewport_width(&resize_window),
        })
    })?;

    let hash_window = window.clone();
    on(window, "hashchange", dispatcher, move |_| {
        let hash = hash_window.location().hash().ok()?;
        Some(Message::FragmentChanged(
            hash.trim_start_matches('#').to_string(),
        ))
    })?;

    debug!("Page listeners attached");
    Ok(())
}

fn attach_navigation(document: &Document, dispatcher: &Dispatcher) -> Result<(), JsValue> {
    for link in query(document, &Selector::Class(markup::NAV_LINK).css()) {
        let href = link.get_attribute("href").unwrap_or_default();
        on(&link, "click", dispatcher, move |event| {
            let section = SectionId::from_fragment(&href)?;
            event.prevent_default();
            Some(Message::NavigateTo(section))
        })?;
    }
    Ok(())
}

fn attach_filters(document: &Document, dispatcher: &Dispatcher) -> Result<(), JsValue> {
    for button in query(document, &Selector::Class(markup::FILTER_BUTTON).css()) {
        let value = button.get_attribute(markup::FILTER_ATTR).unwrap_or_default();
        on(&button, "click", dispatcher, move |_| {
            Some(Message::FilterProjects(Filter::parse(&value)))
        })?;
    }

    for button in query(document, &Selector::Class(markup::CATEGORY_BUTTON).css()) {
        let value = button
            .get_attribute(markup::CATEGORY_ATTR)
            .unwrap_or_default();
        on(&button, "click", dispatcher, move |_| {
            Some(Message::FilterBlog(Filter::parse(&value)))
        })?;
    }

    if let Some(search) = document.get_element_by_id(markup::SEARCH_INPUT_ID) {
        on(&search, "input", dispatcher, |event| {
            let input = event_element(event)?;
            Some(Message::SearchBlog(control_value(&input)))
        })?;
    }
    Ok(())
}

/// Validate a form's fields on blur, and while typing once marked invalid.
fn attach_field_validation(form: &Element, dispatcher: &Dispatcher) -> Result<(), JsValue> {
    for control in form_controls(form) {
        on(&control, "blur", dispatcher, |event| {
            let el = event_element(event)?;
            Some(Message::FieldBlur {
                field: field_spec(&el),
                value: control_value(&el),
            })
        })?;
        on(&control, "input", dispatcher, |event| {
            let el = event_element(event)?;
            Some(Message::FieldInput {
                field: field_spec(&el),
                value: control_value(&el),
            })
        })?;
    }
    Ok(())
}

fn attach_forms(document: &Document, dispatcher: &Dispatcher) -> Result<(), JsValue> {
    if let Some(form) = document.get_element_by_id(markup::CONTACT_FORM_ID) {
        attach_field_validation(&form, dispatcher)?;

        let submitted = form.clone();
        on(&form, "submit", dispatcher, move |event| {
            event.prevent_default();
            let fields = form_controls(&submitted)
                .iter()
                .map(|el| FormField::new(field_spec(el), control_value(el)))
                .collect();
            Some(Message::ContactSubmit(ContactSubmission::new(fields)))
        })?;
    }

    if let Some(form) = document.get_element_by_id(markup::NEWSLETTER_FORM_ID) {
        attach_field_validation(&form, dispatcher)?;

        let email_input = document.get_element_by_id(markup::NEWSLETTER_EMAIL_ID);
        on(&form, "submit", dispatcher, move |event| {
            event.prevent_default();
            let email = email_input.as_ref().map(control_value).unwrap_or_default();
            Some(Message::NewsletterSubmit { email })
        })?;
    }
    Ok(())
}

/// Watch the reveal cards and report each one the first time it scrolls
/// into view.
pub fn observe_reveal(
    dispatcher: &Dispatcher,
    targets: &[Element],
    reveal: &RevealSettings,
) -> Result<(), JsValue> {
    if targets.is_empty() {
        return Ok(());
    }

    let dispatcher = dispatcher.clone();
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                match target
                    .get_attribute(markup::REVEAL_INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                {
                    Some(index) => dispatcher.dispatch(Message::CardEnteredView { index }),
                    None => warn!("Revealed card has no {}", markup::REVEAL_INDEX_ATTR),
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(reveal.threshold));
    options.set_root_margin(&reveal.root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(())
}
