//! Browser runtime: capability implementations over `web-sys` and the
//! dispatch loop that feeds DOM events into the page controller.
//!
//! Submodules:
//! - `document`: `DocumentView` over the live DOM
//! - `scheduler`: `setTimeout`-backed `Scheduler`
//! - `storage`: `localStorage`-backed `PreferenceStore`
//! - `location`: fragment reads and `history.pushState`
//! - `events`: listeners and the reveal observer

pub mod document;
pub mod events;
pub mod location;
pub mod scheduler;
pub mod storage;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use folio_app::{Message, PageController, Services, Settings};
use tracing::{debug, info, warn};
use wasm_bindgen::JsValue;

use document::WebDocument;
use location::BrowserLocation;
use scheduler::BrowserScheduler;
use storage::LocalStoragePreferences;

pub type Controller = PageController<WebDocument>;

/// Shared handle through which listeners and timers reach the controller.
///
/// Messages posted while the controller is busy are queued and handled by
/// the call that is already running.
#[derive(Clone, Default)]
pub struct Dispatcher {
    controller: Rc<RefCell<Option<Controller>>>,
    queue: Rc<RefCell<VecDeque<Message>>>,
}

impl Dispatcher {
    pub fn dispatch(&self, message: Message) {
        self.queue.borrow_mut().push_back(message);

        let Ok(mut slot) = self.controller.try_borrow_mut() else {
            return;
        };
        let Some(controller) = slot.as_mut() else {
            debug!("Controller not installed yet, message queued");
            return;
        };

        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(message) = next else {
                break;
            };
            for report in controller.process_message(message) {
                warn!("{}", report);
            }
        }
    }

    fn install(&self, controller: Controller) {
        *self.controller.borrow_mut() = Some(controller);
    }
}

/// Boot the controller over the mounted page and attach every listener.
pub fn start(settings: Settings) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let dispatcher = Dispatcher::default();
    let services = Services::simulated(
        BrowserScheduler::new(window.clone(), dispatcher.clone()),
        LocalStoragePreferences::new(&window),
        BrowserLocation::new(window.clone()),
        &settings,
    );
    let reveal = settings.reveal.clone();

    let mut controller = PageController::new(WebDocument::new(document)?, settings, services);
    for report in controller.init(events::viewport_width(&window)) {
        warn!("Init: {}", report);
    }
    let targets = controller.reveal_targets().to_vec();
    dispatcher.install(controller);

    events::attach(&window, &dispatcher)?;
    events::observe_reveal(&dispatcher, &targets, &reveal)?;
    info!("Page runtime started ({} reveal targets)", targets.len());
    Ok(())
}
