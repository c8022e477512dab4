//! `setTimeout`-backed scheduler

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use folio_app::{Message, Scheduler, TimerHandle};
use tracing::error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::Dispatcher;

pub struct BrowserScheduler {
    window: Window,
    dispatcher: Dispatcher,
    /// Browser timeout ids of timers that have not fired yet
    pending: Rc<RefCell<HashMap<TimerHandle, i32>>>,
    next: u64,
}

impl BrowserScheduler {
    pub fn new(window: Window, dispatcher: Dispatcher) -> Self {
        Self {
            window,
            dispatcher,
            pending: Rc::default(),
            next: 0,
        }
    }
}

impl Scheduler for BrowserScheduler {
    fn schedule(&mut self, delay: Duration, message: Message) -> TimerHandle {
        let handle = TimerHandle(self.next);
        self.next += 1;

        let dispatcher = self.dispatcher.clone();
        let pending = Rc::clone(&self.pending);
        let callback = Closure::once_into_js(move || {
            pending.borrow_mut().remove(&handle);
            dispatcher.dispatch(message);
        });

        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), millis)
        {
            Ok(id) => {
                self.pending.borrow_mut().insert(handle, id);
            }
            Err(e) => error!("setTimeout failed: {:?}", e),
        }
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        if let Some(id) = self.pending.borrow_mut().remove(&handle) {
            self.window.clear_timeout_with_handle(id);
        }
    }
}
