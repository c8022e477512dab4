//! Timer capability
//!
//! Every delayed effect (caret blink, theme transition, notification slide
//! in/out, simulated delivery) is a [`Message`] posted back into the update
//! loop after a delay. Hosts provide the clock: the browser wraps
//! `setTimeout`, tests use [`VirtualScheduler`] and advance time explicitly.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::message::Message;

/// Handle of a scheduled message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub u64);

/// Posts messages back to the controller after a delay
pub trait Scheduler {
    fn schedule(&mut self, delay: Duration, message: Message) -> TimerHandle;

    /// Cancel a pending message. Unknown or already-fired handles are ignored.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Deterministic scheduler driven by an explicit clock.
///
/// Clones share the same queue, so a test can keep one clone while the
/// controller owns another.
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    inner: Rc<RefCell<VirtualQueue>>,
}

#[derive(Debug, Default)]
struct VirtualQueue {
    now: Duration,
    next_seq: u64,
    /// Keyed by (due time, insertion order) so equal deadlines fire FIFO
    pending: BTreeMap<(Duration, u64), Message>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of messages still waiting.
    pub fn pending(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    /// Whether a message matching `predicate` is waiting.
    pub fn has_pending(&self, predicate: impl Fn(&Message) -> bool) -> bool {
        self.inner.borrow().pending.values().any(predicate)
    }

    /// Advance the clock by `by`, handing every message that falls due to
    /// `deliver` in deadline order.
    ///
    /// Messages scheduled by `deliver` itself fire in the same call when
    /// their deadline lies inside the window.
    pub fn advance(&self, by: Duration, mut deliver: impl FnMut(Message)) {
        let target = self.now().saturating_add(by);
        loop {
            let due = {
                let mut queue = self.inner.borrow_mut();
                let key = match queue.pending.keys().next() {
                    Some(&key) if key.0 <= target => key,
                    _ => break,
                };
                queue.now = key.0;
                queue.pending.remove(&key)
            };
            if let Some(message) = due {
                deliver(message);
            }
        }
        self.inner.borrow_mut().now = target;
    }

    /// Advance the clock and collect the due messages instead of delivering
    /// them. Follow-up timers are not fired.
    pub fn drain(&self, by: Duration) -> Vec<Message> {
        let target = self.now().saturating_add(by);
        let mut queue = self.inner.borrow_mut();
        let later = queue.pending.split_off(&(target, u64::MAX));
        let due = std::mem::replace(&mut queue.pending, later);
        queue.now = target;
        due.into_values().collect()
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay: Duration, message: Message) -> TimerHandle {
        let mut queue = self.inner.borrow_mut();
        let seq = queue.next_seq;
        queue.next_seq += 1;
        let due = queue.now.saturating_add(delay);
        queue.pending.insert((due, seq), message);
        TimerHandle(seq)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.inner
            .borrow_mut()
            .pending
            .retain(|&(_, seq), _| seq != handle.0);
    }
}
