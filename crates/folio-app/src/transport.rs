//! Contact form delivery
//!
//! The page ships without a backend. [`SimulatedTransport`] keeps the
//! historical behaviour (pretend to send, succeed after a fixed delay);
//! a real transport reports its outcome the same way, by posting
//! [`Message::ContactDelivered`].

use std::time::Duration;

use folio_core::FieldSpec;

use crate::message::Message;
use crate::scheduler::Scheduler;

/// One field of a submitted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub spec: FieldSpec,
    pub value: String,
}

impl FormField {
    pub fn new(spec: FieldSpec, value: impl Into<String>) -> Self {
        Self {
            spec,
            value: value.into(),
        }
    }
}

/// Snapshot of the contact form at submit time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub fields: Vec<FormField>,
}

impl ContactSubmission {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    /// Value of the field with element id `id`.
    pub fn value(&self, id: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.spec.id == id)
            .map(|f| f.value.as_str())
    }
}

/// Delivers contact submissions
pub trait ContactTransport {
    /// Start delivering `submission`.
    ///
    /// The outcome must eventually reach the controller as
    /// `Message::ContactDelivered`, either through `scheduler` or through the
    /// host's own dispatch path.
    fn deliver(&mut self, submission: ContactSubmission, scheduler: &mut dyn Scheduler);
}

/// Pretends to send and succeeds after a fixed delay. No network traffic.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

impl ContactTransport for SimulatedTransport {
    fn deliver(&mut self, submission: ContactSubmission, scheduler: &mut dyn Scheduler) {
        tracing::info!(
            "Simulating delivery of contact message ({} fields)",
            submission.fields.len()
        );
        scheduler.schedule(self.delay, Message::ContactDelivered(Ok(())));
    }
}
