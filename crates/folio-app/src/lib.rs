//! folio-app - Page controller state and orchestration for Folio
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! portfolio page: `UiState` is the model, `Message` the events, and
//! `handler::update` the pure transition function. [`PageController`] runs
//! the loop and performs the resulting actions through injected host
//! capabilities (document view, scheduler, preference store, location,
//! contact transport), so every behaviour runs without a browser.

mod actions;
pub mod config;
pub mod controller;
pub mod dom;
pub mod handler;
pub mod location;
pub mod message;
pub mod preferences;
pub mod scheduler;
pub mod state;
pub mod transport;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Re-export primary types
pub use config::Settings;
pub use controller::{PageController, Services};
pub use dom::{DocumentView, Selector};
pub use handler::{update, TimerSlot, UpdateAction, UpdateResult};
pub use location::{Location, MemoryLocation};
pub use message::Message;
pub use preferences::{MemoryPreferences, PreferenceStore};
pub use scheduler::{Scheduler, TimerHandle, VirtualScheduler};
pub use state::{ContactPhase, UiState};
pub use transport::{ContactSubmission, ContactTransport, FormField, SimulatedTransport};
