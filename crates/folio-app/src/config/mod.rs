//! Configuration parsing for Folio
//!
//! Settings arrive as TOML text (the website embeds them in `site.toml`).
//! Every field has a default, so an empty document is a valid configuration.

pub mod settings;
pub mod types;

pub use settings::{load_settings, parse_settings, validate_settings};
pub use types::*;
