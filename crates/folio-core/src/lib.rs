//! # folio-core - Core Domain Types
//!
//! Foundation crate for Folio. Provides domain types, error handling and the
//! pure rules behind the portfolio page's behaviours.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`Theme`] - Light/dark theme with its stored representation
//! - [`SectionId`] - Identifier shared by a section and its navigation link
//! - [`Filter`] - Category filter with the `"all"` wildcard
//! - [`SearchQuery`], [`BlogEntry`] - Case-insensitive blog search
//! - [`NotificationKind`], [`NotificationId`] - Floating notifications
//!
//! ### Validation (`validation`)
//! - [`validate_field()`] - Required / email checks for one field
//! - [`is_valid_email()`] - The `local@domain.tld` pattern
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod error;
pub mod filter;
pub mod logging;
pub mod notification;
pub mod search;
pub mod section;
pub mod theme;
pub mod validation;

/// Prelude for common imports used throughout all Folio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use filter::{Filter, WILDCARD};
pub use notification::{NotificationId, NotificationKind};
pub use search::{BlogEntry, SearchQuery};
pub use section::SectionId;
pub use theme::{Theme, UnknownTheme, THEME_STORAGE_KEY};
pub use validation::{is_valid_email, validate_field, FieldError, FieldKind, FieldSpec};
