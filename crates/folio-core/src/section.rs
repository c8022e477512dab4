//! Section identifiers and URL fragments

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one mutually-exclusive content region.
///
/// Matches both the section element's `id` and the fragment of the
/// navigation link pointing at it (`href="#<id>"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Section entered when the URL carries no usable fragment.
    pub const HOME: &'static str = "home";

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn home() -> Self {
        Self::new(Self::HOME)
    }

    /// Parse a URL fragment or link target (`#about`, `about`).
    ///
    /// Returns `None` for an empty fragment.
    pub fn from_fragment(fragment: &str) -> Option<Self> {
        let id = fragment.trim().trim_start_matches('#');
        if id.is_empty() {
            None
        } else {
            Some(Self::new(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Link target for this section (`#<id>`).
    pub fn href(&self) -> String {
        format!("#{}", self.0)
    }
}

impl Default for SectionId {
    fn default() -> Self {
        Self::home()
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
