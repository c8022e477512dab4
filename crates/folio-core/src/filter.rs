//! Category filtering for project and blog cards

use std::fmt;

/// Attribute value meaning "show every card".
pub const WILDCARD: &str = "all";

/// Active filter of a card grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    /// Parse a button's `data-filter` / `data-category` value.
    ///
    /// A missing or empty value is treated as the wildcard.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == WILDCARD {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }

    /// Whether a card tagged with `category` is visible under this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(wanted) => wanted == category,
        }
    }

    /// Attribute value carried by the button that selects this filter.
    pub fn as_str(&self) -> &str {
        match self {
            Filter::All => WILDCARD,
            Filter::Category(c) => c,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
