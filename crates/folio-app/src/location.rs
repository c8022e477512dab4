//! URL fragment capability

use std::cell::RefCell;
use std::rc::Rc;

pub trait Location {
    /// Current fragment without the leading `#`, if any.
    fn fragment(&self) -> Option<String>;

    /// Record `#fragment` as a new history entry without reloading.
    fn push_fragment(&mut self, fragment: &str);
}

/// In-memory location; clones share the same history
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryLocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Location whose address already carries `#fragment`.
    pub fn with_fragment(fragment: &str) -> Self {
        let location = Self::new();
        location
            .history
            .borrow_mut()
            .push(fragment.trim_start_matches('#').to_string());
        location
    }

    /// Every fragment the page has been at, oldest first.
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> Option<String> {
        self.history
            .borrow()
            .last()
            .filter(|f| !f.is_empty())
            .cloned()
    }

    fn push_fragment(&mut self, fragment: &str) {
        self.history.borrow_mut().push(fragment.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_location_has_no_fragment() {
        assert_eq!(MemoryLocation::new().fragment(), None);
        assert_eq!(MemoryLocation::with_fragment("#").fragment(), None);
    }

    #[test]
    fn test_push_updates_fragment() {
        let location = MemoryLocation::with_fragment("#about");
        let mut writer = location.clone();
        writer.push_fragment("blog");

        assert_eq!(location.fragment().as_deref(), Some("blog"));
        assert_eq!(location.history(), vec!["about", "blog"]);
    }
}
