//! Free-text search over blog posts

/// Searchable text of one blog card
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogEntry {
    pub title: String,
    pub excerpt: String,
    pub tags: Vec<String>,
}

/// Normalised search term
///
/// Matching is a case-insensitive substring test over the title, the excerpt
/// and every tag. An empty (or whitespace-only) term matches every post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    pub fn matches(&self, entry: &BlogEntry) -> bool {
        if self.is_empty() {
            return true;
        }
        self.hit(&entry.title)
            || self.hit(&entry.excerpt)
            || entry.tags.iter().any(|tag| self.hit(tag))
    }

    fn hit(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }
}
