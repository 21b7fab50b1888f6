//! Treatment knowledge base and disease-name resolution.

mod catalog;
pub mod matcher;
pub mod types;

use std::collections::HashSet;
use std::sync::LazyLock;

pub use matcher::{resolve, title_case, tokenize};
pub use types::*;

static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(|| {
    KnowledgeBase::from_entries(
        catalog::entries()
            .into_iter()
            .map(|(name, record)| (name.to_string(), record))
            .collect(),
    )
});

/// An ordered, read-only mapping from canonical disease name to record.
///
/// Insertion order is significant: fuzzy matching returns the first
/// qualifying entry.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<(String, TreatmentRecord)>,
    /// Tokens shared by two or more canonical names.
    ambiguous: HashSet<String>,
}

impl KnowledgeBase {
    /// The process-wide catalog, built on first access.
    pub fn builtin() -> &'static KnowledgeBase {
        &BUILTIN
    }

    pub fn from_entries(entries: Vec<(String, TreatmentRecord)>) -> Self {
        let ambiguous = matcher::ambiguous_tokens(entries.iter().map(|(name, _)| name.as_str()));
        Self { entries, ambiguous }
    }

    /// Exact lookup by canonical name.
    pub fn get(&self, canonical_name: &str) -> Option<&TreatmentRecord> {
        self.entries
            .iter()
            .find(|(name, _)| name == canonical_name)
            .map(|(_, record)| record)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TreatmentRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_preserves_catalog_order() {
        let names: Vec<&str> = KnowledgeBase::builtin().names().collect();
        assert_eq!(names.first(), Some(&"Powdery Mildew"));
        assert_eq!(names.last(), Some(&"Brown Rot"));
        assert_eq!(names.len(), KnowledgeBase::builtin().len());
    }

    #[test]
    fn get_is_exact() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.get("Tomato Late Blight").unwrap().severity, "Extreme");
        assert!(kb.get("tomato late blight").is_none());
    }

    #[test]
    fn empty_base_resolves_everything_to_unknown() {
        let kb = KnowledgeBase::from_entries(Vec::new());
        assert!(kb.is_empty());
        assert!(kb.resolve("Paddy Blast").unwrap().is_unknown());
    }
}
