//! Name resolution: maps a free-text disease label onto a catalog entry.
//!
//! Strategies run in fixed priority order and the first success wins:
//! exact (title-cased) → substring (either direction) → token overlap.
//! Substring and token-overlap scans walk the catalog in insertion order
//! and return the first qualifying entry, not the best-scoring one.

use std::collections::{HashMap, HashSet};

use super::types::{MatchStrategy, ResolvedRecord};
use super::KnowledgeBase;

/// Words dropped from a query before token-overlap scoring.
const STOP_WORDS: &[&str] = &["on", "the", "of", "in", "and", "a", "an"];

/// Canonical names a token must appear in before it stops identifying one entry.
const AMBIGUOUS_NAME_COUNT: usize = 2;

/// Minimum shared tokens for an unconditional token-overlap match.
const MIN_SHARED_TOKENS: usize = 2;

/// Minimum share of the canonical name's tokens for a single-token match.
const MIN_SHARED_RATIO: f64 = 0.5;

/// Title-case a label: the first letter after any non-letter is upper-cased,
/// every other letter lower-cased ("micro-irrigation fault" → "Micro-Irrigation Fault").
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Lower-cased whitespace tokens with stop-words removed.
pub fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Tokens that occur in several canonical names ("rot", "mildew").
///
/// A single shared ambiguous token cannot satisfy the ratio rule, so
/// "Glorp Rot" does not land on whichever "… Rot" entry comes first.
pub(crate) fn ambiguous_tokens<'a>(
    names: impl IntoIterator<Item = &'a str>,
) -> HashSet<String> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for name in names {
        for token in tokenize(name) {
            *counts.entry(token).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count >= AMBIGUOUS_NAME_COUNT)
        .map(|(token, _)| token)
        .collect()
}

fn token_overlap_accepts(
    query_tokens: &HashSet<String>,
    canonical: &str,
    ambiguous: &HashSet<String>,
) -> bool {
    let name_tokens = tokenize(canonical);
    if name_tokens.is_empty() {
        return false;
    }
    let shared: Vec<&String> = query_tokens.intersection(&name_tokens).collect();
    if shared.len() >= MIN_SHARED_TOKENS {
        return true;
    }
    if shared.is_empty() {
        return false;
    }
    let ratio = shared.len() as f64 / name_tokens.len() as f64;
    let specific = shared.iter().any(|token| !ambiguous.contains(*token));
    ratio >= MIN_SHARED_RATIO && specific
}

impl KnowledgeBase {
    /// Find the canonical name a query resolves to, with the strategy used.
    ///
    /// Returns `None` when nothing matches, including for blank queries.
    pub fn match_name(&self, query: &str) -> Option<(&str, MatchStrategy)> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }

        let normalized = title_case(trimmed);
        if let Some((name, _)) = self.entries.iter().find(|(name, _)| *name == normalized) {
            return Some((name.as_str(), MatchStrategy::Exact));
        }

        // Raw substring test: not bounded by word edges ("Healthy" hits "Healthy Neem").
        let lower = trimmed.to_lowercase();
        for (name, _) in &self.entries {
            let name_lower = name.to_lowercase();
            if lower.contains(&name_lower) || name_lower.contains(&lower) {
                return Some((name.as_str(), MatchStrategy::Substring));
            }
        }

        let query_tokens = tokenize(&lower);
        if query_tokens.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|(name, _)| token_overlap_accepts(&query_tokens, name, &self.ambiguous))
            .map(|(name, _)| (name.as_str(), MatchStrategy::TokenOverlap))
    }

    /// Find a catalog name containing `condition` whose remaining words all
    /// appear in `entity` ("Watermelon Leaf" + "Anthracnose" →
    /// "Watermelon Anthracnose"). First qualifying name in catalog order.
    pub fn qualify_with_entity(&self, entity: &str, condition: &str) -> Option<&str> {
        let condition_lower = condition.trim().to_lowercase();
        if condition_lower.is_empty() {
            return None;
        }
        let condition_tokens = tokenize(&condition_lower);
        let entity_tokens = tokenize(entity);

        self.names().find(|name| {
            if !name.to_lowercase().contains(&condition_lower) {
                return false;
            }
            let name_tokens = tokenize(name);
            let mut rest = name_tokens.difference(&condition_tokens).peekable();
            rest.peek().is_some() && rest.all(|token| entity_tokens.contains(token))
        })
    }

    /// Resolve a free-text disease name to a treatment record.
    ///
    /// Blank input yields `None`. Any other input yields either a
    /// [`ResolvedRecord::Matched`] clone of the catalog entry or
    /// [`ResolvedRecord::Unknown`] carrying the generic record.
    pub fn resolve(&self, query: &str) -> Option<ResolvedRecord> {
        if query.trim().is_empty() {
            return None;
        }

        match self.match_name(query) {
            Some((name, strategy)) => {
                tracing::debug!(query, canonical = name, ?strategy, "Disease name resolved");
                let record = self.get(name).cloned()?;
                Some(ResolvedRecord::Matched {
                    canonical_name: name.to_string(),
                    strategy,
                    record,
                })
            }
            None => {
                tracing::debug!(query, "No catalog entry matched");
                Some(ResolvedRecord::unknown())
            }
        }
    }
}

/// Resolve against the built-in catalog.
pub fn resolve(query: &str) -> Option<ResolvedRecord> {
    KnowledgeBase::builtin().resolve(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::types::{TreatmentRecord, UNKNOWN_SEVERITY};

    fn kb() -> &'static KnowledgeBase {
        KnowledgeBase::builtin()
    }

    fn canonical(query: &str) -> Option<String> {
        kb().resolve(query)
            .and_then(|r| r.canonical_name().map(str::to_string))
    }

    fn strategy(query: &str) -> Option<MatchStrategy> {
        match kb().resolve(query) {
            Some(ResolvedRecord::Matched { strategy, .. }) => Some(strategy),
            _ => None,
        }
    }

    #[test]
    fn title_case_follows_letter_boundaries() {
        assert_eq!(title_case("tomato late blight"), "Tomato Late Blight");
        assert_eq!(title_case("MICRO-IRRIGATION FAULT"), "Micro-Irrigation Fault");
        assert_eq!(title_case("paddy  blast"), "Paddy  Blast");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn tokenize_drops_stop_words() {
        let tokens = tokenize("Blight on the Tomato");
        assert!(tokens.contains("blight"));
        assert!(tokens.contains("tomato"));
        assert!(!tokens.contains("on"));
        assert!(!tokens.contains("the"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn tokenize_keeps_words_containing_stop_words() {
        // "anthracnose" contains "an"; it must survive.
        let tokens = tokenize("Mango Anthracnose");
        assert!(tokens.contains("anthracnose"));
    }

    #[test]
    fn every_canonical_name_resolves_to_itself() {
        for (name, record) in kb().iter() {
            match kb().resolve(name) {
                Some(ResolvedRecord::Matched {
                    canonical_name,
                    strategy,
                    record: resolved,
                }) => {
                    assert_eq!(canonical_name, name);
                    assert_eq!(strategy, MatchStrategy::Exact);
                    assert_eq!(&resolved, record);
                }
                other => panic!("{name} did not resolve exactly: {other:?}"),
            }
        }
    }

    #[test]
    fn exact_match_ignores_case_and_padding() {
        assert_eq!(canonical("  paddy blast "), Some("Paddy Blast".into()));
        assert_eq!(strategy("  paddy blast "), Some(MatchStrategy::Exact));
        assert_eq!(canonical("micro-irrigation fault"), Some("Micro-Irrigation Fault".into()));
    }

    #[test]
    fn blank_query_is_absent_not_unknown() {
        assert!(kb().resolve("").is_none());
        assert!(kb().resolve("   \t").is_none());
        assert!(resolve("").is_none());
    }

    #[test]
    fn substring_matches_in_both_directions() {
        // Query contains a canonical name.
        assert_eq!(canonical("severe paddy blast outbreak"), Some("Paddy Blast".into()));
        // Canonical name contains the query.
        assert_eq!(canonical("Late Blight"), Some("Tomato Late Blight".into()));
        assert_eq!(strategy("Late Blight"), Some(MatchStrategy::Substring));
    }

    #[test]
    fn substring_prefers_insertion_order() {
        // "Powdery Mildew" precedes "Mango Powdery Mildew".
        assert_eq!(canonical("mildew"), Some("Powdery Mildew".into()));
    }

    #[test]
    fn substring_is_not_word_bounded() {
        assert_eq!(canonical("Healthy"), Some("Healthy Neem".into()));
    }

    #[test]
    fn token_overlap_with_two_shared_tokens() {
        assert_eq!(canonical("Tomato Blight"), Some("Tomato Late Blight".into()));
        assert_eq!(strategy("Tomato Blight"), Some(MatchStrategy::TokenOverlap));
        assert_eq!(canonical("blight of the tomato"), Some("Tomato Late Blight".into()));
    }

    #[test]
    fn token_overlap_with_specific_single_token() {
        // {"sigatoka"} covers half of {"banana", "sigatoka"}.
        assert_eq!(canonical("Sigatoka Streak"), Some("Banana Sigatoka".into()));
    }

    #[test]
    fn single_unambiguous_token_matches_by_ratio() {
        // "canker" is half of {"citrus", "canker"} and names no other entry.
        assert_eq!(canonical("Lemon Canker"), Some("Citrus Canker".into()));
        assert_eq!(strategy("Lemon Canker"), Some(MatchStrategy::TokenOverlap));
        assert_eq!(canonical("Orange Canker"), Some("Citrus Canker".into()));
    }

    #[test]
    fn ambiguous_tokens_come_from_the_catalog() {
        let ambiguous = ambiguous_tokens(kb().names());
        for token in ["rot", "mildew", "leaf", "healthy"] {
            assert!(ambiguous.contains(token), "{token}");
        }
        for token in ["canker", "blight", "sigatoka"] {
            assert!(!ambiguous.contains(token), "{token}");
        }
    }

    #[test]
    fn ambiguous_single_token_does_not_match() {
        let resolved = kb().resolve("Glorp Rot").unwrap();
        assert!(resolved.is_unknown());
        assert_eq!(resolved.record().severity, UNKNOWN_SEVERITY);
        assert!(kb().resolve("Plant Glorp Rot").unwrap().is_unknown());
    }

    #[test]
    fn unmatched_query_yields_complete_unknown_record() {
        let resolved = kb().resolve("Xyzzy Quux").unwrap();
        assert!(resolved.is_unknown());
        let record = resolved.record();
        assert!(!record.symptoms.is_empty());
        assert!(!record.causes.is_empty());
        assert!(!record.recovery_timeline.is_empty());
    }

    #[test]
    fn stop_words_only_query_is_unknown() {
        assert!(kb().resolve("the of and").unwrap().is_unknown());
    }

    #[test]
    fn entity_qualifies_generic_condition() {
        assert_eq!(
            kb().qualify_with_entity("Watermelon Leaf", "Anthracnose"),
            Some("Watermelon Anthracnose")
        );
        assert_eq!(
            kb().qualify_with_entity("Mango", "Powdery Mildew"),
            Some("Mango Powdery Mildew")
        );
        assert_eq!(
            kb().qualify_with_entity("Tomato", "Late Blight"),
            Some("Tomato Late Blight")
        );
    }

    #[test]
    fn entity_qualification_needs_extra_words() {
        // "Powdery Mildew" itself adds nothing beyond the condition.
        assert_eq!(kb().qualify_with_entity("Grape", "Powdery Mildew"), None);
        assert_eq!(kb().qualify_with_entity("Mango", "  "), None);
    }

    #[test]
    fn custom_catalog_respects_insertion_order() {
        let kb = KnowledgeBase::from_entries(vec![
            ("Alpha Rot".to_string(), TreatmentRecord::unknown()),
            ("Beta Rot".to_string(), TreatmentRecord::unknown()),
        ]);
        let (name, strategy) = kb.match_name("rot").unwrap();
        assert_eq!(name, "Alpha Rot");
        assert_eq!(strategy, MatchStrategy::Substring);
    }
}
