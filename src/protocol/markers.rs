//! Line-marker extraction from free text.
//!
//! A generator is asked to emit lines such as `ENTITY: Tomato`. Nothing
//! enforces that, so extraction is tolerant: markers may be missing,
//! reordered, repeated or embedded mid-line. Values are never validated.

use std::collections::HashMap;

/// Which line wins when a marker occurs on several lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OccurrencePolicy {
    FirstWins,
    /// Sequential overwrite: the last matching line wins.
    #[default]
    LastWins,
}

/// Characters trimmed from value edges when markdown cleanup is enabled.
const MARKDOWN_EDGE_CHARS: &[char] = &['*', '_', '#'];

/// A configured set of line markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerProtocol {
    markers: Vec<String>,
    policy: OccurrencePolicy,
    strip_markdown: bool,
}

impl MarkerProtocol {
    pub fn new(markers: &[&str]) -> Self {
        Self {
            markers: markers.iter().map(|m| m.to_string()).collect(),
            policy: OccurrencePolicy::default(),
            strip_markdown: false,
        }
    }

    pub fn with_policy(mut self, policy: OccurrencePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Trim `*`, `_` and `#` from value edges (`**ENTITY:** Tomato**`).
    pub fn with_markdown_cleanup(mut self) -> Self {
        self.strip_markdown = true;
        self
    }

    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.markers.iter().map(String::as_str)
    }

    /// Extract marker values from `text`.
    ///
    /// For each line and each marker occurring in it, the value is the line
    /// with the marker's first occurrence removed, trimmed.
    pub fn extract(&self, text: &str) -> ExtractedFields {
        let mut values: HashMap<String, String> = HashMap::new();

        for line in text.lines() {
            for marker in &self.markers {
                if !line.contains(marker.as_str()) {
                    continue;
                }
                if self.policy == OccurrencePolicy::FirstWins && values.contains_key(marker) {
                    continue;
                }
                let mut value = line.replacen(marker.as_str(), "", 1).trim().to_string();
                if self.strip_markdown {
                    value = value
                        .trim_matches(MARKDOWN_EDGE_CHARS)
                        .trim()
                        .to_string();
                }
                values.insert(marker.clone(), value);
            }
        }

        ExtractedFields { values }
    }
}

/// Marker → value mapping. Absent markers are absent, not empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    values: HashMap<String, String>,
}

impl ExtractedFields {
    pub fn get(&self, marker: &str) -> Option<&str> {
        self.values.get(marker).map(String::as_str)
    }

    /// Value of the first listed marker that was found with a non-blank value.
    pub fn first_present(&self, markers: &[&str]) -> Option<&str> {
        markers
            .iter()
            .filter_map(|marker| self.get(marker))
            .find(|value| !value.is_empty())
    }

    /// Non-blank value for `marker`, or `default`.
    pub fn get_or(&self, marker: &str, default: &str) -> String {
        self.first_present(&[marker]).unwrap_or(default).to_string()
    }

    pub fn contains(&self, marker: &str) -> bool {
        self.values.contains_key(marker)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_map(self) -> HashMap<String, String> {
        self.values
    }
}

/// Extract with the default last-wins policy and no cleanup.
pub fn extract(text: &str, markers: &[&str]) -> HashMap<String, String> {
    MarkerProtocol::new(markers).extract(text).into_map()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VISION: &[&str] = &["ENTITY:", "CONDITION:", "CONFIDENCE:"];

    #[test]
    fn extracts_well_formed_lines() {
        let map = extract(
            "ENTITY: Tomato\nCONDITION: Late Blight\nCONFIDENCE: 91%",
            VISION,
        );
        assert_eq!(map["ENTITY:"], "Tomato");
        assert_eq!(map["CONDITION:"], "Late Blight");
        assert_eq!(map["CONFIDENCE:"], "91%");
    }

    #[test]
    fn missing_markers_are_absent() {
        let map = extract("Some prose about leaves.\nENTITY: Mango", VISION);
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("CONDITION:"));
    }

    #[test]
    fn order_does_not_matter() {
        let map = extract("CONFIDENCE: 40%\nENTITY: Rice", VISION);
        assert_eq!(map["ENTITY:"], "Rice");
        assert_eq!(map["CONFIDENCE:"], "40%");
    }

    #[test]
    fn last_occurrence_wins_by_default() {
        let map = extract("CONDITION: Rust\nCONDITION: Paddy Blast", VISION);
        assert_eq!(map["CONDITION:"], "Paddy Blast");
    }

    #[test]
    fn first_wins_policy_keeps_earliest() {
        let fields = MarkerProtocol::new(VISION)
            .with_policy(OccurrencePolicy::FirstWins)
            .extract("CONDITION: Rust\nCONDITION: Paddy Blast");
        assert_eq!(fields.get("CONDITION:"), Some("Rust"));
    }

    #[test]
    fn marker_mid_line_removes_first_occurrence_only() {
        let map = extract("1. ENTITY: Neem ENTITY: tree", VISION);
        assert_eq!(map["ENTITY:"], "1.  Neem ENTITY: tree");
    }

    #[test]
    fn confidence_is_not_validated() {
        let map = extract("CONFIDENCE: quite sure", VISION);
        assert_eq!(map["CONFIDENCE:"], "quite sure");
    }

    #[test]
    fn markdown_cleanup_trims_emphasis() {
        let fields = MarkerProtocol::new(VISION)
            .with_markdown_cleanup()
            .extract("**ENTITY:** Tomato\n## CONDITION: Leaf Spot");
        assert_eq!(fields.get("ENTITY:"), Some("Tomato"));
        assert_eq!(fields.get("CONDITION:"), Some("Leaf Spot"));
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        let fields = MarkerProtocol::new(VISION).extract("ENTITY:   \nCONDITION: Wilt");
        assert!(fields.contains("ENTITY:"));
        assert_eq!(fields.get_or("ENTITY:", "Plant"), "Plant");
        assert_eq!(fields.get_or("CONDITION:", "Condition"), "Wilt");
    }

    #[test]
    fn first_present_prefers_listed_order() {
        let fields = MarkerProtocol::new(&["SYMPTOMS:", "VISUAL_MARKERS:"])
            .extract("SYMPTOMS: yellowing\nVISUAL_MARKERS: lesions");
        assert_eq!(
            fields.first_present(&["VISUAL_MARKERS:", "SYMPTOMS:"]),
            Some("lesions")
        );
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "ENTITY: Banana\nCONDITION: Sigatoka\nCONFIDENCE: 80%";
        let protocol = MarkerProtocol::new(VISION);
        assert_eq!(protocol.extract(text), protocol.extract(text));
    }
}
