use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::protocol::MarkerProtocol;

pub const ENTITY_MARKER: &str = "ENTITY:";
pub const CONDITION_MARKER: &str = "CONDITION:";
pub const CONFIDENCE_MARKER: &str = "CONFIDENCE:";
pub const SYMPTOMS_MARKER: &str = "SYMPTOMS:";
pub const VISUAL_MARKERS_MARKER: &str = "VISUAL_MARKERS:";
pub const CAUSE_MARKER: &str = "CAUSE:";

pub const DEFAULT_ENTITY: &str = "Plant";
pub const DEFAULT_CONDITION: &str = "Condition";
pub const DEFAULT_CONFIDENCE: &str = "75%";
pub const DEFAULT_VISUAL_MARKERS: &str = "Analyzing visual symptoms...";

static VISION_PROTOCOL: LazyLock<MarkerProtocol> = LazyLock::new(|| {
    MarkerProtocol::new(&[
        ENTITY_MARKER,
        CONDITION_MARKER,
        CONFIDENCE_MARKER,
        SYMPTOMS_MARKER,
        VISUAL_MARKERS_MARKER,
        CAUSE_MARKER,
    ])
    .with_markdown_cleanup()
});

/// Fields read from a vision analysis, with defaults for anything missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisionFindings {
    pub entity: String,
    pub condition: String,
    /// Free text, usually a percentage. Not validated.
    pub confidence: String,
    pub visual_markers: String,
    pub cause: Option<String>,
}

impl VisionFindings {
    pub fn from_analysis(analysis: &str) -> Self {
        let fields = VISION_PROTOCOL.extract(analysis);
        Self {
            entity: fields.get_or(ENTITY_MARKER, DEFAULT_ENTITY),
            condition: fields.get_or(CONDITION_MARKER, DEFAULT_CONDITION),
            confidence: fields.get_or(CONFIDENCE_MARKER, DEFAULT_CONFIDENCE),
            visual_markers: fields
                .first_present(&[VISUAL_MARKERS_MARKER, SYMPTOMS_MARKER])
                .unwrap_or(DEFAULT_VISUAL_MARKERS)
                .to_string(),
            cause: fields.first_present(&[CAUSE_MARKER]).map(str::to_string),
        }
    }

    /// Second-attempt search key: `"{entity} {condition}"`.
    pub fn qualified_query(&self) -> String {
        format!("{} {}", self.entity, self.condition)
    }

    /// Display label, e.g. `"TOMATO | LATE BLIGHT"`.
    pub fn label(&self) -> String {
        format!(
            "{} | {}",
            self.entity.to_uppercase(),
            self.condition.to_uppercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_all_markers() {
        let findings = VisionFindings::from_analysis(
            "ENTITY: Tomato\nCONDITION: Late Blight\nCONFIDENCE: 91%\n\
             SYMPTOMS: dark water-soaked lesions\nCAUSE: Phytophthora infestans",
        );
        assert_eq!(findings.entity, "Tomato");
        assert_eq!(findings.condition, "Late Blight");
        assert_eq!(findings.confidence, "91%");
        assert_eq!(findings.visual_markers, "dark water-soaked lesions");
        assert_eq!(findings.cause.as_deref(), Some("Phytophthora infestans"));
    }

    #[test]
    fn defaults_for_unstructured_text() {
        let findings = VisionFindings::from_analysis("Offline Audit");
        assert_eq!(findings.entity, DEFAULT_ENTITY);
        assert_eq!(findings.condition, DEFAULT_CONDITION);
        assert_eq!(findings.confidence, DEFAULT_CONFIDENCE);
        assert_eq!(findings.visual_markers, DEFAULT_VISUAL_MARKERS);
        assert!(findings.cause.is_none());
    }

    #[test]
    fn visual_markers_preferred_over_symptoms() {
        let findings = VisionFindings::from_analysis(
            "SYMPTOMS: yellowing\nVISUAL_MARKERS: concentric rings",
        );
        assert_eq!(findings.visual_markers, "concentric rings");
    }

    #[test]
    fn markdown_emphasis_is_stripped() {
        let findings = VisionFindings::from_analysis("**ENTITY:** Mango\n**CONDITION:** Anthracnose");
        assert_eq!(findings.entity, "Mango");
        assert_eq!(findings.condition, "Anthracnose");
    }

    #[test]
    fn label_and_qualified_query() {
        let findings = VisionFindings::from_analysis("ENTITY: Paddy\nCONDITION: Blast");
        assert_eq!(findings.label(), "PADDY | BLAST");
        assert_eq!(findings.qualified_query(), "Paddy Blast");
    }
}
