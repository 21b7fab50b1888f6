use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use super::findings::VisionFindings;
use super::prompt::{build_advisory_messages, build_vision_prompt};
use super::synthesis::synthesize;
use super::types::{DiagnosisInput, DiagnosisResult};
use crate::advisory::resources::{official_resource_link, resource_footer};
use crate::collaborators::{TextClient, VisionClient};
use crate::knowledge::{KnowledgeBase, MatchStrategy, ResolvedRecord};
use crate::protocol::{SegmentProtocol, Segments};
use crate::session::{SessionContext, SessionError};

/// Analysis text used when the vision collaborator is unavailable.
pub const VISION_OFFLINE_TEXT: &str = "Offline Audit";

/// Advisory text used when the text collaborator is unavailable.
pub const ADVISORY_OFFLINE_TEXT: &str = "Local logic active.";

pub type SharedVisionClient = Arc<dyn VisionClient + Send + Sync>;
pub type SharedTextClient = Arc<dyn TextClient + Send + Sync>;

/// Orchestrates one diagnosis:
/// vision → extract → resolve → retry with entity → synthesize → advise → split.
///
/// Never fails. Missing or failing collaborators degrade to fixed literals.
pub struct DiagnosisPipeline {
    knowledge: &'static KnowledgeBase,
    vision: Option<SharedVisionClient>,
    advisory: Option<SharedTextClient>,
    protocol: SegmentProtocol,
}

impl DiagnosisPipeline {
    pub fn new(vision: Option<SharedVisionClient>, advisory: Option<SharedTextClient>) -> Self {
        Self {
            knowledge: KnowledgeBase::builtin(),
            vision,
            advisory,
            protocol: SegmentProtocol::advisory(),
        }
    }

    /// Pipeline with no collaborators; every call degrades offline.
    pub fn offline() -> Self {
        Self::new(None, None)
    }

    pub fn knowledge(&self) -> &'static KnowledgeBase {
        self.knowledge
    }

    pub fn vision_prompt(&self) -> String {
        build_vision_prompt(self.knowledge)
    }

    /// Ask the vision collaborator to describe an image.
    pub fn analyze_image(&self, image_base64: &str) -> String {
        let Some(vision) = &self.vision else {
            tracing::warn!("No vision collaborator configured, using offline analysis");
            return VISION_OFFLINE_TEXT.to_string();
        };
        match vision.describe_image(&self.vision_prompt(), image_base64) {
            Ok(analysis) => analysis.trim().to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "Vision analysis failed, using offline analysis");
                VISION_OFFLINE_TEXT.to_string()
            }
        }
    }

    /// Resolve findings to a record: condition, then entity-qualified
    /// condition, then synthesis. Never returns [`ResolvedRecord::Unknown`].
    pub fn resolve_findings(&self, findings: &VisionFindings) -> ResolvedRecord {
        let first = self
            .knowledge
            .resolve(&findings.condition)
            .unwrap_or_else(ResolvedRecord::unknown);

        if let ResolvedRecord::Matched {
            strategy: MatchStrategy::Substring,
            canonical_name,
            ..
        } = &first
        {
            if let Some(narrowed) = self
                .knowledge
                .qualify_with_entity(&findings.entity, &findings.condition)
                .filter(|name| *name != canonical_name.as_str())
            {
                if let Some(record) = self.knowledge.get(narrowed) {
                    tracing::debug!(from = %canonical_name, to = narrowed, "Narrowed by entity");
                    return ResolvedRecord::Matched {
                        canonical_name: narrowed.to_string(),
                        strategy: MatchStrategy::EntityQualified,
                        record: record.clone(),
                    };
                }
            }
        }
        if !first.is_unknown() {
            return first;
        }

        let qualified = findings.qualified_query();
        let second = self
            .knowledge
            .resolve(&qualified)
            .unwrap_or_else(ResolvedRecord::unknown);
        if !second.is_unknown() {
            return second;
        }

        tracing::info!(
            entity = %findings.entity,
            condition = %findings.condition,
            "No catalog match, synthesizing record"
        );
        ResolvedRecord::Synthesized {
            record: synthesize(findings),
        }
    }

    /// Ask the advisory collaborator for a localized two-segment advisory.
    pub fn advise(&self, analysis: &str, resolved: &ResolvedRecord, language: &str) -> Segments {
        let raw = match &self.advisory {
            None => ADVISORY_OFFLINE_TEXT.to_string(),
            Some(client) => {
                let messages =
                    build_advisory_messages(analysis, resolved.record(), language, &self.protocol);
                client.complete(&messages, None).unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "Advisory generation failed, using local text");
                    ADVISORY_OFFLINE_TEXT.to_string()
                })
            }
        };
        self.protocol.split(&raw)
    }

    /// Run a full diagnosis.
    pub fn diagnose(&self, input: DiagnosisInput, language: &str) -> DiagnosisResult {
        let span = tracing::info_span!("diagnose", language);
        let _guard = span.enter();
        let start = std::time::Instant::now();

        let analysis = match input {
            DiagnosisInput::Image(image) => self.analyze_image(&image),
            DiagnosisInput::Description(text) => text,
        };

        let findings = VisionFindings::from_analysis(&analysis);
        let resolved = self.resolve_findings(&findings);
        let segments = self.advise(&analysis, &resolved, language);

        let resource_link = official_resource_link(&format!(
            "{} identification treatment {}",
            findings.condition,
            resolved.record().severity
        ));
        let answer = format!(
            "{}{}",
            segments.answer,
            resource_footer("OFFICIAL AUDIT RECORD", "ICAR Database Link", &resource_link)
        );

        tracing::info!(
            entity = %findings.entity,
            condition = %findings.condition,
            canonical = resolved.canonical_name().unwrap_or("-"),
            synthesized = matches!(resolved, ResolvedRecord::Synthesized { .. }),
            advisory_format_honored = segments.honored,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Diagnosis complete"
        );

        DiagnosisResult {
            id: Uuid::new_v4(),
            diagnosed_at: Utc::now(),
            language: language.to_string(),
            label: findings.label(),
            entity: findings.entity,
            condition: findings.condition,
            confidence: findings.confidence,
            record: resolved,
            answer,
            speech_summary: segments.summary,
            scientific_breakdown: analysis,
            resource_link,
        }
    }

    /// Diagnose a free-text analysis in the vision output format.
    pub fn diagnose_description(&self, description: &str, language: &str) -> DiagnosisResult {
        self.diagnose(DiagnosisInput::Description(description.to_string()), language)
    }

    /// Diagnose a base64-encoded image.
    pub fn diagnose_image(&self, image_base64: &str, language: &str) -> DiagnosisResult {
        self.diagnose(DiagnosisInput::Image(image_base64.to_string()), language)
    }

    /// Diagnose and store the result as the session's last diagnosis.
    pub fn diagnose_into(
        &self,
        session: &SessionContext,
        input: DiagnosisInput,
        language: &str,
    ) -> Result<DiagnosisResult, SessionError> {
        let result = self.diagnose(input, language);
        session.record_diagnosis(result.clone())?;
        Ok(result)
    }
}
