use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::knowledge::ResolvedRecord;

/// Input to one diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisInput {
    /// Base64-encoded JPEG, described by the vision collaborator first.
    Image(String),
    /// Free-text analysis already in the vision output format.
    Description(String),
}

/// Complete result of one diagnosis. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub id: Uuid,
    pub diagnosed_at: DateTime<Utc>,
    pub language: String,
    pub entity: String,
    pub condition: String,
    /// Free text, usually a percentage.
    pub confidence: String,
    /// `"ENTITY | CONDITION"`, upper-cased.
    pub label: String,
    /// Record with provenance (matched, synthesized or unknown).
    pub record: ResolvedRecord,
    /// Full localized advisory, with the resource link appended.
    pub answer: String,
    /// Short spoken summary.
    pub speech_summary: String,
    /// Raw vision analysis the diagnosis was derived from.
    pub scientific_breakdown: String,
    pub resource_link: String,
}
