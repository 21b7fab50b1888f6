use serde::{Deserialize, Serialize};

/// Severity sentinel meaning "no knowledge-base match".
pub const UNKNOWN_SEVERITY: &str = "Unknown";

/// Severity given to records synthesized from the vision analysis when no
/// knowledge-base entry resolves. Distinct from [`UNKNOWN_SEVERITY`].
pub const ACTIVE_MONITORING_SEVERITY: &str = "Active Monitoring Required";

/// One treatment option (chemical, biological or nutritional).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FungicideOption {
    pub name: String,
    pub active_ingredient: String,
    pub dosage: String,
    pub application: String,
    pub brands: Vec<String>,
}

/// One row of a treatment schedule.
///
/// Stage labels are heterogeneous: day numbers ("Day 7"), growth stages
/// ("Flowering") or phases ("Phase 1"). Order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleStep {
    pub stage: String,
    pub action: String,
}

/// The unit of domain knowledge for one disease or disorder.
///
/// Every field is always populated with a valid value, including for
/// synthesized and unknown records, so consumers never special-case a
/// missing field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreatmentRecord {
    pub severity: String,
    pub symptoms: Vec<String>,
    pub causes: Vec<String>,
    /// May be empty for non-pathogenic disorders (salinity, irrigation faults).
    pub fungicides: Vec<FungicideOption>,
    pub preventive_measures: Vec<String>,
    pub treatment_schedule: Vec<ScheduleStep>,
    pub safety_precautions: Vec<String>,
    pub recovery_timeline: String,
}

impl TreatmentRecord {
    /// The generic record returned when a query matches nothing.
    pub fn unknown() -> Self {
        Self {
            severity: UNKNOWN_SEVERITY.to_string(),
            symptoms: vec!["Disease information not available in database".to_string()],
            causes: vec!["Consult local agricultural expert".to_string()],
            fungicides: Vec::new(),
            preventive_measures: vec!["Practice good agricultural hygiene".to_string()],
            treatment_schedule: Vec::new(),
            safety_precautions: vec!["Always wear protective equipment".to_string()],
            recovery_timeline: "Consult expert for timeline".to_string(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.severity == UNKNOWN_SEVERITY
    }
}

/// How a query was matched to a canonical record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    Exact,
    Substring,
    TokenOverlap,
    /// A substring match narrowed by the crop entity ("Watermelon" + "Anthracnose").
    EntityQualified,
}

/// A treatment record together with where it came from.
///
/// Consumers distinguish provenance from the variant instead of
/// inspecting severity sentinels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "provenance", rename_all = "snake_case")]
pub enum ResolvedRecord {
    /// Found in the knowledge base.
    Matched {
        canonical_name: String,
        strategy: MatchStrategy,
        record: TreatmentRecord,
    },
    /// Built from the vision analysis after every match attempt failed.
    Synthesized { record: TreatmentRecord },
    /// No match; carries the generic unknown record.
    Unknown { record: TreatmentRecord },
}

impl ResolvedRecord {
    pub fn unknown() -> Self {
        ResolvedRecord::Unknown {
            record: TreatmentRecord::unknown(),
        }
    }

    pub fn record(&self) -> &TreatmentRecord {
        match self {
            ResolvedRecord::Matched { record, .. }
            | ResolvedRecord::Synthesized { record }
            | ResolvedRecord::Unknown { record } => record,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, ResolvedRecord::Unknown { .. })
    }

    pub fn canonical_name(&self) -> Option<&str> {
        match self {
            ResolvedRecord::Matched { canonical_name, .. } => Some(canonical_name),
            _ => None,
        }
    }
}
