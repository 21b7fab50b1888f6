use super::findings::VisionFindings;
use crate::knowledge::{
    FungicideOption, ScheduleStep, TreatmentRecord, ACTIVE_MONITORING_SEVERITY,
};

/// Characters of the visual-marker text kept as the leading symptom.
const SYMPTOM_EXCERPT_CHARS: usize = 150;

/// Build a schema-complete record from the vision findings alone.
///
/// Used when neither the condition nor the entity-qualified query resolves.
pub fn synthesize(findings: &VisionFindings) -> TreatmentRecord {
    let excerpt: String = findings
        .visual_markers
        .chars()
        .take(SYMPTOM_EXCERPT_CHARS)
        .collect();

    let mut causes = Vec::new();
    if let Some(cause) = findings.cause.as_deref().filter(|c| !c.is_empty()) {
        causes.push(cause.to_string());
    }
    causes.push("Environmental stress or pathogen activity".to_string());

    TreatmentRecord {
        severity: ACTIVE_MONITORING_SEVERITY.to_string(),
        symptoms: vec![
            excerpt,
            "Detecting localized pathology indicators".to_string(),
        ],
        causes,
        fungicides: vec![FungicideOption {
            name: "Broad-spectrum Protectant".to_string(),
            active_ingredient: "Multi-site contact protectant".to_string(),
            dosage: "2g/L".to_string(),
            application: "Foliar Spray".to_string(),
            brands: Vec::new(),
        }],
        preventive_measures: vec![
            "Improve air circulation".to_string(),
            "Monitor humidity levels".to_string(),
        ],
        treatment_schedule: vec![
            ScheduleStep {
                stage: "Day 1".to_string(),
                action: "Apply protective spray".to_string(),
            },
            ScheduleStep {
                stage: "Day 7".to_string(),
                action: "Re-evaluate spread".to_string(),
            },
        ],
        safety_precautions: vec!["Use standard PPE".to_string()],
        recovery_timeline: "10-14 days".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::UNKNOWN_SEVERITY;

    fn findings(markers: &str, cause: Option<&str>) -> VisionFindings {
        VisionFindings {
            entity: "Plant".into(),
            condition: "Glorp Rot".into(),
            confidence: "75%".into(),
            visual_markers: markers.into(),
            cause: cause.map(str::to_string),
        }
    }

    #[test]
    fn synthesized_record_is_complete_and_labelled() {
        let record = synthesize(&findings("brown ring lesions", None));
        assert_eq!(record.severity, ACTIVE_MONITORING_SEVERITY);
        assert_ne!(record.severity, UNKNOWN_SEVERITY);
        assert_eq!(record.symptoms[0], "brown ring lesions");
        assert_eq!(record.fungicides.len(), 1);
        let day7 = &record.treatment_schedule[1];
        assert_eq!(day7.stage, "Day 7");
        assert_eq!(day7.action, "Re-evaluate spread");
        assert_eq!(record.recovery_timeline, "10-14 days");
    }

    #[test]
    fn long_markers_are_truncated() {
        let record = synthesize(&findings(&"x".repeat(500), None));
        assert_eq!(record.symptoms[0].chars().count(), SYMPTOM_EXCERPT_CHARS);
    }

    #[test]
    fn reported_cause_leads_causes() {
        let record = synthesize(&findings("spots", Some("Fusarium oxysporum")));
        assert_eq!(record.causes[0], "Fusarium oxysporum");
        assert_eq!(record.causes.len(), 2);
    }
}
