//! Prompts sent to the vision and advisory collaborators.

use crate::collaborators::ChatMessage;
use crate::knowledge::{KnowledgeBase, TreatmentRecord};
use crate::protocol::SegmentProtocol;

/// Symptoms quoted from the resolved record in the advisory prompt.
const ADVISORY_SYMPTOM_LIMIT: usize = 3;

/// Build the image-analysis prompt, listing the catalog as the known database.
pub fn build_vision_prompt(knowledge: &KnowledgeBase) -> String {
    let known = knowledge.names().collect::<Vec<_>>().join(", ");
    format!(
        "Role: Senior Agricultural Scientist & Plant Pathologist.\n\
         Task: Identify the plant and disease in the image. Look for specific fungal, \
         bacterial, or viral markers.\n\
         KNOWN DATABASE: {known}\n\
         If a match from the KNOWN DATABASE is likely, use that exact name as the CONDITION.\n\
         Output Format exactly like this:\n\
         ENTITY: [Crop Name]\n\
         CONDITION: [Specific Disease Name or 'Healthy']\n\
         CONFIDENCE: [0-100%]\n\
         SYMPTOMS: [Visual description]\n\
         CAUSE: [Pathogen name]\n\
         MANAGEMENT: [Short summary]"
    )
}

/// Condense a record into the facts the advisory generator must respect.
pub fn record_facts(record: &TreatmentRecord) -> String {
    let mut facts = format!("Severity: {}\n", record.severity);

    let symptoms: Vec<&str> = record
        .symptoms
        .iter()
        .take(ADVISORY_SYMPTOM_LIMIT)
        .map(String::as_str)
        .collect();
    facts.push_str(&format!("Key symptoms: {}\n", symptoms.join("; ")));

    if record.fungicides.is_empty() {
        facts.push_str("Treatment options: none (non-pathogenic disorder)\n");
    } else {
        let options: Vec<String> = record
            .fungicides
            .iter()
            .map(|f| format!("{} ({})", f.name, f.dosage))
            .collect();
        facts.push_str(&format!("Treatment options: {}\n", options.join("; ")));
    }

    if !record.treatment_schedule.is_empty() {
        let steps: Vec<String> = record
            .treatment_schedule
            .iter()
            .map(|step| format!("{}: {}", step.stage, step.action))
            .collect();
        facts.push_str(&format!("Schedule: {}\n", steps.join("; ")));
    }

    facts.push_str(&format!("Recovery: {}", record.recovery_timeline));
    facts
}

/// Build the advisory conversation for one diagnosis.
pub fn build_advisory_messages(
    analysis: &str,
    record: &TreatmentRecord,
    language: &str,
    protocol: &SegmentProtocol,
) -> Vec<ChatMessage> {
    let format_line = protocol.format_instruction(
        &format!("Full Advisory in {language}"),
        "1-sentence voice summary",
    );
    let user = format!(
        "OFFICIAL VISION ANALYSIS: {analysis}\n\n\
         DATABASE RECORD:\n{facts}\n\n\
         Based on the markers above, provide a professional agricultural advisory in {language}.\n\
         STRICT SECTIONS:\n\
         1. DIAGNOSIS: Explain what it is and how you know.\n\
         2. CHEMICAL SOLUTION: List specific active ingredients and dosages.\n\
         3. ORGANIC PROTOCOL: Provide bio-pesticide or natural solutions.\n\
         4. TREATMENT SCHEDULE: Day-by-day protocol.\n\
         If HEALTHY, focus on maximum yield optimization tips.\n\
         {format_line}",
        facts = record_facts(record),
    );

    vec![
        ChatMessage::system(format!(
            "Role: Agricultural Strategist. Language: {language}."
        )),
        ChatMessage::user(user),
    ]
}
