//! Per-service session state: the last diagnosis and the current
//! simulation parameters.
//!
//! Both slots live behind one `RwLock`, so a report snapshot always sees
//! a diagnosis and parameters that were current at the same instant.
//! Writes replace the whole value; the last write wins.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pipeline::DiagnosisResult;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session lock poisoned")]
    LockPoisoned,
}

// ═══════════════════════════════════════════════════════════
// Simulation parameters
// ═══════════════════════════════════════════════════════════

/// Field conditions used by prediction and reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub temperature: f64,
    pub humidity: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
    pub dissolved_oxygen: f64,
    pub sector: String,
    pub country: String,
    pub state: String,
    pub place: String,
    pub soil_type: String,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            temperature: 28.5,
            humidity: 55.0,
            nitrogen: 2.50,
            phosphorus: 1.80,
            potassium: 2.20,
            ph: 6.5,
            dissolved_oxygen: 6.50,
            sector: "North Sector".to_string(),
            country: "India".to_string(),
            state: "Tamil Nadu".to_string(),
            place: "Coimbatore".to_string(),
            soil_type: "Alluvial".to_string(),
        }
    }
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationPatch {
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub nitrogen: Option<f64>,
    pub phosphorus: Option<f64>,
    pub potassium: Option<f64>,
    pub ph: Option<f64>,
    pub dissolved_oxygen: Option<f64>,
    pub sector: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub place: Option<String>,
    pub soil_type: Option<String>,
}

impl SimulationParams {
    pub fn apply(&mut self, patch: SimulationPatch) {
        fn merge<T>(slot: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *slot = value;
            }
        }
        merge(&mut self.temperature, patch.temperature);
        merge(&mut self.humidity, patch.humidity);
        merge(&mut self.nitrogen, patch.nitrogen);
        merge(&mut self.phosphorus, patch.phosphorus);
        merge(&mut self.potassium, patch.potassium);
        merge(&mut self.ph, patch.ph);
        merge(&mut self.dissolved_oxygen, patch.dissolved_oxygen);
        merge(&mut self.sector, patch.sector);
        merge(&mut self.country, patch.country);
        merge(&mut self.state, patch.state);
        merge(&mut self.place, patch.place);
        merge(&mut self.soil_type, patch.soil_type);
    }
}

// ═══════════════════════════════════════════════════════════
// SessionContext
// ═══════════════════════════════════════════════════════════

/// Consistent snapshot handed to report generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportContext {
    pub last_diagnosis: Option<DiagnosisResult>,
    pub simulation: SimulationParams,
}

#[derive(Debug, Default)]
struct Slots {
    last_diagnosis: Option<DiagnosisResult>,
    simulation: SimulationParams,
}

/// Explicit replacement for process-wide "last result" globals.
#[derive(Debug, Default)]
pub struct SessionContext {
    slots: RwLock<Slots>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Last diagnosis ──────────────────────────────────────

    /// Replace the last-diagnosis slot.
    pub fn record_diagnosis(&self, result: DiagnosisResult) -> Result<(), SessionError> {
        let mut slots = self.slots.write().map_err(|_| SessionError::LockPoisoned)?;
        tracing::debug!(id = %result.id, label = %result.label, "Last diagnosis replaced");
        slots.last_diagnosis = Some(result);
        Ok(())
    }

    pub fn last_diagnosis(&self) -> Result<Option<DiagnosisResult>, SessionError> {
        let slots = self.slots.read().map_err(|_| SessionError::LockPoisoned)?;
        Ok(slots.last_diagnosis.clone())
    }

    // ── Simulation parameters ───────────────────────────────

    pub fn simulation(&self) -> Result<SimulationParams, SessionError> {
        let slots = self.slots.read().map_err(|_| SessionError::LockPoisoned)?;
        Ok(slots.simulation.clone())
    }

    /// Merge a partial update and return the resulting parameters.
    pub fn update_simulation(
        &self,
        patch: SimulationPatch,
    ) -> Result<SimulationParams, SessionError> {
        let mut slots = self.slots.write().map_err(|_| SessionError::LockPoisoned)?;
        slots.simulation.apply(patch);
        Ok(slots.simulation.clone())
    }

    // ── Reporting ───────────────────────────────────────────

    /// Snapshot both slots under one read lock.
    pub fn report_context(&self) -> Result<ReportContext, SessionError> {
        let slots = self.slots.read().map_err(|_| SessionError::LockPoisoned)?;
        Ok(ReportContext {
            last_diagnosis: slots.last_diagnosis.clone(),
            simulation: slots.simulation.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::ResolvedRecord;
    use chrono::Utc;
    use uuid::Uuid;

    fn result(label: &str) -> DiagnosisResult {
        DiagnosisResult {
            id: Uuid::new_v4(),
            diagnosed_at: Utc::now(),
            language: "English".into(),
            entity: "Plant".into(),
            condition: "Condition".into(),
            confidence: "75%".into(),
            label: label.into(),
            record: ResolvedRecord::unknown(),
            answer: "a".into(),
            speech_summary: "s".into(),
            scientific_breakdown: "raw".into(),
            resource_link: "https://example.org".into(),
        }
    }

    #[test]
    fn defaults_match_field_baseline() {
        let params = SimulationParams::default();
        assert_eq!(params.temperature, 28.5);
        assert_eq!(params.humidity, 55.0);
        assert_eq!(params.dissolved_oxygen, 6.5);
        assert_eq!(params.place, "Coimbatore");
        assert_eq!(params.soil_type, "Alluvial");
    }

    #[test]
    fn patch_updates_only_given_fields() {
        let session = SessionContext::new();
        let updated = session
            .update_simulation(SimulationPatch {
                temperature: Some(31.0),
                place: Some("Nellore".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.temperature, 31.0);
        assert_eq!(updated.place, "Nellore");
        assert_eq!(updated.humidity, 55.0);
        assert_eq!(session.simulation().unwrap(), updated);
    }

    #[test]
    fn patch_deserializes_from_partial_json() {
        let patch: SimulationPatch = serde_json::from_str(r#"{"ph": 7.2}"#).unwrap();
        assert_eq!(patch.ph, Some(7.2));
        assert!(patch.state.is_none());
    }

    #[test]
    fn last_diagnosis_is_last_write_wins() {
        let session = SessionContext::new();
        assert!(session.last_diagnosis().unwrap().is_none());
        session.record_diagnosis(result("FIRST")).unwrap();
        session.record_diagnosis(result("SECOND")).unwrap();
        assert_eq!(session.last_diagnosis().unwrap().unwrap().label, "SECOND");
    }

    #[test]
    fn report_context_snapshots_both_slots() {
        let session = SessionContext::new();
        session.record_diagnosis(result("TOMATO | LATE BLIGHT")).unwrap();
        session
            .update_simulation(SimulationPatch {
                state: Some("Punjab".into()),
                ..Default::default()
            })
            .unwrap();
        let ctx = session.report_context().unwrap();
        assert_eq!(ctx.last_diagnosis.unwrap().label, "TOMATO | LATE BLIGHT");
        assert_eq!(ctx.simulation.state, "Punjab");
    }

    #[test]
    fn concurrent_writers_leave_a_complete_value() {
        let session = std::sync::Arc::new(SessionContext::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let session = session.clone();
                std::thread::spawn(move || {
                    session.record_diagnosis(result(&format!("L{i}"))).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let label = session.last_diagnosis().unwrap().unwrap().label;
        assert!(label.starts_with('L'));
    }
}
