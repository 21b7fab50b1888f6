//! Weighted crop suitability scoring.
//!
//! Weights: temperature 20, pH 15, nitrogen 20, phosphorus 10,
//! potassium 10, soil 15 (5 when not preferred), region 10.

use serde::{Deserialize, Serialize};

use crate::session::SimulationParams;

struct CropProfile {
    name: &'static str,
    temperature: f64,
    ph: f64,
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    soils: &'static [&'static str],
    regions: &'static [&'static str],
}

const CROP_PROFILES: &[CropProfile] = &[
    CropProfile {
        name: "Rice",
        temperature: 30.0,
        ph: 6.0,
        nitrogen: 3.0,
        phosphorus: 2.0,
        potassium: 2.0,
        soils: &["alluvial", "clay"],
        regions: &["tamil nadu", "telangana", "andhra pradesh", "west bengal"],
    },
    CropProfile {
        name: "Wheat",
        temperature: 20.0,
        ph: 6.5,
        nitrogen: 2.0,
        phosphorus: 1.5,
        potassium: 1.5,
        soils: &["alluvial", "black"],
        regions: &["punjab", "haryana", "uttar pradesh"],
    },
    CropProfile {
        name: "Corn",
        temperature: 26.0,
        ph: 6.8,
        nitrogen: 3.5,
        phosphorus: 2.5,
        potassium: 3.0,
        soils: &["red", "alluvial"],
        regions: &["karnataka", "maharashtra", "andhra pradesh"],
    },
    CropProfile {
        name: "Soybeans",
        temperature: 25.0,
        ph: 6.2,
        nitrogen: 1.5,
        phosphorus: 2.0,
        potassium: 2.5,
        soils: &["black", "red"],
        regions: &["madhya pradesh", "maharashtra", "rajasthan"],
    },
    CropProfile {
        name: "Cotton",
        temperature: 28.0,
        ph: 7.5,
        nitrogen: 2.5,
        phosphorus: 1.8,
        potassium: 2.2,
        soils: &["black"],
        regions: &["gujarat", "maharashtra", "telangana"],
    },
    CropProfile {
        name: "Sugarcane",
        temperature: 32.0,
        ph: 7.0,
        nitrogen: 4.0,
        phosphorus: 3.0,
        potassium: 3.5,
        soils: &["alluvial", "black"],
        regions: &["uttar pradesh", "maharashtra", "karnataka"],
    },
];

/// Field measurements scored against every crop profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConditions {
    pub temperature: f64,
    pub ph: f64,
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub soil_type: String,
    pub state: String,
}

impl Default for FieldConditions {
    fn default() -> Self {
        Self {
            temperature: 25.0,
            ph: 6.5,
            nitrogen: 2.0,
            phosphorus: 1.8,
            potassium: 2.2,
            soil_type: "Alluvial".to_string(),
            state: "Tamil Nadu".to_string(),
        }
    }
}

impl From<&SimulationParams> for FieldConditions {
    fn from(params: &SimulationParams) -> Self {
        Self {
            temperature: params.temperature,
            ph: params.ph,
            nitrogen: params.nitrogen,
            phosphorus: params.phosphorus,
            potassium: params.potassium,
            soil_type: params.soil_type.clone(),
            state: params.state.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropScore {
    pub crop: String,
    /// 0–100, one decimal.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropPrediction {
    /// In profile order.
    pub scores: Vec<CropScore>,
    pub recommendation: String,
    pub suitability: f64,
}

fn penalty(weight: f64, actual: f64, ideal: f64, slope: f64) -> f64 {
    (weight - (actual - ideal).abs() * slope).max(0.0)
}

fn score_profile(profile: &CropProfile, field: &FieldConditions, soil: &str, state: &str) -> f64 {
    let total = penalty(20.0, field.temperature, profile.temperature, 1.5)
        + penalty(15.0, field.ph, profile.ph, 8.0)
        + penalty(20.0, field.nitrogen, profile.nitrogen, 8.0)
        + penalty(10.0, field.phosphorus, profile.phosphorus, 5.0)
        + penalty(10.0, field.potassium, profile.potassium, 5.0)
        + if profile.soils.contains(&soil) { 15.0 } else { 5.0 }
        + if profile.regions.contains(&state) { 10.0 } else { 0.0 };
    (total.min(100.0) * 10.0).round() / 10.0
}

/// Highest score; the earliest entry wins ties.
pub fn best(scores: &[CropScore]) -> Option<&CropScore> {
    scores
        .iter()
        .fold(None, |best: Option<&CropScore>, candidate| match best {
            Some(current) if current.score >= candidate.score => Some(current),
            _ => Some(candidate),
        })
}

/// Score every crop profile and recommend the best.
pub fn predict(field: &FieldConditions) -> CropPrediction {
    let soil = field.soil_type.trim().to_lowercase();
    let state = field.state.trim().to_lowercase();

    let scores: Vec<CropScore> = CROP_PROFILES
        .iter()
        .map(|profile| CropScore {
            crop: profile.name.to_string(),
            score: score_profile(profile, field, &soil, &state),
        })
        .collect();

    let (recommendation, suitability) = best(&scores)
        .map(|s| (s.crop.clone(), s.score))
        .unwrap_or_default();

    CropPrediction {
        scores,
        recommendation,
        suitability,
    }
}
