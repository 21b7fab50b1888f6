//! Crop suitability scoring and regional crop intelligence.

pub mod regional;
pub mod suitability;

pub use regional::{geographic_intelligence, regional_knowledge, GeoIntelligence, GeoRequest};
pub use suitability::{predict, CropPrediction, CropScore, FieldConditions};
