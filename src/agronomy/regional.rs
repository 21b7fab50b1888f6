//! Regional knowledge and geographic crop intelligence.

use serde::{Deserialize, Serialize};

use super::suitability::{predict, CropScore, FieldConditions};
use crate::advisory::resources::official_resource_link;
use crate::knowledge::title_case;

/// Intelligence text used when a place has no regional entry.
pub const DEFAULT_INTEL: &str = "Real-time predictive analysis based on regional climate, \
     soil taxonomy, and ICAR agricultural standards.";

const CHITTOOR: &str = "Known for horticulture and poultry. Best crops: Groundnut, Sugarcane, \
     Mango, and Paddy. Soil: Red Loamy/Sandy soils.";

/// Place (lower-case) → regional description. Chittoor carries its common
/// misspellings.
const REGIONAL_KNOWLEDGE: &[(&str, &str)] = &[
    (
        "nellore",
        "Famous as the 'Rice Bowl of Andhra Pradesh'. Best crops: Paddy (NLR-34449, \
         RNR-15048), Blackgram, Chillies, and Cotton. Soil: Coastal Alluvial & Red soils.",
    ),
    (
        "coimbatore",
        "Industrial Agri-Hub. Best crops: Sorghum, Maize, Cotton, and Sugarcane. \
         Soil: Black & Red Soil.",
    ),
    (
        "guntur",
        "World-famous for Chillies. Best crops: Chillies, Cotton, Tobacco, and Paddy.",
    ),
    ("chittoor", CHITTOOR),
    ("chithore", CHITTOOR),
    ("chithor", CHITTOOR),
    ("nashik", "Wine capital. Best crops: Grapes, Onion, and Tomatoes."),
    ("punjab", "Best crops: Wheat, Paddy (Basmati), and Sugarcane."),
];

/// Boosted scores never exceed this.
const BOOST_CAP: f64 = 98.5;
/// "Paddy" in the regional text boosts rice up to this.
const PADDY_BOOST_CAP: f64 = 98.8;
const REGIONAL_BOOST: f64 = 25.0;

/// Regional description for a place, case- and padding-insensitive.
pub fn regional_knowledge(place: &str) -> Option<&'static str> {
    let key = place.trim().to_lowercase();
    REGIONAL_KNOWLEDGE
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, text)| *text)
}

/// Field conditions plus the place being analysed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeoRequest {
    pub place: String,
    pub country: String,
    /// Multiplier applied to every base score.
    pub variance: f64,
    pub language: String,
    #[serde(flatten)]
    pub field: FieldConditions,
}

impl Default for GeoRequest {
    fn default() -> Self {
        Self {
            place: "Unknown".to_string(),
            country: "Unknown".to_string(),
            variance: 1.0,
            language: "English".to_string(),
            field: FieldConditions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoIntelligence {
    /// Markdown report.
    pub intelligence: String,
    pub scores: Vec<CropScore>,
    pub best_crop: String,
    /// Untranslated spoken summary; callers localize it.
    pub speech_text: String,
}

/// Scale and boost suitability scores using the place's regional knowledge.
pub fn geographic_intelligence(request: &GeoRequest) -> GeoIntelligence {
    let place = request.place.trim().to_lowercase();
    let intel = regional_knowledge(&place).unwrap_or(DEFAULT_INTEL);
    let intel_lower = intel.to_lowercase();

    let base = predict(&request.field);

    let scores: Vec<CropScore> = base
        .scores
        .into_iter()
        .map(|CropScore { crop, score }| {
            let mut score = round1(score * request.variance);
            if intel_lower.contains(&crop.to_lowercase()) {
                score = (score + REGIONAL_BOOST).min(BOOST_CAP);
            }
            if crop == "Rice" && intel_lower.contains("paddy") {
                score = (score + REGIONAL_BOOST).min(PADDY_BOOST_CAP);
            }
            CropScore { crop, score }
        })
        .collect();

    let best = super::suitability::best(&scores);
    let (best_crop, best_score) = best
        .map(|s| (s.crop.clone(), s.score))
        .unwrap_or_default();

    let mut ranked = scores.clone();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    let mapping: Vec<String> = ranked
        .iter()
        .map(|s| format!("- {}: {}%", s.crop, s.score))
        .collect();

    let intelligence = format!(
        "**GEOGRAPHIC INTELLIGENCE REPORT: {}**\n\n\
         **Field Matrix:** {} Analysis\n\
         **Official Intelligence:** {}\n\
         **Industrial Recommendation:** {} ({}% suitability)\n\n\
         **Verified Data Mapping:**\n{}\n\n\
         **OFFICIAL RESOURCE:** [ICAR Cultivation Hub]({})",
        title_case(&place),
        request.field.soil_type,
        intel,
        best_crop,
        best_score,
        mapping.join("\n"),
        official_resource_link(&format!("{best_crop} cultivation")),
    );

    let speech_text = format!(
        "Geographic intelligence for {place} complete. {intel} Best crop is {best_crop}."
    );

    tracing::debug!(place = %place, best_crop = %best_crop, "Geographic intelligence built");

    GeoIntelligence {
        intelligence,
        scores,
        best_crop,
        speech_text,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(place: &str, state: &str, soil: &str) -> GeoRequest {
        GeoRequest {
            place: place.into(),
            field: FieldConditions {
                state: state.into(),
                soil_type: soil.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn score_of(intel: &GeoIntelligence, crop: &str) -> f64 {
        intel
            .scores
            .iter()
            .find(|s| s.crop == crop)
            .map(|s| s.score)
            .unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive_and_knows_misspellings() {
        assert!(regional_knowledge("  Coimbatore ").unwrap().contains("Sorghum"));
        assert_eq!(regional_knowledge("Chithore"), regional_knowledge("chittoor"));
        assert!(regional_knowledge("Atlantis").is_none());
    }

    #[test]
    fn paddy_region_boosts_rice() {
        let intel = geographic_intelligence(&request("Nellore", "Andhra Pradesh", "Alluvial"));
        assert_eq!(intel.best_crop, "Rice");
        let rice = score_of(&intel, "Rice");
        assert!(rice <= PADDY_BOOST_CAP);
        assert!(rice > 90.0);
    }

    #[test]
    fn named_crop_is_boosted_and_capped() {
        let intel = geographic_intelligence(&request("Coimbatore", "Tamil Nadu", "Black"));
        let base = geographic_intelligence(&request("Atlantis", "Tamil Nadu", "Black"));
        let cotton = score_of(&intel, "Cotton");
        assert!(cotton > score_of(&base, "Cotton"));
        assert!(cotton <= BOOST_CAP);
    }

    #[test]
    fn unknown_place_uses_default_intel() {
        let intel = geographic_intelligence(&request("Atlantis", "Unknown", "Red"));
        assert!(intel.intelligence.contains(DEFAULT_INTEL));
        assert!(intel.intelligence.contains("REPORT: Atlantis"));
        assert!(intel.speech_text.contains("Best crop is"));
    }

    #[test]
    fn variance_scales_scores() {
        let mut half = request("Atlantis", "Punjab", "Alluvial");
        half.variance = 0.5;
        let full = geographic_intelligence(&request("Atlantis", "Punjab", "Alluvial"));
        let scaled = geographic_intelligence(&half);
        let wheat_full = score_of(&full, "Wheat");
        let wheat_half = score_of(&scaled, "Wheat");
        assert!((wheat_half - wheat_full * 0.5).abs() <= 0.1);
    }

    #[test]
    fn request_deserializes_flat_json() {
        let request: GeoRequest = serde_json::from_str(
            r#"{"place": "Guntur", "state": "Andhra Pradesh", "temperature": 31, "variance": 0.9}"#,
        )
        .unwrap();
        assert_eq!(request.place, "Guntur");
        assert_eq!(request.field.state, "Andhra Pradesh");
        assert_eq!(request.field.temperature, 31.0);
        assert_eq!(request.field.soil_type, "Alluvial");
        assert_eq!(request.language, "English");
    }

    #[test]
    fn report_lists_scores_in_descending_order() {
        let intel = geographic_intelligence(&request("Punjab", "Punjab", "Alluvial"));
        let lines: Vec<&str> = intel
            .intelligence
            .lines()
            .filter(|l| l.starts_with("- "))
            .collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with(&format!("- {}", intel.best_crop)));
    }
}
