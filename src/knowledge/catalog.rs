//! The treatment catalog.
//!
//! Entries are listed in a fixed order. Substring and token-overlap matching
//! return the first qualifying entry in this order, so inserting a new entry
//! ahead of an existing one can change which record a fuzzy query resolves to.

use super::types::{FungicideOption, ScheduleStep, TreatmentRecord};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn option(
    name: &str,
    active_ingredient: &str,
    dosage: &str,
    application: &str,
    brands: &[&str],
) -> FungicideOption {
    FungicideOption {
        name: name.to_string(),
        active_ingredient: active_ingredient.to_string(),
        dosage: dosage.to_string(),
        application: application.to_string(),
        brands: strings(brands),
    }
}

fn schedule(steps: &[(&str, &str)]) -> Vec<ScheduleStep> {
    steps
        .iter()
        .map(|(stage, action)| ScheduleStep {
            stage: stage.to_string(),
            action: action.to_string(),
        })
        .collect()
}

/// All catalog entries, in matching order.
pub(crate) fn entries() -> Vec<(&'static str, TreatmentRecord)> {
    vec![
        ("Powdery Mildew", powdery_mildew()),
        ("Downy Mildew", downy_mildew()),
        ("Leaf Spot", leaf_spot()),
        ("Root Rot", root_rot()),
        ("Tomato Late Blight", tomato_late_blight()),
        ("Mango Anthracnose", mango_anthracnose()),
        ("Citrus Canker", citrus_canker()),
        ("Soil Salinity", soil_salinity()),
        ("Paddy Blast", paddy_blast()),
        ("Sugarcane Red Rot", sugarcane_red_rot()),
        ("Micro-Irrigation Fault", micro_irrigation_fault()),
        ("Mango Powdery Mildew", mango_powdery_mildew()),
        ("Banana Sigatoka", banana_sigatoka()),
        ("Healthy Neem", healthy_neem()),
        ("Neem Leaf Webber", neem_leaf_webber()),
        ("Healthy Moringa", healthy_moringa()),
        ("Coconut Bud Rot", coconut_bud_rot()),
        ("Watermelon Anthracnose", watermelon_anthracnose()),
        ("Brown Rot", brown_rot()),
    ]
}

fn powdery_mildew() -> TreatmentRecord {
    TreatmentRecord {
        severity: "Moderate to High".into(),
        symptoms: strings(&[
            "White powdery spots on leaves and stems",
            "Yellowing and curling of leaves",
            "Stunted plant growth",
            "Reduced yield and fruit quality",
        ]),
        causes: strings(&[
            "Fungal infection (Erysiphe, Oidium, Sphaerotheca species)",
            "High humidity with moderate temperatures (20-30°C)",
            "Poor air circulation",
            "Dense plant spacing",
        ]),
        fungicides: vec![
            option(
                "Sulfur 80% WP (Wettable Powder)",
                "Elemental Sulfur",
                "2-3 g/L water",
                "Foliar spray every 7-10 days",
                &["Sulphex", "Sulfex", "Kumulus"],
            ),
            option(
                "Azoxystrobin 23% SC",
                "Azoxystrobin",
                "1 ml/L water",
                "Spray at disease onset, repeat after 15 days",
                &["Amistar", "Heritage"],
            ),
            option(
                "Hexaconazole 5% SC",
                "Hexaconazole",
                "2 ml/L water",
                "Spray at first sign of disease",
                &["Contaf", "Hexazole"],
            ),
        ],
        preventive_measures: strings(&[
            "Improve air circulation by proper plant spacing",
            "Avoid overhead irrigation",
            "Remove infected plant debris",
            "Apply neem oil (5 ml/L) as preventive spray",
        ]),
        treatment_schedule: schedule(&[
            ("Day 1", "Initial fungicide application (Sulfur or Azoxystrobin)"),
            ("Day 7", "Second application if symptoms persist"),
            ("Day 14", "Third application for severe infections"),
            ("Day 21", "Final application and monitoring"),
        ]),
        safety_precautions: strings(&[
            "Wear protective gloves and mask during application",
            "Avoid spraying during windy conditions",
            "Do not spray during flowering to protect pollinators",
            "Maintain 7-day pre-harvest interval",
        ]),
        recovery_timeline: "14-21 days for complete recovery with proper treatment".into(),
    }
}

fn downy_mildew() -> TreatmentRecord {
    TreatmentRecord {
        severity: "High".into(),
        symptoms: strings(&[
            "Yellow patches on upper leaf surface",
            "Gray or purple fuzzy growth on lower leaf surface",
            "Leaf distortion and premature drop",
            "Reduced photosynthesis",
        ]),
        causes: strings(&[
            "Oomycete pathogens (Peronospora, Plasmopara species)",
            "Cool, wet conditions (15-20°C)",
            "High humidity and leaf wetness",
            "Splashing water spreading spores",
        ]),
        fungicides: vec![
            option(
                "Metalaxyl 8% + Mancozeb 64% WP",
                "Metalaxyl + Mancozeb",
                "2.5 g/L water",
                "Foliar spray every 10-12 days",
                &["Ridomil Gold", "Matco"],
            ),
            option(
                "Copper Oxychloride 50% WP",
                "Copper Oxychloride",
                "3 g/L water",
                "Spray at 10-day intervals",
                &["Blitox", "Fytolan"],
            ),
            option(
                "Cymoxanil 8% + Mancozeb 64% WP",
                "Cymoxanil + Mancozeb",
                "2 g/L water",
                "Spray at disease appearance",
                &["Curzate", "Cymox"],
            ),
        ],
        preventive_measures: strings(&[
            "Use resistant varieties",
            "Ensure proper drainage",
            "Avoid evening irrigation",
            "Remove and destroy infected leaves",
        ]),
        treatment_schedule: schedule(&[
            ("Day 1", "Initial application of Metalaxyl + Mancozeb"),
            ("Day 10", "Second application"),
            ("Day 20", "Third application if needed"),
            ("Day 30", "Final monitoring and assessment"),
        ]),
        safety_precautions: strings(&[
            "Wear full protective equipment (PPE)",
            "Avoid contact with skin and eyes",
            "Do not apply before rain",
            "Maintain 14-day pre-harvest interval for Metalaxyl",
        ]),
        recovery_timeline: "21-28 days with consistent treatment".into(),
    }
}

fn leaf_spot() -> TreatmentRecord {
    TreatmentRecord {
        severity: "Moderate".into(),
        symptoms: strings(&[
            "Circular or irregular brown spots on leaves",
            "Yellow halos around spots",
            "Leaf yellowing and defoliation",
            "Reduced plant vigor",
        ]),
        causes: strings(&[
            "Bacterial or fungal pathogens (Cercospora, Alternaria, Xanthomonas)",
            "Warm, humid conditions",
            "Overhead irrigation",
            "Nutrient deficiency",
        ]),
        fungicides: vec![
            option(
                "Mancozeb 75% WP",
                "Mancozeb",
                "2.5 g/L water",
                "Spray every 7-10 days",
                &["Dithane M-45", "Indofil M-45"],
            ),
            option(
                "Chlorothalonil 75% WP",
                "Chlorothalonil",
                "2 g/L water",
                "Foliar spray at 10-day intervals",
                &["Kavach", "Daconil"],
            ),
            option(
                "Copper Hydroxide 77% WP",
                "Copper Hydroxide",
                "2.5 g/L water",
                "Spray for bacterial leaf spot",
                &["Kocide", "Champion"],
            ),
        ],
        preventive_measures: strings(&[
            "Practice crop rotation",
            "Remove infected plant debris",
            "Improve air circulation",
            "Apply balanced fertilizers",
        ]),
        treatment_schedule: schedule(&[
            ("Day 1", "Initial fungicide application"),
            ("Day 7", "Second application"),
            ("Day 14", "Third application"),
            ("Day 21", "Assessment and final treatment if needed"),
        ]),
        safety_precautions: strings(&[
            "Use protective clothing and gloves",
            "Avoid spraying in hot sun",
            "Keep away from water sources",
            "Maintain 7-10 day pre-harvest interval",
        ]),
        recovery_timeline: "14-21 days with proper management".into(),
    }
}

fn root_rot() -> TreatmentRecord {
    TreatmentRecord {
        severity: "High".into(),
        symptoms: strings(&[
            "Wilting despite adequate soil moisture",
            "Yellowing of lower leaves",
            "Brown, mushy roots",
            "Stunted growth and plant death",
        ]),
        causes: strings(&[
            "Soil-borne fungi (Pythium, Phytophthora, Fusarium)",
            "Overwatering and poor drainage",
            "Compacted soil",
            "High soil temperature",
        ]),
        fungicides: vec![
            option(
                "Metalaxyl 35% WS (Water Soluble)",
                "Metalaxyl",
                "1 g/L water",
                "Soil drench around root zone",
                &["Ridomil", "Apron"],
            ),
            option(
                "Fosetyl-Al 80% WP",
                "Fosetyl Aluminium",
                "2.5 g/L water",
                "Soil drench every 15 days",
                &["Aliette", "Fosetic"],
            ),
            option(
                "Carbendazim 50% WP",
                "Carbendazim",
                "1 g/L water",
                "Soil drench for Fusarium",
                &["Bavistin", "Derosal"],
            ),
        ],
        preventive_measures: strings(&[
            "Ensure proper soil drainage",
            "Avoid overwatering",
            "Use disease-free planting material",
            "Apply Trichoderma as biocontrol (5 g/L)",
        ]),
        treatment_schedule: schedule(&[
            ("Day 1", "Reduce watering, apply Metalaxyl soil drench"),
            ("Day 7", "Second soil drench application"),
            ("Day 15", "Third application if symptoms persist"),
            ("Day 30", "Final assessment and preventive measures"),
        ]),
        safety_precautions: strings(&[
            "Wear gloves when handling fungicides",
            "Avoid runoff into water bodies",
            "Do not apply to waterlogged soil",
            "Maintain 21-day pre-harvest interval",
        ]),
        recovery_timeline: "30-45 days; severe cases may not recover".into(),
    }
}

fn tomato_late_blight() -> TreatmentRecord {
    TreatmentRecord {
        severity: "Extreme".into(),
        symptoms: strings(&[
            "Dark, water-soaked spots on leaves",
            "White mold growth on leaf undersides in humid weather",
            "Firm, dark brown spots on green fruit",
            "Rapid plant collapse and death",
        ]),
        causes: strings(&[
            "Pathogen Phytophthora infestans",
            "High humidity (>90%) and cool temperatures (15-22°C)",
            "Poor air drainage",
            "Infected seed tubers or transplants",
        ]),
        fungicides: vec![
            option(
                "Katyayani COC 50 (Copper Oxychloride 50% WP)",
                "Copper Oxychloride",
                "2.5 g/L water",
                "Apply at 7-10 day intervals; effective in high rainfall",
                &["Katyayani", "Blitox", "Fytolan"],
            ),
            option(
                "Katyayani Dr Blight (Metalaxyl-M + Chlorothalonil)",
                "Metalaxyl-M + Chlorothalonil",
                "2 g/L water",
                "Systemic + Contact action, apply at first sign",
                &["Katyayani", "Ridomil Gold"],
            ),
            option(
                "MagicGro Baxil (Bio-Fungicide)",
                "Beneficial Microbes / Trichoderma",
                "5 g/L water",
                "Soil drench and foliar spray for organic control",
                &["MagicGro", "Zymo"],
            ),
        ],
        preventive_measures: strings(&[
            "Plant resistant varieties",
            "Avoid overhead irrigation",
            "Ensure wide plant spacing",
            "Destroy all volunteer tomato/potato plants",
        ]),
        treatment_schedule: schedule(&[
            ("Action", "Immediate destruction of heavily infected plants"),
            ("Day 1", "Protective spray of Mancozeb or Chlorothalonil"),
            ("Day 5", "Systemic spray (Dimethomorph) if symptoms spread"),
            ("Ongoing", "Monitor daily; remove infected leaves immediately"),
        ]),
        safety_precautions: strings(&[
            "Avoid contact with water sources",
            "Follow strict pre-harvest intervals (3-7 days)",
            "Wear full protective gear",
        ]),
        recovery_timeline: "Difficult to recover; focus is on containment".into(),
    }
}

fn mango_anthracnose() -> TreatmentRecord {
    TreatmentRecord {
        severity: "High".into(),
        symptoms: strings(&[
            "Small, dark brown to black spots on leaves/fruit",
            "Sunken lesions on ripe fruit",
            "Blossom blight and fruit drop",
            "Pinkish spore masses on fruit in wet weather",
        ]),
        causes: strings(&[
            "Fungus Colletotrichum gloeosporioides",
            "Frequent rainfall and high humidity during flowering/fruiting",
            "Spores spread by water splashes",
            "Infected twigs and leaves",
        ]),
        fungicides: vec![
            option(
                "ARKA MANGO SPECIAL (Micronutrient Formulation)",
                "Zn, B, Fe, Cu, Mn, Mo + Secondary Nutrients",
                "5 g/L water",
                "Foliar spray to enhance immunity and fruit quality",
                &["ICAR-IIHR", "Katyayani"],
            ),
            option(
                "Katyayani Boron 20% EDTA",
                "Boron",
                "1 g/L water",
                "Essential for fruit set and reducing disease severity",
                &["Katyayani", "Dr. Soil"],
            ),
            option(
                "Rimi Garden More Mango (Organic)",
                "Microorganisms + Micronutrients",
                "Soil application",
                "Improves overall plant health and resistance",
                &["Rimi Garden", "Erwon"],
            ),
        ],
        preventive_measures: strings(&[
            "Prune infected twigs before flowering",
            "Maintain orchard hygiene",
            "Hot water treatment of fruit post-harvest (52°C for 5-10 min)",
            "Spray copper fungicides before monsoon",
        ]),
        treatment_schedule: schedule(&[
            ("Flowering", "Spray Carbendazim to protect blossoms"),
            ("Fruiting", "Spray Mancozeb at 15-day intervals"),
            ("Post-Harvest", "Drip/Spray Prochloraz for shelf-life extension"),
        ]),
        safety_precautions: strings(&[
            "Avoid spraying near bees during peak flowering",
            "14-day pre-harvest interval",
            "Dispose of infected fruit away from orchard",
        ]),
        recovery_timeline: "Seasonal management; prevents fruit loss".into(),
    }
}

fn citrus_canker() -> TreatmentRecord {
    TreatmentRecord {
        severity: "High (Bacterial)".into(),
        symptoms: strings(&[
            "Raised, corky, necrotic lesions on leaves and fruit",
            "Yellow halo around leaf lesions",
            "Premature fruit drop",
            "Death of twigs and branches",
        ]),
        causes: strings(&[
            "Bacterium Xanthomonas citri",
            "Wind-blown rain spreading bacteria",
            "Injuries from citrus leaf miner",
            "Warm and wet weather (20-35°C)",
        ]),
        fungicides: vec![
            option(
                "Streptomycin Sulphate 9% + Tetracycline Hydrochloride 1%",
                "Antibiotic Mix",
                "0.5 g/L water",
                "Bactericidal spray at 15-day intervals",
                &["Streptocycline", "Plantomycin"],
            ),
            option(
                "Copper Oxychloride 50% WP",
                "Copper Oxychloride",
                "3 g/L water",
                "Mix with antibiotic for better control",
                &["Blitox", "Fytolan"],
            ),
        ],
        preventive_measures: strings(&[
            "Control Citrus Leaf Miner (carrier)",
            "Prune and burn infected twigs",
            "Use certified disease-free nursery stock",
            "Create windbreaks around orchards",
        ]),
        treatment_schedule: schedule(&[
            ("Onset", "Pruning of infected parts following by Copper spray"),
            ("Cycle", "Antibiotic spray + Copper every 15-20 days in rainy season"),
            ("Maintenance", "Apply Neem oil to control leaf miners"),
        ]),
        safety_precautions: strings(&[
            "Avoid excessive use of antibiotics to prevent resistance",
            "Wear mask during spray",
            "Ensure no spray drift to neighboring crops",
        ]),
        recovery_timeline: "Long-term management; suppressed but not fully cured".into(),
    }
}

fn soil_salinity() -> TreatmentRecord {
    TreatmentRecord {
        severity: "Chronic / Structural".into(),
        symptoms: strings(&[
            "White crust on soil surface",
            "Stunted plant growth",
            "Leaf burn or tip necrosis",
            "Wilting despite wet soil",
        ]),
        causes: strings(&[
            "Poor quality irrigation water",
            "Inadequate drainage",
            "High evaporation in arid regions",
            "Over-fertilization",
        ]),
        fungicides: Vec::new(),
        preventive_measures: strings(&[
            "Implement proper soil drainage (leaching)",
            "Use salt-tolerant crop varieties",
            "Apply Gypsum or organic mulch",
            "Switch to drip irrigation to reduce water evaporation",
        ]),
        treatment_schedule: schedule(&[
            ("Initial", "Soil testing for Electrical Conductivity (EC)"),
            ("Phase 1", "Leaching with fresh water if drainage allows"),
            ("Phase 2", "Application of Gypsum (500-1000 kg/acre)"),
            ("Phase 3", "Planting cover crops to improve soil structure"),
        ]),
        safety_precautions: strings(&[
            "Avoid deep tillage",
            "Test water source regularly",
            "Monitor soil health index",
        ]),
        recovery_timeline: "6-12 months for significant improvement".into(),
    }
}

fn paddy_blast() -> TreatmentRecord {
    TreatmentRecord {
        severity: "Extreme".into(),
        symptoms: strings(&[
            "Spindle-shaped lesions with gray centers on leaves",
            "Brownish lesions on the neck of the panicle (Neck Blast)",
            "Chaffy or partially filled grains",
            "Drying and wilting of the entire plant",
        ]),
        causes: strings(&[
            "Fungus Magnaporthe oryzae (Pyricularia oryzae)",
            "High humidity (>90%) and cool night temperatures (20-25°C)",
            "Excessive nitrogenous fertilization",
            "Prolonged leaf wetness from dew or rain",
        ]),
        fungicides: vec![
            option(
                "Tricyclazole 75% WP",
                "Tricyclazole",
                "0.6 g/L water",
                "Foliar spray at first sign of lesions, repeat after 15 days",
                &["Beam", "Civic", "Baan"],
            ),
            option(
                "Isoprothiolane 40% EC",
                "Isoprothiolane",
                "1.5 ml/L water",
                "Apply at boot leaf stage to prevent neck blast",
                &["Fujione", "Isopro"],
            ),
            option(
                "Carbendazim 50% WP",
                "Carbendazim",
                "1 g/L water",
                "Used for seed treatment and foliar spray",
                &["Bavistin", "Indofil"],
            ),
        ],
        preventive_measures: strings(&[
            "Use resistant varieties (e.g., IR-64, Swarna)",
            "Avoid high nitrogen doses, split nitrogen application",
            "Burn infected stubble post-harvest",
            "Maintain proper water level in the field",
        ]),
        treatment_schedule: schedule(&[
            ("Seed stage", "Treat seeds with Carbendazim (2g/kg)"),
            ("Nursery", "Spray Tricyclazole if spots appear"),
            ("Tillering", "Monitor and spray if 2-5% leaf area is infected"),
            ("Heading", "Mandatory neck blast prevention spray"),
        ]),
        safety_precautions: strings(&[
            "Follow 15-day pre-harvest interval",
            "Wear protective masks during spraying",
            "Avoid spraying during high winds",
        ]),
        recovery_timeline: "14-25 days; Neck blast causes irreversible yield loss".into(),
    }
}

fn sugarcane_red_rot() -> TreatmentRecord {
    TreatmentRecord {
        severity: "Extreme (Cancer of Sugarcane)".into(),
        symptoms: strings(&[
            "Yellowing and drying of the 3rd and 4th leaves",
            "Internal reddening of the pith with white cross-wise bands",
            "Sour, alcoholic odor from split canes",
            "Shrinkage of canes and appearance of black acervuli",
        ]),
        causes: strings(&[
            "Fungus Colletotrichum falcatum",
            "Use of infected seed sets",
            "Waterlogging and poor drainage",
            "Presence of susceptible varieties in proximity",
        ]),
        fungicides: vec![
            option(
                "Carbendazim 50% WP (Sett Treatment)",
                "Carbendazim",
                "1 g/L water (Drench/Dip)",
                "Dip sugarcane sets for 30 mins before planting",
                &["Bavistin", "Goldenzim"],
            ),
            option(
                "Copper Oxychloride 50% WP",
                "Copper Oxychloride",
                "3 g/L water",
                "Spray on soil and surrounding plants if disease is detected",
                &["Blitox", "Fytolan"],
            ),
        ],
        preventive_measures: strings(&[
            "Select healthy sets from disease-free nurseries",
            "Practice 2-3 year crop rotation",
            "Uprooting and burning of infected clumps with roots",
            "Use hot water treated sets (50°C for 2 hours)",
        ]),
        treatment_schedule: schedule(&[
            ("Planting", "Mandatory fungicidal set treatment"),
            ("Tillering", "Frequent field scouting every 15 days"),
            ("Infection", "Immediate eradication of infected clumps"),
            (
                "Post-Harvest",
                "Total burning of trash; refrain from ratoon cropping if infected",
            ),
        ]),
        safety_precautions: strings(&[
            "Burn infected materials away from the field",
            "Sterilize farm tools after handling infected canes",
            "Avoid using canal water from infected fields",
        ]),
        recovery_timeline: "No cure for infected canes; focus on saving healthy plots".into(),
    }
}

fn micro_irrigation_fault() -> TreatmentRecord {
    TreatmentRecord {
        severity: "Operational".into(),
        symptoms: strings(&[
            "Uneven water distribution across emitters",
            "Clogging of drippers with salt/algae",
            "Pressure drop at the lateral ends",
            "Wilting of plants in specific zones",
        ]),
        causes: strings(&[
            "Poor water filtration (Sand/Disc filters)",
            "High bicarbonate/iron content in water",
            "Bacterial sliming (Bio-fouling)",
            "Rat bites or mechanical damage to tubes",
        ]),
        fungicides: Vec::new(),
        preventive_measures: strings(&[
            "Install and clean filters weekly",
            "Acid treatment (HCl/HNO3) for salt removal",
            "Chlorination (Bleaching powder) for algae control",
            "Regular flushing of laterals (Sub-main flush)",
        ]),
        treatment_schedule: schedule(&[
            (
                "Acid Treatment",
                "Inject 33% HCl to bring water pH to 4.0; leave for 24 hrs",
            ),
            ("Chlorination", "Apply 10-20 ppm available chlorine"),
            ("Maintenance", "Flush sub-mains every 15 days"),
            (
                "Filter",
                "Clean disc filter whenever pressure gauge diff > 0.5kg",
            ),
        ]),
        safety_precautions: strings(&[
            "Handle acids with high-grade rubber gloves",
            "Flush system with fresh water after chemical treatment",
            "Do not mix fertilizers with acids in the same tank",
        ]),
        recovery_timeline: "Instant after flushing/cleaning".into(),
    }
}

fn mango_powdery_mildew() -> TreatmentRecord {
    TreatmentRecord {
        severity: "High (Economic Loss)".into(),
        symptoms: strings(&[
            "Whitish powdery growth on flowers, leaves, and fruits",
            "Premature dropping of flowers and young fruits",
            "Drying of inflorescences (blackening)",
            "Coating of leaves with white fungal mass",
        ]),
        causes: strings(&[
            "Fungus Oidium mangiferae",
            "High humidity with moderate temperatures",
            "Cloudy weather during flowering stage",
            "Lack of sunlight in dense canopies",
        ]),
        fungicides: vec![
            option(
                "Wettable Sulphur 80% WP",
                "Sulphur",
                "2 g/L water",
                "Apply at flower bud burst stage",
                &["Sulfex", "Insur"],
            ),
            option(
                "Hexaconazole 5% EC",
                "Hexaconazole",
                "1 ml/L water",
                "Apply 15 days after first spray if weather is cloudy",
                &["Contaf", "Sitara"],
            ),
        ],
        preventive_measures: strings(&[
            "Prune dense branches to allow sunlight penetration",
            "Avoid excessive nitrogen during flowering",
            "Maintain clean orchard hygiene",
            "Spray at 50% flowering stage as a precaution",
        ]),
        treatment_schedule: schedule(&[
            ("Bud Burst", "Sulphur spray (2g/L)"),
            ("Full Bloom", "Hexaconazole or Dinocap spray"),
            ("Fruit Set", "Final spray with Sulphur or Carbendazim"),
            (
                "Maintenance",
                "Monitor weather; humidity > 80% warrants immediate spray",
            ),
        ]),
        safety_precautions: strings(&[
            "Avoid spraying Sulphur during high temperatures (>35°C) to prevent leaf burn",
            "Follow 15-day Pre-Harvest Interval (PHI)",
            "Protect eyes during application",
        ]),
        recovery_timeline: "10-20 days; however, fruit set loss is irreversible".into(),
    }
}

fn banana_sigatoka() -> TreatmentRecord {
    TreatmentRecord {
        severity: "Extreme (Defoliation)".into(),
        symptoms: strings(&[
            "Small yellowish-green streaks on leaves",
            "Dark brown or black necrotic spots with yellow halos",
            "Drying of leaf margins and premature death of leaves",
            "Small fruit size and poor ripening quality",
        ]),
        causes: strings(&[
            "Fungus Mycosphaerella musicola (Yellow Sigatoka)",
            "Warm and wet weather (High rainfall)",
            "Poor soil drainage and high plant density",
            "Wind-borne spore dispersal",
        ]),
        fungicides: vec![
            option(
                "Propiconazole 25% EC",
                "Propiconazole",
                "1 ml/L water + Mineral Oil",
                "Foliar spray with oil-in-water emulsion",
                &["Tilt", "Bumper"],
            ),
            option(
                "Chlorothalonil 75% WP",
                "Chlorothalonil",
                "2 g/L water",
                "Protective spray during monsoon onset",
                &["Kavach", "Contaf Plus"],
            ),
        ],
        preventive_measures: strings(&[
            "De-leafing: Remove and burn infected leaves immediately",
            "Maintain proper drainage to reduce humidity",
            "Avoid excessive plant population (Optimal spacing)",
            "Eradicate weed hosts around the plantation",
        ]),
        treatment_schedule: schedule(&[
            ("Vegetative", "Monthly monitoring; spray if spots appear"),
            ("Monsoon", "Shorten spray interval to 15-20 days"),
            ("Flowering", "Target younger leaves for maximum protection"),
            ("Post-Spray", "Apply Urea (1%) to help leaf recovery"),
        ]),
        safety_precautions: strings(&[
            "Rotate fungicides to prevent resistance",
            "Avoid direct skin contact with Propiconazole",
            "Ensure complete coverage of both leaf surfaces",
        ]),
        recovery_timeline: "2-3 months for new healthy leaf emergence".into(),
    }
}

fn healthy_neem() -> TreatmentRecord {
    TreatmentRecord {
        severity: "None".into(),
        symptoms: strings(&["Green, serrated leaves", "Healthy leaf margins", "Vibrant growth"]),
        causes: strings(&["Optimal soil and water conditions", "Natural pest resistance"]),
        fungicides: Vec::new(),
        preventive_measures: strings(&["Regular monitoring", "Balanced NPK application"]),
        treatment_schedule: schedule(&[("Day 1", "Maintain current care protocol")]),
        safety_precautions: strings(&["No chemicals required"]),
        recovery_timeline: "Maintenance mode".into(),
    }
}

fn neem_leaf_webber() -> TreatmentRecord {
    TreatmentRecord {
        severity: "Moderate".into(),
        symptoms: strings(&[
            "Leaves webbed together",
            "Defoliation",
            "Scraping of green matter",
        ]),
        causes: strings(&["Larvae of Palpita unionalis", "Humid weather"]),
        fungicides: vec![option(
            "Malathion 50 EC",
            "Malathion",
            "2 ml/L water",
            "Apply as soon as webbing is noticed",
            &["Malathion", "Cythion"],
        )],
        preventive_measures: strings(&["Prune webbed branches", "Light traps", "Spray Neem oil"]),
        treatment_schedule: schedule(&[
            ("Day 1", "Identify and remove webbed clusters"),
            ("Day 3", "Apply Malathion spray"),
        ]),
        safety_precautions: strings(&["Avoid direct contact with spray"]),
        recovery_timeline: "10-15 days".into(),
    }
}

fn healthy_moringa() -> TreatmentRecord {
    TreatmentRecord {
        severity: "None".into(),
        symptoms: strings(&["Small, oval leaflets", "Smooth margins", "Light green foliage"]),
        causes: strings(&["Well-drained soil", "Adequate sunlight"]),
        fungicides: Vec::new(),
        preventive_measures: strings(&["Mulching", "Proper pruning"]),
        treatment_schedule: schedule(&[("Day 1", "Routine care")]),
        safety_precautions: strings(&["No chemical treatment needed"]),
        recovery_timeline: "Healthy state".into(),
    }
}

fn coconut_bud_rot() -> TreatmentRecord {
    TreatmentRecord {
        severity: "Lethal".into(),
        symptoms: strings(&[
            "Yellowing and drooping of the spindle (innermost) leaf",
            "Soft rotting of tender bud tissues",
            "Foul smell from the infected crown",
            "Eventual falling of the crown (Death of palm)",
        ]),
        causes: strings(&[
            "Fungus/Water mold Phytophthora palmivora",
            "Heavy monsoon rainfall and high RH",
            "Presence of other infected palms (Spores spread by wind/rain)",
            "Poor air circulation in dense plantations",
        ]),
        fungicides: vec![
            option(
                "Copper Oxychloride 50% WP",
                "Copper Oxychloride",
                "3-5 g/L water (Paste/Drench)",
                "Clean the bud and apply paste/drench directly to the crown",
                &["Blitox", "Fytolan"],
            ),
            option(
                "Bordeaux Mixture 1%",
                "Copper Sulphate + Lime",
                "10 g/L (Freshly prepared)",
                "Prophylactic spray on healthy palms during monsoon",
                &["Home-made", "Indofil Z-78"],
            ),
        ],
        preventive_measures: strings(&[
            "Regularly clean the crown (removal of dried leaves/spathes)",
            "Improve air circulation by pruning surrounding vegetation",
            "Practice soil drenching with fungicides in endemic areas",
            "Avoid injury to the crown during harvesting",
        ]),
        treatment_schedule: schedule(&[
            ("Discovery", "Immediate cleaning of affected bud tissue"),
            ("Phase 1", "Apply Copper Oxychloride paste to the cleaned bud"),
            ("Phase 2", "Protect the treated area from rain for 3 days"),
            ("Phase 3", "Apply Bordeaux Mixture to surrounding healthy palms"),
        ]),
        safety_precautions: strings(&[
            "Handle Copper Sulphate with care (Corrosive)",
            "Ensure the person climbing the tree is trained in bud surgery",
            "Use protective goggles when spraying overhead",
        ]),
        recovery_timeline:
            "6-12 months for new spindle growth; if bud is fully rotted, palm is lost".into(),
    }
}

fn watermelon_anthracnose() -> TreatmentRecord {
    TreatmentRecord {
        severity: "High to Extreme".into(),
        symptoms: strings(&[
            "Small, irregular, dark brown to black spots on leaves",
            "Sunken, circular to oval lesions on fruit (blisters)",
            "Salmon-colored spore masses in center of fruit lesions",
            "Spindle-shaped sunken lesions on stems/petioles",
            "Shot-hole appearance in older leaf lesions",
        ]),
        causes: strings(&[
            "Fungus Colletotrichum orbiculare",
            "High humidity (>90%) and warm temperatures (20-29°C)",
            "Frequent rainfall or overhead irrigation",
            "Infected seeds or plant debris",
        ]),
        fungicides: vec![
            option(
                "Chlorothalonil 75% WP",
                "Chlorothalonil",
                "2 g/L water",
                "Foliar spray at 7-10 day intervals",
                &["Kavach", "Bravo"],
            ),
            option(
                "Azoxystrobin 23% SC",
                "Azoxystrobin",
                "1 ml/L water",
                "Spray when disease is detected, repeat every 14 days",
                &["Amistar", "Quadris"],
            ),
            option(
                "Mancozeb 75% WP",
                "Mancozeb",
                "2.5 g/L water",
                "Preventative spray every 7 days in wet weather",
                &["Dithane M-45", "Indofil M-45"],
            ),
        ],
        preventive_measures: strings(&[
            "Use disease-free and certified seeds",
            "Practice 2-3 year crop rotation with non-cucurbits",
            "Improve air circulation by proper spacing",
            "Remove and destroy infected crop debris",
        ]),
        treatment_schedule: schedule(&[
            ("Day 1", "Initial spray with Azoxystrobin or Chlorothalonil"),
            ("Day 7", "Apply Mancozeb as a protective layer"),
            (
                "Day 14",
                "Rotate with different FRAC group (e.g. Copper Oxychloride)",
            ),
            (
                "Ongoing",
                "Monitor fields every 3 days; remove infected fruit immediately",
            ),
        ]),
        safety_precautions: strings(&[
            "Observe 5-7 day pre-harvest interval (PHI)",
            "Avoid sequential applications of Strobilurins (Group 11)",
            "Wear full protective gear including mask and gloves",
            "Apply early morning to avoid bee activity",
        ]),
        recovery_timeline:
            "14-25 days for leaf recovery; infected fruits cannot be recovered".into(),
    }
}

fn brown_rot() -> TreatmentRecord {
    TreatmentRecord {
        severity: "High (Fruit Loss)".into(),
        symptoms: strings(&[
            "Soft, brown, water-soaked spots on fruit",
            "Grayish-brown fuzzy mold growth on affected areas",
            "Mummification of infected fruits (they dry up and stay on plant)",
            "Cankers on twigs and wilting of flowers",
        ]),
        causes: strings(&[
            "Fungi (Monilinia species or specific fruit pathogens)",
            "Prolonged wet weather during ripening",
            "High fruit density and poor airflow",
            "Mechanical injuries/insect bites on fruit",
        ]),
        fungicides: vec![
            option(
                "Tebuconazole 25.9% EC",
                "Tebuconazole",
                "1 ml/L water",
                "Spray at bloom and fruit ripening stages",
                &["Folicur", "Orius"],
            ),
            option(
                "Propiconazole 25% EC",
                "Propiconazole",
                "1 ml/L water",
                "Apply at first sign of infection",
                &["Tilt", "Bumper"],
            ),
        ],
        preventive_measures: strings(&[
            "Thin fruit clusters to improve air circulation",
            "Prune infected twigs and remove mummified fruit",
            "Maintain soil drainage to reduce humidity",
            "Avoid bruising fruit during harvest",
        ]),
        treatment_schedule: schedule(&[
            ("Day 1", "Apply Tebuconazole at first sign of rot"),
            ("Day 10", "Second application if wet weather persists"),
            ("Day 21", "Final spray before harvest (check PHI)"),
        ]),
        safety_precautions: strings(&[
            "Maintain a 7-day pre-harvest interval (PHI)",
            "Do not apply more than 3 times per season",
            "Work with the wind to avoid spray drift",
        ]),
        recovery_timeline:
            "Stops spread within 7-10 days; focus on protecting healthy fruit".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_nineteen_entries() {
        assert_eq!(entries().len(), 19);
    }

    #[test]
    fn canonical_names_are_unique() {
        let names: HashSet<&str> = entries().iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), entries().len());
    }

    #[test]
    fn every_record_is_complete() {
        for (name, record) in entries() {
            assert!(!record.severity.is_empty(), "{name}: severity");
            assert!(!record.symptoms.is_empty(), "{name}: symptoms");
            assert!(!record.causes.is_empty(), "{name}: causes");
            assert!(!record.preventive_measures.is_empty(), "{name}: prevention");
            assert!(!record.treatment_schedule.is_empty(), "{name}: schedule");
            assert!(!record.safety_precautions.is_empty(), "{name}: safety");
            assert!(!record.recovery_timeline.is_empty(), "{name}: recovery");
            assert!(!record.is_unknown(), "{name}: must not use the unknown sentinel");
        }
    }

    #[test]
    fn non_pathogenic_disorders_have_no_fungicides() {
        for (name, record) in entries() {
            if matches!(name, "Soil Salinity" | "Micro-Irrigation Fault") {
                assert!(record.fungicides.is_empty(), "{name}");
            }
        }
    }

    #[test]
    fn tomato_late_blight_starts_with_action_stage() {
        let record = tomato_late_blight();
        assert_eq!(record.severity, "Extreme");
        assert_eq!(record.treatment_schedule[0].stage, "Action");
        assert_eq!(record.fungicides.len(), 3);
    }
}
