//! Plant profile reference data and name lookup.
//!
//! Lookup order:
//! 1. Exact match on scientific or common name (case-insensitive)
//! 2. Any query word found inside a stored scientific name
//! 3. The fixed `UNKNOWN_PROFILE`

pub mod lookup_tables;

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::sync::OnceLock;

pub use lookup_tables::{care_advice, PLANT_PROFILES, UNKNOWN_PROFILE};

/// Broad grouping used to pick care guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantCategory {
    TropicalFoliage,
    Flowering,
    Succulent,
    Herb,
    Woody,
    Fern,
    Houseplant,
    Crop,
    Unclassified,
}

/// Static botanical facts for one plant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlantProfile {
    pub scientific_name: &'static str,
    pub common_name: &'static str,
    pub family: &'static str,
    pub region: &'static str,
    /// 0 (harmless) to 100 (severely toxic)
    pub toxicity: u8,
    pub edible: bool,
    pub hazards: &'static [&'static str],
    pub care_tip: &'static str,
    pub description: &'static str,
    pub category: PlantCategory,
}

impl PlantProfile {
    pub fn is_unknown(&self) -> bool {
        std::ptr::eq(self, &UNKNOWN_PROFILE)
    }

    pub fn care_steps(&self) -> &'static [&'static str] {
        care_advice(self.category)
    }
}

/// Lower-cased scientific and common names -> index into `PLANT_PROFILES`
fn name_index() -> &'static FxHashMap<String, usize> {
    static INDEX: OnceLock<FxHashMap<String, usize>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut index = FxHashMap::default();
        for (idx, profile) in PLANT_PROFILES.iter().enumerate() {
            index.entry(profile.scientific_name.to_lowercase()).or_insert(idx);
            index.entry(profile.common_name.to_lowercase()).or_insert(idx);
        }
        index
    })
}

/// Exact (case-insensitive) match on scientific or common name.
pub fn find_exact(name: &str) -> Option<&'static PlantProfile> {
    let key = name.trim().to_lowercase();
    name_index().get(key.as_str()).map(|&idx| &PLANT_PROFILES[idx])
}

/// Map a plant label to its profile. Never fails.
///
/// # Examples
/// ```
/// use lumon_botanist::profiles::lookup;
///
/// let monstera = lookup("Monstera deliciosa");
/// assert_eq!(monstera.family, "Araceae");
///
/// let unknown = lookup("some unknown plant xyz");
/// assert!(unknown.is_unknown());
/// ```
pub fn lookup(name: &str) -> &'static PlantProfile {
    if let Some(profile) = find_exact(name) {
        return profile;
    }

    let query = name.trim().to_lowercase();
    let words: Vec<&str> = query.split_whitespace().collect();
    if words.is_empty() {
        return &UNKNOWN_PROFILE;
    }

    // Partial match: first stored scientific name containing any query word
    PLANT_PROFILES
        .iter()
        .find(|profile| {
            let key = profile.scientific_name.to_lowercase();
            words.iter().any(|word| key.contains(word))
        })
        .unwrap_or(&UNKNOWN_PROFILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        let profile = lookup("Monstera deliciosa");
        assert_eq!(profile.family, "Araceae");
        assert_eq!(profile.region, "Central America");
        assert_eq!(profile.toxicity, 85);
        assert!(!profile.edible);
    }

    #[test]
    fn test_exact_match_ignores_case_and_common_names() {
        assert_eq!(lookup("  monstera DELICIOSA ").scientific_name, "Monstera deliciosa");
        assert_eq!(lookup("Pothos").scientific_name, "Epipremnum aureum");
        assert_eq!(lookup("snake plant").scientific_name, "Dracaena trifasciata");
    }

    #[test]
    fn test_partial_match_on_any_word() {
        // "ficus" appears in Ficus lyrata first (table order)
        assert_eq!(lookup("ficus").scientific_name, "Ficus lyrata");
        assert_eq!(lookup("my aloe plant").scientific_name, "Aloe barbadensis");
        assert_eq!(lookup("Basilicum").scientific_name, "Ocimum basilicum");
    }

    #[test]
    fn test_unknown_default() {
        let profile = lookup("some unknown plant xyz");
        assert!(profile.is_unknown());
        assert_eq!(profile, &UNKNOWN_PROFILE);
        assert_eq!(profile.family, "Unknown");
        assert_eq!(profile.region, "Various");
        assert_eq!(profile.toxicity, 50);
        assert!(!profile.edible);
        assert_eq!(profile.hazards, &["Unknown toxicity — avoid ingestion"]);
        assert_eq!(profile.care_tip, "Provide appropriate light and water based on plant type");
    }

    #[test]
    fn test_empty_query_is_unknown() {
        assert!(lookup("").is_unknown());
        assert!(lookup("   ").is_unknown());
    }

    #[test]
    fn test_table_is_well_formed() {
        for profile in PLANT_PROFILES {
            assert!(profile.toxicity <= 100, "{} toxicity out of range", profile.scientific_name);
            assert!(!profile.hazards.is_empty(), "{} has no hazards listed", profile.scientific_name);
            assert!(!profile.is_unknown());
            assert_eq!(find_exact(profile.scientific_name), Some(profile));
        }
    }

    #[test]
    fn test_care_steps_follow_category() {
        assert_eq!(lookup("Crassula ovata").care_steps()[0], "Water only when soil is completely dry");
        assert_eq!(lookup("Boston Fern").care_steps()[0], "Keep soil consistently moist");
        assert_eq!(UNKNOWN_PROFILE.care_steps()[0], "Provide appropriate light for species");
    }
}
