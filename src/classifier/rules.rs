//! Ordered rule tables mapping color statistics to candidate labels.
//!
//! `CATEGORY_RULES` is listed in priority order. Every rule is evaluated in
//! one pass; the first match in table order chooses the candidates, and the
//! number of matches sets the confidence. When nothing matches,
//! `DEFAULT_RULES` is scanned (first match wins) and
//! `DEFAULT_HOUSEPLANTS` closes the table.

use super::color::{ColorStatistics, Metric};
use smallvec::SmallVec;
use std::fmt;

pub const SINGLE_MATCH_CONFIDENCE: f64 = 0.78;
pub const MULTI_MATCH_CONFIDENCE: f64 = 0.72;
pub const DEFAULT_RULE_CONFIDENCE: f64 = 0.65;
pub const FALLBACK_CONFIDENCE: f64 = 0.60;

pub const FALLBACK_RULE_ID: &str = "decode_fallback";

/// Predicate tree over `ColorStatistics`.
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    Above(Metric, f64),
    Below(Metric, f64),
    All(&'static [Condition]),
    Any(&'static [Condition]),
    Always,
}

impl Condition {
    pub fn holds(&self, stats: &ColorStatistics) -> bool {
        match *self {
            Condition::Above(metric, threshold) => stats.metric(metric) > threshold,
            Condition::Below(metric, threshold) => stats.metric(metric) < threshold,
            Condition::All(parts) => parts.iter().all(|c| c.holds(stats)),
            Condition::Any(parts) => parts.iter().any(|c| c.holds(stats)),
            Condition::Always => true,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(f: &mut fmt::Formatter<'_>, parts: &[Condition], op: &str) -> fmt::Result {
            write!(f, "(")?;
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    write!(f, " {op} ")?;
                }
                write!(f, "{part}")?;
            }
            write!(f, ")")
        }

        match self {
            Condition::Above(metric, t) => write!(f, "{} > {t}", metric.name()),
            Condition::Below(metric, t) => write!(f, "{} < {t}", metric.name()),
            Condition::All(parts) => join(f, parts, "AND"),
            Condition::Any(parts) => join(f, parts, "OR"),
            Condition::Always => write!(f, "always"),
        }
    }
}

/// One row of a rule table
#[derive(Debug)]
pub struct CategoryRule {
    pub id: &'static str,
    pub condition: Condition,
    /// Scientific names, all present in the profile table
    pub candidates: &'static [&'static str],
}

use Condition::{All, Above, Any, Below};
use Metric::{Brightness, Green, Red, Yellow};

pub static CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        id: "flowering_plants",
        condition: All(&[
            Any(&[Above(Red, 0.15), Above(Yellow, 0.10)]),
            Above(Green, 0.20),
        ]),
        candidates: &[
            "Saintpaulia ionantha",
            "Spathiphyllum wallisii",
            "Anthurium andraeanum",
            "Phalaenopsis amabilis",
            "Cyclamen persicum",
            "Begonia rex",
            "Hibiscus rosa-sinensis",
        ],
    },
    CategoryRule {
        id: "succulents_cacti",
        condition: All(&[Above(Green, 0.25), Below(Green, 0.45), Below(Red, 0.15)]),
        candidates: &[
            "Aloe barbadensis",
            "Crassula ovata",
            "Echeveria elegans",
            "Sedum morganianum",
            "Haworthia fasciata",
            "Opuntia microdasys",
            "Schlumbergera x buckleyi",
        ],
    },
    CategoryRule {
        id: "herbs_culinary",
        condition: All(&[
            Above(Green, 0.35),
            Any(&[Above(Yellow, 0.05), Above(Red, 0.05)]),
        ]),
        candidates: &[
            "Ocimum basilicum",
            "Mentha x piperita",
            "Rosmarinus officinalis",
            "Lavandula angustifolia",
            "Thymus vulgaris",
            "Salvia officinalis",
            "Petroselinum crispum",
        ],
    },
    CategoryRule {
        id: "ferns_tropical",
        condition: All(&[Above(Green, 0.50), Below(Red, 0.05), Below(Yellow, 0.05)]),
        candidates: &[
            "Nephrolepis exaltata",
            "Adiantum raddianum",
            "Pteris cretica",
            "Asplenium nidus",
            "Platycerium bifurcatum",
        ],
    },
    CategoryRule {
        id: "tropical_houseplants",
        condition: All(&[Above(Green, 0.40), Below(Red, 0.10), Below(Yellow, 0.10)]),
        candidates: &[
            "Monstera deliciosa",
            "Epipremnum aureum",
            "Philodendron hederaceum",
            "Ficus lyrata",
            "Ficus elastica",
            "Dracaena trifasciata",
            "Zamioculcas zamiifolia",
        ],
    },
    CategoryRule {
        id: "trees_woody",
        condition: All(&[
            Above(Green, 0.30),
            Any(&[Above(Red, 0.10), Above(Yellow, 0.08)]),
        ]),
        candidates: &[
            "Acer palmatum",
            "Buxus sempervirens",
            "Rhododendron ponticum",
            "Camellia japonica",
            "Hydrangea macrophylla",
            "Magnolia grandiflora",
            "Prunus serrulata",
        ],
    },
];

pub static DEFAULT_RULES: &[CategoryRule] = &[
    CategoryRule {
        id: "default_bright_green",
        condition: All(&[Above(Brightness, 0.6), Above(Green, 0.2)]),
        candidates: &["Chlorophytum comosum", "Epipremnum aureum", "Dracaena marginata"],
    },
    CategoryRule {
        id: "default_colorful",
        condition: Any(&[Above(Red, 0.1), Above(Yellow, 0.1)]),
        candidates: &["Rosa hybrida", "Tulipa gesneriana", "Impatiens walleriana"],
    },
];

pub static DEFAULT_HOUSEPLANTS: CategoryRule = CategoryRule {
    id: "default_houseplants",
    condition: Condition::Always,
    candidates: &["Ficus benjamina", "Philodendron hederaceum", "Dracaena trifasciata"],
};

/// Pothos, snake plant, peace lily, spider plant
pub static FALLBACK_CANDIDATES: &[&str] = &[
    "Epipremnum aureum",
    "Dracaena trifasciata",
    "Spathiphyllum wallisii",
    "Chlorophytum comosum",
];

#[derive(Debug, Clone, Copy)]
pub enum RuleOutcome {
    /// Highest-priority matching category and the total number matched
    Category { rule: &'static CategoryRule, matched: usize },
    Default { rule: &'static CategoryRule },
}

impl RuleOutcome {
    pub fn rule(&self) -> &'static CategoryRule {
        match *self {
            RuleOutcome::Category { rule, .. } | RuleOutcome::Default { rule } => rule,
        }
    }

    pub fn confidence(&self) -> f64 {
        match *self {
            RuleOutcome::Category { matched: 1, .. } => SINGLE_MATCH_CONFIDENCE,
            RuleOutcome::Category { .. } => MULTI_MATCH_CONFIDENCE,
            RuleOutcome::Default { .. } => DEFAULT_RULE_CONFIDENCE,
        }
    }
}

pub fn evaluate(stats: &ColorStatistics) -> RuleOutcome {
    let matched: SmallVec<[&'static CategoryRule; 6]> = CATEGORY_RULES
        .iter()
        .filter(|rule| rule.condition.holds(stats))
        .collect();

    if let Some(&rule) = matched.first() {
        return RuleOutcome::Category { rule, matched: matched.len() };
    }

    let rule = DEFAULT_RULES
        .iter()
        .find(|rule| rule.condition.holds(stats))
        .unwrap_or(&DEFAULT_HOUSEPLANTS);
    RuleOutcome::Default { rule }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::find_exact;

    fn stats(green: f64, red: f64, yellow: f64, brightness: f64) -> ColorStatistics {
        ColorStatistics {
            green,
            red,
            yellow,
            brightness,
            sampled_pixels: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_every_candidate_has_a_profile() {
        let tables = CATEGORY_RULES
            .iter()
            .chain(DEFAULT_RULES)
            .chain(std::iter::once(&DEFAULT_HOUSEPLANTS));
        for rule in tables {
            assert!(!rule.candidates.is_empty(), "{} has no candidates", rule.id);
            for name in rule.candidates {
                assert!(find_exact(name).is_some(), "{name} from {} missing", rule.id);
            }
        }
        for name in FALLBACK_CANDIDATES {
            assert!(find_exact(name).is_some(), "{name} missing");
        }
    }

    #[test]
    fn test_priority_order_wins() {
        // flowering, herbs and trees all match; flowering is listed first
        let outcome = evaluate(&stats(0.5, 0.5, 0.0, 0.3));
        assert_eq!(outcome.rule().id, "flowering_plants");
        assert!(matches!(outcome, RuleOutcome::Category { matched: 3, .. }));
        assert_eq!(outcome.confidence(), MULTI_MATCH_CONFIDENCE);
    }

    #[test]
    fn test_single_match_confidence() {
        let outcome = evaluate(&stats(0.3, 0.0, 0.0, 0.5));
        assert_eq!(outcome.rule().id, "succulents_cacti");
        assert_eq!(outcome.confidence(), SINGLE_MATCH_CONFIDENCE);
    }

    #[test]
    fn test_strict_thresholds() {
        // green exactly 0.25 is not "above"
        let outcome = evaluate(&stats(0.25, 0.0, 0.0, 0.5));
        assert!(matches!(outcome, RuleOutcome::Default { .. }));
    }

    #[test]
    fn test_default_tables() {
        let bright = evaluate(&stats(0.22, 0.0, 0.0, 0.9));
        assert_eq!(bright.rule().id, "default_bright_green");
        assert_eq!(bright.confidence(), DEFAULT_RULE_CONFIDENCE);

        let colorful = evaluate(&stats(0.0, 1.0, 0.0, 0.3));
        assert_eq!(colorful.rule().id, "default_colorful");

        let grey = evaluate(&stats(0.0, 0.0, 0.0, 0.5));
        assert_eq!(grey.rule().id, "default_houseplants");
    }

    #[test]
    fn test_default_candidates() {
        assert_eq!(
            DEFAULT_RULES[0].candidates,
            ["Chlorophytum comosum", "Epipremnum aureum", "Dracaena marginata"]
        );
        assert_eq!(
            DEFAULT_RULES[1].candidates,
            ["Rosa hybrida", "Tulipa gesneriana", "Impatiens walleriana"]
        );
        assert_eq!(
            DEFAULT_HOUSEPLANTS.candidates,
            ["Ficus benjamina", "Philodendron hederaceum", "Dracaena trifasciata"]
        );
    }

    #[test]
    fn test_condition_display() {
        assert_eq!(
            CATEGORY_RULES[0].condition.to_string(),
            "((red > 0.15 OR yellow > 0.1) AND green > 0.2)"
        );
        assert_eq!(DEFAULT_HOUSEPLANTS.condition.to_string(), "always");
    }
}
