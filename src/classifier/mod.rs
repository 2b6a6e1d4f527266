//! Color-heuristic plant classifier
//!
//! Pipeline:
//! 1. Decode the image, convert to RGB8 and downsample (nearest neighbour)
//! 2. Bucket every sampled pixel and compute color ratios (`color`)
//! 3. Evaluate the ordered rule tables (`rules`)
//! 4. Pick one label from the candidate set by the configured tie-break
//! 5. Join the plant profile into a `ClassificationResult`
//!
//! Undecodable input does not fail `classify`; it yields a fixed fallback
//! result tagged `SourceTag::Fallback`. `analyze` exposes the strict path.

pub mod color;
pub mod rules;

use image::imageops::{self, FilterType};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ClassifierConfig, TieBreak};
use crate::error::ClassifyError;
use crate::profiles::{self, PlantCategory};

pub use color::{ColorStatistics, Feature};
pub use rules::{RuleOutcome, CATEGORY_RULES, DEFAULT_RULES};

/// How the label was reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTag {
    /// A category rule matched
    RuleMatch,
    /// No category matched; the default table chose the candidates
    DefaultRule,
    /// The image could not be decoded or had no pixels
    Fallback,
}

/// Classification output with the plant profile flattened in.
///
/// `confidence` is a fraction in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: &'static str,
    pub common_name: &'static str,
    pub confidence: f64,
    pub source_tag: SourceTag,
    pub rule: &'static str,
    pub description: &'static str,
    pub family: &'static str,
    pub region: &'static str,
    pub toxicity_score: u8,
    pub edible: bool,
    pub hazards: &'static [&'static str],
    pub care_tip: &'static str,
    pub care_steps: &'static [&'static str],
    pub category: PlantCategory,
    pub features: Vec<Feature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ColorStatistics>,
}

impl ClassificationResult {
    fn new(
        label: &'static str,
        confidence: f64,
        source_tag: SourceTag,
        rule: &'static str,
        statistics: Option<ColorStatistics>,
    ) -> Self {
        let profile = profiles::lookup(label);
        let features = statistics
            .as_ref()
            .map(|s| s.features().into_vec())
            .unwrap_or_default();

        Self {
            label,
            common_name: profile.common_name,
            confidence,
            source_tag,
            rule,
            description: profile.description,
            family: profile.family,
            region: profile.region,
            toxicity_score: profile.toxicity,
            edible: profile.edible,
            hazards: profile.hazards,
            care_tip: profile.care_tip,
            care_steps: profile.care_steps(),
            category: profile.category,
            features,
            statistics,
        }
    }

    /// Confidence on the 0-100 scale, one decimal place
    pub fn confidence_percent(&self) -> f64 {
        (self.confidence * 1000.0).round() / 10.0
    }
}

/// Stateless classifier; cheap to share behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct ColorHeuristicClassifier {
    config: ClassifierConfig,
}

impl ColorHeuristicClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Decode and measure an image without picking a label.
    ///
    /// An image with zero pixels yields empty statistics
    /// (`sampled_pixels == 0`).
    pub fn analyze(&self, image_bytes: &[u8]) -> Result<ColorStatistics, ClassifyError> {
        if image_bytes.is_empty() {
            return Err(ClassifyError::EmptyInput);
        }

        let decoded = image::load_from_memory(image_bytes)?;
        if decoded.width() == 0 || decoded.height() == 0 {
            return Ok(ColorStatistics::default());
        }

        let side = self.config.downsample_size;
        let rgb = decoded.to_rgb8();
        let sampled = imageops::resize(&rgb, side, side, FilterType::Nearest);
        let stats = ColorStatistics::from_rgb(&sampled);

        debug!(
            width = decoded.width(),
            height = decoded.height(),
            sampled = stats.sampled_pixels,
            green = stats.green,
            red = stats.red,
            yellow = stats.yellow,
            brightness = stats.brightness,
            "Color statistics"
        );
        Ok(stats)
    }

    /// Classify with the configured tie-break policy.
    pub fn classify(&self, image_bytes: &[u8]) -> Result<ClassificationResult, ClassifyError> {
        match self.config.tie_break {
            TieBreak::First => self.classify_by(image_bytes, |candidates| candidates.first().copied()),
            TieBreak::Seeded(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                self.classify_with_rng(image_bytes, &mut rng)
            }
        }
    }

    /// Classify choosing uniformly among candidates with the caller's generator.
    pub fn classify_with_rng<R: Rng + ?Sized>(
        &self,
        image_bytes: &[u8],
        rng: &mut R,
    ) -> Result<ClassificationResult, ClassifyError> {
        self.classify_by(image_bytes, |candidates| candidates.choose(&mut *rng).copied())
    }

    fn classify_by<F>(&self, image_bytes: &[u8], mut pick: F) -> Result<ClassificationResult, ClassifyError>
    where
        F: FnMut(&'static [&'static str]) -> Option<&'static str>,
    {
        let stats = match self.analyze(image_bytes) {
            Ok(stats) if stats.sampled_pixels > 0 => stats,
            Ok(_) => {
                warn!("Image has no pixels, using fallback label");
                return Ok(Self::fallback(&mut pick));
            }
            Err(ClassifyError::Decode(e)) => {
                warn!(error = %e, "Image decode failed, using fallback label");
                return Ok(Self::fallback(&mut pick));
            }
            Err(e) => return Err(e),
        };

        let outcome = rules::evaluate(&stats);
        let rule = outcome.rule();
        let label = pick(rule.candidates).unwrap_or(profiles::UNKNOWN_PROFILE.scientific_name);
        let source_tag = match outcome {
            RuleOutcome::Category { .. } => SourceTag::RuleMatch,
            RuleOutcome::Default { .. } => SourceTag::DefaultRule,
        };

        debug!(
            rule = rule.id,
            condition = %rule.condition,
            label,
            confidence = outcome.confidence(),
            "Rule selected"
        );

        Ok(ClassificationResult::new(
            label,
            outcome.confidence(),
            source_tag,
            rule.id,
            Some(stats),
        ))
    }

    fn fallback<F>(pick: &mut F) -> ClassificationResult
    where
        F: FnMut(&'static [&'static str]) -> Option<&'static str>,
    {
        let label = pick(rules::FALLBACK_CANDIDATES).unwrap_or(profiles::UNKNOWN_PROFILE.scientific_name);
        ClassificationResult::new(
            label,
            rules::FALLBACK_CONFIDENCE,
            SourceTag::Fallback,
            rules::FALLBACK_RULE_ID,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use image::{ImageFormat, Rgb, RgbImage};
    use std::io::Cursor;

    const LEAF: Rgb<u8> = Rgb([30, 160, 40]);
    const PETAL: Rgb<u8> = Rgb([200, 30, 30]);
    const GREY: Rgb<u8> = Rgb([128, 128, 128]);

    fn png(image: &RgbImage) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        image.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    fn solid(color: Rgb<u8>) -> Vec<u8> {
        png(&RgbImage::from_pixel(224, 224, color))
    }

    #[test]
    fn test_solid_green_is_fern() {
        let result = ColorHeuristicClassifier::default().classify(&solid(LEAF)).unwrap();
        // ferns_tropical and tropical_houseplants both match
        assert_eq!(result.rule, "ferns_tropical");
        assert_eq!(result.label, "Nephrolepis exaltata");
        assert_eq!(result.source_tag, SourceTag::RuleMatch);
        assert_relative_eq!(result.confidence, 0.72);
        assert_eq!(result.features, vec![Feature::TropicalLeaves, Feature::VeryGreen]);
    }

    #[test]
    fn test_green_band_is_succulent() {
        // 70 of 224 rows green (0.3125), the rest uncategorized grey
        let image = RgbImage::from_fn(224, 224, |_, y| if y < 70 { LEAF } else { GREY });
        let result = ColorHeuristicClassifier::default().classify(&png(&image)).unwrap();
        assert_eq!(result.rule, "succulents_cacti");
        assert_eq!(result.label, "Aloe barbadensis");
        assert_relative_eq!(result.confidence, 0.78);
    }

    #[test]
    fn test_half_leaf_half_petal_is_flowering() {
        let image = RgbImage::from_fn(224, 224, |x, _| if x < 112 { LEAF } else { PETAL });
        let result = ColorHeuristicClassifier::default().classify(&png(&image)).unwrap();
        assert_eq!(result.rule, "flowering_plants");
        assert_eq!(result.label, "Saintpaulia ionantha");
        assert!(result.features.contains(&Feature::BrightFlowers));
    }

    #[test]
    fn test_default_tables() {
        let classifier = ColorHeuristicClassifier::default();

        let red = classifier.classify(&solid(PETAL)).unwrap();
        assert_eq!(red.rule, "default_colorful");
        assert_eq!(red.label, "Rosa hybrida");
        assert_eq!(red.source_tag, SourceTag::DefaultRule);
        assert_relative_eq!(red.confidence, 0.65);

        let grey = classifier.classify(&solid(GREY)).unwrap();
        assert_eq!(grey.rule, "default_houseplants");
        assert_eq!(grey.label, "Ficus benjamina");
        assert_eq!(grey.common_name, "Weeping Fig");
    }

    #[test]
    fn test_decode_failure_falls_back() {
        let classifier = ColorHeuristicClassifier::default();
        let result = classifier.classify(b"definitely not an image").unwrap();
        assert_eq!(result.source_tag, SourceTag::Fallback);
        assert_eq!(result.rule, "decode_fallback");
        assert_eq!(result.label, "Epipremnum aureum");
        assert_relative_eq!(result.confidence, 0.60);
        assert!(result.statistics.is_none());
        assert!(result.features.is_empty());

        assert!(matches!(
            classifier.analyze(b"definitely not an image"),
            Err(ClassifyError::Decode(_))
        ));
    }

    #[test]
    fn test_empty_input_is_an_error() {
        let classifier = ColorHeuristicClassifier::default();
        assert!(matches!(classifier.classify(&[]), Err(ClassifyError::EmptyInput)));
        assert!(matches!(classifier.analyze(&[]), Err(ClassifyError::EmptyInput)));
    }

    #[test]
    fn test_downsample_bounds_work() {
        let classifier = ColorHeuristicClassifier::new(ClassifierConfig {
            downsample_size: 16,
            ..Default::default()
        });
        let image = RgbImage::from_pixel(640, 480, LEAF);
        let stats = classifier.analyze(&png(&image)).unwrap();
        assert_eq!(stats.sampled_pixels, 256);
        assert_relative_eq!(stats.green, 1.0);
    }

    #[test]
    fn test_profile_fields_joined() {
        let result = ColorHeuristicClassifier::default().classify(&solid(LEAF)).unwrap();
        assert_eq!(result.family, "Nephrolepidaceae");
        assert!(!result.care_steps.is_empty());
        assert_relative_eq!(result.confidence_percent(), 72.0);
    }
}
