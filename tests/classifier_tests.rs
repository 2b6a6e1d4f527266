// Classifier Integration Tests
//
// Purpose: Properties of `classify` over generated images
// Run with: cargo test --test classifier_tests

use approx::assert_relative_eq;
use image::{ImageFormat, Rgb, RgbImage};
use lumon_botanist::classifier::rules::{CATEGORY_RULES, DEFAULT_HOUSEPLANTS, DEFAULT_RULES};
use lumon_botanist::profiles::find_exact;
use lumon_botanist::{ClassifierConfig, ClassifyError, ColorHeuristicClassifier, SourceTag, TieBreak};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Cursor;

fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

/// Random blocky images covering a wide spread of color ratios
fn random_image(rng: &mut StdRng) -> RgbImage {
    let palette: Vec<Rgb<u8>> = (0..4)
        .map(|_| Rgb([rng.gen(), rng.gen(), rng.gen()]))
        .collect();
    let cells: Vec<usize> = (0..64).map(|_| rng.gen_range(0..palette.len())).collect();
    RgbImage::from_fn(96, 96, |x, y| palette[cells[((y / 12) * 8 + x / 12) as usize]])
}

fn seeded(seed: u64) -> ColorHeuristicClassifier {
    ColorHeuristicClassifier::new(ClassifierConfig {
        tie_break: TieBreak::Seeded(seed),
        ..ClassifierConfig::default()
    })
}

// ============================================================================
// Labels and confidence
// ============================================================================

#[test]
fn test_labels_are_known_and_confidence_in_range() {
    let mut rng = StdRng::seed_from_u64(2024);
    let classifier = seeded(7);

    for _ in 0..40 {
        let bytes = encode(&random_image(&mut rng), ImageFormat::Png);
        let result = classifier.classify(&bytes).unwrap();

        assert!(find_exact(result.label).is_some(), "unknown label {}", result.label);
        assert!((0.0..=1.0).contains(&result.confidence));
        assert_ne!(result.source_tag, SourceTag::Fallback);
    }
}

#[test]
fn test_label_comes_from_selected_rule() {
    let mut rng = StdRng::seed_from_u64(99);
    let classifier = seeded(3);
    let tables: Vec<_> = CATEGORY_RULES
        .iter()
        .chain(DEFAULT_RULES)
        .chain(std::iter::once(&DEFAULT_HOUSEPLANTS))
        .collect();

    for _ in 0..20 {
        let bytes = encode(&random_image(&mut rng), ImageFormat::Png);
        let result = classifier.classify(&bytes).unwrap();
        let rule = tables.iter().find(|r| r.id == result.rule).unwrap();
        assert!(rule.candidates.contains(&result.label));
    }
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_seeded_classification_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(5);
    let bytes = encode(&random_image(&mut rng), ImageFormat::Png);

    let first = seeded(42).classify(&bytes).unwrap();
    let second = seeded(42).classify(&bytes).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_caller_supplied_rng() {
    let image = RgbImage::from_pixel(50, 50, Rgb([30, 160, 40]));
    let bytes = encode(&image, ImageFormat::Png);
    let classifier = ColorHeuristicClassifier::default();

    let mut a = StdRng::seed_from_u64(11);
    let mut b = StdRng::seed_from_u64(11);
    let left = classifier.classify_with_rng(&bytes, &mut a).unwrap();
    let right = classifier.classify_with_rng(&bytes, &mut b).unwrap();
    assert_eq!(left.label, right.label);
    assert_eq!(left.rule, "ferns_tropical");
}

// ============================================================================
// Input formats and failure paths
// ============================================================================

#[test]
fn test_jpeg_input() {
    let image = RgbImage::from_pixel(320, 240, Rgb([30, 160, 40]));
    let bytes = encode(&image, ImageFormat::Jpeg);
    let result = ColorHeuristicClassifier::default().classify(&bytes).unwrap();
    assert_eq!(result.source_tag, SourceTag::RuleMatch);
    let stats = result.statistics.unwrap();
    assert_eq!(stats.sampled_pixels, 224 * 224);
    assert!(stats.green > 0.95);
}

#[test]
fn test_decode_failure_and_empty_input() {
    let classifier = ColorHeuristicClassifier::default();

    let truncated = &encode(&RgbImage::from_pixel(8, 8, Rgb([1, 2, 3])), ImageFormat::Png)[..20];
    let result = classifier.classify(truncated).unwrap();
    assert_eq!(result.source_tag, SourceTag::Fallback);
    assert_relative_eq!(result.confidence, 0.60);
    assert!(["Epipremnum aureum", "Dracaena trifasciata", "Spathiphyllum wallisii", "Chlorophytum comosum"]
        .contains(&result.label));

    assert!(matches!(classifier.classify(&[]), Err(ClassifyError::EmptyInput)));
}
