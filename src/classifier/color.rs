//! Per-pixel color buckets and image-wide color statistics.
//!
//! Each pixel lands in at most one bucket. Buckets are tried in order:
//! green, red, yellow, blue, brown. The first rule that holds wins, so a
//! later bucket only sees pixels rejected by every earlier one.
//!
//! Two sub-shades are counted alongside their parent bucket and feed the
//! reported feature flags:
//! - bright red (inside red)
//! - vivid leaf green (inside green)
//!
//! Ratios are bucket counts over sampled pixels and need not sum to 1.

use image::RgbImage;
use serde::Serialize;
use smallvec::SmallVec;
use std::ops::RangeInclusive;

// ============================================================================
// Pixel thresholds
// ============================================================================

pub const GREEN_MIN: u8 = 80;
pub const RED_MIN: u8 = 100;
pub const YELLOW_RG_MIN: u8 = 150;
pub const YELLOW_B_MAX: u8 = 100;
pub const BLUE_MIN: u8 = 80;

pub const BROWN_R: RangeInclusive<u8> = 60..=140;
pub const BROWN_G: RangeInclusive<u8> = 40..=120;
pub const BROWN_B: RangeInclusive<u8> = 20..=90;
/// Brown needs |r - g| strictly below this
pub const BROWN_RG_SPREAD: i16 = 40;

pub const BRIGHT_RED_MIN: u8 = 160;
/// g and b must both stay under this fraction of r
pub const BRIGHT_RED_DOMINANCE: f64 = 0.7;

pub const VIVID_GREEN_MIN: u8 = 140;
/// r and b must both stay under this fraction of g
pub const VIVID_GREEN_DOMINANCE: f64 = 0.8;

// ============================================================================
// Feature flag thresholds
// ============================================================================

pub const BRIGHT_FLOWERS_RATIO: f64 = 0.08;
pub const TROPICAL_LEAVES_RATIO: f64 = 0.25;
pub const VERY_GREEN_RATIO: f64 = 0.7;
pub const WOODY_RATIO: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBucket {
    Green,
    Red,
    Yellow,
    Blue,
    Brown,
}

/// Bucket for one RGB pixel, or `None` for uncategorized pixels.
pub fn bucket_of([r, g, b]: [u8; 3]) -> Option<ColorBucket> {
    if g > r && g > b && g > GREEN_MIN {
        Some(ColorBucket::Green)
    } else if r > g && r > b && r > RED_MIN {
        Some(ColorBucket::Red)
    } else if r > YELLOW_RG_MIN && g > YELLOW_RG_MIN && b < YELLOW_B_MAX {
        Some(ColorBucket::Yellow)
    } else if b > r && b > g && b > BLUE_MIN {
        Some(ColorBucket::Blue)
    } else if BROWN_R.contains(&r)
        && BROWN_G.contains(&g)
        && BROWN_B.contains(&b)
        && (r as i16 - g as i16).abs() < BROWN_RG_SPREAD
    {
        Some(ColorBucket::Brown)
    } else {
        None
    }
}

fn is_bright_red([r, g, b]: [u8; 3]) -> bool {
    let limit = r as f64 * BRIGHT_RED_DOMINANCE;
    r > BRIGHT_RED_MIN && (g as f64) < limit && (b as f64) < limit
}

fn is_vivid_green([r, g, b]: [u8; 3]) -> bool {
    let limit = g as f64 * VIVID_GREEN_DOMINANCE;
    g > VIVID_GREEN_MIN && (r as f64) < limit && (b as f64) < limit
}

/// Derived visual traits. Reported with the result, never used by rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    BrightFlowers,
    TropicalLeaves,
    VeryGreen,
    Woody,
}

/// Named ratio that rule predicates compare against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Green,
    Red,
    Yellow,
    Blue,
    Brown,
    Brightness,
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::Green => "green",
            Metric::Red => "red",
            Metric::Yellow => "yellow",
            Metric::Blue => "blue",
            Metric::Brown => "brown",
            Metric::Brightness => "brightness",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ColorStatistics {
    pub green: f64,
    pub red: f64,
    pub yellow: f64,
    pub blue: f64,
    pub brown: f64,
    /// Mean of (r + g + b) / 765 over every sampled pixel
    pub brightness: f64,
    pub bright_red: f64,
    pub vivid_green: f64,
    pub sampled_pixels: u32,
}

impl ColorStatistics {
    /// Single pass over an already downsampled RGB image.
    pub fn from_rgb(image: &RgbImage) -> Self {
        let mut counts = [0u32; 5];
        let mut bright_red = 0u32;
        let mut vivid_green = 0u32;
        let mut brightness_sum = 0.0f64;
        let mut total = 0u32;

        for pixel in image.pixels() {
            let rgb = pixel.0;
            total += 1;
            brightness_sum += (rgb[0] as f64 + rgb[1] as f64 + rgb[2] as f64) / 765.0;

            match bucket_of(rgb) {
                Some(ColorBucket::Green) => {
                    counts[0] += 1;
                    if is_vivid_green(rgb) {
                        vivid_green += 1;
                    }
                }
                Some(ColorBucket::Red) => {
                    counts[1] += 1;
                    if is_bright_red(rgb) {
                        bright_red += 1;
                    }
                }
                Some(ColorBucket::Yellow) => counts[2] += 1,
                Some(ColorBucket::Blue) => counts[3] += 1,
                Some(ColorBucket::Brown) => counts[4] += 1,
                None => {}
            }
        }

        if total == 0 {
            return Self::default();
        }

        let n = total as f64;
        Self {
            green: counts[0] as f64 / n,
            red: counts[1] as f64 / n,
            yellow: counts[2] as f64 / n,
            blue: counts[3] as f64 / n,
            brown: counts[4] as f64 / n,
            brightness: brightness_sum / n,
            bright_red: bright_red as f64 / n,
            vivid_green: vivid_green as f64 / n,
            sampled_pixels: total,
        }
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Green => self.green,
            Metric::Red => self.red,
            Metric::Yellow => self.yellow,
            Metric::Blue => self.blue,
            Metric::Brown => self.brown,
            Metric::Brightness => self.brightness,
        }
    }

    pub fn features(&self) -> SmallVec<[Feature; 4]> {
        let mut features = SmallVec::new();
        if self.bright_red > BRIGHT_FLOWERS_RATIO {
            features.push(Feature::BrightFlowers);
        }
        if self.vivid_green > TROPICAL_LEAVES_RATIO {
            features.push(Feature::TropicalLeaves);
        }
        if self.green > VERY_GREEN_RATIO {
            features.push(Feature::VeryGreen);
        }
        if self.brown > WOODY_RATIO {
            features.push(Feature::Woody);
        }
        features
    }
}
