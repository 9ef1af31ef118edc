//! Raw cosine similarity -> user-facing percentage and confidence tier.
//!
//! Cosine over short skill lists is compressed toward the low end, so the score is
//! stretched with a square root. The transform is monotonic (ranking never changes)
//! and capped at 98 so a heuristic match never claims certainty.

use serde::{Deserialize, Serialize};

pub const MAX_PERCENTAGE: f64 = 98.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Excellent,
    Solid,
    Good,
    Promising,
    #[serde(rename = "low confidence")]
    LowConfidence,
}

impl Tier {
    pub fn headline(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent fit - polish & showcase!",
            Tier::Solid => "Solid fit - fill a few gaps to level up!",
            Tier::Good => "Good start - focus on core platform skills!",
            Tier::Promising => "Great beginner path - follow this 4-week plan!",
            Tier::LowConfidence => "Low confidence match - add more recognized skills to sharpen this result.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibrated {
    /// Rounded to one decimal, in [0, 98].
    pub percentage: f64,
    pub tier: Tier,
    pub low_confidence: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreCalibrator {
    low_confidence_threshold: f64,
}

impl ScoreCalibrator {
    pub fn new(low_confidence_threshold: f64) -> Self {
        Self { low_confidence_threshold }
    }

    pub fn calibrate(&self, raw_score: f32) -> Calibrated {
        let percentage = stretch(raw_score);
        let tier = if percentage >= 85.0 {
            Tier::Excellent
        } else if percentage >= 75.0 {
            Tier::Solid
        } else if percentage >= 60.0 {
            Tier::Good
        } else if percentage >= self.low_confidence_threshold {
            Tier::Promising
        } else {
            Tier::LowConfidence
        };
        Calibrated { percentage, tier, low_confidence: percentage < self.low_confidence_threshold }
    }
}

/// `min(sqrt(raw) * 100, 98)` rounded to one decimal. Out-of-range or NaN input is clamped to [0, 1].
pub fn stretch(raw_score: f32) -> f64 {
    let raw = if raw_score.is_nan() { 0.0 } else { (raw_score as f64).clamp(0.0, 1.0) };
    let pct = (raw.sqrt() * 100.0).min(MAX_PERCENTAGE);
    (pct * 10.0).round() / 10.0
}
