use crate::error::{RecommendError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOW_CONFIDENCE_THRESHOLD: f64 = 50.0;
pub const DEFAULT_TOP_N: usize = 3;
pub const MAX_TOP_N: usize = 10;
pub const MAX_SKILLS_LEN: usize = 2000;

/// Tunables for index construction and result calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Calibrated percentage below which a result is flagged low confidence.
    pub low_confidence_threshold: f64,
    /// Largest n-gram fed to the index (1 = unigrams, 2 = unigrams + bigrams).
    pub ngram_max: usize,
    /// Use `1 + ln(count)` instead of the raw count as term frequency.
    pub sublinear_tf: bool,
    pub max_skills_len: usize,
    pub max_top_n: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            low_confidence_threshold: DEFAULT_LOW_CONFIDENCE_THRESHOLD,
            ngram_max: 2,
            sublinear_tf: false,
            max_skills_len: MAX_SKILLS_LEN,
            max_top_n: MAX_TOP_N,
        }
    }
}

impl Settings {
    pub fn with_low_confidence_threshold(mut self, threshold: f64) -> Self {
        self.low_confidence_threshold = threshold;
        self
    }

    pub fn with_ngram_max(mut self, ngram_max: usize) -> Self {
        self.ngram_max = ngram_max;
        self
    }

    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    /// The threshold has to sit below the "good" tier, otherwise the tiers overlap.
    pub fn validate(&self) -> Result<()> {
        let t = self.low_confidence_threshold;
        if !t.is_finite() || t <= 0.0 || t > 60.0 {
            return Err(RecommendError::Validation(format!(
                "low_confidence_threshold must be in (0, 60], got {t}"
            )));
        }
        if !(1..=2).contains(&self.ngram_max) {
            return Err(RecommendError::Validation(format!(
                "ngram_max must be 1 or 2, got {}",
                self.ngram_max
            )));
        }
        if self.max_top_n == 0 || self.max_top_n > MAX_TOP_N {
            return Err(RecommendError::Validation(format!(
                "max_top_n must be in [1, {MAX_TOP_N}], got {}",
                self.max_top_n
            )));
        }
        Ok(())
    }
}
