//! Evidence strength scoring.
//!
//! Scores a single evidence item from its reliability and relevance ratings
//! and buckets the result into one of five ordered strength categories. The
//! same bucket table applies to portfolio-level aggregates, so an item score
//! and an overall score are always directly comparable.
//!
//! All operations here are pure: they read their arguments, return their
//! results, and touch no shared state.

use crate::core::EvidenceItem;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest accepted rating value.
pub const MIN_RATING: f64 = 1.0;
/// Highest accepted rating value.
pub const MAX_RATING: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScoreError {
    /// A reliability or relevance rating outside [1,5] or non-integral.
    /// Invalid ratings are surfaced to the caller, never clamped; clamping
    /// would mask data-entry defects upstream.
    #[error("invalid rating {value}: ratings must be whole numbers from 1 to 5")]
    InvalidRating { value: f64 },

    /// Aggregate scoring requested over zero evidence items.
    #[error("cannot score an empty evidence portfolio")]
    EmptyPortfolio,
}

/// Strength category for a score in [0,100].
///
/// Lower bounds are closed and consistent across all five buckets; the table
/// has no overlap and no gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthCategory {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl StrengthCategory {
    /// Bucket a score into its category.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 85.0 => Self::VeryStrong,
            s if s >= 70.0 => Self::Strong,
            s if s >= 50.0 => Self::Moderate,
            s if s >= 30.0 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }

    /// Display label matching the category's serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl std::fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Weights applied to the normalized ratings when combining them into a
/// strength score. The equal default split is a policy placeholder until a
/// real scoring rubric is supplied, which is why it lives in configuration
/// rather than in the formula.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EvidenceWeights {
    /// Weight for the reliability rating (0.0-1.0)
    #[serde(default = "default_reliability_weight")]
    pub reliability: f64,

    /// Weight for the relevance rating (0.0-1.0)
    #[serde(default = "default_relevance_weight")]
    pub relevance: f64,
}

fn default_reliability_weight() -> f64 {
    0.5
}

fn default_relevance_weight() -> f64 {
    0.5
}

impl Default for EvidenceWeights {
    fn default() -> Self {
        Self {
            reliability: default_reliability_weight(),
            relevance: default_relevance_weight(),
        }
    }
}

impl EvidenceWeights {
    // Pure function: check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    /// Validate that both weights are in range and sum to 1.0 (with a small
    /// tolerance for floating point).
    pub fn validate(&self) -> Result<(), String> {
        if !Self::is_valid_weight(self.reliability) {
            return Err("Reliability weight must be between 0.0 and 1.0".to_string());
        }
        if !Self::is_valid_weight(self.relevance) {
            return Err("Relevance weight must be between 0.0 and 1.0".to_string());
        }
        let sum = self.reliability + self.relevance;
        if (sum - 1.0).abs() > 0.001 {
            return Err(format!(
                "Scoring weights (reliability, relevance) must sum to 1.0, but sum to {:.3}",
                sum
            ));
        }
        Ok(())
    }

    /// Normalize weights so they sum to 1.0.
    pub fn normalize(&mut self) {
        let sum = self.reliability + self.relevance;
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            self.reliability /= sum;
            self.relevance /= sum;
        }
    }
}

/// Derived score and category for a single evidence item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ItemScore {
    pub strength_score: f64,
    pub category: StrengthCategory,
}

/// Derived aggregate score and category for a whole portfolio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioScore {
    pub overall_score: f64,
    pub overall_category: StrengthCategory,
}

/// Deterministic, side-effect-free scorer for evidence items and portfolios.
///
/// The scorer holds only its weight configuration; it is `Copy` and safe to
/// share across threads without coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvidenceScorer {
    pub weights: EvidenceWeights,
}

impl EvidenceScorer {
    pub fn new(weights: EvidenceWeights) -> Self {
        Self { weights }
    }

    /// Score a single evidence item from its two ratings.
    ///
    /// Each rating is normalized to [0,1] via `(rating - 1) / 4`, combined
    /// with the configured weighted average, scaled to [0,100], and rounded
    /// to one decimal place with halves away from zero.
    pub fn score_item(&self, reliability: f64, relevance: f64) -> Result<ItemScore, ScoreError> {
        let reliability = validate_rating(reliability)?;
        let relevance = validate_rating(relevance)?;

        let combined = normalize_rating(reliability) * self.weights.reliability
            + normalize_rating(relevance) * self.weights.relevance;
        let strength_score = round_to_tenth(combined * 100.0);

        Ok(ItemScore {
            strength_score,
            category: StrengthCategory::from_score(strength_score),
        })
    }

    /// Score a whole portfolio as the arithmetic mean of its item scores.
    ///
    /// The result depends only on the multiset of item ratings, not on their
    /// order. An empty portfolio is an error, never a defined zero score: a
    /// portfolio with no evidence has no meaningful strength, and a silent
    /// 0.0 would be indistinguishable from a genuinely all-weak portfolio.
    pub fn score_portfolio<'a, I>(&self, items: I) -> Result<PortfolioScore, ScoreError>
    where
        I: IntoIterator<Item = &'a EvidenceItem>,
    {
        let mut total = 0.0;
        let mut count = 0usize;
        for item in items {
            total += self.score_item(item.reliability, item.relevance)?.strength_score;
            count += 1;
        }

        if count == 0 {
            return Err(ScoreError::EmptyPortfolio);
        }

        let overall_score = round_to_tenth(total / count as f64);
        Ok(PortfolioScore {
            overall_score,
            overall_category: StrengthCategory::from_score(overall_score),
        })
    }
}

// Pure function: map a rating in [1,5] onto [0,1]
fn normalize_rating(rating: f64) -> f64 {
    (rating - MIN_RATING) / (MAX_RATING - MIN_RATING)
}

fn validate_rating(value: f64) -> Result<f64, ScoreError> {
    let integral = value.is_finite() && value.fract() == 0.0;
    if !integral || !(MIN_RATING..=MAX_RATING).contains(&value) {
        return Err(ScoreError::InvalidRating { value });
    }
    Ok(value)
}

/// Round to one decimal place, halves away from zero.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
