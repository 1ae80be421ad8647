//! Outcome bands and the narrative analysis built around them.

use crate::core::ComparableCase;
use crate::portfolio::PortfolioAssessment;
use crate::prediction::{is_favorable_outcome, is_unfavorable_outcome, WinProbability};
use crate::strategy::StrategyProfile;
use serde::{Deserialize, Serialize};

/// Outcome band for a win probability in [0,100]. Lower bounds are closed,
/// mirroring the strength-category table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OutcomeBand {
    #[serde(rename = "Highly Challenging")]
    HighlyChallenging,
    #[serde(rename = "Challenging")]
    Challenging,
    #[serde(rename = "Balanced")]
    Balanced,
    #[serde(rename = "Moderately Favorable")]
    ModeratelyFavorable,
    #[serde(rename = "Highly Favorable")]
    HighlyFavorable,
}

impl OutcomeBand {
    pub fn from_probability(probability: f64) -> Self {
        match probability {
            p if p >= 80.0 => Self::HighlyFavorable,
            p if p >= 65.0 => Self::ModeratelyFavorable,
            p if p >= 45.0 => Self::Balanced,
            p if p >= 30.0 => Self::Challenging,
            _ => Self::HighlyChallenging,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::HighlyFavorable => "Highly Favorable",
            Self::ModeratelyFavorable => "Moderately Favorable",
            Self::Balanced => "Balanced",
            Self::Challenging => "Challenging",
            Self::HighlyChallenging => "Highly Challenging",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::HighlyFavorable => {
                "Strong likelihood of a favorable outcome with clear advantages across multiple factors."
            }
            Self::ModeratelyFavorable => {
                "Good prospects for a favorable outcome, though some areas of vulnerability exist."
            }
            Self::Balanced => {
                "Case could go either way, with relatively equal strengths and weaknesses."
            }
            Self::Challenging => {
                "Significant hurdles exist, though partial success may be possible with strategic improvements."
            }
            Self::HighlyChallenging => {
                "Substantial barriers to success with the current approach and evidence."
            }
        }
    }
}

impl std::fmt::Display for OutcomeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Narrative analysis of the predicted outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutcomeAnalysis {
    pub outcome_category: String,
    pub outcome_description: String,
    pub key_positive_factors: Vec<String>,
    pub key_negative_factors: Vec<String>,
    pub judicial_considerations: Vec<String>,
}

// Fixed checklist; the demo data carries the same five items verbatim.
const JUDICIAL_CONSIDERATIONS: [&str; 5] = [
    "Judicial interpretation of key statutes may impact case outcome",
    "Court's disposition toward similar cases in this jurisdiction",
    "Potential for procedural versus substantive resolution",
    "Judicial calendar and time constraints may affect strategy timelines",
    "Court's historical approach to comparable evidence portfolios",
];

/// Build the outcome analysis for a prediction.
pub fn analyze_outcome(
    win: &WinProbability,
    comparables: &[ComparableCase],
    evidence: &PortfolioAssessment,
    strategy: &StrategyProfile,
) -> OutcomeAnalysis {
    let band = OutcomeBand::from_probability(win.win_probability);

    OutcomeAnalysis {
        outcome_category: band.label().to_string(),
        outcome_description: band.description().to_string(),
        key_positive_factors: positive_factors(comparables, evidence, strategy),
        key_negative_factors: negative_factors(comparables, evidence, strategy),
        judicial_considerations: JUDICIAL_CONSIDERATIONS
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}

fn positive_factors(
    comparables: &[ComparableCase],
    evidence: &PortfolioAssessment,
    strategy: &StrategyProfile,
) -> Vec<String> {
    let mut factors = Vec::new();

    if evidence.overall_score >= 70.0 {
        factors.push("Strong overall evidence portfolio".to_string());
    }

    let strong_count = evidence.strong_item_count();
    if strong_count > 0 {
        factors.push(format!("Presence of {} strong evidence items", strong_count));
    }

    if strategy.strategy_effectiveness.starts_with("Well-defined") {
        factors.push("Clear strategic direction with focused approach".to_string());
    }

    let favorable = comparables
        .iter()
        .take(3)
        .filter(|case| is_favorable_outcome(&case.outcome))
        .count();
    if favorable > 0 {
        factors.push(format!(
            "{} similar cases with favorable outcomes",
            favorable
        ));
    }

    if factors.is_empty() {
        factors.push("Case presents opportunity for targeted strategic improvements".to_string());
    }

    factors
}

fn negative_factors(
    comparables: &[ComparableCase],
    evidence: &PortfolioAssessment,
    strategy: &StrategyProfile,
) -> Vec<String> {
    let mut factors = Vec::new();

    if evidence.overall_score < 60.0 {
        factors.push("Evidence portfolio lacks sufficient strength".to_string());
    }

    let weak_count = evidence.weak_item_count();
    if weak_count > 0 {
        factors.push(format!("Presence of {} weak evidence items", weak_count));
    }

    if let Some(gap) = strategy.strategy_gaps.first() {
        let heading = gap.split('-').next().unwrap_or(gap).trim();
        factors.push(format!("Strategy gaps in {}", heading.to_lowercase()));
    }

    let unfavorable = comparables
        .iter()
        .take(3)
        .filter(|case| is_unfavorable_outcome(&case.outcome))
        .count();
    if unfavorable > 0 {
        factors.push(format!(
            "{} similar cases with unfavorable outcomes",
            unfavorable
        ));
    }

    if factors.is_empty() {
        factors.push("Case requires sustained attention to maintain advantages".to_string());
    }

    factors
}
