//! Strategic recommendations derived from the assembled analysis.

use crate::core::ComparableCase;
use crate::portfolio::PortfolioAssessment;
use crate::prediction::WinProbability;
use crate::strategy::StrategyProfile;
use serde::{Deserialize, Serialize};

/// Priority for a strategic recommendation, ordered most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecommendationPriority {
    Critical,
    High,
    Moderate,
    Enhancement,
}

impl RecommendationPriority {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Enhancement => "Enhancement",
        }
    }
}

impl std::fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One prioritized recommendation with its rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub category: String,
    pub priority: RecommendationPriority,
    pub recommendation: String,
    pub rationale: String,
}

/// Derive prioritized recommendations from the analysis results.
///
/// `evidence_count` is the raw portfolio size as supplied by the host, used
/// for the thin-portfolio recommendation.
pub fn recommend(
    win: &WinProbability,
    comparables: &[ComparableCase],
    evidence: &PortfolioAssessment,
    strategy: &StrategyProfile,
    evidence_count: usize,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let probability = win.win_probability;

    for (index, gap) in evidence.portfolio_gaps.iter().enumerate() {
        let priority = if index == 0 && probability < 60.0 {
            RecommendationPriority::Critical
        } else {
            RecommendationPriority::High
        };
        recommendations.push(Recommendation {
            category: "Evidence".to_string(),
            priority,
            recommendation: format!("Address evidence gap: {}", gap_heading(gap)),
            rationale: format!(
                "Strengthening this area would directly improve case probability by addressing: {}",
                gap
            ),
        });
    }

    let weak_count = evidence.weak_item_count();
    if weak_count > 0 {
        let priority = if probability < 70.0 {
            RecommendationPriority::High
        } else {
            RecommendationPriority::Moderate
        };
        recommendations.push(Recommendation {
            category: "Evidence".to_string(),
            priority,
            recommendation: format!("Strengthen {} weak evidence items", weak_count),
            rationale: "Vulnerabilities in these evidence items could be exploited by opposing counsel"
                .to_string(),
        });
    }

    for (index, gap) in strategy.strategy_gaps.iter().enumerate() {
        let priority = if index == 0 && gap.contains("lacks clear definition") {
            RecommendationPriority::Critical
        } else {
            RecommendationPriority::High
        };
        recommendations.push(Recommendation {
            category: "Strategy".to_string(),
            priority,
            recommendation: format!("Refine strategy: {}", gap_heading(gap)),
            rationale: format!(
                "Strategic improvement would strengthen approach by addressing: {}",
                gap
            ),
        });
    }

    if let Some(successful) = comparables
        .iter()
        .find(|case| case.outcome.to_lowercase().contains("win"))
    {
        recommendations.push(Recommendation {
            category: "Case Comparison".to_string(),
            priority: RecommendationPriority::Moderate,
            recommendation: format!(
                "Align approach with successful case: {}",
                successful.title
            ),
            rationale: format!(
                "This similar case succeeded using {}",
                successful.strategy_used
            ),
        });
    }

    if evidence_count < 3 {
        recommendations.push(Recommendation {
            category: "Evidence".to_string(),
            priority: RecommendationPriority::High,
            recommendation: "Expand evidence portfolio with additional supporting items".to_string(),
            rationale:
                "Current evidence base is limited; additional evidence would strengthen overall position"
                    .to_string(),
        });
    }

    if probability < 50.0 {
        recommendations.push(Recommendation {
            category: "Settlement".to_string(),
            priority: RecommendationPriority::High,
            recommendation: "Develop strong fallback settlement position".to_string(),
            rationale: "Given current win probability, a strategic settlement approach is advisable"
                .to_string(),
        });
    }

    recommendations.push(Recommendation {
        category: "Preparation".to_string(),
        priority: RecommendationPriority::Enhancement,
        recommendation: "Anticipate and prepare counters to opposing arguments".to_string(),
        rationale: "Proactive preparation for opposing theories strengthens overall position"
            .to_string(),
    });

    recommendations
}

// The text before the first hyphen reads as a heading for the full gap
fn gap_heading(gap: &str) -> &str {
    gap.split('-').next().unwrap_or(gap).trim()
}
