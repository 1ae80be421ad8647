//! Outcome prediction: combines comparable-case outcomes, portfolio
//! strength, and the strategy profile into a win-probability estimate.

pub mod outcome;
pub mod recommendations;

use crate::core::ComparableCase;
use crate::portfolio::PortfolioAssessment;
use crate::scoring::round_to_tenth;
use crate::strategy::StrategyProfile;
use serde::{Deserialize, Serialize};

/// Number of comparable cases that participate in the base rate.
const COMPARABLES_CONSIDERED: usize = 3;

/// Win-probability estimate with its contribution breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinProbability {
    /// Final estimate in [0,100], rounded to a whole number.
    pub win_probability: f64,
    /// Favorable-outcome rate over the leading comparable cases, or 50 when
    /// none were supplied.
    pub base_case_probability: f64,
    /// Evidence adjustment in [-20, +20].
    pub evidence_contribution: f64,
    /// Strategy adjustment in [-15, +15].
    pub strategy_contribution: f64,
}

/// Estimate the probability of a favorable outcome.
///
/// The base rate comes from the share of favorable outcomes among the first
/// three comparable cases. Evidence shifts the estimate by
/// `(overall_score - 50) * 0.4` and strategy by `(effectiveness - 50) * 0.3`
/// where effectiveness is `50 + 10 * max keyword score`. The sum is clamped
/// to [0,100].
pub fn estimate_win_probability(
    comparables: &[ComparableCase],
    evidence: &PortfolioAssessment,
    strategy: &StrategyProfile,
) -> WinProbability {
    let base_case_probability = if comparables.is_empty() {
        50.0
    } else {
        let considered = comparables.len().min(COMPARABLES_CONSIDERED);
        let favorable = comparables
            .iter()
            .take(COMPARABLES_CONSIDERED)
            .filter(|case| is_favorable_outcome(&case.outcome))
            .count();
        favorable as f64 / considered as f64 * 100.0
    };

    let evidence_contribution = (evidence.overall_score - 50.0) * 0.4;

    let strategy_effectiveness = 50.0 + strategy.max_score() as f64 * 10.0;
    let strategy_contribution = (strategy_effectiveness - 50.0) * 0.3;

    let win_probability =
        (base_case_probability + evidence_contribution + strategy_contribution).clamp(0.0, 100.0);

    log::debug!(
        "win probability {:.0} (base {:.0}, evidence {:+.1}, strategy {:+.1})",
        win_probability,
        base_case_probability,
        evidence_contribution,
        strategy_contribution
    );

    WinProbability {
        win_probability: win_probability.round(),
        base_case_probability: base_case_probability.round(),
        evidence_contribution: round_to_tenth(evidence_contribution),
        strategy_contribution: round_to_tenth(strategy_contribution),
    }
}

pub(crate) fn is_favorable_outcome(outcome: &str) -> bool {
    let outcome = outcome.to_lowercase();
    outcome.contains("win") || outcome.contains("favorable") || outcome.contains("success")
}

pub(crate) fn is_unfavorable_outcome(outcome: &str) -> bool {
    let outcome = outcome.to_lowercase();
    outcome.contains("loss") || outcome.contains("unfavorable")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EvidenceItem;
    use crate::portfolio::{assess_portfolio, EvidencePortfolio};
    use crate::scoring::EvidenceScorer;
    use crate::strategy::profile_strategy;

    fn comparable(title: &str, outcome: &str) -> ComparableCase {
        ComparableCase {
            title: title.to_string(),
            facts: None,
            outcome: outcome.to_string(),
            evidence_strength: String::new(),
            strategy_used: String::new(),
            key_factors: Vec::new(),
            similarity: None,
        }
    }

    fn strong_assessment() -> PortfolioAssessment {
        let scorer = EvidenceScorer::default();
        let portfolio = EvidencePortfolio::from_items(vec![
            EvidenceItem::new("Signed agreement", "document", 5.0, 5.0),
            EvidenceItem::new("Expert opinion on damages", "expert", 5.0, 5.0),
        ]);
        assess_portfolio(&scorer, &portfolio).unwrap()
    }

    #[test]
    fn test_base_rate_defaults_without_comparables() {
        let evidence = strong_assessment();
        let strategy = profile_strategy("");
        let win = estimate_win_probability(&[], &evidence, &strategy);
        assert_eq!(win.base_case_probability, 50.0);
    }

    #[test]
    fn test_base_rate_counts_favorable_top_three() {
        let comparables = vec![
            comparable("A", "Win through summary judgment"),
            comparable("B", "Loss at trial"),
            comparable("C", "Favorable settlement"),
            comparable("D", "Win on appeal"), // beyond the top three, ignored
        ];
        let evidence = strong_assessment();
        let strategy = profile_strategy("");
        let win = estimate_win_probability(&comparables, &evidence, &strategy);
        // 2 favorable of 3 considered
        assert_eq!(win.base_case_probability, 67.0);
    }

    #[test]
    fn test_evidence_contribution_scales_with_overall_score() {
        let evidence = strong_assessment();
        let strategy = profile_strategy("");
        let win = estimate_win_probability(&[], &evidence, &strategy);
        // overall 100 -> (100 - 50) * 0.4 = +20
        assert_eq!(win.evidence_contribution, 20.0);
        assert_eq!(win.strategy_contribution, 0.0);
        assert_eq!(win.win_probability, 70.0);
    }

    #[test]
    fn test_strategy_contribution_from_keyword_score() {
        let evidence = strong_assessment();
        let strategy =
            profile_strategy("We argue the merits, the statutory elements, and controlling precedent.");
        assert_eq!(strategy.max_score(), 4);
        let win = estimate_win_probability(&[], &evidence, &strategy);
        // effectiveness 90 -> (90 - 50) * 0.3 = +12
        assert_eq!(win.strategy_contribution, 12.0);
        assert_eq!(win.win_probability, 82.0);
    }

    #[test]
    fn test_probability_is_clamped_to_bounds() {
        let comparables = vec![
            comparable("A", "Win"),
            comparable("B", "Win"),
            comparable("C", "Win"),
        ];
        let evidence = strong_assessment();
        let strategy = profile_strategy(
            "Challenge on the merits with statutory elements and precedent, a summary judgment \
             motion, and an aggressive counter offensive.",
        );
        let win = estimate_win_probability(&comparables, &evidence, &strategy);
        assert_eq!(win.win_probability, 100.0);
    }

    #[test]
    fn test_outcome_keyword_detection() {
        assert!(is_favorable_outcome("Partially successful"));
        assert!(is_favorable_outcome("Favorable settlement"));
        assert!(!is_favorable_outcome("Settlement after discovery"));
        assert!(is_unfavorable_outcome("Loss at trial"));
        assert!(!is_unfavorable_outcome("Win through summary judgment"));
    }
}
