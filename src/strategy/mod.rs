//! Legal strategy profiling.
//!
//! Reads the strategy narrative, scores it against keyword tables for five
//! approach families, and derives a profile: primary and secondary approach,
//! balance, gaps, and an effectiveness reading. Keyword counting is crude by
//! design; the narrative is free prose and the profile only has to be
//! directionally useful for the prediction stage.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The five approach families recognized in a strategy narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyApproach {
    Procedural,
    Substantive,
    Settlement,
    Aggressive,
    Defensive,
}

impl StrategyApproach {
    pub const ALL: [StrategyApproach; 5] = [
        Self::Procedural,
        Self::Substantive,
        Self::Settlement,
        Self::Aggressive,
        Self::Defensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Procedural => "procedural",
            Self::Substantive => "substantive",
            Self::Settlement => "settlement",
            Self::Aggressive => "aggressive",
            Self::Defensive => "defensive",
        }
    }
}

impl std::fmt::Display for StrategyApproach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static APPROACH_KEYWORDS: Lazy<Vec<(StrategyApproach, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            StrategyApproach::Procedural,
            vec![
                "procedural",
                "process",
                "motion to dismiss",
                "summary judgment",
                "jurisdiction",
            ],
        ),
        (
            StrategyApproach::Substantive,
            vec!["substantive", "merits", "elements", "statutory", "precedent"],
        ),
        (
            StrategyApproach::Settlement,
            vec!["settlement", "negotiation", "mediation", "resolution", "compromise"],
        ),
        (
            StrategyApproach::Aggressive,
            vec!["aggressive", "challenge", "attack", "counter", "offensive"],
        ),
        (
            StrategyApproach::Defensive,
            vec!["defensive", "mitigate", "limit", "reduce", "protect"],
        ),
    ]
});

/// Profile of a strategy narrative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyProfile {
    /// Best-matching approach, or "undefined" when nothing matched.
    pub primary_strategy: String,
    /// Second-best approach, empty when there is no second match.
    pub secondary_strategy: String,
    /// Keyword hit counts per approach.
    pub strategy_scores: BTreeMap<String, u32>,
    pub strategy_balance: String,
    pub strategy_gaps: Vec<String>,
    pub strategy_effectiveness: String,
}

impl StrategyProfile {
    /// Highest keyword score across all approaches.
    pub fn max_score(&self) -> u32 {
        self.strategy_scores.values().copied().max().unwrap_or(0)
    }
}

/// Profile a strategy narrative.
pub fn profile_strategy(narrative: &str) -> StrategyProfile {
    let text = narrative.to_lowercase();
    let scored = approach_scores(&text);

    // Stable sort keeps the fixed approach order on ties
    let mut ranked = scored.clone();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let primary_strategy = if ranked[0].1 > 0 {
        ranked[0].0.as_str().to_string()
    } else {
        "undefined".to_string()
    };
    let secondary_strategy = if ranked.len() > 1 && ranked[1].1 > 0 {
        ranked[1].0.as_str().to_string()
    } else {
        String::new()
    };

    let strategy_scores: BTreeMap<String, u32> = scored
        .iter()
        .map(|(approach, score)| (approach.as_str().to_string(), *score))
        .collect();

    let max_score = ranked[0].1;
    let strategy_balance = assess_balance(&scored);
    let strategy_gaps = identify_gaps(&scored, &text);
    let strategy_effectiveness = assess_effectiveness(max_score).to_string();

    StrategyProfile {
        primary_strategy,
        secondary_strategy,
        strategy_scores,
        strategy_balance,
        strategy_gaps,
        strategy_effectiveness,
    }
}

// Pure function: count keyword hits per approach over lowercased text
fn approach_scores(text: &str) -> Vec<(StrategyApproach, u32)> {
    APPROACH_KEYWORDS
        .iter()
        .map(|(approach, keywords)| {
            let score = keywords
                .iter()
                .filter(|keyword| text.contains(*keyword))
                .count() as u32;
            (*approach, score)
        })
        .collect()
}

fn assess_balance(scored: &[(StrategyApproach, u32)]) -> String {
    let total: u32 = scored.iter().map(|(_, s)| s).sum();
    if total == 0 {
        return "Undefined strategy".to_string();
    }

    let max = scored.iter().map(|(_, s)| *s).max().unwrap_or(0);
    if max as f64 / total as f64 > 0.7 {
        return "Heavily weighted toward one approach".to_string();
    }

    let mut sorted: Vec<u32> = scored.iter().map(|(_, s)| *s).collect();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    if sorted.len() > 1 && sorted[0] > 0 && sorted[1] > 0 {
        return "Balanced approach with complementary strategies".to_string();
    }

    "Moderately focused approach".to_string()
}

fn identify_gaps(scored: &[(StrategyApproach, u32)], text: &str) -> Vec<String> {
    let mut gaps = Vec::new();

    let score_of = |wanted: StrategyApproach| {
        scored
            .iter()
            .find(|(approach, _)| *approach == wanted)
            .map(|(_, s)| *s)
            .unwrap_or(0)
    };
    let max = scored.iter().map(|(_, s)| *s).max().unwrap_or(0);

    if max < 2 {
        gaps.push(
            "Strategy lacks clear definition - consider more explicit strategic planning"
                .to_string(),
        );
    }
    if score_of(StrategyApproach::Procedural) == 0 {
        gaps.push("Consider adding procedural strategy elements".to_string());
    }
    if score_of(StrategyApproach::Substantive) == 0 {
        gaps.push("Consider strengthening substantive legal arguments".to_string());
    }
    if score_of(StrategyApproach::Settlement) == 0 && !text.contains("settlement") {
        gaps.push("No settlement strategy defined - consider fallback positions".to_string());
    }
    if text.len() < 100 {
        gaps.push("Strategy description is brief - consider more detailed planning".to_string());
    }

    if gaps.is_empty() {
        gaps.push("Consider contingency planning for unexpected developments".to_string());
    }

    gaps
}

fn assess_effectiveness(max_score: u32) -> &'static str {
    match max_score {
        s if s >= 3 => "Well-defined approach with clear direction",
        s if s >= 1 => "Identifiable approach but could be more clearly articulated",
        _ => "Strategy lacks clear direction or focus",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_STRATEGY: &str = "Our strategy focuses on establishing the clear charitable \
        nature of the institution through documentary evidence and expert testimony. We will \
        emphasize consistent compliance with all statutory requirements for tax exemption. \
        We'll cite relevant precedents from the Supreme Court affirming exemptions for similar \
        educational trusts, and challenge the tax authority's interpretation on the merits.";

    #[test]
    fn test_profile_identifies_substantive_primary() {
        let profile = profile_strategy(SAMPLE_STRATEGY);
        // "statutory", "precedent", "merits" all hit the substantive table
        assert_eq!(profile.primary_strategy, "substantive");
        assert_eq!(profile.strategy_scores["substantive"], 3);
        assert_eq!(
            profile.strategy_effectiveness,
            "Well-defined approach with clear direction"
        );
    }

    #[test]
    fn test_profile_undefined_for_unmatched_text() {
        let profile = profile_strategy("We will see how it goes.");
        assert_eq!(profile.primary_strategy, "undefined");
        assert_eq!(profile.secondary_strategy, "");
        assert_eq!(profile.max_score(), 0);
        assert_eq!(profile.strategy_balance, "Undefined strategy");
        assert_eq!(
            profile.strategy_effectiveness,
            "Strategy lacks clear direction or focus"
        );
    }

    #[test]
    fn test_profile_gap_for_missing_settlement() {
        let profile = profile_strategy(SAMPLE_STRATEGY);
        assert!(profile
            .strategy_gaps
            .iter()
            .any(|g| g.contains("settlement strategy")));
    }

    #[test]
    fn test_profile_gap_for_brief_description() {
        let profile = profile_strategy("Attack the claim.");
        assert!(profile
            .strategy_gaps
            .iter()
            .any(|g| g.contains("description is brief")));
    }

    #[test]
    fn test_balance_heavy_single_approach() {
        let profile =
            profile_strategy("Aggressive challenge: attack and counter with an offensive posture.");
        assert_eq!(profile.primary_strategy, "aggressive");
        assert_eq!(profile.strategy_balance, "Heavily weighted toward one approach");
    }

    #[test]
    fn test_balance_complementary_approaches() {
        let profile = profile_strategy(
            "We argue the merits and the statutory elements, and in parallel pursue settlement \
             through mediation and negotiation toward a workable resolution and compromise.",
        );
        assert_eq!(
            profile.strategy_balance,
            "Balanced approach with complementary strategies"
        );
        assert_eq!(profile.primary_strategy, "settlement");
        assert_eq!(profile.secondary_strategy, "substantive");
    }

    #[test]
    fn test_scores_cover_all_approaches() {
        let profile = profile_strategy(SAMPLE_STRATEGY);
        for approach in StrategyApproach::ALL {
            assert!(profile.strategy_scores.contains_key(approach.as_str()));
        }
    }

    #[test]
    fn test_tie_keeps_fixed_approach_order() {
        // One keyword hit each; procedural comes first in the approach order
        let profile = profile_strategy("A motion to dismiss argued strictly on the merits.");
        assert_eq!(profile.primary_strategy, "procedural");
        assert_eq!(profile.secondary_strategy, "substantive");
    }
}
