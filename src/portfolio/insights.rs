//! Qualitative readings of an assessed portfolio: per-item improvement
//! suggestions, coverage gaps, and strengths worth leading with.

use crate::core::EvidenceItem;
use crate::portfolio::kinds::EvidenceKind;
use crate::portfolio::AssessedEvidence;
use std::collections::HashSet;

/// Item scores below this sit under the Moderate bucket floor and are
/// treated as weak spots in the portfolio.
pub const WEAK_SCORE_CEILING: f64 = 50.0;

/// Item scores at or above the Strong bucket floor count as strong items.
pub const STRONG_SCORE_FLOOR: f64 = 70.0;

/// Suggest improvements for one evidence item based on its kind, ratings,
/// and strength score.
pub fn improvement_suggestions(
    item: &EvidenceItem,
    kind: EvidenceKind,
    strength_score: f64,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if strength_score < WEAK_SCORE_CEILING {
        suggestions.push(
            "Consider if this evidence is worth presenting or needs significant strengthening"
                .to_string(),
        );
    }

    let low_reliability = item.reliability < 4.0;
    let low_relevance = item.relevance < 4.0;

    match kind {
        EvidenceKind::Documentary => {
            if low_reliability {
                suggestions.push("Verify document authenticity and chain of custody".to_string());
            }
            if low_relevance {
                suggestions.push(
                    "Clarify direct connection between this document and case issues".to_string(),
                );
            }
        }
        EvidenceKind::Testimonial => {
            if low_reliability {
                suggestions.push(
                    "Prepare witness thoroughly and anticipate credibility challenges".to_string(),
                );
            }
            if low_relevance {
                suggestions.push("Focus testimony on directly relevant facts".to_string());
            }
        }
        EvidenceKind::Physical => {
            if low_reliability {
                suggestions.push(
                    "Ensure proper authentication and chain of custody documentation".to_string(),
                );
            }
        }
        EvidenceKind::Expert => {
            if low_reliability {
                suggestions.push("Reinforce expert's qualifications and methodology".to_string());
            }
            if low_relevance {
                suggestions.push("Connect expert opinion more directly to case facts".to_string());
            }
        }
        EvidenceKind::Other => {}
    }

    if suggestions.is_empty() {
        suggestions.push(
            "Continue to integrate this evidence effectively with your overall strategy"
                .to_string(),
        );
    }

    suggestions
}

/// Identify gaps in the portfolio: missing evidence kinds, weak majorities,
/// and portfolios too thin to carry cumulative weight.
pub fn portfolio_gaps(items: &[AssessedEvidence]) -> Vec<String> {
    let mut gaps = Vec::new();

    let kinds: HashSet<EvidenceKind> = items.iter().map(|item| item.classified_kind).collect();

    if !kinds.contains(&EvidenceKind::Documentary) {
        gaps.push(
            "No documentary evidence present - consider adding documentation to strengthen case"
                .to_string(),
        );
    }
    if !kinds.contains(&EvidenceKind::Testimonial) {
        gaps.push(
            "No witness testimony included - consider adding witness statements to support facts"
                .to_string(),
        );
    }
    if !kinds.contains(&EvidenceKind::Expert) {
        gaps.push(
            "No expert evidence provided - consider if expert opinion would strengthen your position"
                .to_string(),
        );
    }

    let weak_count = items
        .iter()
        .filter(|item| item.strength_score < WEAK_SCORE_CEILING)
        .count();
    if weak_count * 2 > items.len() {
        gaps.push(
            "More than half of the evidence items score below Moderate - strengthen key elements"
                .to_string(),
        );
    }

    if gaps.is_empty() && items.len() < 3 {
        gaps.push(
            "Limited overall evidence portfolio - consider adding more supporting evidence"
                .to_string(),
        );
    }

    gaps
}

/// Identify strengths worth leading with: strong items, kind diversity, and
/// portfolio size.
pub fn portfolio_strengths(items: &[AssessedEvidence]) -> Vec<String> {
    let mut strengths = Vec::new();

    let strong_count = items
        .iter()
        .filter(|item| item.strength_score >= STRONG_SCORE_FLOOR)
        .count();
    if strong_count > 0 {
        strengths.push(format!(
            "Portfolio includes {} strong evidence items",
            strong_count
        ));
    }

    let kinds: HashSet<EvidenceKind> = items.iter().map(|item| item.classified_kind).collect();
    if kinds.len() >= 3 {
        strengths.push("Diverse evidence types provide multiple angles of support".to_string());
    }

    if items.len() >= 5 {
        strengths.push("Substantial evidence portfolio size adds cumulative weight".to_string());
    }

    if strengths.is_empty() {
        strengths
            .push("Consider building on existing evidence to create stronger portfolio".to_string());
    }

    strengths
}
