//! Evidence portfolio: the ordered, append-only collection of evidence for a
//! case, and the assessment that scores it item by item.
//!
//! Derived scores are never cached on the portfolio; every assessment
//! recomputes from the current items, so there is no staleness to manage.

pub mod insights;
pub mod kinds;

use crate::core::EvidenceItem;
use crate::scoring::{EvidenceScorer, ScoreError, StrengthCategory};
use im::Vector;
use kinds::{classify_description, EvidenceKind};
use serde::{Deserialize, Serialize};

/// Ordered collection of evidence items. Items are appended by the hosting
/// application and never removed or mutated in place; insertion order is
/// preserved for display but has no effect on scoring.
#[derive(Debug, Clone, Default)]
pub struct EvidencePortfolio {
    items: Vector<EvidenceItem>,
}

impl EvidencePortfolio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = EvidenceItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn push(&mut self, item: EvidenceItem) {
        self.items.push_back(item);
    }

    pub fn items(&self) -> impl Iterator<Item = &EvidenceItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// One evidence item with its derived score, category, and suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessedEvidence {
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip)]
    pub classified_kind: EvidenceKind,
    pub strength_score: f64,
    pub category: StrengthCategory,
    pub improvement_suggestions: Vec<String>,
}

/// Full portfolio assessment: every item scored, the aggregate score and
/// category, and the qualitative gap/strength readings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioAssessment {
    pub evidence_items: Vector<AssessedEvidence>,
    pub overall_score: f64,
    pub overall_category: StrengthCategory,
    pub portfolio_gaps: Vector<String>,
    pub portfolio_strengths: Vector<String>,
}

/// Resolve the kind used for insight analysis. The supplied tag wins when it
/// classifies; otherwise the description decides.
fn resolve_kind(item: &EvidenceItem) -> EvidenceKind {
    let from_tag = classify_description(&item.kind);
    if from_tag != EvidenceKind::Other {
        from_tag
    } else {
        classify_description(&item.description)
    }
}

/// Assess a whole portfolio: score each item, aggregate, and derive gaps and
/// strengths. Pure apart from the error path; fails on the first invalid
/// rating or on an empty portfolio.
pub fn assess_portfolio(
    scorer: &EvidenceScorer,
    portfolio: &EvidencePortfolio,
) -> Result<PortfolioAssessment, ScoreError> {
    let overall = scorer.score_portfolio(portfolio.items())?;

    let mut assessed: Vec<AssessedEvidence> = Vec::with_capacity(portfolio.len());
    for item in portfolio.items() {
        let score = scorer.score_item(item.reliability, item.relevance)?;
        let classified_kind = resolve_kind(item);
        let kind = if item.kind.is_empty() {
            classified_kind.as_str().to_string()
        } else {
            item.kind.clone()
        };
        let improvement_suggestions =
            insights::improvement_suggestions(item, classified_kind, score.strength_score);

        assessed.push(AssessedEvidence {
            description: item.description.clone(),
            kind,
            classified_kind,
            strength_score: score.strength_score,
            category: score.category,
            improvement_suggestions,
        });
    }

    let portfolio_gaps = insights::portfolio_gaps(&assessed);
    let portfolio_strengths = insights::portfolio_strengths(&assessed);

    log::debug!(
        "assessed {} evidence items: overall {:.1} ({})",
        assessed.len(),
        overall.overall_score,
        overall.overall_category
    );

    Ok(PortfolioAssessment {
        evidence_items: assessed.into_iter().collect(),
        overall_score: overall.overall_score,
        overall_category: overall.overall_category,
        portfolio_gaps: portfolio_gaps.into_iter().collect(),
        portfolio_strengths: portfolio_strengths.into_iter().collect(),
    })
}

impl PortfolioAssessment {
    /// Number of items at or above the Strong bucket floor.
    pub fn strong_item_count(&self) -> usize {
        self.evidence_items
            .iter()
            .filter(|item| item.strength_score >= insights::STRONG_SCORE_FLOOR)
            .count()
    }

    /// Number of items below the Moderate bucket floor.
    pub fn weak_item_count(&self) -> usize {
        self.evidence_items
            .iter()
            .filter(|item| item.strength_score < insights::WEAK_SCORE_CEILING)
            .count()
    }
}
