//! Case analysis orchestration: runs the full pipeline over a case file and
//! assembles the prediction report.

use crate::config::CasemapConfig;
use crate::core::{CaseFile, ComparableCase};
use crate::portfolio::{assess_portfolio, EvidencePortfolio, PortfolioAssessment};
use crate::prediction::outcome::{analyze_outcome, OutcomeAnalysis};
use crate::prediction::recommendations::{recommend, Recommendation};
use crate::prediction::{estimate_win_probability, WinProbability};
use crate::scoring::{EvidenceScorer, ScoreError};
use crate::strategy::{profile_strategy, StrategyProfile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete prediction report for one case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CasePrediction {
    pub win_probability: WinProbability,
    pub outcome_analysis: OutcomeAnalysis,
    pub evidence_analysis: PortfolioAssessment,
    pub strategy_analysis: StrategyProfile,
    pub similar_cases: Vec<ComparableCase>,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: DateTime<Utc>,
}

/// Run the full analysis pipeline over a case file.
///
/// Pure apart from the report timestamp: scoring, strategy profiling,
/// prediction, and recommendation generation all derive deterministically
/// from the case file and configuration.
pub fn predict_case(
    case_file: &CaseFile,
    config: &CasemapConfig,
) -> Result<CasePrediction, ScoreError> {
    let scorer = EvidenceScorer::new(config.scoring);
    let portfolio = EvidencePortfolio::from_items(case_file.evidence.iter().cloned());

    log::info!(
        "analyzing case '{}' with {} evidence items",
        case_file.case.title,
        portfolio.len()
    );

    let evidence_analysis = assess_portfolio(&scorer, &portfolio)?;
    let strategy_analysis = profile_strategy(&case_file.strategy);
    let win_probability = estimate_win_probability(
        &case_file.comparable_cases,
        &evidence_analysis,
        &strategy_analysis,
    );
    let outcome_analysis = analyze_outcome(
        &win_probability,
        &case_file.comparable_cases,
        &evidence_analysis,
        &strategy_analysis,
    );
    let recommendations = recommend(
        &win_probability,
        &case_file.comparable_cases,
        &evidence_analysis,
        &strategy_analysis,
        case_file.evidence.len(),
    );

    Ok(CasePrediction {
        win_probability,
        outcome_analysis,
        evidence_analysis,
        strategy_analysis,
        similar_cases: case_file.comparable_cases.clone(),
        recommendations,
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CaseDetails, EvidenceItem};

    fn sample_case() -> CaseFile {
        CaseFile {
            case: CaseDetails {
                title: "Property Tax Exemption Dispute".to_string(),
                case_type: "Tax".to_string(),
                description: "Challenge to denial of a charitable exemption".to_string(),
            },
            evidence: vec![
                EvidenceItem::new("Trust registration documents", "document", 5.0, 5.0),
                EvidenceItem::new("Witness statements from families", "witness", 4.0, 4.0),
                EvidenceItem::new("Expert testimony on exemption criteria", "expert", 4.0, 5.0),
            ],
            strategy: "We argue the merits under the statutory elements and cite controlling \
                       precedent from similar educational trusts."
                .to_string(),
            comparable_cases: vec![ComparableCase {
                title: "Adarsh Educational Society".to_string(),
                facts: None,
                outcome: "Win on constitutional grounds".to_string(),
                evidence_strength: "Strong documentary evidence".to_string(),
                strategy_used: "Equal protection arguments".to_string(),
                key_factors: vec!["Consistent prior exemptions".to_string()],
                similarity: Some(0.92),
            }],
        }
    }

    #[test]
    fn test_predict_case_assembles_all_sections() {
        let prediction = predict_case(&sample_case(), &CasemapConfig::default()).unwrap();

        assert_eq!(prediction.evidence_analysis.evidence_items.len(), 3);
        assert_eq!(prediction.evidence_analysis.overall_score, 87.5);
        assert_eq!(prediction.strategy_analysis.primary_strategy, "substantive");
        assert_eq!(prediction.similar_cases.len(), 1);
        assert!(!prediction.recommendations.is_empty());
        // base 100 (1/1 favorable) + evidence 15 + strategy 12, clamped
        assert_eq!(prediction.win_probability.win_probability, 100.0);
        assert_eq!(prediction.outcome_analysis.outcome_category, "Highly Favorable");
    }

    #[test]
    fn test_predict_case_empty_evidence_errors() {
        let mut case = sample_case();
        case.evidence.clear();
        let result = predict_case(&case, &CasemapConfig::default());
        assert_eq!(result.unwrap_err(), ScoreError::EmptyPortfolio);
    }

    #[test]
    fn test_predict_case_invalid_rating_errors() {
        let mut case = sample_case();
        case.evidence[0].reliability = 3.5;
        let result = predict_case(&case, &CasemapConfig::default());
        assert_eq!(
            result.unwrap_err(),
            ScoreError::InvalidRating { value: 3.5 }
        );
    }

    #[test]
    fn test_prediction_serializes_with_original_field_names() {
        let prediction = predict_case(&sample_case(), &CasemapConfig::default()).unwrap();
        let json = serde_json::to_value(&prediction).unwrap();

        assert!(json.get("win_probability").is_some());
        assert!(json.get("outcome_analysis").is_some());
        let evidence = json.get("evidence_analysis").unwrap();
        assert!(evidence.get("overall_score").is_some());
        assert!(evidence.get("portfolio_gaps").is_some());
        let first_item = &evidence.get("evidence_items").unwrap()[0];
        assert_eq!(first_item.get("type").unwrap(), "document");
        assert_eq!(first_item.get("category").unwrap(), "Very Strong");
    }
}
