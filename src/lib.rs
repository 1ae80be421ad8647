// Export modules for library usage
pub mod analysis;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod extraction;
pub mod formatting;
pub mod io;
pub mod portfolio;
pub mod prediction;
pub mod scoring;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{CaseDetails, CaseFile, ComparableCase, EvidenceItem};

pub use crate::scoring::{
    EvidenceScorer, EvidenceWeights, ItemScore, PortfolioScore, ScoreError, StrengthCategory,
};

pub use crate::portfolio::{
    assess_portfolio, insights::portfolio_gaps, insights::portfolio_strengths,
    kinds::classify_description, kinds::EvidenceKind, AssessedEvidence, EvidencePortfolio,
    PortfolioAssessment,
};

pub use crate::strategy::{profile_strategy, StrategyApproach, StrategyProfile};

pub use crate::prediction::{
    estimate_win_probability,
    outcome::{analyze_outcome, OutcomeAnalysis, OutcomeBand},
    recommendations::{recommend, Recommendation, RecommendationPriority},
    WinProbability,
};

pub use crate::extraction::{
    DocumentExtractor, ExtractedFields, ExtractionError, FixtureExtractor, RawDocument,
};

pub use crate::analysis::{predict_case, CasePrediction};

pub use crate::config::CasemapConfig;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
