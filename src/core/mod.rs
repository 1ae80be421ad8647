//! Core domain types shared across the analysis pipeline.

use serde::{Deserialize, Serialize};

/// Basic facts about the case under analysis.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseDetails {
    pub title: String,
    #[serde(rename = "type", default)]
    pub case_type: String,
    #[serde(default)]
    pub description: String,
}

/// A single piece of supporting material for a case, rated on reliability
/// (source credibility) and relevance (bearing on the dispute).
///
/// The `kind` tag is an open label supplied by the host ("document",
/// "witness", "financial", ...); the scorer never interprets it. Ratings are
/// carried exactly as the host supplied them and validated only by the
/// scorer, so a non-integral or out-of-range rating surfaces as an error
/// instead of being silently narrowed at the serde boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub description: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub reliability: f64,
    pub relevance: f64,
}

impl EvidenceItem {
    pub fn new(
        description: impl Into<String>,
        kind: impl Into<String>,
        reliability: f64,
        relevance: f64,
    ) -> Self {
        Self {
            description: description.into(),
            kind: kind.into(),
            reliability,
            relevance,
        }
    }
}

/// A previously decided case supplied by the caller for comparison.
///
/// Casemap performs no similarity search; comparable cases arrive already
/// selected, and only their outcome text participates in the win-probability
/// base rate. Everything else is echoed through to the report.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComparableCase {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facts: Option<String>,
    pub outcome: String,
    #[serde(default)]
    pub evidence_strength: String,
    #[serde(default)]
    pub strategy_used: String,
    #[serde(default)]
    pub key_factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

/// The JSON input document read by the CLI: one case, its evidence, the
/// strategy narrative, and any comparable cases the host assembled.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CaseFile {
    pub case: CaseDetails,
    #[serde(default)]
    pub evidence: Vec<EvidenceItem>,
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub comparable_cases: Vec<ComparableCase>,
}
