//! Keyword classification of evidence descriptions.
//!
//! Hosts usually tag evidence themselves; the classifier fills in a kind for
//! untagged items and feeds the gap analysis. The stored tag on an item stays
//! an open label either way.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceKind {
    Documentary,
    Testimonial,
    Physical,
    Expert,
    #[default]
    Other,
}

impl EvidenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Documentary => "documentary",
            Self::Testimonial => "testimonial",
            Self::Physical => "physical",
            Self::Expert => "expert",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for EvidenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Checked in order; the first kind with a keyword hit wins, so "expert report"
// classifies as documentary just like a report without an author would.
static KIND_KEYWORDS: Lazy<Vec<(EvidenceKind, Vec<&'static str>)>> = Lazy::new(|| {
    vec![
        (
            EvidenceKind::Documentary,
            vec![
                "contract",
                "agreement",
                "document",
                "letter",
                "email",
                "record",
                "report",
                "file",
            ],
        ),
        (
            EvidenceKind::Testimonial,
            vec!["witness", "testimony", "statement", "deposition", "interview"],
        ),
        (
            EvidenceKind::Physical,
            vec!["physical", "exhibit", "photograph", "video", "recording", "object"],
        ),
        (
            EvidenceKind::Expert,
            vec!["expert", "opinion", "analysis", "evaluation"],
        ),
    ]
});

/// Classify a free-text evidence description into a kind.
pub fn classify_description(description: &str) -> EvidenceKind {
    let description = description.to_lowercase();

    for (kind, keywords) in KIND_KEYWORDS.iter() {
        if keywords.iter().any(|keyword| description.contains(keyword)) {
            return *kind;
        }
    }

    EvidenceKind::Other
}
