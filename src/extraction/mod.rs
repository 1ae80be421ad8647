//! Document extraction seam.
//!
//! Casemap does not parse documents. Extraction is an external collaborator
//! behind the [`DocumentExtractor`] trait: a host wires in whatever produces
//! [`ExtractedFields`] for it, and the shipped [`FixtureExtractor`] simply
//! substitutes pre-configured fields, which is all the upstream demo's
//! "document analysis" ever did.

use crate::core::EvidenceItem;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An uploaded document as the host received it.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl RawDocument {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("document {name} is empty")]
    EmptyDocument { name: String },

    #[error("extraction failed for {name}: {reason}")]
    Failed { name: String, reason: String },
}

/// Key fields pulled out of a case document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub entity_name: String,
    #[serde(default)]
    pub registration_number: String,
    #[serde(default)]
    pub registration_date: String,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub annual_income: String,
    #[serde(default)]
    pub program_expenditure: String,
    #[serde(default)]
    pub administrative_expenses: String,
    #[serde(default)]
    pub compliance_notes: Vec<String>,
    #[serde(default)]
    pub dispute_grounds: String,
}

impl ExtractedFields {
    /// Convert extracted fields into evidence items ready to append to a
    /// portfolio. Registration and financial records arrive as primary
    /// documents; compliance history is supporting material.
    pub fn to_evidence_items(&self) -> Vec<EvidenceItem> {
        let mut items = Vec::new();

        if !self.registration_number.is_empty() {
            items.push(EvidenceItem::new(
                format!("Registration certificate #{}", self.registration_number),
                "document",
                5.0,
                4.0,
            ));
        }

        if !self.program_expenditure.is_empty() {
            items.push(EvidenceItem::new(
                format!(
                    "Financial records showing {} directed to program activities",
                    self.program_expenditure
                ),
                "financial",
                5.0,
                5.0,
            ));
        }

        if !self.compliance_notes.is_empty() {
            items.push(EvidenceItem::new(
                format!("Compliance history: {}", self.compliance_notes.join("; ")),
                "document",
                4.0,
                4.0,
            ));
        }

        items
    }
}

/// External collaborator that turns a raw document into extracted fields.
pub trait DocumentExtractor {
    fn extract(&self, document: &RawDocument) -> Result<ExtractedFields, ExtractionError>;
}

/// Extractor that returns pre-configured fields for any non-empty document.
/// Stands in for a real extraction service in demos and tests.
#[derive(Debug, Clone, Default)]
pub struct FixtureExtractor {
    fields: ExtractedFields,
}

impl FixtureExtractor {
    pub fn new(fields: ExtractedFields) -> Self {
        Self { fields }
    }
}

impl DocumentExtractor for FixtureExtractor {
    fn extract(&self, document: &RawDocument) -> Result<ExtractedFields, ExtractionError> {
        if document.bytes.is_empty() {
            return Err(ExtractionError::EmptyDocument {
                name: document.name.clone(),
            });
        }
        Ok(self.fields.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_fields() -> ExtractedFields {
        ExtractedFields {
            entity_name: "Charitable Educational Trust".to_string(),
            registration_number: "TR-12345-2008".to_string(),
            registration_date: "March 15, 2008".to_string(),
            activities: vec!["Subsidized education for disadvantaged students".to_string()],
            annual_income: "Rs. 45,28,000".to_string(),
            program_expenditure: "Rs. 42,15,000 (93%)".to_string(),
            administrative_expenses: "Rs. 3,13,000 (7%)".to_string(),
            compliance_notes: vec![
                "Filed returns consistently for 15 years".to_string(),
                "Audit reports show no fund diversions".to_string(),
            ],
            dispute_grounds: "Tax authority claims change in activity proportion".to_string(),
        }
    }

    #[test]
    fn test_fixture_extractor_returns_configured_fields() {
        let extractor = FixtureExtractor::new(fixture_fields());
        let document = RawDocument::new("application.pdf", b"%PDF-1.4 ...".to_vec());
        let fields = extractor.extract(&document).unwrap();
        assert_eq!(fields.entity_name, "Charitable Educational Trust");
        assert_eq!(fields.registration_number, "TR-12345-2008");
    }

    #[test]
    fn test_fixture_extractor_rejects_empty_document() {
        let extractor = FixtureExtractor::new(fixture_fields());
        let document = RawDocument::new("empty.pdf", Vec::new());
        assert_eq!(
            extractor.extract(&document),
            Err(ExtractionError::EmptyDocument {
                name: "empty.pdf".to_string()
            })
        );
    }

    #[test]
    fn test_extracted_fields_become_evidence_items() {
        let items = fixture_fields().to_evidence_items();
        assert_eq!(items.len(), 3);
        assert!(items[0].description.contains("TR-12345-2008"));
        assert_eq!(items[0].kind, "document");
        assert!(items[1].description.contains("Rs. 42,15,000"));
        assert_eq!(items[1].kind, "financial");
        assert!(items[2].description.contains("Filed returns"));
    }

    #[test]
    fn test_sparse_fields_yield_fewer_items() {
        let fields = ExtractedFields {
            entity_name: "Some Entity".to_string(),
            ..Default::default()
        };
        assert!(fields.to_evidence_items().is_empty());
    }
}
