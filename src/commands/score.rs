use crate::config::CasemapConfig;
use crate::scoring::EvidenceScorer;
use anyhow::Result;
use std::path::PathBuf;

/// Score one evidence item from the command line and print the result.
pub fn score_item(reliability: f64, relevance: f64, config: Option<PathBuf>) -> Result<()> {
    let config = CasemapConfig::load(config.as_deref())?;
    let scorer = EvidenceScorer::new(config.scoring);

    let score = scorer.score_item(reliability, relevance)?;
    println!("{:.1} ({})", score.strength_score, score.category);

    Ok(())
}
