//! Report writers: terminal, JSON, and markdown renderings of a case
//! prediction.

use crate::analysis::CasePrediction;
use crate::formatting::FormattingConfig;
use crate::prediction::outcome::OutcomeBand;
use crate::prediction::recommendations::RecommendationPriority;
use crate::scoring::StrengthCategory;
use clap::ValueEnum;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl OutputFormat {
    /// Parse a configured format name; used for the config-file default.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "json" => Some(Self::Json),
            "markdown" => Some(Self::Markdown),
            "terminal" => Some(Self::Terminal),
            _ => None,
        }
    }
}

pub trait OutputWriter {
    fn write_prediction(&mut self, prediction: &CasePrediction) -> anyhow::Result<()>;
}

/// Build a writer for the requested format over any byte sink.
pub fn create_writer(
    format: OutputFormat,
    writer: Box<dyn Write>,
    formatting: FormattingConfig,
) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, formatting)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_prediction(&mut self, prediction: &CasePrediction) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(prediction)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, prediction: &CasePrediction) -> anyhow::Result<()> {
        writeln!(self.writer, "# Case Prediction Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            prediction.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_probability(&mut self, prediction: &CasePrediction) -> anyhow::Result<()> {
        let win = &prediction.win_probability;
        writeln!(self.writer, "## Win Probability")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Component | Value |")?;
        writeln!(self.writer, "|-----------|-------|")?;
        writeln!(self.writer, "| Win probability | {:.0}% |", win.win_probability)?;
        writeln!(
            self.writer,
            "| Base case probability | {:.0}% |",
            win.base_case_probability
        )?;
        writeln!(
            self.writer,
            "| Evidence contribution | {:+.1} |",
            win.evidence_contribution
        )?;
        writeln!(
            self.writer,
            "| Strategy contribution | {:+.1} |",
            win.strategy_contribution
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_outcome(&mut self, prediction: &CasePrediction) -> anyhow::Result<()> {
        let outcome = &prediction.outcome_analysis;
        writeln!(self.writer, "## Outcome Analysis")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}** - {}",
            outcome.outcome_category, outcome.outcome_description
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### Key Positive Factors")?;
        for factor in &outcome.key_positive_factors {
            writeln!(self.writer, "- {}", factor)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "### Key Negative Factors")?;
        for factor in &outcome.key_negative_factors {
            writeln!(self.writer, "- {}", factor)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "### Judicial Considerations")?;
        for consideration in &outcome.judicial_considerations {
            writeln!(self.writer, "- {}", consideration)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_evidence(&mut self, prediction: &CasePrediction) -> anyhow::Result<()> {
        let evidence = &prediction.evidence_analysis;
        writeln!(self.writer, "## Evidence Analysis")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Overall: **{:.1}%** ({})",
            evidence.overall_score, evidence.overall_category
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Evidence | Type | Score | Category |")?;
        writeln!(self.writer, "|----------|------|-------|----------|")?;
        for item in &evidence.evidence_items {
            writeln!(
                self.writer,
                "| {} | {} | {:.1}% | {} |",
                item.description, item.kind, item.strength_score, item.category
            )?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "### Portfolio Gaps")?;
        for gap in &evidence.portfolio_gaps {
            writeln!(self.writer, "- {}", gap)?;
        }
        writeln!(self.writer)?;

        writeln!(self.writer, "### Portfolio Strengths")?;
        for strength in &evidence.portfolio_strengths {
            writeln!(self.writer, "- {}", strength)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_strategy(&mut self, prediction: &CasePrediction) -> anyhow::Result<()> {
        let strategy = &prediction.strategy_analysis;
        writeln!(self.writer, "## Strategy Analysis")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "- Primary approach: {}", strategy.primary_strategy)?;
        if !strategy.secondary_strategy.is_empty() {
            writeln!(
                self.writer,
                "- Secondary approach: {}",
                strategy.secondary_strategy
            )?;
        }
        writeln!(self.writer, "- Balance: {}", strategy.strategy_balance)?;
        writeln!(
            self.writer,
            "- Effectiveness: {}",
            strategy.strategy_effectiveness
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "### Strategy Gaps")?;
        for gap in &strategy.strategy_gaps {
            writeln!(self.writer, "- {}", gap)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_similar_cases(&mut self, prediction: &CasePrediction) -> anyhow::Result<()> {
        if prediction.similar_cases.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "## Similar Cases")?;
        writeln!(self.writer)?;
        for case in &prediction.similar_cases {
            match case.similarity {
                Some(similarity) => writeln!(
                    self.writer,
                    "- **{}** ({:.0}% similar): {}",
                    case.title,
                    similarity * 100.0,
                    case.outcome
                )?,
                None => writeln!(self.writer, "- **{}**: {}", case.title, case.outcome)?,
            }
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, prediction: &CasePrediction) -> anyhow::Result<()> {
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Priority | Category | Recommendation |")?;
        writeln!(self.writer, "|----------|----------|----------------|")?;
        for rec in &prediction.recommendations {
            writeln!(
                self.writer,
                "| {} | {} | {} |",
                rec.priority, rec.category, rec.recommendation
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_prediction(&mut self, prediction: &CasePrediction) -> anyhow::Result<()> {
        self.write_header(prediction)?;
        self.write_probability(prediction)?;
        self.write_outcome(prediction)?;
        self.write_evidence(prediction)?;
        self.write_strategy(prediction)?;
        self.write_similar_cases(prediction)?;
        self.write_recommendations(prediction)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    formatting: FormattingConfig,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, formatting: FormattingConfig) -> Self {
        Self { writer, formatting }
    }
}

// Rendering helpers take the formatting config by value so they can run
// while the writer itself is mutably borrowed.

fn heading(formatting: FormattingConfig, emoji: &str, text: &str) -> String {
    let text = if formatting.color.should_use_color() {
        text.bold().to_string()
    } else {
        text.to_string()
    };
    if formatting.emoji.should_use_emoji() {
        format!("{} {}", emoji, text)
    } else {
        text
    }
}

fn category_cell(formatting: FormattingConfig, category: StrengthCategory) -> Cell {
    let cell = Cell::new(category.label());
    if !formatting.color.should_use_color() {
        return cell;
    }
    cell.fg(match category {
        StrengthCategory::VeryStrong => Color::Green,
        StrengthCategory::Strong => Color::Blue,
        StrengthCategory::Moderate => Color::Yellow,
        StrengthCategory::Weak => Color::DarkYellow,
        StrengthCategory::VeryWeak => Color::Red,
    })
}

fn probability_display(formatting: FormattingConfig, probability: f64) -> String {
    let text = format!("{:.0}%", probability);
    if !formatting.color.should_use_color() {
        return text;
    }
    match OutcomeBand::from_probability(probability) {
        OutcomeBand::HighlyFavorable => text.as_str().green().bold(),
        OutcomeBand::ModeratelyFavorable => text.as_str().cyan().bold(),
        OutcomeBand::Balanced => text.as_str().yellow().bold(),
        OutcomeBand::Challenging => text.as_str().yellow(),
        OutcomeBand::HighlyChallenging => text.as_str().red().bold(),
    }
    .to_string()
}

fn priority_display(formatting: FormattingConfig, priority: RecommendationPriority) -> String {
    let text = priority.label();
    if !formatting.color.should_use_color() {
        return text.to_string();
    }
    match priority {
        RecommendationPriority::Critical => text.red().bold(),
        RecommendationPriority::High => text.yellow(),
        RecommendationPriority::Moderate => text.cyan(),
        RecommendationPriority::Enhancement => text.green(),
    }
    .to_string()
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_prediction(&mut self, prediction: &CasePrediction) -> anyhow::Result<()> {
        let win = &prediction.win_probability;
        let outcome = &prediction.outcome_analysis;
        let evidence = &prediction.evidence_analysis;
        let strategy = &prediction.strategy_analysis;
        let formatting = self.formatting;

        writeln!(
            self.writer,
            "{}",
            heading(formatting, "\u{2696}\u{fe0f}", "Legal Case Outcome Prediction")
        )?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "{}",
            heading(formatting, "\u{1f4ca}", "Win Probability")
        )?;
        writeln!(
            self.writer,
            "  {} ({})",
            probability_display(formatting, win.win_probability),
            outcome.outcome_category
        )?;
        writeln!(
            self.writer,
            "  base {:.0}%, evidence {:+.1}, strategy {:+.1}",
            win.base_case_probability, win.evidence_contribution, win.strategy_contribution
        )?;
        writeln!(self.writer, "  {}", outcome.outcome_description)?;
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "{}",
            heading(formatting, "\u{1f4c1}", "Evidence Analysis")
        )?;
        let mut table = new_table();
        table.set_header(vec!["Evidence", "Type", "Score", "Category"]);
        for item in &evidence.evidence_items {
            table.add_row(vec![
                Cell::new(&item.description),
                Cell::new(&item.kind),
                Cell::new(format!("{:.1}%", item.strength_score)),
                category_cell(formatting, item.category),
            ]);
        }
        writeln!(self.writer, "{}", table)?;
        writeln!(
            self.writer,
            "  Overall: {:.1}% ({})",
            evidence.overall_score, evidence.overall_category
        )?;
        writeln!(self.writer)?;

        writeln!(self.writer, "  Gaps:")?;
        for gap in &evidence.portfolio_gaps {
            writeln!(self.writer, "   - {}", gap)?;
        }
        writeln!(self.writer, "  Strengths:")?;
        for strength in &evidence.portfolio_strengths {
            writeln!(self.writer, "   - {}", strength)?;
        }
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "{}",
            heading(formatting, "\u{1f4dd}", "Strategy Analysis")
        )?;
        writeln!(
            self.writer,
            "  Primary: {}  Secondary: {}",
            strategy.primary_strategy,
            if strategy.secondary_strategy.is_empty() {
                "-"
            } else {
                &strategy.secondary_strategy
            }
        )?;
        writeln!(self.writer, "  {}", strategy.strategy_balance)?;
        writeln!(self.writer, "  {}", strategy.strategy_effectiveness)?;
        for gap in &strategy.strategy_gaps {
            writeln!(self.writer, "   - {}", gap)?;
        }
        writeln!(self.writer)?;

        writeln!(
            self.writer,
            "{}",
            heading(formatting, "\u{2696}\u{fe0f}", "Outcome Factors")
        )?;
        for factor in &outcome.key_positive_factors {
            writeln!(self.writer, "  + {}", factor)?;
        }
        for factor in &outcome.key_negative_factors {
            writeln!(self.writer, "  - {}", factor)?;
        }
        writeln!(self.writer)?;

        if !prediction.similar_cases.is_empty() {
            writeln!(
                self.writer,
                "{}",
                heading(formatting, "\u{1f4da}", "Similar Cases")
            )?;
            for case in &prediction.similar_cases {
                match case.similarity {
                    Some(similarity) => writeln!(
                        self.writer,
                        "  {} ({:.0}% similar): {}",
                        case.title,
                        similarity * 100.0,
                        case.outcome
                    )?,
                    None => writeln!(self.writer, "  {}: {}", case.title, case.outcome)?,
                }
            }
            writeln!(self.writer)?;
        }

        writeln!(
            self.writer,
            "{}",
            heading(formatting, "\u{1f4a1}", "Recommendations")
        )?;
        let mut table = new_table();
        table.set_header(vec!["Priority", "Category", "Recommendation"]);
        for rec in &prediction.recommendations {
            table.add_row(vec![
                Cell::new(priority_display(formatting, rec.priority)),
                Cell::new(&rec.category),
                Cell::new(&rec.recommendation),
            ]);
        }
        writeln!(self.writer, "{}", table)?;

        Ok(())
    }
}
