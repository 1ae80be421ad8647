use crate::analysis;
use crate::config::CasemapConfig;
use crate::core::CaseFile;
use crate::formatting::FormattingConfig;
use crate::io;
use crate::io::output::{create_writer, OutputFormat};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Options for the analyze command, carried over from the CLI.
pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

pub fn analyze_case(options: AnalyzeConfig) -> Result<()> {
    let config = CasemapConfig::load(options.config.as_deref())?;

    let format = options
        .format
        .or_else(|| OutputFormat::parse(&config.output.default_format))
        .unwrap_or(OutputFormat::Terminal);

    let raw = io::read_file(&options.path)
        .with_context(|| format!("failed to read case file {}", options.path.display()))?;
    let case_file: CaseFile = serde_json::from_str(&raw)
        .with_context(|| format!("invalid case file {}", options.path.display()))?;

    let prediction = analysis::predict_case(&case_file, &config)
        .with_context(|| format!("analysis failed for case '{}'", case_file.case.title))?;

    // File destinations always get plain text; escape codes belong on a tty
    let formatting = if options.plain || options.output.is_some() {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };

    let destination: Box<dyn Write> = match &options.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create output file {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    let mut writer = create_writer(format, destination, formatting);
    writer.write_prediction(&prediction)?;

    if let Some(path) = &options.output {
        log::info!("report written to {}", path.display());
    }

    Ok(())
}
