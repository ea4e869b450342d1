use serde::Serialize;

use crate::analysis::analyzer::DocumentAnalyzer;
use crate::analysis::response::ResponseMetadata;
use crate::dom::html_source::parse_document;
use crate::error::AnalyzerError;
use crate::extract::signature::SignatureConfig;
use crate::report::console::{format_elements_report, format_patterns_report, format_stats_report};
use crate::trace::logger::TraceLogger;

/// Report rendering selected by `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

impl OutputFormat {
    pub fn parse(name: &str) -> Result<Self, AnalyzerError> {
        match name {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            other => Err(AnalyzerError::InvalidArgument(format!(
                "unknown format '{}' (expected console or json)",
                other
            ))),
        }
    }
}

// ============================================================================
// Input loading
// ============================================================================

/// Read an HTML file and wrap it in an analyzer.
pub fn load_analyzer(path: &str, trace: Option<&str>) -> Result<DocumentAnalyzer, AnalyzerError> {
    let markup = std::fs::read_to_string(path).map_err(|source| AnalyzerError::ReadInput {
        path: path.to_string(),
        source,
    })?;

    let response = ResponseMetadata::local_file(path, markup.len());
    let url = response.final_url.clone();
    let tracer = match trace {
        Some(trace_path) => TraceLogger::new(trace_path),
        None => TraceLogger::disabled(),
    };

    Ok(DocumentAnalyzer::new(&url, parse_document(&markup), response).with_tracer(tracer))
}

// ============================================================================
// extract subcommand
// ============================================================================

pub fn cmd_extract(
    analyzer: &mut DocumentAnalyzer,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<String, AnalyzerError> {
    let records = analyzer.extract_all();

    match format {
        OutputFormat::Console => Ok(format_elements_report(records, limit)),
        OutputFormat::Json => {
            let shown = &records[..limit.unwrap_or(records.len()).min(records.len())];
            to_json(shown, "elements")
        }
    }
}

// ============================================================================
// stats subcommand
// ============================================================================

pub fn cmd_stats(
    analyzer: &mut DocumentAnalyzer,
    format: OutputFormat,
) -> Result<String, AnalyzerError> {
    let stats = analyzer.stats();

    match format {
        OutputFormat::Console => Ok(format_stats_report(&stats)),
        OutputFormat::Json => to_json(&stats, "stats"),
    }
}

// ============================================================================
// patterns subcommand
// ============================================================================

pub fn cmd_patterns(
    analyzer: &mut DocumentAnalyzer,
    min_threshold: usize,
    similarity: f64,
    signature_config: SignatureConfig,
    format: OutputFormat,
) -> Result<String, AnalyzerError> {
    let patterns = analyzer.detect_patterns(min_threshold, similarity, Some(signature_config));

    match format {
        OutputFormat::Console => Ok(format_patterns_report(&patterns)),
        OutputFormat::Json => to_json(&patterns, "patterns"),
    }
}

// ============================================================================
// Output
// ============================================================================

/// Print to stdout, or write to `output` when given.
pub fn emit(content: &str, output: Option<&str>) -> Result<(), AnalyzerError> {
    match output {
        Some(path) => std::fs::write(path, content).map_err(|source| AnalyzerError::WriteOutput {
            path: path.to_string(),
            source,
        }),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T, context: &str) -> Result<String, AnalyzerError> {
    serde_json::to_string_pretty(value).map_err(|source| AnalyzerError::JsonSerialize {
        context: context.to_string(),
        source,
    })
}
