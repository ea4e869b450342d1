use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::{DEFAULT_MIN_THRESHOLD, EXACT_SIMILARITY};
use crate::extract::signature::SignatureConfig;

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "page-patterns",
    version,
    about = "Structural fingerprinting and repeating-pattern detection for HTML documents"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: page-patterns.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append analysis events as JSON lines to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every extracted element
    Extract {
        /// HTML file to analyze
        #[arg(long)]
        file: String,

        /// Output format: console or json
        #[arg(long)]
        format: Option<String>,

        /// Show at most this many elements
        #[arg(long)]
        limit: Option<usize>,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print document statistics
    Stats {
        /// HTML file to analyze
        #[arg(long)]
        file: String,

        /// Output format: console or json
        #[arg(long)]
        format: Option<String>,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Detect repeating structural patterns
    Patterns {
        /// HTML file to analyze
        #[arg(long)]
        file: String,

        /// Minimum group size for a pattern
        #[arg(long)]
        min_threshold: Option<usize>,

        /// Similarity threshold (only 1.0, exact matching, is implemented)
        #[arg(long)]
        similarity: Option<f64>,

        /// Ignore parent context when building signatures
        #[arg(long)]
        no_parent: bool,

        /// Center every depth window on this depth
        #[arg(long)]
        depth_override: Option<usize>,

        /// Output format: console or json
        #[arg(long)]
        format: Option<String>,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `page-patterns.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub patterns: PatternsConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternsConfig {
    #[serde(default = "default_min_threshold")]
    pub min_threshold: usize,

    #[serde(default = "default_similarity")]
    pub similarity_threshold: f64,

    #[serde(default = "default_true")]
    pub include_parent: bool,

    pub depth_override: Option<usize>,
}

impl Default for PatternsConfig {
    fn default() -> Self {
        Self {
            min_threshold: DEFAULT_MIN_THRESHOLD,
            similarity_threshold: EXACT_SIMILARITY,
            include_parent: true,
            depth_override: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_console")]
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "console".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_min_threshold() -> usize { DEFAULT_MIN_THRESHOLD }
fn default_similarity() -> f64 { EXACT_SIMILARITY }
fn default_true() -> bool { true }
fn default_console() -> String { "console".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("page-patterns.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Config Builders (merge CLI args with config file)
// ============================================================================

/// Build a SignatureConfig: `--no-parent` and `--depth-override` win over the file.
pub fn build_signature_config(
    no_parent: bool,
    depth_override: Option<usize>,
    config: &PatternsConfig,
) -> SignatureConfig {
    SignatureConfig {
        include_parent: config.include_parent && !no_parent,
        depth_override: depth_override.or(config.depth_override),
    }
}
