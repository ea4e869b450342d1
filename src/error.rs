use std::fmt;

/// Errors at the edges of the analyzer: reading input and emitting output.
/// Analysis itself never fails.
#[derive(Debug)]
pub enum AnalyzerError {
    /// Input file could not be read
    ReadInput { path: String, source: std::io::Error },

    /// Report could not be written
    WriteOutput { path: String, source: std::io::Error },

    /// JSON serialization of a report failed
    JsonSerialize { context: String, source: serde_json::Error },

    /// Argument combination or value rejected before analysis started
    InvalidArgument(String),
}

impl fmt::Display for AnalyzerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzerError::ReadInput { path, source } => {
                write!(f, "Failed to read {}: {}", path, source)
            }
            AnalyzerError::WriteOutput { path, source } => {
                write!(f, "Failed to write {}: {}", path, source)
            }
            AnalyzerError::JsonSerialize { context, source } => {
                write!(f, "JSON serialize error ({}): {}", context, source)
            }
            AnalyzerError::InvalidArgument(msg) => {
                write!(f, "Invalid argument: {}", msg)
            }
        }
    }
}

impl std::error::Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalyzerError::ReadInput { source, .. } => Some(source),
            AnalyzerError::WriteOutput { source, .. } => Some(source),
            AnalyzerError::JsonSerialize { source, .. } => Some(source),
            AnalyzerError::InvalidArgument(_) => None,
        }
    }
}
