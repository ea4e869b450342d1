use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

/// One line of the analysis trace.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisEvent {
    pub timestamp_ms: u128,
    pub url: String,

    /// "extracted", "indexed", "patterns" or "warning"
    pub phase: String,

    pub elements: Option<usize>,
    pub signatures: Option<usize>,
    pub patterns: Option<usize>,

    pub warning: Option<String>,
}

impl AnalysisEvent {
    pub fn now(url: &str, phase: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or_default(),
            url: url.to_string(),
            phase: phase.to_string(),
            elements: None,
            signatures: None,
            patterns: None,
            warning: None,
        }
    }

    pub fn with_elements(mut self, count: usize) -> Self {
        self.elements = Some(count);
        self
    }

    pub fn with_signatures(mut self, count: usize) -> Self {
        self.signatures = Some(count);
        self
    }

    pub fn with_patterns(mut self, count: usize) -> Self {
        self.patterns = Some(count);
        self
    }

    pub fn with_warning(mut self, warning: impl ToString) -> Self {
        self.warning = Some(warning.to_string());
        self
    }
}
