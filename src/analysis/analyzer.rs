use std::collections::HashMap;
use std::fmt;

use tracing::{debug, warn};

use crate::analysis::index::SignatureIndex;
use crate::analysis::response::ResponseMetadata;
use crate::analysis::stats::{DocumentStats, compute_stats};
use crate::dom::dom_model::DomTree;
use crate::extract::element_model::{ElementRecord, ElementSignature, PatternInfo};
use crate::extract::extractor::extract;
use crate::extract::signature::{SignatureConfig, generate_signature};
use crate::trace::logger::TraceLogger;
use crate::trace::trace::AnalysisEvent;

pub const DEFAULT_MIN_THRESHOLD: usize = 2;
pub const EXACT_SIMILARITY: f64 = 1.0;

/// Cache state of a `DocumentAnalyzer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Unanalyzed,
    Extracted,
    Indexed,
}

/// Non-fatal conditions raised during analysis.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisWarning {
    /// A similarity threshold below 1.0 was requested; exact matching was used.
    FuzzyMatchingUnsupported { requested: f64 },
}

impl fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisWarning::FuzzyMatchingUnsupported { requested } => write!(
                f,
                "similarity threshold {} not supported, falling back to exact matching",
                requested
            ),
        }
    }
}

/// Owns one parsed document and the caches derived from it.
///
/// Extraction runs once; the signature index is built on first use and
/// rebuilt only when a different `SignatureConfig` is requested or the index
/// is invalidated.
pub struct DocumentAnalyzer {
    url: String,
    tree: DomTree,
    response: ResponseMetadata,

    elements: Option<Vec<ElementRecord>>,
    index: Option<SignatureIndex>,

    warnings: Vec<AnalysisWarning>,
    tracer: TraceLogger,
}

impl DocumentAnalyzer {
    pub fn new(url: &str, tree: DomTree, response: ResponseMetadata) -> Self {
        DocumentAnalyzer {
            url: url.to_string(),
            tree,
            response,
            elements: None,
            index: None,
            warnings: vec![],
            tracer: TraceLogger::disabled(),
        }
    }

    pub fn with_tracer(mut self, tracer: TraceLogger) -> Self {
        self.tracer = tracer;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn response(&self) -> &ResponseMetadata {
        &self.response
    }

    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    pub fn warnings(&self) -> &[AnalysisWarning] {
        &self.warnings
    }

    pub fn phase(&self) -> AnalysisPhase {
        match (&self.elements, &self.index) {
            (None, _) => AnalysisPhase::Unanalyzed,
            (Some(_), None) => AnalysisPhase::Extracted,
            (Some(_), Some(_)) => AnalysisPhase::Indexed,
        }
    }

    /// Extract every element once; later calls return the cached list.
    pub fn extract_all(&mut self) -> &[ElementRecord] {
        if self.elements.is_none() {
            let records = extract(&self.tree);
            debug!(url = %self.url, elements = records.len(), "extracted elements");
            self.tracer
                .log(&AnalysisEvent::now(&self.url, "extracted").with_elements(records.len()));
            self.elements = Some(records);
        }

        self.elements.as_deref().unwrap_or_default()
    }

    pub fn stats(&mut self) -> DocumentStats {
        compute_stats(self.extract_all())
    }

    pub fn generate_signature(
        &self,
        record: &ElementRecord,
        config: &SignatureConfig,
    ) -> ElementSignature {
        generate_signature(record, config)
    }

    /// Configuration of the cached signature index, if one is built.
    pub fn index_config(&self) -> Option<&SignatureConfig> {
        self.index.as_ref().map(SignatureIndex::config)
    }

    /// Drop the signature index so the next lookup rebuilds it.
    pub fn invalidate_index(&mut self) {
        self.index = None;
    }

    /// Group elements by signature and keep groups of at least `min_threshold`.
    ///
    /// `similarity_threshold` below 1.0 is accepted but only exact matching
    /// exists; a warning is recorded and exact groups are returned.
    pub fn detect_patterns(
        &mut self,
        min_threshold: usize,
        similarity_threshold: f64,
        signature_config: Option<SignatureConfig>,
    ) -> Vec<PatternInfo> {
        if similarity_threshold.is_nan() || similarity_threshold < EXACT_SIMILARITY {
            self.warn(AnalysisWarning::FuzzyMatchingUnsupported {
                requested: similarity_threshold,
            });
        }

        self.ensure_index(signature_config.unwrap_or_default());

        let (Some(records), Some(index)) = (&self.elements, &self.index) else {
            return vec![];
        };

        let patterns: Vec<PatternInfo> = index
            .groups(min_threshold)
            .map(|(signature, positions)| {
                PatternInfo::exact(
                    signature.clone(),
                    positions.iter().map(|&p| records[p].clone()).collect(),
                )
            })
            .collect();

        debug!(url = %self.url, patterns = patterns.len(), min_threshold, "detected patterns");
        self.tracer
            .log(&AnalysisEvent::now(&self.url, "patterns").with_patterns(patterns.len()));

        patterns
    }

    /// Signature to records mapping for groups of at least `min_threshold`,
    /// using the default signature configuration.
    pub fn find_patterns(
        &mut self,
        min_threshold: usize,
    ) -> HashMap<ElementSignature, Vec<ElementRecord>> {
        self.detect_patterns(min_threshold, EXACT_SIMILARITY, None)
            .into_iter()
            .map(|p| (p.signature, p.elements))
            .collect()
    }

    /// Every record whose signature equals `signature`, in document order.
    ///
    /// Uses the cached index whatever configuration built it; builds one with
    /// the default configuration when none exists.
    pub fn lookup(&mut self, signature: &ElementSignature) -> Vec<ElementRecord> {
        if self.index.is_none() {
            self.ensure_index(SignatureConfig::default());
        }

        let (Some(records), Some(index)) = (&self.elements, &self.index) else {
            return vec![];
        };

        index
            .positions(signature)
            .iter()
            .map(|&p| records[p].clone())
            .collect()
    }

    fn ensure_index(&mut self, config: SignatureConfig) {
        if self.index.as_ref().is_some_and(|i| *i.config() == config) {
            return;
        }

        let index = SignatureIndex::build(self.extract_all(), config);
        debug!(url = %self.url, signatures = index.signature_count(), ?config, "built signature index");
        self.tracer.log(
            &AnalysisEvent::now(&self.url, "indexed").with_signatures(index.signature_count()),
        );
        self.index = Some(index);
    }

    fn warn(&mut self, warning: AnalysisWarning) {
        warn!(url = %self.url, "{}", warning);
        self.tracer
            .log(&AnalysisEvent::now(&self.url, "warning").with_warning(&warning));
        self.warnings.push(warning);
    }
}
