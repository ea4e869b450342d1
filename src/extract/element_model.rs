use std::collections::BTreeMap;

use serde::Serialize;

/// Coarse semantic role of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementCategory {
    Content,
    Navigation,
    Structural,
    Interactive,
    Metadata,
}

impl ElementCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementCategory::Content => "content",
            ElementCategory::Navigation => "navigation",
            ElementCategory::Structural => "structural",
            ElementCategory::Interactive => "interactive",
            ElementCategory::Metadata => "metadata",
        }
    }
}

/// One extracted tag node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementRecord {
    pub tag: String,
    pub classes: Vec<String>,
    pub id: Option<String>,
    pub text: String,
    pub attributes: BTreeMap<String, String>,

    /// `tag:sorted,classes:id` of the parent, empty at depth 0
    pub parent_signature: String,

    pub depth: usize,
    pub address: String,
    pub category: ElementCategory,
    pub child_count: usize,
}

/// Grouping key derived from an `ElementRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ElementSignature {
    pub tag: String,
    pub classes_hash: String,
    pub id_present: bool,
    pub parent_context: String,
    pub depth_range: String, // "low-high"
}

/// A group of records sharing one signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternInfo {
    pub signature: ElementSignature,
    pub elements: Vec<ElementRecord>,
    pub count: usize,
    pub confidence: f32,
}

impl PatternInfo {
    /// Exact-match group: confidence is always 1.0.
    pub fn exact(signature: ElementSignature, elements: Vec<ElementRecord>) -> Self {
        PatternInfo {
            count: elements.len(),
            signature,
            elements,
            confidence: 1.0,
        }
    }
}
