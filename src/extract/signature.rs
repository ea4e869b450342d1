use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};

use crate::extract::element_model::{ElementRecord, ElementSignature};

/// Sentinel used in signature strings for elements without an id.
pub const NO_ID: &str = "no-id";

/// Length of the `classes_hash` prefix.
const CLASSES_HASH_LEN: usize = 8;

/// Number of parent-class characters kept in `parent_context`.
const PARENT_CLASSES_PREFIX: usize = 10;

/// Knobs for signature generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureConfig {
    /// Include a truncated parent summary in the signature.
    pub include_parent: bool,

    /// Center of the depth window; `None` uses the element's own depth.
    pub depth_override: Option<usize>,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            include_parent: true,
            depth_override: None,
        }
    }
}

/// Sorted, comma-joined class list.
pub fn sorted_classes(classes: &[String]) -> String {
    let mut sorted: Vec<&str> = classes.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted.join(",")
}

/// First 8 hex chars of the SHA-1 of the sorted class list.
pub fn classes_hash(classes: &[String]) -> String {
    let mut hasher = Sha1::new();
    hasher.update(sorted_classes(classes).as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    digest[..CLASSES_HASH_LEN].to_string()
}

/// Compact `tag:sorted,classes:id` summary handed to children as parent context.
pub fn signature_string(tag: &str, classes: &[String], id: Option<&str>) -> String {
    format!(
        "{}:{}:{}",
        tag,
        sorted_classes(classes),
        id.filter(|i| !i.is_empty()).unwrap_or(NO_ID)
    )
}

/// `tag:first-ten-class-chars` of a parent signature string, or empty.
pub fn parent_context(parent_signature: &str) -> String {
    if parent_signature.is_empty() {
        return String::new();
    }

    let mut parts = parent_signature.split(':');
    match (parts.next(), parts.next()) {
        (Some(tag), Some(classes)) => {
            let prefix: String = classes.chars().take(PARENT_CLASSES_PREFIX).collect();
            format!("{}:{}", tag, prefix)
        }
        _ => String::new(),
    }
}

/// `"{max(0, c-1)}-{c+1}"`
pub fn depth_range(center: usize) -> String {
    format!("{}-{}", center.saturating_sub(1), center.saturating_add(1))
}

pub fn generate_signature(record: &ElementRecord, config: &SignatureConfig) -> ElementSignature {
    let parent_context = if config.include_parent {
        parent_context(&record.parent_signature)
    } else {
        String::new()
    };

    ElementSignature {
        tag: record.tag.clone(),
        classes_hash: classes_hash(&record.classes),
        id_present: record.id.is_some(),
        parent_context,
        depth_range: depth_range(config.depth_override.unwrap_or(record.depth)),
    }
}
