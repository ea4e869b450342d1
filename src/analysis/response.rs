use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata delivered by the fetch layer alongside the parsed tree.
/// Carried through untouched; nothing in the analyzer reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub status_code: Option<u16>,
    pub final_url: String,
    pub content_length: usize,
    pub encoding: Option<String>,
    pub elapsed_ms: Option<u64>,
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl ResponseMetadata {
    /// Metadata for markup read from disk rather than fetched.
    pub fn local_file(path: &str, content_length: usize) -> Self {
        ResponseMetadata {
            final_url: format!("file://{}", path),
            content_length,
            encoding: Some("utf-8".to_string()),
            ..Default::default()
        }
    }
}
