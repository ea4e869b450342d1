use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::extract::element_model::{ElementCategory, ElementRecord};

/// How many tags `most_common_tags` reports.
pub const TOP_TAGS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentStats {
    pub total_elements: usize,
    pub unique_tags: usize,
    pub max_depth: usize,
    pub avg_depth: f64,
    pub elements_with_classes: usize,
    pub elements_with_ids: usize,
    pub elements_with_text: usize,
    pub most_common_tags: Vec<TagCount>,
    pub element_types: BTreeMap<ElementCategory, usize>,
}

pub fn compute_stats(records: &[ElementRecord]) -> DocumentStats {
    // Tag counts in first-encountered order so the stable sort below keeps ties in place
    let mut tag_order: Vec<&str> = Vec::new();
    let mut tag_counts: HashMap<&str, usize> = HashMap::new();
    let mut element_types: BTreeMap<ElementCategory, usize> = BTreeMap::new();

    for record in records {
        let count = tag_counts.entry(record.tag.as_str()).or_insert_with(|| {
            tag_order.push(record.tag.as_str());
            0
        });
        *count += 1;

        *element_types.entry(record.category).or_insert(0) += 1;
    }

    let mut most_common_tags: Vec<TagCount> = tag_order
        .iter()
        .map(|tag| TagCount {
            tag: tag.to_string(),
            count: tag_counts[tag],
        })
        .collect();
    most_common_tags.sort_by(|a, b| b.count.cmp(&a.count));
    most_common_tags.truncate(TOP_TAGS);

    let total_depth: usize = records.iter().map(|r| r.depth).sum();
    let avg_depth = if records.is_empty() {
        0.0
    } else {
        total_depth as f64 / records.len() as f64
    };

    DocumentStats {
        total_elements: records.len(),
        unique_tags: tag_order.len(),
        max_depth: records.iter().map(|r| r.depth).max().unwrap_or(0),
        avg_depth,
        elements_with_classes: records.iter().filter(|r| !r.classes.is_empty()).count(),
        elements_with_ids: records.iter().filter(|r| r.id.is_some()).count(),
        elements_with_text: records.iter().filter(|r| !r.text.is_empty()).count(),
        most_common_tags,
        element_types,
    }
}
