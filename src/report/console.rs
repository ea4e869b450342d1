use crate::analysis::stats::DocumentStats;
use crate::extract::element_model::{ElementRecord, PatternInfo};

/// Longest text preview printed per element.
const PREVIEW_CHARS: usize = 40;

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format extracted elements, one block per element.
///
/// ```text
/// === Elements: 4 ===
///
///   1. <p> classes=[x] depth=2 children=0 (content)
///      Address: /html/body/p[1]
///      Text: 'Hello'
/// ```
pub fn format_elements_report(records: &[ElementRecord], limit: Option<usize>) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Elements: {} ===\n\n", records.len()));

    let shown = limit.unwrap_or(records.len()).min(records.len());
    for (i, el) in records.iter().take(shown).enumerate() {
        let classes = if el.classes.is_empty() {
            "no-classes".to_string()
        } else {
            el.classes.join(".")
        };

        out.push_str(&format!(
            "  {}. <{}> classes=[{}] depth={} children={} ({})\n",
            i + 1,
            el.tag,
            classes,
            el.depth,
            el.child_count,
            el.category.as_str()
        ));

        if let Some(id) = &el.id {
            out.push_str(&format!("     ID: {}\n", id));
        }
        out.push_str(&format!("     Address: {}\n", el.address));
        if !el.text.is_empty() {
            out.push_str(&format!("     Text: '{}'\n", preview(&el.text)));
        }
    }

    if shown < records.len() {
        out.push_str(&format!("\n  ... {} more\n", records.len() - shown));
    }

    out
}

pub fn format_stats_report(stats: &DocumentStats) -> String {
    let mut out = String::new();

    out.push_str("=== Document Statistics ===\n\n");
    out.push_str(&format!("  Total elements: {}\n", stats.total_elements));
    out.push_str(&format!("  Unique tags: {}\n", stats.unique_tags));
    out.push_str(&format!("  Max depth: {}\n", stats.max_depth));
    out.push_str(&format!("  Avg depth: {:.1}\n", stats.avg_depth));
    out.push_str(&format!("  Elements with classes: {}\n", stats.elements_with_classes));
    out.push_str(&format!("  Elements with IDs: {}\n", stats.elements_with_ids));
    out.push_str(&format!("  Elements with text: {}\n", stats.elements_with_text));

    out.push_str("\n  Most common tags:\n");
    for tc in &stats.most_common_tags {
        out.push_str(&format!("    {}: {}\n", tc.tag, tc.count));
    }

    out.push_str("\n  Element types:\n");
    for (category, count) in &stats.element_types {
        out.push_str(&format!("    {}: {}\n", category.as_str(), count));
    }

    out
}

pub fn format_patterns_report(patterns: &[PatternInfo]) -> String {
    if patterns.is_empty() {
        return "=== No repeating patterns detected ===\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!("=== Patterns: {} ===\n\n", patterns.len()));

    for pattern in patterns {
        let sig = &pattern.signature;
        out.push_str(&format!(
            "  <{}> classes#{} id={} parent='{}' depth={} -> {} occurrences\n",
            sig.tag,
            sig.classes_hash,
            sig.id_present,
            sig.parent_context,
            sig.depth_range,
            pattern.count
        ));

        if let Some(first) = pattern.elements.first() {
            let sample = if first.text.is_empty() {
                "no text".to_string()
            } else {
                preview(&first.text)
            };
            out.push_str(&format!("     Sample: {} '{}'\n", first.address, sample));
        }
    }

    out
}

fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let cut: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}
