use std::collections::BTreeMap;

use crate::extract::element_model::ElementCategory;

const NAVIGATION_TAGS: [&str; 2] = ["nav", "menu"];
const INTERACTIVE_TAGS: [&str; 6] = ["button", "input", "select", "textarea", "a", "form"];
const METADATA_TAGS: [&str; 6] = ["meta", "link", "script", "style", "title", "head"];
const STRUCTURAL_TAGS: [&str; 6] = ["header", "footer", "aside", "section", "article", "main"];

/// Map a tag and its classes to a category. First matching rule wins:
/// navigation, interactive, metadata, structural, then content.
///
/// Class-based navigation detection runs before any tag rule, so
/// `<div class="navbar">` is navigation and `<a class="nav-link">` is too.
pub fn classify(
    tag: &str,
    classes: &[String],
    _attributes: &BTreeMap<String, String>,
) -> ElementCategory {
    if NAVIGATION_TAGS.contains(&tag) || classes.iter().any(|c| c.to_lowercase().contains("nav")) {
        return ElementCategory::Navigation;
    }

    if INTERACTIVE_TAGS.contains(&tag) {
        return ElementCategory::Interactive;
    }

    if METADATA_TAGS.contains(&tag) {
        return ElementCategory::Metadata;
    }

    if STRUCTURAL_TAGS.contains(&tag) {
        return ElementCategory::Structural;
    }

    ElementCategory::Content
}
