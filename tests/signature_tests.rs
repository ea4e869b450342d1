use std::collections::{BTreeMap, HashSet};

use page_patterns::extract::classifier::classify;
use page_patterns::extract::element_model::{ElementCategory, ElementRecord};
use page_patterns::extract::signature::{
    SignatureConfig, classes_hash, depth_range, generate_signature, parent_context,
    signature_string,
};
use sha1::{Digest, Sha1};

fn sha1_prefix(input: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())[..8].to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn record(tag: &str, classes: &[&str], depth: usize, parent_signature: &str) -> ElementRecord {
    ElementRecord {
        tag: tag.to_string(),
        classes: strings(classes),
        id: None,
        text: String::new(),
        attributes: BTreeMap::new(),
        parent_signature: parent_signature.to_string(),
        depth,
        address: format!("/{}", tag),
        category: ElementCategory::Content,
        child_count: 0,
    }
}

// =========================================================================
// classes_hash
// =========================================================================

#[test]
fn classes_hash_ignores_class_order() {
    assert_eq!(
        classes_hash(&strings(&["b", "a"])),
        classes_hash(&strings(&["a", "b"]))
    );
    assert_eq!(classes_hash(&strings(&["b", "a"])), sha1_prefix("a,b"));
}

#[test]
fn classes_hash_of_no_classes_hashes_empty_string() {
    assert_eq!(classes_hash(&[]), sha1_prefix(""));
    assert_eq!(classes_hash(&[]), "da39a3ee");
}

#[test]
fn classes_hash_distinguishes_extra_class() {
    assert_ne!(
        classes_hash(&strings(&["product-item"])),
        classes_hash(&strings(&["product-item", "special"]))
    );
}

// =========================================================================
// parent context, depth window, signature string
// =========================================================================

#[test]
fn parent_context_keeps_tag_and_ten_class_chars() {
    assert_eq!(
        parent_context("div:alpha-beta-gamma,zeta:no-id"),
        "div:alpha-beta"
    );
    assert_eq!(parent_context("ul:row:main"), "ul:row");
    assert_eq!(parent_context("section::no-id"), "section:");
    assert_eq!(parent_context(""), "");
    assert_eq!(parent_context("orphan"), "", "fewer than two parts");
}

#[test]
fn depth_range_is_clamped_at_zero() {
    assert_eq!(depth_range(0), "0-1");
    assert_eq!(depth_range(1), "0-2");
    assert_eq!(depth_range(5), "4-6");
}

#[test]
fn depth_range_saturates_at_upper_bound() {
    let max = usize::MAX;
    assert_eq!(depth_range(max), format!("{}-{}", max - 1, max));

    let rec = record("li", &[], 3, "");
    let config = SignatureConfig {
        include_parent: true,
        depth_override: Some(max),
    };
    assert_eq!(generate_signature(&rec, &config).depth_range, format!("{}-{}", max - 1, max));
}

#[test]
fn signature_string_sorts_classes_and_uses_no_id_sentinel() {
    assert_eq!(
        signature_string("div", &strings(&["b", "a"]), Some("main")),
        "div:a,b:main"
    );
    assert_eq!(signature_string("div", &[], None), "div::no-id");
    assert_eq!(signature_string("div", &[], Some("")), "div::no-id");
}

// =========================================================================
// generate_signature
// =========================================================================

#[test]
fn default_signature_uses_parent_and_own_depth() {
    let rec = record("li", &["row"], 3, "ul:menu-items-primary:no-id");
    let sig = generate_signature(&rec, &SignatureConfig::default());

    assert_eq!(sig.tag, "li");
    assert_eq!(sig.classes_hash, sha1_prefix("row"));
    assert!(!sig.id_present);
    assert_eq!(sig.parent_context, "ul:menu-items");
    assert_eq!(sig.depth_range, "2-4");
}

#[test]
fn include_parent_false_drops_parent_context() {
    let rec = record("li", &["row"], 3, "ul:menu:no-id");
    let config = SignatureConfig {
        include_parent: false,
        depth_override: None,
    };

    assert_eq!(generate_signature(&rec, &config).parent_context, "");
}

#[test]
fn depth_override_recenters_window() {
    let rec = record("li", &[], 3, "");
    let config = SignatureConfig {
        include_parent: true,
        depth_override: Some(7),
    };

    assert_eq!(generate_signature(&rec, &config).depth_range, "6-8");
}

#[test]
fn id_presence_is_part_of_signature() {
    let mut with_id = record("div", &[], 1, "body::no-id");
    with_id.id = Some("main".into());
    let without_id = record("div", &[], 1, "body::no-id");

    let config = SignatureConfig::default();
    assert!(generate_signature(&with_id, &config).id_present);
    assert_ne!(
        generate_signature(&with_id, &config),
        generate_signature(&without_id, &config)
    );
}

#[test]
fn equal_signatures_collapse_in_hash_set() {
    let config = SignatureConfig::default();
    let a = record("p", &["x", "y"], 2, "body::no-id");
    let b = record("p", &["y", "x"], 2, "body::no-id");
    let c = record("p", &["x", "y"], 4, "body::no-id");

    let set: HashSet<_> = [a, b, c]
        .iter()
        .map(|r| generate_signature(r, &config))
        .collect();

    assert_eq!(set.len(), 2, "a and b share a signature, c differs by depth");
}

// =========================================================================
// Classifier precedence
// =========================================================================

#[test]
fn classifier_precedence_table() {
    let none = BTreeMap::new();
    let cases: Vec<(&str, Vec<String>, ElementCategory)> = vec![
        ("nav", vec![], ElementCategory::Navigation),
        ("menu", vec![], ElementCategory::Navigation),
        ("div", strings(&["navbar"]), ElementCategory::Navigation),
        ("a", strings(&["Main-NAV-link"]), ElementCategory::Navigation),
        ("ul", strings(&["sidenav"]), ElementCategory::Navigation),
        ("button", vec![], ElementCategory::Interactive),
        ("input", vec![], ElementCategory::Interactive),
        ("select", vec![], ElementCategory::Interactive),
        ("textarea", vec![], ElementCategory::Interactive),
        ("a", vec![], ElementCategory::Interactive),
        ("form", vec![], ElementCategory::Interactive),
        ("meta", vec![], ElementCategory::Metadata),
        ("link", vec![], ElementCategory::Metadata),
        ("script", vec![], ElementCategory::Metadata),
        ("style", vec![], ElementCategory::Metadata),
        ("title", vec![], ElementCategory::Metadata),
        ("head", vec![], ElementCategory::Metadata),
        ("header", vec![], ElementCategory::Structural),
        ("footer", vec![], ElementCategory::Structural),
        ("aside", vec![], ElementCategory::Structural),
        ("section", vec![], ElementCategory::Structural),
        ("article", vec![], ElementCategory::Structural),
        ("main", vec![], ElementCategory::Structural),
        ("div", vec![], ElementCategory::Content),
        ("p", strings(&["text"]), ElementCategory::Content),
        ("custom-widget", vec![], ElementCategory::Content),
    ];

    for (tag, classes, expected) in cases {
        assert_eq!(
            classify(tag, &classes, &none),
            expected,
            "tag={} classes={:?}",
            tag,
            classes
        );
    }
}
