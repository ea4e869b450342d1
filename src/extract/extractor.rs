use std::collections::BTreeMap;

use crate::dom::dom_model::{DomTree, NodeId};
use crate::extract::address::child_address;
use crate::extract::classifier::classify;
use crate::extract::element_model::ElementRecord;
use crate::extract::signature::signature_string;

/// Maximum characters of flattened descendant text kept per element.
pub const MAX_TEXT_CHARS: usize = 200;

/// Context a parent hands to each of its tag children.
struct Frame {
    node: NodeId,
    depth: usize,
    parent_signature: String,
    parent_address: String,
}

/// Walk the tree in pre-order and emit one record per tag node.
///
/// Every top-level tag under the document root starts at depth 0. A parent's
/// record always precedes the records of its descendants.
pub fn extract(tree: &DomTree) -> Vec<ElementRecord> {
    let mut records = Vec::new();
    let mut stack: Vec<Frame> = tree
        .element_children(tree.root())
        .rev()
        .map(|node| Frame {
            node,
            depth: 0,
            parent_signature: String::new(),
            parent_address: String::new(),
        })
        .collect();

    while let Some(frame) = stack.pop() {
        let record = build_record(tree, &frame);
        let own_signature = signature_string(&record.tag, &record.classes, record.id.as_deref());
        let own_address = record.address.clone();
        let depth = record.depth;

        records.push(record);

        stack.extend(tree.element_children(frame.node).rev().map(|child| Frame {
            node: child,
            depth: depth + 1,
            parent_signature: own_signature.clone(),
            parent_address: own_address.clone(),
        }));
    }

    records
}

fn build_record(tree: &DomTree, frame: &Frame) -> ElementRecord {
    let node = frame.node;
    let tag = tree.tag_name(node).unwrap_or_default().to_lowercase();

    let classes: Vec<String> = tree
        .attr(node, "class")
        .map(|v| v.tokens())
        .unwrap_or_default()
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();

    let id = tree
        .attr(node, "id")
        .and_then(|v| v.first())
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty());

    let attributes: BTreeMap<String, String> = tree
        .element(node)
        .map(|el| {
            el.attrs
                .iter()
                .filter(|(k, _)| !k.eq_ignore_ascii_case("class") && !k.eq_ignore_ascii_case("id"))
                .map(|(k, v)| (k.clone(), v.joined()))
                .collect()
        })
        .unwrap_or_default();

    let category = classify(&tag, &classes, &attributes);

    ElementRecord {
        text: element_text(tree, node),
        address: child_address(&frame.parent_address, tree, node),
        child_count: tree.element_children(node).count(),
        parent_signature: frame.parent_signature.clone(),
        depth: frame.depth,
        tag,
        classes,
        id,
        attributes,
        category,
    }
}

/// Own string if present, else the first 200 chars of descendant text,
/// whitespace-collapsed either way.
pub fn element_text(tree: &DomTree, node: NodeId) -> String {
    let raw = match tree.own_string(node) {
        Some(own) if !own.trim().is_empty() => own.to_string(),
        _ => tree.text_content(node).chars().take(MAX_TEXT_CHARS).collect(),
    };

    collapse_whitespace(&raw)
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
