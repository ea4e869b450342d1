use crate::dom::dom_model::{DomTree, NodeId};

/// Positional path of `node`, e.g. `/html/body/div[2]/p`.
///
/// Walks parent links up to the highest tag ancestor. Non-tag ancestors
/// (the synthetic document root) contribute no segment.
pub fn address(tree: &DomTree, node: NodeId) -> String {
    let mut segments = Vec::new();
    let mut current = Some(node);

    while let Some(id) = current {
        if let Some(seg) = segment(tree, id) {
            segments.push(seg);
        }
        current = tree.parent(id);
    }

    segments.reverse();
    format!("/{}", segments.join("/"))
}

/// Append `node`'s own segment to an already computed parent address.
pub fn child_address(parent_address: &str, tree: &DomTree, node: NodeId) -> String {
    match segment(tree, node) {
        Some(seg) => format!("{}/{}", parent_address, seg),
        None => parent_address.to_string(),
    }
}

/// `tag` when unique among same-tag siblings, `tag[n]` (1-based) otherwise.
pub fn segment(tree: &DomTree, node: NodeId) -> Option<String> {
    let tag = tree.tag_name(node)?.to_ascii_lowercase();

    let Some(parent) = tree.parent(node) else {
        return Some(tag);
    };

    let mut position = 0;
    let mut same_tag = 0;
    for sibling in tree.element_children(parent) {
        if tree
            .tag_name(sibling)
            .is_some_and(|t| t.eq_ignore_ascii_case(&tag))
        {
            same_tag += 1;
            if sibling == node {
                position = same_tag;
            }
        }
    }

    if same_tag > 1 {
        Some(format!("{}[{}]", tag, position))
    } else {
        Some(tag)
    }
}
