use page_patterns::analysis::analyzer::DocumentAnalyzer;
use page_patterns::analysis::response::ResponseMetadata;
use page_patterns::dom::dom_model::{AttrValue, DomTree, NodeId};
use page_patterns::dom::html_source::parse_document;

pub fn fixture_path(name: &str) -> String {
    let base = std::env::current_dir().unwrap();
    let path = base.join("tests").join("fixtures").join(name);

    path.display().to_string()
}

pub fn fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).unwrap()
}

pub fn analyzer_for(markup: &str) -> DocumentAnalyzer {
    DocumentAnalyzer::new(
        "memory://test",
        parse_document(markup),
        ResponseMetadata::default(),
    )
}

pub fn analyzer_for_tree(tree: DomTree) -> DocumentAnalyzer {
    DocumentAnalyzer::new("memory://test", tree, ResponseMetadata::default())
}

/// Append `<tag class="...">` under `parent`.
pub fn el(tree: &mut DomTree, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
    let attrs = if classes.is_empty() {
        vec![]
    } else {
        vec![(
            "class".to_string(),
            AttrValue::List(classes.iter().map(|c| c.to_string()).collect()),
        )]
    };
    tree.append_element(parent, tag, attrs)
}

/// `<html><body><p class="x">Hello</p><p class="x">World</p></body></html>`
/// built by hand, so no parser repairs apply.
pub fn hello_world_tree() -> (DomTree, [NodeId; 4]) {
    let mut tree = DomTree::new();
    let root = tree.root();
    let html = el(&mut tree, root, "html", &[]);
    let body = el(&mut tree, html, "body", &[]);
    let p1 = el(&mut tree, body, "p", &["x"]);
    tree.append_text(p1, "Hello");
    let p2 = el(&mut tree, body, "p", &["x"]);
    tree.append_text(p2, "World");

    (tree, [html, body, p1, p2])
}

/// Strip the last `/segment` of an address.
pub fn parent_address(address: &str) -> &str {
    match address.rfind('/') {
        Some(pos) => &address[..pos],
        None => "",
    }
}
