use scraper::{Html, Node};

use crate::dom::dom_model::{AttrValue, DomTree};

/// Attributes whose values are whitespace-separated token lists.
const MULTI_VALUED_ATTRS: [&str; 7] = [
    "class",
    "rel",
    "rev",
    "headers",
    "accesskey",
    "accept-charset",
    "dropzone",
];

/// Parse a full HTML document into a `DomTree`.
///
/// html5ever repairs the markup the way browsers do, so a document without
/// `<head>` or `<body>` gains them here.
pub fn parse_document(markup: &str) -> DomTree {
    let html = Html::parse_document(markup);
    let mut tree = DomTree::new();
    let root = tree.root();

    let mut stack: Vec<_> = html
        .tree
        .root()
        .children()
        .rev()
        .map(|child| (child, root))
        .collect();

    while let Some((node, parent)) = stack.pop() {
        let id = match node.value() {
            Node::Element(el) => {
                let attrs = el
                    .attrs()
                    .map(|(name, value)| (name.to_string(), attr_value(name, value)))
                    .collect();
                tree.append_element(parent, &el.name().to_ascii_lowercase(), attrs)
            }
            Node::Text(text) => {
                tree.append_text(parent, &text.text);
                continue;
            }
            Node::Comment(comment) => {
                tree.append_comment(parent, &comment.comment);
                continue;
            }
            _ => continue,
        };

        stack.extend(node.children().rev().map(|child| (child, id)));
    }

    tree
}

fn attr_value(name: &str, value: &str) -> AttrValue {
    if MULTI_VALUED_ATTRS.iter().any(|a| a.eq_ignore_ascii_case(name)) {
        AttrValue::List(value.split_whitespace().map(str::to_string).collect())
    } else {
        AttrValue::Single(value.to_string())
    }
}
