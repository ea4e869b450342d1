// ============================================================================
// Arena-backed document tree consumed by the extractor
// ============================================================================

/// Index of a node inside a `DomTree`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Attribute value as delivered by the parser.
///
/// Some attributes (`class`, `rel`, ...) are space-separated token lists,
/// others are plain strings. The extractor normalizes both shapes explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Single(String),
    List(Vec<String>),
}

impl AttrValue {
    /// First token of a list, or the scalar itself.
    pub fn first(&self) -> Option<&str> {
        match self {
            AttrValue::Single(s) => Some(s.as_str()),
            AttrValue::List(items) => items.first().map(String::as_str),
        }
    }

    /// Tokens of the value. A scalar is split on whitespace.
    pub fn tokens(&self) -> Vec<String> {
        match self {
            AttrValue::Single(s) => s.split_whitespace().map(str::to_string).collect(),
            AttrValue::List(items) => items.clone(),
        }
    }

    /// Flatten to a single string; lists are joined with one space.
    pub fn joined(&self) -> String {
        match self {
            AttrValue::Single(s) => s.clone(),
            AttrValue::List(items) => items.join(" "),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    pub name: String,
    pub attrs: Vec<(String, AttrValue)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Element(ElementData),
    Text(String),
    Comment(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    kind: NodeKind,
}

/// A fully materialized document. Node 0 is always the synthetic document root.
#[derive(Debug, Clone)]
pub struct DomTree {
    nodes: Vec<NodeData>,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    pub fn new() -> Self {
        DomTree {
            nodes: vec![NodeData {
                parent: None,
                children: vec![],
                kind: NodeKind::Document,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            parent: Some(parent),
            children: vec![],
            kind,
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn append_element(
        &mut self,
        parent: NodeId,
        name: &str,
        attrs: Vec<(String, AttrValue)>,
    ) -> NodeId {
        self.push(
            parent,
            NodeKind::Element(ElementData {
                name: name.to_string(),
                attrs,
            }),
        )
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeKind::Text(text.to_string()))
    }

    pub fn append_comment(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeKind::Comment(text.to_string()))
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match &self.nodes[id.0].kind {
            NodeKind::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.name.as_str())
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&AttrValue> {
        self.element(id)?
            .attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Direct children that are tags, in document order.
    pub fn element_children(&self, id: NodeId) -> impl DoubleEndedIterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|c| self.element(*c).is_some())
    }

    /// The node's own string: the text of a sole text child, or the own
    /// string of a sole element child. `None` when the node has several
    /// children or none.
    pub fn own_string(&self, id: NodeId) -> Option<&str> {
        let mut current = id;
        loop {
            match self.children(current) {
                [only] => match self.kind(*only) {
                    NodeKind::Text(text) => return Some(text.as_str()),
                    NodeKind::Element(_) => current = *only,
                    _ => return None,
                },
                _ => return None,
            }
        }
    }

    /// All descendant text nodes, each trimmed, concatenated with no separator.
    /// Comments are skipped.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut parts: Vec<&str> = Vec::new();
        let mut stack = vec![id];

        while let Some(node) = stack.pop() {
            match self.kind(node) {
                NodeKind::Text(text) => {
                    let trimmed = text.trim();
                    if !trimmed.is_empty() {
                        parts.push(trimmed);
                    }
                }
                NodeKind::Comment(_) => {}
                NodeKind::Document | NodeKind::Element(_) => {
                    stack.extend(self.children(node).iter().rev().copied());
                }
            }
        }

        parts.concat()
    }
}
