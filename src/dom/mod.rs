//! Owned, mutable HTML document model.
//!
//! The enhancement passes need three capabilities the host page normally
//! provides: selector queries, attribute/class mutation, and child insertion.
//! This module supplies them over a flat node arena so elements can be
//! addressed by stable [`NodeId`]s while the tree is being rewritten.
//!
//! # Modules
//!
//! - `parse`: builds a [`Document`] from HTML text (via `tl`)
//! - `query`: minimal selector engine (tag, `#id`, `.class`, descendant)
//! - `render`: serializes a [`Document`] back to HTML text

mod parse;
mod query;
mod render;

pub use query::Selector;

use rustc_hash::FxHashMap;

/// Handle to a node in the document arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// Node payload.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Element with lowercase tag name and ordered attributes.
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
    },
    /// Text content (escaped on serialization).
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// A parsed HTML page.
///
/// Node 0 is a synthetic root; its children are the document's top-level
/// nodes. The root is never serialized.
#[derive(Debug, Clone)]
pub struct Document {
    pub(crate) nodes: Vec<NodeData>,
    /// Leading `<!DOCTYPE ...>` prologue, preserved verbatim.
    pub(crate) doctype: Option<String>,
    /// `id` attribute -> node, kept in sync by `set_attr`.
    id_index: FxHashMap<String, NodeId>,
}

impl Document {
    pub(crate) fn empty() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Element {
                    tag: String::new(),
                    attrs: Vec::new(),
                },
                parent: None,
                children: Vec::new(),
            }],
            doctype: None,
            id_index: FxHashMap::default(),
        }
    }

    /// Synthetic root node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Allocate a detached element node.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.push_node(NodeData {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
                attrs: Vec::new(),
            },
            parent: None,
            children: Vec::new(),
        })
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.push_node(NodeData {
            kind: NodeKind::Text(text.to_string()),
            parent: None,
            children: Vec::new(),
        })
    }

    pub(crate) fn push_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        if let NodeKind::Element { attrs, .. } = &data.kind
            && let Some((_, value)) = attrs.iter().find(|(k, _)| k == "id")
        {
            self.id_index.insert(value.clone(), id);
        }
        self.nodes.push(data);
        id
    }

    /// Tag name for element nodes, `None` for text.
    pub fn tag_name(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Attribute value. Boolean attributes are present with an empty value.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn has_attr(&self, node: NodeId, name: &str) -> bool {
        self.attr(node, name).is_some()
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, node: NodeId, name: &str, value: &str) {
        if name == "id" {
            if let Some(old) = self.attr(node, "id").map(str::to_string) {
                self.id_index.remove(&old);
            }
            self.id_index.insert(value.to_string(), node);
        }
        if let NodeKind::Element { attrs, .. } = &mut self.nodes[node.0].kind {
            match attrs.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = value.to_string(),
                None => attrs.push((name.to_string(), value.to_string())),
            }
        }
    }

    /// Element lookup by `id` attribute.
    pub fn by_id(&self, id: &str) -> Option<NodeId> {
        self.id_index.get(id).copied()
    }

    /// Whether the `class` attribute contains `class_name`.
    pub fn has_class(&self, node: NodeId, class_name: &str) -> bool {
        self.attr(node, "class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class_name))
    }

    /// Add a class if not already present.
    pub fn add_class(&mut self, node: NodeId, class_name: &str) {
        if self.has_class(node, class_name) {
            return;
        }
        let updated = match self.attr(node, "class") {
            Some(existing) if !existing.trim().is_empty() => {
                format!("{existing} {class_name}")
            }
            _ => class_name.to_string(),
        };
        self.set_attr(node, "class", &updated);
    }

    /// Remove a class; leaves other classes untouched.
    pub fn remove_class(&mut self, node: NodeId, class_name: &str) {
        let Some(existing) = self.attr(node, "class") else {
            return;
        };
        let updated = existing
            .split_ascii_whitespace()
            .filter(|c| *c != class_name)
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attr(node, "class", &updated);
    }

    /// Append `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `child` as the first child of `parent`.
    pub fn prepend_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.insert(0, child);
    }

    /// Depth-first element descendants of `node`, in document order.
    pub fn descendant_elements(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_elements(node, &mut out);
        out
    }

    fn collect_elements(&self, node: NodeId, out: &mut Vec<NodeId>) {
        for &child in &self.nodes[node.0].children {
            if self.tag_name(child).is_some() {
                out.push(child);
            }
            self.collect_elements(child, out);
        }
    }

    /// First element descendant with the given tag name.
    pub fn find_descendant_by_tag(&self, node: NodeId, tag: &str) -> Option<NodeId> {
        self.descendant_elements(node)
            .into_iter()
            .find(|&n| self.tag_name(n) == Some(tag))
    }
}
