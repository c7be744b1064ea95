use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of a node, as produced by the `node_id` accessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeKey {
    Index(usize),
    Name(String),
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKey::Index(idx) => write!(f, "{idx}"),
            NodeKey::Name(name) => f.write_str(name),
        }
    }
}

impl From<usize> for NodeKey {
    fn from(idx: usize) -> Self {
        NodeKey::Index(idx)
    }
}

impl From<&str> for NodeKey {
    fn from(name: &str) -> Self {
        NodeKey::Name(name.to_string())
    }
}

impl From<String> for NodeKey {
    fn from(name: String) -> Self {
        NodeKey::Name(name)
    }
}

/// Link endpoint before indexing.
///
/// `Node` points straight at a position in the node collection, `Id` goes
/// through the key map built from `node_id`. Serialized inputs always carry
/// identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "NodeKey")]
pub enum Endpoint {
    Node(usize),
    Id(NodeKey),
}

impl From<NodeKey> for Endpoint {
    fn from(key: NodeKey) -> Self {
        Endpoint::Id(key)
    }
}

impl From<&str> for Endpoint {
    fn from(name: &str) -> Self {
        Endpoint::Id(NodeKey::from(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Pinned column; bypasses layering and the alignment policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_pos: Option<usize>,
    #[serde(flatten)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

impl NodeInput {
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn pinned(mut self, column: usize) -> Self {
        self.x_pos = Some(column);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkInput {
    pub source: Endpoint,
    pub target: Endpoint,
    #[serde(default)]
    pub value: f64,
    #[serde(flatten)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

impl LinkInput {
    pub fn new(source: impl Into<Endpoint>, target: impl Into<Endpoint>, value: f64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            value,
            attrs: serde_json::Map::new(),
        }
    }
}

/// Default input shape: `{ "nodes": [...], "links": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SankeyInput {
    #[serde(default)]
    pub nodes: Vec<NodeInput>,
    #[serde(default)]
    pub links: Vec<LinkInput>,
}

impl SankeyInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named node unless one with that name already exists.
    pub fn ensure_node(&mut self, name: &str) -> usize {
        if let Some(idx) = self
            .nodes
            .iter()
            .position(|node| node.name.as_deref() == Some(name))
        {
            return idx;
        }
        self.nodes.push(NodeInput::named(name));
        self.nodes.len() - 1
    }

    /// Adds a link between named nodes, creating the nodes on first use.
    pub fn link(&mut self, source: &str, target: &str, value: f64) -> &mut Self {
        self.ensure_node(source);
        self.ensure_node(target);
        self.links.push(LinkInput::new(source, target, value));
        self
    }
}
