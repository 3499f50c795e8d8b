use serde::{Deserialize, Serialize};

/// Sentinel scheme for lines without a `://` separator
pub const UNKNOWN_SCHEME: &str = "unknown";

/// Separator between a node's scheme and the rest of its URI
pub const SCHEME_SEPARATOR: &str = "://";

/// Ordered, non-empty, trimmed node lines in decoded order (duplicates kept)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeList {
    nodes: Vec<String>,
}

impl NodeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// First `limit` nodes (fewer if the list is shorter)
    pub fn head(&self, limit: usize) -> &[String] {
        &self.nodes[..limit.min(self.nodes.len())]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.nodes
    }
}

impl From<Vec<String>> for NodeList {
    fn from(nodes: Vec<String>) -> Self {
        Self { nodes }
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Scheme of a node line: the text before the first `://`, or `"unknown"`
///
/// Only the first separator counts, so `foo://bar://baz` is `foo`.
pub fn classify_scheme(node: &str) -> &str {
    match node.find(SCHEME_SEPARATOR) {
        Some(idx) => &node[..idx],
        None => UNKNOWN_SCHEME,
    }
}
