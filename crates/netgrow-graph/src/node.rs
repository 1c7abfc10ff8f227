use std::hash::{Hash, Hasher};

use netgrow_core::{EdgeId, NodeLabel};

/// Vertex of a growing network.
///
/// The label is the sole identity key: two nodes compare equal when their
/// labels match, whatever their incident edges are.
#[derive(Debug, Clone)]
pub struct Node {
    label: NodeLabel,
    edges: Vec<EdgeId>,
}

impl Node {
    pub(crate) fn new(label: NodeLabel) -> Self {
        Self {
            label,
            edges: Vec::new(),
        }
    }

    /// Returns the node label.
    pub fn label(&self) -> NodeLabel {
        self.label
    }

    /// Returns the incident edges in attachment order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Returns the number of incident edges.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Appends an incident edge. Only [`Edge::register`](crate::Edge::register) calls this.
    pub(crate) fn add_edge(&mut self, edge: EdgeId) {
        self.edges.push(edge);
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_ignores_incident_edges() {
        let mut a = Node::new(NodeLabel::from_raw(4));
        let b = Node::new(NodeLabel::from_raw(4));
        a.add_edge(EdgeId::from_raw(0));
        assert_eq!(a, b);
        assert_ne!(a, Node::new(NodeLabel::from_raw(5)));
        assert_eq!(a.degree(), 1);
        assert_eq!(b.degree(), 0);
    }
}
