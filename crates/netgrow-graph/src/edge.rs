use netgrow_core::{EdgeId, NodeId};

use crate::ids::node_index;
use crate::node::Node;

/// Undirected link between two nodes of the same network.
///
/// Endpoints are stored as arena indices; the owning network holds both the
/// nodes and the edges. Equality is over the unordered endpoint pair.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    node1: NodeId,
    node2: NodeId,
}

impl Edge {
    /// Creates the edge `id` and registers it with both endpoints.
    ///
    /// No self-loop or duplicate check happens here; a self-loop is registered
    /// twice on the same node. Callers guarantee both endpoints exist in `nodes`.
    pub(crate) fn register(id: EdgeId, node1: NodeId, node2: NodeId, nodes: &mut [Node]) -> Self {
        nodes[node_index(node1)].add_edge(id);
        nodes[node_index(node2)].add_edge(id);
        Self { node1, node2 }
    }

    /// Returns the first endpoint as passed at construction.
    pub fn node1(&self) -> NodeId {
        self.node1
    }

    /// Returns the second endpoint as passed at construction.
    pub fn node2(&self) -> NodeId {
        self.node2
    }

    /// Returns whether the edge links `a` and `b` in either orientation.
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.node1 == a && self.node2 == b) || (self.node1 == b && self.node2 == a)
    }

    /// Returns the endpoint opposite to `node`, if `node` is an endpoint.
    pub fn other(&self, node: NodeId) -> Option<NodeId> {
        if self.node1 == node {
            Some(self.node2)
        } else if self.node2 == node {
            Some(self.node1)
        } else {
            None
        }
    }

    /// Returns whether both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.node1 == self.node2
    }

    /// Endpoint pair with the smaller index first.
    pub fn unordered(&self) -> (NodeId, NodeId) {
        if self.node1 <= self.node2 {
            (self.node1, self.node2)
        } else {
            (self.node2, self.node1)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(other.node1, other.node2)
    }
}

impl Eq for Edge {}

#[cfg(test)]
mod tests {
    use super::*;
    use netgrow_core::NodeLabel;

    fn arena(size: u64) -> Vec<Node> {
        (1..=size).map(|raw| Node::new(NodeLabel::from_raw(raw))).collect()
    }

    #[test]
    fn registration_touches_both_endpoints() {
        let mut nodes = arena(3);
        let edge = Edge::register(
            EdgeId::from_raw(0),
            NodeId::from_raw(0),
            NodeId::from_raw(2),
            &mut nodes,
        );
        assert_eq!(nodes[0].edges(), &[EdgeId::from_raw(0)]);
        assert_eq!(nodes[2].edges(), &[EdgeId::from_raw(0)]);
        assert!(nodes[1].edges().is_empty());
        assert_eq!(edge.other(NodeId::from_raw(2)), Some(NodeId::from_raw(0)));
        assert_eq!(edge.other(NodeId::from_raw(1)), None);
    }

    #[test]
    fn equality_is_orientation_free() {
        let mut nodes = arena(2);
        let a = Edge::register(
            EdgeId::from_raw(0),
            NodeId::from_raw(0),
            NodeId::from_raw(1),
            &mut nodes,
        );
        let b = Edge::register(
            EdgeId::from_raw(1),
            NodeId::from_raw(1),
            NodeId::from_raw(0),
            &mut nodes,
        );
        assert_eq!(a, b);
        assert_eq!(a.unordered(), b.unordered());
        assert_eq!(nodes[0].degree(), 2);
    }

    #[test]
    fn self_loop_registers_twice() {
        let mut nodes = arena(1);
        let edge = Edge::register(
            EdgeId::from_raw(0),
            NodeId::from_raw(0),
            NodeId::from_raw(0),
            &mut nodes,
        );
        assert!(edge.is_self_loop());
        assert_eq!(nodes[0].degree(), 2);
    }
}
