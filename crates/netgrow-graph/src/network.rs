use std::collections::BTreeMap;

use log::{debug, trace};
use netgrow_core::errors::{ErrorInfo, NetError};
use netgrow_core::rng::RngHandle;
use netgrow_core::{
    AverageDegreeHistory, DegreeDistribution, EdgeId, Fraction, GrowthStatistics, NodeId,
    NodeLabel,
};

use crate::attachment::plan_attachment;
use crate::config::{InitialLinking, NetworkConfig};
use crate::edge::Edge;
use crate::ids::{edge_index, make_edge, make_node, node_index};
use crate::node::Node;

/// A randomly growing undirected network together with its statistics history.
///
/// The network owns every node and edge; nodes and edges refer to each other
/// through arena indices. Time step `t` counts recorded snapshots: the
/// constructor records `t = 0` and every successful [`Network::add_node`]
/// records the next one.
#[derive(Debug, Clone)]
pub struct Network {
    config: NetworkConfig,
    next_label: NodeLabel,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    t: u64,
    history: AverageDegreeHistory,
    rng: RngHandle,
}

impl Network {
    /// Creates a network with `initial_nodes_nb` seed nodes and default options.
    pub fn new(initial_nodes_nb: usize, rng: RngHandle) -> Result<Self, NetError> {
        Self::with_config(NetworkConfig::with_initial_nodes(initial_nodes_nb), rng)
    }

    /// Creates a network from an explicit configuration.
    pub fn with_config(config: NetworkConfig, rng: RngHandle) -> Result<Self, NetError> {
        config.validate()?;
        let mut network = Self {
            config,
            next_label: NodeLabel::FIRST,
            nodes: Vec::new(),
            edges: Vec::new(),
            t: 0,
            history: BTreeMap::new(),
            rng,
        };
        network.seed_nodes();
        network.calculate_average_degree()?;
        Ok(network)
    }

    fn seed_nodes(&mut self) {
        for _ in 0..self.config.initial_nodes {
            self.push_node();
        }
        match self.config.initial_linking {
            InitialLinking::Path => {
                for idx in 1..self.nodes.len() {
                    self.connect(make_node(idx - 1), make_node(idx));
                }
            }
            InitialLinking::Isolated => {}
        }
        trace!(
            "seeded network with {} nodes and {} edges",
            self.nodes.len(),
            self.edges.len()
        );
    }

    /// Returns the configuration used by this network.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Initial node count, also the number of edges attached to each added node.
    pub fn m0(&self) -> usize {
        self.config.initial_nodes
    }

    /// Index of the next snapshot to be recorded.
    pub fn t(&self) -> u64 {
        self.t
    }

    /// Label the next added node will receive.
    pub fn next_label(&self) -> NodeLabel {
        self.next_label
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the node stored at `id`.
    pub fn node(&self, id: NodeId) -> Result<&Node, NetError> {
        self.nodes.get(node_index(id)).ok_or_else(|| unknown_node(id))
    }

    /// Returns the edge stored at `id`.
    pub fn edge(&self, id: EdgeId) -> Result<&Edge, NetError> {
        self.edges.get(edge_index(id)).ok_or_else(|| {
            NetError::invalid("unknown-edge", "edge does not exist")
                .with_context("edge", id.as_raw())
        })
    }

    /// Looks a node up by label.
    pub fn node_by_label(&self, label: NodeLabel) -> Option<NodeId> {
        self.nodes
            .binary_search_by_key(&label, Node::label)
            .ok()
            .map(make_node)
    }

    /// Number of edges incident to `id`.
    pub fn degree(&self, id: NodeId) -> Result<usize, NetError> {
        Ok(self.node(id)?.degree())
    }

    /// Opposite endpoints of every incident edge, in attachment order.
    ///
    /// A neighbor linked through parallel edges appears once per edge.
    pub fn neighbors(&self, id: NodeId) -> Result<Vec<NodeId>, NetError> {
        let node = self.node(id)?;
        node.edges()
            .iter()
            .map(|edge| self.edge(*edge).map(|record| record.other(id).unwrap_or(id)))
            .collect()
    }

    /// Average degree recorded at every snapshot, keyed by time step.
    pub fn average_degree_history(&self) -> &AverageDegreeHistory {
        &self.history
    }

    /// Adds one node attached to `m0` existing nodes and records a snapshot.
    pub fn add_node(&mut self) -> Result<NodeId, NetError> {
        self.add_node_with_attachments(self.m0())
    }

    /// Adds one node attached to `attachments` existing nodes and records a snapshot.
    ///
    /// Either the node, all of its edges and the snapshot are added, or the
    /// call fails and node count, edge count, labels and history are untouched.
    pub fn add_node_with_attachments(&mut self, attachments: usize) -> Result<NodeId, NetError> {
        if attachments == 0 {
            return Err(NetError::invalid(
                "zero-attachments",
                "an added node must attach to at least one node",
            ));
        }
        let label = self.next_label;
        let id = self.push_node();
        if let Err(err) = self.add_random_edges(id, attachments) {
            self.nodes.pop();
            self.next_label = label;
            debug!("attachment of node {label} rejected: {err}");
            return Err(err.with_context("label", label));
        }
        self.calculate_average_degree()?;
        Ok(id)
    }

    /// Links `node` to `count` randomly drawn nodes other than itself.
    ///
    /// Creates no edge at all when the draw leaves fewer than `count` usable
    /// candidates, or, under [`crate::MultiEdgePolicy::Reject`], when fewer than
    /// `count` other nodes exist. Does not record a snapshot.
    pub fn add_random_edges(
        &mut self,
        node: NodeId,
        count: usize,
    ) -> Result<Vec<EdgeId>, NetError> {
        if count == 0 {
            return Err(NetError::invalid(
                "zero-attachments",
                "attachment requires at least one edge",
            ));
        }
        self.node(node)?;
        let partners = plan_attachment(
            node,
            count,
            self.nodes.len(),
            self.config.multi_edges,
            &mut self.rng,
        )?;
        Ok(partners
            .into_iter()
            .map(|partner| self.connect(node, partner))
            .collect())
    }

    /// Fraction of nodes per degree value, ascending by degree.
    ///
    /// Fractions are exact and sum to one.
    pub fn degree_distribution(&self) -> Result<DegreeDistribution, NetError> {
        let total = self.ensure_populated("degree-distribution")?;
        let mut counts: BTreeMap<usize, u64> = BTreeMap::new();
        for node in &self.nodes {
            *counts.entry(node.degree()).or_insert(0) += 1;
        }
        Ok(counts
            .into_iter()
            .map(|(degree, count)| (degree, Fraction::new(count, total)))
            .collect())
    }

    /// Current average degree, `2 * |edges| / |nodes|`.
    pub fn average_degree(&self) -> Result<Fraction, NetError> {
        let total = self.ensure_populated("average-degree")?;
        Ok(Fraction::new(2 * self.edges.len() as u64, total))
    }

    /// Records the current average degree at time `t`, then advances `t`.
    pub(crate) fn calculate_average_degree(&mut self) -> Result<Fraction, NetError> {
        let value = self.average_degree()?;
        self.history.insert(self.t, value);
        self.t += 1;
        Ok(value)
    }

    fn ensure_populated(&self, statistic: &str) -> Result<u64, NetError> {
        if self.nodes.is_empty() {
            return Err(NetError::EmptyNetworkStatistics(
                ErrorInfo::new("empty-network", "statistics require at least one node")
                    .with_context("statistic", statistic),
            ));
        }
        Ok(self.nodes.len() as u64)
    }

    fn push_node(&mut self) -> NodeId {
        let id = make_node(self.nodes.len());
        self.nodes.push(Node::new(self.next_label));
        self.next_label = self.next_label.next();
        id
    }

    fn connect(&mut self, node1: NodeId, node2: NodeId) -> EdgeId {
        let id = make_edge(self.edges.len());
        let edge = Edge::register(id, node1, node2, &mut self.nodes);
        self.edges.push(edge);
        id
    }
}

impl GrowthStatistics for Network {
    fn m0(&self) -> usize {
        Network::m0(self)
    }

    fn degree_distribution(&self) -> Result<DegreeDistribution, NetError> {
        Network::degree_distribution(self)
    }

    fn average_degree_history(&self) -> &AverageDegreeHistory {
        &self.history
    }
}

fn unknown_node(id: NodeId) -> NetError {
    NetError::invalid("unknown-node", "node does not exist").with_context("node", id.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statistics_on_empty_network_fail() {
        let network = Network {
            config: NetworkConfig::default(),
            next_label: NodeLabel::FIRST,
            nodes: Vec::new(),
            edges: Vec::new(),
            t: 0,
            history: BTreeMap::new(),
            rng: RngHandle::from_seed(0),
        };
        let err = network.degree_distribution().unwrap_err();
        assert!(matches!(err, NetError::EmptyNetworkStatistics(_)));
        assert_eq!(
            err.info().context.get("statistic"),
            Some(&"degree-distribution".to_string())
        );
        assert!(matches!(
            network.average_degree(),
            Err(NetError::EmptyNetworkStatistics(_))
        ));
    }
}
