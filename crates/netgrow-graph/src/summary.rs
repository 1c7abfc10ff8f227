use netgrow_core::errors::{ErrorInfo, NetError};
use netgrow_core::provenance::SchemaVersion;
use netgrow_core::{AverageDegreeHistory, DegreeDistribution, GrowthStatistics};
use serde::{Deserialize, Serialize};

use crate::hash::canonical_hash;
use crate::network::Network;

/// Serializable snapshot of a finished network's statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSummary {
    /// Schema version of the summary payload.
    pub schema_version: SchemaVersion,
    /// Initial node count of the network.
    pub m0: usize,
    /// Seed of the RNG substream the network was grown with.
    pub seed: u64,
    /// Node count at the time of the snapshot.
    pub node_count: usize,
    /// Edge count at the time of the snapshot.
    pub edge_count: usize,
    /// Canonical structural hash of the network.
    pub graph_hash: String,
    /// Exact degree distribution.
    pub degree_distribution: DegreeDistribution,
    /// Exact average degree per time step.
    pub average_degree_history: AverageDegreeHistory,
}

impl NetworkSummary {
    /// Captures the statistics of `network`, grown from `seed`.
    pub fn from_network(network: &Network, seed: u64) -> Result<Self, NetError> {
        Ok(Self {
            schema_version: network.config().schema_version,
            m0: network.m0(),
            seed,
            node_count: network.node_count(),
            edge_count: network.edge_count(),
            graph_hash: canonical_hash(network),
            degree_distribution: network.degree_distribution()?,
            average_degree_history: network.average_degree_history().clone(),
        })
    }

    /// Serializes the summary to a JSON string.
    pub fn to_json(&self) -> Result<String, NetError> {
        serde_json::to_string_pretty(self)
            .map_err(|err| NetError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
    }

    /// Restores a summary from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetError> {
        serde_json::from_str(json)
            .map_err(|err| NetError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))
    }
}

impl GrowthStatistics for NetworkSummary {
    fn m0(&self) -> usize {
        self.m0
    }

    fn degree_distribution(&self) -> Result<DegreeDistribution, NetError> {
        Ok(self.degree_distribution.clone())
    }

    fn average_degree_history(&self) -> &AverageDegreeHistory {
        &self.average_degree_history
    }
}
