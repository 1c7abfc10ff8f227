use netgrow_core::provenance::SchemaVersion;
use netgrow_core::NetError;
use serde::{Deserialize, Serialize};

/// Configuration options that control how a [`Network`](crate::Network) is seeded and grown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Number of initial nodes (m0), also the attachment count of later nodes.
    pub initial_nodes: usize,
    /// How the initial nodes are linked together.
    #[serde(default)]
    pub initial_linking: InitialLinking,
    /// Whether one attachment may link the new node twice to the same node.
    #[serde(default)]
    pub multi_edges: MultiEdgePolicy,
    /// Schema version stored alongside serialized summaries.
    #[serde(default = "default_schema_version")]
    pub schema_version: SchemaVersion,
}

fn default_schema_version() -> SchemaVersion {
    SchemaVersion::new(1, 0, 0)
}

impl NetworkConfig {
    /// Creates the default configuration for `initial_nodes` seed nodes.
    pub fn with_initial_nodes(initial_nodes: usize) -> Self {
        Self {
            initial_nodes,
            initial_linking: InitialLinking::default(),
            multi_edges: MultiEdgePolicy::default(),
            schema_version: default_schema_version(),
        }
    }

    /// Rejects configurations that cannot seed a network.
    pub fn validate(&self) -> Result<(), NetError> {
        if self.initial_nodes == 0 {
            return Err(NetError::invalid(
                "zero-initial-nodes",
                "a network requires at least one initial node",
            ));
        }
        Ok(())
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self::with_initial_nodes(1)
    }
}

/// Topology created between the initial nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InitialLinking {
    /// Every initial node is linked to its predecessor, giving `m0 - 1` edges.
    #[default]
    Path,
    /// No initial edges; seed nodes only gain edges when later nodes pick them.
    Isolated,
}

/// Treatment of a candidate drawn more than once during one attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MultiEdgePolicy {
    /// Repeated candidates produce parallel edges.
    #[default]
    Allow,
    /// Repeated candidates are skipped in favour of the next one.
    Reject,
}
