#![deny(missing_docs)]
#![doc = "Core identifiers, error surface and statistics contract for the netgrow engine."]

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod provenance;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, NetError};
pub use provenance::{RunProvenance, SchemaVersion};
pub use rng::{derive_substream_seed, RngHandle};
pub use types::{fraction_to_f64, AverageDegreeHistory, DegreeDistribution, Fraction};

/// Arena index of a node within one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(u64);

impl NodeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Arena index of an edge within one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EdgeId(u64);

impl EdgeId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

/// User-visible identity of a node. Labels start at 1 and are never reused
/// by a live node of the same network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeLabel(u64);

impl NodeLabel {
    /// The label given to the first node of every network.
    pub const FIRST: NodeLabel = NodeLabel(1);

    /// Creates a label from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the label.
    pub fn as_raw(&self) -> u64 {
        self.0
    }

    /// Returns the label that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl Display for NodeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read-only statistics a reporting collaborator needs from a grown network.
pub trait GrowthStatistics {
    /// Initial node count, also the attachment count of every later node.
    fn m0(&self) -> usize;

    /// Fraction of nodes per degree value, ascending by degree.
    fn degree_distribution(&self) -> Result<DegreeDistribution, NetError>;

    /// Average degree recorded at every growth step, ascending by time.
    fn average_degree_history(&self) -> &AverageDegreeHistory;
}
