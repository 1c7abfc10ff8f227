#![deny(missing_docs)]

//! Random network growth engine implementing the `netgrow-core` contracts.
//!
//! A [`Network`] starts with `m0` nodes; every added node is linked to `m0`
//! existing nodes drawn uniformly at random, and the average degree is
//! recorded after each step.

mod attachment;
pub mod batch;
mod config;
mod edge;
mod hash;
mod ids;
mod network;
mod node;
mod summary;

pub use batch::{grow_batch, grow_network, BatchOutcome, GrowthPlan, GrownNetwork, PlanLimits};
pub use config::{InitialLinking, MultiEdgePolicy, NetworkConfig};
pub use edge::Edge;
pub use hash::canonical_hash;
pub use network::Network;
pub use node::Node;
pub use summary::NetworkSummary;
