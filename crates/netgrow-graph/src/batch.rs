//! Batch driver: grows one network per requested initial size.

use std::time::{Duration, Instant};

use log::{info, warn};
use netgrow_core::errors::{ErrorInfo, NetError};
use netgrow_core::rng::{derive_substream_seed, RngHandle};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::{InitialLinking, MultiEdgePolicy, NetworkConfig};
use crate::network::Network;
use crate::summary::NetworkSummary;

/// YAML-configurable description of a batch of growth runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPlan {
    /// Initial node count (m0) of every network to grow.
    pub initial_sizes: Vec<usize>,
    /// Number of nodes added to each network after seeding.
    pub nodes_added: usize,
    /// Initial topology shared by all networks.
    #[serde(default)]
    pub initial_linking: InitialLinking,
    /// Multi-edge policy shared by all networks.
    #[serde(default)]
    pub multi_edges: MultiEdgePolicy,
    /// Attempts per added node before a candidate shortage aborts the run.
    #[serde(default = "default_max_attempts")]
    pub max_attempts_per_node: usize,
    /// Accepted parameter ranges.
    #[serde(default)]
    pub limits: PlanLimits,
}

fn default_max_attempts() -> usize {
    64
}

/// Parameter ranges a plan must respect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLimits {
    /// Maximum number of networks in one batch (one plot style each).
    #[serde(default = "default_max_networks")]
    pub max_networks: usize,
    /// Smallest accepted `nodes_added`.
    #[serde(default = "default_min_nodes_added")]
    pub min_nodes_added: usize,
    /// Largest accepted `nodes_added`.
    #[serde(default = "default_max_nodes_added")]
    pub max_nodes_added: usize,
}

fn default_max_networks() -> usize {
    7
}

fn default_min_nodes_added() -> usize {
    1000
}

fn default_max_nodes_added() -> usize {
    10_000
}

impl Default for PlanLimits {
    fn default() -> Self {
        Self {
            max_networks: default_max_networks(),
            min_nodes_added: default_min_nodes_added(),
            max_nodes_added: default_max_nodes_added(),
        }
    }
}

impl GrowthPlan {
    /// Creates a plan with default options and limits.
    pub fn new(initial_sizes: Vec<usize>, nodes_added: usize) -> Self {
        Self {
            initial_sizes,
            nodes_added,
            initial_linking: InitialLinking::default(),
            multi_edges: MultiEdgePolicy::default(),
            max_attempts_per_node: default_max_attempts(),
            limits: PlanLimits::default(),
        }
    }

    /// Parses a plan from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, NetError> {
        serde_yaml::from_str(text)
            .map_err(|err| NetError::Serde(ErrorInfo::new("deserialize-yaml", err.to_string())))
    }

    /// Checks the plan against its limits.
    pub fn validate(&self) -> Result<(), NetError> {
        if self.initial_sizes.is_empty() {
            return Err(NetError::invalid(
                "no-networks",
                "plan must request at least one network",
            ));
        }
        if self.initial_sizes.len() > self.limits.max_networks {
            return Err(
                NetError::invalid("too-many-networks", "plan requests too many networks")
                    .with_context("requested", self.initial_sizes.len())
                    .with_context("max", self.limits.max_networks),
            );
        }
        if let Some(position) = self.initial_sizes.iter().position(|size| *size == 0) {
            return Err(NetError::invalid(
                "zero-initial-nodes",
                "every network requires at least one initial node",
            )
            .with_context("position", position));
        }
        if self.nodes_added < self.limits.min_nodes_added
            || self.nodes_added > self.limits.max_nodes_added
        {
            return Err(NetError::InvalidConfiguration(
                ErrorInfo::new("nodes-added-out-of-range", "nodes_added outside accepted range")
                    .with_context("nodes_added", self.nodes_added)
                    .with_context("min", self.limits.min_nodes_added)
                    .with_context("max", self.limits.max_nodes_added),
            ));
        }
        if self.max_attempts_per_node == 0 {
            return Err(NetError::invalid(
                "zero-attempts",
                "max_attempts_per_node must be positive",
            ));
        }
        Ok(())
    }

    /// Distinct initial sizes in ascending order. Repeated sizes are dropped.
    pub fn normalized_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = Vec::with_capacity(self.initial_sizes.len());
        for size in &self.initial_sizes {
            if sizes.contains(size) {
                warn!("{size} is already planned to be grown, ignoring it");
            } else {
                sizes.push(*size);
            }
        }
        sizes.sort_unstable();
        sizes
    }

    /// Network configuration for the run seeded with `m0` nodes.
    pub fn network_config(&self, m0: usize) -> NetworkConfig {
        NetworkConfig {
            initial_linking: self.initial_linking,
            multi_edges: self.multi_edges,
            ..NetworkConfig::with_initial_nodes(m0)
        }
    }

    /// Stable hexadecimal digest of the plan.
    pub fn plan_hash(&self) -> Result<String, NetError> {
        let bytes = serde_json::to_vec(self)
            .map_err(|err| NetError::Serde(ErrorInfo::new("serialize-json", err.to_string())))?;
        Ok(format!("{:x}", Sha256::digest(bytes)))
    }
}

/// A network grown by the batch driver together with run metadata.
#[derive(Debug, Clone)]
pub struct GrownNetwork {
    /// The finished network.
    pub network: Network,
    /// Seed of the RNG substream the network used.
    pub seed: u64,
    /// Number of `add_node` calls that had to be repeated.
    pub retries: usize,
    /// Wall-clock time spent growing the network.
    pub elapsed: Duration,
}

/// Result of [`grow_batch`].
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Finished runs ordered by ascending m0.
    pub runs: Vec<GrownNetwork>,
    /// Wall-clock time for the whole batch.
    pub elapsed: Duration,
}

impl BatchOutcome {
    /// Statistics snapshots of every run, in run order.
    pub fn summaries(&self) -> Result<Vec<NetworkSummary>, NetError> {
        self.runs
            .iter()
            .map(|run| NetworkSummary::from_network(&run.network, run.seed))
            .collect()
    }
}

/// Seeds a network and adds `nodes_added` nodes to it.
///
/// An `add_node` call failing on a candidate shortage is repeated up to
/// `max_attempts` times in total; any other failure aborts immediately.
/// Returns the network and the number of repeated calls.
pub fn grow_network(
    config: NetworkConfig,
    nodes_added: usize,
    max_attempts: usize,
    rng: RngHandle,
) -> Result<(Network, usize), NetError> {
    let mut network = Network::with_config(config, rng)?;
    let mut retries = 0usize;
    for _ in 0..nodes_added {
        let mut attempt = 0usize;
        loop {
            attempt += 1;
            match network.add_node() {
                Ok(_) => break,
                Err(err) if err.is_retryable() && attempt < max_attempts => retries += 1,
                Err(err) => return Err(err.with_context("attempts", attempt)),
            }
        }
    }
    Ok((network, retries))
}

/// Grows every network of `plan`, sequentially, from `master_seed`.
///
/// Each network draws from the substream keyed by its m0, so a network's
/// result does not depend on which other sizes the plan contains.
pub fn grow_batch(plan: &GrowthPlan, master_seed: u64) -> Result<BatchOutcome, NetError> {
    plan.validate()?;
    let batch_start = Instant::now();
    let mut runs = Vec::new();
    for m0 in plan.normalized_sizes() {
        let seed = derive_substream_seed(master_seed, m0 as u64);
        let start = Instant::now();
        let (network, retries) = grow_network(
            plan.network_config(m0),
            plan.nodes_added,
            plan.max_attempts_per_node,
            RngHandle::from_seed(seed),
        )
        .map_err(|err| err.with_context("m0", m0))?;
        let elapsed = start.elapsed();
        info!(
            "grew network m0={m0}: {} nodes, {} edges, {retries} retries in {:.3}s",
            network.node_count(),
            network.edge_count(),
            elapsed.as_secs_f64()
        );
        runs.push(GrownNetwork {
            network,
            seed,
            retries,
            elapsed,
        });
    }
    Ok(BatchOutcome {
        runs,
        elapsed: batch_start.elapsed(),
    })
}
