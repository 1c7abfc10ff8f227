use sha2::{Digest, Sha256};

use crate::config::{InitialLinking, MultiEdgePolicy, NetworkConfig};
use crate::network::Network;

/// Computes the canonical structural hash for the provided network.
///
/// Edge insertion order and orientation do not affect the digest; parallel
/// edges do.
pub fn canonical_hash(network: &Network) -> String {
    let mut hasher = Sha256::new();
    encode_config(network.config(), &mut hasher);

    hasher.update((network.node_count() as u64).to_le_bytes());
    for node in network.nodes() {
        hasher.update(node.label().as_raw().to_le_bytes());
    }

    let mut pairs: Vec<(u64, u64)> = network
        .edges()
        .iter()
        .map(|edge| {
            let (a, b) = edge.unordered();
            (a.as_raw(), b.as_raw())
        })
        .collect();
    pairs.sort_unstable();
    hasher.update((pairs.len() as u64).to_le_bytes());
    for (a, b) in pairs {
        hasher.update(a.to_le_bytes());
        hasher.update(b.to_le_bytes());
    }

    format!("{:x}", hasher.finalize())
}

fn encode_config(config: &NetworkConfig, hasher: &mut Sha256) {
    hasher.update(b"m0");
    hasher.update((config.initial_nodes as u64).to_le_bytes());
    match config.initial_linking {
        InitialLinking::Path => hasher.update(b"linking:path"),
        InitialLinking::Isolated => hasher.update(b"linking:isolated"),
    }
    match config.multi_edges {
        MultiEdgePolicy::Allow => hasher.update(b"multi:allow"),
        MultiEdgePolicy::Reject => hasher.update(b"multi:reject"),
    }
    hasher.update(config.schema_version.major.to_le_bytes());
    hasher.update(config.schema_version.minor.to_le_bytes());
    hasher.update(config.schema_version.patch.to_le_bytes());
}
