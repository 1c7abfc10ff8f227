use netgrow_core::errors::NetError;
use netgrow_core::rng::RngHandle;
use netgrow_core::{Fraction, GrowthStatistics, NodeId};
use netgrow_graph::{MultiEdgePolicy, Network, NetworkConfig};

fn grow(network: &mut Network, count: usize) {
    let mut added = 0;
    while added < count {
        match network.add_node() {
            Ok(_) => added += 1,
            Err(err) if err.is_retryable() => continue,
            Err(err) => panic!("unexpected error: {err}"),
        }
    }
}

#[test]
fn three_additions_to_three_seed_nodes() {
    let mut network = Network::new(3, RngHandle::from_seed(42)).unwrap();
    grow(&mut network, 3);

    assert_eq!(network.node_count(), 6);
    assert_eq!(network.edge_count(), 2 + 3 * 3);
    let history = network.average_degree_history();
    assert_eq!(history.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3]);

    let distribution = network.degree_distribution().unwrap();
    let total: Fraction = distribution.values().copied().sum();
    assert_eq!(total, Fraction::from_integer(1));
    let keys: Vec<usize> = distribution.keys().copied().collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

#[test]
fn added_node_has_exactly_m0_edges() {
    let mut network = Network::new(4, RngHandle::from_seed(9)).unwrap();
    for _ in 0..50 {
        let before = network.edge_count();
        if let Ok(id) = network.add_node() {
            assert_eq!(network.degree(id).unwrap(), 4);
            assert_eq!(network.edge_count(), before + 4);
            for edge in network.node(id).unwrap().edges() {
                let edge = network.edge(*edge).unwrap();
                assert_eq!(edge.node1(), id);
                assert!(!edge.is_self_loop());
            }
        }
    }
}

#[test]
fn explicit_attachment_count_is_honoured() {
    let mut network = Network::new(5, RngHandle::from_seed(10)).unwrap();
    let id = loop {
        match network.add_node_with_attachments(2) {
            Ok(id) => break id,
            Err(err) => assert!(err.is_retryable()),
        }
    };
    assert_eq!(network.degree(id).unwrap(), 2);
    assert_eq!(network.average_degree_history().len(), 2);
}

#[test]
fn zero_attachments_are_rejected() {
    let mut network = Network::new(2, RngHandle::from_seed(11)).unwrap();
    let err = network.add_node_with_attachments(0).unwrap_err();
    assert!(matches!(err, NetError::InvalidConfiguration(_)));
    assert_eq!(network.node_count(), 2);
    assert_eq!(network.t(), 1);

    let err = network.add_random_edges(NodeId::from_raw(0), 0).unwrap_err();
    assert_eq!(err.info().code, "zero-attachments");
}

#[test]
fn random_edges_on_unknown_node_are_rejected() {
    let mut network = Network::new(2, RngHandle::from_seed(12)).unwrap();
    let err = network.add_random_edges(NodeId::from_raw(5), 1).unwrap_err();
    assert_eq!(err.info().code, "unknown-node");
    assert_eq!(network.edge_count(), 1);
}

#[test]
fn random_edges_on_existing_node_skip_the_snapshot() {
    let mut network = Network::new(3, RngHandle::from_seed(13)).unwrap();
    let node = NodeId::from_raw(0);
    let created = loop {
        match network.add_random_edges(node, 2) {
            Ok(created) => break created,
            Err(err) => assert!(err.is_retryable()),
        }
    };
    assert_eq!(created.len(), 2);
    assert_eq!(network.edge_count(), 4);
    assert_eq!(network.t(), 1);
    for id in created {
        let edge = network.edge(id).unwrap();
        assert_eq!(edge.node1(), node);
        assert_ne!(edge.node2(), node);
    }
}

#[test]
fn candidate_shortage_leaves_network_unchanged() {
    let mut failures = 0;
    for seed in 0..200u64 {
        let mut network = Network::new(1, RngHandle::from_seed(seed)).unwrap();
        match network.add_node() {
            Ok(id) => {
                assert_eq!(network.degree(id).unwrap(), 1);
                assert_eq!(network.node_count(), 2);
            }
            Err(NetError::InsufficientCandidates(info)) => {
                failures += 1;
                assert_eq!(info.context.get("label"), Some(&"2".to_string()));
                assert_eq!(network.node_count(), 1);
                assert_eq!(network.edge_count(), 0);
                assert_eq!(network.t(), 1);
                assert_eq!(network.average_degree_history().len(), 1);
                assert_eq!(network.next_label().as_raw(), 2);
            }
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    // Both draws hit the new node with probability 1/4.
    assert!(failures > 0);
}

#[test]
fn reject_policy_never_duplicates_within_one_attachment() {
    let config = NetworkConfig {
        multi_edges: MultiEdgePolicy::Reject,
        ..NetworkConfig::with_initial_nodes(3)
    };
    let mut network = Network::with_config(config, RngHandle::from_seed(14)).unwrap();
    for _ in 0..100 {
        let id = network.add_node().unwrap();
        let mut partners = network.neighbors(id).unwrap();
        partners.sort();
        partners.dedup();
        assert_eq!(partners.len(), 3);
    }
}

#[test]
fn reject_policy_links_a_new_node_to_every_seed_node() {
    // Ten edges among ten seed nodes leave no room for a repeat.
    for seed in 0..50u64 {
        let config = NetworkConfig {
            multi_edges: MultiEdgePolicy::Reject,
            ..NetworkConfig::with_initial_nodes(10)
        };
        let mut network = Network::with_config(config, RngHandle::from_seed(seed)).unwrap();
        let id = network.add_node().unwrap();
        let mut partners = network.neighbors(id).unwrap();
        partners.sort();
        let seeds: Vec<NodeId> = (0..10).map(NodeId::from_raw).collect();
        assert_eq!(partners, seeds);
    }
}

#[test]
fn reject_policy_refuses_more_edges_than_other_nodes() {
    let config = NetworkConfig {
        multi_edges: MultiEdgePolicy::Reject,
        ..NetworkConfig::with_initial_nodes(4)
    };
    let mut network = Network::with_config(config, RngHandle::from_seed(3)).unwrap();
    let node = NodeId::from_raw(0);
    let edges_before = network.edge_count();
    let err = network.add_random_edges(node, 4).unwrap_err();
    assert!(matches!(err, NetError::InvalidConfiguration(_)));
    assert_eq!(network.edge_count(), edges_before);
    assert_eq!(network.add_random_edges(node, 3).unwrap().len(), 3);
}

#[test]
fn same_seed_grows_same_network() {
    let mut a = Network::new(3, RngHandle::from_seed(77)).unwrap();
    let mut b = Network::new(3, RngHandle::from_seed(77)).unwrap();
    grow(&mut a, 40);
    grow(&mut b, 40);
    assert_eq!(netgrow_graph::canonical_hash(&a), netgrow_graph::canonical_hash(&b));
    assert_eq!(a.average_degree_history(), b.average_degree_history());
    assert_eq!(
        GrowthStatistics::degree_distribution(&a).unwrap(),
        b.degree_distribution().unwrap()
    );
}
