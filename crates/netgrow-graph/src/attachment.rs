use netgrow_core::errors::{ErrorInfo, NetError};
use netgrow_core::rng::RngHandle;
use netgrow_core::NodeId;
use rand::Rng;

use crate::config::MultiEdgePolicy;
use crate::ids::make_node;

/// Draws `draws` node ids uniformly, with replacement, from `population` nodes.
pub(crate) fn draw_candidates(population: usize, draws: usize, rng: &mut RngHandle) -> Vec<NodeId> {
    (0..draws)
        .map(|_| make_node(rng.gen_range(0..population)))
        .collect()
}

/// Removes the first occurrence of `node` from `candidates`, if any.
///
/// Returns whether an entry was removed. Later occurrences are left in place.
pub(crate) fn remove_first(candidates: &mut Vec<NodeId>, node: NodeId) -> bool {
    match candidates.iter().position(|candidate| *candidate == node) {
        Some(position) => {
            candidates.remove(position);
            true
        }
        None => false,
    }
}

/// Chooses the `count` partners of `node` without mutating anything.
///
/// Draws `count + 1` candidates so that one self draw is absorbed, drops the
/// first self occurrence, then takes candidates front to back, skipping any
/// remaining self draw. Under [`MultiEdgePolicy::Allow`] this fails when fewer
/// than `count` usable candidates remain. Under [`MultiEdgePolicy::Reject`]
/// already chosen candidates are skipped too and replacements are drawn until
/// `count` distinct partners are found.
pub(crate) fn plan_attachment(
    node: NodeId,
    count: usize,
    population: usize,
    policy: MultiEdgePolicy,
    rng: &mut RngHandle,
) -> Result<Vec<NodeId>, NetError> {
    match policy {
        MultiEdgePolicy::Allow => plan_with_repeats(node, count, population, rng),
        MultiEdgePolicy::Reject => plan_distinct(node, count, population, rng),
    }
}

fn plan_with_repeats(
    node: NodeId,
    count: usize,
    population: usize,
    rng: &mut RngHandle,
) -> Result<Vec<NodeId>, NetError> {
    let mut candidates = draw_candidates(population, count + 1, rng);
    remove_first(&mut candidates, node);

    let chosen: Vec<NodeId> = candidates
        .into_iter()
        .filter(|candidate| *candidate != node)
        .take(count)
        .collect();

    if chosen.len() < count {
        return Err(NetError::InsufficientCandidates(
            ErrorInfo::new(
                "insufficient-candidates",
                "random draw left fewer usable candidates than requested edges",
            )
            .with_context("requested", count)
            .with_context("usable", chosen.len())
            .with_context("population", population)
            .with_hint("retry the add_node call; the network is unchanged"),
        ));
    }
    Ok(chosen)
}

fn plan_distinct(
    node: NodeId,
    count: usize,
    population: usize,
    rng: &mut RngHandle,
) -> Result<Vec<NodeId>, NetError> {
    let available = population.saturating_sub(1);
    if count > available {
        return Err(NetError::InvalidConfiguration(
            ErrorInfo::new(
                "too-many-attachments",
                "distinct attachment requests more partners than other nodes exist",
            )
            .with_context("requested", count)
            .with_context("available", available),
        ));
    }

    let mut candidates = draw_candidates(population, count + 1, rng);
    remove_first(&mut candidates, node);
    let mut pending = candidates.into_iter();

    let mut chosen: Vec<NodeId> = Vec::with_capacity(count);
    while chosen.len() < count {
        let candidate = pending
            .next()
            .unwrap_or_else(|| make_node(rng.gen_range(0..population)));
        if candidate == node || chosen.contains(&candidate) {
            continue;
        }
        chosen.push(candidate);
    }
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_first_keeps_later_duplicates() {
        let a = NodeId::from_raw(1);
        let b = NodeId::from_raw(2);
        let mut candidates = vec![b, a, b, a];
        assert!(remove_first(&mut candidates, a));
        assert_eq!(candidates, vec![b, b, a]);
        assert!(!remove_first(&mut candidates, NodeId::from_raw(9)));
        assert_eq!(candidates.len(), 3);
    }

    #[test]
    fn plan_never_contains_the_node_itself() {
        let mut rng = RngHandle::from_seed(11);
        let node = NodeId::from_raw(0);
        for _ in 0..200 {
            match plan_attachment(node, 1, 2, MultiEdgePolicy::Allow, &mut rng) {
                Ok(plan) => assert_eq!(plan, vec![NodeId::from_raw(1)]),
                Err(err) => assert!(err.is_retryable()),
            }
        }
    }

    #[test]
    fn single_node_population_cannot_attach() {
        let mut rng = RngHandle::from_seed(3);
        let err = plan_attachment(NodeId::from_raw(0), 1, 1, MultiEdgePolicy::Allow, &mut rng)
            .unwrap_err();
        assert_eq!(err.info().code, "insufficient-candidates");
        assert_eq!(err.info().context.get("usable"), Some(&"0".to_string()));
    }

    #[test]
    fn reject_policy_yields_distinct_partners() {
        let mut rng = RngHandle::from_seed(5);
        let node = NodeId::from_raw(0);
        for _ in 0..200 {
            let mut plan = plan_attachment(node, 2, 4, MultiEdgePolicy::Reject, &mut rng).unwrap();
            plan.sort();
            plan.dedup();
            assert_eq!(plan.len(), 2);
            assert!(!plan.contains(&node));
        }
    }

    #[test]
    fn reject_policy_fills_every_other_node() {
        let mut rng = RngHandle::from_seed(8);
        let node = NodeId::from_raw(10);
        for _ in 0..50 {
            let mut plan =
                plan_attachment(node, 10, 11, MultiEdgePolicy::Reject, &mut rng).unwrap();
            plan.sort();
            let expected: Vec<NodeId> = (0..10).map(NodeId::from_raw).collect();
            assert_eq!(plan, expected);
        }
    }

    #[test]
    fn reject_policy_refuses_impossible_requests() {
        let mut rng = RngHandle::from_seed(9);
        let err = plan_attachment(NodeId::from_raw(0), 4, 4, MultiEdgePolicy::Reject, &mut rng)
            .unwrap_err();
        assert!(matches!(err, NetError::InvalidConfiguration(_)));
        assert_eq!(err.info().code, "too-many-attachments");
        assert!(!err.is_retryable());
    }
}
