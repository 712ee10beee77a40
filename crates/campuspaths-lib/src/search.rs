use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

use tracing::trace;

use crate::graph::{Weight, WeightedGraph};
use crate::path::Path;

/// Find the lowest-cost path from `start` to `destination` with Dijkstra's
/// algorithm.
///
/// Returns `None` when `destination` is unreachable from `start`, including
/// when `start` is not part of the graph. A query whose endpoints are equal
/// always yields the empty, zero-cost path.
///
/// Stale queue entries for already-settled nodes are discarded when popped
/// rather than decreased in place. Paths of equal cost are expanded in the
/// order they were discovered, so results are reproducible for a given graph.
pub fn find_path<N, L>(
    graph: &WeightedGraph<N, L>,
    start: &N,
    destination: &N,
) -> Option<Path<N, L>>
where
    N: Clone + Eq + Hash,
    L: Weight,
{
    if start == destination {
        return Some(Path::new(start.clone()));
    }
    if !graph.contains_node(start) {
        return None;
    }

    let mut queue = BinaryHeap::new();
    let mut settled: HashSet<N> = HashSet::new();
    let mut sequence = 0u64;

    queue.push(QueueEntry::new(Path::new(start.clone()), sequence));

    while let Some(QueueEntry { path, .. }) = queue.pop() {
        let current = path.end();

        if current == destination {
            trace!(
                settled = settled.len(),
                segments = path.len(),
                "destination reached"
            );
            return Some(path);
        }

        if settled.contains(current) {
            continue;
        }
        settled.insert(current.clone());

        for edge in graph.neighbours(current) {
            if settled.contains(&edge.child) {
                continue;
            }
            sequence += 1;
            queue.push(QueueEntry::new(
                path.extend(edge.child.clone(), edge.label),
                sequence,
            ));
        }
    }

    trace!(settled = settled.len(), "destination unreachable");
    None
}

struct QueueEntry<N, L> {
    path: Path<N, L>,
    sequence: u64,
}

impl<N, L> QueueEntry<N, L> {
    fn new(path: Path<N, L>, sequence: u64) -> Self {
        Self { path, sequence }
    }
}

impl<N: Clone, L: Weight> PartialEq for QueueEntry<N, L> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Clone, L: Weight> Eq for QueueEntry<N, L> {}

impl<N: Clone, L: Weight> Ord for QueueEntry<N, L> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then by
        // discovery order.
        other
            .path
            .cost()
            .cmp_cost(&self.path.cost())
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<N: Clone, L: Weight> PartialOrd for QueueEntry<N, L> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(
        nodes: &[&'static str],
        edges: &[(&'static str, &'static str, f64)],
    ) -> WeightedGraph<&'static str, f64> {
        let mut graph = WeightedGraph::new();
        for node in nodes {
            graph.add_node(*node);
        }
        for (parent, child, weight) in edges {
            graph.add_edge(parent, *child, *weight).unwrap();
        }
        graph
    }

    #[test]
    fn prefers_cheaper_indirect_route() {
        let graph = graph_from(
            &["a", "b", "c"],
            &[("a", "b", 10.0), ("b", "c", 10.0), ("a", "c", 50.0)],
        );
        let path = find_path(&graph, &"a", &"c").expect("route exists");
        assert_eq!(path.cost(), 20.0);
        assert_eq!(path.nodes(), vec!["a", "b", "c"]);
    }

    #[test]
    fn same_start_and_destination_is_empty() {
        let graph = graph_from(&["a", "b"], &[("a", "b", 1.0)]);
        let path = find_path(&graph, &"a", &"a").unwrap();
        assert!(path.is_empty());
        assert_eq!(path.cost(), 0.0);
    }

    #[test]
    fn absent_start_is_unreachable() {
        let graph = graph_from(&["a", "b"], &[("a", "b", 1.0)]);
        assert!(find_path(&graph, &"zz", &"b").is_none());
    }

    #[test]
    fn disconnected_components_are_unreachable() {
        let graph = graph_from(&["p", "q", "r"], &[("p", "r", 1.0), ("r", "p", 1.0)]);
        assert!(find_path(&graph, &"p", &"q").is_none());
    }

    #[test]
    fn edges_are_directed() {
        let graph = graph_from(&["a", "b"], &[("a", "b", 1.0)]);
        assert!(find_path(&graph, &"a", &"b").is_some());
        assert!(find_path(&graph, &"b", &"a").is_none());
    }

    #[test]
    fn cheapest_parallel_edge_is_used() {
        let graph = graph_from(&["a", "b"], &[("a", "b", 9.0), ("a", "b", 4.0)]);
        let path = find_path(&graph, &"a", &"b").unwrap();
        assert_eq!(path.cost(), 4.0);
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn zero_weight_edges_are_allowed() {
        let graph = graph_from(
            &["a", "b", "c"],
            &[("a", "b", 0.0), ("b", "c", 0.0), ("a", "c", 1.0)],
        );
        let path = find_path(&graph, &"a", &"c").unwrap();
        assert_eq!(path.cost(), 0.0);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn equal_cost_ties_follow_insertion_order() {
        let graph = graph_from(
            &["s", "x", "y", "t"],
            &[
                ("s", "x", 1.0),
                ("s", "y", 1.0),
                ("x", "t", 1.0),
                ("y", "t", 1.0),
            ],
        );
        let path = find_path(&graph, &"s", &"t").unwrap();
        assert_eq!(path.nodes(), vec!["s", "x", "t"]);
    }

    #[test]
    fn large_integer_weights_do_not_overflow() {
        let mut graph: WeightedGraph<u8, u32> = WeightedGraph::new();
        for node in 0..3 {
            graph.add_node(node);
        }
        graph.add_edge(&0, 1, 3_000_000_000).unwrap();
        graph.add_edge(&1, 2, 3_000_000_000).unwrap();

        let path = find_path(&graph, &0, &2).unwrap();
        assert_eq!(path.nodes(), vec![0, 1, 2]);
        assert_eq!(path.cost(), u32::MAX);

        graph.add_edge(&0, 2, 4_000_000_000).unwrap();
        let path = find_path(&graph, &0, &2).unwrap();
        assert_eq!(path.nodes(), vec![0, 2]);
        assert_eq!(path.cost(), 4_000_000_000);
    }
}
