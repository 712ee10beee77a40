use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::error::{Error, Result};

/// Numeric edge label usable as a path cost.
///
/// Implementations must treat the default value as zero and report whether a
/// label is acceptable as an edge weight (non-negative).
pub trait Weight: Copy + Default + PartialOrd + fmt::Debug {
    /// Whether this value may be stored as an edge weight.
    fn is_valid_weight(&self) -> bool;

    /// Sum of two costs. Integer labels saturate at their maximum instead of
    /// overflowing.
    fn add_cost(self, other: Self) -> Self;

    /// Total ordering used by the priority queue.
    fn cmp_cost(&self, other: &Self) -> Ordering;

    /// Lossy conversion used for error reporting and summaries.
    fn as_f64(&self) -> f64;
}

impl Weight for f64 {
    fn is_valid_weight(&self) -> bool {
        *self >= 0.0
    }

    fn add_cost(self, other: Self) -> Self {
        self + other
    }

    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn as_f64(&self) -> f64 {
        *self
    }
}

impl Weight for f32 {
    fn is_valid_weight(&self) -> bool {
        *self >= 0.0
    }

    fn add_cost(self, other: Self) -> Self {
        self + other
    }

    fn cmp_cost(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    fn as_f64(&self) -> f64 {
        f64::from(*self)
    }
}

macro_rules! integer_weight {
    ($($ty:ty),*) => {
        $(
            impl Weight for $ty {
                #[allow(unused_comparisons)]
                fn is_valid_weight(&self) -> bool {
                    *self >= 0
                }

                fn add_cost(self, other: Self) -> Self {
                    <$ty>::saturating_add(self, other)
                }

                fn cmp_cost(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }

                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

integer_weight!(u32, u64, usize, i32, i64);

/// Outgoing edge stored in a parent's adjacency list.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<N, L> {
    pub child: N,
    pub label: L,
}

/// Directed graph with labelled edges keyed by node value.
///
/// Nodes and each node's outgoing edges keep their insertion order, which
/// makes neighbour enumeration (and therefore shortest-path tie-breaking)
/// reproducible. Parallel edges between the same pair of nodes are kept.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N, L> {
    adjacency: HashMap<N, Vec<Edge<N, L>>>,
    order: Vec<N>,
    edge_count: usize,
}

impl<N, L> Default for WeightedGraph<N, L> {
    fn default() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<N, L> WeightedGraph<N, L>
where
    N: Clone + Eq + Hash,
    L: Weight,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` if it is not already present.
    ///
    /// Returns `true` when the node was newly added.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.order.push(node.clone());
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Append an edge from `parent` to `child`.
    ///
    /// Both endpoints must already be present and the label must be a valid
    /// (non-negative) weight. Identical edges are not deduplicated.
    pub fn add_edge(&mut self, parent: &N, child: N, label: L) -> Result<()> {
        if !label.is_valid_weight() {
            return Err(Error::InvalidWeight {
                weight: label.as_f64(),
            });
        }
        if !self.adjacency.contains_key(&child) {
            return Err(Error::InvalidEdge { endpoint: "child" });
        }
        let edges = self
            .adjacency
            .get_mut(parent)
            .ok_or(Error::InvalidEdge { endpoint: "parent" })?;
        edges.push(Edge { child, label });
        self.edge_count += 1;
        Ok(())
    }

    /// Whether `node` has been added to the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Return the outgoing edges of `node` in insertion order.
    ///
    /// Absent nodes and nodes without outgoing edges both yield an empty
    /// slice; use [`WeightedGraph::contains_node`] to tell them apart.
    pub fn neighbours(&self, node: &N) -> &[Edge<N, L>] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
