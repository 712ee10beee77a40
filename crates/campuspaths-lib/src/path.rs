use std::sync::Arc;

use crate::graph::Weight;

/// Directed hop from `start` to `end` within a [`Path`].
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<N, L> {
    pub start: N,
    pub end: N,
    /// Weight of this single hop.
    pub cost: L,
    /// Cost of the path from its origin up to and including this hop.
    pub cumulative: L,
}

#[derive(Debug)]
struct Link<N, L> {
    segment: Segment<N, L>,
    previous: Option<Arc<Link<N, L>>>,
}

/// Immutable route accumulated from an origin node.
///
/// Paths only grow through [`Path::extend`], which returns a new value and
/// leaves the receiver untouched. Extensions share their common prefix, so
/// cloning a path or holding many of its descendants in a queue is cheap.
#[derive(Debug, Clone)]
pub struct Path<N, L = f64> {
    origin: N,
    last: Option<Arc<Link<N, L>>>,
    cost: L,
    len: usize,
}

impl<N, L> Path<N, L>
where
    N: Clone,
    L: Weight,
{
    /// Zero-length path that starts and ends at `origin`.
    pub fn new(origin: N) -> Self {
        Self {
            origin,
            last: None,
            cost: L::default(),
            len: 0,
        }
    }

    /// Total cost of all segments.
    pub fn cost(&self) -> L {
        self.cost
    }

    /// Node the path starts from.
    pub fn start(&self) -> &N {
        &self.origin
    }

    /// Current terminal node, or the origin when no segments exist yet.
    pub fn end(&self) -> &N {
        match &self.last {
            Some(link) => &link.segment.end,
            None => &self.origin,
        }
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return a new path with one more segment from the current end to `next`.
    pub fn extend(&self, next: N, cost: L) -> Self {
        let cumulative = self.cost.add_cost(cost);
        let segment = Segment {
            start: self.end().clone(),
            end: next,
            cost,
            cumulative,
        };
        Self {
            origin: self.origin.clone(),
            last: Some(Arc::new(Link {
                segment,
                previous: self.last.clone(),
            })),
            cost: cumulative,
            len: self.len + 1,
        }
    }

    /// Segments in traversal order, origin first.
    pub fn segments(&self) -> Vec<Segment<N, L>> {
        let mut segments = Vec::with_capacity(self.len);
        let mut current = self.last.as_deref();
        while let Some(link) = current {
            segments.push(link.segment.clone());
            current = link.previous.as_deref();
        }
        segments.reverse();
        segments
    }

    /// Nodes visited in order, including the origin.
    pub fn nodes(&self) -> Vec<N> {
        let mut nodes = Vec::with_capacity(self.len + 1);
        nodes.push(self.origin.clone());
        nodes.extend(self.segments().into_iter().map(|segment| segment.end));
        nodes
    }
}

impl<N, L> Drop for Path<N, L> {
    fn drop(&mut self) {
        // Unlink uniquely owned tails iteratively so long paths do not
        // overflow the stack through recursive Arc drops.
        let mut next = self.last.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut owned) => next = owned.previous.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_path_is_empty_at_origin() {
        let path: Path<&str> = Path::new("a");
        assert!(path.is_empty());
        assert_eq!(path.cost(), 0.0);
        assert_eq!(*path.end(), "a");
        assert!(path.segments().is_empty());
        assert_eq!(path.nodes(), vec!["a"]);
    }

    #[test]
    fn extend_appends_segment_and_cost() {
        let path = Path::new("a").extend("b", 2.5).extend("c", 1.5);
        assert_eq!(path.len(), 2);
        assert_eq!(path.cost(), 4.0);
        assert_eq!(*path.start(), "a");
        assert_eq!(*path.end(), "c");

        let segments = path.segments();
        assert_eq!(
            segments,
            vec![
                Segment {
                    start: "a",
                    end: "b",
                    cost: 2.5,
                    cumulative: 2.5
                },
                Segment {
                    start: "b",
                    end: "c",
                    cost: 1.5,
                    cumulative: 4.0
                },
            ]
        );
    }

    #[test]
    fn extend_does_not_mutate_receiver() {
        let base = Path::new("a").extend("b", 1.0);
        let left = base.extend("c", 5.0);
        let right = base.extend("d", 7.0);

        assert_eq!(base.cost(), 1.0);
        assert_eq!(base.len(), 1);
        assert_eq!(*base.end(), "b");

        assert_eq!(left.cost(), 6.0);
        assert_eq!(*left.end(), "c");
        assert_eq!(right.cost(), 8.0);
        assert_eq!(*right.end(), "d");
        assert_eq!(left.nodes(), vec!["a", "b", "c"]);
        assert_eq!(right.nodes(), vec!["a", "b", "d"]);
    }

    #[test]
    fn segments_form_connected_walk() {
        let mut path = Path::new(0u32);
        for next in 1..20u32 {
            path = path.extend(next, 1u32);
        }
        let segments = path.segments();
        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(segments.first().map(|s| s.start), Some(0));
        assert_eq!(segments.last().map(|s| s.end), Some(19));
    }

    #[test]
    fn integer_costs_saturate() {
        let path = Path::new(0u8)
            .extend(1, 3_000_000_000u32)
            .extend(2, 3_000_000_000);
        assert_eq!(path.cost(), u32::MAX);
        assert_eq!(path.segments()[1].cumulative, u32::MAX);
    }

    #[test]
    fn dropping_long_path_does_not_overflow() {
        let mut path = Path::new(0usize);
        for next in 1..200_000usize {
            path = path.extend(next, 1usize);
        }
        assert_eq!(path.cost(), 199_999);
        drop(path);
    }
}
