//! Edge of the hypercube.

use serde::{Deserialize, Serialize};

use super::VertexId;

/// An undirected edge, stored canonically with `low < high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub low: VertexId,
    pub high: VertexId,
}

impl Edge {
    /// The edge between `u` and `v`, or `None` when they are not at Hamming
    /// distance one.
    pub fn between(u: VertexId, v: VertexId) -> Option<Self> {
        if u.distance(v) != 1 {
            return None;
        }
        let (low, high) = if u < v { (u, v) } else { (v, u) };
        Some(Self { low, high })
    }

    /// The coordinate along which the endpoints differ.
    pub fn axis(&self) -> usize {
        (self.low.0 ^ self.high.0).trailing_zeros() as usize
    }

    pub fn contains(&self, v: VertexId) -> bool {
        self.low == v || self.high == v
    }

    /// The other endpoint, seen from `from`.
    pub fn other(&self, from: VertexId) -> Option<VertexId> {
        if from == self.low { Some(self.high) }
        else if from == self.high { Some(self.low) }
        else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_between_is_canonical() {
        let e = Edge::between(VertexId(3), VertexId(1)).unwrap();
        assert_eq!(e.low, VertexId(1));
        assert_eq!(e.high, VertexId(3));
        assert_eq!(e.axis(), 1);
    }

    #[test]
    fn test_between_rejects_non_adjacent() {
        assert!(Edge::between(VertexId(0), VertexId(3)).is_none());
        assert!(Edge::between(VertexId(2), VertexId(2)).is_none());
    }

    #[test]
    fn test_other_endpoint() {
        let e = Edge::between(VertexId(4), VertexId(6)).unwrap();
        assert_eq!(e.other(VertexId(4)), Some(VertexId(6)));
        assert_eq!(e.other(VertexId(6)), Some(VertexId(4)));
        assert_eq!(e.other(VertexId(0)), None);
    }
}
