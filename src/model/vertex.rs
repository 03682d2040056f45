//! Vertex of the hypercube.

use serde::{Deserialize, Serialize};

use super::{bits, Dimension};

/// A vertex label in `0..2^n`. Bit `i` is coordinate (axis) `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u32);

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl VertexId {
    /// Coordinate `axis` of this vertex.
    pub fn bit(self, axis: usize) -> bool {
        (self.0 >> axis) & 1 == 1
    }

    /// Number of coordinates equal to one.
    pub fn weight(self) -> u32 {
        self.0.count_ones()
    }

    /// Hamming distance to `other`.
    pub fn distance(self, other: VertexId) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    pub fn is_in(self, dim: Dimension) -> bool {
        self.0 < dim.vertex_count()
    }

    /// The label as it is printed: `n` bits, most significant first.
    pub fn bit_string(self, dim: Dimension) -> String {
        bits::to_bit_string(self.0, dim)
    }
}

impl From<u32> for VertexId {
    fn from(label: u32) -> Self {
        Self(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_and_weight() {
        let v = VertexId(0b1011);
        assert!(v.bit(0) && v.bit(1) && !v.bit(2) && v.bit(3));
        assert_eq!(v.weight(), 3);
        assert_eq!(v.distance(VertexId(0b0010)), 2);
    }

    #[test]
    fn test_bit_string() {
        let dim = Dimension::new(4).unwrap();
        assert_eq!(VertexId(3).bit_string(dim), "0011");
        assert!(VertexId(15).is_in(dim));
        assert!(!VertexId(16).is_in(dim));
    }
}
