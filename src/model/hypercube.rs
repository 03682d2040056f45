//! The hypercube graph Qn.

use serde::{Deserialize, Serialize};

use super::{Dimension, Edge, VertexId};
use crate::automorphism::Automorphism;
use crate::{Error, Result};

/// Vertex and edge set of Qn. Built once per dimension, immutable after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hypercube {
    dimension: Dimension,
    /// Canonical edges, sorted by `(low, high)`.
    edges: Vec<Edge>,
}

impl Hypercube {
    /// Build Qn: labels `0..2^n`, an edge between every pair of labels at
    /// Hamming distance one.
    pub fn build(dimension: Dimension) -> Self {
        let n = dimension.as_usize();
        let mut edges = Vec::with_capacity(n << n.saturating_sub(1));
        for low in 0..dimension.vertex_count() {
            for axis in 0..n {
                let high = low | (1 << axis);
                if high != low {
                    edges.push(Edge { low: VertexId(low), high: VertexId(high) });
                }
            }
        }
        edges.sort();
        Self { dimension, edges }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn vertex_count(&self) -> u32 {
        self.dimension.vertex_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        (0..self.dimension.vertex_count()).map(VertexId)
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Fail with `VertexOutOfRange` unless `v` is a vertex of this cube.
    pub fn check_vertex(&self, v: VertexId) -> Result<()> {
        if !v.is_in(self.dimension) {
            return Err(Error::VertexOutOfRange { vertex: v.0, dimension: self.dimension.get() });
        }
        Ok(())
    }

    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        u.is_in(self.dimension) && v.is_in(self.dimension) && u.distance(v) == 1
    }

    /// Neighbours of `v`, ordered by axis.
    pub fn neighbors(&self, v: VertexId) -> Result<Vec<VertexId>> {
        self.check_vertex(v)?;
        Ok((0..self.dimension.as_usize()).map(|axis| VertexId(v.0 ^ (1 << axis))).collect())
    }

    /// Edges of the subgraph induced by `vertices`.
    pub fn induced_edges(&self, vertices: &[VertexId]) -> Vec<Edge> {
        let mut inside = vec![false; self.dimension.vertex_count() as usize];
        for v in vertices.iter().filter(|v| v.is_in(self.dimension)) {
            inside[v.0 as usize] = true;
        }
        self.edges
            .iter()
            .filter(|e| inside[e.low.0 as usize] && inside[e.high.0 as usize])
            .copied()
            .collect()
    }

    /// The label displayed at every position once `automorphism` is applied:
    /// entry `p` is `automorphism(p)`.
    pub fn labeling(&self, automorphism: &Automorphism) -> Result<Vec<VertexId>> {
        self.dimension.ensure_same(automorphism.dimension())?;
        Ok(automorphism.vertex_permutation())
    }
}
