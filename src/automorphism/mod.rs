//! # Hypercube Automorphisms
//!
//! Every automorphism of Qn is a *signed permutation* of the coordinates:
//! a permutation `σ` of the axes `0..n` together with a flip mask `f`.
//! Applied to a vertex `v`, output coordinate `i` is `v[σ(i)] XOR f[i]`.
//! Together these form the hyperoctahedral group Bn of order `n! * 2^n`.
//!
//! Elements are stored as the `(σ, f)` pair rather than as a matrix or a
//! table over all `2^n` vertices, so composition, inversion and order are
//! all O(n).
//!
//! ```rust
//! use hypercube_rs::{Automorphism, Dimension, VertexId};
//!
//! # fn example() -> hypercube_rs::Result<()> {
//! let dim = Dimension::new(3)?;
//! let swap = Automorphism::transposition(0, 2, dim)?;
//! let flip = Automorphism::flip(0, dim)?;
//!
//! // flip after swap
//! let both = flip.compose(&swap)?;
//! assert_eq!(both.apply(VertexId(0b100))?, VertexId(0b000));
//! assert_eq!(both.order(), 4);
//! # Ok(())
//! # }
//! ```

pub mod generator;
pub mod group;

pub use generator::Generator;

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::model::{Dimension, VertexId, MAX_DIMENSION};
use crate::{Error, Result};

/// Inline storage for one entry per axis.
type AxisMap = SmallVec<[u8; MAX_DIMENSION as usize]>;

// ============================================================================
// Automorphism
// ============================================================================

/// An element of the hyperoctahedral group Bn.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAutomorphism")]
pub struct Automorphism {
    dimension: Dimension,
    /// `perm[i]` is the input axis read by output axis `i`.
    perm: AxisMap,
    /// Bit `i` set: output axis `i` is negated.
    flips: u32,
}

/// Unvalidated wire form, checked by `Automorphism::from_parts`.
#[derive(Deserialize)]
struct RawAutomorphism {
    dimension: Dimension,
    perm: Vec<usize>,
    flips: u32,
}

impl TryFrom<RawAutomorphism> for Automorphism {
    type Error = Error;

    fn try_from(raw: RawAutomorphism) -> Result<Self> {
        Automorphism::from_parts(&raw.perm, raw.flips, raw.dimension)
    }
}

impl Automorphism {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// The unit element of Bn.
    pub fn identity(dimension: Dimension) -> Self {
        Self {
            dimension,
            perm: (0..dimension.get()).collect(),
            flips: 0,
        }
    }

    /// Build from an axis map and a flip mask, validating both.
    pub fn from_parts(perm: &[usize], flips: u32, dimension: Dimension) -> Result<Self> {
        let n = dimension.as_usize();
        if perm.len() != n {
            return Err(Error::InvalidPermutation(format!(
                "expected {n} axes, got {}", perm.len()
            )));
        }
        let mut seen = [false; MAX_DIMENSION as usize];
        for &axis in perm {
            if axis >= n {
                return Err(Error::AxisOutOfRange { axis, dimension: dimension.get() });
            }
            if std::mem::replace(&mut seen[axis], true) {
                return Err(Error::InvalidPermutation(format!("axis {axis} appears twice")));
            }
        }
        if flips & !dimension.mask() != 0 {
            return Err(Error::AxisOutOfRange {
                axis: (31 - flips.leading_zeros()) as usize,
                dimension: dimension.get(),
            });
        }
        Ok(Self {
            dimension,
            perm: perm.iter().map(|&a| a as u8).collect(),
            flips,
        })
    }

    /// Negate a single axis.
    pub fn flip(axis: usize, dimension: Dimension) -> Result<Self> {
        check_axis(axis, dimension)?;
        Ok(Self { flips: 1 << axis, ..Self::identity(dimension) })
    }

    /// Exchange two distinct axes.
    pub fn transposition(i: usize, j: usize, dimension: Dimension) -> Result<Self> {
        check_axis(i, dimension)?;
        check_axis(j, dimension)?;
        if i == j {
            return Err(Error::InvalidPermutation(format!(
                "a transposition needs two distinct axes, got {i} twice"
            )));
        }
        let mut a = Self::identity(dimension);
        a.perm.swap(i, j);
        Ok(a)
    }

    /// The element for a named generator.
    pub fn generator(generator: Generator, dimension: Dimension) -> Result<Self> {
        match generator {
            Generator::Swap(i, j) => Self::transposition(i, j, dimension),
            Generator::Flip(axis) => Self::flip(axis, dimension),
        }
    }

    /// Negate every axis set in `mask`.
    pub fn reflection(mask: u32, dimension: Dimension) -> Result<Self> {
        let identity: Vec<usize> = (0..dimension.as_usize()).collect();
        Self::from_parts(&identity, mask, dimension)
    }

    /// Reorder the characters of the printed label: output character `k`
    /// (most significant first) is input character `order[k]`.
    pub fn from_bit_order(order: &[usize], dimension: Dimension) -> Result<Self> {
        let n = dimension.as_usize();
        if order.len() != n {
            return Err(Error::InvalidPermutation(format!(
                "a bit order in dimension {n} lists {n} positions, got {}", order.len()
            )));
        }
        if let Some(&bad) = order.iter().find(|&&k| k >= n) {
            return Err(Error::AxisOutOfRange { axis: bad, dimension: dimension.get() });
        }
        // string position k is axis n-1-k
        let mut perm = vec![0; n];
        for (k, &source) in order.iter().enumerate() {
            perm[n - 1 - k] = n - 1 - source;
        }
        Self::from_parts(&perm, 0, dimension)
    }

    /// A uniformly random element: uniform axis permutation and independent
    /// uniform flip mask.
    pub fn random<R: Rng + ?Sized>(dimension: Dimension, rng: &mut R) -> Self {
        let mut perm: AxisMap = (0..dimension.get()).collect();
        perm.shuffle(rng);
        let flips = rng.gen_range(0..dimension.vertex_count());
        Self { dimension, perm, flips }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// `permutation()[i]` is the input axis read by output axis `i`.
    pub fn permutation(&self) -> &[u8] {
        &self.perm
    }

    pub fn flip_mask(&self) -> u32 {
        self.flips
    }

    pub fn is_identity(&self) -> bool {
        self.flips == 0 && self.perm.iter().enumerate().all(|(i, &a)| i == a as usize)
    }

    // ========================================================================
    // Group operations
    // ========================================================================

    /// `self ∘ other`: apply `other`, then `self`.
    pub fn compose(&self, other: &Automorphism) -> Result<Self> {
        self.dimension.ensure_same(other.dimension)?;
        Ok(self.compose_unchecked(other))
    }

    fn compose_unchecked(&self, other: &Automorphism) -> Self {
        let perm = self.perm.iter().map(|&a| other.perm[a as usize]).collect();
        let flips = self.perm.iter().enumerate().fold(self.flips, |acc, (i, &a)| {
            acc ^ (((other.flips >> a) & 1) << i)
        });
        Self { dimension: self.dimension, perm, flips }
    }

    /// The inverse element.
    pub fn inverse(&self) -> Self {
        let mut perm: AxisMap = SmallVec::from_elem(0, self.perm.len());
        let mut flips = 0;
        for (i, &a) in self.perm.iter().enumerate() {
            perm[a as usize] = i as u8;
            flips |= ((self.flips >> i) & 1) << a;
        }
        Self { dimension: self.dimension, perm, flips }
    }

    /// `self` composed with itself `k` times (`k = 0` gives the identity).
    pub fn pow(&self, mut k: u64) -> Self {
        let mut result = Self::identity(self.dimension);
        let mut base = self.clone();
        while k > 0 {
            if k & 1 == 1 {
                result = result.compose_unchecked(&base);
            }
            base = base.compose_unchecked(&base);
            k >>= 1;
        }
        result
    }

    /// Smallest `k > 0` with `self^k` the identity.
    ///
    /// Each cycle of `σ` of length `L` contributes `L`, or `2L` when an odd
    /// number of the axes on it are flipped.
    pub fn order(&self) -> u64 {
        let mut visited = [false; MAX_DIMENSION as usize];
        let mut order = 1;
        for start in 0..self.perm.len() {
            if visited[start] {
                continue;
            }
            let mut len = 0u64;
            let mut parity = 0;
            let mut axis = start;
            while !visited[axis] {
                visited[axis] = true;
                parity ^= (self.flips >> axis) & 1;
                axis = self.perm[axis] as usize;
                len += 1;
            }
            let cycle_order = if parity == 1 { 2 * len } else { len };
            order = lcm(order, cycle_order);
        }
        order
    }

    // ========================================================================
    // Action on vertices
    // ========================================================================

    /// Image of vertex `v`.
    pub fn apply(&self, v: VertexId) -> Result<VertexId> {
        if !v.is_in(self.dimension) {
            return Err(Error::VertexOutOfRange { vertex: v.0, dimension: self.dimension.get() });
        }
        Ok(VertexId(self.image(v.0)))
    }

    fn image(&self, label: u32) -> u32 {
        self.perm.iter().enumerate().fold(self.flips, |acc, (i, &a)| {
            acc ^ (((label >> a) & 1) << i)
        })
    }

    /// Image of every vertex: entry `v` is `self(v)`.
    pub fn vertex_permutation(&self) -> Vec<VertexId> {
        (0..self.dimension.vertex_count()).map(|v| VertexId(self.image(v))).collect()
    }

    /// Disjoint cycles of the action on vertices, fixed points omitted.
    /// Each cycle starts at its smallest label; cycles are sorted by start.
    pub fn cycles(&self) -> Vec<Vec<VertexId>> {
        let images = self.vertex_permutation();
        let mut visited = vec![false; images.len()];
        let mut cycles = Vec::new();
        for start in 0..images.len() {
            if visited[start] || images[start].0 as usize == start {
                continue;
            }
            let mut cycle = Vec::new();
            let mut v = start;
            while !visited[v] {
                visited[v] = true;
                cycle.push(VertexId(v as u32));
                v = images[v].0 as usize;
            }
            cycles.push(cycle);
        }
        cycles
    }
}

impl fmt::Display for Automorphism {
    /// Signed coordinate map, most significant output first, e.g. `x1 ~x2 x0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.perm.is_empty() {
            return write!(f, "()");
        }
        for (k, i) in (0..self.perm.len()).rev().enumerate() {
            if k > 0 {
                write!(f, " ")?;
            }
            let sign = if (self.flips >> i) & 1 == 1 { "~" } else { "" };
            write!(f, "{sign}x{}", self.perm[i])?;
        }
        Ok(())
    }
}

fn check_axis(axis: usize, dimension: Dimension) -> Result<()> {
    if axis >= dimension.as_usize() {
        return Err(Error::AxisOutOfRange { axis, dimension: dimension.get() });
    }
    Ok(())
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn lcm(a: u64, b: u64) -> u64 {
    a / gcd(a, b) * b
}
