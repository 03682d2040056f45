//! Validated hypercube dimension.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Largest dimension the explorer supports.
pub const MAX_DIMENSION: u8 = 5;

/// A hypercube dimension in `0..=MAX_DIMENSION`.
///
/// Every other type that is "built for a dimension" carries one of these,
/// so mixing elements of different cubes is caught at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Dimension(u8);

impl Dimension {
    /// Q3, the ordinary cube.
    pub const CUBE: Dimension = Dimension(3);

    /// Validate `n` as a dimension.
    pub fn new(n: usize) -> Result<Self> {
        if n > MAX_DIMENSION as usize {
            return Err(Error::UnsupportedDimension { requested: n });
        }
        Ok(Self(n as u8))
    }

    /// All supported dimensions, ascending.
    pub fn all() -> impl Iterator<Item = Dimension> {
        (0..=MAX_DIMENSION).map(Dimension)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    /// Number of vertices, `2^n`.
    pub fn vertex_count(self) -> u32 {
        1u32 << self.0
    }

    /// Mask with the low `n` bits set.
    pub fn mask(self) -> u32 {
        self.vertex_count() - 1
    }

    /// Characters needed to print a label (dimension 0 still prints `0`).
    pub fn label_width(self) -> usize {
        self.as_usize().max(1)
    }

    /// Order of the hyperoctahedral group, `n! * 2^n`.
    pub fn group_order(self) -> u64 {
        let factorial: u64 = (1..=self.0 as u64).product();
        factorial << self.0
    }

    /// Fail with `DimensionMismatch` unless `other` equals `self`.
    pub fn ensure_same(self, other: Dimension) -> Result<()> {
        if self != other {
            return Err(Error::DimensionMismatch { expected: self.0, got: other.0 });
        }
        Ok(())
    }
}

impl TryFrom<u8> for Dimension {
    type Error = Error;

    fn try_from(n: u8) -> Result<Self> {
        Self::new(n as usize)
    }
}

impl From<Dimension> for u8 {
    fn from(dim: Dimension) -> u8 {
        dim.0
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_zero_through_five() {
        for n in 0..=5 {
            assert_eq!(Dimension::new(n).unwrap().as_usize(), n);
        }
    }

    #[test]
    fn test_rejects_six() {
        let err = Dimension::new(6).unwrap_err();
        assert!(matches!(err, Error::UnsupportedDimension { requested: 6 }));
    }

    #[test]
    fn test_group_orders() {
        let orders: Vec<u64> = Dimension::all().map(Dimension::group_order).collect();
        assert_eq!(orders, vec![1, 2, 8, 48, 384, 3840]);
    }

    #[test]
    fn test_serde_validates() {
        let dim: Dimension = serde_json::from_str("3").unwrap();
        assert_eq!(dim.get(), 3);
        assert!(serde_json::from_str::<Dimension>("9").is_err());
    }
}
