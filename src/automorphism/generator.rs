//! Named generators of the hyperoctahedral group.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Dimension;

/// A canonical generating element, resolved against a dimension by
/// `Automorphism::generator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Generator {
    /// Exchange two coordinate axes.
    Swap(usize, usize),
    /// Negate one coordinate axis.
    Flip(usize),
}

impl Generator {
    /// Every generator valid in `dimension`: all flips, then all swaps
    /// `i < j`.
    pub fn all(dimension: Dimension) -> Vec<Generator> {
        let n = dimension.as_usize();
        let flips = (0..n).map(Generator::Flip);
        let swaps = (0..n).flat_map(|i| (i + 1..n).map(move |j| Generator::Swap(i, j)));
        flips.chain(swaps).collect()
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Swap(i, j) => write!(f, "swap {i} {j}"),
            Generator::Flip(axis) => write!(f, "flip {axis}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_generators_of_cube() {
        let gens = Generator::all(Dimension::new(3).unwrap());
        assert_eq!(gens, vec![
            Generator::Flip(0),
            Generator::Flip(1),
            Generator::Flip(2),
            Generator::Swap(0, 1),
            Generator::Swap(0, 2),
            Generator::Swap(1, 2),
        ]);
    }

    #[test]
    fn test_no_generators_in_dimension_zero() {
        assert!(Generator::all(Dimension::new(0).unwrap()).is_empty());
    }
}
