//! The group Bn as a whole: generating sets and exhaustive enumeration.
//!
//! Enumeration materializes every element, so it is meant for checking and
//! for small dimensions; the REPL never needs it.

use std::collections::VecDeque;

use hashbrown::HashSet;

use super::{Automorphism, Generator};
use crate::model::Dimension;

/// Adjacent transpositions `(i, i+1)` plus the flip of axis 0. These
/// generate all of Bn.
pub fn canonical_generators(dimension: Dimension) -> Vec<Automorphism> {
    let n = dimension.as_usize();
    let swaps = (0..n.saturating_sub(1)).map(|i| Generator::Swap(i, i + 1));
    let flip = (n > 0).then_some(Generator::Flip(0));
    swaps
        .chain(flip)
        .filter_map(|g| Automorphism::generator(g, dimension).ok())
        .collect()
}

/// Closure of `generators` under composition, starting from the identity.
/// Breadth-first, so the identity comes first and each element appears once.
pub fn closure(dimension: Dimension, generators: &[Automorphism]) -> Vec<Automorphism> {
    let identity = Automorphism::identity(dimension);
    let mut seen: HashSet<Automorphism> = HashSet::new();
    let mut queue = VecDeque::from([identity.clone()]);
    let mut elements = Vec::new();
    seen.insert(identity);

    while let Some(element) = queue.pop_front() {
        for g in generators {
            let Ok(next) = g.compose(&element) else { continue };
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
        elements.push(element);
    }
    elements
}

/// Every element of Bn.
pub fn enumerate(dimension: Dimension) -> Vec<Automorphism> {
    closure(dimension, &canonical_generators(dimension))
}

/// `|Bn| = n! * 2^n`.
pub fn order(dimension: Dimension) -> u64 {
    dimension.group_order()
}
