//! End-to-end tests for the symmetry group of Qn.
//!
//! Algebraic laws are checked with proptest over random elements of every
//! dimension; group sizes are checked by full enumeration.

use hypercube_rs::automorphism::group;
use hypercube_rs::{Automorphism, Dimension, Error, Hypercube, VertexId};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn element_of(n: usize) -> impl Strategy<Value = Automorphism> {
    let perm = Just((0..n).collect::<Vec<usize>>()).prop_shuffle();
    (perm, 0u32..(1u32 << n)).prop_map(move |(perm, flips)| {
        Automorphism::from_parts(&perm, flips, Dimension::new(n).unwrap()).unwrap()
    })
}

fn element() -> impl Strategy<Value = Automorphism> {
    (0usize..=5).prop_flat_map(element_of)
}

/// Two elements and a vertex, all of the same dimension.
fn pair_and_vertex() -> impl Strategy<Value = (Automorphism, Automorphism, VertexId)> {
    (0usize..=5).prop_flat_map(|n| {
        (element_of(n), element_of(n), (0u32..(1u32 << n)).prop_map(VertexId))
    })
}

// ============================================================================
// 1. Identity and composition
// ============================================================================

#[test]
fn test_identity_fixes_every_vertex() {
    for dim in Dimension::all() {
        let id = Automorphism::identity(dim);
        for v in Hypercube::build(dim).vertices() {
            assert_eq!(id.apply(v).unwrap(), v);
        }
    }
}

proptest! {
    #[test]
    fn prop_compose_applies_right_first((a, b, v) in pair_and_vertex()) {
        let ab = a.compose(&b).unwrap();
        prop_assert_eq!(ab.apply(v).unwrap(), a.apply(b.apply(v).unwrap()).unwrap());
    }

    #[test]
    fn prop_identity_is_two_sided_unit(a in element()) {
        let id = Automorphism::identity(a.dimension());
        prop_assert_eq!(&a.compose(&id).unwrap(), &a);
        prop_assert_eq!(&id.compose(&a).unwrap(), &a);
    }

    #[test]
    fn prop_compose_is_associative((a, b, _v) in pair_and_vertex(), seed in any::<u64>()) {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let c = Automorphism::random(a.dimension(), &mut rng);
        let left = a.compose(&b).unwrap().compose(&c).unwrap();
        let right = a.compose(&b.compose(&c).unwrap()).unwrap();
        prop_assert_eq!(left, right);
    }

    // ========================================================================
    // 2. Inverse and order
    // ========================================================================

    #[test]
    fn prop_inverse_cancels(a in element()) {
        let id = Automorphism::identity(a.dimension());
        prop_assert_eq!(&a.compose(&a.inverse()).unwrap(), &id);
        prop_assert_eq!(&a.inverse().compose(&a).unwrap(), &id);
    }

    #[test]
    fn prop_order_is_smallest_identity_power(a in element()) {
        let order = a.order();
        prop_assert!(a.pow(order).is_identity());
        for k in 1..order {
            prop_assert!(!a.pow(k).is_identity());
        }
    }

    // ========================================================================
    // 3. Action on the graph
    // ========================================================================

    #[test]
    fn prop_apply_is_a_bijection(a in element()) {
        let mut images: Vec<u32> = a.vertex_permutation().iter().map(|v| v.0).collect();
        images.sort_unstable();
        let expected: Vec<u32> = (0..a.dimension().vertex_count()).collect();
        prop_assert_eq!(images, expected);
    }

    #[test]
    fn prop_edges_map_to_edges(a in element()) {
        let cube = Hypercube::build(a.dimension());
        for e in cube.edges() {
            let (u, v) = (a.apply(e.low).unwrap(), a.apply(e.high).unwrap());
            prop_assert!(cube.has_edge(u, v), "{} maps {:?} off the cube", a, e);
        }
    }

    #[test]
    fn prop_cycles_cover_moved_vertices(a in element()) {
        let moved = a.vertex_permutation().iter().enumerate()
            .filter(|(p, v)| v.0 as usize != *p)
            .count();
        let covered: usize = a.cycles().iter().map(Vec::len).sum();
        prop_assert_eq!(moved, covered);
    }

    #[test]
    fn prop_json_keeps_the_element(a in element()) {
        let json = serde_json::to_string(&a).unwrap();
        let back: Automorphism = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, a);
    }
}

// ============================================================================
// 4. Group enumeration
// ============================================================================

#[test]
fn test_group_sizes() {
    let sizes: Vec<usize> = Dimension::all().map(|d| group::enumerate(d).len()).collect();
    assert_eq!(sizes, vec![1, 2, 8, 48, 384, 3840]);
    for dim in Dimension::all() {
        assert_eq!(group::order(dim), dim.group_order());
    }
}

#[test]
fn test_square_group_is_dihedral() {
    let dim = Dimension::new(2).unwrap();
    let elements = group::enumerate(dim);
    let mut orders: Vec<u64> = elements.iter().map(Automorphism::order).collect();
    orders.sort_unstable();
    // identity, five involutions, two quarter turns
    assert_eq!(orders, vec![1, 2, 2, 2, 2, 2, 4, 4]);
}

// ============================================================================
// 5. Invalid input
// ============================================================================

#[test]
fn test_mixed_dimensions_are_rejected() {
    let a = Automorphism::identity(Dimension::new(2).unwrap());
    let b = Automorphism::identity(Dimension::new(3).unwrap());
    assert!(matches!(
        a.compose(&b),
        Err(Error::DimensionMismatch { expected: 2, got: 3 })
    ));
}

#[test]
fn test_bad_wire_form_is_rejected() {
    let json = r#"{"dimension": 3, "perm": [0, 0, 2], "flips": 1}"#;
    assert!(serde_json::from_str::<Automorphism>(json).is_err());
}

#[test]
fn test_vertex_out_of_range() {
    let a = Automorphism::identity(Dimension::new(3).unwrap());
    assert!(matches!(a.apply(VertexId(8)), Err(Error::VertexOutOfRange { vertex: 8, dimension: 3 })));
}
