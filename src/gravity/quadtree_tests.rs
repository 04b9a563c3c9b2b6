use approx::assert_relative_eq;

use crate::gravity::{NodeKind, Quad, QuadTree, NE, NW, SE, SW};
use crate::vector::Vec2;

fn leaf_body_count(tree: &QuadTree, node_idx: usize) -> usize {
    match &tree.nodes[node_idx].kind {
        NodeKind::Empty => 0,
        NodeKind::Leaf(bodies) => bodies.len(),
        NodeKind::Internal(children) => children
            .iter()
            .flatten()
            .map(|&c| leaf_body_count(tree, c))
            .sum(),
    }
}

#[test]
fn test_quad_contains_is_half_open() {
    let quad = Quad { cx: 0.0, cy: 0.0, half_size: 1.0 };
    assert!(quad.contains(0.0, 0.0));
    assert!(quad.contains(-1.0, -1.0)); // lower bound inclusive
    assert!(!quad.contains(1.0, 0.0)); // upper bound exclusive
}

#[test]
fn test_quadrant_convention() {
    let quad = Quad { cx: 0.0, cy: 0.0, half_size: 1.0 };
    assert_eq!(quad.quadrant(Vec2::new(-0.5, 0.5)), NW);
    assert_eq!(quad.quadrant(Vec2::new(0.5, 0.5)), NE);
    assert_eq!(quad.quadrant(Vec2::new(-0.5, -0.5)), SW);
    assert_eq!(quad.quadrant(Vec2::new(0.5, -0.5)), SE);
    // Boundary points go east/north.
    assert_eq!(quad.quadrant(Vec2::new(0.0, 0.0)), NE);
}

#[test]
fn test_child_quads_halve_and_offset() {
    let quad = Quad { cx: 0.0, cy: 0.0, half_size: 1.0 };
    let nw = quad.child(NW);
    assert_eq!(nw.half_size, 0.5);
    assert_eq!((nw.cx, nw.cy), (-0.5, 0.5));
    let se = quad.child(SE);
    assert_eq!((se.cx, se.cy), (0.5, -0.5));
    // Child quadrant centers land back in the same quadrant.
    assert_eq!(quad.quadrant(Vec2::new(nw.cx, nw.cy)), NW);
}

#[test]
fn test_empty_input_builds_degenerate_root() {
    let tree = QuadTree::build(&[], &[]);
    let root = tree.root();
    assert_eq!(root.total_mass, 0.0);
    assert!(matches!(root.kind, NodeKind::Empty));
    assert!(root.quad.half_size > 0.0);
}

#[test]
fn test_single_body_is_leaf_root() {
    let tree = QuadTree::build(&[2.5], &[Vec2::new(3.0, -1.0)]);
    let root = tree.root();
    assert_eq!(root.total_mass, 2.5);
    assert_eq!(root.com, Vec2::new(3.0, -1.0));
    assert!(matches!(root.kind, NodeKind::Leaf(_)));
}

#[test]
fn test_root_aggregates_match_weighted_centroid() {
    let masses = [1.0, 2.0, 3.0, 4.0];
    let positions = [
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, 1.0),
    ];
    let tree = QuadTree::build(&masses, &positions);

    let total: f64 = masses.iter().sum();
    let centroid = masses
        .iter()
        .zip(&positions)
        .fold(Vec2::ZERO, |c, (&m, &p)| c + p * m)
        / total;

    assert_relative_eq!(tree.root().total_mass, total, max_relative = 1e-12);
    assert_relative_eq!(tree.root().com, centroid, max_relative = 1e-12);
}

#[test]
fn test_root_com_is_insertion_order_independent() {
    let masses = [1.0, 5.0, 0.5, 2.0, 3.0];
    let positions = [
        Vec2::new(0.3, -2.0),
        Vec2::new(-4.0, 1.1),
        Vec2::new(2.2, 2.2),
        Vec2::new(-0.1, 0.0),
        Vec2::new(1.0, -1.0),
    ];
    let forward = QuadTree::build(&masses, &positions);

    let rev_masses: Vec<f64> = masses.iter().rev().copied().collect();
    let rev_positions: Vec<Vec2> = positions.iter().rev().copied().collect();
    let reversed = QuadTree::build(&rev_masses, &rev_positions);

    assert_relative_eq!(
        forward.root().com,
        reversed.root().com,
        max_relative = 1e-12
    );
    assert_relative_eq!(
        forward.root().total_mass,
        reversed.root().total_mass,
        max_relative = 1e-12
    );
}

#[test]
fn test_every_body_lands_in_exactly_one_leaf() {
    let masses = vec![1.0; 64];
    let positions: Vec<Vec2> = (0..64)
        .map(|i| Vec2::new((i % 8) as f64, (i / 8) as f64))
        .collect();
    let tree = QuadTree::build(&masses, &positions);
    assert_eq!(leaf_body_count(&tree, 0), 64);
}

#[test]
fn test_coincident_bodies_terminate_via_max_depth() {
    // Three bodies at the identical position would subdivide forever
    // without the depth cutoff.
    let p = Vec2::new(0.25, 0.25);
    let masses = [1.0, 2.0, 3.0];
    let positions = [p, p, p];
    let tree = QuadTree::build(&masses, &positions);

    assert_eq!(leaf_body_count(&tree, 0), 3);
    assert_relative_eq!(tree.root().total_mass, 6.0, max_relative = 1e-12);
    assert_relative_eq!(tree.root().com, p, max_relative = 1e-12);
}

#[test]
fn test_near_coincident_bodies_terminate() {
    let masses = [1.0, 1.0, 1.0];
    let positions = [
        Vec2::new(0.0, 0.0),
        Vec2::new(1e-300, 0.0),
        Vec2::new(0.0, 1e-300),
    ];
    let tree = QuadTree::build(&masses, &positions);
    assert_eq!(leaf_body_count(&tree, 0), 3);
}

#[test]
#[should_panic(expected = "mismatched mass/position lengths")]
fn test_build_panics_on_mismatched_lengths() {
    QuadTree::build(&[1.0, 2.0], &[Vec2::ZERO]);
}

#[test]
fn test_four_spread_bodies_subdivide_root() {
    let masses = [1.0; 4];
    let positions = [
        Vec2::new(-1.0, 1.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(-1.0, -1.0),
        Vec2::new(1.0, -1.0),
    ];
    let tree = QuadTree::build(&masses, &positions);
    match &tree.root().kind {
        NodeKind::Internal(children) => {
            assert_eq!(children.iter().flatten().count(), 4);
        }
        other => panic!("Expected internal root, got {:?}", other),
    }
}
