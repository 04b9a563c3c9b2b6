use approx::assert_abs_diff_eq;

use crate::scenario::{circular_binary, random_cloud};
use crate::vector::Vec2;

#[test]
fn test_random_cloud_is_seeded() {
    let a = random_cloud(50, 7, 10.0, (0.1, 1.0));
    let b = random_cloud(50, 7, 10.0, (0.1, 1.0));
    assert_eq!(a, b, "Same seed must reproduce the same cloud");

    let c = random_cloud(50, 8, 10.0, (0.1, 1.0));
    assert_ne!(a, c, "Different seeds should differ");
}

#[test]
fn test_random_cloud_respects_bounds() {
    let cloud = random_cloud(200, 42, 4.0, (0.5, 2.0));
    assert_eq!(cloud.len(), 200);
    for b in &cloud {
        assert!(b.position.x.abs() <= 2.0 && b.position.y.abs() <= 2.0);
        assert!(b.mass >= 0.5 && b.mass <= 2.0);
        assert_eq!(b.velocity, Vec2::ZERO);
    }
}

#[test]
fn test_circular_binary_momentum_is_zero() {
    let pair = circular_binary(1.0, 3.0, 2.0, 1.0);
    assert_eq!(pair.len(), 2);

    let momentum = pair
        .iter()
        .fold(Vec2::ZERO, |p, b| p + b.velocity * b.mass);
    assert_abs_diff_eq!(momentum.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(momentum.y, 0.0, epsilon = 1e-12);

    // Barycenter sits at the origin.
    let com = pair
        .iter()
        .fold(Vec2::ZERO, |p, b| p + b.position * b.mass)
        / pair.iter().map(|b| b.mass).sum::<f64>();
    assert_abs_diff_eq!(com.x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(com.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_circular_binary_separation() {
    let pair = circular_binary(0.5, 0.5, 1.0, 1.0);
    let sep = pair[0].position.distance_to(pair[1].position);
    assert_abs_diff_eq!(sep, 1.0, epsilon = 1e-12);
}
