use approx::assert_relative_eq;

use crate::errors::GravityError;
use crate::vector::Vec2;

#[test]
fn test_arithmetic_operators() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(-3.0, 0.5);

    assert_eq!(a + b, Vec2::new(-2.0, 2.5));
    assert_eq!(a - b, Vec2::new(4.0, 1.5));
    assert_eq!(-a, Vec2::new(-1.0, -2.0));
    assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
    assert_eq!(2.0 * a, a * 2.0);
    assert_eq!(a / 2.0, Vec2::new(0.5, 1.0));

    let mut c = a;
    c += b;
    assert_eq!(c, a + b);
    c -= b;
    assert_eq!(c, a);
}

#[test]
fn test_dot_and_cross() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, 4.0);
    assert_eq!(a.dot(b), 11.0);
    assert_eq!(a.cross(b), 4.0 - 6.0);
    // Cross of a vector with itself vanishes.
    assert_eq!(a.cross(a), 0.0);
}

#[test]
fn test_magnitude() {
    let v = Vec2::new(3.0, 4.0);
    assert_eq!(v.magnitude(), 5.0);
    assert_eq!(v.magnitude_squared(), 25.0);
    assert_eq!(Vec2::ZERO.magnitude(), 0.0);
}

#[test]
fn test_unit_vector() {
    let v = Vec2::new(0.0, -7.0);
    let u = v.unit().expect("Failed to normalize");
    assert_relative_eq!(u, Vec2::new(0.0, -1.0));
    assert_relative_eq!(u.magnitude(), 1.0);
}

#[test]
fn test_unit_of_zero_vector_fails() {
    assert_eq!(Vec2::ZERO.unit(), Err(GravityError::ZeroVector));
}

#[test]
fn test_distance_to() {
    let a = Vec2::new(1.0, 1.0);
    let b = Vec2::new(4.0, 5.0);
    assert_eq!(a.distance_to(b), 5.0);
    assert_eq!(b.distance_to(a), 5.0);
}
