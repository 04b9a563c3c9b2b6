pub mod errors;
pub mod vector;
pub mod body;
pub mod scenario;
pub mod gravity;

pub use errors::GravityError;
pub use vector::Vec2;
pub use body::{bodies_to_arrays, Body};
pub use gravity::{
    accelerations_for_bodies, compute_accelerations, BarnesHutParams, Node, NodeKind, Quad,
    QuadTree, MAX_DEPTH,
};

/// Asserts that two floats agree to within an absolute `epsilon`.
///
/// Test helper for assertions whose tolerance is computed at the call site
/// (e.g. scaled to the magnitude of the quantities being summed), where the
/// fixed-form `approx` macros are a poor fit.
///
/// # Arguments
///
/// * `a`, `b` - The values to compare.
/// * `epsilon` - The maximum allowed absolute difference.
/// * `optional_message` - Extra context to display if the assertion fails.
pub fn assert_float_eq(a: f64, b: f64, epsilon: f64, optional_message: Option<&str>) {
    match optional_message {
        Some(message) => assert!(
            (a - b).abs() < epsilon,
            "Expected {} to be approximately equal to {} (epsilon: {}): {}",
            a, b, epsilon, message
        ),
        None => assert!(
            (a - b).abs() < epsilon,
            "Expected {} to be approximately equal to {} (epsilon: {})",
            a, b, epsilon
        ),
    }
}

#[cfg(test)]
mod vector_tests;
#[cfg(test)]
mod scenario_tests;
