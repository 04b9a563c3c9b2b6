//! Direct O(N²) pairwise summation. This is the reference the tree method
//! is measured against; it exploits Newton's third law so each pair is
//! evaluated once.

use crate::errors::GravityError;
use crate::vector::Vec2;

use super::barnes_hut::validate_inputs;

/// Computes the net gravitational acceleration on every body by direct
/// pairwise summation, with the same softening semantics as the tree
/// kernel.
///
/// # Errors
///
/// Same input validation as the tree entry point: mismatched slice lengths,
/// non-positive masses, or negative softening are rejected.
///
/// # Examples
///
/// ```
/// use rs_gravity::gravity::direct;
/// use rs_gravity::Vec2;
///
/// let masses = [1.0, 1.0];
/// let positions = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
/// let acc = direct::compute_accelerations(&masses, &positions, 1.0, 0.0)
///     .expect("Failed to compute accelerations");
///
/// assert_eq!(acc[0], Vec2::new(1.0, 0.0));
/// assert_eq!(acc[1], Vec2::new(-1.0, 0.0));
/// ```
pub fn compute_accelerations(
    masses: &[f64],
    positions: &[Vec2],
    g: f64,
    softening: f64,
) -> Result<Vec<Vec2>, GravityError> {
    validate_inputs(masses, positions)?;
    if softening < 0.0 {
        return Err(GravityError::InvalidSoftening);
    }

    let n = masses.len();
    let eps2 = softening * softening;
    let mut acc = vec![Vec2::ZERO; n];

    for i in 0..n {
        for j in (i + 1)..n {
            let dr = positions[j] - positions[i];
            let dist2 = dr.magnitude_squared() + eps2;
            if dist2 < 1e-30 {
                // Coincident pair with zero softening: no finite force.
                continue;
            }
            let inv_r = dist2.sqrt().recip();
            let f = dr * (g * inv_r * inv_r * inv_r);

            acc[i] += f * masses[j];
            acc[j] -= f * masses[i];
        }
    }

    Ok(acc)
}
