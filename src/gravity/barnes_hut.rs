//! Barnes–Hut force evaluation: walk the quadtree once per body, treating
//! sufficiently distant subtrees as single pseudo-bodies at their center of
//! mass (monopole approximation).
//!
//! With `theta = 0` no internal node is ever approximated, so the walk
//! degenerates to exact direct summation; the tests use that as the
//! correctness oracle.

use log::debug;

use crate::body::{bodies_to_arrays, Body};
use crate::errors::GravityError;
use crate::vector::Vec2;

use super::quadtree::{NodeKind, QuadTree, ROOT};

/// Parameters of the force calculation.
///
/// * `g` scales all accelerations linearly.
/// * `softening` is the Plummer length `ε`: `ε²` is added to every squared
///   distance, bounding the acceleration magnitude as separation goes to
///   zero.
/// * `theta` is the opening-angle threshold. A subtree of cell width `s` at
///   distance `d` from the target is approximated as one pseudo-body when
///   `s/d < theta`; smaller values mean more accuracy and more work.
///
/// # Examples
///
/// ```
/// use rs_gravity::BarnesHutParams;
///
/// let params = BarnesHutParams::default();
/// assert_eq!(params.g, 1.0);
/// assert_eq!(params.theta, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarnesHutParams {
    pub g: f64,
    pub softening: f64,
    pub theta: f64,
}

impl Default for BarnesHutParams {
    fn default() -> Self {
        BarnesHutParams {
            g: 1.0,
            softening: 1e-4,
            theta: 0.5,
        }
    }
}

impl BarnesHutParams {
    /// Exact (unapproximated, unsoftened) parameters with the given `g`.
    pub fn exact(g: f64) -> Self {
        BarnesHutParams {
            g,
            softening: 0.0,
            theta: 0.0,
        }
    }
}

/// Computes the net gravitational acceleration on every body.
///
/// Builds a fresh quadtree over `positions`, walks it once per body, and
/// returns one acceleration per input index in input order. The tree is
/// discarded before returning; nothing is reused across calls.
///
/// Results are bit-reproducible for a fixed input order, but because
/// floating-point addition is not associative, a different insertion or
/// evaluation order may change the low bits while staying within the
/// method's accuracy tolerance. Bit-for-bit agreement with other
/// implementations is a non-goal.
///
/// # Errors
///
/// * [`GravityError::MismatchedLengths`] if the slices differ in length.
/// * [`GravityError::InvalidMass`] if any mass is non-positive or non-finite.
/// * [`GravityError::InvalidSoftening`] / [`GravityError::InvalidTheta`] if
///   either parameter is negative.
///
/// # Examples
///
/// ```
/// use rs_gravity::{compute_accelerations, BarnesHutParams, Vec2};
///
/// let masses = [1.0, 1.0];
/// let positions = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
/// let acc = compute_accelerations(&masses, &positions, &BarnesHutParams::exact(1.0))
///     .expect("Failed to compute accelerations");
///
/// assert_eq!(acc[0], Vec2::new(1.0, 0.0));
/// assert_eq!(acc[1], Vec2::new(-1.0, 0.0));
/// ```
pub fn compute_accelerations(
    masses: &[f64],
    positions: &[Vec2],
    params: &BarnesHutParams,
) -> Result<Vec<Vec2>, GravityError> {
    validate_inputs(masses, positions)?;
    validate_params(params)?;

    if masses.is_empty() {
        return Ok(Vec::new());
    }

    let tree = QuadTree::build(masses, positions);
    let acc = (0..masses.len())
        .map(|i| tree.acceleration_on(i, masses, positions, params))
        .collect();

    debug!(
        "barnes-hut pass: {} bodies, theta {}, softening {:.3e}",
        masses.len(),
        params.theta,
        params.softening
    );

    Ok(acc)
}

/// Convenience wrapper over [`compute_accelerations`] for a body slice.
pub fn accelerations_for_bodies(
    bodies: &[Body],
    params: &BarnesHutParams,
) -> Result<Vec<Vec2>, GravityError> {
    let (masses, positions) = bodies_to_arrays(bodies);
    compute_accelerations(&masses, &positions, params)
}

impl QuadTree {
    /// Net acceleration on body `target` from every other body in the tree.
    ///
    /// The target's own contribution is skipped exactly (by index), never
    /// approximated away via softening.
    pub fn acceleration_on(
        &self,
        target: usize,
        masses: &[f64],
        positions: &[Vec2],
        params: &BarnesHutParams,
    ) -> Vec2 {
        let eps2 = params.softening * params.softening;
        let mut acc = Vec2::ZERO;
        self.accumulate(
            ROOT,
            target,
            positions[target],
            masses,
            positions,
            params,
            eps2,
            &mut acc,
        );
        acc
    }

    fn accumulate(
        &self,
        node_idx: usize,
        target: usize,
        target_pos: Vec2,
        masses: &[f64],
        positions: &[Vec2],
        params: &BarnesHutParams,
        eps2: f64,
        acc: &mut Vec2,
    ) {
        let node = &self.nodes[node_idx];
        if node.total_mass == 0.0 {
            return;
        }

        match &node.kind {
            NodeKind::Empty => {}
            NodeKind::Leaf(bodies) => {
                // Leaves are always evaluated exactly, body by body.
                for &j in bodies {
                    if j == target {
                        continue;
                    }
                    *acc += point_mass_acceleration(
                        positions[j] - target_pos,
                        params.g * masses[j],
                        eps2,
                    );
                }
            }
            NodeKind::Internal(children) => {
                let dr = node.com - target_pos;
                let d2 = dr.magnitude_squared();
                let s = node.quad.size();

                // Opening criterion s/d < theta, compared in squared form to
                // avoid the sqrt. d must be strictly positive to approximate.
                if d2 > 0.0 && s * s < params.theta * params.theta * d2 {
                    *acc += point_mass_acceleration(dr, params.g * node.total_mass, eps2);
                } else {
                    for &child in children.iter().flatten() {
                        self.accumulate(
                            child, target, target_pos, masses, positions, params, eps2, acc,
                        );
                    }
                }
            }
        }
    }
}

/// Softened point-mass kernel: `gm * Δ / (Δ·Δ + ε²)^(3/2)`.
///
/// A fully degenerate separation (coincident points with zero softening)
/// contributes nothing rather than an infinity.
fn point_mass_acceleration(dr: Vec2, gm: f64, eps2: f64) -> Vec2 {
    let dist2 = dr.magnitude_squared() + eps2;
    if dist2 < 1e-30 {
        return Vec2::ZERO;
    }
    let inv_r = dist2.sqrt().recip();
    dr * (gm * inv_r * inv_r * inv_r)
}

/// Shared input validation for the batch entry points.
pub(crate) fn validate_inputs(masses: &[f64], positions: &[Vec2]) -> Result<(), GravityError> {
    if masses.len() != positions.len() {
        return Err(GravityError::MismatchedLengths {
            masses: masses.len(),
            positions: positions.len(),
        });
    }
    if masses.iter().any(|&m| !(m > 0.0) || !m.is_finite()) {
        return Err(GravityError::InvalidMass);
    }
    Ok(())
}

pub(crate) fn validate_params(params: &BarnesHutParams) -> Result<(), GravityError> {
    if params.softening < 0.0 {
        return Err(GravityError::InvalidSoftening);
    }
    if params.theta < 0.0 {
        return Err(GravityError::InvalidTheta);
    }
    Ok(())
}
