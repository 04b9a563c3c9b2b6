//! Initial-condition generators for tests, benchmarks, and downstream
//! simulation drivers. These only produce body sets; stepping them in time
//! is the integrator layer's job.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::body::Body;
use crate::vector::Vec2;

/// Generates `n` bodies uniformly distributed in a square of side
/// `box_size` centered on the origin, with masses drawn uniformly from
/// `mass_range`. Seeded, so a given `(n, seed)` pair always produces the
/// same configuration.
///
/// # Examples
///
/// ```
/// use rs_gravity::scenario::random_cloud;
///
/// let cloud = random_cloud(100, 42, 10.0, (0.1, 1.0));
/// assert_eq!(cloud.len(), 100);
/// assert!(cloud.iter().all(|b| b.mass >= 0.1 && b.mass <= 1.0));
/// ```
pub fn random_cloud(n: usize, seed: u64, box_size: f64, mass_range: (f64, f64)) -> Vec<Body> {
    let mut rng = StdRng::seed_from_u64(seed);
    let half = box_size / 2.0;
    (0..n)
        .map(|_| {
            let position = Vec2::new(
                rng.random_range(-half..half),
                rng.random_range(-half..half),
            );
            let mass = rng.random_range(mass_range.0..=mass_range.1);
            Body {
                mass,
                position,
                velocity: Vec2::ZERO,
            }
        })
        .collect()
}

/// Two bodies on a circular Kepler orbit in the center-of-mass frame,
/// separated by `separation` along the x-axis. Velocities are set so the
/// pair orbits the common barycenter under gravitational constant `g`.
pub fn circular_binary(m1: f64, m2: f64, separation: f64, g: f64) -> Vec<Body> {
    let total = m1 + m2;
    let r1 = -m2 / total * separation;
    let r2 = m1 / total * separation;

    // Circular orbital speed of the relative orbit, shared in proportion
    // to the mass ratio so net momentum stays zero.
    let v_orb = (g * total / separation).sqrt();
    let v1 = -m2 / total * v_orb;
    let v2 = m1 / total * v_orb;

    vec![
        Body {
            mass: m1,
            position: Vec2::new(r1, 0.0),
            velocity: Vec2::new(0.0, v1),
        },
        Body {
            mass: m2,
            position: Vec2::new(r2, 0.0),
            velocity: Vec2::new(0.0, v2),
        },
    ]
}
