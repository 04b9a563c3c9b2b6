use crate::errors::GravityError;
use crate::vector::Vec2;

/// A point mass in the plane.
///
/// The force kernel only ever reads `mass` and `position`; `velocity` exists
/// for the integrator layer that consumes this crate and is carried through
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub mass: f64,
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Body {
    /// Creates a new body at rest.
    ///
    /// # Errors
    ///
    /// Returns [`GravityError::InvalidMass`] if `mass` is non-positive or
    /// non-finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_gravity::{Body, Vec2};
    ///
    /// let body = Body::new(2.0, Vec2::new(1.0, -1.0)).expect("Failed to create body");
    /// assert_eq!(body.velocity, Vec2::ZERO);
    /// assert!(Body::new(0.0, Vec2::ZERO).is_err());
    /// ```
    pub fn new(mass: f64, position: Vec2) -> Result<Self, GravityError> {
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(GravityError::InvalidMass);
        }
        Ok(Body {
            mass,
            position,
            velocity: Vec2::ZERO,
        })
    }

    /// Creates a new body with an initial velocity.
    pub fn with_velocity(mass: f64, position: Vec2, velocity: Vec2) -> Result<Self, GravityError> {
        let mut body = Body::new(mass, position)?;
        body.velocity = velocity;
        Ok(body)
    }
}

/// Splits a body slice into the parallel `(masses, positions)` arrays the
/// force kernel consumes. Output order matches input order.
pub fn bodies_to_arrays(bodies: &[Body]) -> (Vec<f64>, Vec<Vec2>) {
    let masses = bodies.iter().map(|b| b.mass).collect();
    let positions = bodies.iter().map(|b| b.position).collect();
    (masses, positions)
}
