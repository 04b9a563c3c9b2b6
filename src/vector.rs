use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use approx::{AbsDiffEq, RelativeEq};

use crate::errors::GravityError;

/// An immutable 2D vector with standard arithmetic operations.
///
/// `Vec2` is `Copy` and is passed by value everywhere; no operation mutates
/// its operands.
///
/// # Examples
///
/// ```
/// use rs_gravity::Vec2;
///
/// let a = Vec2::new(3.0, 4.0);
/// let b = Vec2::new(1.0, -2.0);
///
/// assert_eq!(a + b, Vec2::new(4.0, 2.0));
/// assert_eq!(a.magnitude(), 5.0);
/// assert_eq!(a.dot(b), -5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Vec2 { x, y }
    }

    /// Dot product with another vector.
    pub fn dot(self, other: Vec2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// 2D scalar cross product: `self.x * other.y - self.y * other.x`.
    pub fn cross(self, other: Vec2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Euclidean magnitude (length) of the vector.
    pub fn magnitude(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude, avoids the sqrt when only comparisons are needed.
    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Returns the unit vector in the same direction.
    ///
    /// # Errors
    ///
    /// Returns [`GravityError::ZeroVector`] if the vector has zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_gravity::Vec2;
    ///
    /// let v = Vec2::new(0.0, 2.5);
    /// assert_eq!(v.unit().unwrap(), Vec2::new(0.0, 1.0));
    /// assert!(Vec2::ZERO.unit().is_err());
    /// ```
    pub fn unit(self) -> Result<Vec2, GravityError> {
        let mag = self.magnitude();
        if mag == 0.0 {
            return Err(GravityError::ZeroVector);
        }
        Ok(self / mag)
    }

    /// Euclidean distance to another vector interpreted as a point.
    pub fn distance_to(self, other: Vec2) -> f64 {
        (other - self).magnitude()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, other: Vec2) {
        *self = *self + other;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, other: Vec2) {
        *self = *self - other;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;
    fn mul(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;
    fn mul(self, v: Vec2) -> Vec2 {
        v * self
    }
}

impl Div<f64> for Vec2 {
    type Output = Vec2;
    fn div(self, scalar: f64) -> Vec2 {
        Vec2::new(self.x / scalar, self.y / scalar)
    }
}

impl AbsDiffEq for Vec2 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Vec2 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}
