use std::fmt;
use std::error::Error;

/// Represents errors that can occur during gravitational force calculations.
#[derive(Debug, Clone, PartialEq)]
pub enum GravityError {
    /// Indicates an invalid mass value (e.g., negative or zero mass).
    InvalidMass,
    /// Indicates a negative softening length.
    InvalidSoftening,
    /// Indicates a negative opening-angle parameter.
    InvalidTheta,
    /// Indicates that the mass and position sequences have different lengths.
    MismatchedLengths { masses: usize, positions: usize },
    /// Indicates an attempt to normalize a zero-length vector.
    ZeroVector,
}

impl fmt::Display for GravityError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GravityError::InvalidMass => write!(f, "Invalid mass value"),
            GravityError::InvalidSoftening => write!(f, "Softening length must be non-negative"),
            GravityError::InvalidTheta => write!(f, "Opening angle must be non-negative"),
            GravityError::MismatchedLengths { masses, positions } => write!(
                f,
                "Mismatched input lengths: {} masses vs {} positions",
                masses, positions
            ),
            GravityError::ZeroVector => write!(f, "Cannot normalize a zero-length vector"),
        }
    }
}

impl Error for GravityError {}
