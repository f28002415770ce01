//! Error handling for chain construction and the inverse solver.

use std::error::Error;
use std::fmt;

/// Errors surfaced synchronously by the kinematics core. Computations are
/// deterministic, so none of these are worth retrying with the same inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum KinematicError {
    /// A link length was zero, negative or not finite at construction.
    InvalidParameter { name: &'static str, value: f64 },

    /// The target lies outside the annulus the arm can reach: farther than
    /// the sum of the link lengths, or closer than their difference.
    Unreachable {
        distance: f64,
        min_reach: f64,
        max_reach: f64,
    },
}

impl fmt::Display for KinematicError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            KinematicError::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter: {} must be positive and finite (got {})", name, value)
            }
            KinematicError::Unreachable { distance, min_reach, max_reach } => {
                write!(
                    f,
                    "Unreachable target: distance {:.6} from the base is outside [{:.6}, {:.6}]",
                    distance, min_reach, max_reach
                )
            }
        }
    }
}

impl Error for KinematicError {}
