//! Rigid motions as conformal motors (rotation and translation versors).
//!
//! A motor acts on conformal objects by the sandwich product M X M̃ and
//! composes by the geometric product, so chaining transforms reads the same
//! way as chaining isometries: `base_to_elbow = swing * lift * reach`. Every
//! motion is a value; composition produces a new value and `reverse` undoes
//! a motion exactly (up to floating point).

use crate::conformal::{up, E1, E2, E3, EMINUS, EPLUS, Multivector};
use nalgebra::{Point3, Vector3};
use std::ops::Mul;

/// A rigid motion (rotation and/or translation) between two frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motor {
    mv: Multivector,
}

impl Motor {
    /// The motion that leaves every point unchanged.
    pub fn identity() -> Self {
        Motor { mv: Multivector::scalar(1.0) }
    }

    /// Pure rotation by `angle` radians in the plane of the given bivector:
    /// R = cos(angle/2) - sin(angle/2)·B̂. The bivector is normalized here;
    /// a null plane yields the identity motion.
    pub fn rotation(angle: f64, plane: &Multivector) -> Self {
        let square = plane.geometric(plane).scalar_part();
        let norm = square.abs().sqrt();
        if norm <= f64::MIN_POSITIVE {
            return Self::identity();
        }
        let half = 0.5 * angle;
        let mv = Multivector::scalar(half.cos()) - *plane * (half.sin() / norm);
        Motor { mv }
    }

    /// Pure translation by the Euclidean vector t: T = 1 - t·n∞/2.
    pub fn translation(t: &Vector3<f64>) -> Self {
        let mv = Multivector::scalar(1.0)
            - Multivector::vector(t).geometric(&Multivector::ninf()) * 0.5;
        Motor { mv }
    }

    /// The inverse motion. Motors are unit versors, so reversion inverts.
    pub fn reverse(&self) -> Self {
        Motor { mv: self.mv.reverse() }
    }

    /// Sandwich application M X M̃ to any conformal object.
    pub fn apply(&self, x: &Multivector) -> Multivector {
        self.mv.geometric(x).geometric(&self.mv.reverse())
    }

    /// Transform a Euclidean point: embed, sandwich, project back.
    pub fn apply_point(&self, p: &Point3<f64>) -> Point3<f64> {
        let x = self.apply(&up(&p.coords));
        // Motors preserve the point weight of 1, so the division is safe.
        let weight = x.coeff(EMINUS) - x.coeff(EPLUS);
        Point3::new(
            x.coeff(E1) / weight,
            x.coeff(E2) / weight,
            x.coeff(E3) / weight,
        )
    }

    /// The underlying even multivector.
    pub fn multivector(&self) -> &Multivector {
        &self.mv
    }
}

/// Composition: (a * b) applies b first, then a, matching isometry products.
impl Mul for Motor {
    type Output = Motor;
    fn mul(self, other: Motor) -> Motor {
        Motor { mv: self.mv.geometric(&other.mv) }
    }
}

/// Compare the action of two motors on a handful of probe points. Motors
/// have a global sign ambiguity (M and -M act identically), so comparing
/// coefficients directly would be too strict.
pub fn motors_act_alike(a: &Motor, b: &Motor, tolerance: f64) -> bool {
    let probes = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(-0.3, 0.7, 1.3),
    ];
    probes
        .iter()
        .all(|p| (a.apply_point(p) - b.apply_point(p)).norm() <= tolerance)
}
