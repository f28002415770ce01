//! Constraint surfaces for the closed-form solver: spheres and planes in
//! inner-product (IPNS) form, and the point pair their intersection
//! produces.
//!
//! In IPNS form the intersection of surfaces is their outer product, so the
//! locus of elbow candidates falls out as sphere ^ sphere ^ plane, a grade 3
//! blade. Dualizing that blade gives the outer-product (OPNS) point pair
//! from which the two candidate points are extracted.
//!
//! All surfaces here are unit-normalized. That makes the squared point pair
//! dimensionless: it equals 1 - δ² where δ is the inversive distance of the
//! two spheres, so reality and tangency thresholds work at any arm scale.

use crate::conformal::{down, up, Multivector};
use nalgebra::Point3;

/// Unit-weight IPNS sphere: up(center) - r²/2·n∞, normalized by the radius.
/// A point X lies on the sphere exactly when X·s = 0.
pub fn sphere(center: &Point3<f64>, radius: f64) -> Multivector {
    let s = up(&center.coords) - Multivector::ninf() * (0.5 * radius * radius);
    s * (1.0 / radius.abs().max(f64::MIN_POSITIVE))
}

/// OPNS blade of the plane through three points (a plane being the sphere
/// through the point at infinity). The blade is null exactly when the three
/// points are collinear and no plane is determined.
pub fn plane_blade(a: &Point3<f64>, b: &Point3<f64>, c: &Point3<f64>) -> Multivector {
    up(&a.coords) ^ up(&b.coords) ^ up(&c.coords) ^ Multivector::ninf()
}

/// Unit-weight IPNS plane from an OPNS plane blade. The square of an IPNS
/// plane is its normal squared, positive for any proper plane.
pub fn unit_plane(blade: &Multivector) -> Multivector {
    let p = blade.dual();
    let norm = p.geometric(&p).scalar_part().abs().sqrt();
    p * (1.0 / norm.max(f64::MIN_POSITIVE))
}

/// A point pair in OPNS form, as produced by intersecting two spheres and a
/// plane. May be real (two points), tangent (the points coincide) or
/// imaginary (the surfaces do not intersect).
#[derive(Clone, Copy, Debug)]
pub struct PointPair {
    mv: Multivector,
}

impl PointPair {
    /// Dualizes the IPNS intersection blade (sphere ^ sphere ^ plane).
    pub fn from_ipns_blade(blade: &Multivector) -> Self {
        PointPair { mv: blade.dual() }
    }

    /// The scalar square of the pair. With unit-normalized input surfaces
    /// this is 1 - δ² (δ the inversive distance of the spheres): positive
    /// for a real pair, zero at tangency, negative when the intersection is
    /// imaginary.
    pub fn square(&self) -> f64 {
        self.mv.geometric(&self.mv).scalar_part()
    }

    /// True when the pair describes an actual intersection, within the given
    /// dimensionless tolerance.
    pub fn is_real(&self, tolerance: f64) -> bool {
        self.square() >= -tolerance
    }

    /// Extract the two endpoints. For a pair P with β = √(P²), the endpoints
    /// are the normalized grade 1 parts of P·(n∞⌋P) ∓ β·(n∞⌋P). A tangent
    /// pair yields the same point twice. Returns None only when the blade
    /// itself is null (e.g. built from coincident spheres) and no point
    /// weight survives.
    pub fn endpoints(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let beta = self.square().max(0.0).sqrt();
        let direction = Multivector::ninf().left_contract(&self.mv);
        let midpoint_blade = self.mv.geometric(&direction);
        let first = down(&(midpoint_blade - direction * beta).grade(1))?;
        let second = down(&(midpoint_blade + direction * beta).grade(1))?;
        Some((Point3::from(first), Point3::from(second)))
    }
}
