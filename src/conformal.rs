//! Minimal conformal geometric algebra Cl(4,1) over f64.
//!
//! The three Euclidean directions e1, e2, e3 are extended with e+ (squaring
//! to +1) and e- (squaring to -1). From those the two null vectors are formed:
//! n∞ = e- + e+ (the point at infinity) and no = (e- - e+)/2 (the origin).
//! Euclidean points embed as null vectors via [up] and come back via [down].
//!
//! A multivector is stored dense: 32 coefficients, one per basis blade, the
//! blade keyed by a 5-bit mask (bit 0 = e1 ... bit 4 = e-). This keeps the
//! products simple table-free double loops, which is fast enough for
//! kinematics where every operation touches a handful of blades.

use nalgebra::Vector3;
use std::ops::{Add, BitXor, Mul, Neg, Sub};

/// Blade mask of e1.
pub const E1: usize = 0b00001;
/// Blade mask of e2.
pub const E2: usize = 0b00010;
/// Blade mask of e3.
pub const E3: usize = 0b00100;
/// Blade mask of e+, the extra basis vector squaring to +1.
pub const EPLUS: usize = 0b01000;
/// Blade mask of e-, the extra basis vector squaring to -1.
pub const EMINUS: usize = 0b10000;

const BASIS_COUNT: usize = 32;
const PSEUDOSCALAR: usize = E1 | E2 | E3 | EPLUS | EMINUS;

/// Sign produced by reordering the product of two canonically ordered blades
/// into canonical order (counts the transpositions).
fn reorder_sign(a: usize, b: usize) -> f64 {
    let mut a = a >> 1;
    let mut swaps = 0u32;
    while a != 0 {
        swaps += (a & b).count_ones();
        a >>= 1;
    }
    if swaps % 2 == 0 { 1.0 } else { -1.0 }
}

/// Product of two basis blades: resulting blade mask and sign. The only
/// basis vector with a negative square is e-.
fn blade_product(a: usize, b: usize) -> (usize, f64) {
    let mut sign = reorder_sign(a, b);
    if a & b & EMINUS != 0 {
        sign = -sign;
    }
    (a ^ b, sign)
}

/// Dense multivector of Cl(4,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Multivector {
    coefficients: [f64; BASIS_COUNT],
}

impl Multivector {
    pub fn zero() -> Self {
        Multivector { coefficients: [0.0; BASIS_COUNT] }
    }

    pub fn scalar(value: f64) -> Self {
        let mut result = Self::zero();
        result.coefficients[0] = value;
        result
    }

    /// A single basis blade, keyed by its bit mask.
    pub fn basis(mask: usize, coefficient: f64) -> Self {
        let mut result = Self::zero();
        result.coefficients[mask] = coefficient;
        result
    }

    /// Euclidean vector as a grade 1 multivector.
    pub fn vector(v: &Vector3<f64>) -> Self {
        let mut result = Self::zero();
        result.coefficients[E1] = v.x;
        result.coefficients[E2] = v.y;
        result.coefficients[E3] = v.z;
        result
    }

    /// The null vector representing the point at infinity, n∞ = e- + e+.
    pub fn ninf() -> Self {
        let mut result = Self::zero();
        result.coefficients[EPLUS] = 1.0;
        result.coefficients[EMINUS] = 1.0;
        result
    }

    /// The null vector representing the origin, no = (e- - e+)/2.
    pub fn no() -> Self {
        let mut result = Self::zero();
        result.coefficients[EPLUS] = -0.5;
        result.coefficients[EMINUS] = 0.5;
        result
    }

    /// Coefficient of the blade with the given mask.
    pub fn coeff(&self, mask: usize) -> f64 {
        self.coefficients[mask]
    }

    /// The scalar (grade 0) part.
    pub fn scalar_part(&self) -> f64 {
        self.coefficients[0]
    }

    /// Geometric product.
    pub fn geometric(&self, other: &Multivector) -> Multivector {
        let mut result = Self::zero();
        for (a, &ca) in self.coefficients.iter().enumerate() {
            if ca == 0.0 {
                continue;
            }
            for (b, &cb) in other.coefficients.iter().enumerate() {
                if cb == 0.0 {
                    continue;
                }
                let (mask, sign) = blade_product(a, b);
                result.coefficients[mask] += sign * ca * cb;
            }
        }
        result
    }

    /// Outer (wedge) product: the grade-raising part of the geometric product.
    pub fn wedge(&self, other: &Multivector) -> Multivector {
        let mut result = Self::zero();
        for (a, &ca) in self.coefficients.iter().enumerate() {
            if ca == 0.0 {
                continue;
            }
            for (b, &cb) in other.coefficients.iter().enumerate() {
                if cb == 0.0 || a & b != 0 {
                    continue;
                }
                let (mask, sign) = blade_product(a, b);
                result.coefficients[mask] += sign * ca * cb;
            }
        }
        result
    }

    /// Left contraction: the grade-lowering product, nonzero only where the
    /// left blade is contained in the right one.
    pub fn left_contract(&self, other: &Multivector) -> Multivector {
        let mut result = Self::zero();
        for (a, &ca) in self.coefficients.iter().enumerate() {
            if ca == 0.0 {
                continue;
            }
            for (b, &cb) in other.coefficients.iter().enumerate() {
                if cb == 0.0 || a & !b != 0 {
                    continue;
                }
                let (mask, sign) = blade_product(a, b);
                result.coefficients[mask] += sign * ca * cb;
            }
        }
        result
    }

    /// Reversion: flips the sign of grades 2, 3, 6, 7, ...
    pub fn reverse(&self) -> Multivector {
        let mut result = Self::zero();
        for (mask, &c) in self.coefficients.iter().enumerate() {
            let grade = mask.count_ones();
            let sign = if (grade * grade.wrapping_sub(1) / 2) % 2 == 0 { 1.0 } else { -1.0 };
            result.coefficients[mask] = sign * c;
        }
        result
    }

    /// Dualization X ↦ X·I⁻¹ with I = e1e2e3e+e-. In Cl(4,1) the
    /// pseudoscalar squares to -1, so I⁻¹ = -I and dual(dual(X)) = -X.
    pub fn dual(&self) -> Multivector {
        self.geometric(&Multivector::basis(PSEUDOSCALAR, -1.0))
    }

    /// Intersection of two outer-product-form objects, computed by wedging
    /// the duals. The orientation (overall sign) follows the pseudoscalar
    /// convention and carries no geometric meaning here.
    pub fn meet(&self, other: &Multivector) -> Multivector {
        self.dual().wedge(&other.dual()).dual()
    }

    /// Projection onto a single grade.
    pub fn grade(&self, grade: u32) -> Multivector {
        let mut result = Self::zero();
        for (mask, &c) in self.coefficients.iter().enumerate() {
            if mask.count_ones() == grade {
                result.coefficients[mask] = c;
            }
        }
        result
    }

    /// Largest absolute coefficient.
    pub fn norm_inf(&self) -> f64 {
        self.coefficients.iter().fold(0.0, |acc, c| acc.max(c.abs()))
    }

    /// True if every coefficient is within `tolerance` of zero.
    pub fn is_null(&self, tolerance: f64) -> bool {
        self.norm_inf() <= tolerance
    }

    /// Coefficient-wise comparison with tolerance.
    pub fn approx_eq(&self, other: &Multivector, tolerance: f64) -> bool {
        self.coefficients
            .iter()
            .zip(other.coefficients.iter())
            .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}

impl Add for Multivector {
    type Output = Multivector;
    fn add(self, other: Multivector) -> Multivector {
        let mut result = self;
        for (c, o) in result.coefficients.iter_mut().zip(other.coefficients.iter()) {
            *c += o;
        }
        result
    }
}

impl Sub for Multivector {
    type Output = Multivector;
    fn sub(self, other: Multivector) -> Multivector {
        let mut result = self;
        for (c, o) in result.coefficients.iter_mut().zip(other.coefficients.iter()) {
            *c -= o;
        }
        result
    }
}

impl Neg for Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        let mut result = self;
        for c in result.coefficients.iter_mut() {
            *c = -*c;
        }
        result
    }
}

impl Mul<f64> for Multivector {
    type Output = Multivector;
    fn mul(self, factor: f64) -> Multivector {
        let mut result = self;
        for c in result.coefficients.iter_mut() {
            *c *= factor;
        }
        result
    }
}

/// Geometric product.
impl Mul for Multivector {
    type Output = Multivector;
    fn mul(self, other: Multivector) -> Multivector {
        self.geometric(&other)
    }
}

/// Outer product, in the usual geometric algebra notation a ^ b.
impl BitXor for Multivector {
    type Output = Multivector;
    fn bitxor(self, other: Multivector) -> Multivector {
        self.wedge(&other)
    }
}

/// Conformal embedding of a Euclidean point: up(x) = no + x + x²/2·n∞.
/// The result is a null vector of weight 1.
pub fn up(v: &Vector3<f64>) -> Multivector {
    let half_square = 0.5 * v.norm_squared();
    let mut result = Multivector::vector(v);
    result.coefficients[EPLUS] = half_square - 0.5;
    result.coefficients[EMINUS] = half_square + 0.5;
    result
}

/// Projection of a conformal point back to Euclidean coordinates, dividing
/// out the point weight -X·n∞. Returns None when the weight has collapsed
/// (a point at infinity, or a degenerate extraction result).
pub fn down(x: &Multivector) -> Option<Vector3<f64>> {
    let weight = x.coeff(EMINUS) - x.coeff(EPLUS);
    if weight.abs() <= 1e-12 * (1.0 + x.norm_inf()) {
        return None;
    }
    Some(Vector3::new(
        x.coeff(E1) / weight,
        x.coeff(E2) / weight,
        x.coeff(E3) / weight,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: f64 = 1e-12;

    #[test]
    fn test_basis_squares() {
        for (mask, expected) in [(E1, 1.0), (E2, 1.0), (E3, 1.0), (EPLUS, 1.0), (EMINUS, -1.0)] {
            let e = Multivector::basis(mask, 1.0);
            assert_eq!(e.geometric(&e).scalar_part(), expected);
        }
    }

    #[test]
    fn test_anticommutation() {
        let e1 = Multivector::basis(E1, 1.0);
        let e2 = Multivector::basis(E2, 1.0);
        let lhs = e1 * e2;
        let rhs = e2 * e1;
        assert!(lhs.approx_eq(&-rhs, SMALL));
        assert_eq!(lhs.coeff(E1 | E2), 1.0);
    }

    #[test]
    fn test_null_basis() {
        let ninf = Multivector::ninf();
        let no = Multivector::no();
        assert!(ninf.geometric(&ninf).is_null(SMALL));
        assert!(no.geometric(&no).is_null(SMALL));
        // n∞·no = -1
        assert!((ninf.geometric(&no).scalar_part() - -1.0).abs() < SMALL);
    }

    #[test]
    fn test_up_down_round_trip() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let x = up(&v);
        // Conformal points are null vectors
        assert!(x.geometric(&x).scalar_part().abs() < SMALL);
        let back = down(&x).expect("weight 1 point must project");
        assert!((back - v).norm() < SMALL);
    }

    #[test]
    fn test_down_rejects_infinity() {
        assert!(down(&Multivector::ninf()).is_none());
    }

    #[test]
    fn test_pseudoscalar_square() {
        let i = Multivector::basis(E1 | E2 | E3 | EPLUS | EMINUS, 1.0);
        assert_eq!(i.geometric(&i).scalar_part(), -1.0);
    }

    #[test]
    fn test_double_dual_negates() {
        let x = up(&Vector3::new(0.3, -0.7, 1.1));
        assert!(x.dual().dual().approx_eq(&-x, SMALL));
    }

    #[test]
    fn test_reverse_of_bivector() {
        let b = Multivector::basis(E1 | E2, 2.5);
        assert!(b.reverse().approx_eq(&-b, SMALL));
        let s = Multivector::scalar(3.0);
        assert!(s.reverse().approx_eq(&s, SMALL));
    }

    #[test]
    fn test_wedge_is_antisymmetric_on_vectors() {
        let a = Multivector::vector(&Vector3::new(1.0, 2.0, 3.0));
        let b = Multivector::vector(&Vector3::new(-0.5, 0.4, 0.9));
        assert!((a ^ b).approx_eq(&-(b ^ a), SMALL));
        assert!((a ^ a).is_null(SMALL));
    }

    #[test]
    fn test_left_contraction_vector_bivector() {
        // e1 ⌋ (e1 ^ e2) = e2
        let e1 = Multivector::basis(E1, 1.0);
        let e12 = Multivector::basis(E1 | E2, 1.0);
        let result = e1.left_contract(&e12);
        assert!(result.approx_eq(&Multivector::basis(E2, 1.0), SMALL));
    }

    #[test]
    fn test_geometric_product_associative() {
        let a = up(&Vector3::new(0.1, 0.2, 0.3));
        let b = Multivector::basis(E1 | E3, -0.8) + Multivector::scalar(0.6);
        let c = Multivector::ninf() + Multivector::vector(&Vector3::new(1.0, 0.0, -1.0));
        let lhs = a.geometric(&b).geometric(&c);
        let rhs = a.geometric(&b.geometric(&c));
        assert!(lhs.approx_eq(&rhs, 1e-9));
    }
}
