//! Closed-form inverse kinematics via intersection of constraint surfaces.
//!
//! Candidate elbow positions lie on the sphere of radius l about the target
//! (what the rigid forearm can reach) and on the sphere of radius ρ about
//! the base (what the rigid upper arm can reach). Once the base swing is
//! fixed, the lift joints only bend within the vertical plane through the
//! shoulder axis and the target, so wedging the two spheres with that plane
//! in IPNS form yields the elbow point pair directly. The three joint
//! angles then follow from planar arctangents, and the chain is rebuilt
//! through `set_angles` so the frame graph stays consistent.
//!
//! The solve is stateless except for one deliberate exception: when the
//! target sits on the shoulder axis the plane is undefined, every base
//! angle reaches equally well, and the chain's current θ0 is kept.

use crate::kinematic_error::KinematicError;
use crate::kinematic_traits::Joints;
use crate::kinematics_impl::{KinematicChain, lift_plane, swing_plane};
use crate::motors::Motor;
use crate::surfaces::{PointPair, plane_blade, sphere, unit_plane};
use nalgebra::{Point3, Vector3};

/// Dimensionless reality threshold for the elbow point pair. The surfaces
/// are unit-normalized, making the pair square 1 - δ² with δ the inversive
/// distance of the spheres, so one constant serves every arm scale.
const PAIR_REALITY_TOLERANCE: f64 = 1e-9;

/// Height difference below which the two elbow candidates count as level
/// and the selection falls through to the half-plane rule.
const BRANCH_TIE_TOLERANCE: f64 = 1e-9;

/// Scale factor for deciding that the plane blade through the target is
/// null, i.e. the target sits on the shoulder axis.
const PLANE_NULL_TOLERANCE: f64 = 1e-12;

impl KinematicChain {
    /// Computes a joint angle triple placing the endpoint at `target` and
    /// applies it to the chain exactly as `set_angles` would. After a
    /// successful return, `endpoint_position` matches the target to
    /// floating-point tolerance.
    ///
    /// The elbow is geometrically two-valued; of the two candidates this
    /// solver deterministically prefers the higher one ("elbow up"), and
    /// when both are level (a target on the shoulder axis) the one in the
    /// half-plane of the current forward direction.
    ///
    /// Returns [KinematicError::Unreachable] when the target distance lies
    /// outside the annulus between |ρ-l| and ρ+l. A target exactly on the
    /// boundary is reachable: both candidates collapse onto the single
    /// fully-extended (or fully-folded) elbow.
    pub fn solve_for_endpoint(&mut self, target: &Point3<f64>) -> Result<Joints, KinematicError> {
        let (rho, l) = (self.parameters().rho, self.parameters().l);
        let distance = target.coords.norm();
        let axis_tip = Point3::new(0.0, 0.0, 1.0);

        let target_sphere = sphere(target, l);
        let base_sphere = sphere(&Point3::origin(), rho);

        // Vertical plane through the shoulder axis and the target. Its
        // blade is null exactly when the target sits on the axis and every
        // base angle reaches equally well.
        let through_target = plane_blade(&Point3::origin(), &axis_tip, target);
        let null_tolerance = PLANE_NULL_TOLERANCE * (1.0 + distance) * (1.0 + distance);
        let degenerate = through_target.is_null(null_tolerance);

        let theta0 = if degenerate {
            self.angles()[0]
        } else {
            target.y.atan2(target.x)
        };
        let forward = Vector3::new(theta0.cos(), theta0.sin(), 0.0);

        let plane = if degenerate {
            // No base swing is needed; cut the candidate circle with the
            // vertical plane of the pose's own forward direction instead.
            unit_plane(&plane_blade(&Point3::origin(), &axis_tip, &Point3::from(forward)))
        } else {
            unit_plane(&through_target)
        };

        let pair = PointPair::from_ipns_blade(&(target_sphere ^ base_sphere ^ plane));
        if !pair.is_real(PAIR_REALITY_TOLERANCE) {
            return Err(KinematicError::Unreachable {
                distance,
                min_reach: (rho - l).abs(),
                max_reach: rho + l,
            });
        }

        let elbow = match pair.endpoints() {
            Some((first, second)) => select_branch(&first, &second, &forward),
            // The pair blade collapses when the two spheres (nearly)
            // coincide. Off the base that still pins the elbow to the line
            // toward the target; at the base itself (possible only for
            // ρ = l) every elbow on the shoulder sphere works equally well,
            // so stay where the chain is.
            None => {
                if distance > 1e-9 * (rho + l) {
                    Point3::from(target.coords * (rho / distance))
                } else {
                    self.elbow_position()
                }
            }
        };

        // Remove the base swing and read the lift angle off the plane.
        let swing = Motor::rotation(theta0, &swing_plane());
        let elbow_local = swing.reverse().apply_point(&elbow);
        let theta1 = elbow_local.x.atan2(elbow_local.z);

        // Express the target in the elbow frame. The forearm points
        // backward at zero, hence the negated coordinates.
        let base_to_elbow = swing
            * Motor::rotation(theta1, &lift_plane())
            * Motor::translation(&(Vector3::z() * rho));
        let target_local = base_to_elbow.reverse().apply_point(target);
        let theta2 = (-target_local.x).atan2(-target_local.z);

        self.set_angles([theta0, theta1, theta2]);
        Ok(self.angles())
    }
}

/// Deterministic elbow branch selection: the higher candidate, or on a tie
/// the one toward the current forward direction.
fn select_branch(
    first: &Point3<f64>,
    second: &Point3<f64>,
    forward: &Vector3<f64>,
) -> Point3<f64> {
    if first.z > second.z + BRANCH_TIE_TOLERANCE {
        *first
    } else if second.z > first.z + BRANCH_TIE_TOLERANCE {
        *second
    } else if (first - second).dot(forward) >= 0.0 {
        *first
    } else {
        *second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::cga_kinematics::Parameters;
    use crate::utils::assert_point_eq;
    use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, PI, SQRT_2};

    const SMALL: f64 = 1e-9;

    fn unit_chain() -> KinematicChain {
        KinematicChain::new(Parameters::unit_arm()).expect("valid parameters")
    }

    #[test]
    fn test_recovers_forward_pose() {
        let mut chain = unit_chain();
        chain.set_angles([FRAC_PI_6, FRAC_PI_3, 3.0 * PI / 4.0]);
        let target = chain.endpoint_position();

        // Start the solve from an unrelated pose.
        chain.set_angles([0.0, 0.0, 0.0]);
        chain.solve_for_endpoint(&target).expect("target is reachable");
        assert_point_eq(&chain.endpoint_position(), &target, SMALL);
    }

    #[test]
    fn test_solution_is_applied_to_the_chain() {
        let mut chain = unit_chain();
        let target = Point3::new(0.9, 0.2, 0.5);
        let solution = chain.solve_for_endpoint(&target).expect("reachable");
        assert_eq!(solution, chain.angles());
        assert_point_eq(&chain.endpoint_position(), &target, SMALL);
        // The frame graph was rebuilt along with the angles.
        let elbow = chain.elbow_position();
        assert!((elbow.coords.norm() - 1.0).abs() < SMALL);
        assert!(((target - elbow).norm() - 0.5).abs() < SMALL);
    }

    #[test]
    fn test_prefers_elbow_up() {
        let mut chain = unit_chain();
        // Horizontal target: the two elbow candidates mirror in height.
        chain.solve_for_endpoint(&Point3::new(1.2, 0.0, 0.0)).expect("reachable");
        assert!(chain.elbow_position().z > 0.1);
    }

    #[test]
    fn test_degenerate_target_on_axis_keeps_base_angle() {
        let mut chain = unit_chain();
        chain.set_angles([0.7, 0.3, 0.4]);
        let target = Point3::new(0.0, 0.0, 1.2);
        let solution = chain.solve_for_endpoint(&target).expect("reachable");

        // Any base angle reaches an on-axis target; the prior one is kept
        // exactly, and the elbow stays in that half-plane.
        assert_eq!(solution[0], 0.7);
        let elbow = chain.elbow_position();
        assert!((elbow.y.atan2(elbow.x) - 0.7).abs() < SMALL);
        assert!((elbow.z - 0.9125).abs() < SMALL);
        assert_point_eq(&chain.endpoint_position(), &target, SMALL);
    }

    #[test]
    fn test_degenerate_target_below_base() {
        let mut chain = unit_chain();
        chain.set_angles([1.1, 0.2, 0.3]);
        let target = Point3::new(0.0, 0.0, -0.8);
        let solution = chain.solve_for_endpoint(&target).expect("reachable");
        assert_eq!(solution[0], 1.1);
        assert_point_eq(&chain.endpoint_position(), &target, SMALL);
    }

    #[test]
    fn test_full_extension_boundary() {
        let mut chain = unit_chain();
        // Distance exactly ρ + l: the spheres are tangent, a single elbow.
        let target = Point3::new(1.5 / SQRT_2, 0.0, 1.5 / SQRT_2);
        chain.solve_for_endpoint(&target).expect("boundary targets are reachable");
        assert_point_eq(&chain.endpoint_position(), &target, SMALL);
        // The elbow must sit on the line from base to target.
        let elbow = chain.elbow_position();
        assert_point_eq(&elbow, &Point3::new(1.0 / SQRT_2, 0.0, 1.0 / SQRT_2), SMALL);
    }

    #[test]
    fn test_full_fold_boundary() {
        let mut chain = unit_chain();
        // Distance exactly ρ - l: internally tangent spheres.
        let target = Point3::new(0.5, 0.0, 0.0);
        chain.solve_for_endpoint(&target).expect("boundary targets are reachable");
        assert_point_eq(&chain.endpoint_position(), &target, SMALL);
    }

    #[test]
    fn test_unreachable_targets() {
        let mut chain = unit_chain();
        let before = chain.angles();
        for target in [
            Point3::new(2.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, 1.7),
            Point3::new(0.1, 0.1, 0.1),
            Point3::new(0.0, 0.0, 0.2),
        ] {
            match chain.solve_for_endpoint(&target) {
                Err(KinematicError::Unreachable { min_reach, max_reach, .. }) => {
                    assert_eq!(min_reach, 0.5);
                    assert_eq!(max_reach, 1.5);
                }
                other => panic!("expected Unreachable for {:?}, got {:?}", target, other),
            }
        }
        // Failed solves leave the chain untouched.
        assert_eq!(chain.angles(), before);
    }

    #[test]
    fn test_target_at_base_with_equal_links() {
        let mut chain =
            KinematicChain::new(Parameters { rho: 0.8, l: 0.8 }).expect("valid parameters");
        chain.set_angles([0.3, 0.5, 0.1]);
        let solution = chain
            .solve_for_endpoint(&Point3::origin())
            .expect("equal links fold back onto the base");
        assert_eq!(solution[0], 0.3);
        assert!((solution[1] - 0.5).abs() < SMALL);
        assert_point_eq(&chain.endpoint_position(), &Point3::origin(), SMALL);
    }

    #[test]
    fn test_target_at_base_with_unequal_links_is_unreachable() {
        let mut chain = unit_chain();
        let result = chain.solve_for_endpoint(&Point3::new(0.0, 0.0, 1e-12));
        assert!(matches!(result, Err(KinematicError::Unreachable { .. })));
    }
}
