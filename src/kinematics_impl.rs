//! The kinematic chain: joint angles in, motors and link positions out.
//!
//! The chain is a fixed sequence of five elementary motions: swing the base
//! by θ0, lift the shoulder by θ1, translate up the upper arm, bend the
//! elbow by θ2, translate back down the forearm. The frame graph caches
//! those five motors plus the four cumulative base-to-* products, and is
//! rebuilt wholesale whenever the angles change.

use crate::conformal::{E1, E2, E3, Multivector};
use crate::kinematic_error::KinematicError;
use crate::kinematic_traits::{JOINTS_AT_ZERO, Joints, LinkFrame};
use crate::motors::Motor;
use crate::parameters::cga_kinematics::Parameters;
use nalgebra::{Point3, Vector3};

/// Rotation plane of the base swing joint: the horizontal e1∧e2 plane, a
/// turn about the vertical shoulder axis.
pub(crate) fn swing_plane() -> Multivector {
    Multivector::basis(E1 | E2, 1.0)
}

/// Rotation plane of the lift joints, e3∧e1 (the canonical e13 blade,
/// negated): positive angles tip the arm from vertical toward forward.
pub(crate) fn lift_plane() -> Multivector {
    Multivector::basis(E1 | E3, -1.0)
}

/// The motors relating the chain frames: the five adjacent relations plus
/// the four cumulative base-to-* products used for position reads. Always
/// rebuilt as a whole; for any frames A, B, C in chain order the stored
/// motors satisfy base-to-C = base-to-B * B-to-C.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameGraph {
    pub base_to_shoulder: Motor,
    pub shoulder_to_upper: Motor,
    pub upper_to_elbow: Motor,
    pub elbow_to_forearm: Motor,
    pub forearm_to_endpoint: Motor,
    pub base_to_upper: Motor,
    pub base_to_elbow: Motor,
    pub base_to_forearm: Motor,
    pub base_to_endpoint: Motor,
}

impl FrameGraph {
    fn identity() -> Self {
        let id = Motor::identity();
        FrameGraph {
            base_to_shoulder: id,
            shoulder_to_upper: id,
            upper_to_elbow: id,
            elbow_to_forearm: id,
            forearm_to_endpoint: id,
            base_to_upper: id,
            base_to_elbow: id,
            base_to_forearm: id,
            base_to_endpoint: id,
        }
    }

    /// Look up the motor for an ordered frame pair. Exactly the five
    /// adjacent and four cumulative pairs are stored; anything else is None.
    pub fn motor(&self, from: LinkFrame, to: LinkFrame) -> Option<&Motor> {
        use LinkFrame::*;
        match (from, to) {
            (Base, Shoulder) => Some(&self.base_to_shoulder),
            (Shoulder, Upper) => Some(&self.shoulder_to_upper),
            (Upper, Elbow) => Some(&self.upper_to_elbow),
            (Elbow, Forearm) => Some(&self.elbow_to_forearm),
            (Forearm, Endpoint) => Some(&self.forearm_to_endpoint),
            (Base, Upper) => Some(&self.base_to_upper),
            (Base, Elbow) => Some(&self.base_to_elbow),
            (Base, Forearm) => Some(&self.base_to_forearm),
            (Base, Endpoint) => Some(&self.base_to_endpoint),
            _ => None,
        }
    }
}

/// A 3 axis serial arm: immutable link lengths, the current joint angles and
/// the frame graph derived from them.
pub struct KinematicChain {
    parameters: Parameters,
    thetas: Joints,
    frames: FrameGraph,
}

impl KinematicChain {
    /// Creates the chain with all joints at zero. Both link lengths must be
    /// positive and finite.
    pub fn new(parameters: Parameters) -> Result<Self, KinematicError> {
        for (name, value) in [("rho", parameters.rho), ("l", parameters.l)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(KinematicError::InvalidParameter { name, value });
            }
        }
        let mut chain = KinematicChain {
            parameters,
            thetas: JOINTS_AT_ZERO,
            frames: FrameGraph::identity(),
        };
        chain.set_angles(JOINTS_AT_ZERO);
        Ok(chain)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// The current joint angles in radians.
    pub fn angles(&self) -> Joints {
        self.thetas
    }

    /// The cached frame graph for the current angles.
    pub fn frames(&self) -> &FrameGraph {
        &self.frames
    }

    /// Stores the angles and rebuilds the whole frame graph. Angles are not
    /// range-restricted (the chain is periodic in 2π).
    pub fn set_angles(&mut self, thetas: Joints) {
        let [theta0, theta1, theta2] = thetas;
        let p = &self.parameters;

        let base_to_shoulder = Motor::rotation(theta0, &swing_plane());
        let shoulder_to_upper = Motor::rotation(theta1, &lift_plane());
        let upper_to_elbow = Motor::translation(&(Vector3::z() * p.rho));
        let elbow_to_forearm = Motor::rotation(theta2, &lift_plane());
        let forearm_to_endpoint = Motor::translation(&(Vector3::z() * -p.l));

        let base_to_upper = base_to_shoulder * shoulder_to_upper;
        let base_to_elbow = base_to_upper * upper_to_elbow;
        let base_to_forearm = base_to_elbow * elbow_to_forearm;
        let base_to_endpoint = base_to_forearm * forearm_to_endpoint;

        self.thetas = thetas;
        self.frames = FrameGraph {
            base_to_shoulder,
            shoulder_to_upper,
            upper_to_elbow,
            elbow_to_forearm,
            forearm_to_endpoint,
            base_to_upper,
            base_to_elbow,
            base_to_forearm,
            base_to_endpoint,
        };
    }

    /// Position of the elbow in the base frame: the image of the local
    /// origin under the cached base-to-elbow motor.
    pub fn elbow_position(&self) -> Point3<f64> {
        self.frames.base_to_elbow.apply_point(&Point3::origin())
    }

    /// Position of the endpoint in the base frame.
    pub fn endpoint_position(&self) -> Point3<f64> {
        self.frames.base_to_endpoint.apply_point(&Point3::origin())
    }
}
