//! Shared types for the kinematic chain: the joint vector and the labels of
//! the chain frames.

/// The three joint angles of the arm in radians: base swing, shoulder lift,
/// elbow bend. Angles are periodic in 2π; no limits are enforced here, any
/// joint limit policy belongs to the caller.
pub type Joints = [f64; 3];

/// All joints at the zero position (the arm pointing straight up, with the
/// forearm folded back along the upper arm).
pub const JOINTS_AT_ZERO: Joints = [0.0, 0.0, 0.0];

/// Labels for the frames of the chain, in chain order. Purely identifiers;
/// the motors between them live in the frame graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkFrame {
    Base,
    Shoulder,
    Upper,
    Elbow,
    Forearm,
    Endpoint,
}
