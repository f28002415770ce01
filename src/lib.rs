//! Rust implementation of forward and inverse kinematic solutions for a
//! 3 axis serial arm, expressed in conformal geometric algebra (CGA).
//!
//! Rigid motions are represented as motors (rotation and translation
//! versors of Cl(4,1)) that compose by the geometric product, so the chain
//! of link transforms reads as one product of five elementary motions. The
//! inverse problem is solved in closed form without trigonometric case
//! analysis: the candidate elbow positions are the intersection of two
//! spheres (what each rigid link can reach) with the vertical plane fixed
//! by the base swing, computed as a single outer product of the surfaces in
//! their inner-product representation.
//!
//! # Features
//!
//! - Forward kinematics keeps a full frame graph: the five adjacent link
//!   transforms plus the cumulative base-to-* motors, rebuilt consistently
//!   on every angle change.
//! - The inverse solver is closed-form and deterministic, with a documented
//!   elbow-up branch policy, and re-runs the forward composition so the
//!   returned state is always self-consistent.
//! - Targets on the shoulder axis (where the base angle is arbitrary) are
//!   recognized and solved without disturbing the current base angle.
//! - Unreachable targets are reported with the offending distance and the
//!   reachable annulus rather than producing NaN angles; targets exactly on
//!   the reach boundary resolve to the single fully-extended pose.
//! - Arm geometry can be loaded from YAML files (optional, on by default).
//!
//! # Parameters
//!
//! This library uses two kinematic parameters: the upper arm length ρ and
//! the forearm length l. The arm is at zero when it sticks straight up, with
//! the forearm folded back along the upper arm; positive base angles swing
//! the forward direction toward the lateral one, and positive lift angles
//! tip the arm from vertical toward forward. To use the library, fill out a
//! `Parameters` data structure or pick one of the presets.

pub mod parameters;
pub mod parameters_robots;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;

pub mod utils;
pub mod kinematic_traits;

pub mod conformal;
pub mod motors;
pub mod surfaces;

pub mod kinematics_impl;
pub mod solver;

pub mod kinematic_error;

#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;
