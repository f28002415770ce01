//! Helper functions

use crate::kinematic_traits::Joints;
use nalgebra::Point3;

/// Convert array of f32's in degrees to Joints
/// that are array of f64's in radians
pub fn joints(angles: &[f32; 3]) -> Joints {
    [
        (angles[0] as f64).to_radians(),
        (angles[1] as f64).to_radians(),
        (angles[2] as f64).to_radians(),
    ]
}

/// Convert joints that are array of f64's in radians to
/// array of f32's in degrees
pub fn to_degrees(angles: &Joints) -> [f32; 3] {
    [
        angles[0].to_degrees() as f32,
        angles[1].to_degrees() as f32,
        angles[2].to_degrees() as f32,
    ]
}

/// Print joint values, converting radians to degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &Joints) {
    let mut row_str = String::new();
    for joint_idx in 0..3 {
        let computed = joints[joint_idx];
        row_str.push_str(&format!("{:7.2} ", computed.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print a Cartesian position.
pub fn dump_point(point: &Point3<f64>) {
    println!("x: {:.5}, y: {:.5}, z: {:.5}", point.x, point.y, point.z);
}

/// Allows to specify joint values in degrees (converts to radians)
#[allow(dead_code)]
pub fn as_radians(degrees: [i32; 3]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Panics with both points printed when they differ more than the tolerance.
pub fn assert_point_eq(ta: &Point3<f64>, tb: &Point3<f64>, tolerance: f64) -> bool {
    let distance = (ta - tb).norm();
    if distance > tolerance {
        dump_point(ta);
        dump_point(tb);
        panic!("Points differ by {}", distance);
    }
    true
}
