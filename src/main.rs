use anyhow::Result;
use nalgebra::Point3;
use rs_cga_kinematics::kinematic_error::KinematicError;
use rs_cga_kinematics::kinematic_traits::Joints;
use rs_cga_kinematics::kinematics_impl::KinematicChain;
use rs_cga_kinematics::parameters::cga_kinematics::Parameters;
use rs_cga_kinematics::utils::{dump_joints, dump_point};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6, PI};

/// Usage example.
fn main() -> Result<()> {
    let mut arm = KinematicChain::new(Parameters::unit_arm())?;

    let joints: Joints = [FRAC_PI_6, FRAC_PI_3, 3.0 * PI / 4.0]; // Joints are alias of [f64; 3]
    println!("Initial joints:");
    dump_joints(&joints);

    arm.set_angles(joints);
    println!("Elbow and endpoint from forward kinematics:");
    dump_point(&arm.elbow_position());
    dump_point(&arm.endpoint_position());

    println!("Solving back for the same endpoint from the zero pose:");
    let target = arm.endpoint_position();
    arm.set_angles([0.0, 0.0, 0.0]);
    let solution = arm.solve_for_endpoint(&target)?;
    dump_joints(&solution);
    println!("The solver prefers the elbow-up branch, so the angles may");
    println!("differ from the original while the endpoint matches:");
    dump_point(&arm.endpoint_position());

    println!("A target straight above the base leaves the base angle free;");
    println!("the current one is kept:");
    arm.set_angles([FRAC_PI_6, 0.3, 0.4]);
    let overhead = Point3::new(0.0, 0.0, 1.2);
    let solution = arm.solve_for_endpoint(&overhead)?;
    dump_joints(&solution);
    dump_point(&arm.endpoint_position());

    println!("Unreachable targets are reported, not solved:");
    match arm.solve_for_endpoint(&Point3::new(2.0, 0.0, 0.0)) {
        Err(KinematicError::Unreachable { distance, min_reach, max_reach }) => {
            println!(
                "distance {:.3} is outside the reachable [{:.3}, {:.3}]",
                distance, min_reach, max_reach
            );
        }
        other => println!("unexpected outcome: {:?}", other.map(|_| ())),
    }

    #[cfg(feature = "allow_filesystem")]
    {
        // This requires the YAML library
        let parameters = Parameters::unit_arm();
        println!("Configuration as YAML:\n{}", &parameters.to_yaml());
    }

    Ok(())
}
