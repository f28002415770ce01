//! Hardcoded parameters for a few arms

pub mod cga_kinematics {
    use crate::parameters::cga_kinematics::Parameters;

    #[allow(dead_code)]
    impl Parameters {
        // Provides default values
        pub fn new() -> Self {
            Parameters { rho: 1.0, l: 0.5 }
        }

        /// One meter upper arm, half meter forearm. Handy for worked
        /// examples as most positions come out in round figures.
        pub fn unit_arm() -> Self {
            Parameters { rho: 1.0, l: 0.5 }
        }

        /// Small desk-mounted arm.
        pub fn desktop_arm() -> Self {
            Parameters { rho: 0.35, l: 0.22 }
        }

        /// Long-reach variant with a nearly balanced forearm.
        pub fn long_reach() -> Self {
            Parameters { rho: 1.8, l: 1.25 }
        }
    }
}
