//! Defines the arm parameter data structure

pub mod cga_kinematics {
    /// Geometric parameters of the arm. See [parameters_robots.rs](parameters_robots.rs)
    /// for a few concrete presets.
    #[derive(Debug, Clone, Copy)]
    pub struct Parameters {
        /// The length of the upper arm (distance from the shoulder to the elbow).
        pub rho: f64,

        /// The length of the forearm (distance from the elbow to the endpoint mount).
        pub l: f64,
    }

    impl Parameters {
        /// Convert to string yaml representation (quick viewing, etc). The
        /// output parses back with `Parameters::from_yaml`.
        pub fn to_yaml(&self) -> String {
            format!(
                "cga_kinematics_geometric_parameters:\n  \
              rho: {}\n  \
              l: {}\n",
                self.rho, self.l
            )
        }
    }
}
