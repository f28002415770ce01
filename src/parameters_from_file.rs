//! Supports extracting arm parameters from YAML file (optional)

use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::parameter_error::ParameterError;
use crate::parameters::cga_kinematics::Parameters;

impl Parameters {
    /// Read the arm configuration from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # One meter upper arm, half meter forearm
    /// cga_kinematics_geometric_parameters:
    ///   rho: 1.0
    ///   l: 0.5
    /// ```
    /// Both lengths are mandatory and must be positive. `Parameters::to_yaml`
    /// produces output in the same format.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse the arm configuration from a YAML string (same format as
    /// `from_yaml_file`).
    pub fn from_yaml(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(e.to_string()))?;
        let doc = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))?;

        let geometry = &doc["cga_kinematics_geometric_parameters"];
        if geometry.is_badvalue() {
            return Err(ParameterError::MissingField(
                "cga_kinematics_geometric_parameters".to_string(),
            ));
        }

        let rho = number(&geometry["rho"])
            .ok_or_else(|| ParameterError::MissingField("rho".to_string()))?;
        let l = number(&geometry["l"])
            .ok_or_else(|| ParameterError::MissingField("l".to_string()))?;

        for (name, value) in [("rho", rho), ("l", l)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::NonPositive { name, value });
            }
        }

        Ok(Parameters { rho, l })
    }
}

/// YAML scalars may come through as reals or integers; accept both.
fn number(yaml: &Yaml) -> Option<f64> {
    match yaml {
        Yaml::Real(_) => yaml.as_f64(),
        Yaml::Integer(value) => Some(*value as f64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_configuration() {
        let parameters = Parameters::from_yaml(
            "cga_kinematics_geometric_parameters:\n  rho: 1.0\n  l: 0.5\n",
        )
        .expect("valid configuration must parse");
        assert_eq!(parameters.rho, 1.0);
        assert_eq!(parameters.l, 0.5);
    }

    #[test]
    fn test_parse_integer_lengths() {
        let parameters = Parameters::from_yaml(
            "cga_kinematics_geometric_parameters:\n  rho: 2\n  l: 1\n",
        )
        .expect("integer lengths are accepted");
        assert_eq!(parameters.rho, 2.0);
        assert_eq!(parameters.l, 1.0);
    }

    #[test]
    fn test_round_trip_with_to_yaml() {
        let original = Parameters { rho: 1.8, l: 1.25 };
        let restored = Parameters::from_yaml(&original.to_yaml())
            .expect("to_yaml output must parse back");
        assert_eq!(original.rho, restored.rho);
        assert_eq!(original.l, restored.l);
    }

    #[test]
    fn test_missing_section() {
        let result = Parameters::from_yaml("something_else: 1\n");
        assert!(matches!(result, Err(ParameterError::MissingField(_))));
    }

    #[test]
    fn test_missing_length() {
        let result = Parameters::from_yaml(
            "cga_kinematics_geometric_parameters:\n  rho: 1.0\n",
        );
        assert!(matches!(result, Err(ParameterError::MissingField(ref f)) if f == "l"));
    }

    #[test]
    fn test_rejects_non_positive_length() {
        let result = Parameters::from_yaml(
            "cga_kinematics_geometric_parameters:\n  rho: 0.0\n  l: 0.5\n",
        );
        assert!(matches!(
            result,
            Err(ParameterError::NonPositive { name: "rho", .. })
        ));
    }
}
