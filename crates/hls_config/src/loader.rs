//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ProjectConfig;
use std::path::Path;

/// Loads and validates a `sched.toml` configuration from a project
/// directory.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join("sched.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `sched.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and configuration values are
/// consistent.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if let Some(area_cost) = &config.defaults.area_cost {
        if area_cost.is_empty() {
            return Err(ConfigError::ValidationError(
                "defaults.area_cost must not be an empty list".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[project]
name = "my_design"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.project.name, "my_design");
        assert!(config.solver.binary.is_none());
        assert!(config.defaults.area_cost.is_none());
        assert!(config.defaults.latency.is_none());
        assert_eq!(config.defaults.output_dir, ".");
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[project]
name = "my_design"

[solver]
binary = "glpsol"

[defaults]
area_cost = [2, 2, 3, 5]
latency = 4
output_dir = "build"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.solver.binary.as_deref(), Some("glpsol"));
        assert_eq!(config.defaults.area_cost, Some(vec![2, 2, 3, 5]));
        assert_eq!(config.defaults.latency, Some(4));
        assert_eq!(config.defaults.output_dir, "build");
    }

    #[test]
    fn missing_name_errors() {
        let toml = r#"
[project]
name = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn empty_area_cost_errors() {
        let toml = r#"
[project]
name = "test"

[defaults]
area_cost = []
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let toml = "this is not valid toml {{{}}}";
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn io_error_from_nonexistent_dir() {
        let err = load_config(Path::new("/nonexistent/dir")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
    }
}
