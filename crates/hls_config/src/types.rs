//! Configuration types deserialized from `sched.toml`.

use serde::Deserialize;

/// The top-level project configuration parsed from `sched.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata.
    pub project: ProjectMeta,
    /// Solver invocation settings.
    #[serde(default)]
    pub solver: SolverConfig,
    /// Default CLI inputs used when not overridden on the command line.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Core project metadata required in every `sched.toml`.
#[derive(Debug, Deserialize)]
pub struct ProjectMeta {
    /// The project name.
    pub name: String,
}

/// Settings controlling the optional `glpsol` invocation.
#[derive(Debug, Default, Deserialize)]
pub struct SolverConfig {
    /// Path to a glpsol-compatible binary. If absent, the CLI only emits
    /// the `.lp` file(s) and skips solving.
    pub binary: Option<String>,
}

/// Default CLI inputs, used when `--latency` / `--area-cost` are omitted.
#[derive(Debug, Default, Deserialize)]
pub struct DefaultsConfig {
    /// Default area-cost / resource-count vector, keyed positionally by
    /// ascending interior unit id.
    pub area_cost: Option<Vec<u32>>,
    /// Default latency bound.
    pub latency: Option<u32>,
    /// Directory `.lp` files and solver output are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        DefaultsConfig {
            area_cost: None,
            latency: None,
            output_dir: default_output_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::loader::load_config_from_str;

    #[test]
    fn defaults_output_dir_is_current_directory() {
        let toml = r#"
[project]
name = "example"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.defaults.output_dir, ".");
    }
}
