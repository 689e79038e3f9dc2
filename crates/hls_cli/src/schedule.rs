//! The `hls-sched schedule` command: wires the edgelist reader, the core
//! orchestrator, the LP writer, and an optional `glpsol` invocation.

use std::path::{Path, PathBuf};
use std::process::Command as Process;

use hls_config::ProjectConfig;
use hls_core::orchestrate;
use hls_io::edgelist;
use hls_io::lp_file::{self, SolverResult};

use crate::error::CliError;
use crate::ScheduleArgs;

/// Runs the `schedule` command; returns the process exit code.
pub fn run(args: &ScheduleArgs) -> Result<i32, CliError> {
    let config = load_config(args)?;

    let latency = args.latency.or_else(|| config.as_ref().and_then(|c| c.defaults.latency));
    let area_cost = if args.area_cost.is_empty() {
        config.as_ref().and_then(|c| c.defaults.area_cost.clone())
    } else {
        Some(args.area_cost.clone())
    };
    let output_dir = args
        .solver_out
        .clone()
        .or_else(|| config.as_ref().map(|c| PathBuf::from(&c.defaults.output_dir)))
        .unwrap_or_else(|| PathBuf::from("."));
    let solver_binary = config.as_ref().and_then(|c| c.solver.binary.clone());

    let edges = edgelist::read_file(&args.graph)?;
    let graph = hls_core::Graph::from_edges(edges)?;

    let outputs = orchestrate::run(&graph, latency, area_cost)?;

    for output in &outputs {
        let lp_path = output_dir.join(format!("auto_{}.lp", output.objective.tag()));
        lp_file::write_lp(&lp_path, &output.lines)?;

        match &solver_binary {
            Some(binary) if binary_available(binary) => {
                let result_path = output_dir.join(format!("auto_{}.result", output.objective.tag()));
                invoke_solver(binary, &lp_path, &result_path)?;
                let result = lp_file::read_glpk_result(&result_path)?;
                print_qor_table(output.objective.tag(), &result);
            }
            Some(_) | None => {
                println!("wrote {}", lp_path.display());
            }
        }
    }

    Ok(0)
}

fn load_config(args: &ScheduleArgs) -> Result<Option<ProjectConfig>, CliError> {
    match &args.config {
        Some(path) => Ok(Some(hls_config::load_config_from_str(&std::fs::read_to_string(path)?)?)),
        None => {
            let default_path = Path::new("sched.toml");
            if default_path.exists() {
                Ok(Some(hls_config::load_config(Path::new("."))?))
            } else {
                Ok(None)
            }
        }
    }
}

fn binary_available(binary: &str) -> bool {
    let path = Path::new(binary);
    if path.is_absolute() || binary.contains('/') {
        return path.is_file();
    }
    std::env::var_os("PATH")
        .map(|paths| {
            std::env::split_paths(&paths).any(|dir| dir.join(binary).is_file())
        })
        .unwrap_or(false)
}

fn invoke_solver(binary: &str, lp_path: &Path, result_path: &Path) -> Result<(), CliError> {
    let status = Process::new(binary)
        .arg("--cpxlp")
        .arg(lp_path)
        .arg("-o")
        .arg(result_path)
        .status()?;
    if !status.success() {
        return Err(CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("{binary} exited with status {status}"),
        )));
    }
    Ok(())
}

fn print_qor_table(tag: &str, result: &SolverResult) {
    use prettytable::{row, Table};

    let mut table = Table::new();
    if tag == "MR-LC" {
        table.add_row(row!["resource", "minimum count"]);
        let mut rows: Vec<(&String, &f64)> = result
            .assignments
            .iter()
            .filter(|(name, _)| name.starts_with('a'))
            .collect();
        rows.sort_by_key(|(name, _)| name.as_str());
        for (name, value) in rows {
            table.add_row(row![name, value]);
        }
    } else {
        table.add_row(row!["node", "cycle"]);
        let mut rows: Vec<(&String, &f64)> = result
            .assignments
            .iter()
            .filter(|(name, _)| name.starts_with("x_"))
            .collect();
        rows.sort_by_key(|(name, _)| name.as_str());
        for (name, value) in rows {
            table.add_row(row![name, value]);
        }
    }
    println!("objective ({tag}): {}", result.objective);
    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_edgelist() -> &'static str {
        "s v1 root=0 child=1 root_cost=0 child_cost=2\n\
         v1 t root=1 child=5 root_cost=2 child_cost=0\n"
    }

    #[test]
    fn schedule_with_latency_writes_mr_lc_file() {
        let tmp = TempDir::new().unwrap();
        let graph_path = tmp.path().join("design.edgelist");
        fs::write(&graph_path, sample_edgelist()).unwrap();

        let args = ScheduleArgs {
            graph: graph_path,
            latency: Some(1),
            area_cost: Vec::new(),
            config: None,
            solver_out: Some(tmp.path().to_path_buf()),
        };
        let code = run(&args).unwrap();
        assert_eq!(code, 0);
        assert!(tmp.path().join("auto_MR-LC.lp").exists());
    }

    #[test]
    fn schedule_without_latency_or_area_cost_fails() {
        let tmp = TempDir::new().unwrap();
        let graph_path = tmp.path().join("design.edgelist");
        fs::write(&graph_path, sample_edgelist()).unwrap();

        let args = ScheduleArgs {
            graph: graph_path,
            latency: None,
            area_cost: Vec::new(),
            config: None,
            solver_out: Some(tmp.path().to_path_buf()),
        };
        let err = run(&args).unwrap_err();
        assert!(matches!(err, CliError::Schedule(_)));
    }

    #[test]
    fn schedule_with_area_cost_writes_ml_rc_file() {
        let tmp = TempDir::new().unwrap();
        let graph_path = tmp.path().join("design.edgelist");
        fs::write(&graph_path, sample_edgelist()).unwrap();

        let args = ScheduleArgs {
            graph: graph_path,
            latency: None,
            area_cost: vec![1],
            config: None,
            solver_out: Some(tmp.path().to_path_buf()),
        };
        let code = run(&args).unwrap();
        assert_eq!(code, 0);
        assert!(tmp.path().join("auto_ML-RC.lp").exists());
    }

    #[test]
    fn binary_available_detects_missing_binary() {
        assert!(!binary_available("definitely-not-a-real-solver-binary"));
    }
}
