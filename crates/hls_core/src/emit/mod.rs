//! The LP emitter: produces the four constraint families and the objective
//! in canonical CPLEX-LP text.
//!
//! Emission proceeds through a fixed sequence of phases and never revisits
//! one: `Minimize -> Objective -> Subject To -> Execution -> Resource ->
//! Dependency -> Integer -> End`. Every phase is a pure function of the
//! graph plus the precomputed mobility windows.

pub mod names;

use crate::error::ScheduleError;
use crate::graph::Graph;
use crate::mobility::{self, Mobility};

/// The scheduling objective an emission targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Objective {
    /// Minimum Latency under Resource Constraints: resource counts per
    /// interior unit are fixed (positionally, ascending by unit id);
    /// latency is derived as `L_min` and minimized via weighted step sum.
    MlRc {
        /// Fixed resource count per interior unit, ascending by unit id.
        resource_counts: Vec<u32>,
    },
    /// Minimum Resources under a Latency Constraint: latency is bounded;
    /// resource counts become free integer variables minimized by the
    /// graph's own per-unit area costs.
    MrLc {
        /// The user-supplied latency bound.
        latency: u32,
    },
}

impl Objective {
    /// Short tag used for output filenames (`auto_<tag>.lp`).
    pub fn tag(&self) -> &'static str {
        match self {
            Objective::MlRc { .. } => "ML-RC",
            Objective::MrLc { .. } => "MR-LC",
        }
    }
}

/// Emits a complete CPLEX-LP program for `graph` under `objective`.
///
/// Runs validation and mobility analysis first; any failure there aborts
/// before a single line is produced, so emission is atomic.
pub fn emit(graph: &Graph, objective: &Objective) -> Result<Vec<String>, ScheduleError> {
    crate::validate::validate(graph)?;

    let user_latency = match objective {
        Objective::MlRc { .. } => None,
        Objective::MrLc { latency } => Some(*latency),
    };
    let mobility = mobility::analyze(graph, user_latency)?;

    if let Objective::MlRc { resource_counts } = objective {
        let expected = graph.interior_units().len();
        if resource_counts.len() != expected {
            return Err(ScheduleError::ResourceCountMismatch {
                expected,
                given: resource_counts.len(),
            });
        }
    }

    let order = names::canonical_order(graph);
    let sink = graph.sink();

    let mut lines = Vec::new();
    lines.push("Minimize".to_string());
    let objective_vars = emit_objective(&mut lines, graph, objective, &order, sink, &mobility);
    lines.push("Subject To".to_string());
    emit_execution(&mut lines, &order, sink, &mobility);
    emit_resource(&mut lines, graph, objective, &order, sink, &mobility);
    emit_dependency(&mut lines, graph, &order, sink, &mobility);
    emit_closing(&mut lines, graph, objective, &objective_vars);

    Ok(lines)
}

/// Returns the ordered list of variable names appearing in the objective,
/// so the closing `Integer` section can enumerate exactly those.
fn emit_objective(
    lines: &mut Vec<String>,
    graph: &Graph,
    objective: &Objective,
    order: &[String],
    sink: &str,
    mobility: &Mobility,
) -> Vec<String> {
    match objective {
        Objective::MrLc { .. } => {
            let terms: Vec<String> = graph
                .interior_units()
                .into_iter()
                .map(|unit| {
                    let cost = graph.units()[&unit];
                    let var = names::resource_var(unit);
                    (format!("{cost}{var}"), var)
                })
                .collect();
            lines.push(format!("  {}", terms.iter().map(|(t, _)| t.clone()).collect::<Vec<_>>().join(" + ")));
            terms.into_iter().map(|(_, v)| v).collect()
        }
        Objective::MlRc { .. } => {
            let mut terms = Vec::new();
            for label in order {
                if label == graph.source() {
                    continue;
                }
                if mobility.is_critical(label) {
                    continue;
                }
                let id = names::subscript(order, sink, label);
                let (asap, alap) = mobility.window(label);
                for t in asap..=alap {
                    let var = names::exec_var(&id, t);
                    terms.push((format!("{t}{var}"), var));
                }
            }
            lines.push(format!("  {}", terms.iter().map(|(t, _)| t.clone()).collect::<Vec<_>>().join(" + ")));
            terms.into_iter().map(|(_, v)| v).collect()
        }
    }
}

fn emit_execution(lines: &mut Vec<String>, order: &[String], sink: &str, mobility: &Mobility) {
    let mut k = 0;
    for label in order {
        let id = names::subscript(order, sink, label);
        let (asap, alap) = mobility.window(label);
        let terms: Vec<String> = (asap..=alap).map(|t| names::exec_var(&id, t)).collect();
        lines.push(format!("  e{k}: {} = 1", terms.join(" + ")));
        k += 1;
    }
}

fn emit_resource(
    lines: &mut Vec<String>,
    graph: &Graph,
    objective: &Objective,
    order: &[String],
    sink: &str,
    mobility: &Mobility,
) {
    let mut k = 0;
    let interior = graph.interior_units();
    for (pos, unit) in interior.iter().enumerate() {
        let nodes = graph.nodes_of_unit(*unit);
        let latency = mobility.latency();
        for t in 1..=latency {
            let terms: Vec<String> = nodes
                .iter()
                .filter(|label| {
                    let (asap, alap) = mobility.window(label);
                    asap <= t && t <= alap
                })
                .map(|label| {
                    let id = names::subscript(order, sink, label);
                    names::exec_var(&id, t)
                })
                .collect();
            if terms.is_empty() {
                continue;
            }
            let sum = terms.join(" + ");
            match objective {
                Objective::MrLc { .. } => {
                    lines.push(format!("  r{k}: {sum} - {} <= 0", names::resource_var(*unit)));
                }
                Objective::MlRc { resource_counts } => {
                    lines.push(format!("  r{k}: {sum} <= {}", resource_counts[pos]));
                }
            }
            k += 1;
        }
    }
}

fn emit_dependency(lines: &mut Vec<String>, graph: &Graph, order: &[String], sink: &str, mobility: &Mobility) {
    let mut k = 0;
    for v in order {
        for u in graph.predecessors(v) {
            if u == graph.source() {
                continue;
            }
            if mobility.is_critical(v) && mobility.is_critical(u) {
                continue;
            }
            let id_v = names::subscript(order, sink, v);
            let (v_asap, v_alap) = mobility.window(v);
            let v_terms: Vec<String> = (v_asap..=v_alap)
                .map(|t| format!("{t}{}", names::exec_var(&id_v, t)))
                .collect();

            let id_u = names::subscript(order, sink, u);
            let (u_asap, u_alap) = mobility.window(u);
            let u_part: String = (u_asap..=u_alap)
                .map(|t| format!(" - {t}{}", names::exec_var(&id_u, t)))
                .collect();

            lines.push(format!("  d{k}: {}{u_part} >= 1", v_terms.join(" + ")));
            k += 1;
        }
    }
}

fn emit_closing(lines: &mut Vec<String>, graph: &Graph, objective: &Objective, objective_vars: &[String]) {
    lines.push("Integer".to_string());
    match objective {
        Objective::MrLc { .. } => {
            let vars: Vec<String> = graph.interior_units().into_iter().map(names::resource_var).collect();
            lines.push(format!("  {}", vars.join(" ")));
        }
        Objective::MlRc { .. } => {
            lines.push(format!("  {}", objective_vars.join(" ")));
        }
    }
    lines.push("End".to_string());
}
