//! Selects the scheduling objective(s) from the inputs supplied, validates
//! preconditions, and sequences validation, mobility, and emission.

use crate::emit::{self, Objective};
use crate::error::ScheduleError;
use crate::graph::Graph;

/// One emitted LP program, tagged with the objective that produced it.
#[derive(Debug, Clone)]
pub struct LpOutput {
    /// The objective this program targets.
    pub objective: Objective,
    /// The emitted CPLEX-LP lines.
    pub lines: Vec<String>,
}

/// Runs the scheduler end to end.
///
/// Selects the objective from which of `latency`/`area_cost` are present:
///
/// | latency | area_cost | objective |
/// |---------|-----------|-----------|
/// | absent  | absent    | fail: `NoConstraint` |
/// | absent  | present   | ML-RC |
/// | present | absent    | MR-LC |
/// | present | present   | both (two independent LPs) |
pub fn run(
    graph: &Graph,
    latency: Option<u32>,
    area_cost: Option<Vec<u32>>,
) -> Result<Vec<LpOutput>, ScheduleError> {
    let objectives = select_objectives(latency, area_cost)?;
    objectives
        .into_iter()
        .map(|objective| {
            let lines = emit::emit(graph, &objective)?;
            Ok(LpOutput { objective, lines })
        })
        .collect()
}

fn select_objectives(
    latency: Option<u32>,
    area_cost: Option<Vec<u32>>,
) -> Result<Vec<Objective>, ScheduleError> {
    match (latency, area_cost) {
        (None, None) => Err(ScheduleError::NoConstraint),
        (None, Some(resource_counts)) => Ok(vec![Objective::MlRc { resource_counts }]),
        (Some(latency), None) => Ok(vec![Objective::MrLc { latency }]),
        (Some(latency), Some(resource_counts)) => Ok(vec![
            Objective::MlRc { resource_counts },
            Objective::MrLc { latency },
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeSpec;

    fn linear_graph() -> Graph {
        let e = |root: &str, child: &str| EdgeSpec {
            root: root.to_string(),
            child: child.to_string(),
            root_unit: 0,
            child_unit: 1,
            root_cost: 0,
            child_cost: 1,
        };
        Graph::from_edges(vec![e("s", "a"), e("a", "t")]).unwrap()
    }

    #[test]
    fn neither_input_fails_with_no_constraint() {
        let g = linear_graph();
        let err = run(&g, None, None).unwrap_err();
        assert_eq!(err, ScheduleError::NoConstraint);
    }

    #[test]
    fn area_cost_only_selects_ml_rc() {
        let g = linear_graph();
        let outputs = run(&g, None, Some(vec![1])).unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].objective.tag(), "ML-RC");
    }

    #[test]
    fn latency_only_selects_mr_lc() {
        let g = linear_graph();
        let outputs = run(&g, Some(1), None).unwrap();
        assert_eq!(outputs.len(), 1);
        assert_eq!(outputs[0].objective.tag(), "MR-LC");
    }

    #[test]
    fn both_inputs_emit_two_independent_lps() {
        let g = linear_graph();
        let outputs = run(&g, Some(1), Some(vec![1])).unwrap();
        assert_eq!(outputs.len(), 2);
        assert_eq!(outputs[0].objective.tag(), "ML-RC");
        assert_eq!(outputs[1].objective.tag(), "MR-LC");
    }
}
