//! ASAP/ALAP mobility analysis.

use std::collections::BTreeMap;

use crate::error::ScheduleError;
use crate::graph::Graph;

/// The ASAP/ALAP control-step windows for every node of a graph, plus the
/// effective latency bound they were computed against.
#[derive(Debug, Clone)]
pub struct Mobility {
    asap: BTreeMap<String, u32>,
    alap: BTreeMap<String, u32>,
    latency: u32,
}

impl Mobility {
    /// The effective latency bound `L` these windows were computed under.
    pub fn latency(&self) -> u32 {
        self.latency
    }

    /// The ASAP (earliest) control step of `label`.
    pub fn asap(&self, label: &str) -> u32 {
        self.asap[label]
    }

    /// The ALAP (latest) control step of `label`.
    pub fn alap(&self, label: &str) -> u32 {
        self.alap[label]
    }

    /// The inclusive mobility window `[ASAP(n), ALAP(n)]`.
    pub fn window(&self, label: &str) -> (u32, u32) {
        (self.asap(label), self.alap(label))
    }

    /// `ALAP(n) - ASAP(n)`; zero iff `n` is on the critical path.
    pub fn slack(&self, label: &str) -> u32 {
        self.alap(label) - self.asap(label)
    }

    /// True iff `label` has zero slack.
    pub fn is_critical(&self, label: &str) -> bool {
        self.slack(label) == 0
    }
}

/// Computes ASAP (earliest) control steps via forward longest-path
/// relaxation from the source. Source is step 0; every other node is the
/// max over predecessors of `step(pred) + 1`.
///
/// Implemented with an explicit work stack (not recursion) so the pass
/// never overflows the call stack on large graphs; children are pushed in
/// sorted-label order and a node is re-pushed whenever its step improves.
pub fn asap(graph: &Graph) -> BTreeMap<String, u32> {
    let mut dist: BTreeMap<String, i64> = graph
        .input_order()
        .iter()
        .map(|label| (label.clone(), i64::MIN))
        .collect();
    dist.insert(graph.source().to_string(), 0);

    let mut stack = vec![graph.source().to_string()];
    while let Some(label) = stack.pop() {
        let current = dist[&label];
        for child in graph.successors(&label) {
            let candidate = current + 1;
            if candidate > dist[child] {
                dist.insert(child.clone(), candidate);
                stack.push(child.clone());
            }
        }
    }

    dist.into_iter().map(|(k, v)| (k, v as u32)).collect()
}

/// Computes ALAP (latest admissible) control steps via backward
/// shortest-latest-start relaxation from the sink under latency bound `L`.
/// Sink is step `L + 1`; every other node is the min over successors of
/// `step(succ) - 1`.
pub fn alap(graph: &Graph, latency: u32) -> BTreeMap<String, u32> {
    let sink_step = latency as i64 + 1;
    let mut dist: BTreeMap<String, i64> = graph
        .input_order()
        .iter()
        .map(|label| (label.clone(), i64::MAX))
        .collect();
    dist.insert(graph.sink().to_string(), sink_step);

    let mut stack = vec![graph.sink().to_string()];
    while let Some(label) = stack.pop() {
        let current = dist[&label];
        for parent in graph.predecessors(&label) {
            let candidate = current - 1;
            if candidate < dist[parent] {
                dist.insert(parent.clone(), candidate);
                stack.push(parent.clone());
            }
        }
    }

    dist.into_iter().map(|(k, v)| (k, v as u32)).collect()
}

/// Derives the effective latency `L` and computes ASAP/ALAP under it.
///
/// `L_min = ASAP(sink) - 1`. If `user_latency` is supplied it must be
/// `>= L_min`, otherwise [`ScheduleError::LatencyInfeasible`] is raised; if
/// absent, `L_min` is used directly.
pub fn analyze(graph: &Graph, user_latency: Option<u32>) -> Result<Mobility, ScheduleError> {
    let asap_map = asap(graph);
    let l_min = asap_map[graph.sink()].saturating_sub(1);

    let latency = match user_latency {
        Some(l) if l >= l_min => l,
        Some(_) => return Err(ScheduleError::LatencyInfeasible { required: l_min }),
        None => l_min,
    };

    let alap_map = alap(graph, latency);
    Ok(Mobility {
        asap: asap_map,
        alap: alap_map,
        latency,
    })
}
