//! DAG validation: cycle detection and source/sink reachability.

use std::collections::BTreeMap;

use crate::error::ScheduleError;
use crate::graph::Graph;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    Unvisited,
    OnStack,
    Finished,
}

/// Validates that `graph` is a well-formed DAG with a single source and
/// sink: no cycles, every node reachable from the source, every node
/// reaching the sink, and non-empty source children / sink parents.
pub fn validate(graph: &Graph) -> Result<(), ScheduleError> {
    check_acyclic(graph)?;
    check_boundary(graph)?;
    check_forward_reachability(graph)?;
    check_backward_reachability(graph)?;
    Ok(())
}

fn check_boundary(graph: &Graph) -> Result<(), ScheduleError> {
    if graph.successors(graph.source()).is_empty() {
        return Err(ScheduleError::EmptySourceChildren);
    }
    if graph.predecessors(graph.sink()).is_empty() {
        return Err(ScheduleError::EmptySinkParents);
    }
    Ok(())
}

/// Coloring DFS: an edge into an on-stack node means a cycle runs through
/// that node. Uses an explicit work stack of `(label, next_child_index)`
/// frames rather than recursion.
fn check_acyclic(graph: &Graph) -> Result<(), ScheduleError> {
    let mut color: BTreeMap<String, Color> = graph
        .input_order()
        .iter()
        .map(|label| (label.clone(), Color::Unvisited))
        .collect();

    for start in graph.input_order() {
        if color[start] != Color::Unvisited {
            continue;
        }
        let mut stack: Vec<(String, usize)> = vec![(start.clone(), 0)];
        color.insert(start.clone(), Color::OnStack);

        while let Some((label, idx)) = stack.pop() {
            let children = graph.successors(&label);
            if idx < children.len() {
                let child = children[idx].clone();
                stack.push((label.clone(), idx + 1));
                match color[&child] {
                    Color::OnStack => {
                        return Err(ScheduleError::CycleDetected { node: child });
                    }
                    Color::Unvisited => {
                        color.insert(child.clone(), Color::OnStack);
                        stack.push((child, 0));
                    }
                    Color::Finished => {}
                }
            } else {
                color.insert(label, Color::Finished);
            }
        }
    }
    Ok(())
}

fn check_forward_reachability(graph: &Graph) -> Result<(), ScheduleError> {
    let reached = reachable_from(graph.source(), |label| graph.successors(label));
    for label in graph.input_order() {
        if !reached.contains(label) {
            return Err(ScheduleError::SourceUnreachable {
                node: label.clone(),
            });
        }
    }
    Ok(())
}

fn check_backward_reachability(graph: &Graph) -> Result<(), ScheduleError> {
    let reached = reachable_from(graph.sink(), |label| graph.predecessors(label));
    for label in graph.input_order() {
        if !reached.contains(label) {
            return Err(ScheduleError::SinkUnreachable {
                node: label.clone(),
            });
        }
    }
    Ok(())
}

fn reachable_from<'a, F>(start: &'a str, neighbors: F) -> std::collections::BTreeSet<String>
where
    F: Fn(&str) -> &'a [String],
{
    let mut seen = std::collections::BTreeSet::new();
    let mut stack = vec![start.to_string()];
    seen.insert(start.to_string());
    while let Some(label) = stack.pop() {
        for next in neighbors(&label) {
            if seen.insert(next.clone()) {
                stack.push(next.clone());
            }
        }
    }
    seen
}
