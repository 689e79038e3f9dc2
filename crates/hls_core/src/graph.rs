//! The in-memory data-flow graph: nodes, directed edges, and the unit/cost
//! tables folded from edge attributes.

use std::collections::BTreeMap;

use crate::error::ScheduleError;

/// One input edge, as handed to [`Graph::from_edges`] by a reader.
///
/// `root`/`child` are the unit ids attached to the tail/head node of the
/// edge; `root_cost`/`child_cost` are their per-unit area costs. The same
/// node may appear as the endpoint of several edges, and every occurrence
/// must agree on its unit id and cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Label of the edge's tail node.
    pub root: String,
    /// Label of the edge's head node.
    pub child: String,
    /// Unit id of the tail node.
    pub root_unit: u32,
    /// Unit id of the head node.
    pub child_unit: u32,
    /// Area cost of the tail node's unit.
    pub root_cost: u32,
    /// Area cost of the head node's unit.
    pub child_cost: u32,
}

/// An immutable directed acyclic graph built once from an edge list.
///
/// Successor and predecessor lists are materialized in sorted-label order at
/// construction time, since that order determines the textual order of every
/// constraint family the emitter produces.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Labels in first-seen order over the input edge list; `order[0]` is
    /// the source, `order[last]` is the sink.
    order: Vec<String>,
    edges: Vec<EdgeSpec>,
    succ: BTreeMap<String, Vec<String>>,
    pred: BTreeMap<String, Vec<String>>,
    node_unit: BTreeMap<String, u32>,
    unit_cost: BTreeMap<u32, u32>,
    source: String,
    sink: String,
}

impl Graph {
    /// Builds a graph from an edge list, folding node/unit attributes and
    /// deriving the source/sink from first-seen order.
    ///
    /// Fails with [`ScheduleError::MalformedGraph`] if the edge list is
    /// empty or if any node's unit/cost attributes are inconsistent across
    /// its incident edges.
    pub fn from_edges(edges: Vec<EdgeSpec>) -> Result<Graph, ScheduleError> {
        if edges.is_empty() {
            return Err(ScheduleError::MalformedGraph {
                reason: "edge list is empty".to_string(),
            });
        }

        let mut order = Vec::new();
        let mut seen = BTreeMap::new();
        let mut succ: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut pred: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut node_unit: BTreeMap<String, u32> = BTreeMap::new();
        let mut unit_cost: BTreeMap<u32, u32> = BTreeMap::new();

        for edge in &edges {
            for label in [&edge.root, &edge.child] {
                if seen.insert(label.clone(), ()).is_none() {
                    order.push(label.clone());
                }
            }

            Self::fold_unit(&mut node_unit, &edge.root, edge.root_unit)?;
            Self::fold_unit(&mut node_unit, &edge.child, edge.child_unit)?;
            Self::fold_cost(&mut unit_cost, edge.root_unit, edge.root_cost)?;
            Self::fold_cost(&mut unit_cost, edge.child_unit, edge.child_cost)?;

            succ.entry(edge.root.clone())
                .or_default()
                .push(edge.child.clone());
            pred.entry(edge.child.clone())
                .or_default()
                .push(edge.root.clone());
        }

        for label in &order {
            succ.entry(label.clone()).or_default();
            pred.entry(label.clone()).or_default();
        }
        for list in succ.values_mut().chain(pred.values_mut()) {
            list.sort();
            list.dedup();
        }

        let source = order.first().cloned().ok_or_else(|| ScheduleError::MalformedGraph {
            reason: "no nodes found in edge list".to_string(),
        })?;
        let sink = order.last().cloned().unwrap();

        Ok(Graph {
            order,
            edges,
            succ,
            pred,
            node_unit,
            unit_cost,
            source,
            sink,
        })
    }

    fn fold_unit(
        table: &mut BTreeMap<String, u32>,
        label: &str,
        unit: u32,
    ) -> Result<(), ScheduleError> {
        match table.get(label) {
            Some(existing) if *existing != unit => Err(ScheduleError::MalformedGraph {
                reason: format!(
                    "node '{label}' has conflicting unit ids ({existing} vs {unit})"
                ),
            }),
            _ => {
                table.insert(label.to_string(), unit);
                Ok(())
            }
        }
    }

    fn fold_cost(table: &mut BTreeMap<u32, u32>, unit: u32, cost: u32) -> Result<(), ScheduleError> {
        match table.get(&unit) {
            Some(existing) if *existing != cost => Err(ScheduleError::MalformedGraph {
                reason: format!(
                    "unit {unit} has conflicting costs ({existing} vs {cost})"
                ),
            }),
            _ => {
                table.insert(unit, cost);
                Ok(())
            }
        }
    }

    /// The designated source label (first node of the input enumeration).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The designated sink label (last node of the input enumeration).
    pub fn sink(&self) -> &str {
        &self.sink
    }

    /// Node labels in input (first-seen) order.
    pub fn input_order(&self) -> &[String] {
        &self.order
    }

    /// Node labels in ascending lexicographic order.
    pub fn sorted_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.order.clone();
        labels.sort();
        labels
    }

    /// Successors of `label`, in sorted-label order.
    pub fn successors(&self, label: &str) -> &[String] {
        self.succ.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Predecessors of `label`, in sorted-label order.
    pub fn predecessors(&self, label: &str) -> &[String] {
        self.pred.get(label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The unit id assigned to `label`.
    pub fn node_unit(&self, label: &str) -> Option<u32> {
        self.node_unit.get(label).copied()
    }

    /// The unit->cost table, sorted ascending by unit id.
    pub fn units(&self) -> &BTreeMap<u32, u32> {
        &self.unit_cost
    }

    /// Interior unit ids, ascending, excluding the smallest (source) and
    /// largest (sink) unit ids.
    pub fn interior_units(&self) -> Vec<u32> {
        let ids: Vec<u32> = self.unit_cost.keys().copied().collect();
        if ids.len() <= 2 {
            return Vec::new();
        }
        ids[1..ids.len() - 1].to_vec()
    }

    /// Labels of nodes assigned to `unit`, in sorted-label order.
    pub fn nodes_of_unit(&self, unit: u32) -> Vec<String> {
        self.sorted_labels()
            .into_iter()
            .filter(|label| self.node_unit.get(label) == Some(&unit))
            .collect()
    }

    /// All edges, in input order.
    pub fn edges(&self) -> &[EdgeSpec] {
        &self.edges
    }
}
