//! Centralized name formatting. Variable and constraint names are part of
//! the external contract with the downstream solver, so every emission
//! phase routes through here rather than formatting ad hoc.

use crate::graph::Graph;

/// Canonical node order: sort all labels, remove source and sink, prepend
/// the source, append the sink. A node's index in this ordering is its
/// subscript in every execution-variable name; the sink's subscript is
/// always the literal `n`.
pub fn canonical_order(graph: &Graph) -> Vec<String> {
    let mut labels = graph.sorted_labels();
    labels.retain(|l| l != graph.source() && l != graph.sink());
    let mut order = Vec::with_capacity(labels.len() + 2);
    order.push(graph.source().to_string());
    order.extend(labels);
    order.push(graph.sink().to_string());
    order
}

/// The subscript used for `label` in execution-variable names: its
/// position in `order`, or the literal `"n"` if it is the sink.
pub fn subscript(order: &[String], sink: &str, label: &str) -> String {
    if label == sink {
        "n".to_string()
    } else {
        order
            .iter()
            .position(|l| l == label)
            .expect("label must appear in canonical order")
            .to_string()
    }
}

/// The execution variable name `x_<id>_<t>`.
pub fn exec_var(id: &str, t: u32) -> String {
    format!("x_{id}_{t}")
}

/// The resource-count variable name `a<unit_id>`.
pub fn resource_var(unit: u32) -> String {
    format!("a{unit}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeSpec;

    fn edge(root: &str, child: &str) -> EdgeSpec {
        EdgeSpec {
            root: root.to_string(),
            child: child.to_string(),
            root_unit: 0,
            child_unit: 1,
            root_cost: 0,
            child_cost: 1,
        }
    }

    #[test]
    fn canonical_order_places_source_first_sink_last() {
        let g = Graph::from_edges(vec![
            edge("s", "v2"),
            edge("s", "v1"),
            edge("v1", "t"),
            edge("v2", "t"),
        ])
        .unwrap();
        let order = canonical_order(&g);
        assert_eq!(
            order,
            vec!["s".to_string(), "v1".to_string(), "v2".to_string(), "t".to_string()]
        );
    }

    #[test]
    fn sink_subscript_is_literal_n() {
        let g = Graph::from_edges(vec![edge("s", "v1"), edge("v1", "t")]).unwrap();
        let order = canonical_order(&g);
        assert_eq!(subscript(&order, g.sink(), "t"), "n");
        assert_eq!(subscript(&order, g.sink(), "s"), "0");
        assert_eq!(subscript(&order, g.sink(), "v1"), "1");
    }

    #[test]
    fn var_name_formats() {
        assert_eq!(exec_var("2", 1), "x_2_1");
        assert_eq!(exec_var("n", 5), "x_n_5");
        assert_eq!(resource_var(3), "a3");
    }
}
