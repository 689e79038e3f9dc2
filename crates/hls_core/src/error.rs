//! Error types produced by graph construction, validation, mobility analysis,
//! and LP emission.

use thiserror::Error;

/// Errors raised while building, validating, or scheduling a data-flow graph.
///
/// Every variant corresponds to a single detection point in the pipeline
/// (construction, validation, mobility, or the orchestrator's precondition
/// checks); none are recoverable, and none trigger partial output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// An edge list could not be folded into consistent node/unit attributes.
    #[error("malformed graph: {reason}")]
    MalformedGraph {
        /// Human-readable description of the inconsistency.
        reason: String,
    },

    /// The graph contains a cycle reachable from the named node.
    #[error("cycle detected at node '{node}'")]
    CycleDetected {
        /// A node participating in the cycle.
        node: String,
    },

    /// A node is not reachable by a forward traversal from the source.
    #[error("node '{node}' is not reachable from the source")]
    SourceUnreachable {
        /// The unreachable node.
        node: String,
    },

    /// A node does not reach the sink by a backward traversal.
    #[error("node '{node}' does not reach the sink")]
    SinkUnreachable {
        /// The node that fails to reach the sink.
        node: String,
    },

    /// The designated source has no outgoing edges.
    #[error("source node has no children")]
    EmptySourceChildren,

    /// The designated sink has no incoming edges.
    #[error("sink node has no parents")]
    EmptySinkParents,

    /// Neither a latency bound nor an area-cost vector was supplied.
    #[error("no constraint supplied: provide a latency bound, an area-cost vector, or both")]
    NoConstraint,

    /// The supplied latency is below the minimum achievable latency.
    #[error("latency infeasible: at least {required} control steps are required")]
    LatencyInfeasible {
        /// The minimum feasible latency, `L_min`.
        required: u32,
    },

    /// The area-cost vector's length does not match the interior-unit count.
    #[error("resource count mismatch: expected {expected} entries, got {given}")]
    ResourceCountMismatch {
        /// Number of interior resource units in the graph.
        expected: usize,
        /// Number of entries actually supplied.
        given: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_malformed_graph() {
        let err = ScheduleError::MalformedGraph {
            reason: "node 'v1' has conflicting unit ids".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "malformed graph: node 'v1' has conflicting unit ids"
        );
    }

    #[test]
    fn display_cycle_detected() {
        let err = ScheduleError::CycleDetected {
            node: "v4".to_string(),
        };
        assert_eq!(format!("{err}"), "cycle detected at node 'v4'");
    }

    #[test]
    fn display_source_unreachable() {
        let err = ScheduleError::SourceUnreachable {
            node: "v10".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "node 'v10' is not reachable from the source"
        );
    }

    #[test]
    fn display_sink_unreachable() {
        let err = ScheduleError::SinkUnreachable {
            node: "v10".to_string(),
        };
        assert_eq!(format!("{err}"), "node 'v10' does not reach the sink");
    }

    #[test]
    fn display_empty_source_children() {
        let err = ScheduleError::EmptySourceChildren;
        assert_eq!(format!("{err}"), "source node has no children");
    }

    #[test]
    fn display_empty_sink_parents() {
        let err = ScheduleError::EmptySinkParents;
        assert_eq!(format!("{err}"), "sink node has no parents");
    }

    #[test]
    fn display_no_constraint() {
        let err = ScheduleError::NoConstraint;
        assert_eq!(
            format!("{err}"),
            "no constraint supplied: provide a latency bound, an area-cost vector, or both"
        );
    }

    #[test]
    fn display_latency_infeasible() {
        let err = ScheduleError::LatencyInfeasible { required: 4 };
        assert_eq!(
            format!("{err}"),
            "latency infeasible: at least 4 control steps are required"
        );
    }

    #[test]
    fn display_resource_count_mismatch() {
        let err = ScheduleError::ResourceCountMismatch {
            expected: 4,
            given: 3,
        };
        assert_eq!(
            format!("{err}"),
            "resource count mismatch: expected 4 entries, got 3"
        );
    }
}
