use petgraph::stable_graph::NodeIndex;

use crate::dsl::LaneKind;

/// Graph node: one SBP task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskNode {
    /// Task id (as in the DSL)
    pub id: String,

    /// Task name
    pub name: String,

    /// Owning lane id
    pub lane: String,

    /// Kind of the owning lane, if the lane exists
    pub lane_kind: Option<LaneKind>,
}

/// Task id to petgraph NodeIndex
pub type TaskIndexMap = std::collections::HashMap<String, NodeIndex>;
