use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::Direction;

use crate::dsl::SbpDocument;

use super::types::*;

/// Task flow graph. Immutable once built.
#[derive(Debug)]
pub struct TaskGraph {
    pub graph: StableDiGraph<TaskNode, ()>,
    pub index_map: TaskIndexMap,
}

impl TaskGraph {
    /// Build from a blueprint. `link_to` targets that name no task are
    /// skipped; duplicate task ids keep the first occurrence.
    pub fn build(sbp: &SbpDocument) -> TaskGraph {
        let lane_kinds: HashMap<&str, _> = sbp
            .lanes
            .iter()
            .map(|l| (l.id.as_str(), l.kind))
            .collect();

        let mut graph = StableDiGraph::new();
        let mut index_map = TaskIndexMap::new();

        for task in &sbp.tasks {
            if index_map.contains_key(&task.id) {
                continue;
            }
            let idx = graph.add_node(TaskNode {
                id: task.id.clone(),
                name: task.name.clone(),
                lane: task.lane.clone(),
                lane_kind: lane_kinds.get(task.lane.as_str()).copied(),
            });
            index_map.insert(task.id.clone(), idx);
        }

        let mut skipped = 0usize;
        for task in &sbp.tasks {
            let Some(&source) = index_map.get(&task.id) else {
                continue;
            };
            for target in &task.link_to {
                match index_map.get(target) {
                    Some(&target) => {
                        graph.update_edge(source, target, ());
                    }
                    None => skipped += 1,
                }
            }
        }
        if skipped > 0 {
            tracing::debug!(skipped, "task graph ignored dangling link_to targets");
        }

        TaskGraph { graph, index_map }
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn get_task(&self, task_id: &str) -> Option<&TaskNode> {
        let idx = self.index_map.get(task_id)?;
        self.graph.node_weight(*idx)
    }

    /// Tasks this task links to directly.
    pub fn successors(&self, task_id: &str) -> Vec<String> {
        self.neighbors(task_id, Direction::Outgoing)
    }

    /// Tasks linking directly to this task.
    pub fn predecessors(&self, task_id: &str) -> Vec<String> {
        self.neighbors(task_id, Direction::Incoming)
    }

    fn neighbors(&self, task_id: &str, direction: Direction) -> Vec<String> {
        let Some(idx) = self.index_map.get(task_id) else {
            return Vec::new();
        };
        let mut ids: Vec<String> = self
            .graph
            .neighbors_directed(*idx, direction)
            .filter_map(|n| self.graph.node_weight(n).map(|node| node.id.clone()))
            .collect();
        ids.sort();
        ids
    }

    pub(crate) fn index_of(&self, task_id: &str) -> Option<NodeIndex> {
        self.index_map.get(task_id).copied()
    }
}
