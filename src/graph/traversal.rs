use std::collections::{HashSet, VecDeque};

use petgraph::Direction;

use super::builder::TaskGraph;

impl TaskGraph {
    /// Tasks ordered so every task comes after the tasks linking to it.
    /// `None` when the links form a cycle.
    pub fn topological_order(&self) -> Option<Vec<String>> {
        let sorted = petgraph::algo::toposort(&self.graph, None).ok()?;
        Some(
            sorted
                .into_iter()
                .filter_map(|idx| self.graph.node_weight(idx).map(|n| n.id.clone()))
                .collect(),
        )
    }

    pub fn has_cycle(&self) -> bool {
        petgraph::algo::is_cyclic_directed(&self.graph)
    }

    /// Every task reachable from `task_id` through links, breadth-first,
    /// excluding the task itself.
    pub fn downstream(&self, task_id: &str) -> Vec<String> {
        let Some(start) = self.index_of(task_id) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut queue = VecDeque::new();
        let mut out = Vec::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(idx) = queue.pop_front() {
            for next in self.graph.neighbors_directed(idx, Direction::Outgoing) {
                if seen.insert(next) {
                    if let Some(node) = self.graph.node_weight(next) {
                        out.push(node.id.clone());
                    }
                    queue.push_back(next);
                }
            }
        }

        out
    }
}
