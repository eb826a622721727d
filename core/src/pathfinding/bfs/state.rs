use super::super::path::{CollaborationPath, Node};
use crate::catalogue::{MovieId, PersonId};
use crate::graph::CollaborationGraph;
use crate::pathfinding_config::PathfindingConfig;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;

/// Shallowest depth at which each node has been enqueued, per node kind.
///
/// A node reached again at the *same* depth is admitted so sibling shortest
/// paths survive; only strictly deeper arrivals are pruned.
#[derive(Default)]
struct VisitedDepth {
    people: FxHashMap<PersonId, usize>,
    movies: FxHashMap<MovieId, usize>,
}

impl VisitedDepth {
    fn bucket(&mut self, node: Node) -> (&mut FxHashMap<i64, usize>, i64) {
        match node {
            Node::Person(id) => (&mut self.people, id),
            Node::Movie(id) => (&mut self.movies, id),
        }
    }

    fn admit(&mut self, node: Node, depth: usize) -> bool {
        let (bucket, id) = self.bucket(node);
        if bucket.get(&id).is_some_and(|&previous| previous < depth) {
            return false;
        }
        bucket.insert(id, depth);
        true
    }
}

pub struct BfsState {
    queue: VecDeque<(Node, Vec<Node>)>,
    visited_depth: VisitedDepth,
    solutions: Vec<CollaborationPath>,
    shortest_length: Option<usize>,
    pub expanded: usize,
}

impl BfsState {
    pub fn new(start: PersonId) -> Self {
        let start_node = Node::Person(start);
        let mut queue = VecDeque::new();
        let mut visited_depth = VisitedDepth::default();

        queue.push_back((start_node, vec![start_node]));
        visited_depth.admit(start_node, 0);

        Self {
            queue,
            visited_depth,
            solutions: Vec::new(),
            shortest_length: None,
            expanded: 0,
        }
    }

    pub fn collect_paths(
        &mut self,
        target: PersonId,
        graph: &CollaborationGraph,
        config: &PathfindingConfig,
    ) -> Vec<CollaborationPath> {
        let goal = Node::Person(target);

        while let Some((node, path)) = self.queue.pop_front() {
            if self.shortest_length.is_some_and(|shortest| path.len() > shortest) {
                break;
            }

            if node == goal && path.len() > 1 {
                self.shortest_length.get_or_insert(path.len());
                self.solutions.push(CollaborationPath::new(path));
                if self.solutions.len() >= config.limit {
                    break;
                }
                continue;
            }

            if config
                .max_expansions
                .is_some_and(|budget| self.expanded >= budget)
            {
                tracing::warn!(
                    expanded = self.expanded,
                    found = self.solutions.len(),
                    "expansion budget exhausted before the search finished"
                );
                break;
            }
            self.expanded += 1;

            self.expand(node, &path, graph);
        }

        std::mem::take(&mut self.solutions)
    }

    fn expand(&mut self, node: Node, path: &[Node], graph: &CollaborationGraph) {
        let depth = path.len();

        for neighbour in graph.neighbours(node) {
            if path.contains(&neighbour) {
                continue;
            }
            if !self.visited_depth.admit(neighbour, depth) {
                continue;
            }

            let mut extended = Vec::with_capacity(depth + 1);
            extended.extend_from_slice(path);
            extended.push(neighbour);
            self.queue.push_back((neighbour, extended));
        }
    }
}
