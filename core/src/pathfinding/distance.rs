use super::path::Node;
use crate::catalogue::PersonId;
use crate::graph::CollaborationGraph;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// Length in nodes of the shortest path between two people, using plain
/// mark-on-first-touch BFS. `None` when they are not connected.
pub fn shortest_distance(
    start: PersonId,
    target: PersonId,
    graph: &CollaborationGraph,
) -> Option<usize> {
    if !graph.contains_person(start) || !graph.contains_person(target) {
        return None;
    }

    let start_node = Node::Person(start);
    let goal = Node::Person(target);
    let mut queue = VecDeque::new();
    let mut visited = FxHashSet::default();

    queue.push_back((start_node, 1));
    visited.insert(start_node);

    while let Some((node, length)) = queue.pop_front() {
        if node == goal {
            return Some(length);
        }
        for neighbour in graph.neighbours(node) {
            if visited.insert(neighbour) {
                queue.push_back((neighbour, length + 1));
            }
        }
    }

    None
}
