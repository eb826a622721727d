mod state;

use super::path::CollaborationPath;
use crate::catalogue::PersonId;
use crate::graph::CollaborationGraph;
use crate::pathfinding_config::PathfindingConfig;
use state::BfsState;
use std::time::Instant;

/// Shortest paths found, nodes expanded, elapsed seconds
pub type PathSearchResult = (Vec<CollaborationPath>, usize, f64);

/// Breadth-first search for up to `config.limit` equally short paths
/// between two people.
///
/// Returns paths in discovery order. Same person, unknown ids and
/// disconnected people all yield an empty list.
pub fn find_shortest_paths(
    start: PersonId,
    target: PersonId,
    graph: &CollaborationGraph,
    config: &PathfindingConfig,
) -> PathSearchResult {
    let search_timer = Instant::now();

    if start == target || !graph.contains_person(start) || !graph.contains_person(target) {
        return (Vec::new(), 0, search_timer.elapsed().as_secs_f64());
    }

    let mut bfs_state = BfsState::new(start);
    let paths = bfs_state.collect_paths(target, graph, config);

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    tracing::debug!(
        start,
        target,
        found = paths.len(),
        expanded = bfs_state.expanded,
        "shortest path search finished"
    );
    (paths, bfs_state.expanded, elapsed_time)
}
