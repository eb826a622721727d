use crate::models::{PathEntry, PathNode, PathResponse, PathStep, SearchStats};
use crate::search::find_person_summary;
use filmpath_core::{
    CollaborationGraph, CollaborationPath, Node, PathfindingConfig, PersonId, build_diagram,
    describe_connection, find_shortest_paths, movie_label, path_label,
};

fn path_node(node: Node, graph: &CollaborationGraph) -> PathNode {
    match node {
        Node::Person(id) => PathNode {
            kind: "person".to_string(),
            id,
            label: graph.person(id).map(|person| person.label()).unwrap_or_default(),
        },
        Node::Movie(id) => PathNode {
            kind: "movie".to_string(),
            id,
            label: movie_label(graph.movie(id)),
        },
    }
}

fn path_entry(index: usize, path: &CollaborationPath, graph: &CollaborationGraph) -> PathEntry {
    let steps = describe_connection(path, graph)
        .into_iter()
        .map(|step| PathStep {
            text: step.to_string(),
            person_credit: step.person_credit(),
            partner_credit: step.partner_credit(),
            person: step.person,
            movie: step.movie,
            partner: step.partner,
        })
        .collect();

    PathEntry {
        label: path_label(index),
        degrees_of_separation: path.degrees_of_separation(),
        nodes: path.nodes().iter().map(|&node| path_node(node, graph)).collect(),
        steps,
        dot: build_diagram(path, graph).to_dot(),
    }
}

pub fn find_paths_response(
    from_id: PersonId,
    to_id: PersonId,
    graph: &CollaborationGraph,
    config: &PathfindingConfig,
) -> PathResponse {
    let (paths, nodes_expanded, elapsed_secs) = find_shortest_paths(from_id, to_id, graph, config);

    let entries: Vec<PathEntry> = paths
        .iter()
        .enumerate()
        .map(|(index, path)| path_entry(index, path, graph))
        .collect();

    PathResponse {
        from: find_person_summary(from_id, graph),
        to: find_person_summary(to_id, graph),
        path_count: entries.len(),
        degrees_of_separation: paths.first().map(CollaborationPath::degrees_of_separation),
        paths: entries,
        search_stats: SearchStats {
            nodes_expanded,
            duration_ms: (elapsed_secs * 1000.0) as u64,
            stopped_early: config.budget_exhausted(nodes_expanded),
        },
    }
}
