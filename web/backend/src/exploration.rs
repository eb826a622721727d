use crate::models::{
    CollaboratorEntry, CollaboratorsResponse, ExploreStats, GraphEdge, GraphExploreResponse,
    GraphNode,
};
use crate::search::{find_person_summary, person_summary};
use filmpath_core::{CollaborationGraph, PersonId, collaborators, explore_bfs};
use rustc_hash::FxHashMap;

pub fn explore_graph_response(
    center_id: PersonId,
    budget: usize,
    max_relations: usize,
    graph: &CollaborationGraph,
) -> GraphExploreResponse {
    let result = explore_bfs(center_id, budget, max_relations, graph);

    let mut nodes: Vec<GraphNode> = result
        .discovered_people
        .iter()
        .filter_map(|(&id, &(shared_movies, layer))| {
            graph.person(id).map(|person| GraphNode {
                id,
                name: person.name.clone(),
                layer,
                shared_movies,
            })
        })
        .collect();
    nodes.sort_by(|a, b| {
        a.layer
            .cmp(&b.layer)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });

    // Each person keeps only its strongest links, so a pair may be listed once
    let mut pairs: FxHashMap<(PersonId, PersonId), usize> = FxHashMap::default();
    for (&from, links) in &result.connections {
        for link in links {
            let key = (from.min(link.person), from.max(link.person));
            pairs.insert(key, link.shared_movies);
        }
    }
    let mut edges: Vec<GraphEdge> = pairs
        .into_iter()
        .map(|((from, to), shared_movies)| GraphEdge {
            from,
            to,
            shared_movies,
        })
        .collect();
    edges.sort_by_key(|edge| (edge.from, edge.to));

    GraphExploreResponse {
        center: find_person_summary(center_id, graph),
        total_found: nodes.len(),
        nodes,
        edges,
        search_stats: ExploreStats {
            people_visited: result.stats.people_visited,
            duration_ms: result.stats.duration_ms,
        },
    }
}

pub fn collaborators_response(
    person_id: PersonId,
    limit: usize,
    graph: &CollaborationGraph,
) -> CollaboratorsResponse {
    let entries: Vec<CollaboratorEntry> = collaborators(person_id, graph)
        .into_iter()
        .take(limit)
        .filter_map(|collaborator| {
            graph.person(collaborator.person).map(|person| CollaboratorEntry {
                person: person_summary(person),
                shared_movies: collaborator.shared_movies,
            })
        })
        .collect();

    CollaboratorsResponse {
        person: find_person_summary(person_id, graph),
        count: entries.len(),
        collaborators: entries,
    }
}
