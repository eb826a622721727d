use super::{Collaborator, DiscoveredPeople, ExplorationResult, PeopleConnections, collaborators};
use crate::catalogue::PersonId;
use crate::graph::CollaborationGraph;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::time::Instant;

/// Layer people outward from `center` over shared credits until `budget`
/// people are discovered, following at most `max_relations` strongest
/// collaborators of each person.
pub fn explore_bfs(
    center_id: PersonId,
    budget: usize,
    max_relations: usize,
    graph: &CollaborationGraph,
) -> ExplorationResult {
    let start_time = Instant::now();
    let mut explorer = BfsExplorer::new(max_relations, graph);

    let discovered = explorer.discover_people(center_id, budget);
    let connections = explorer.get_all_connections(&discovered);

    ExplorationResult::new(
        discovered,
        connections,
        explorer.people_visited,
        start_time.elapsed().as_millis() as u64,
    )
}

struct BfsExplorer<'a> {
    max_relations: usize,
    graph: &'a CollaborationGraph,
    connection_cache: FxHashMap<PersonId, Vec<Collaborator>>,
    people_visited: usize,
}

impl<'a> BfsExplorer<'a> {
    fn new(max_relations: usize, graph: &'a CollaborationGraph) -> Self {
        Self {
            max_relations,
            graph,
            connection_cache: FxHashMap::default(),
            people_visited: 0,
        }
    }

    fn discover_people(&mut self, center_id: PersonId, budget: usize) -> DiscoveredPeople {
        let mut queue = VecDeque::new();
        let mut discovered = FxHashMap::default();

        if budget == 0 || !self.graph.contains_person(center_id) {
            return discovered;
        }

        queue.push_back((center_id, 0));
        discovered.insert(center_id, (0, 0));

        while let Some((current_id, current_layer)) = queue.pop_front() {
            if discovered.len() >= budget {
                break;
            }

            for collaborator in self.get_cached_connections(current_id) {
                if discovered.len() >= budget {
                    break;
                }
                if discovered.contains_key(&collaborator.person) {
                    continue;
                }
                discovered.insert(
                    collaborator.person,
                    (collaborator.shared_movies, current_layer + 1),
                );
                queue.push_back((collaborator.person, current_layer + 1));
            }
        }

        discovered
    }

    fn get_cached_connections(&mut self, person_id: PersonId) -> Vec<Collaborator> {
        if let Some(cached) = self.connection_cache.get(&person_id) {
            return cached.clone();
        }

        let mut connections = collaborators(person_id, self.graph);
        connections.truncate(self.max_relations);
        self.people_visited += 1;

        self.connection_cache.insert(person_id, connections.clone());
        connections
    }

    /// Connections restricted to the discovered set, for drawing edges
    fn get_all_connections(&mut self, discovered: &DiscoveredPeople) -> PeopleConnections {
        let mut all_connections = FxHashMap::default();

        for &person_id in discovered.keys() {
            let connections: Vec<Collaborator> = self
                .get_cached_connections(person_id)
                .into_iter()
                .filter(|collaborator| discovered.contains_key(&collaborator.person))
                .collect();
            all_connections.insert(person_id, connections);
        }

        all_connections
    }
}
