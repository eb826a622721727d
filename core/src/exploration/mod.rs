pub mod bfs;
pub mod collaborators;
pub mod filmography;

pub use bfs::explore_bfs;
pub use collaborators::{Collaborator, collaborators};
pub use filmography::{credited_people, shared_filmography};

use crate::catalogue::PersonId;
use rustc_hash::FxHashMap;

/// Discovered person → (movies shared with whoever discovered them, layer)
pub type DiscoveredPeople = FxHashMap<PersonId, (usize, usize)>;
pub type PeopleConnections = FxHashMap<PersonId, Vec<Collaborator>>;

#[derive(Debug, Clone)]
pub struct ExplorationResult {
    pub discovered_people: DiscoveredPeople,
    pub connections: PeopleConnections,
    pub stats: ExplorationStats,
}

#[derive(Debug, Clone)]
pub struct ExplorationStats {
    pub people_visited: usize,
    pub duration_ms: u64,
}

impl ExplorationResult {
    pub fn new(
        discovered_people: DiscoveredPeople,
        connections: PeopleConnections,
        people_visited: usize,
        duration_ms: u64,
    ) -> Self {
        Self {
            discovered_people,
            connections,
            stats: ExplorationStats {
                people_visited,
                duration_ms,
            },
        }
    }

    pub fn total_discovered(&self) -> usize {
        self.discovered_people.len()
    }

    pub fn layer_of(&self, person: PersonId) -> Option<usize> {
        self.discovered_people.get(&person).map(|&(_, layer)| layer)
    }
}
