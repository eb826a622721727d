use crate::catalogue::PersonId;
use crate::graph::CollaborationGraph;
use rustc_hash::FxHashMap;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collaborator {
    pub person: PersonId,
    pub shared_movies: usize,
}

/// People co-credited with `person`, most shared movies first, then by name.
pub fn collaborators(person: PersonId, graph: &CollaborationGraph) -> Vec<Collaborator> {
    let mut shared: FxHashMap<PersonId, usize> = FxHashMap::default();

    for &movie in graph.movies_of(person) {
        for &partner in graph.people_in(movie) {
            if partner != person {
                *shared.entry(partner).or_insert(0) += 1;
            }
        }
    }

    let name_of = |id: PersonId| graph.person(id).map_or("", |p| p.name.as_str());

    let mut result: Vec<Collaborator> = shared
        .into_iter()
        .map(|(person, shared_movies)| Collaborator {
            person,
            shared_movies,
        })
        .collect();

    result.sort_by(|a, b| {
        b.shared_movies
            .cmp(&a.shared_movies)
            .then_with(|| name_of(a.person).cmp(name_of(b.person)))
            .then_with(|| a.person.cmp(&b.person))
    });
    result
}
