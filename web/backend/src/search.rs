use crate::models::PersonSummary;
use filmpath_core::{CollaborationGraph, Person, PersonId};

pub fn person_summary(person: &Person) -> PersonSummary {
    PersonSummary {
        id: person.id,
        name: person.name.clone(),
        roles: person.roles.iter().map(ToString::to_string).collect(),
    }
}

pub fn find_person_summary(id: PersonId, graph: &CollaborationGraph) -> Option<PersonSummary> {
    graph.person(id).map(person_summary)
}

pub fn search_people_in_graph(
    graph: &CollaborationGraph,
    query: &str,
    limit: usize,
) -> (Vec<PersonSummary>, usize) {
    if query.trim().is_empty() {
        return (vec![], 0);
    }

    let results: Vec<PersonSummary> = graph
        .search_people(query, limit)
        .into_iter()
        .map(person_summary)
        .collect();
    let count = results.len();

    (results, count)
}
