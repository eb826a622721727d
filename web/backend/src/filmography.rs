use crate::error::ApiError;
use crate::models::{MovieSummary, MoviesResponse, PersonSummary};
use crate::search::{find_person_summary, person_summary};
use filmpath_core::{
    CollaborationGraph, MovieId, PersonId, Role, credited_people, movie_label, shared_filmography,
};

/// `"11, 16"` → `[11, 16]`; blank input is an empty selection.
pub fn parse_person_ids(text: &str) -> Result<Vec<PersonId>, ApiError> {
    text.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<PersonId>()
                .map_err(|_| ApiError::InvalidQuery(format!("'{part}' is not a person id")))
        })
        .collect()
}

fn names_credited_as(movie: MovieId, role: Role, graph: &CollaborationGraph) -> Vec<String> {
    graph
        .people_in(movie)
        .iter()
        .filter(|&&person| {
            graph
                .edge_roles(person, movie)
                .is_some_and(|roles| roles.contains(&role))
        })
        .filter_map(|&person| graph.person(person).map(|p| p.name.clone()))
        .collect()
}

fn movie_summary(movie: MovieId, graph: &CollaborationGraph) -> Option<MovieSummary> {
    graph.movie(movie).map(|details| MovieSummary {
        id: movie,
        title: details.title.clone(),
        year: details.year,
        label: movie_label(Some(details)),
        directors: names_credited_as(movie, Role::Director, graph),
        actors: names_credited_as(movie, Role::Actor, graph),
    })
}

fn summaries(ids: &[PersonId], graph: &CollaborationGraph) -> Vec<PersonSummary> {
    ids.iter()
        .filter_map(|&id| graph.person(id).map(person_summary))
        .collect()
}

pub fn filmography_response(
    director_id: Option<PersonId>,
    actor_ids: &[PersonId],
    limit: usize,
    graph: &CollaborationGraph,
) -> MoviesResponse {
    let matching = shared_filmography(director_id, actor_ids, graph);
    let available_actors = credited_people(&matching, Role::Actor, graph);

    MoviesResponse {
        director: director_id.and_then(|id| find_person_summary(id, graph)),
        actors: summaries(actor_ids, graph),
        total_found: matching.len(),
        movies: matching
            .iter()
            .take(limit)
            .filter_map(|&movie| movie_summary(movie, graph))
            .collect(),
        available_actors: summaries(&available_actors, graph),
    }
}
