use crate::catalogue::{Movie, MovieId, PersonId, Role};
use crate::graph::CollaborationGraph;
use rustc_hash::FxHashSet;

fn credited_as(person: PersonId, movie: MovieId, role: Role, graph: &CollaborationGraph) -> bool {
    graph
        .edge_roles(person, movie)
        .is_some_and(|roles| roles.contains(&role))
}

/// Movies directed by `director` (when given) that credit every one of
/// `actors` as an actor. Newest first, then by title.
///
/// An empty selection matches nothing.
pub fn shared_filmography(
    director: Option<PersonId>,
    actors: &[PersonId],
    graph: &CollaborationGraph,
) -> Vec<MovieId> {
    let required: Vec<PersonId> = {
        let mut seen = FxHashSet::default();
        actors.iter().copied().filter(|id| seen.insert(*id)).collect()
    };

    let anchor = match (director, required.first()) {
        (Some(director), _) => director,
        (None, Some(&actor)) => actor,
        (None, None) => return Vec::new(),
    };

    let mut movies: Vec<MovieId> = graph
        .movies_of(anchor)
        .iter()
        .copied()
        .filter(|&movie| {
            director.is_none_or(|director| credited_as(director, movie, Role::Director, graph))
        })
        .filter(|&movie| {
            required
                .iter()
                .all(|&actor| credited_as(actor, movie, Role::Actor, graph))
        })
        .collect();

    sort_by_release(&mut movies, graph);
    movies
}

fn release_key(movie: Option<&Movie>) -> (Option<i32>, &str) {
    movie.map_or((None, ""), |m| (m.year, m.title.as_str()))
}

fn sort_by_release(movies: &mut [MovieId], graph: &CollaborationGraph) {
    movies.sort_by(|a, b| {
        let (a_year, a_title) = release_key(graph.movie(*a));
        let (b_year, b_title) = release_key(graph.movie(*b));
        b_year
            .cmp(&a_year)
            .then_with(|| a_title.cmp(b_title))
            .then_with(|| a.cmp(b))
    });
}

/// Everyone credited with `role` on any of `movies`, ordered by name then id.
pub fn credited_people(
    movies: &[MovieId],
    role: Role,
    graph: &CollaborationGraph,
) -> Vec<PersonId> {
    let mut people: Vec<PersonId> = movies
        .iter()
        .flat_map(|&movie| {
            graph
                .people_in(movie)
                .iter()
                .copied()
                .filter(move |&person| credited_as(person, movie, role, graph))
        })
        .collect::<FxHashSet<_>>()
        .into_iter()
        .collect();

    let name_of = |id: PersonId| graph.person(id).map_or("", |p| p.name.as_str());
    people.sort_by(|a, b| name_of(*a).cmp(name_of(*b)).then_with(|| a.cmp(b)));
    people
}
