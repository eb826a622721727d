use crate::catalogue::{
    AssociationRow, Movie, MovieId, Person, PersonId, Role, UNKNOWN_PERSON, UNTITLED_MOVIE,
};
use crate::pathfinding::Node;
use crate::string_normalization::search_key;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::collections::BTreeSet;
use std::hash::Hash;

pub type NameLookup = FxHashMap<String, Vec<PersonId>>;

/// What a person did on one specific movie
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EdgeCredit {
    pub roles: BTreeSet<Role>,
    pub character: Option<String>,
}

/// Data-quality counters collected while building a snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BuildReport {
    pub rows_seen: usize,
    /// Rows dropped because the person or movie id was missing
    pub rows_skipped: usize,
    /// Rows kept as an edge but whose role label was empty or unknown
    pub unlabelled_roles: usize,
    pub people: usize,
    pub movies: usize,
    pub associations: usize,
}

/// Immutable bipartite graph of people and the movies they worked on.
///
/// Adjacency lists are ordered by the counterpart's name (or title), then id,
/// so traversal order does not depend on the order rows were read in.
#[derive(Debug, Clone, Default)]
pub struct CollaborationGraph {
    people: FxHashMap<PersonId, Person>,
    movies: FxHashMap<MovieId, Movie>,
    person_to_movies: FxHashMap<PersonId, Vec<MovieId>>,
    movie_to_people: FxHashMap<MovieId, Vec<PersonId>>,
    edge_credits: FxHashMap<(PersonId, MovieId), EdgeCredit>,
    name_lookup: NameLookup,
    report: BuildReport,
}

#[derive(Default)]
struct PersonDraft {
    name: Option<String>,
    roles: BTreeSet<Role>,
}

#[derive(Default)]
struct MovieDraft {
    title: Option<String>,
    year: Option<i32>,
    external_id: Option<String>,
}

#[derive(Default)]
struct GraphBuilder {
    people: FxHashMap<PersonId, PersonDraft>,
    movies: FxHashMap<MovieId, MovieDraft>,
    person_links: FxHashMap<PersonId, FxHashSet<MovieId>>,
    movie_links: FxHashMap<MovieId, FxHashSet<PersonId>>,
    edge_credits: FxHashMap<(PersonId, MovieId), EdgeCredit>,
    report: BuildReport,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl GraphBuilder {
    fn add_row(&mut self, row: AssociationRow) {
        self.report.rows_seen += 1;

        let (Some(person_id), Some(movie_id)) = (row.person_id, row.movie_id) else {
            self.report.rows_skipped += 1;
            return;
        };

        let role = row.parsed_role();
        if role.is_none() {
            self.report.unlabelled_roles += 1;
        }

        let person = self.people.entry(person_id).or_default();
        if person.name.is_none() {
            person.name = non_empty(row.person_name);
        }
        person.roles.extend(role);

        let movie = self.movies.entry(movie_id).or_default();
        if movie.title.is_none() {
            movie.title = non_empty(row.movie_title);
        }
        if movie.year.is_none() {
            movie.year = row.movie_year;
        }
        if movie.external_id.is_none() {
            movie.external_id = non_empty(row.movie_external_id);
        }

        self.person_links.entry(person_id).or_default().insert(movie_id);
        self.movie_links.entry(movie_id).or_default().insert(person_id);

        let character = non_empty(row.character);
        if role.is_some() || character.is_some() {
            let credit = self.edge_credits.entry((person_id, movie_id)).or_default();
            credit.roles.extend(role);
            if credit.character.is_none() {
                credit.character = character;
            }
        }
    }

    fn finish(self) -> CollaborationGraph {
        let people: FxHashMap<PersonId, Person> = self
            .people
            .into_iter()
            .map(|(id, draft)| {
                let person = Person {
                    id,
                    name: draft.name.unwrap_or_else(|| UNKNOWN_PERSON.to_string()),
                    roles: draft.roles,
                };
                (id, person)
            })
            .collect();

        let movies: FxHashMap<MovieId, Movie> = self
            .movies
            .into_iter()
            .map(|(id, draft)| {
                let movie = Movie {
                    id,
                    title: draft.title.unwrap_or_else(|| UNTITLED_MOVIE.to_string()),
                    year: draft.year,
                    external_id: draft.external_id,
                };
                (id, movie)
            })
            .collect();

        let person_to_movies = sort_links(self.person_links, |id| {
            movies.get(id).map_or("", |movie| movie.title.as_str())
        });
        let movie_to_people = sort_links(self.movie_links, |id| {
            people.get(id).map_or("", |person| person.name.as_str())
        });

        let name_lookup = build_name_lookup(&people);

        let mut report = self.report;
        report.people = people.len();
        report.movies = movies.len();
        report.associations = person_to_movies.values().map(Vec::len).sum();

        if report.rows_skipped > 0 {
            tracing::warn!(
                rows_skipped = report.rows_skipped,
                rows_seen = report.rows_seen,
                "skipped catalogue rows with a missing person or movie id"
            );
        }
        tracing::debug!(
            people = report.people,
            movies = report.movies,
            associations = report.associations,
            unlabelled_roles = report.unlabelled_roles,
            "built collaboration graph"
        );

        CollaborationGraph {
            people,
            movies,
            person_to_movies,
            movie_to_people,
            edge_credits: self.edge_credits,
            name_lookup,
            report,
        }
    }
}

fn sort_links<'a, Owner, Id, F>(
    links: FxHashMap<Owner, FxHashSet<Id>>,
    sort_name: F,
) -> FxHashMap<Owner, Vec<Id>>
where
    Owner: Eq + Hash,
    Id: Ord,
    F: Fn(&Id) -> &'a str,
{
    links
        .into_iter()
        .map(|(owner, counterparts)| {
            let mut ordered: Vec<Id> = counterparts.into_iter().collect();
            ordered.sort_by(|a, b| sort_name(a).cmp(sort_name(b)).then_with(|| a.cmp(b)));
            (owner, ordered)
        })
        .collect()
}

fn build_name_lookup(people: &FxHashMap<PersonId, Person>) -> NameLookup {
    let mut lookup: NameLookup = FxHashMap::default();
    for person in people.values() {
        lookup.entry(search_key(&person.name)).or_default().push(person.id);
    }
    for ids in lookup.values_mut() {
        ids.sort_unstable();
    }
    lookup
}

impl CollaborationGraph {
    pub fn build<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = AssociationRow>,
    {
        let mut builder = GraphBuilder::default();
        for row in rows {
            builder.add_row(row);
        }
        builder.finish()
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(&id)
    }

    pub fn movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn contains_person(&self, id: PersonId) -> bool {
        self.people.contains_key(&id)
    }

    pub fn movies_of(&self, person: PersonId) -> &[MovieId] {
        self.person_to_movies
            .get(&person)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn people_in(&self, movie: MovieId) -> &[PersonId] {
        self.movie_to_people
            .get(&movie)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Nodes adjacent to `node`, in the snapshot's deterministic order.
    pub fn neighbours(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        let no_movies: &[MovieId] = &[];
        let no_people: &[PersonId] = &[];
        let (movies, people) = match node {
            Node::Person(id) => (self.movies_of(id), no_people),
            Node::Movie(id) => (no_movies, self.people_in(id)),
        };
        movies
            .iter()
            .map(|&id| Node::Movie(id))
            .chain(people.iter().map(|&id| Node::Person(id)))
    }

    pub fn edge_credit(&self, person: PersonId, movie: MovieId) -> Option<&EdgeCredit> {
        self.edge_credits.get(&(person, movie))
    }

    pub fn edge_roles(&self, person: PersonId, movie: MovieId) -> Option<&BTreeSet<Role>> {
        self.edge_credit(person, movie)
            .map(|credit| &credit.roles)
            .filter(|roles| !roles.is_empty())
    }

    pub fn report(&self) -> &BuildReport {
        &self.report
    }

    pub fn people_count(&self) -> usize {
        self.people.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// All people ordered alphabetically (case-insensitive), then by id
    pub fn people_by_name(&self) -> Vec<&Person> {
        let mut people: Vec<&Person> = self.people.values().collect();
        people.sort_by(|a, b| {
            a.name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        people
    }

    /// Exact (normalised) name match. Among namesakes the exact spelling
    /// wins, then a case-insensitive match, otherwise the lowest id.
    pub fn find_person_by_name(&self, name: &str) -> Option<PersonId> {
        let candidates = self.name_lookup.get(&search_key(name))?;
        let query = name.trim();
        let lowercase_query = query.to_lowercase();
        let name_of = |id: &PersonId| self.people.get(id).map(|person| person.name.as_str());

        candidates
            .iter()
            .copied()
            .find(|id| name_of(id) == Some(query))
            .or_else(|| {
                candidates.iter().copied().find(|id| {
                    name_of(id).is_some_and(|name| name.to_lowercase() == lowercase_query)
                })
            })
            .or_else(|| candidates.first().copied())
    }

    /// Substring search over normalised names; prefix matches first, then
    /// shorter names.
    pub fn search_people(&self, query: &str, limit: usize) -> Vec<&Person> {
        let normalized_query = search_key(query);
        if normalized_query.is_empty() {
            return vec![];
        }

        let mut matches: Vec<(&Person, bool)> = self
            .name_lookup
            .iter()
            .filter(|(key, _)| key.contains(&normalized_query))
            .flat_map(|(key, ids)| {
                let starts = key.starts_with(&normalized_query);
                ids.iter()
                    .filter_map(move |id| self.people.get(id).map(|person| (person, starts)))
            })
            .collect();

        matches.sort_by(|(a, a_starts), (b, b_starts)| {
            b_starts
                .cmp(a_starts)
                .then_with(|| a.name.len().cmp(&b.name.len()))
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        matches.truncate(limit);
        matches.into_iter().map(|(person, _)| person).collect()
    }

    /// Every person→movie link has its movie→person mirror and vice versa.
    pub fn is_consistent(&self) -> bool {
        let forward = self.person_to_movies.iter().all(|(person, movies)| {
            movies
                .iter()
                .all(|movie| self.people_in(*movie).contains(person))
        });
        let backward = self.movie_to_people.iter().all(|(movie, people)| {
            people
                .iter()
                .all(|person| self.movies_of(*person).contains(movie))
        });
        forward && backward
    }
}
