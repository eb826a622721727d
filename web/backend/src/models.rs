use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PersonSummary {
    pub id: i64,
    pub name: String,
    pub roles: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<PersonSummary>,
    pub count: usize,
}

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

#[derive(Deserialize)]
pub struct PathQuery {
    pub from_id: i64,
    pub to_id: i64,
    /// Falls back to the server's configured default
    pub limit: Option<usize>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PathNode {
    /// `person` or `movie`
    pub kind: String,
    pub id: i64,
    pub label: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PathStep {
    pub person: String,
    pub person_credit: String,
    pub movie: String,
    pub partner: String,
    pub partner_credit: String,
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct PathEntry {
    pub label: String,
    pub degrees_of_separation: usize,
    pub nodes: Vec<PathNode>,
    pub steps: Vec<PathStep>,
    pub dot: String,
}

#[derive(Serialize, Deserialize)]
pub struct SearchStats {
    pub nodes_expanded: usize,
    pub duration_ms: u64,
    /// The expansion guard ended the search; paths may be missing
    pub stopped_early: bool,
}

#[derive(Serialize, Deserialize)]
pub struct PathResponse {
    pub from: Option<PersonSummary>,
    pub to: Option<PersonSummary>,
    pub paths: Vec<PathEntry>,
    pub path_count: usize,
    pub degrees_of_separation: Option<usize>,
    pub search_stats: SearchStats,
}

#[derive(Deserialize)]
pub struct ExploreQuery {
    pub person_id: i64,
    #[serde(default = "default_budget")]
    pub budget: usize,
    #[serde(default = "default_max_relations")]
    pub max_relations: usize,
}

fn default_budget() -> usize {
    30
}

fn default_max_relations() -> usize {
    10
}

#[derive(Serialize, Deserialize)]
pub struct GraphNode {
    pub id: i64,
    pub name: String,
    pub layer: usize,
    /// Movies shared with the person this one was discovered from
    pub shared_movies: usize,
}

#[derive(Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: i64,
    pub to: i64,
    pub shared_movies: usize,
}

#[derive(Serialize, Deserialize)]
pub struct ExploreStats {
    pub people_visited: usize,
    pub duration_ms: u64,
}

#[derive(Serialize, Deserialize)]
pub struct GraphExploreResponse {
    pub center: Option<PersonSummary>,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub total_found: usize,
    pub search_stats: ExploreStats,
}

#[derive(Deserialize)]
pub struct CollaboratorsQuery {
    pub person_id: i64,
    #[serde(default = "default_collaborator_limit")]
    pub limit: usize,
}

fn default_collaborator_limit() -> usize {
    50
}

#[derive(Serialize, Deserialize)]
pub struct CollaboratorEntry {
    pub person: PersonSummary,
    pub shared_movies: usize,
}

#[derive(Serialize, Deserialize)]
pub struct CollaboratorsResponse {
    pub person: Option<PersonSummary>,
    pub collaborators: Vec<CollaboratorEntry>,
    pub count: usize,
}

#[derive(Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_people: usize,
    pub total_movies: usize,
    pub total_associations: usize,
    pub rows_skipped: usize,
    pub unlabelled_roles: usize,
}

#[derive(Serialize, Deserialize)]
pub struct ReloadResponse {
    pub status: String,
    pub stats: StatsResponse,
}

#[derive(Deserialize)]
pub struct MoviesQuery {
    pub director_id: Option<i64>,
    /// Comma-separated person ids, all of whom must act in the movie
    #[serde(default)]
    pub actor_ids: String,
    #[serde(default = "default_movies_limit")]
    pub limit: usize,
}

fn default_movies_limit() -> usize {
    100
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MovieSummary {
    pub id: i64,
    pub title: String,
    pub year: Option<i32>,
    pub label: String,
    pub directors: Vec<String>,
    pub actors: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct MoviesResponse {
    pub director: Option<PersonSummary>,
    pub actors: Vec<PersonSummary>,
    pub movies: Vec<MovieSummary>,
    pub total_found: usize,
    /// Actors credited on any matching movie, for narrowing the selection
    pub available_actors: Vec<PersonSummary>,
}
