use crate::error::ApiError;
use crate::exploration::{collaborators_response, explore_graph_response};
use crate::filmography::{filmography_response, parse_person_ids};
use crate::models::{
    CollaboratorsQuery, CollaboratorsResponse, ExploreQuery, GraphExploreResponse,
    HealthResponse, MoviesQuery, MoviesResponse, PathQuery, PathResponse, ReloadResponse,
    SearchQuery, SearchResponse, StatsResponse,
};
use crate::pathfinding::find_paths_response;
use crate::search::search_people_in_graph;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Query, State},
};
use filmpath_core::{CollaborationGraph, PathfindingConfig};
use std::sync::Arc;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Filmpath API is running".to_string(),
    })
}

pub async fn search_people(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> Json<SearchResponse> {
    let graph = state.snapshot();
    let query = params.q.trim();
    let (results, count) = search_people_in_graph(&graph, query, params.limit);

    Json(SearchResponse {
        query: query.to_string(),
        results,
        count,
    })
}

pub async fn find_path(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PathQuery>,
) -> Result<Json<PathResponse>, ApiError> {
    let limit = params.limit.unwrap_or(state.default_path_limit);
    let config = PathfindingConfig::new(limit)?.with_max_expansions(state.max_path_expansions);
    let graph = state.snapshot();

    // The search is CPU-bound; keep it off the async workers
    let response = tokio::task::spawn_blocking(move || {
        find_paths_response(params.from_id, params.to_id, &graph, &config)
    })
    .await
    .map_err(|error| ApiError::Internal(error.to_string()))?;

    Ok(Json(response))
}

pub async fn explore_person(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExploreQuery>,
) -> Json<GraphExploreResponse> {
    let graph = state.snapshot();

    Json(explore_graph_response(
        params.person_id,
        params.budget.min(state.max_explore_budget),
        params.max_relations,
        &graph,
    ))
}

pub async fn get_collaborators(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CollaboratorsQuery>,
) -> Json<CollaboratorsResponse> {
    let graph = state.snapshot();
    Json(collaborators_response(params.person_id, params.limit, &graph))
}

pub async fn get_movies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<MoviesQuery>,
) -> Result<Json<MoviesResponse>, ApiError> {
    let actors = parse_person_ids(&params.actor_ids)?;
    let graph = state.snapshot();

    Ok(Json(filmography_response(
        params.director_id,
        &actors,
        params.limit,
        &graph,
    )))
}

fn stats_of(graph: &CollaborationGraph) -> StatsResponse {
    let report = graph.report();
    StatsResponse {
        total_people: report.people,
        total_movies: report.movies,
        total_associations: report.associations,
        rows_skipped: report.rows_skipped,
        unlabelled_roles: report.unlabelled_roles,
    }
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<StatsResponse> {
    Json(stats_of(&state.snapshot()))
}

pub async fn reload_catalogue(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReloadResponse>, ApiError> {
    // Reading SQLite blocks; keep it off the async workers
    let graph = tokio::task::spawn_blocking(move || state.reload())
        .await
        .map_err(|error| ApiError::Internal(error.to_string()))??;

    Ok(Json(ReloadResponse {
        status: "reloaded".to_string(),
        stats: stats_of(&graph),
    }))
}
