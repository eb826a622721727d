use crate::fixtures::*;
use axum::http::StatusCode;
use filmpath_core::AssociationRow;
use filmpath_web::build_router;
use filmpath_web::config::ServerConfig;
use filmpath_web::models::{ErrorResponse, PathResponse, ReloadResponse, StatsResponse};
use filmpath_web::state::AppState;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write_catalogue(path: &Path, rows: &[AssociationRow]) {
    std::fs::write(path, serde_json::to_string(rows).unwrap()).unwrap();
}

fn config_for(path: &Path) -> ServerConfig {
    ServerConfig {
        catalogue_path: path.to_path_buf(),
        bind_addr: "127.0.0.1:0".to_string(),
        default_path_limit: 1,
        max_path_expansions: 10_000,
        max_explore_budget: 100,
    }
}

#[tokio::test]
async fn test_reload_swaps_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.json");
    let mut rows = test_rows();
    write_catalogue(&path, &rows);

    let state = Arc::new(AppState::new(&config_for(&path)).unwrap());
    let app = build_router(state.clone());

    let (_, before): (_, PathResponse) =
        get_json(app.clone(), &format!("/api/path?from_id={NORA}&to_id={RUNE}")).await;
    assert!(before.paths.is_empty());

    // A new credit bridges the two islands
    rows.push(AssociationRow::new(7, "Late Bloom", Some(2022), ADA, "Ada Brook", "Director"));
    rows.push(AssociationRow::new(7, "Late Bloom", Some(2022), RUNE, "Rune Adler", "Actor"));
    write_catalogue(&path, &rows);

    let (status, reloaded): (_, ReloadResponse) = post_json(app.clone(), "/api/reload").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reloaded.status, "reloaded");
    assert_eq!(reloaded.stats.total_movies, 6);

    let (_, after): (_, PathResponse) =
        get_json(app.clone(), &format!("/api/path?from_id={NORA}&to_id={RUNE}")).await;
    // The configured default limit applies
    assert_eq!(after.path_count, 1);
    assert_eq!(after.degrees_of_separation, Some(3));

    let (_, stats): (_, StatsResponse) = get_json(app, "/api/stats").await;
    assert_eq!(stats.total_associations, 13);
}

#[tokio::test]
async fn test_snapshot_held_by_a_request_survives_reload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.json");
    write_catalogue(&path, &test_rows());
    let state = AppState::new(&config_for(&path)).unwrap();

    let held = state.snapshot();
    write_catalogue(&path, &test_rows()[..2]);
    state.reload().unwrap();

    assert_eq!(held.people_count(), 6);
    assert_eq!(state.snapshot().people_count(), 2);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rows.json");
    write_catalogue(&path, &test_rows());
    let state = Arc::new(AppState::new(&config_for(&path)).unwrap());
    let app = build_router(state.clone());

    std::fs::write(&path, "{ broken").unwrap();

    let (status, error): (_, ErrorResponse) = post_json(app, "/api/reload").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(error.error.contains("reload failed"));
    assert_eq!(state.snapshot().people_count(), 6);
}

#[tokio::test]
async fn test_reload_without_catalogue_is_conflict() {
    let (status, _): (_, ErrorResponse) = post_json(create_test_app(), "/api/reload").await;
    assert_eq!(status, StatusCode::CONFLICT);
}
