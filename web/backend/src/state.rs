use crate::config::{DEFAULT_MAX_EXPLORE_BUDGET, ServerConfig};
use crate::error::ApiError;
use filmpath_core::{
    CatalogueError, CollaborationGraph, DEFAULT_MAX_EXPANSIONS, load_association_rows,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Shared server state: one immutable graph snapshot, swapped on reload.
///
/// Requests clone the `Arc` and search without holding the lock, so a reload
/// never blocks in-flight searches and they finish on the snapshot they began with.
pub struct AppState {
    graph: RwLock<Arc<CollaborationGraph>>,
    catalogue_path: Option<PathBuf>,
    pub default_path_limit: usize,
    pub max_path_expansions: usize,
    pub max_explore_budget: usize,
}

fn load_graph(path: &Path) -> Result<CollaborationGraph, CatalogueError> {
    let rows = load_association_rows(path)?;
    Ok(CollaborationGraph::build(rows))
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Result<Self, CatalogueError> {
        let graph = load_graph(&config.catalogue_path)?;

        tracing::info!(
            people = graph.people_count(),
            movies = graph.movie_count(),
            path = %config.catalogue_path.display(),
            "collaboration graph ready"
        );

        Ok(Self {
            graph: RwLock::new(Arc::new(graph)),
            catalogue_path: Some(config.catalogue_path.clone()),
            default_path_limit: config.default_path_limit,
            max_path_expansions: config.max_path_expansions,
            max_explore_budget: config.max_explore_budget,
        })
    }

    /// State over an already-built graph; `/api/reload` is unavailable.
    pub fn from_graph(graph: CollaborationGraph, default_path_limit: usize) -> Self {
        Self {
            graph: RwLock::new(Arc::new(graph)),
            catalogue_path: None,
            default_path_limit,
            max_path_expansions: DEFAULT_MAX_EXPANSIONS,
            max_explore_budget: DEFAULT_MAX_EXPLORE_BUDGET,
        }
    }

    pub fn with_max_path_expansions(mut self, max_path_expansions: usize) -> Self {
        self.max_path_expansions = max_path_expansions;
        self
    }

    pub fn with_max_explore_budget(mut self, max_explore_budget: usize) -> Self {
        self.max_explore_budget = max_explore_budget;
        self
    }

    pub fn snapshot(&self) -> Arc<CollaborationGraph> {
        let guard = self
            .graph
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Rebuild from the catalogue file and swap the snapshot in.
    pub fn reload(&self) -> Result<Arc<CollaborationGraph>, ApiError> {
        let path = self
            .catalogue_path
            .as_deref()
            .ok_or(ApiError::ReloadUnavailable)?;
        let fresh = Arc::new(load_graph(path)?);

        let mut guard = self
            .graph
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::clone(&fresh);

        tracing::info!(
            people = fresh.people_count(),
            movies = fresh.movie_count(),
            "collaboration graph reloaded"
        );
        Ok(fresh)
    }
}
