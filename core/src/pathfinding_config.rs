use crate::error::PathfindingError;

pub const DEFAULT_PATH_LIMIT: usize = 3;

/// Expansion guard applied by the interactive front ends
pub const DEFAULT_MAX_EXPANSIONS: usize = 200_000;

/// Configuration for the shortest-path search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathfindingConfig {
    /// Stop once this many shortest paths have been collected (>= 1)
    pub limit: usize,
    /// Optional guard on the number of nodes expanded before giving up
    pub max_expansions: Option<usize>,
}

impl PathfindingConfig {
    pub fn new(limit: usize) -> Result<Self, PathfindingError> {
        if limit == 0 {
            return Err(PathfindingError::InvalidLimit(limit));
        }
        Ok(Self {
            limit,
            max_expansions: None,
        })
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Whether a search that expanded `expanded` nodes ran into the guard,
    /// in which case its paths may be incomplete.
    pub fn budget_exhausted(&self, expanded: usize) -> bool {
        self.max_expansions
            .is_some_and(|budget| expanded >= budget)
    }
}

impl Default for PathfindingConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PATH_LIMIT,
            max_expansions: None,
        }
    }
}
