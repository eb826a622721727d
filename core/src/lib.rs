pub mod catalogue;
pub mod error;
pub mod exploration;
pub mod graph;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod render;
pub mod store;
pub mod string_normalization;

// Re-export commonly used items
pub use catalogue::{AssociationRow, Movie, MovieId, Person, PersonId, Role};
pub use error::{CatalogueError, PathfindingError};
pub use exploration::{
    Collaborator, ExplorationResult, collaborators, credited_people, explore_bfs,
    shared_filmography,
};
pub use graph::{BuildReport, CollaborationGraph, EdgeCredit};
pub use pathfinding::{CollaborationPath, Node, find_shortest_paths, shortest_distance};
pub use pathfinding_config::{DEFAULT_MAX_EXPANSIONS, PathfindingConfig};
pub use render::{
    ConnectionStep, PathDiagram, build_diagram, describe_connection, movie_label, path_label,
};
pub use store::load_association_rows;
