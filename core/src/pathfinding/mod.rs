pub mod bfs;
pub mod distance;
pub mod path;

// Re-export the public functions
pub use bfs::{PathSearchResult, find_shortest_paths};
pub use distance::shortest_distance;
pub use path::{CollaborationPath, Link, Node};
