pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod download;
pub mod json_output;
pub mod search;
pub mod utils;

// Re-export commonly used items
pub use args::{Args, Command, ExploreArgs, MoviesArgs, PathArgs, PeopleArgs};
pub use search::{create_search_request, find_best_person_match};
pub use utils::format_number;
