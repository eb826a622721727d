use clap::{Args as ClapArgs, Parser, Subcommand};
use filmpath_core::pathfinding_config::{DEFAULT_MAX_EXPANSIONS, DEFAULT_PATH_LIMIT};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "filmpath")]
#[command(about = "Find how any two actors or directors are connected through the movies they made")]
pub struct Args {
    /// Catalogue file (SQLite, or a JSON export of association rows)
    #[arg(long, global = true, value_name = "PATH")]
    pub catalogue: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose mode - show search info, statistics and debug logs
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Shortest collaboration paths between two people
    Path(PathArgs),
    /// People reachable from one person, layer by layer
    Explore(ExploreArgs),
    /// Search people by name
    People(PeopleArgs),
    /// Movies by a director and/or featuring every listed actor
    Movies(MoviesArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct PathArgs {
    /// First person name
    pub person1: String,

    /// Second person name
    pub person2: String,

    /// Maximum number of equally short paths to show
    #[arg(short = 'n', long, value_name = "COUNT", default_value_t = DEFAULT_PATH_LIMIT)]
    pub limit: usize,

    /// Give up after expanding this many nodes
    #[arg(long, value_name = "COUNT", default_value_t = DEFAULT_MAX_EXPANSIONS)]
    pub max_expansions: usize,

    /// Print a Graphviz diagram for every path
    #[arg(long)]
    pub dot: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ExploreArgs {
    /// Person at the centre of the exploration
    pub person: String,

    /// Stop after discovering this many people
    #[arg(short, long, value_name = "COUNT", default_value = "30")]
    pub budget: usize,

    /// Follow at most this many strongest collaborators per person
    #[arg(short = 'r', long, value_name = "COUNT", default_value = "10")]
    pub max_relations: usize,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct PeopleArgs {
    /// Part of a name, accents and punctuation ignored
    pub query: String,

    /// Maximum number of matches
    #[arg(short, long, value_name = "COUNT", default_value = "10")]
    pub limit: usize,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct MoviesArgs {
    /// Only movies directed by this person
    #[arg(short, long, value_name = "NAME")]
    pub director: Option<String>,

    /// Only movies featuring this actor (repeat to require several)
    #[arg(short, long = "actor", value_name = "NAME")]
    pub actors: Vec<String>,

    /// Maximum number of movies to list
    #[arg(short, long, value_name = "COUNT", default_value = "25")]
    pub limit: usize,
}
