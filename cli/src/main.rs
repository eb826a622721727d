use anyhow::{Result, anyhow};
use clap::Parser;
use filmpath::app::FilmPathApp;
use filmpath::colors::ColorScheme;
use filmpath::display::{
    display_exploration, display_filmography, display_people, display_search_info,
    display_search_results,
};
use filmpath::json_output::{create_json_output, print_json_output};
use filmpath::search::{SearchRequest, SearchResult};
use filmpath::*;
use filmpath_core::{
    CollaborationGraph, Role, credited_people, explore_bfs, find_shortest_paths,
    shared_filmography,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {error:#}")));
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "filmpath=debug,filmpath_core=debug"
    } else {
        "filmpath=warn,filmpath_core=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args, colors: &ColorScheme) -> Result<()> {
    let app = FilmPathApp::new(args.catalogue.clone())?;
    let graph = app.load_graph()?;

    if args.verbose {
        let report = graph.report();
        println!(
            "📚 Loaded {} people and {} movies from {}",
            colors.number(&format_number(report.people)),
            colors.number(&format_number(report.movies)),
            app.catalogue_path.display()
        );
    }

    match args.command {
        Command::Path(path_args) => run_path_search(path_args, &graph, args.verbose, colors),
        Command::Explore(explore_args) => run_exploration(explore_args, &graph, args.verbose, colors),
        Command::People(people_args) => {
            let matches = graph.search_people(&people_args.query, people_args.limit);
            display_people(&matches, &people_args.query, colors);
            Ok(())
        }
        Command::Movies(movies_args) => run_filmography(movies_args, &graph, colors),
    }
}

fn run_path_search(
    path_args: PathArgs,
    graph: &CollaborationGraph,
    verbose: bool,
    colors: &ColorScheme,
) -> Result<()> {
    let search_request = create_search_request(path_args, graph).map_err(|message| anyhow!(message))?;
    let json = search_request.search_args.json;

    if verbose && !json {
        display_search_info(&search_request, colors);
    }

    let search_result = execute_pathfinding_search(search_request, graph)?;

    if json {
        print_json_output(&create_json_output(&search_result, graph));
    } else {
        display_search_results(&search_result, graph, verbose, colors);
    }
    Ok(())
}

fn execute_pathfinding_search(
    request: SearchRequest,
    graph: &CollaborationGraph,
) -> Result<SearchResult> {
    let (paths, nodes_expanded, elapsed_time) =
        find_shortest_paths(request.from_person, request.to_person, graph, &request.config);

    Ok(SearchResult {
        paths,
        nodes_expanded,
        search_duration: elapsed_time,
        stopped_early: request.config.budget_exhausted(nodes_expanded),
        from_name: request.from_name,
        to_name: request.to_name,
        display_options: request.search_args,
    })
}

fn run_exploration(
    explore_args: ExploreArgs,
    graph: &CollaborationGraph,
    verbose: bool,
    colors: &ColorScheme,
) -> Result<()> {
    let center_id =
        find_best_person_match(&explore_args.person, graph).map_err(|message| anyhow!(message))?;
    let center = graph
        .person(center_id)
        .ok_or_else(|| anyhow!("Person #{center_id} disappeared from the catalogue"))?;

    let result = explore_bfs(
        center_id,
        explore_args.budget,
        explore_args.max_relations,
        graph,
    );
    display_exploration(center, &result, graph, verbose, colors);
    Ok(())
}

fn run_filmography(
    movies_args: MoviesArgs,
    graph: &CollaborationGraph,
    colors: &ColorScheme,
) -> Result<()> {
    if movies_args.director.is_none() && movies_args.actors.is_empty() {
        return Err(anyhow!("Pick a director (--director) or at least one actor (--actor)"));
    }

    let resolve = |name: &str| find_best_person_match(name, graph).map_err(|message| anyhow!(message));
    let director = movies_args.director.as_deref().map(resolve).transpose()?;
    let actors = movies_args
        .actors
        .iter()
        .map(|name| resolve(name))
        .collect::<Result<Vec<_>>>()?;

    let movies = shared_filmography(director, &actors, graph);
    let cast = credited_people(&movies, Role::Actor, graph);
    display_filmography(&movies, &cast, movies_args.limit, graph, colors);
    Ok(())
}
