use filmpath_core::{
    CollaborationGraph, CollaborationPath, ConnectionStep, ExplorationResult, MovieId, Node,
    Person, PersonId, Role, build_diagram, describe_connection, movie_label, path_label,
};

use crate::colors::ColorScheme;
use crate::search::{SearchRequest, SearchResult};
use crate::utils::format_number;

pub fn display_search_info(request: &SearchRequest, colors: &ColorScheme) {
    println!(
        "🎬 Finding collaboration paths from {} to {}",
        colors.person_name(&format!("\"{}\"", request.from_name)),
        colors.person_name(&format!("\"{}\"", request.to_name))
    );
    println!(
        "⚙️  Keeping up to {} shortest paths",
        colors.number(&request.search_args.limit.to_string())
    );
    println!("🔍 Searching...");
}

pub fn display_search_results(
    result: &SearchResult,
    graph: &CollaborationGraph,
    verbose: bool,
    colors: &ColorScheme,
) {
    if verbose {
        println!("\n---\n");
    }

    if result.paths.is_empty() {
        println!(
            "{} {} and {}",
            colors.error("❌ No collaboration path was found between"),
            colors.person_name(&format!("\"{}\"", result.from_name)),
            colors.person_name(&format!("\"{}\"", result.to_name))
        );
    }

    if result.stopped_early {
        println!(
            "{} Search stopped after {} expansions; raise --max-expansions to look further",
            colors.error("⚠️"),
            colors.number(&format_number(result.nodes_expanded))
        );
    }

    if !result.paths.is_empty() {
        let degrees = result.paths[0].degrees_of_separation();
        println!(
            "{} {} degree{} of separation, {} path{} found\n",
            colors.success("✅"),
            colors.number(&degrees.to_string()),
            if degrees == 1 { "" } else { "s" },
            colors.number(&result.paths.len().to_string()),
            if result.paths.len() == 1 { "" } else { "s" },
        );

        for (index, path) in result.paths.iter().enumerate() {
            display_path(index, path, result, graph, colors);
        }
    }

    if verbose {
        display_search_statistics(result.nodes_expanded, result.search_duration, colors);
    }
}

fn display_path(
    index: usize,
    path: &CollaborationPath,
    result: &SearchResult,
    graph: &CollaborationGraph,
    colors: &ColorScheme,
) {
    println!("{}", colors.tab_label(&format!("[{}]", path_label(index))));
    println!("{}", format_path_flow(path, graph, colors));

    if !result.display_options.quiet {
        println!();
        for (step_index, step) in describe_connection(path, graph).iter().enumerate() {
            println!(
                "{}",
                format_connection_step(&format!("{}.", step_index + 1), step, colors)
            );
        }
    }

    if result.display_options.dot {
        println!();
        println!("{}", build_diagram(path, graph).to_dot());
    }
    println!();
}

/// `"Alice" → First Light (2001) → "Bob"`
pub fn format_path_flow(
    path: &CollaborationPath,
    graph: &CollaborationGraph,
    colors: &ColorScheme,
) -> String {
    path.nodes()
        .iter()
        .map(|&node| match node {
            Node::Person(id) => colors
                .person_name(&format!("\"{}\"", person_name(id, graph)))
                .to_string(),
            Node::Movie(id) => colors.movie_title(&movie_label(graph.movie(id))).to_string(),
        })
        .collect::<Vec<_>>()
        .join(" → ")
}

fn person_name(id: PersonId, graph: &CollaborationGraph) -> &str {
    graph.person(id).map_or("", |person| person.name.as_str())
}

pub fn format_connection_step(
    step_number: &str,
    step: &ConnectionStep,
    colors: &ColorScheme,
) -> String {
    format!(
        "{:3} {} ({}) → {} → {} ({})",
        colors.step_number(step_number),
        colors.person_name(&step.person),
        colors.role(&step.person_credit()),
        colors.movie_title(&step.movie),
        colors.person_name(&step.partner),
        colors.role(&step.partner_credit())
    )
}

fn display_search_statistics(nodes_expanded: usize, search_duration: f64, colors: &ColorScheme) {
    println!("---\n");
    println!(
        "{} Expanded {} nodes in {} sec",
        colors.stats("📊"),
        colors.number(&format_number(nodes_expanded)),
        colors.number(&format!("{:.3}", search_duration))
    );
}

pub fn display_exploration(
    center: &Person,
    result: &ExplorationResult,
    graph: &CollaborationGraph,
    verbose: bool,
    colors: &ColorScheme,
) {
    println!(
        "🧭 Exploring collaborators around {}",
        colors.person_name(&format!("\"{}\"", center.name))
    );

    let mut discovered: Vec<_> = result
        .discovered_people
        .iter()
        .filter(|(id, _)| **id != center.id)
        .map(|(&id, &(shared, layer))| (layer, id, shared))
        .collect();
    discovered.sort_by(|a, b| {
        a.0.cmp(&b.0)
            .then_with(|| b.2.cmp(&a.2))
            .then_with(|| person_name(a.1, graph).cmp(person_name(b.1, graph)))
    });

    let mut current_layer = 0;
    for (layer, id, shared) in discovered {
        if layer != current_layer {
            current_layer = layer;
            println!("\n{}", colors.tab_label(&format!("Layer {layer}")));
        }
        let label = graph.person(id).map(Person::label).unwrap_or_default();
        println!(
            "  {} [{} shared]",
            colors.person_name(&label),
            colors.number(&shared.to_string())
        );
    }

    if verbose {
        println!("\n---\n");
        println!(
            "{} Discovered {} people, visited {} in {} ms",
            colors.stats("📊"),
            colors.number(&format_number(result.total_discovered())),
            colors.number(&format_number(result.stats.people_visited)),
            colors.number(&result.stats.duration_ms.to_string())
        );
    }
}

pub fn display_people(matches: &[&Person], query: &str, colors: &ColorScheme) {
    if matches.is_empty() {
        println!(
            "{} \"{}\"",
            colors.error("❌ No people match"),
            query
        );
        return;
    }

    for (index, person) in matches.iter().enumerate() {
        println!(
            "{:3} {} {}",
            colors.step_number(&format!("{}.", index + 1)),
            colors.person_name(&person.label()),
            colors.stats(&format!("#{}", person.id))
        );
    }
}

fn names_with_role(movie: MovieId, role: Role, graph: &CollaborationGraph) -> String {
    graph
        .people_in(movie)
        .iter()
        .filter(|&&person| {
            graph
                .edge_roles(person, movie)
                .is_some_and(|roles| roles.contains(&role))
        })
        .map(|&person| person_name(person, graph))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_filmography(
    movies: &[MovieId],
    cast: &[PersonId],
    limit: usize,
    graph: &CollaborationGraph,
    colors: &ColorScheme,
) {
    if movies.is_empty() {
        println!("{}", colors.error("❌ No movies match this selection"));
        return;
    }

    println!(
        "{} {} movie{} match\n",
        colors.success("🎞️"),
        colors.number(&format_number(movies.len())),
        if movies.len() == 1 { "" } else { "s" }
    );

    for (index, &movie) in movies.iter().take(limit).enumerate() {
        println!(
            "{:3} {}",
            colors.step_number(&format!("{}.", index + 1)),
            colors.movie_title(&movie_label(graph.movie(movie)))
        );
        let directors = names_with_role(movie, Role::Director, graph);
        if !directors.is_empty() {
            println!("    {} {}", colors.role("Directed by"), directors);
        }
    }

    if movies.len() > limit {
        println!("    ... and {} more", format_number(movies.len() - limit));
    }

    if !cast.is_empty() {
        let names: Vec<&str> = cast.iter().map(|&id| person_name(id, graph)).collect();
        println!("\n{} {}", colors.tab_label("Actors in these movies:"), names.join(", "));
    }
}
