use filmpath_core::{CollaborationGraph, CollaborationPath, PathfindingConfig, PersonId};

use crate::args::PathArgs;

const SUGGESTION_COUNT: usize = 5;

pub struct SearchRequest {
    pub from_person: PersonId,
    pub to_person: PersonId,
    pub from_name: String,
    pub to_name: String,
    pub config: PathfindingConfig,
    pub search_args: PathArgs,
}

pub struct SearchResult {
    pub paths: Vec<CollaborationPath>,
    pub nodes_expanded: usize,
    pub search_duration: f64,
    /// The expansion guard cut the search short
    pub stopped_early: bool,
    pub from_name: String,
    pub to_name: String,
    pub display_options: PathArgs,
}

/// Resolve a typed name to one person, suggesting close names on a miss.
pub fn find_best_person_match(name: &str, graph: &CollaborationGraph) -> Result<PersonId, String> {
    if let Some(person_id) = graph.find_person_by_name(name) {
        return Ok(person_id);
    }

    let suggestions: Vec<String> = graph
        .search_people(name, SUGGESTION_COUNT)
        .into_iter()
        .map(|person| person.name.clone())
        .collect();

    if suggestions.is_empty() {
        Err(format!("Person '{}' not found in catalogue", name))
    } else {
        Err(format!(
            "Person '{}' not found in catalogue. Did you mean: {}?",
            name,
            suggestions.join(", ")
        ))
    }
}

pub fn create_search_request(
    args: PathArgs,
    graph: &CollaborationGraph,
) -> Result<SearchRequest, String> {
    let config = PathfindingConfig::new(args.limit)
        .map_err(|error| error.to_string())?
        .with_max_expansions(args.max_expansions);

    let from_person_id = find_best_person_match(&args.person1, graph)?;
    let to_person_id = find_best_person_match(&args.person2, graph)?;

    if from_person_id == to_person_id {
        return Err("Pick two different people".to_string());
    }

    let name_of = |id: PersonId| {
        graph
            .person(id)
            .map(|person| person.name.clone())
            .unwrap_or_default()
    };

    Ok(SearchRequest {
        from_person: from_person_id,
        to_person: to_person_id,
        from_name: name_of(from_person_id),
        to_name: name_of(to_person_id),
        config,
        search_args: args,
    })
}
