use crate::fixtures::*;
use filmpath_core::{
    CollaborationGraph, DEFAULT_MAX_EXPANSIONS, Node, PathfindingConfig, PathfindingError,
    find_shortest_paths, shortest_distance,
};

fn config(limit: usize) -> PathfindingConfig {
    PathfindingConfig::new(limit).unwrap()
}

#[test]
fn test_same_person_returns_nothing() {
    let graph = diamond_graph();

    let (paths, expanded, _) = find_shortest_paths(ALICE, ALICE, &graph, &config(3));

    assert!(paths.is_empty());
    assert_eq!(expanded, 0);
}

#[test]
fn test_direct_co_credit_is_one_degree() {
    let graph = diamond_graph();

    let (paths, _, _) = find_shortest_paths(ALICE, BOB, &graph, &config(3));

    assert_eq!(paths.len(), 1);
    let path = &paths[0];
    assert_eq!(
        path.nodes(),
        &[Node::Person(ALICE), Node::Movie(FIRST_LIGHT), Node::Person(BOB)]
    );
    assert_eq!(path.len(), 3);
    assert_eq!(path.degrees_of_separation(), 1);
}

#[test]
fn test_diamond_returns_both_shortest_paths() {
    let graph = diamond_graph();

    let (paths, _, _) = find_shortest_paths(ALICE, CAROL, &graph, &config(2));

    assert_eq!(paths.len(), 2);
    assert_eq!(
        paths[0].nodes(),
        &[
            Node::Person(ALICE),
            Node::Movie(FIRST_LIGHT),
            Node::Person(BOB),
            Node::Movie(SECOND_WIND),
            Node::Person(CAROL),
        ]
    );
    assert_eq!(
        paths[1].nodes(),
        &[
            Node::Person(ALICE),
            Node::Movie(THIRD_ACT),
            Node::Person(DAVE),
            Node::Movie(FOURTH_WALL),
            Node::Person(CAROL),
        ]
    );
    assert!(paths.iter().all(|path| path.degrees_of_separation() == 2));
}

#[test]
fn test_limit_one_stops_after_first_path() {
    let graph = diamond_graph();

    let (paths, _, _) = find_shortest_paths(ALICE, CAROL, &graph, &config(1));

    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].people(), vec![ALICE, BOB, CAROL]);
}

#[test]
fn test_limit_above_available_returns_all_shortest() {
    let graph = diamond_graph();

    let (paths, _, _) = find_shortest_paths(ALICE, CAROL, &graph, &config(10));

    // Longer detours never mix in with the shortest ones
    assert_eq!(paths.len(), 2);
}

#[test]
fn test_unknown_people_return_nothing() {
    let graph = diamond_graph();

    let (from_unknown, _, _) = find_shortest_paths(999, ALICE, &graph, &config(3));
    let (to_unknown, _, _) = find_shortest_paths(ALICE, 999, &graph, &config(3));

    assert!(from_unknown.is_empty());
    assert!(to_unknown.is_empty());
}

#[test]
fn test_isolated_person_is_unreachable() {
    let graph = CollaborationGraph::build(diamond_with_loner_rows());

    let (to_loner, _, _) = find_shortest_paths(ALICE, ERIN, &graph, &config(3));
    let (from_loner, _, _) = find_shortest_paths(ERIN, CAROL, &graph, &config(3));

    assert!(to_loner.is_empty());
    assert!(from_loner.is_empty());
}

#[test]
fn test_disconnected_components_return_nothing() {
    let graph = festival_graph();

    // Rune Adler only appears in Paper Tides
    let (paths, expanded, _) = find_shortest_paths(10, 17, &graph, &config(3));

    assert!(paths.is_empty());
    assert!(expanded > 0);
}

#[test]
fn test_three_degree_alternatives_in_festival() {
    let graph = festival_graph();

    // Nora Quill to Sol Hart: via Ivo and Mira, or via Lena and Ada
    let (paths, _, _) = find_shortest_paths(10, 15, &graph, &config(3));

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].people(), vec![10, 11, 16, 15]);
    assert_eq!(paths[1].people(), vec![10, 12, 14, 15]);
    assert_eq!(paths[0].movies(), vec![1, 5, 4]);
    assert_eq!(paths[1].movies(), vec![1, 2, 3]);
    assert_eq!(shortest_distance(10, 15, &graph), Some(7));
}

#[test]
fn test_shared_movie_pair_yields_parallel_paths() {
    let rows = vec![
        actor(1, "Alpha", 2000, 1, "Pia"),
        actor(1, "Alpha", 2000, 2, "Quin"),
        actor(2, "Beta", 2001, 1, "Pia"),
        actor(2, "Beta", 2001, 2, "Quin"),
    ];
    let graph = CollaborationGraph::build(rows);

    let (paths, _, _) = find_shortest_paths(1, 2, &graph, &config(3));

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[0].movies(), vec![1]);
    assert_eq!(paths[1].movies(), vec![2]);
}

#[test]
fn test_zero_limit_rejected_at_config() {
    assert_eq!(
        PathfindingConfig::new(0),
        Err(PathfindingError::InvalidLimit(0))
    );
    assert_eq!(PathfindingConfig::default().limit, 3);
}

#[test]
fn test_expansion_budget_stops_search_early() {
    let graph = festival_graph();
    let tight = config(3).with_max_expansions(2);

    let (paths, expanded, _) = find_shortest_paths(10, 15, &graph, &tight);

    assert!(paths.is_empty());
    assert_eq!(expanded, 2);
}

#[test]
fn test_generous_budget_does_not_change_result() {
    let graph = festival_graph();
    let generous = config(3).with_max_expansions(10_000);

    let (limited, _, _) = find_shortest_paths(10, 15, &graph, &generous);
    let (unlimited, _, _) = find_shortest_paths(10, 15, &graph, &config(3));

    assert_eq!(limited, unlimited);
}

#[test]
fn test_expansion_budget_bounds_hopeless_searches() {
    let graph = ladder_graph(9);
    let guarded = config(3).with_max_expansions(1_000);

    let (paths, expanded, _) = find_shortest_paths(LADDER_START, ISLAND, &graph, &guarded);

    assert!(paths.is_empty());
    assert_eq!(expanded, 1_000);
    assert!(guarded.budget_exhausted(expanded));
}

#[test]
fn test_budget_not_reported_when_search_completes() {
    let graph = ladder_graph(3);
    let guarded = config(3).with_max_expansions(DEFAULT_MAX_EXPANSIONS);

    let (paths, expanded, _) = find_shortest_paths(LADDER_START, ISLAND, &graph, &guarded);

    assert!(paths.is_empty());
    assert!(expanded < DEFAULT_MAX_EXPANSIONS);
    assert!(!guarded.budget_exhausted(expanded));
    assert!(!config(3).budget_exhausted(usize::MAX));
}

#[test]
fn test_shortest_distance_matches_edge_cases() {
    let graph = CollaborationGraph::build(diamond_with_loner_rows());

    assert_eq!(shortest_distance(ALICE, ALICE, &graph), Some(1));
    assert_eq!(shortest_distance(ALICE, BOB, &graph), Some(3));
    assert_eq!(shortest_distance(ALICE, CAROL, &graph), Some(5));
    assert_eq!(shortest_distance(ALICE, ERIN, &graph), None);
    assert_eq!(shortest_distance(ALICE, 999, &graph), None);
}
