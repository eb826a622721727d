use crate::fixtures::*;
use filmpath_core::{
    CollaborationGraph, CollaborationPath, Node, PathfindingConfig, find_shortest_paths,
    shortest_distance,
};
use rustc_hash::FxHashSet;

const FESTIVAL_PEOPLE: [i64; 9] = [10, 11, 12, 13, 14, 15, 16, 17, 18];

fn all_pairs() -> impl Iterator<Item = (i64, i64)> {
    FESTIVAL_PEOPLE.into_iter().flat_map(|from| {
        FESTIVAL_PEOPLE
            .into_iter()
            .filter(move |&to| to != from)
            .map(move |to| (from, to))
    })
}

fn assert_well_formed(path: &CollaborationPath, from: i64, to: i64, graph: &CollaborationGraph) {
    assert_eq!(path.start(), Some(from));
    assert_eq!(path.end(), Some(to));
    assert_eq!(path.len() % 2, 1, "paths have an odd number of nodes");

    for (index, node) in path.nodes().iter().enumerate() {
        assert_eq!(node.is_person(), index % 2 == 0, "kinds alternate");
    }

    let distinct: FxHashSet<Node> = path.nodes().iter().copied().collect();
    assert_eq!(distinct.len(), path.len(), "no node repeats");

    for link in path.links() {
        assert!(graph.movies_of(link.person).contains(&link.movie));
        assert!(graph.people_in(link.movie).contains(&link.partner));
    }
}

#[test]
fn test_every_path_is_alternating_simple_and_anchored() {
    let graph = festival_graph();
    let config = PathfindingConfig::new(5).unwrap();

    for (from, to) in all_pairs() {
        let (paths, _, _) = find_shortest_paths(from, to, &graph, &config);
        for path in &paths {
            assert_well_formed(path, from, to, &graph);
        }
    }
}

#[test]
fn test_paths_share_the_shortest_length() {
    let graph = festival_graph();
    let config = PathfindingConfig::new(5).unwrap();

    for (from, to) in all_pairs() {
        let (paths, _, _) = find_shortest_paths(from, to, &graph, &config);
        let distance = shortest_distance(from, to, &graph);

        match distance {
            Some(length) => {
                assert!(!paths.is_empty(), "{from} -> {to} should connect");
                assert!(paths.len() <= config.limit);
                assert!(paths.iter().all(|path| path.len() == length));
            }
            None => assert!(paths.is_empty()),
        }
    }
}

#[test]
fn test_paths_are_distinct() {
    let graph = festival_graph();
    let config = PathfindingConfig::new(5).unwrap();

    for (from, to) in all_pairs() {
        let (paths, _, _) = find_shortest_paths(from, to, &graph, &config);
        let unique: FxHashSet<&CollaborationPath> = paths.iter().collect();
        assert_eq!(unique.len(), paths.len());
    }
}

#[test]
fn test_row_order_does_not_change_results() {
    let forward = festival_graph();
    let mut reversed_rows = festival_rows();
    reversed_rows.reverse();
    let reversed = CollaborationGraph::build(reversed_rows);
    let config = PathfindingConfig::new(3).unwrap();

    for (from, to) in all_pairs() {
        let (expected, _, _) = find_shortest_paths(from, to, &forward, &config);
        let (actual, _, _) = find_shortest_paths(from, to, &reversed, &config);
        assert_eq!(expected, actual, "{from} -> {to}");
    }
}

#[test]
fn test_repeated_queries_are_identical() {
    let graph = diamond_graph();
    let config = PathfindingConfig::new(2).unwrap();

    let (first, _, _) = find_shortest_paths(ALICE, CAROL, &graph, &config);
    let (second, _, _) = find_shortest_paths(ALICE, CAROL, &graph, &config);

    assert_eq!(first, second);
}

#[test]
fn test_reverse_direction_finds_same_length() {
    let graph = festival_graph();
    let config = PathfindingConfig::default();

    for (from, to) in all_pairs() {
        let (there, _, _) = find_shortest_paths(from, to, &graph, &config);
        let (back, _, _) = find_shortest_paths(to, from, &graph, &config);
        assert_eq!(
            there.first().map(CollaborationPath::len),
            back.first().map(CollaborationPath::len)
        );
    }
}
