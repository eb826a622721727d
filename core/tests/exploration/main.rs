#[path = "../fixtures/mod.rs"]
mod fixtures;

use filmpath_core::{
    CollaborationGraph, Role, collaborators, credited_people, explore_bfs, shared_filmography,
};
use fixtures::*;

#[test]
fn test_collaborators_rank_by_shared_movies() {
    let rows = vec![
        actor(1, "Alpha", 2000, 1, "Pia"),
        actor(1, "Alpha", 2000, 2, "Quin"),
        actor(1, "Alpha", 2000, 3, "Ravi"),
        actor(2, "Beta", 2001, 1, "Pia"),
        director(2, "Beta", 2001, 3, "Ravi"),
    ];
    let graph = CollaborationGraph::build(rows);

    let ranked = collaborators(1, &graph);

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].person, 3);
    assert_eq!(ranked[0].shared_movies, 2);
    assert_eq!(ranked[1].person, 2);
    assert_eq!(ranked[1].shared_movies, 1);
}

#[test]
fn test_collaborators_ties_break_on_name() {
    let graph = festival_graph();

    let ranked: Vec<i64> = collaborators(10, &graph)
        .into_iter()
        .map(|collaborator| collaborator.person)
        .collect();

    // Ivo Marsh before Lena Ortiz
    assert_eq!(ranked, vec![11, 12]);
}

#[test]
fn test_collaborators_of_loner_and_unknown() {
    let graph = CollaborationGraph::build(diamond_with_loner_rows());

    assert!(collaborators(ERIN, &graph).is_empty());
    assert!(collaborators(999, &graph).is_empty());
}

#[test]
fn test_explore_stops_at_budget() {
    let graph = festival_graph();

    let result = explore_bfs(10, 4, 10, &graph);

    assert_eq!(result.total_discovered(), 4);
    assert_eq!(result.layer_of(10), Some(0));
    assert_eq!(result.layer_of(11), Some(1));
    assert_eq!(result.layer_of(12), Some(1));
    assert_eq!(result.layer_of(16), Some(2));
    assert_eq!(result.layer_of(15), None);
}

#[test]
fn test_explore_follows_strongest_relations_only() {
    let graph = festival_graph();

    let result = explore_bfs(10, 10, 1, &graph);

    let mut discovered: Vec<i64> = result.discovered_people.keys().copied().collect();
    discovered.sort_unstable();
    assert_eq!(discovered, vec![10, 11, 12, 14]);
    assert_eq!(result.layer_of(14), Some(3));
}

#[test]
fn test_explore_connections_stay_inside_discovered_set() {
    let graph = festival_graph();

    let result = explore_bfs(10, 5, 10, &graph);

    for (person, links) in &result.connections {
        assert!(result.discovered_people.contains_key(person));
        for link in links {
            assert!(result.discovered_people.contains_key(&link.person));
        }
    }
    assert!(result.stats.people_visited >= 1);
}

#[test]
fn test_explore_never_crosses_components() {
    let graph = festival_graph();

    let result = explore_bfs(17, 100, 10, &graph);

    assert_eq!(result.total_discovered(), 2);
    assert_eq!(result.layer_of(18), Some(1));
}

#[test]
fn test_explore_unknown_or_zero_budget() {
    let graph = festival_graph();

    assert_eq!(explore_bfs(999, 10, 10, &graph).total_discovered(), 0);
    assert_eq!(explore_bfs(10, 0, 10, &graph).total_discovered(), 0);
}

const TOMAS: i64 = 13;
const IVO: i64 = 11;
const LENA: i64 = 12;
const ADA: i64 = 14;
const SOL: i64 = 15;
const MIRA: i64 = 16;

#[test]
fn test_filmography_of_director_newest_first() {
    let graph = festival_graph();

    assert_eq!(shared_filmography(Some(TOMAS), &[], &graph), vec![5, 2]);
}

#[test]
fn test_filmography_requires_every_actor() {
    let graph = festival_graph();

    assert_eq!(shared_filmography(Some(TOMAS), &[MIRA], &graph), vec![5]);
    assert_eq!(shared_filmography(Some(TOMAS), &[MIRA, LENA], &graph), Vec::<i64>::new());
    assert_eq!(shared_filmography(None, &[SOL, MIRA], &graph), vec![4]);
    assert_eq!(shared_filmography(None, &[IVO], &graph), vec![5, 1]);
    assert_eq!(shared_filmography(None, &[IVO, IVO], &graph), vec![5, 1]);
}

#[test]
fn test_filmography_checks_the_credited_role() {
    let graph = festival_graph();

    // Ivo only ever acts; Ada both directs and acts in Night Ferry
    assert!(shared_filmography(Some(IVO), &[], &graph).is_empty());
    assert_eq!(shared_filmography(Some(ADA), &[ADA], &graph), vec![3]);
    assert_eq!(shared_filmography(None, &[ADA], &graph), vec![3, 2]);
    assert!(shared_filmography(None, &[TOMAS], &graph).is_empty());
}

#[test]
fn test_filmography_empty_selection_or_unknown_people() {
    let graph = festival_graph();

    assert!(shared_filmography(None, &[], &graph).is_empty());
    assert!(shared_filmography(Some(999), &[], &graph).is_empty());
    assert!(shared_filmography(None, &[IVO, 999], &graph).is_empty());
}

#[test]
fn test_credited_people_by_role() {
    let graph = festival_graph();
    let movies = shared_filmography(Some(TOMAS), &[], &graph);

    assert_eq!(
        credited_people(&movies, Role::Actor, &graph),
        vec![ADA, IVO, LENA, MIRA]
    );
    assert_eq!(credited_people(&movies, Role::Director, &graph), vec![TOMAS]);
    assert!(credited_people(&[], Role::Actor, &graph).is_empty());
}
