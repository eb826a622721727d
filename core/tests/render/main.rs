#[path = "../fixtures/mod.rs"]
mod fixtures;

use filmpath_core::render::NodeShape;
use filmpath_core::{
    AssociationRow, CollaborationGraph, PathfindingConfig, build_diagram, describe_connection,
    find_shortest_paths, movie_label, path_label,
};
use fixtures::*;

fn first_path(
    from: i64,
    to: i64,
    graph: &CollaborationGraph,
) -> filmpath_core::CollaborationPath {
    let (paths, _, _) = find_shortest_paths(from, to, graph, &PathfindingConfig::default());
    paths.into_iter().next().unwrap()
}

#[test]
fn test_steps_follow_the_path() {
    let graph = diamond_graph();
    let path = first_path(ALICE, CAROL, &graph);

    let steps = describe_connection(&path, &graph);

    assert_eq!(steps.len(), 2);
    assert_eq!(
        steps[0].to_string(),
        "**Alice** (Actor) → *First Light (2001)* → **Bob** (Actor)"
    );
    assert_eq!(
        steps[1].to_string(),
        "**Bob** (Director) → *Second Wind (2003)* → **Carol** (Actor)"
    );
}

#[test]
fn test_step_roles_are_per_movie() {
    let graph = festival_graph();
    // Ada Brook both directs and acts in Night Ferry
    let path = first_path(14, 15, &graph);

    let steps = describe_connection(&path, &graph);

    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].person_roles, vec!["Actor", "Director"]);
    assert_eq!(steps[0].partner_roles, vec!["Actor"]);
}

#[test]
fn test_step_includes_character() {
    let graph = festival_graph();
    let path = first_path(10, 11, &graph);

    let steps = describe_connection(&path, &graph);

    assert_eq!(steps[0].partner_character.as_deref(), Some("Captain Reyes"));
    assert_eq!(steps[0].partner_credit(), "Actor as Captain Reyes");
    assert_eq!(steps[0].person_credit(), "Director");
}

#[test]
fn test_missing_role_falls_back_to_contributor() {
    let rows = vec![
        AssociationRow::new(7, "Untold", None, 1, "Kai", ""),
        AssociationRow::new(7, "Untold", None, 2, "Lio", "Actor"),
    ];
    let graph = CollaborationGraph::build(rows);
    let path = first_path(1, 2, &graph);

    let steps = describe_connection(&path, &graph);

    assert_eq!(steps[0].person_roles, vec!["Contributor"]);
    assert_eq!(steps[0].movie, "Untold");
    assert_eq!(
        steps[0].to_string(),
        "**Kai** (Contributor) → *Untold* → **Lio** (Actor)"
    );
}

#[test]
fn test_movie_label_without_year() {
    let graph = CollaborationGraph::build(vec![AssociationRow::new(
        3, "Loose Ends", None, 1, "Kai", "Actor",
    )]);

    assert_eq!(movie_label(graph.movie(3)), "Loose Ends");
    assert_eq!(movie_label(None), "Untitled");
}

#[test]
fn test_diagram_nodes_and_edges() {
    let graph = diamond_graph();
    let path = first_path(ALICE, CAROL, &graph);

    let diagram = build_diagram(&path, &graph);

    let keys: Vec<&str> = diagram.nodes.iter().map(|node| node.key.as_str()).collect();
    assert_eq!(keys, vec!["p1", "m101", "p2", "m102", "p3"]);
    assert_eq!(diagram.edges.len(), 4);
    assert_eq!(diagram.edges[0], ("p1".to_string(), "m101".to_string()));
    assert_eq!(diagram.edges[3], ("m102".to_string(), "p3".to_string()));

    assert_eq!(diagram.nodes[0].fill, "#d1e7dd");
    assert_eq!(diagram.nodes[2].fill, "#f8f9fa");
    assert_eq!(diagram.nodes[4].fill, "#cfe2ff");
    assert_eq!(diagram.nodes[1].fill, "#fde2b2");
    assert_eq!(diagram.nodes[1].shape, NodeShape::Box);
    assert_eq!(diagram.nodes[0].shape, NodeShape::Ellipse);
}

#[test]
fn test_diagram_labels_use_aggregate_roles() {
    let graph = diamond_graph();
    let path = first_path(ALICE, CAROL, &graph);

    let diagram = build_diagram(&path, &graph);

    assert_eq!(diagram.nodes[0].label, "Alice\n(Actor)");
    assert_eq!(diagram.nodes[1].label, "First Light\n(2001)");
    assert_eq!(diagram.nodes[2].label, "Bob\n(Actor, Director)");
}

#[test]
fn test_dot_output_is_undirected_left_to_right() {
    let graph = diamond_graph();
    let path = first_path(ALICE, BOB, &graph);

    let dot = build_diagram(&path, &graph).to_dot();

    assert!(dot.starts_with("graph G {"));
    assert!(dot.contains("rankdir=LR;"));
    assert!(dot.contains(
        "  p1 [shape=ellipse, style=filled, fillcolor=\"#d1e7dd\", label=\"Alice\\n(Actor)\"];"
    ));
    assert!(dot.contains("  m101 [shape=box"));
    assert!(dot.contains("  p1 -- m101;"));
    assert!(dot.contains("  m101 -- p2;"));
    assert!(!dot.contains("->"));
    assert!(dot.ends_with('}'));
}

#[test]
fn test_dot_escapes_quotes() {
    let graph = CollaborationGraph::build(vec![
        AssociationRow::new(9, "The \"Big\" One", Some(1990), 1, "Kai", "Actor"),
        AssociationRow::new(9, "The \"Big\" One", Some(1990), 2, "Lio", "Actor"),
    ]);
    let path = first_path(1, 2, &graph);

    let dot = build_diagram(&path, &graph).to_dot();

    assert!(dot.contains(r#"label="The \"Big\" One\n(1990)""#));
}

#[test]
fn test_path_labels() {
    assert_eq!(path_label(0), "Shortest path");
    assert_eq!(path_label(1), "Alternative path 2");
    assert_eq!(path_label(2), "Alternative path 3");
}
