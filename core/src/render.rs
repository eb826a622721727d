use crate::catalogue::{Movie, MovieId, PersonId};
use crate::graph::CollaborationGraph;
use crate::pathfinding::{CollaborationPath, Node};
use serde::Serialize;
use std::fmt;

const UNKNOWN_NAME: &str = "Unknown";
const FALLBACK_ROLE: &str = "Contributor";

const START_FILL: &str = "#d1e7dd";
const END_FILL: &str = "#cfe2ff";
const MIDDLE_FILL: &str = "#f8f9fa";
const MOVIE_FILL: &str = "#fde2b2";

/// `Title (Year)`, or just the title when the year is unknown.
pub fn movie_label(movie: Option<&Movie>) -> String {
    match movie {
        Some(Movie {
            title,
            year: Some(year),
            ..
        }) => format!("{title} ({year})"),
        Some(movie) => movie.title.clone(),
        None => crate::catalogue::UNTITLED_MOVIE.to_string(),
    }
}

/// Tab title for the `index`-th path of a result, shortest first.
pub fn path_label(index: usize) -> String {
    if index == 0 {
        "Shortest path".to_string()
    } else {
        format!("Alternative path {}", index + 1)
    }
}

fn person_name(person: PersonId, graph: &CollaborationGraph) -> String {
    graph
        .person(person)
        .map_or_else(|| UNKNOWN_NAME.to_string(), |p| p.name.clone())
}

/// One `person → movie → partner` hop, ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionStep {
    pub person: String,
    pub person_roles: Vec<String>,
    pub person_character: Option<String>,
    pub movie: String,
    pub partner: String,
    pub partner_roles: Vec<String>,
    pub partner_character: Option<String>,
}

fn credit_text(roles: &[String], character: Option<&str>) -> String {
    let roles = roles.join(", ");
    match character {
        Some(character) => format!("{roles} as {character}"),
        None => roles,
    }
}

impl ConnectionStep {
    pub fn person_credit(&self) -> String {
        credit_text(&self.person_roles, self.person_character.as_deref())
    }

    pub fn partner_credit(&self) -> String {
        credit_text(&self.partner_roles, self.partner_character.as_deref())
    }
}

impl fmt::Display for ConnectionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}** ({}) → *{}* → **{}** ({})",
            self.person,
            self.person_credit(),
            self.movie,
            self.partner,
            self.partner_credit()
        )
    }
}

fn edge_roles(person: PersonId, movie: MovieId, graph: &CollaborationGraph) -> Vec<String> {
    match graph.edge_roles(person, movie) {
        Some(roles) => roles.iter().map(|role| role.to_string()).collect(),
        None => vec![FALLBACK_ROLE.to_string()],
    }
}

fn edge_character(person: PersonId, movie: MovieId, graph: &CollaborationGraph) -> Option<String> {
    graph
        .edge_credit(person, movie)
        .and_then(|credit| credit.character.clone())
}

/// Human-readable hops along `path`, one per shared movie.
pub fn describe_connection(
    path: &CollaborationPath,
    graph: &CollaborationGraph,
) -> Vec<ConnectionStep> {
    path.links()
        .into_iter()
        .map(|link| ConnectionStep {
            person: person_name(link.person, graph),
            person_roles: edge_roles(link.person, link.movie, graph),
            person_character: edge_character(link.person, link.movie, graph),
            movie: movie_label(graph.movie(link.movie)),
            partner: person_name(link.partner, graph),
            partner_roles: edge_roles(link.partner, link.movie, graph),
            partner_character: edge_character(link.partner, link.movie, graph),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Ellipse,
    Box,
}

impl NodeShape {
    fn as_dot(&self) -> &'static str {
        match self {
            NodeShape::Ellipse => "ellipse",
            NodeShape::Box => "box",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramNode {
    /// Graphviz identifier, `p<id>` for people and `m<id>` for movies
    pub key: String,
    pub label: String,
    pub shape: NodeShape,
    pub fill: &'static str,
}

/// Nodes and edges of one path, with edges only between consecutive nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathDiagram {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<(String, String)>,
}

fn node_key(node: Node) -> String {
    match node {
        Node::Person(id) => format!("p{id}"),
        Node::Movie(id) => format!("m{id}"),
    }
}

fn escape_label(label: &str) -> String {
    label
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

pub fn build_diagram(path: &CollaborationPath, graph: &CollaborationGraph) -> PathDiagram {
    let last_index = path.len().saturating_sub(1);

    let nodes = path
        .nodes()
        .iter()
        .enumerate()
        .map(|(index, &node)| match node {
            Node::Person(id) => {
                let label = match graph.person(id) {
                    Some(person) if !person.roles.is_empty() => {
                        format!("{}\n({})", person.name, person.roles_text(", "))
                    }
                    Some(person) => person.name.clone(),
                    None => UNKNOWN_NAME.to_string(),
                };
                let fill = if index == 0 {
                    START_FILL
                } else if index == last_index {
                    END_FILL
                } else {
                    MIDDLE_FILL
                };
                DiagramNode {
                    key: node_key(node),
                    label,
                    shape: NodeShape::Ellipse,
                    fill,
                }
            }
            Node::Movie(id) => {
                let label = match graph.movie(id) {
                    Some(Movie {
                        title,
                        year: Some(year),
                        ..
                    }) => format!("{title}\n({year})"),
                    other => movie_label(other),
                };
                DiagramNode {
                    key: node_key(node),
                    label,
                    shape: NodeShape::Box,
                    fill: MOVIE_FILL,
                }
            }
        })
        .collect();

    let edges = path
        .nodes()
        .windows(2)
        .map(|pair| (node_key(pair[0]), node_key(pair[1])))
        .collect();

    PathDiagram { nodes, edges }
}

impl PathDiagram {
    /// Undirected Graphviz source, laid out left to right
    pub fn to_dot(&self) -> String {
        let mut lines = vec![
            "graph G {".to_string(),
            "  rankdir=LR;".to_string(),
            "  overlap=false;".to_string(),
            "  splines=true;".to_string(),
            "  fontname=\"Helvetica\";".to_string(),
        ];

        for node in &self.nodes {
            lines.push(format!(
                "  {} [shape={}, style=filled, fillcolor=\"{}\", label=\"{}\"];",
                node.key,
                node.shape.as_dot(),
                node.fill,
                escape_label(&node.label)
            ));
        }

        for (from, to) in &self.edges {
            lines.push(format!("  {from} -- {to};"));
        }

        lines.push("}".to_string());
        lines.join("\n")
    }
}

impl fmt::Display for PathDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_dot())
    }
}
