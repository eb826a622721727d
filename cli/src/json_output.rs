use crate::args::PathArgs;
use crate::search::SearchResult;
use filmpath_core::{
    CollaborationGraph, CollaborationPath, Node, build_diagram, describe_connection, movie_label,
    path_label,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub from: String,
    pub to: String,
    pub options: JsonOptions,
}

#[derive(Serialize, Deserialize)]
pub struct JsonOptions {
    pub limit: usize,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    pub paths: Vec<JsonPath>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonPath {
    pub label: String,
    pub degrees_of_separation: usize,
    pub nodes: Vec<JsonNode>,
    pub steps: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dot: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonNode {
    pub kind: String,
    pub id: i64,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: u64,
    pub nodes_explored: usize,
    pub stopped_early: bool,
}

fn json_node(node: Node, graph: &CollaborationGraph) -> JsonNode {
    match node {
        Node::Person(id) => JsonNode {
            kind: "person".to_string(),
            id,
            name: graph
                .person(id)
                .map(|person| person.label())
                .unwrap_or_default(),
        },
        Node::Movie(id) => JsonNode {
            kind: "movie".to_string(),
            id,
            name: movie_label(graph.movie(id)),
        },
    }
}

fn json_path(
    index: usize,
    path: &CollaborationPath,
    args: &PathArgs,
    graph: &CollaborationGraph,
) -> JsonPath {
    JsonPath {
        label: path_label(index),
        degrees_of_separation: path.degrees_of_separation(),
        nodes: path
            .nodes()
            .iter()
            .map(|&node| json_node(node, graph))
            .collect(),
        steps: describe_connection(path, graph)
            .iter()
            .map(ToString::to_string)
            .collect(),
        dot: args.dot.then(|| build_diagram(path, graph).to_dot()),
    }
}

pub fn create_json_output(result: &SearchResult, graph: &CollaborationGraph) -> JsonOutput {
    let args = &result.display_options;

    JsonOutput {
        query: JsonQuery {
            from: result.from_name.clone(),
            to: result.to_name.clone(),
            options: JsonOptions { limit: args.limit },
        },
        result: JsonResult {
            found: !result.paths.is_empty(),
            paths: result
                .paths
                .iter()
                .enumerate()
                .map(|(index, path)| json_path(index, path, args, graph))
                .collect(),
        },
        stats: JsonStats {
            search_time_ms: (result.search_duration * 1000.0) as u64,
            nodes_explored: result.nodes_expanded,
            stopped_early: result.stopped_early,
        },
    }
}

pub fn print_json_output(json_output: &JsonOutput) {
    match serde_json::to_string_pretty(json_output) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}
