use crate::catalogue::{MovieId, PersonId};
use serde::{Deserialize, Serialize};

/// A vertex of the bipartite collaboration graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum Node {
    Person(PersonId),
    Movie(MovieId),
}

impl Node {
    pub fn person_id(&self) -> Option<PersonId> {
        match self {
            Node::Person(id) => Some(*id),
            Node::Movie(_) => None,
        }
    }

    pub fn movie_id(&self) -> Option<MovieId> {
        match self {
            Node::Movie(id) => Some(*id),
            Node::Person(_) => None,
        }
    }

    pub fn is_person(&self) -> bool {
        matches!(self, Node::Person(_))
    }
}

/// One hop of a path: two people credited on the same movie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub person: PersonId,
    pub movie: MovieId,
    pub partner: PersonId,
}

/// Alternating `person, movie, person, …, person` sequence without repeats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CollaborationPath {
    nodes: Vec<Node>,
}

impl CollaborationPath {
    pub(crate) fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of movie hops between the two ends
    pub fn degrees_of_separation(&self) -> usize {
        self.nodes.len().saturating_sub(1) / 2
    }

    pub fn start(&self) -> Option<PersonId> {
        self.nodes.first().and_then(Node::person_id)
    }

    pub fn end(&self) -> Option<PersonId> {
        self.nodes.last().and_then(Node::person_id)
    }

    pub fn people(&self) -> Vec<PersonId> {
        self.nodes.iter().filter_map(Node::person_id).collect()
    }

    pub fn movies(&self) -> Vec<MovieId> {
        self.nodes.iter().filter_map(Node::movie_id).collect()
    }

    pub fn links(&self) -> Vec<Link> {
        self.nodes
            .windows(3)
            .step_by(2)
            .filter_map(|window| match window {
                [Node::Person(person), Node::Movie(movie), Node::Person(partner)] => Some(Link {
                    person: *person,
                    movie: *movie,
                    partner: *partner,
                }),
                _ => None,
            })
            .collect()
    }
}
