use serde::{Deserialize, Deserializer, Serialize};
use std::{collections::BTreeSet, fmt};

pub type PersonId = i64;
pub type MovieId = i64;

pub const UNKNOWN_PERSON: &str = "Unknown person";
pub const UNTITLED_MOVIE: &str = "Untitled";

/// Credit kind of a person on a movie
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    Actor,
    Director,
}

impl Role {
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "actor" => Some(Role::Actor),
            "director" => Some(Role::Director),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Actor => "Actor",
            Role::Director => "Director",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (movie, person, role) fact as it comes out of the catalogue store.
///
/// Every field is optional so that incomplete rows survive deserialization;
/// the graph builder decides what to skip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssociationRow {
    pub movie_id: Option<MovieId>,
    pub movie_title: Option<String>,
    #[serde(deserialize_with = "deserialize_year")]
    pub movie_year: Option<i32>,
    pub movie_external_id: Option<String>,
    pub person_id: Option<PersonId>,
    pub person_name: Option<String>,
    pub role: Option<String>,
    pub character: Option<String>,
}

impl AssociationRow {
    pub fn new(
        movie_id: MovieId,
        movie_title: &str,
        movie_year: Option<i32>,
        person_id: PersonId,
        person_name: &str,
        role: &str,
    ) -> Self {
        Self {
            movie_id: Some(movie_id),
            movie_title: Some(movie_title.to_string()),
            movie_year,
            movie_external_id: None,
            person_id: Some(person_id),
            person_name: Some(person_name.to_string()),
            role: Some(role.to_string()),
            character: None,
        }
    }

    pub fn with_character(mut self, character: &str) -> Self {
        self.character = Some(character.to_string());
        self
    }

    pub fn with_external_id(mut self, external_id: &str) -> Self {
        self.movie_external_id = Some(external_id.to_string());
        self
    }

    pub fn parsed_role(&self) -> Option<Role> {
        self.role.as_deref().and_then(Role::parse)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    /// Every role seen for this person across the whole catalogue
    pub roles: BTreeSet<Role>,
}

impl Person {
    pub fn roles_text(&self, separator: &str) -> String {
        self.roles
            .iter()
            .map(Role::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Name plus aggregate roles, e.g. `Greta Gerwig (Actor/Director)`
    pub fn label(&self) -> String {
        if self.roles.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.roles_text("/"))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<i32>,
    /// Only used by presentation layers to look up artwork
    pub external_id: Option<String>,
}

/// Leading four-digit year of a release date or year string.
pub fn parse_year(text: &str) -> Option<i32> {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .take(4)
        .collect();
    if digits.len() != 4 {
        return None;
    }
    digits.parse::<i64>().ok().and_then(normalize_year)
}

/// Years of zero (the collector's placeholder) or out of range are unknown.
pub fn normalize_year(year: i64) -> Option<i32> {
    if (1..=9999).contains(&year) {
        Some(year as i32)
    } else {
        None
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawYear {
    Number(i64),
    Text(String),
}

fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawYear>::deserialize(deserializer)?;
    Ok(raw.and_then(|year| match year {
        RawYear::Number(number) => normalize_year(number),
        RawYear::Text(text) => parse_year(&text),
    }))
}
