use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{MovieError, Result};

const MOVIE_FIELDS: &[&str] = &["id", "isbn", "title", "director"];
const DIRECTOR_FIELDS: &[&str] = &["first_name", "last_name"];

/// Director metadata, owned by exactly one movie.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Director {
    pub first_name: String,
    pub last_name: String,
}

impl Director {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self { first_name: first_name.into(), last_name: last_name.into() }
    }
}

/// A movie record as held by the store and returned over the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

impl Movie {
    pub fn new(
        id: impl Into<String>,
        isbn: impl Into<String>,
        title: impl Into<String>,
        director: Option<Director>,
    ) -> Self {
        Self { id: id.into(), isbn: isbn.into(), title: title.into(), director }
    }
}

/// Request body for create and update.
///
/// Every field may be missing or `null`: strings fall back to `""` and the
/// director to `None`. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MoviePayload {
    pub id: Option<String>,
    pub isbn: String,
    pub title: String,
    pub director: Option<Director>,
}

impl MoviePayload {
    /// Decode the first JSON value in `body`; anything after it is ignored.
    ///
    /// A bare `null` yields an empty payload. Object keys match fields
    /// ignoring ASCII case, and a repeated field keeps its last value.
    /// `null` decodes a string field as `""` and the director as `None`.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value = match serde_json::Deserializer::from_slice(body).into_iter::<Value>().next() {
            Some(value) => value?,
            None => {
                let eof = <serde_json::Error as serde::de::Error>::custom("EOF while parsing a value");
                return Err(eof.into());
            }
        };
        match value {
            Value::Null => Ok(Self::default()),
            Value::Object(map) => {
                let fields = fold_fields(map, MOVIE_FIELDS);
                Ok(serde_json::from_value(Value::Object(fields))?)
            }
            other => Err(not_an_object(&other)),
        }
    }

    /// Build a record with `id` unless the payload carries its own id.
    pub fn into_movie_with_default_id(self, id: String) -> Movie {
        Movie {
            id: self.id.unwrap_or(id),
            isbn: self.isbn,
            title: self.title,
            director: self.director,
        }
    }

    /// Build a record with `id`, discarding any id in the payload.
    pub fn into_movie_with_id(self, id: impl Into<String>) -> Movie {
        Movie { id: id.into(), isbn: self.isbn, title: self.title, director: self.director }
    }
}

/// The two records the collection holds at startup.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new("1", "123456", "Movie One", Some(Director::new("Shreyas", "Narvekar"))),
        Movie::new("2", "654321", "Movie Two", Some(Director::new("Shree", "Man"))),
    ]
}

/// Rename keys to the field they match case-insensitively and drop the rest.
///
/// `serde_json` already keeps the last of two identical keys, so only keys
/// differing in case can still collide here; the later one in key order wins.
fn fold_fields(map: Map<String, Value>, fields: &[&'static str]) -> Map<String, Value> {
    let mut folded = Map::new();
    for (key, value) in map {
        let Some(field) = fields.iter().find(|f| f.eq_ignore_ascii_case(&key)) else {
            continue;
        };
        match (*field, value) {
            ("director", Value::Object(inner)) => {
                folded.insert("director".into(), Value::Object(fold_fields(inner, DIRECTOR_FIELDS)));
            }
            ("director", value) => {
                folded.insert("director".into(), value);
            }
            (_, Value::Null) => {}
            (field, value) => {
                folded.insert(field.into(), value);
            }
        }
    }
    folded
}

fn not_an_object(value: &Value) -> MovieError {
    let kind = match value {
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Null | Value::Object(_) => "value",
    };
    <serde_json::Error as serde::de::Error>::custom(format!("invalid type: {kind}, expected a movie object")).into()
}
