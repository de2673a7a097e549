//! Artist document and the payloads that create or change it
//!
//! Validation happens once, when an [`ArtistInput`] becomes a [`NewArtist`].
//! Everything downstream of that (stores, handlers) can rely on:
//! - `name` is present and not blank
//! - `awards_won` is non-negative (it is unsigned)
//! - every genre is one of [`Genre::ALL`]

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ArtistError, Result};

use super::{ArtistId, Genre};

// =============================================================================
// Client Payload
// =============================================================================

/// Raw fields as sent by a client, before validation
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistInput {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub awards_won: Option<i64>,

    #[serde(default)]
    pub is_touring: Option<bool>,

    /// A bare string is accepted as a one-element list
    #[serde(default, deserialize_with = "one_or_many")]
    pub genre: Option<Vec<String>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OneOrMany>::deserialize(deserializer)?.map(|value| match value {
        OneOrMany::One(genre) => vec![genre],
        OneOrMany::Many(genres) => genres,
    }))
}

impl ArtistInput {
    /// Build an input from `application/x-www-form-urlencoded` pairs
    ///
    /// `genre` may repeat (`genre=house&genre=techno`) or use the bracket
    /// form `genre[]`. Empty values count as omitted. Unknown keys are ignored.
    pub fn from_form_pairs(pairs: Vec<(String, String)>) -> Result<Self> {
        let mut input = ArtistInput::default();

        for (key, value) in pairs {
            match key.as_str() {
                "name" => input.name = Some(value),
                "awardsWon" if value.is_empty() => input.awards_won = None,
                "awardsWon" => {
                    let awards = value.trim().parse::<i64>().map_err(|_| {
                        ArtistError::Validation(format!(
                            "awardsWon: '{}' is not an integer",
                            value
                        ))
                    })?;
                    input.awards_won = Some(awards);
                }
                "isTouring" if value.is_empty() => input.is_touring = None,
                "isTouring" => input.is_touring = Some(parse_bool("isTouring", &value)?),
                "genre" | "genre[]" => input.genre.get_or_insert_with(Vec::new).push(value),
                _ => {}
            }
        }

        Ok(input)
    }

    /// Check every constraint and produce the typed field set
    pub fn validate(self) -> Result<NewArtist> {
        let name = match self.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err(ArtistError::Validation("name: is required".to_string())),
        };

        let awards_won = match self.awards_won {
            None => 0,
            Some(awards) if awards < 0 => {
                return Err(ArtistError::Validation(format!(
                    "awardsWon: must be at least 0, got {}",
                    awards
                )));
            }
            Some(awards) => u32::try_from(awards).map_err(|_| {
                ArtistError::Validation(format!("awardsWon: {} is out of range", awards))
            })?,
        };

        let genre = self
            .genre
            .unwrap_or_default()
            .iter()
            .map(|genre| genre.parse::<Genre>())
            .collect::<Result<Vec<_>>>()?;

        Ok(NewArtist {
            name,
            awards_won,
            is_touring: self.is_touring,
            genre,
        })
    }
}

/// Parse a `true`/`false` literal from a form or query value
pub(crate) fn parse_bool(field: &str, value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ArtistError::Validation(format!(
            "{}: '{}' is not a boolean",
            field, other
        ))),
    }
}

// =============================================================================
// Validated Fields
// =============================================================================

/// The four user-controlled fields, already validated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub awards_won: u32,
    pub is_touring: Option<bool>,
    pub genre: Vec<Genre>,
}

impl NewArtist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            awards_won: 0,
            is_touring: None,
            genre: Vec::new(),
        }
    }

    pub fn awards_won(mut self, awards: u32) -> Self {
        self.awards_won = awards;
        self
    }

    pub fn touring(mut self, touring: bool) -> Self {
        self.is_touring = Some(touring);
        self
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.genre.push(genre);
        self
    }
}

// =============================================================================
// Stored Document
// =============================================================================

/// An Artist document as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    #[serde(rename = "_id")]
    pub id: ArtistId,
    pub name: String,
    pub awards_won: u32,
    pub is_touring: Option<bool>,
    pub genre: Vec<Genre>,
}

impl Artist {
    pub fn new(id: ArtistId, fields: NewArtist) -> Self {
        Self {
            id,
            name: fields.name,
            awards_won: fields.awards_won,
            is_touring: fields.is_touring,
            genre: fields.genre,
        }
    }

    /// Project to the list view
    pub fn summary(&self) -> ArtistSummary {
        ArtistSummary {
            name: self.name.clone(),
            awards_won: self.awards_won,
        }
    }
}

/// Projection returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummary {
    pub name: String,
    pub awards_won: u32,
}

// =============================================================================
// Updates
// =============================================================================

/// A change applied to an existing document by id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtistUpdate {
    /// Overwrite all four fields; the id is kept
    Replace(NewArtist),

    /// Touch only `isTouring`
    SetTouring(bool),
}

impl ArtistUpdate {
    /// Produce the post-update document
    pub fn apply(&self, current: &Artist) -> Artist {
        match self {
            ArtistUpdate::Replace(fields) => Artist::new(current.id, fields.clone()),
            ArtistUpdate::SetTouring(touring) => Artist {
                is_touring: Some(*touring),
                ..current.clone()
            },
        }
    }
}
