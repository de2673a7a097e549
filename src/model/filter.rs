//! Search filters and find options
//!
//! Only four keys may be searched on: `name`, `awardsWon`, `isTouring` and
//! `genre`. Each value is parsed to the field's type before it reaches a
//! store, so a query string can never smuggle operators or unknown fields
//! into the find.

use std::collections::BTreeSet;

use crate::error::{ArtistError, Result};

use super::artist::parse_bool;
use super::{Artist, Genre};

// =============================================================================
// Filter
// =============================================================================

/// Conjunction of field predicates; an empty filter matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistFilter {
    /// Exact name match
    pub name: Option<String>,

    /// Exact awards count
    pub awards_won: Option<u32>,

    /// Touring flag; only documents with the flag set to this value match
    pub is_touring: Option<bool>,

    /// Every listed genre must appear in the artist's genres
    pub genres: BTreeSet<Genre>,
}

impl ArtistFilter {
    /// Filter that matches every document
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse raw query-string pairs
    ///
    /// Repeating a key other than `genre` is rejected, as is any key outside
    /// the allow-list.
    pub fn from_query_pairs(pairs: Vec<(String, String)>) -> Result<Self> {
        let mut filter = ArtistFilter::default();

        for (key, value) in pairs {
            match key.as_str() {
                "name" => {
                    if filter.name.replace(value).is_some() {
                        return Err(repeated(&key));
                    }
                }
                "awardsWon" => {
                    let awards = value.parse::<u32>().map_err(|_| {
                        ArtistError::InvalidFilter(format!(
                            "awardsWon: '{}' is not a non-negative integer",
                            value
                        ))
                    })?;
                    if filter.awards_won.replace(awards).is_some() {
                        return Err(repeated(&key));
                    }
                }
                "isTouring" => {
                    let touring = parse_bool(&key, &value)
                        .map_err(|e| ArtistError::InvalidFilter(inner_message(e)))?;
                    if filter.is_touring.replace(touring).is_some() {
                        return Err(repeated(&key));
                    }
                }
                "genre" | "genre[]" => {
                    let genre = value
                        .parse::<Genre>()
                        .map_err(|e| ArtistError::InvalidFilter(inner_message(e)))?;
                    filter.genres.insert(genre);
                }
                _ => {
                    return Err(ArtistError::InvalidFilter(format!(
                        "'{}' is not a searchable field (use name, awardsWon, isTouring, genre)",
                        key
                    )));
                }
            }
        }

        Ok(filter)
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn awards_won(mut self, awards: u32) -> Self {
        self.awards_won = Some(awards);
        self
    }

    pub fn touring(mut self, touring: bool) -> Self {
        self.is_touring = Some(touring);
        self
    }

    pub fn genre(mut self, genre: Genre) -> Self {
        self.genres.insert(genre);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.awards_won.is_none()
            && self.is_touring.is_none()
            && self.genres.is_empty()
    }

    /// Check one document against every predicate
    pub fn matches(&self, artist: &Artist) -> bool {
        if let Some(name) = &self.name {
            if &artist.name != name {
                return false;
            }
        }
        if let Some(awards) = self.awards_won {
            if artist.awards_won != awards {
                return false;
            }
        }
        if let Some(touring) = self.is_touring {
            if artist.is_touring != Some(touring) {
                return false;
            }
        }
        self.genres.iter().all(|genre| artist.genre.contains(genre))
    }
}

fn repeated(key: &str) -> ArtistError {
    ArtistError::InvalidFilter(format!("'{}' may only be given once", key))
}

fn inner_message(err: ArtistError) -> String {
    match err {
        ArtistError::Validation(msg) => msg,
        other => other.to_string(),
    }
}

// =============================================================================
// Find Options
// =============================================================================

/// Result ordering for a find
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Creation order (identifier order)
    #[default]
    Natural,

    /// Most awards first; ties keep creation order
    AwardsDesc,
}

/// Sort and limit applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FindOptions {
    pub sort: SortOrder,
    pub limit: Option<usize>,
}

impl FindOptions {
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Order and truncate matches that arrive in creation order
    pub fn apply(&self, mut artists: Vec<Artist>) -> Vec<Artist> {
        if self.sort == SortOrder::AwardsDesc {
            // stable sort keeps creation order among ties
            artists.sort_by(|a, b| b.awards_won.cmp(&a.awards_won));
        }
        if let Some(limit) = self.limit {
            artists.truncate(limit);
        }
        artists
    }
}
