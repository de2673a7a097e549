//! Genre enumeration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ArtistError;

/// The closed set of genres an artist can be tagged with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    House,
    TechHouse,
    Techno,
}

impl Genre {
    pub const ALL: [Genre; 3] = [Genre::House, Genre::TechHouse, Genre::Techno];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::House => "house",
            Genre::TechHouse => "tech-house",
            Genre::Techno => "techno",
        }
    }
}

impl FromStr for Genre {
    type Err = ArtistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|genre| genre.as_str() == s)
            .ok_or_else(|| {
                ArtistError::Validation(format!(
                    "genre: '{}' is not one of house, tech-house, techno",
                    s
                ))
            })
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
