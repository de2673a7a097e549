//! Model Module
//!
//! The Artist schema and everything that describes a query over it.
//!
//! ## Responsibilities
//! - Define the stored document shape and its JSON field names
//! - Validate client payloads (required name, non-negative awards, genre set)
//! - Issue identifiers
//! - Describe searches as typed, allow-listed filters
//!
//! ## JSON Shape
//! ```text
//! {
//!   "_id":       "01J9Z3W8Q6V6X9G2E7T0B1C4DA",
//!   "name":      "DJ X",
//!   "awardsWon": 5,
//!   "isTouring": true,
//!   "genre":     ["techno"]
//! }
//! ```

mod artist;
mod filter;
mod genre;
mod id;

pub use artist::{Artist, ArtistInput, ArtistSummary, ArtistUpdate, NewArtist};
pub use filter::{ArtistFilter, FindOptions, SortOrder};
pub use genre::Genre;
pub use id::{ArtistId, IdGenerator};
