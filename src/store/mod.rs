//! Store Module
//!
//! Data-access handle for Artist documents.
//!
//! ## Responsibilities
//! - Insert documents and assign identifiers
//! - Enforce name uniqueness at write time
//! - Filtered finds with sort and limit
//! - Point lookup, update and delete by identifier
//! - Flush durable state on close
//!
//! ## Backends
//! ```text
//! ┌──────────────────────┐      ┌────────────────────────────────────┐
//! │   InMemoryStore      │      │   SledStore                        │
//! │  RwLock<Collection>  │      │  tree "artists"      id   -> JSON  │
//! │  docs + name index   │      │  tree "artist_names" name -> id    │
//! └──────────────────────┘      └────────────────────────────────────┘
//! ```
//!
//! Both keep documents keyed by id, so natural iteration order is creation
//! order.

mod memory;
mod sled_store;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{Artist, ArtistFilter, ArtistId, ArtistUpdate, FindOptions, NewArtist};

pub use self::memory::InMemoryStore;
pub use self::sled_store::SledStore;

/// Async data-access handle shared by every request handler
///
/// Implementations are responsible for serializing writes: a failed write
/// (for example a duplicate name) must leave no partial state behind.
#[async_trait]
pub trait ArtistStore: Send + Sync {
    /// Insert a new document and return it with its assigned id
    ///
    /// # Errors
    /// `ArtistError::DuplicateName` if another document already has the name.
    async fn insert(&self, fields: NewArtist) -> Result<Artist>;

    /// All documents matching `filter`, ordered and truncated by `options`
    async fn find(&self, filter: &ArtistFilter, options: &FindOptions) -> Result<Vec<Artist>>;

    /// Point lookup; `None` if no document has this id
    async fn find_by_id(&self, id: ArtistId) -> Result<Option<Artist>>;

    /// Apply `update` and return the post-update document
    ///
    /// Returns `None` (and writes nothing) if no document has this id.
    ///
    /// # Errors
    /// `ArtistError::DuplicateName` if a rename collides with another document.
    async fn update(&self, id: ArtistId, update: ArtistUpdate) -> Result<Option<Artist>>;

    /// Remove a document; returns whether one existed
    async fn delete(&self, id: ArtistId) -> Result<bool>;

    /// Number of stored documents
    async fn count(&self) -> Result<usize>;

    /// Flush anything buffered; called once on shutdown
    async fn close(&self) -> Result<()>;
}

/// Open the backend named by a connection string
pub fn open_store(config: &StoreConfig) -> Result<Arc<dyn ArtistStore>> {
    match config {
        StoreConfig::InMemory => {
            tracing::info!("Using in-memory artist store");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StoreConfig::Sled { path } => {
            tracing::info!("Opening sled artist store at {}", path.display());
            Ok(Arc::new(SledStore::open(path)?))
        }
    }
}
