//! In-memory store
//!
//! BTreeMap-based collection with a name index, behind one RwLock.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{ArtistError, Result};
use crate::model::{
    Artist, ArtistFilter, ArtistId, ArtistUpdate, FindOptions, IdGenerator, NewArtist,
};

use super::ArtistStore;

/// Documents plus the unique name index
#[derive(Default)]
struct Collection {
    /// Ordered by id, i.e. creation order
    docs: BTreeMap<ArtistId, Artist>,

    names: HashMap<String, ArtistId>,
}

/// Volatile store for tests and `memory://`
///
/// ## Concurrency:
/// - Reads take the shared lock
/// - Writes take the exclusive lock for the whole check-then-write, so the
///   name index can never disagree with the documents
#[derive(Default)]
pub struct InMemoryStore {
    collection: RwLock<Collection>,
    ids: IdGenerator,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ArtistStore for InMemoryStore {
    async fn insert(&self, fields: NewArtist) -> Result<Artist> {
        let mut collection = self.collection.write();

        if collection.names.contains_key(&fields.name) {
            return Err(ArtistError::DuplicateName(fields.name));
        }

        let artist = Artist::new(self.ids.next_id()?, fields);
        collection.names.insert(artist.name.clone(), artist.id);
        collection.docs.insert(artist.id, artist.clone());

        tracing::debug!(id = %artist.id, name = %artist.name, "Inserted artist");
        Ok(artist)
    }

    async fn find(&self, filter: &ArtistFilter, options: &FindOptions) -> Result<Vec<Artist>> {
        let collection = self.collection.read();

        let matches = collection
            .docs
            .values()
            .filter(|artist| filter.matches(artist))
            .cloned()
            .collect();

        Ok(options.apply(matches))
    }

    async fn find_by_id(&self, id: ArtistId) -> Result<Option<Artist>> {
        Ok(self.collection.read().docs.get(&id).cloned())
    }

    async fn update(&self, id: ArtistId, update: ArtistUpdate) -> Result<Option<Artist>> {
        let mut collection = self.collection.write();

        let Some(current) = collection.docs.get(&id) else {
            return Ok(None);
        };
        let next = update.apply(current);

        if next.name != current.name {
            if let Some(owner) = collection.names.get(&next.name) {
                if *owner != id {
                    return Err(ArtistError::DuplicateName(next.name));
                }
            }
            let old_name = current.name.clone();
            collection.names.remove(&old_name);
            collection.names.insert(next.name.clone(), id);
        }

        collection.docs.insert(id, next.clone());

        tracing::debug!(id = %id, "Updated artist");
        Ok(Some(next))
    }

    async fn delete(&self, id: ArtistId) -> Result<bool> {
        let mut collection = self.collection.write();

        match collection.docs.remove(&id) {
            Some(artist) => {
                collection.names.remove(&artist.name);
                tracing::debug!(id = %id, "Deleted artist");
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.collection.read().docs.len())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
