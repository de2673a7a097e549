//! Sled-backed document store
//!
//! Documents are JSON values in the `artists` tree, keyed by the 16 id bytes.
//! The `artist_names` tree maps each name to the id that owns it. Every write
//! that touches both trees runs in a single sled transaction.

use std::path::Path;

use async_trait::async_trait;
use sled::transaction::{ConflictableTransactionError, ConflictableTransactionResult, TransactionError};
use sled::{Db, Transactional, Tree};

use crate::error::{ArtistError, Result};
use crate::model::{
    Artist, ArtistFilter, ArtistId, ArtistUpdate, FindOptions, IdGenerator, NewArtist,
};

use super::ArtistStore;

/// Persistent store for `sled://` connection strings
pub struct SledStore {
    db: Db,

    /// id bytes -> JSON document
    artists: Tree,

    /// name bytes -> id bytes
    names: Tree,

    ids: IdGenerator,
}

impl SledStore {
    // =========================================================================
    // Internal Tree Names
    // =========================================================================
    const ARTISTS_TREE: &'static str = "artists";
    const NAMES_TREE: &'static str = "artist_names";

    /// Open or create a database directory
    pub fn open(path: &Path) -> Result<Self> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// Database that lives in a temp directory and is removed on drop
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    fn from_db(db: Db) -> Result<Self> {
        let artists = db.open_tree(Self::ARTISTS_TREE)?;
        let names = db.open_tree(Self::NAMES_TREE)?;

        tracing::debug!("Sled store ready with {} artists", artists.len());

        Ok(Self {
            db,
            artists,
            names,
            ids: IdGenerator::new(),
        })
    }
}

#[async_trait]
impl ArtistStore for SledStore {
    async fn insert(&self, fields: NewArtist) -> Result<Artist> {
        let artist = Artist::new(self.ids.next_id()?, fields);
        let key = artist.id.to_bytes();
        let doc = serde_json::to_vec(&artist)?;

        (&self.artists, &self.names)
            .transaction(|(artists, names)| -> ConflictableTransactionResult<(), ArtistError> {
                if names.get(artist.name.as_bytes())?.is_some() {
                    return abort(ArtistError::DuplicateName(artist.name.clone()));
                }
                names.insert(artist.name.as_bytes(), &key[..])?;
                artists.insert(&key[..], doc.as_slice())?;
                Ok(())
            })
            .map_err(flatten)?;

        tracing::debug!(id = %artist.id, name = %artist.name, "Inserted artist");
        Ok(artist)
    }

    async fn find(&self, filter: &ArtistFilter, options: &FindOptions) -> Result<Vec<Artist>> {
        let mut matches = Vec::new();

        for item in self.artists.iter() {
            let (_, doc) = item?;
            let artist = decode(&doc)?;
            if filter.matches(&artist) {
                matches.push(artist);
            }
        }

        Ok(options.apply(matches))
    }

    async fn find_by_id(&self, id: ArtistId) -> Result<Option<Artist>> {
        match self.artists.get(id.to_bytes())? {
            Some(doc) => Ok(Some(decode(&doc)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, id: ArtistId, update: ArtistUpdate) -> Result<Option<Artist>> {
        let key = id.to_bytes();

        let updated = (&self.artists, &self.names)
            .transaction(|(artists, names)| -> ConflictableTransactionResult<Option<Artist>, ArtistError> {
                let Some(doc) = artists.get(&key[..])? else {
                    return Ok(None);
                };
                let current = decode(&doc).map_err(ConflictableTransactionError::Abort)?;
                let next = update.apply(&current);

                if next.name != current.name {
                    if let Some(owner) = names.get(next.name.as_bytes())? {
                        let owner: &[u8] = &owner;
                        if owner != &key[..] {
                            return abort(ArtistError::DuplicateName(next.name.clone()));
                        }
                    }
                    names.remove(current.name.as_bytes())?;
                    names.insert(next.name.as_bytes(), &key[..])?;
                }

                let encoded = serde_json::to_vec(&next)
                    .map_err(|e| ConflictableTransactionError::Abort(ArtistError::from(e)))?;
                artists.insert(&key[..], encoded)?;
                Ok(Some(next))
            })
            .map_err(flatten)?;

        if updated.is_some() {
            tracing::debug!(id = %id, "Updated artist");
        }
        Ok(updated)
    }

    async fn delete(&self, id: ArtistId) -> Result<bool> {
        let key = id.to_bytes();

        let removed = (&self.artists, &self.names)
            .transaction(|(artists, names)| -> ConflictableTransactionResult<bool, ArtistError> {
                let Some(doc) = artists.remove(&key[..])? else {
                    return Ok(false);
                };
                let current = decode(&doc).map_err(ConflictableTransactionError::Abort)?;
                names.remove(current.name.as_bytes())?;
                Ok(true)
            })
            .map_err(flatten)?;

        if removed {
            tracing::debug!(id = %id, "Deleted artist");
        }
        Ok(removed)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.artists.len())
    }

    async fn close(&self) -> Result<()> {
        let bytes = self.db.flush()?;
        tracing::debug!("Flushed {} bytes to disk", bytes);
        Ok(())
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn decode(doc: &[u8]) -> Result<Artist> {
    Ok(serde_json::from_slice(doc)?)
}

fn abort<T>(err: ArtistError) -> ConflictableTransactionResult<T, ArtistError> {
    Err(ConflictableTransactionError::Abort(err))
}

fn flatten(err: TransactionError<ArtistError>) -> ArtistError {
    match err {
        TransactionError::Abort(err) => err,
        TransactionError::Storage(err) => err.into(),
    }
}
