//! Artist identifiers
//!
//! Identifiers are ULIDs: 128-bit, rendered as 26 Crockford base32
//! characters, and ordered by creation time. The store issues them; clients
//! only ever echo them back in paths.

use std::fmt;
use std::str::FromStr;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use ulid::{Generator, Ulid};

use crate::error::{ArtistError, Result};

/// Server-assigned identifier of an Artist document
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(Ulid);

impl ArtistId {
    /// Size of the binary key form
    pub const BYTES: usize = 16;

    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }

    /// Big-endian key bytes; byte order matches creation order
    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        self.0.to_bytes()
    }

    /// Rebuild an id from a stored key
    pub fn from_key(key: &[u8]) -> Result<Self> {
        let bytes: [u8; Self::BYTES] = key.try_into().map_err(|_| {
            ArtistError::Storage(format!("corrupt artist key of {} bytes", key.len()))
        })?;
        Ok(Self(Ulid::from_bytes(bytes)))
    }
}

impl FromStr for ArtistId {
    type Err = ArtistError;

    fn from_str(s: &str) -> Result<Self> {
        Ulid::from_string(s)
            .map(Self)
            .map_err(|_| ArtistError::InvalidId(s.to_string()))
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing ids, even within the same millisecond
pub struct IdGenerator {
    inner: Mutex<Generator>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Generator::new()),
        }
    }

    pub fn next_id(&self) -> Result<ArtistId> {
        self.inner
            .lock()
            .generate()
            .map(ArtistId)
            .map_err(|e| ArtistError::Storage(format!("id generation failed: {}", e)))
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
