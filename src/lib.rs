//! # Artist API
//!
//! A small REST service exposing CRUD operations over Artist documents:
//! - JSON and form bodies, validated against the Artist schema
//! - Unique artist names, non-negative award counts, a closed genre set
//! - Allow-listed, typed search filters
//! - Pluggable document store (in-memory or sled)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     HTTP Server (axum)                       │
//! │        logging · CORS · static files · body parsing          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Route Handlers                            │
//! │          (one store call per request, ApiError)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  Arc<dyn ArtistStore>
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  InMemory   │          │    Sled     │
//!   │  (RwLock)   │          │ (2 trees)   │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod model;
pub mod store;
pub mod http;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ArtistError, Result};
pub use config::{Config, StoreConfig};
pub use http::{build_router, AppState, ArtistServer};
pub use model::{Artist, ArtistFilter, ArtistId, ArtistInput, Genre, NewArtist};
pub use store::{open_store, ArtistStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the Artist API
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
