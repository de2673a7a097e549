//! HTTP route handlers for the artist server.
//!
//! Every handler performs at most one store call and returns either its
//! success body or an [`ApiError`].

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::Json;

use super::error::ApiError;
use super::request::ArtistPayload;
use super::response::MessageResponse;
use crate::model::{
    Artist, ArtistFilter, ArtistId, ArtistSummary, ArtistUpdate, FindOptions, SortOrder,
};
use crate::store::ArtistStore;

/// Number of artists returned by `GET /artist`
pub const LIST_LIMIT: usize = 3;

pub const HEALTH_MESSAGE: &str = "all good here!";
pub const ROUTE_REACHED: &str = "Route reached, all good";
pub const ARTIST_CREATED: &str = "All good, artist document created";
pub const ARTIST_DELETED: &str = "All good, artist deleted";
pub const ARTIST_STOPPED_TOURING: &str = "All good, artist is no longer touring";

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ArtistStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ArtistStore>) -> Self {
        Self { store }
    }
}

/// Handle GET /
pub async fn handle_health() -> Json<MessageResponse> {
    Json(MessageResponse::new(HEALTH_MESSAGE))
}

/// Handle GET /patata/{bookId}/{ingrediente}/algo-estatico
///
/// Echoes the three places a client can put data (path, query, body) into
/// the log.
pub async fn handle_route_params(
    Path((book_id, ingrediente)): Path<(String, String)>,
    Query(query): Query<Vec<(String, String)>>,
    body: String,
) -> &'static str {
    tracing::info!(
        book_id = %book_id,
        ingrediente = %ingrediente,
        query = ?query,
        body = %body,
        "Route params received"
    );
    ROUTE_REACHED
}

/// Handle POST /artist
pub async fn handle_create(
    State(state): State<AppState>,
    ArtistPayload(input): ArtistPayload,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], &'static str), ApiError> {
    let fields = input.validate()?;
    let artist = state.store.insert(fields).await?;

    tracing::info!(id = %artist.id, name = %artist.name, "Artist created");

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/artist/{}", artist.id))],
        ARTIST_CREATED,
    ))
}

/// Handle GET /artist
pub async fn handle_list(State(state): State<AppState>) -> Result<Json<Vec<ArtistSummary>>, ApiError> {
    let options = FindOptions::default()
        .sort(SortOrder::AwardsDesc)
        .limit(LIST_LIMIT);

    let artists = state.store.find(&ArtistFilter::all(), &options).await?;

    Ok(Json(artists.iter().map(Artist::summary).collect()))
}

/// Handle GET /search
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Artist>>, ApiError> {
    let filter = ArtistFilter::from_query_pairs(params)?;
    tracing::debug!(filter = ?filter, "Searching artists");

    let artists = state.store.find(&filter, &FindOptions::default()).await?;

    Ok(Json(artists))
}

/// Handle GET /artist/{artistId}
pub async fn handle_get(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> Result<Json<Option<Artist>>, ApiError> {
    let id: ArtistId = artist_id.parse()?;

    let artist = state.store.find_by_id(id).await?;

    Ok(Json(artist))
}

/// Handle DELETE /artist/{artistId}
pub async fn handle_delete(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id: ArtistId = artist_id.parse()?;

    let removed = state.store.delete(id).await?;
    tracing::info!(id = %id, removed, "Artist delete handled");

    Ok(ARTIST_DELETED)
}

/// Handle PUT /artist/{artistId}
pub async fn handle_replace(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
    ArtistPayload(input): ArtistPayload,
) -> Result<Json<Option<Artist>>, ApiError> {
    let id: ArtistId = artist_id.parse()?;
    let fields = input.validate()?;

    let artist = state.store.update(id, ArtistUpdate::Replace(fields)).await?;

    Ok(Json(artist))
}

/// Handle PATCH /artist/{artistId}/is-touring-false
pub async fn handle_stop_touring(
    State(state): State<AppState>,
    Path(artist_id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id: ArtistId = artist_id.parse()?;

    let artist = state.store.update(id, ArtistUpdate::SetTouring(false)).await?;
    tracing::info!(id = %id, found = artist.is_some(), "Artist touring flag cleared");

    Ok(ARTIST_STOPPED_TOURING)
}
