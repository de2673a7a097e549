//! HTTP Module
//!
//! REST surface over the artist store.
//!
//! ## Architecture
//! ```text
//!   request
//!      │
//!      ▼
//!   TracingLayer ─► CorsLayer ─► Router ─┬─► handler ─► ArtistStore
//!                                        └─► ServeDir (static files)
//! ```
//!
//! ## Routes
//! - `GET    /`                                     health message
//! - `GET    /patata/{bookId}/{ingrediente}/algo-estatico`  param echo
//! - `POST   /artist`                               create
//! - `GET    /artist`                               top 3 by awards
//! - `GET    /search`                               filtered find
//! - `GET    /artist/{artistId}`                    fetch by id
//! - `PUT    /artist/{artistId}`                    full update
//! - `DELETE /artist/{artistId}`                    delete
//! - `PATCH  /artist/{artistId}/is-touring-false`   partial update

mod error;
mod handlers;
mod middleware;
mod request;
mod response;
mod server;

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::Config;
use crate::error::Result;

pub use error::ApiError;
pub use handlers::{
    AppState, ARTIST_CREATED, ARTIST_DELETED, ARTIST_STOPPED_TOURING, HEALTH_MESSAGE, LIST_LIMIT,
    ROUTE_REACHED,
};
pub use middleware::{cors_layer, TracingLayer};
pub use request::ArtistPayload;
pub use response::{ErrorResponse, MessageResponse};
pub use server::{ArtistServer, ShutdownHandle};

/// Build the full application: routes, static fallback and middleware
pub fn build_router(state: AppState, config: &Config) -> Result<Router> {
    let router = Router::new()
        .route("/", get(handlers::handle_health))
        .route(
            "/patata/{book_id}/{ingrediente}/algo-estatico",
            get(handlers::handle_route_params),
        )
        .route(
            "/artist",
            post(handlers::handle_create).get(handlers::handle_list),
        )
        .route("/search", get(handlers::handle_search))
        .route(
            "/artist/{artist_id}",
            get(handlers::handle_get)
                .put(handlers::handle_replace)
                .delete(handlers::handle_delete),
        )
        .route(
            "/artist/{artist_id}/is-touring-false",
            patch(handlers::handle_stop_touring),
        )
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(cors_layer(&config.cors_origin)?)
        .layer(TracingLayer::new())
        .with_state(state);

    Ok(router)
}
