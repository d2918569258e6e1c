//! # artcat - Artist Catalog Service
//!
//! In-memory artist catalog exposed over HTTP: filtered and paginated
//! listing, single-record fetch, per-artist song listing, and validated
//! create-or-replace.
//!
//! The request pipeline is parse (`filter`) -> validate (`validate`) or
//! query (`query`) -> store access (`store`) -> response shaping (`api`).

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod filter;
pub mod model;
pub mod query;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
pub use store::ArtistStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// The in-memory catalog; sole owner of all artist records
    pub store: Arc<ArtistStore>,
}

impl AppState {
    /// Create new application state around an existing store
    pub fn new(store: Arc<ArtistStore>) -> Self {
        Self { store }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/artist/list", get(api::list_artists))
        .route("/artist/save", post(api::save_artist))
        .route("/artist/:id", get(api::get_artist))
        .route("/artist/:id/song/list", get(api::get_artist_songs))
        .route("/health", get(api::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
