//! Artist catalog endpoints
//!
//! Orchestration only: parse the request, invoke the validator or the query
//! engine, touch the store, shape the response. All catalog logic lives in
//! the `filter`, `query`, `validate`, and `store` modules.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::filter::{ArtistFilter, ListParams};
use crate::model::{Artist, ArtistDraft};
use crate::query;
use crate::validate::validate;
use crate::AppState;

/// Response body for a successful save.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: String,
    pub id: String,
}

/// GET /artist/list - filtered, paginated catalog listing
///
/// Results are a JSON array in `id` order; an empty match is a `200` with
/// an empty array, not an error.
pub async fn list_artists(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Artist>>> {
    let filter = ArtistFilter::from_params(params).map_err(|e| {
        warn!("rejected list request: {e}");
        e
    })?;

    let artists = query::query(state.store.all(), &filter);
    debug!("list request matched {} artist(s)", artists.len());

    Ok(Json(artists))
}

/// GET /artist/:id - fetch a single record
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Artist>> {
    match state.store.get(&id) {
        Some(artist) => Ok(Json(artist)),
        None => Err(Error::NotFound),
    }
}

/// GET /artist/:id/song/list - list one artist's songs
pub async fn get_artist_songs(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<String>>> {
    match state.store.get(&id) {
        Some(artist) => Ok(Json(artist.songs)),
        None => Err(Error::NotFound),
    }
}

/// POST /artist/save - validate and upsert a candidate record
///
/// Storing a record under an existing `id` replaces it in place.
pub async fn save_artist(
    State(state): State<AppState>,
    Json(draft): Json<ArtistDraft>,
) -> Result<(StatusCode, Json<SaveResponse>)> {
    let artist = validate(draft).map_err(|violations| {
        warn!(
            "rejected artist candidate with {} violation(s)",
            violations.len()
        );
        Error::Validation(violations)
    })?;

    let id = artist.id.clone();
    state.store.upsert(artist);
    info!("saved artist {id}");

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            status: "ok".to_string(),
            id,
        }),
    ))
}
