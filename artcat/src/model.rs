//! Artist domain model
//!
//! `Artist` is the stored record; `ArtistDraft` is the save-request payload,
//! in which every field is optional so the validator can report missing
//! fields itself instead of failing opaquely at deserialization.

use serde::{Deserialize, Serialize};

/// A catalog artist record, keyed by `id` in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Unique identifier, chosen by the caller
    pub id: String,
    /// Band or performer name
    pub name: String,
    /// Founding year (numeric is the canonical representation)
    pub born: i32,
    /// Genre label, exact-matched by the list filter
    pub genre: String,
    /// Popular songs; the collection is required but may be empty
    pub songs: Vec<String>,
}

/// Candidate artist as received by the save endpoint.
///
/// Field absence is distinguishable from an empty value, which lets the
/// validator accumulate presence errors across all fields in one pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistDraft {
    pub id: Option<String>,
    pub name: Option<String>,
    pub born: Option<i32>,
    pub genre: Option<String>,
    pub songs: Option<Vec<String>>,
}

impl From<Artist> for ArtistDraft {
    fn from(artist: Artist) -> Self {
        Self {
            id: Some(artist.id),
            name: Some(artist.name),
            born: Some(artist.born),
            genre: Some(artist.genre),
            songs: Some(artist.songs),
        }
    }
}
