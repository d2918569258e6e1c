//! In-memory artist store
//!
//! The store owns the record map outright; everything else goes through
//! `get`/`upsert`/`all`. A std `RwLock` guards the map: accesses are brief
//! and synchronous, and the lock is never held across an await point.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::model::Artist;

/// The catalog's sole durable state: artist records keyed by `id`.
#[derive(Debug, Default)]
pub struct ArtistStore {
    artists: RwLock<HashMap<String, Artist>>,
}

impl ArtistStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the demo catalog.
    pub fn with_seed_catalog() -> Self {
        let store = Self::new();
        for artist in seed_catalog() {
            store.upsert(artist);
        }
        store
    }

    /// Look up one record. Absence is a value, not an error.
    pub fn get(&self, id: &str) -> Option<Artist> {
        self.artists.read().unwrap().get(id).cloned()
    }

    /// Insert or replace, keyed by the record's `id`.
    pub fn upsert(&self, artist: Artist) {
        self.artists
            .write()
            .unwrap()
            .insert(artist.id.clone(), artist);
    }

    /// Unordered snapshot of every record, for the query engine.
    pub fn all(&self) -> Vec<Artist> {
        self.artists.read().unwrap().values().cloned().collect()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.artists.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The three-artist demo catalog the service ships with.
fn seed_catalog() -> Vec<Artist> {
    vec![
        Artist {
            id: "1".to_string(),
            name: "30 Seconds To Mars".to_string(),
            born: 1998,
            genre: "alternative".to_string(),
            songs: vec![
                "The Kill".to_string(),
                "A Beautiful Lie".to_string(),
                "Attack".to_string(),
                "Live Like A Dream".to_string(),
            ],
        },
        Artist {
            id: "2".to_string(),
            name: "Garbage".to_string(),
            born: 1994,
            genre: "alternative".to_string(),
            songs: vec![
                "Queer".to_string(),
                "Shut Your Mouth".to_string(),
                "Cup of Coffee".to_string(),
                "Til the Day I Die".to_string(),
            ],
        },
        Artist {
            id: "3".to_string(),
            name: "Queen".to_string(),
            born: 1970,
            genre: "rock".to_string(),
            songs: vec![
                "We Will Rock You".to_string(),
                "I want to break free".to_string(),
                "We are the champions".to_string(),
            ],
        },
    ]
}
