//! Field validation for candidate artist records
//!
//! Every rule is checked and every violation reported; the validator never
//! stops at the first failure, so one response names all the offending
//! fields at once.

use crate::error::Violation;
use crate::model::{Artist, ArtistDraft};

/// Lower bound (exclusive) for the founding year.
const BORN_AFTER: i32 = 1900;
/// Upper bound (exclusive) for the founding year.
const BORN_BEFORE: i32 = 2024;

fn required(field: &'static str) -> Violation {
    Violation {
        field,
        message: format!("{field} is required and must not be empty"),
    }
}

/// Check a draft against the field rules, producing a well-formed `Artist`
/// or the full list of violations.
pub fn validate(draft: ArtistDraft) -> Result<Artist, Vec<Violation>> {
    let mut violations = Vec::new();

    if draft.id.as_deref().map_or(true, str::is_empty) {
        violations.push(required("id"));
    }
    if draft.name.as_deref().map_or(true, str::is_empty) {
        violations.push(required("name"));
    }
    if draft.genre.as_deref().map_or(true, str::is_empty) {
        violations.push(required("genre"));
    }
    if draft.songs.is_none() {
        // The collection itself is required; emptiness is allowed.
        violations.push(Violation {
            field: "songs",
            message: "songs is required".to_string(),
        });
    }
    match draft.born {
        None => violations.push(Violation {
            field: "born",
            message: "born is required".to_string(),
        }),
        Some(born) if born <= BORN_AFTER => violations.push(Violation {
            field: "born",
            message: format!("born must be greater than {BORN_AFTER}"),
        }),
        Some(born) if born >= BORN_BEFORE => violations.push(Violation {
            field: "born",
            message: format!("born must be less than {BORN_BEFORE}"),
        }),
        Some(_) => {}
    }

    match (draft.id, draft.name, draft.born, draft.genre, draft.songs) {
        (Some(id), Some(name), Some(born), Some(genre), Some(songs))
            if violations.is_empty() =>
        {
            Ok(Artist {
                id,
                name,
                born,
                genre,
                songs,
            })
        }
        _ => Err(violations),
    }
}
