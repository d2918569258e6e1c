//! List-request filter parsing
//!
//! Raw query parameters arrive string-typed and optional; parsing turns
//! them into an `ArtistFilter` where `None` marks an unconstrained field
//! rather than a zero-value sentinel.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Page size applied when the request does not name one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Raw, string-typed query parameters of a list request.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub genre: Option<String>,
    pub born: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Filter applied to one list request.
///
/// Constructed per request and discarded with it. Negative `limit`/`offset`
/// values pass through here and are clamped by the query engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistFilter {
    /// Exact-match genre constraint; `None` = unconstrained
    pub genre: Option<String>,
    /// Exact-match founding-year constraint; `None` = unconstrained
    pub born: Option<i32>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ArtistFilter {
    fn default() -> Self {
        Self {
            genre: None,
            born: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl ArtistFilter {
    /// Parse raw request parameters, applying pagination defaults.
    ///
    /// An empty string is treated the same as an absent parameter, so
    /// `?genre=&limit=` means "unconstrained, default page size".
    pub fn from_params(params: ListParams) -> Result<Self> {
        let limit = match params.limit.as_deref() {
            None | Some("") => DEFAULT_LIMIT,
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::InvalidArgument("limit must be an integer".to_string()))?,
        };

        let offset = match params.offset.as_deref() {
            None | Some("") => 0,
            Some(raw) => raw
                .parse()
                .map_err(|_| Error::InvalidArgument("offset must be an integer".to_string()))?,
        };

        let born = match params.born.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse()
                    .map_err(|_| Error::InvalidArgument("born must be an integer".to_string()))?,
            ),
        };

        let genre = params.genre.filter(|genre| !genre.is_empty());

        Ok(Self {
            genre,
            born,
            limit,
            offset,
        })
    }
}
