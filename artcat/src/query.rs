//! Query engine: predicate filtering, deterministic ordering, pagination
//!
//! A pure function over a snapshot of the store; it never fails. The result
//! keeps its `id` order all the way to serialization, so pagination windows
//! are reproducible regardless of the store's internal iteration order.

use crate::filter::ArtistFilter;
use crate::model::Artist;

/// Apply `filter` to a snapshot of the catalog.
///
/// Selection is exact-match on `genre` and `born`; survivors are sorted by
/// `id` (lexicographic, total), then the `[offset, offset + limit)` window
/// is taken with both bounds clamped to the matching set. Negative `offset`
/// or `limit` values act as zero.
pub fn query(mut artists: Vec<Artist>, filter: &ArtistFilter) -> Vec<Artist> {
    artists.retain(|artist| {
        filter.genre.as_ref().map_or(true, |g| *g == artist.genre)
            && filter.born.map_or(true, |b| b == artist.born)
    });
    artists.sort_by(|a, b| a.id.cmp(&b.id));

    let len = artists.len();
    let start = usize::try_from(filter.offset.max(0))
        .unwrap_or(usize::MAX)
        .min(len);
    let limit = usize::try_from(filter.limit.max(0)).unwrap_or(usize::MAX);
    let end = start.saturating_add(limit).min(len);

    artists.truncate(end);
    artists.drain(..start);
    artists
}
