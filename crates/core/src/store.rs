//! Storage seam for movies.
//!
//! [`MovieStore`] is implemented by every backend (PostgreSQL in production,
//! in-memory for tests). Handlers hold it as `Arc<dyn MovieStore>`, so the
//! trait uses `async_trait` to stay object safe.

use async_trait::async_trait;

use crate::movie::{Movie, NewMovie};
use crate::types::MovieId;

/// Boxed error from a storage backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Any failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage backend error: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    /// Wrap a backend error.
    pub fn backend(err: impl Into<BoxError>) -> Self {
        Self::Backend(err.into())
    }
}

/// CRUD access to the movie collection.
///
/// Lookups by identifier return `None` (or `false` for deletes) when no
/// movie matches; `Err` is reserved for backend failures.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Persist a new movie under a freshly assigned identifier.
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, StoreError>;

    /// List movies in ascending identifier order, at most `limit` of them.
    async fn list(&self, limit: Option<u32>) -> Result<Vec<Movie>, StoreError>;

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, StoreError>;

    /// Replace the three mutable fields of an existing movie.
    async fn replace(&self, id: MovieId, movie: &NewMovie) -> Result<Option<Movie>, StoreError>;

    /// Remove a movie. Returns `true` if a row was deleted.
    async fn delete(&self, id: MovieId) -> Result<bool, StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Interpret the raw `limit` query value.
///
/// Absent, non-numeric, zero, and negative values all mean "no limit".
pub fn parse_limit(raw: Option<&str>) -> Option<u32> {
    let value: i64 = raw?.trim().parse().ok()?;
    if value <= 0 {
        return None;
    }
    Some(u32::try_from(value).unwrap_or(u32::MAX))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_limit_is_kept() {
        assert_eq!(parse_limit(Some("5")), Some(5));
        assert_eq!(parse_limit(Some(" 12 ")), Some(12));
    }

    #[test]
    fn absent_limit_is_unbounded() {
        assert_eq!(parse_limit(None), None);
    }

    #[test]
    fn zero_and_negative_limits_are_unbounded() {
        assert_eq!(parse_limit(Some("0")), None);
        assert_eq!(parse_limit(Some("-3")), None);
    }

    #[test]
    fn non_numeric_limit_is_unbounded() {
        assert_eq!(parse_limit(Some("ten")), None);
        assert_eq!(parse_limit(Some("")), None);
        assert_eq!(parse_limit(Some("2.5")), None);
    }

    #[test]
    fn oversized_limit_saturates() {
        assert_eq!(parse_limit(Some("99999999999")), Some(u32::MAX));
    }

    #[test]
    fn backend_error_keeps_source_message() {
        let err = StoreError::backend("connection reset");
        assert_eq!(err.to_string(), "Storage backend error: connection reset");
    }
}
