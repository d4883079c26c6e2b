//! Query parameter types for API handlers.

/// Query parameters for `GET /api/movie` (`?limit=`).
///
/// `limit` is kept as raw text so that a non-numeric value means "no limit"
/// instead of rejecting the request. See [`marquee_core::store::parse_limit`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ListMoviesParams {
    pub limit: Option<String>,
}

impl ListMoviesParams {
    /// Build from decoded `key=value` pairs.
    ///
    /// A repeated `limit` is ambiguous and is treated as absent.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut limits = pairs
            .into_iter()
            .filter(|(key, _)| key == "limit")
            .map(|(_, value)| value);
        let limit = match (limits.next(), limits.next()) {
            (Some(value), None) => Some(value),
            _ => None,
        };
        Self { limit }
    }
}
