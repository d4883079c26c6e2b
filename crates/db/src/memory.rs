use std::collections::BTreeMap;

use async_trait::async_trait;
use marquee_core::movie::{Movie, NewMovie};
use marquee_core::store::{MovieStore, StoreError};
use marquee_core::types::{new_movie_id, MovieId};
use tokio::sync::RwLock;

/// In-memory movie store.
///
/// Intended for tests and local runs without a database. Movies are kept in
/// identifier order, matching the PostgreSQL store's listing order.
#[derive(Debug, Default)]
pub struct InMemoryMovieStore {
    movies: RwLock<BTreeMap<MovieId, Movie>>,
}

impl InMemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

#[async_trait]
impl MovieStore for InMemoryMovieStore {
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, StoreError> {
        let movie = Movie::from_new(new_movie_id(), movie.clone());
        self.movies.write().await.insert(movie.id, movie.clone());
        Ok(movie)
    }

    async fn list(&self, limit: Option<u32>) -> Result<Vec<Movie>, StoreError> {
        let movies = self.movies.read().await;
        let take = limit.map_or(usize::MAX, |n| n as usize);
        Ok(movies.values().take(take).cloned().collect())
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, StoreError> {
        Ok(self.movies.read().await.get(&id).cloned())
    }

    async fn replace(&self, id: MovieId, movie: &NewMovie) -> Result<Option<Movie>, StoreError> {
        let mut movies = self.movies.write().await;
        Ok(movies.get_mut(&id).map(|existing| {
            existing.apply(movie.clone());
            existing.clone()
        }))
    }

    async fn delete(&self, id: MovieId) -> Result<bool, StoreError> {
        Ok(self.movies.write().await.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
