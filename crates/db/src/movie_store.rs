//! PostgreSQL-backed [`MovieStore`] over the `movies` table.

use async_trait::async_trait;
use marquee_core::movie::{Movie, NewMovie};
use marquee_core::store::{MovieStore, StoreError};
use marquee_core::types::{new_movie_id, MovieId};
use sqlx::FromRow;

use crate::DbPool;

/// Column list for `movies` queries.
const COLUMNS: &str = "id, moviename, description, image";

/// A row from the `movies` table.
#[derive(Debug, FromRow)]
struct MovieRow {
    id: MovieId,
    moviename: String,
    description: String,
    image: String,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            moviename: row.moviename,
            description: row.description,
            image: row.image,
        }
    }
}

/// Movie storage on a shared connection pool.
#[derive(Debug, Clone)]
pub struct PgMovieStore {
    pool: DbPool,
}

impl PgMovieStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MovieStore for PgMovieStore {
    async fn insert(&self, movie: &NewMovie) -> Result<Movie, StoreError> {
        let query = format!(
            "INSERT INTO movies (id, moviename, description, image) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(new_movie_id())
            .bind(&movie.moviename)
            .bind(&movie.description)
            .bind(&movie.image)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.into())
    }

    /// `LIMIT NULL` is the same as no limit in PostgreSQL.
    async fn list(&self, limit: Option<u32>) -> Result<Vec<Movie>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM movies ORDER BY id LIMIT $1");
        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .bind(limit.map(i64::from))
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(rows.into_iter().map(Movie::from).collect())
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.map(Movie::from))
    }

    async fn replace(&self, id: MovieId, movie: &NewMovie) -> Result<Option<Movie>, StoreError> {
        let query = format!(
            "UPDATE movies SET \
                 moviename = $2, \
                 description = $3, \
                 image = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .bind(&movie.moviename)
            .bind(&movie.description)
            .bind(&movie.image)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.map(Movie::from))
    }

    async fn delete(&self, id: MovieId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::backend)
    }
}
