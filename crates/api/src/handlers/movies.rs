//! Handlers for the movie catalogue.
//!
//! Write handlers validate the body into a `NewMovie` before the store is
//! touched. Responses carry the bare movie record (no envelope).

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::movie::{Movie, MOVIE_ENTITY};
use marquee_core::store::parse_limit;
use marquee_core::types::MovieId;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::{MovieBody, MovieIdPath};
use crate::query::ListMoviesParams;
use crate::state::AppState;

/// Body returned by a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

fn not_found(id: MovieId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: MOVIE_ENTITY,
        id,
    })
}

/// POST /api/movie
///
/// Create a movie. All three fields must be present and non-empty.
pub async fn create_movie(
    State(state): State<AppState>,
    MovieBody(input): MovieBody,
) -> AppResult<impl IntoResponse> {
    let new_movie = input.into_new_movie()?;
    let movie = state.store.insert(&new_movie).await?;

    tracing::info!(movie_id = %movie.id, moviename = %movie.moviename, "Movie created");

    Ok((StatusCode::CREATED, Json(movie)))
}

/// GET /api/movie?limit=N
///
/// The query is decoded as raw pairs so a repeated `limit` does not reject
/// the request.
pub async fn list_movies(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<Vec<Movie>>> {
    let Query(pairs) = query.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let params = ListMoviesParams::from_pairs(pairs);
    let limit = parse_limit(params.limit.as_deref());
    let movies = state.store.list(limit).await?;

    Ok(Json(movies))
}

/// GET /api/movie/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    MovieIdPath(id): MovieIdPath,
) -> AppResult<Json<Movie>> {
    let movie = state.store.find_by_id(id).await?.ok_or_else(|| not_found(id))?;

    Ok(Json(movie))
}

/// PUT /api/movie/{id}
///
/// Replace all three fields of an existing movie. The identifier is kept.
pub async fn update_movie(
    State(state): State<AppState>,
    MovieIdPath(id): MovieIdPath,
    MovieBody(input): MovieBody,
) -> AppResult<Json<Movie>> {
    let new_movie = input.into_new_movie()?;
    let movie = state
        .store
        .replace(id, &new_movie)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(movie_id = %id, moviename = %movie.moviename, "Movie updated");

    Ok(Json(movie))
}

/// DELETE /api/movie/{id}
pub async fn delete_movie(
    State(state): State<AppState>,
    MovieIdPath(id): MovieIdPath,
) -> AppResult<Json<DeleteResponse>> {
    if !state.store.delete(id).await? {
        return Err(not_found(id));
    }

    tracing::info!(movie_id = %id, "Movie deleted");

    Ok(Json(DeleteResponse {
        message: "Movie deleted successfully",
    }))
}
